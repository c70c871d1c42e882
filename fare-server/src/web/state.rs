//! Application state for the web layer.

use std::sync::Arc;

use crate::accounts::AccountStore;
use crate::catalog::CatalogSource;
use crate::kv::BookingStore;
use crate::search::PipelineConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The loaded catalog and its reload machinery
    pub catalog: Arc<CatalogSource>,

    /// Credential store
    pub accounts: Arc<AccountStore>,

    /// Cross-page booking state
    pub bookings: Arc<BookingStore>,

    /// Search pipeline configuration
    pub config: Arc<PipelineConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: CatalogSource,
        accounts: AccountStore,
        bookings: BookingStore,
        config: PipelineConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            accounts: Arc::new(accounts),
            bookings: Arc::new(bookings),
            config: Arc::new(config),
        }
    }
}
