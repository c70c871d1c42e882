//! The loaded-catalog handle.
//!
//! Owns the canonical unfiltered offering list plus the facet options
//! derived from it. Both are replaced wholesale on reload; there is no
//! partial invalidation. Reloads carry a generation number so a slow
//! load that was superseded by a newer one is discarded instead of
//! clobbering fresher data.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::CachedCatalogClient;
use crate::domain::Offering;
use crate::search::{FacetOptions, derive_facet_options};

use super::sample::sample_catalog;
use super::store::read_override;

/// Where the currently loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Local override blob.
    Override,

    /// Remote fetch.
    Remote,

    /// Built-in deterministic sample.
    Sample,
}

impl CatalogOrigin {
    /// Stable string form for logs and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogOrigin::Override => "override",
            CatalogOrigin::Remote => "remote",
            CatalogOrigin::Sample => "sample",
        }
    }
}

/// Configuration for catalog loading.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// URL of the remote catalog document, if any.
    pub url: Option<String>,

    /// Path to a local override blob, if any. Checked before the remote.
    pub override_path: Option<PathBuf>,
}

/// An immutable view of one loaded catalog.
#[derive(Clone)]
pub struct CatalogSnapshot {
    /// The full unfiltered offering list. Shared, never mutated.
    pub offerings: Arc<Vec<Offering>>,

    /// Facet options derived from the full list at load time.
    pub facets: FacetOptions,

    /// Which source supplied this load.
    pub origin: CatalogOrigin,
}

/// Installed snapshot plus the generation that produced it.
struct Installed {
    snapshot: CatalogSnapshot,
    generation: u64,
}

/// The catalog source: override → remote → sample, with wholesale
/// replacement on reload.
pub struct CatalogSource {
    config: CatalogConfig,
    client: Arc<CachedCatalogClient>,
    inner: RwLock<Installed>,
    generation: AtomicU64,
}

impl CatalogSource {
    /// Create a new source, initially holding the sample catalog so a
    /// snapshot is always available before the first reload completes.
    pub fn new(client: Arc<CachedCatalogClient>, config: CatalogConfig) -> Self {
        let offerings = Arc::new(sample_catalog());
        let facets = derive_facet_options(&offerings);

        Self {
            config,
            client,
            inner: RwLock::new(Installed {
                snapshot: CatalogSnapshot {
                    offerings,
                    facets,
                    origin: CatalogOrigin::Sample,
                },
                generation: 0,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// The currently installed catalog.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.inner.read().await.snapshot.clone()
    }

    /// Reload the catalog from the configured sources.
    ///
    /// Never errors: each source failure falls through to the next, and
    /// the sample catalog always succeeds. Returns the origin of whatever
    /// is installed once this reload has settled, which may belong to a
    /// newer reload that superseded this one.
    pub async fn reload(&self) -> CatalogOrigin {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (offerings, origin) = self.load().await;
        self.install(generation, offerings, origin).await
    }

    /// Install a loaded catalog, unless a newer generation got there
    /// first. Returns the origin of whatever ends up installed.
    async fn install(
        &self,
        generation: u64,
        offerings: Arc<Vec<Offering>>,
        origin: CatalogOrigin,
    ) -> CatalogOrigin {
        let facets = derive_facet_options(&offerings);

        let mut guard = self.inner.write().await;
        if generation > guard.generation {
            info!(
                origin = origin.as_str(),
                count = offerings.len(),
                "catalog loaded"
            );
            guard.snapshot = CatalogSnapshot {
                offerings,
                facets,
                origin,
            };
            guard.generation = generation;
        } else {
            debug!(generation, installed = guard.generation, "stale reload discarded");
        }

        guard.snapshot.origin
    }

    /// Try the sources in order: override, remote, sample.
    async fn load(&self) -> (Arc<Vec<Offering>>, CatalogOrigin) {
        if let Some(path) = &self.config.override_path {
            if let Some(offerings) = read_override(path).await {
                return (Arc::new(offerings), CatalogOrigin::Override);
            }
        }

        if let Some(url) = &self.config.url {
            match self.client.get_catalog(url).await {
                Ok(offerings) => return (offerings, CatalogOrigin::Remote),
                Err(e) => {
                    warn!(url = %url, error = %e, "catalog fetch failed, using sample");
                }
            }
        }

        (Arc::new(sample_catalog()), CatalogOrigin::Sample)
    }
}
