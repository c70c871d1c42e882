//! Web layer for the fare search server.
//!
//! Provides HTTP endpoints for searching offerings, account registration
//! and login, and cross-page booking state.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
