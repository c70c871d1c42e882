//! Catalog sourcing.
//!
//! The catalog is the full unfiltered set of offerings currently loaded.
//! It can come from three places, tried in order: a local override blob,
//! a remote fetch, and a deterministic built-in sample. Failures at one
//! level fall through to the next; loading never hard-errors.

mod error;
mod fetch;
mod sample;
mod source;
mod store;
mod wire;

pub use error::CatalogError;
pub use fetch::{CatalogClient, CatalogClientConfig};
pub use sample::sample_catalog;
pub use source::{CatalogConfig, CatalogOrigin, CatalogSnapshot, CatalogSource};
pub use store::{parse_override, read_override};
pub use wire::{ConvertError, OfferingDto, convert_catalog, convert_offering};
