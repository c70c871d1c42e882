//! The fare search pipeline.
//!
//! A pure, synchronous chain over a loaded catalog:
//! normalize the free-text location query, match offerings by route,
//! apply facet filters, then sort. Every stage returns a fresh sequence;
//! the catalog itself is never mutated, so repeated queries against the
//! same load are safe by construction.

mod config;
mod facets;
mod index;
mod matcher;
mod normalize;
mod pipeline;
mod sort;

pub use config::{PipelineConfig, StopsSemantics};
pub use facets::{Facets, StopsFacet, apply_facets};
pub use index::{FacetOptions, derive_facet_options};
pub use matcher::{MatchOutcome, match_route};
pub use normalize::normalize;
pub use pipeline::{SearchOutcome, SearchQuery, run};
pub use sort::{SortKey, sort_offerings};
