//! Pipeline orchestration.

use tracing::debug;

use crate::domain::Offering;

use super::config::PipelineConfig;
use super::facets::{Facets, apply_facets};
use super::matcher::match_route;
use super::normalize::normalize;
use super::sort::{SortKey, sort_offerings};

/// One search query: raw location text plus facet and sort selections.
///
/// Queries are plain immutable values threaded through the pipeline call;
/// there is no shared query state between requests.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Raw origin text as typed, possibly "City (CODE)" shaped.
    pub origin_text: String,

    /// Raw destination text as typed.
    pub destination_text: String,

    /// Facet selections.
    pub facets: Facets,

    /// Result ordering.
    pub sort_key: SortKey,
}

/// Result of running the pipeline.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Matched, filtered and sorted offerings; a fresh sequence owned by
    /// the caller.
    pub offerings: Vec<Offering>,

    /// Whether the route matcher fell back to the full catalog because
    /// the location tokens matched nothing.
    pub location_fallback: bool,
}

/// Run the full pipeline over a loaded catalog.
///
/// Pure and synchronous: normalize → match → filter → sort, each stage
/// producing a fresh sequence. The catalog is never mutated, so
/// concurrent queries against the same load are safe.
pub fn run(catalog: &[Offering], query: &SearchQuery, config: &PipelineConfig) -> SearchOutcome {
    let origin_token = normalize(&query.origin_text);
    let destination_token = normalize(&query.destination_text);

    let matched = match_route(catalog, &origin_token, &destination_token);

    let (route_matched, location_fallback) = if matched.fell_back && !config.location_fallback {
        // Fallback disabled: surface the genuine empty result.
        (Vec::new(), false)
    } else {
        (matched.offerings, matched.fell_back)
    };

    let filtered = apply_facets(&route_matched, &query.facets, config);
    let mut sorted = sort_offerings(&filtered, query.sort_key);
    sorted.truncate(config.max_results);

    debug!(
        origin = %origin_token,
        destination = %destination_token,
        results = sorted.len(),
        location_fallback,
        "pipeline run"
    );

    SearchOutcome {
        offerings: sorted,
        location_fallback,
    }
}
