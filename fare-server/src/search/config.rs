//! Pipeline configuration.

/// How the stops facet interprets a selected count.
///
/// The product pages historically disagreed: the list page filtered on an
/// exact stop count while the deals page treated "1 stop" as "at most one
/// stop". This is a deliberate configuration choice, not something to
/// resolve per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopsSemantics {
    /// `stops == n` only.
    Exact,

    /// `stops <= n`.
    AtMost,
}

/// Configuration parameters for the search pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Interpretation of the stops facet.
    pub stops_semantics: StopsSemantics,

    /// Whether an empty route match falls back to the full catalog.
    /// When disabled, a non-matching location query yields zero results.
    pub location_fallback: bool,

    /// Currency label prefixed to formatted prices.
    pub currency_label: String,

    /// Maximum number of results to present.
    pub max_results: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stops_semantics: StopsSemantics::Exact,
            location_fallback: true,
            currency_label: "₹".to_string(),
            max_results: 50,
        }
    }
}
