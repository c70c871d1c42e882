//! Askama templates for the web frontend.

use askama::Template;

use crate::present::OfferingView;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Carriers in the loaded catalog, for the carrier selector.
    pub carriers: Vec<String>,
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Offer list fragment (search results).
#[derive(Template)]
#[template(path = "offer_list.html")]
pub struct OfferListTemplate {
    pub offerings: Vec<OfferingView>,

    /// Whether the route matcher fell back to the full catalog.
    pub location_fallback: bool,
}
