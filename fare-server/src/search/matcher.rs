//! Route matching against the catalog.

use tracing::debug;

use crate::domain::{Offering, Place};

/// Result of matching the catalog against location tokens.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Matching offerings, in catalog order.
    pub offerings: Vec<Offering>,

    /// Whether the location fallback fired: the tokens matched nothing,
    /// so the full catalog was returned instead.
    pub fell_back: bool,
}

/// Match the catalog by origin and destination tokens.
///
/// An offering matches the origin filter if `origin_token` is empty or is
/// a case-insensitive substring of the offering's origin code or display
/// name; same rule independently for the destination. Catalog order is
/// preserved.
///
/// Fallback policy: if applying non-empty tokens yields nothing, the full
/// catalog is returned with `fell_back = true`. Showing everything beats
/// showing an empty page when the user mistypes a city; callers that need
/// to label the result differently check the flag.
///
/// Tokens are expected to already be normalized (see
/// [`normalize`](super::normalize)).
pub fn match_route(
    catalog: &[Offering],
    origin_token: &str,
    destination_token: &str,
) -> MatchOutcome {
    if origin_token.is_empty() && destination_token.is_empty() {
        return MatchOutcome {
            offerings: catalog.to_vec(),
            fell_back: false,
        };
    }

    let offerings: Vec<Offering> = catalog
        .iter()
        .filter(|o| {
            place_matches(&o.origin, origin_token) && place_matches(&o.destination, destination_token)
        })
        .cloned()
        .collect();

    if offerings.is_empty() {
        debug!(
            origin = origin_token,
            destination = destination_token,
            "no route matches, falling back to full catalog"
        );
        return MatchOutcome {
            offerings: catalog.to_vec(),
            fell_back: true,
        };
    }

    MatchOutcome {
        offerings,
        fell_back: false,
    }
}

/// Whether a token matches a place. Empty tokens match everything.
fn place_matches(place: &Place, token: &str) -> bool {
    if token.is_empty() {
        return true;
    }

    place.code.as_str().to_lowercase().contains(token)
        || place.name.to_lowercase().contains(token)
}
