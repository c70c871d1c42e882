//! Facet option derivation.
//!
//! Filter selectors in the UI offer the values actually present in the
//! catalog. Options are derived from the full pre-filter catalog once per
//! load, not on every filter change.

use std::collections::BTreeSet;

use crate::domain::Offering;

/// The distinct filter options a catalog offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    /// Distinct carrier names, sorted for a stable selector order.
    pub carriers: Vec<String>,
}

/// Derive the facet options present in a catalog.
///
/// Duplicates collapse; output order is alphabetical regardless of the
/// catalog's insertion order.
pub fn derive_facet_options(catalog: &[Offering]) -> FacetOptions {
    let carriers: BTreeSet<&str> = catalog.iter().map(|o| o.carrier.as_str()).collect();

    FacetOptions {
        carriers: carriers.into_iter().map(String::from).collect(),
    }
}
