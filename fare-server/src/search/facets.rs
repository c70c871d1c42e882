//! Facet filters over matched offerings.

use crate::domain::Offering;

use super::config::{PipelineConfig, StopsSemantics};

/// Selected value of the stops facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopsFacet {
    /// Pass everything.
    #[default]
    Any,

    /// Keep offerings with this stop count, interpreted per
    /// [`StopsSemantics`].
    Count(u32),
}

/// User-selected facet filters.
///
/// Each facet is an independent predicate; predicates compose by AND.
/// `None`/`Any` means the facet is not applied. Unrecognized facet keys
/// never reach this type: the web DTO simply has no field for them.
#[derive(Debug, Clone, Default)]
pub struct Facets {
    /// Stop count filter.
    pub stops: StopsFacet,

    /// Exact (case-sensitive) carrier name.
    pub carrier: Option<String>,

    /// Price ceiling, inclusive.
    pub max_price: Option<u64>,
}

impl Facets {
    /// Whether an offering passes all selected facets.
    pub fn passes(&self, offering: &Offering, config: &PipelineConfig) -> bool {
        let stops_ok = match self.stops {
            StopsFacet::Any => true,
            StopsFacet::Count(n) => match config.stops_semantics {
                StopsSemantics::Exact => offering.stops == n,
                StopsSemantics::AtMost => offering.stops <= n,
            },
        };

        let carrier_ok = match &self.carrier {
            None => true,
            Some(c) => &offering.carrier == c,
        };

        let price_ok = match self.max_price {
            None => true,
            Some(ceiling) => offering.price <= ceiling,
        };

        stops_ok && carrier_ok && price_ok
    }
}

/// Apply facet filters, preserving input order.
///
/// Never errors: facets that are not selected pass everything, and an
/// empty result is a normal terminal state ("no offerings satisfy your
/// filters"), distinct from the route-match fallback.
pub fn apply_facets(
    offerings: &[Offering],
    facets: &Facets,
    config: &PipelineConfig,
) -> Vec<Offering> {
    offerings
        .iter()
        .filter(|o| facets.passes(o, config))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Place, PlaceCode};
    use chrono::{TimeZone, Utc};

    fn offering(id: &str, stops: u32, carrier: &str, price: u64) -> Offering {
        Offering::new(
            id,
            Place::new(PlaceCode::parse("DEL").unwrap(), "Delhi"),
            Place::new(PlaceCode::parse("BOM").unwrap(), "Mumbai"),
            Utc.with_ymd_and_hms(2025, 6, 1, 6, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            stops,
            carrier,
            price,
            None,
        )
        .unwrap()
    }

    fn sample() -> Vec<Offering> {
        vec![
            offering("A", 0, "IndiGo", 4500),
            offering("B", 1, "Air India", 3900),
            offering("C", 0, "Vistara", 5200),
            offering("D", 2, "IndiGo", 3100),
        ]
    }

    fn ids(offerings: &[Offering]) -> Vec<&str> {
        offerings.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn default_facets_pass_everything() {
        let config = PipelineConfig::default();
        let result = apply_facets(&sample(), &Facets::default(), &config);
        assert_eq!(ids(&result), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn stops_exact() {
        let config = PipelineConfig::default();
        let facets = Facets {
            stops: StopsFacet::Count(0),
            ..Facets::default()
        };
        let result = apply_facets(&sample(), &facets, &config);
        assert_eq!(ids(&result), vec!["A", "C"]);
    }

    #[test]
    fn stops_at_most() {
        let config = PipelineConfig {
            stops_semantics: StopsSemantics::AtMost,
            ..PipelineConfig::default()
        };
        let facets = Facets {
            stops: StopsFacet::Count(1),
            ..Facets::default()
        };
        let result = apply_facets(&sample(), &facets, &config);
        assert_eq!(ids(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn carrier_is_exact_and_case_sensitive() {
        let config = PipelineConfig::default();
        let facets = Facets {
            carrier: Some("IndiGo".to_string()),
            ..Facets::default()
        };
        let result = apply_facets(&sample(), &facets, &config);
        assert_eq!(ids(&result), vec!["A", "D"]);

        let facets = Facets {
            carrier: Some("indigo".to_string()),
            ..Facets::default()
        };
        let result = apply_facets(&sample(), &facets, &config);
        assert!(result.is_empty());
    }

    #[test]
    fn max_price_is_inclusive() {
        let config = PipelineConfig::default();
        let facets = Facets {
            max_price: Some(3900),
            ..Facets::default()
        };
        let result = apply_facets(&sample(), &facets, &config);
        assert_eq!(ids(&result), vec!["B", "D"]);
    }

    #[test]
    fn facets_compose_by_and() {
        let config = PipelineConfig::default();
        let facets = Facets {
            stops: StopsFacet::Count(0),
            carrier: Some("IndiGo".to_string()),
            max_price: Some(5000),
        };
        let result = apply_facets(&sample(), &facets, &config);
        assert_eq!(ids(&result), vec!["A"]);
    }

    #[test]
    fn empty_result_is_normal() {
        let config = PipelineConfig::default();
        let facets = Facets {
            max_price: Some(100),
            ..Facets::default()
        };
        let result = apply_facets(&sample(), &facets, &config);
        assert!(result.is_empty());
    }
}
