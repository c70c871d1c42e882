//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::present::OfferingView;
use crate::search::{Facets, SearchQuery, SortKey, StopsFacet};

/// Request to search for offerings.
///
/// Every field is optional text straight off the query string. Facet
/// values that don't parse are treated as "any" rather than rejected,
/// and unknown query parameters are ignored entirely, keeping the
/// surface forward-compatible.
#[derive(Debug, Default, Deserialize)]
pub struct SearchOffersRequest {
    /// Free-text origin, possibly "City (CODE)" shaped
    pub origin: Option<String>,

    /// Free-text destination
    pub destination: Option<String>,

    /// Stop count filter: "any" or an integer
    pub stops: Option<String>,

    /// Carrier filter: "any" or an exact carrier name
    pub carrier: Option<String>,

    /// Price ceiling: "any" or an integer
    pub max_price: Option<String>,

    /// Sort key: "price", "duration", "departure", "arrival" or "none"
    pub sort: Option<String>,
}

impl SearchOffersRequest {
    /// Build the pipeline query this request describes.
    pub fn to_query(&self) -> SearchQuery {
        let stops = match self.stops.as_deref() {
            None | Some("any") | Some("") => StopsFacet::Any,
            Some(s) => s.parse().map(StopsFacet::Count).unwrap_or(StopsFacet::Any),
        };

        let carrier = self
            .carrier
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "any")
            .map(String::from);

        let max_price = match self.max_price.as_deref() {
            None | Some("any") | Some("") => None,
            Some(s) => s.parse().ok(),
        };

        SearchQuery {
            origin_text: self.origin.clone().unwrap_or_default(),
            destination_text: self.destination.clone().unwrap_or_default(),
            facets: Facets {
                stops,
                carrier,
                max_price,
            },
            sort_key: self
                .sort
                .as_deref()
                .map(SortKey::from_query)
                .unwrap_or_default(),
        }
    }
}

/// One offering in search results.
#[derive(Debug, Serialize)]
pub struct OfferResult {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub stops: String,
    pub carrier: String,
    pub price: String,
}

impl OfferResult {
    /// Create from a presented view record.
    pub fn from_view(view: &OfferingView) -> Self {
        Self {
            id: view.id.clone(),
            origin: view.origin.clone(),
            destination: view.destination.clone(),
            departure: view.departure.clone(),
            arrival: view.arrival.clone(),
            duration: view.duration.clone(),
            stops: view.stops.clone(),
            carrier: view.carrier.clone(),
            price: view.price.clone(),
        }
    }
}

/// Response for offering search.
#[derive(Debug, Serialize)]
pub struct SearchOffersResponse {
    /// Matching offerings, in final presentation order
    pub offerings: Vec<OfferResult>,

    /// Whether the location query matched nothing and the full catalog
    /// was returned instead
    pub location_fallback: bool,
}

/// Response for facet options.
#[derive(Debug, Serialize)]
pub struct FacetOptionsResponse {
    /// Distinct carriers in the loaded catalog
    pub carriers: Vec<String>,

    /// Where the catalog came from: "override", "remote" or "sample"
    pub catalog_origin: String,
}

/// Response for a catalog reload.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    /// Origin of the catalog installed after the reload settled
    pub catalog_origin: String,
}

/// Request to register an account.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub email: String,
}

/// Request to log in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Query for reading booking state.
#[derive(Debug, Deserialize)]
pub struct BookingGetRequest {
    pub key: String,
}

/// Request to write booking state.
#[derive(Debug, Deserialize)]
pub struct BookingSetRequest {
    pub key: String,
    pub value: serde_json::Value,
}

/// A booking state entry.
#[derive(Debug, Serialize)]
pub struct BookingEntry {
    pub key: String,
    pub value: serde_json::Value,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_is_the_default_query() {
        let query = SearchOffersRequest::default().to_query();

        assert_eq!(query.origin_text, "");
        assert_eq!(query.destination_text, "");
        assert_eq!(query.facets.stops, StopsFacet::Any);
        assert_eq!(query.facets.carrier, None);
        assert_eq!(query.facets.max_price, None);
        assert_eq!(query.sort_key, SortKey::None);
    }

    #[test]
    fn parses_selected_facets() {
        let request = SearchOffersRequest {
            origin: Some("Delhi (DEL)".to_string()),
            destination: Some("Mumbai".to_string()),
            stops: Some("1".to_string()),
            carrier: Some("IndiGo".to_string()),
            max_price: Some("5000".to_string()),
            sort: Some("price".to_string()),
        };

        let query = request.to_query();
        assert_eq!(query.origin_text, "Delhi (DEL)");
        assert_eq!(query.facets.stops, StopsFacet::Count(1));
        assert_eq!(query.facets.carrier.as_deref(), Some("IndiGo"));
        assert_eq!(query.facets.max_price, Some(5000));
        assert_eq!(query.sort_key, SortKey::Price);
    }

    #[test]
    fn any_and_garbage_values_pass_everything() {
        let request = SearchOffersRequest {
            stops: Some("any".to_string()),
            carrier: Some("any".to_string()),
            max_price: Some("cheap".to_string()),
            sort: Some("magic".to_string()),
            ..SearchOffersRequest::default()
        };

        let query = request.to_query();
        assert_eq!(query.facets.stops, StopsFacet::Any);
        assert_eq!(query.facets.carrier, None);
        assert_eq!(query.facets.max_price, None);
        assert_eq!(query.sort_key, SortKey::None);
    }

    #[test]
    fn empty_strings_mean_unselected() {
        let request = SearchOffersRequest {
            stops: Some(String::new()),
            carrier: Some(String::new()),
            max_price: Some(String::new()),
            ..SearchOffersRequest::default()
        };

        let query = request.to_query();
        assert_eq!(query.facets.stops, StopsFacet::Any);
        assert_eq!(query.facets.carrier, None);
        assert_eq!(query.facets.max_price, None);
    }
}
