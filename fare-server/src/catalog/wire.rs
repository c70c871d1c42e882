//! Wire format for catalog payloads.
//!
//! Remote catalogs and override blobs arrive as JSON arrays of flat
//! records with string timestamps. Conversion into validated domain
//! [`Offering`]s happens here; records that fail validation are skipped
//! with a warning rather than poisoning the whole load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Offering, OfferingError, Place, PlaceCode, parse_duration_text};

/// One offering as it appears on the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingDto {
    pub id: String,
    pub origin_code: String,
    pub origin_name: String,
    pub destination_code: String,
    pub destination_name: String,

    /// RFC 3339 timestamp.
    pub depart_at: String,

    /// RFC 3339 timestamp.
    pub arrive_at: String,

    pub stops: u32,
    pub carrier: String,
    pub price: u64,

    /// Authoritative duration, if the source supplies one.
    #[serde(default)]
    pub duration_minutes: Option<u32>,

    /// Formatted duration text like "7h 30m", used when minutes are absent.
    #[serde(default)]
    pub duration: Option<String>,
}

/// Error converting a wire record into a domain offering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid {field} place code {value:?}")]
    InvalidPlaceCode { field: &'static str, value: String },

    #[error("invalid {field} timestamp {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("invalid offering: {0}")]
    InvalidOffering(#[from] OfferingError),
}

/// Convert a single wire record.
///
/// Duration resolution order: authoritative minutes, then parsed text,
/// then derived from the timestamps.
pub fn convert_offering(dto: &OfferingDto) -> Result<Offering, ConvertError> {
    let origin_code = PlaceCode::parse_normalized(&dto.origin_code).map_err(|_| {
        ConvertError::InvalidPlaceCode {
            field: "origin",
            value: dto.origin_code.clone(),
        }
    })?;
    let destination_code = PlaceCode::parse_normalized(&dto.destination_code).map_err(|_| {
        ConvertError::InvalidPlaceCode {
            field: "destination",
            value: dto.destination_code.clone(),
        }
    })?;

    let depart_at = parse_instant(&dto.depart_at).ok_or_else(|| ConvertError::InvalidTimestamp {
        field: "departAt",
        value: dto.depart_at.clone(),
    })?;
    let arrive_at = parse_instant(&dto.arrive_at).ok_or_else(|| ConvertError::InvalidTimestamp {
        field: "arriveAt",
        value: dto.arrive_at.clone(),
    })?;

    let duration_minutes = dto
        .duration_minutes
        .or_else(|| dto.duration.as_deref().and_then(parse_duration_text));

    let offering = Offering::new(
        dto.id.clone(),
        Place::new(origin_code, dto.origin_name.clone()),
        Place::new(destination_code, dto.destination_name.clone()),
        depart_at,
        arrive_at,
        dto.stops,
        dto.carrier.clone(),
        dto.price,
        duration_minutes,
    )?;

    Ok(offering)
}

/// Convert a batch of wire records, skipping invalid ones.
pub fn convert_catalog(dtos: &[OfferingDto]) -> Vec<Offering> {
    dtos.iter()
        .filter_map(|dto| match convert_offering(dto) {
            Ok(offering) => Some(offering),
            Err(e) => {
                warn!(id = %dto.id, error = %e, "skipping invalid catalog record");
                None
            }
        })
        .collect()
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
