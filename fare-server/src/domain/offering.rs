//! The bookable offering: one flight (or stay, or car) with route,
//! time and price attributes.

use chrono::{DateTime, Timelike, Utc};

use super::place::Place;

/// Error returned when constructing an invalid offering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OfferingError {
    /// Arrival is not after departure.
    #[error("arrival must be after departure")]
    ArrivalBeforeDeparture,

    /// The id is empty.
    #[error("offering id must not be empty")]
    EmptyId,

    /// The carrier name is empty.
    #[error("carrier must not be empty")]
    EmptyCarrier,
}

/// One bookable travel item.
///
/// Offerings are immutable once constructed; every pipeline stage that
/// consumes them returns a fresh sequence rather than mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Offering {
    /// Opaque unique identifier.
    pub id: String,

    /// Departure place.
    pub origin: Place,

    /// Arrival place.
    pub destination: Place,

    /// Departure instant.
    pub depart_at: DateTime<Utc>,

    /// Arrival instant. Always after `depart_at`; may be on a later date.
    pub arrive_at: DateTime<Utc>,

    /// Number of intermediate legs (0 = non-stop).
    pub stops: u32,

    /// Display name of the operating carrier.
    pub carrier: String,

    /// Fare in whole currency units.
    pub price: u64,

    /// Total travel time in minutes.
    pub duration_minutes: u32,
}

impl Offering {
    /// Create a new offering, validating its invariants.
    ///
    /// If `duration_minutes` is `None` it is derived from the timestamps.
    /// Source data may supply an authoritative duration that differs from
    /// the timestamp difference (e.g. it includes a layover quoted
    /// separately); when supplied it is trusted as-is.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        origin: Place,
        destination: Place,
        depart_at: DateTime<Utc>,
        arrive_at: DateTime<Utc>,
        stops: u32,
        carrier: impl Into<String>,
        price: u64,
        duration_minutes: Option<u32>,
    ) -> Result<Self, OfferingError> {
        let id = id.into();
        if id.is_empty() {
            return Err(OfferingError::EmptyId);
        }

        let carrier = carrier.into();
        if carrier.is_empty() {
            return Err(OfferingError::EmptyCarrier);
        }

        if arrive_at <= depart_at {
            return Err(OfferingError::ArrivalBeforeDeparture);
        }

        let duration_minutes = match duration_minutes {
            Some(mins) => mins,
            None => (arrive_at - depart_at).num_minutes() as u32,
        };

        Ok(Self {
            id,
            origin,
            destination,
            depart_at,
            arrive_at,
            stops,
            carrier,
            price,
            duration_minutes,
        })
    }

    /// Departure time as minutes since midnight (UTC).
    ///
    /// Used by the departure sort, which compares time-of-day only.
    pub fn depart_minutes_of_day(&self) -> u32 {
        self.depart_at.hour() * 60 + self.depart_at.minute()
    }

    /// Arrival time as minutes since midnight (UTC).
    pub fn arrive_minutes_of_day(&self) -> u32 {
        self.arrive_at.hour() * 60 + self.arrive_at.minute()
    }
}

/// Parse a formatted duration like `"7h 30m"` into minutes.
///
/// The minutes part is optional: `"2h"` parses as 120. Returns `None` for
/// anything that doesn't match `<int>h [<int>m]`, including well-formed
/// hour counts too large to express in minutes. This is fed untrusted
/// catalog text, so it must never panic.
pub fn parse_duration_text(text: &str) -> Option<u32> {
    let text = text.trim();
    let (hours_part, rest) = text.split_once('h')?;
    let hours: u32 = hours_part.trim().parse().ok()?;

    let rest = rest.trim();
    let minutes: u32 = if rest.is_empty() {
        0
    } else {
        rest.strip_suffix('m')?.trim().parse().ok()?
    };

    hours.checked_mul(60)?.checked_add(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlaceCode;
    use chrono::TimeZone;

    fn place(code: &str, name: &str) -> Place {
        Place::new(PlaceCode::parse(code).unwrap(), name)
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, h, m, 0).unwrap()
    }

    #[test]
    fn derives_duration_from_timestamps() {
        let offering = Offering::new(
            "F100",
            place("DEL", "Delhi"),
            place("BOM", "Mumbai"),
            at(6, 0),
            at(8, 15),
            0,
            "IndiGo",
            4500,
            None,
        )
        .unwrap();

        assert_eq!(offering.duration_minutes, 135);
    }

    #[test]
    fn authoritative_duration_is_trusted() {
        let offering = Offering::new(
            "F101",
            place("DEL", "Delhi"),
            place("LHR", "London"),
            at(2, 0),
            at(13, 30),
            1,
            "Air India",
            42000,
            Some(700),
        )
        .unwrap();

        assert_eq!(offering.duration_minutes, 700);
    }

    #[test]
    fn rejects_arrival_before_departure() {
        let result = Offering::new(
            "F102",
            place("DEL", "Delhi"),
            place("BOM", "Mumbai"),
            at(10, 0),
            at(9, 0),
            0,
            "IndiGo",
            4500,
            None,
        );
        assert_eq!(result, Err(OfferingError::ArrivalBeforeDeparture));

        // Equal instants are rejected too
        let result = Offering::new(
            "F103",
            place("DEL", "Delhi"),
            place("BOM", "Mumbai"),
            at(10, 0),
            at(10, 0),
            0,
            "IndiGo",
            4500,
            None,
        );
        assert_eq!(result, Err(OfferingError::ArrivalBeforeDeparture));
    }

    #[test]
    fn rejects_empty_id_and_carrier() {
        let result = Offering::new(
            "",
            place("DEL", "Delhi"),
            place("BOM", "Mumbai"),
            at(6, 0),
            at(8, 0),
            0,
            "IndiGo",
            4500,
            None,
        );
        assert_eq!(result, Err(OfferingError::EmptyId));

        let result = Offering::new(
            "F104",
            place("DEL", "Delhi"),
            place("BOM", "Mumbai"),
            at(6, 0),
            at(8, 0),
            0,
            "",
            4500,
            None,
        );
        assert_eq!(result, Err(OfferingError::EmptyCarrier));
    }

    #[test]
    fn overnight_offering_spans_day_boundary() {
        let depart = Utc.with_ymd_and_hms(2025, 6, 1, 23, 30, 0).unwrap();
        let arrive = Utc.with_ymd_and_hms(2025, 6, 2, 5, 45, 0).unwrap();

        let offering = Offering::new(
            "F105",
            place("BOM", "Mumbai"),
            place("SIN", "Singapore"),
            depart,
            arrive,
            0,
            "Singapore Airlines",
            18000,
            None,
        )
        .unwrap();

        assert_eq!(offering.duration_minutes, 375);
        assert_eq!(offering.depart_minutes_of_day(), 23 * 60 + 30);
        assert_eq!(offering.arrive_minutes_of_day(), 5 * 60 + 45);
    }

    #[test]
    fn parse_duration_text_full_form() {
        assert_eq!(parse_duration_text("7h 30m"), Some(450));
        assert_eq!(parse_duration_text("0h 45m"), Some(45));
        assert_eq!(parse_duration_text("12h 05m"), Some(725));
    }

    #[test]
    fn parse_duration_text_missing_minutes_defaults_to_zero() {
        assert_eq!(parse_duration_text("2h"), Some(120));
        assert_eq!(parse_duration_text("  2h  "), Some(120));
    }

    #[test]
    fn parse_duration_text_rejects_overflowing_hours() {
        // 71582789 * 60 exceeds u32::MAX
        assert_eq!(parse_duration_text("71582789h"), None);
        assert_eq!(parse_duration_text("71582788h 59m"), None);
        assert_eq!(parse_duration_text("4294967295h"), None);
        // Largest representable value still parses
        assert_eq!(parse_duration_text("71582788h 15m"), Some(u32::MAX));
    }

    #[test]
    fn parse_duration_text_rejects_garbage() {
        assert_eq!(parse_duration_text(""), None);
        assert_eq!(parse_duration_text("soon"), None);
        assert_eq!(parse_duration_text("90m"), None);
        assert_eq!(parse_duration_text("2h 30"), None);
        assert_eq!(parse_duration_text("h 30m"), None);
    }
}
