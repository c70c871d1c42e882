//! Presentation of pipeline results.
//!
//! A pure, length-preserving map from offerings to renderable view
//! records. No I/O, no side effects; formatting decisions live here and
//! nowhere else.

use chrono::{DateTime, Timelike, Utc};

use crate::domain::Offering;
use crate::search::PipelineConfig;

/// A renderable search result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferingView {
    /// Offering id, carried for selection.
    pub id: String,

    /// "City (CODE)" origin label.
    pub origin: String,

    /// "City (CODE)" destination label.
    pub destination: String,

    /// Departure as "HH:MM".
    pub departure: String,

    /// Arrival as "HH:MM".
    pub arrival: String,

    /// Duration as "<H>h <M>m".
    pub duration: String,

    /// Stop count label: "Non-stop", "1 stop", "2 stops", ...
    pub stops: String,

    /// Carrier display name.
    pub carrier: String,

    /// Grouped price with currency label, e.g. "₹4,500".
    pub price: String,
}

/// Map offerings to view records.
///
/// Length-preserving: `present(s).len() == s.len()` for every input,
/// including the empty one.
pub fn present(offerings: &[Offering], config: &PipelineConfig) -> Vec<OfferingView> {
    offerings
        .iter()
        .map(|o| OfferingView {
            id: o.id.clone(),
            origin: o.origin.label(),
            destination: o.destination.label(),
            departure: format_time(o.depart_at),
            arrival: format_time(o.arrive_at),
            duration: format_duration(o.duration_minutes),
            stops: format_stops(o.stops),
            carrier: o.carrier.clone(),
            price: format_price(o.price, &config.currency_label),
        })
        .collect()
}

/// Format an instant as "HH:MM" (UTC).
fn format_time(at: DateTime<Utc>) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}

/// Format minutes as "<H>h <M>m".
fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Format a stop count for display.
fn format_stops(stops: u32) -> String {
    match stops {
        0 => "Non-stop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}

/// Format a whole-unit price with 3-digit grouping and a currency label.
fn format_price(price: u64, label: &str) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + label.len());
    grouped.push_str(label);

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
