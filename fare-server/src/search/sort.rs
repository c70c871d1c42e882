//! Result ordering.

use crate::domain::Offering;

/// The key to order results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the matcher/filter output order.
    #[default]
    None,

    /// Ascending fare.
    Price,

    /// Ascending total travel time.
    Duration,

    /// Ascending departure time of day.
    Departure,

    /// Ascending arrival time of day.
    Arrival,
}

impl SortKey {
    /// Parse a sort key from its query-string form.
    ///
    /// Unrecognized values map to `None` (no reordering), keeping the
    /// query surface forward-compatible.
    pub fn from_query(s: &str) -> Self {
        match s {
            "price" => SortKey::Price,
            "duration" => SortKey::Duration,
            "departure" => SortKey::Departure,
            "arrival" => SortKey::Arrival,
            _ => SortKey::None,
        }
    }
}

/// Sort offerings by the given key, ascending.
///
/// The sort is stable: offerings with equal keys keep their relative
/// input order, so identical queries never jitter.
///
/// Departure and arrival compare minutes-since-midnight only, not the
/// full timestamp. Known limitation: offerings on different dates
/// interleave by time of day.
pub fn sort_offerings(offerings: &[Offering], key: SortKey) -> Vec<Offering> {
    let mut sorted = offerings.to_vec();

    match key {
        SortKey::None => {}
        SortKey::Price => sorted.sort_by_key(|o| o.price),
        SortKey::Duration => sorted.sort_by_key(|o| o.duration_minutes),
        SortKey::Departure => sorted.sort_by_key(|o| o.depart_minutes_of_day()),
        SortKey::Arrival => sorted.sort_by_key(|o| o.arrive_minutes_of_day()),
    }

    sorted
}
