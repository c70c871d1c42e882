//! Built-in sample catalog.
//!
//! Used when no catalog URL is configured or the remote fetch fails.
//! The data is a fixed literal table, so the fallback is fully
//! reproducible: same inputs, same catalog, every time.

use chrono::{TimeZone, Utc};

use crate::domain::{Offering, Place, PlaceCode};

/// A sample row: id, origin, destination, departure (day, h, m),
/// arrival (day, h, m), stops, carrier, price.
type Row = (
    &'static str,
    (&'static str, &'static str),
    (&'static str, &'static str),
    (u32, u32, u32),
    (u32, u32, u32),
    u32,
    &'static str,
    u64,
);

const DELHI: (&str, &str) = ("DEL", "Delhi");
const MUMBAI: (&str, &str) = ("BOM", "Mumbai");
const BENGALURU: (&str, &str) = ("BLR", "Bengaluru");
const LONDON: (&str, &str) = ("LHR", "London");
const NEW_YORK: (&str, &str) = ("JFK", "New York");
const DUBAI: (&str, &str) = ("DXB", "Dubai");
const SINGAPORE: (&str, &str) = ("SIN", "Singapore");

const ROWS: &[Row] = &[
    ("SAMPLE-001", DELHI, MUMBAI, (1, 6, 0), (1, 8, 15), 0, "IndiGo", 4500),
    ("SAMPLE-002", DELHI, MUMBAI, (1, 9, 30), (1, 13, 0), 1, "Air India", 3900),
    ("SAMPLE-003", DELHI, MUMBAI, (1, 18, 45), (1, 21, 0), 0, "Vistara", 5200),
    ("SAMPLE-004", MUMBAI, DELHI, (1, 7, 15), (1, 9, 25), 0, "IndiGo", 4300),
    ("SAMPLE-005", DELHI, BENGALURU, (1, 5, 40), (1, 8, 30), 0, "IndiGo", 5600),
    ("SAMPLE-006", BENGALURU, DELHI, (1, 20, 10), (1, 23, 5), 0, "Air India", 5100),
    ("SAMPLE-007", DELHI, LONDON, (1, 2, 30), (1, 14, 0), 1, "Air India", 42000),
    ("SAMPLE-008", DELHI, LONDON, (1, 10, 0), (1, 19, 30), 0, "Vistara", 47500),
    ("SAMPLE-009", LONDON, NEW_YORK, (1, 11, 20), (1, 19, 35), 0, "Virgin Atlantic", 51000),
    ("SAMPLE-010", LONDON, NEW_YORK, (1, 16, 0), (2, 2, 10), 1, "British Airways", 44800),
    ("SAMPLE-011", MUMBAI, DUBAI, (1, 4, 15), (1, 7, 20), 0, "Emirates", 14500),
    ("SAMPLE-012", DUBAI, LONDON, (1, 8, 30), (1, 16, 10), 0, "Emirates", 33200),
    // Overnight departure crossing the date line of the catalog day
    ("SAMPLE-013", MUMBAI, SINGAPORE, (1, 23, 30), (2, 5, 45), 0, "Singapore Airlines", 18000),
    ("SAMPLE-014", DELHI, SINGAPORE, (1, 13, 10), (1, 21, 55), 1, "IndiGo", 16200),
];

/// Build the deterministic sample catalog.
pub fn sample_catalog() -> Vec<Offering> {
    ROWS.iter()
        .map(|&(id, origin, destination, dep, arr, stops, carrier, price)| {
            Offering::new(
                id,
                place(origin),
                place(destination),
                Utc.with_ymd_and_hms(2025, 6, dep.0, dep.1, dep.2, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 6, arr.0, arr.1, arr.2, 0).unwrap(),
                stops,
                carrier,
                price,
                None,
            )
            .expect("sample rows are valid by construction")
        })
        .collect()
}

fn place((code, name): (&str, &str)) -> Place {
    Place::new(
        PlaceCode::parse(code).expect("sample place codes are valid"),
        name,
    )
}
