//! Domain types for the fare search pipeline.
//!
//! This module contains the core domain model types that represent
//! validated travel data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod offering;
mod place;

pub use offering::{Offering, OfferingError, parse_duration_text};
pub use place::{InvalidPlaceCode, Place, PlaceCode};
