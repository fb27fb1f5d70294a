//! Domain types for the charging station finder.
//!
//! All types enforce their invariants at construction time, so code that
//! receives a `GeoCoordinate` or a `Station` can trust its validity.

mod coordinate;
mod station;

pub use coordinate::{GeoCoordinate, InvalidCoordinate};
pub use station::{Station, StationId};
