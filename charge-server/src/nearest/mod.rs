//! Nearest charging station lookup.
//!
//! Answers "which station is closest to me?" with a single linear pass
//! over the candidate stations, measuring geodesic distance on the WGS84
//! ellipsoid.

mod distance;
mod finder;

pub use distance::geodesic_distance_km;
pub use finder::{
    DistanceResult, NearestError, find_nearest, find_nearest_by, find_nearest_from_params,
};
