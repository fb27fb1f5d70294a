//! Charging station source.
//!
//! Station records are loaded from a JSON file at startup into a shared
//! store, which request handlers snapshot and which can be reloaded in
//! the background.

mod error;
mod file;
mod store;

pub use error::StationError;
pub use file::{StationRecord, load_stations};
pub use store::StationStore;
