//! Web layer for the charging station finder.
//!
//! Provides the station listing page and the nearest-station endpoint.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
