//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::nearest::{NearestError, find_nearest_from_params};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/nearest", get(nearest_station))
        .route("/api/stations", get(list_stations))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing station coordinates.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let stations = state.stations.snapshot(state.station_limit).await;

    let template = IndexTemplate {
        stations: stations.iter().map(StationView::from_station).collect(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html))
}

/// List station coordinates as JSON.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state.stations.snapshot(state.station_limit).await;

    Json(StationListResponse {
        stations: stations.iter().map(StationResult::from_station).collect(),
    })
}

/// Find the station nearest to the given latitude/longitude.
async fn nearest_station(
    State(state): State<AppState>,
    query: Result<Query<NearestRequest>, QueryRejection>,
) -> Result<Json<NearestResponse>, AppError> {
    // Malformed query strings get the same JSON error shape as bad coordinates
    let Query(req) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let stations = state.stations.snapshot(state.station_limit).await;

    let nearest = find_nearest_from_params(
        req.latitude.as_deref().unwrap_or_default(),
        req.longitude.as_deref().unwrap_or_default(),
        &stations,
    )?;

    Ok(Json(NearestResponse::from(nearest)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<NearestError> for AppError {
    fn from(e: NearestError) -> Self {
        match e {
            NearestError::InvalidCoordinate(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            NearestError::EmptyStationSet => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
