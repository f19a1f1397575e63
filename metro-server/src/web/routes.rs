//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::query::{self, RouteError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up the distance-optimal and fewest-stops routes between two stations.
async fn route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let plan = query::plan(&state.network, &req.from, &req.to)?;
    Ok(Json(RouteResponse::from_plan(plan)))
}

/// Application error type.
#[derive(Debug, PartialEq)]
pub enum AppError {
    NotFound { message: String },
    Unprocessable { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RouteError::Unreachable { .. } => AppError::Unprocessable {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_station_maps_to_not_found() {
        let err = AppError::from(RouteError::UnknownStation("X".to_string()));
        assert_eq!(
            err,
            AppError::NotFound {
                message: "unknown station: \"X\"".to_string()
            }
        );
    }

    #[test]
    fn unreachable_maps_to_unprocessable() {
        let err = AppError::from(RouteError::Unreachable {
            from: "A".to_string(),
            to: "Z".to_string(),
        });
        assert_eq!(
            err,
            AppError::Unprocessable {
                message: "no route between A and Z".to_string()
            }
        );
    }
}
