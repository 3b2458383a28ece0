//! HTTP API for the tournament points server.
//!
//! This module provides the REST API over the tournament manager: creating
//! and listing tournaments, enrolling players, assigning and stealing
//! points, ranked standings, and closing tournaments.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework
//! - **Tower**: Middleware for CORS and request IDs
//! - **podium**: The domain library; handlers stay thin and translate
//!   domain errors to status codes in one place
//!
//! # Modules
//!
//! - [`tournaments`]: Tournament collection and lifecycle endpoints
//! - [`players`]: Player enrollment, standings, and point movement
//! - [`request_id`]: Request ID middleware
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                                                  - Health check
//! GET  /tournaments?is_open=&limit=&offset=                     - List tournaments
//! POST /tournaments                                             - Create tournament (201 + Location)
//! GET  /tournaments/{id}                                        - Get tournament
//! POST /tournaments/{id}/close                                  - Close tournament
//! GET  /tournaments/{id}/players                                - List ranked players
//! POST /tournaments/{id}/players                                - Enroll player
//! GET  /tournaments/{id}/players/{player_id}                    - Get ranked player
//! PUT  /tournaments/{id}/players/{player_id}/points             - Set points (JSON number body)
//! PUT  /tournaments/{id}/players/{player_id}/steal/{target_id}  - Transfer points (JSON number body)
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use podium::db::{MemoryTournamentStore, TournamentStore};
//! use podium::tournament::TournamentManager;
//! use podium_server::api::{AppState, create_router};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store: Arc<dyn TournamentStore> = Arc::new(MemoryTournamentStore::new());
//! let state = AppState {
//!     manager: TournamentManager::new(store.clone()),
//!     store,
//! };
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively for development. In production, configure
//! appropriate origins, methods, and headers.

pub mod players;
pub mod request_id;
pub mod tournaments;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post, put},
};
use podium::db::TournamentStore;
use podium::tournament::{TournamentError, TournamentManager};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request; both fields are cheap handles. The store appears
/// separately from the manager so the health check can probe persistence
/// without going through domain operations.
#[derive(Clone)]
pub struct AppState {
    pub manager: TournamentManager,
    pub store: Arc<dyn TournamentStore>,
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Example
///
/// ```rust,no_run
/// # use podium_server::api::{AppState, create_router};
/// # async fn example(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
/// let app = create_router(state);
/// let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/tournaments",
            get(tournaments::list_tournaments).post(tournaments::create_tournament),
        )
        .route(
            "/tournaments/{tournament_id}",
            get(tournaments::get_tournament),
        )
        .route(
            "/tournaments/{tournament_id}/close",
            post(tournaments::close_tournament),
        )
        .route(
            "/tournaments/{tournament_id}/players",
            get(players::list_players).post(players::add_player),
        )
        .route(
            "/tournaments/{tournament_id}/players/{player_id}",
            get(players::get_player),
        )
        .route(
            "/tournaments/{tournament_id}/players/{player_id}/points",
            put(players::set_player_points),
        )
        .route(
            "/tournaments/{tournament_id}/players/{player_id}/steal/{target_id}",
            put(players::steal_points),
        )
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Error payload returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Translate a domain error into a status code and client-safe body.
///
/// Lookups map to 404, a duplicate enrollment to 409, rejected input to
/// 400, and store failures to 500 with the detail kept out of the body.
pub(crate) fn error_response(err: TournamentError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        TournamentError::TournamentNotFound(_) | TournamentError::PlayerNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        TournamentError::DuplicatePlayer(_) => StatusCode::CONFLICT,
        TournamentError::BlankField(_)
        | TournamentError::InsufficientPoints { .. }
        | TournamentError::AlreadyClosed(_) => StatusCode::BAD_REQUEST,
        TournamentError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("request failed: {err}");
    }

    (
        status,
        Json(ErrorResponse {
            error: err.client_message(),
        }),
    )
}

/// Health check endpoint for monitoring and load balancers.
///
/// Probes the tournament store and returns `200 OK` when it is reachable,
/// `503 Service Unavailable` otherwise.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"healthy","version":"0.1.0","store":true,"timestamp":"2025-01-10T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store_healthy = state.store.health_check().await.is_ok();

    let status_code = if store_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = json!({
        "status": if store_healthy { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "store": store_healthy,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status_code, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium::tournament::StoreError;

    #[test]
    fn test_error_response_status_mapping() {
        let (status, _) = error_response(TournamentError::TournamentNotFound("t1".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(TournamentError::PlayerNotFound("p1".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(TournamentError::DuplicatePlayer("p1".into()));
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = error_response(TournamentError::AlreadyClosed("t1".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(TournamentError::InsufficientPoints {
            available: 1.0,
            required: 2.0,
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(TournamentError::BlankField("name"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_errors_are_opaque_500s() {
        let broken = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err = TournamentError::Store(StoreError::Serialization(broken));
        let (status, Json(body)) = error_response(err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
    }
}
