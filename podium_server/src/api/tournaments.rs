//! Tournament collection and lifecycle API handlers.
//!
//! This module provides HTTP REST endpoints for tournament operations:
//! - Listing tournaments with an open-flag filter and page slicing
//! - Creating tournaments (with optional up-front players)
//! - Getting a single tournament with ranked standings
//! - Closing a tournament
//!
//! # Examples
//!
//! List open tournaments:
//! ```bash
//! curl 'http://localhost:8080/tournaments?is_open=true&limit=10&offset=0'
//! ```
//!
//! Create a tournament:
//! ```bash
//! curl -X POST http://localhost:8080/tournaments \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Spring Cup"}'
//! ```

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderName, StatusCode, header},
};
use serde::{Deserialize, Serialize};

use podium::tournament::{TournamentDraft, TournamentInfo, TournamentQuery};

use super::players::{PlayerPayload, RankedPlayerResponse};
use super::{AppState, ErrorResponse, error_response};

#[derive(Debug, Deserialize)]
pub struct ListTournamentsParams {
    pub is_open: Option<bool>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub id: Option<String>,
    pub name: String,
    pub is_open: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub players: Vec<PlayerPayload>,
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub id: String,
    pub name: String,
    pub is_open: bool,
    pub start_date: String,
    pub end_date: Option<String>,
    pub players: Vec<RankedPlayerResponse>,
}

impl From<TournamentInfo> for TournamentResponse {
    fn from(info: TournamentInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            is_open: info.is_open,
            start_date: info.start_date,
            end_date: info.end_date,
            players: info
                .players
                .into_iter()
                .map(RankedPlayerResponse::from)
                .collect(),
        }
    }
}

/// List tournaments.
///
/// Supports filtering by open flag and page slicing. Pages are addressed in
/// units of `limit`: `offset=2&limit=10` skips the first twenty.
///
/// # Query Parameters
///
/// - `is_open`: Keep only tournaments whose open flag matches (optional)
/// - `limit`: Page size (optional, default 10)
/// - `offset`: Page index (optional, default 0)
///
/// # Response
///
/// Returns `200 OK` with an array of tournaments, each roster ranked:
/// ```json
/// [
///   {
///     "id": "4c0e8a0e-...",
///     "name": "Spring Cup",
///     "is_open": true,
///     "start_date": "2025-01-10T09:00:00",
///     "end_date": null,
///     "players": [
///       {"id": "ana", "display_name": "Ana", "points": 60.0, "rank": 1}
///     ]
///   }
/// ]
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Unparsable query parameters
/// - `500 Internal Server Error`: Store failure
pub async fn list_tournaments(
    State(state): State<AppState>,
    Query(params): Query<ListTournamentsParams>,
) -> Result<Json<Vec<TournamentResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let query = TournamentQuery {
        is_open: params.is_open,
        limit: params.limit,
        offset: params.offset,
    };

    match state.manager.list_tournaments(&query).await {
        Ok(tournaments) => Ok(Json(
            tournaments
                .into_iter()
                .map(TournamentResponse::from)
                .collect(),
        )),
        Err(e) => Err(error_response(e)),
    }
}

/// Create a new tournament.
///
/// Everything except the name is optional: omitted ids are generated,
/// the open flag defaults to true, the start date to now, and players
/// enrolled up front get the default starting points.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Spring Cup",
///   "players": [{"display_name": "Ana"}]
/// }
/// ```
///
/// # Response
///
/// Returns `201 Created` with a `Location` header pointing at the new
/// tournament and the stored record as the body.
///
/// # Errors
///
/// - `400 Bad Request`: Blank name or malformed body
/// - `500 Internal Server Error`: Store failure
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(body): Json<CreateTournamentRequest>,
) -> Result<
    (StatusCode, [(HeaderName, String); 1], Json<TournamentResponse>),
    (StatusCode, Json<ErrorResponse>),
> {
    let draft = TournamentDraft {
        id: body.id,
        name: body.name,
        is_open: body.is_open,
        start_date: body.start_date,
        end_date: body.end_date,
        players: body
            .players
            .into_iter()
            .map(PlayerPayload::into_draft)
            .collect(),
    };

    match state.manager.create_tournament(draft).await {
        Ok(tournament) => {
            crate::metrics::tournaments_created_total();
            let location = format!("/tournaments/{}", tournament.id);
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(TournamentResponse::from(TournamentInfo::from(tournament))),
            ))
        }
        Err(e) => Err(error_response(e)),
    }
}

/// Get a single tournament with ranked standings.
///
/// # Response
///
/// Returns `200 OK` with the tournament and its ranked roster.
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
/// - `500 Internal Server Error`: Store failure
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
) -> Result<Json<TournamentResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.manager.get_tournament(&tournament_id).await {
        Ok(info) => Ok(Json(TournamentResponse::from(info))),
        Err(e) => Err(error_response(e)),
    }
}

/// Close a tournament.
///
/// Flips the open flag, clears the roster, and stamps the end date. A
/// closed tournament stays closed; there is no reopen.
///
/// # Response
///
/// Returns `200 OK` with an empty body on success.
///
/// # Errors
///
/// - `400 Bad Request`: Tournament is already closed
/// - `404 Not Found`: Tournament doesn't exist
/// - `500 Internal Server Error`: Store failure
pub async fn close_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.manager.close_tournament(&tournament_id).await {
        Ok(()) => {
            crate::metrics::tournaments_closed_total();
            Ok(StatusCode::OK)
        }
        Err(e) => Err(error_response(e)),
    }
}
