//! Player roster and points API handlers.
//!
//! Endpoints for enrolling players, reading ranked standings, overwriting
//! point totals, and transferring points between players.
//!
//! # Examples
//!
//! Enroll a player:
//! ```bash
//! curl -X POST http://localhost:8080/tournaments/{id}/players \
//!   -H "Content-Type: application/json" \
//!   -d '{"display_name": "Ana"}'
//! ```
//!
//! Transfer 10 points from `target` to `thief`:
//! ```bash
//! curl -X PUT http://localhost:8080/tournaments/{id}/players/{thief}/steal/{target} \
//!   -H "Content-Type: application/json" \
//!   -d '10.0'
//! ```

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use podium::tournament::{Player, PlayerDraft, RankedPlayer};

use super::{AppState, ErrorResponse, error_response};

/// Caller-supplied player fields; omitted ones get defaults downstream.
#[derive(Debug, Deserialize)]
pub struct PlayerPayload {
    pub id: Option<String>,
    pub display_name: String,
    pub points: Option<f64>,
}

impl PlayerPayload {
    pub fn into_draft(self) -> PlayerDraft {
        PlayerDraft {
            id: self.id,
            display_name: self.display_name,
            points: self.points,
        }
    }
}

/// A player as stored, without standing information.
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: String,
    pub display_name: String,
    pub points: f64,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            display_name: player.display_name,
            points: player.points,
        }
    }
}

/// A player with their current rank in the tournament.
#[derive(Debug, Serialize)]
pub struct RankedPlayerResponse {
    pub id: String,
    pub display_name: String,
    pub points: f64,
    pub rank: u32,
}

impl From<RankedPlayer> for RankedPlayerResponse {
    fn from(ranked: RankedPlayer) -> Self {
        Self {
            id: ranked.player.id,
            display_name: ranked.player.display_name,
            points: ranked.player.points,
            rank: ranked.rank,
        }
    }
}

/// List a tournament's players in ranked order.
///
/// An unknown tournament id reads as an empty roster, not a 404.
pub async fn list_players(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
) -> Result<Json<Vec<RankedPlayerResponse>>, (StatusCode, Json<ErrorResponse>)> {
    match state.manager.list_players(&tournament_id).await {
        Ok(players) => Ok(Json(
            players.into_iter().map(RankedPlayerResponse::from).collect(),
        )),
        Err(e) => Err(error_response(e)),
    }
}

/// Get one player of a tournament, with their current rank.
///
/// # Errors
///
/// - `404 Not Found`: Tournament or player doesn't exist
pub async fn get_player(
    State(state): State<AppState>,
    Path((tournament_id, player_id)): Path<(String, String)>,
) -> Result<Json<RankedPlayerResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.manager.get_player(&tournament_id, &player_id).await {
        Ok(ranked) => Ok(Json(RankedPlayerResponse::from(ranked))),
        Err(e) => Err(error_response(e)),
    }
}

/// Enroll a player in a tournament.
///
/// Returns `200 OK` with the stored player. Omitted ids are generated
/// and omitted points default to the starting total.
///
/// # Errors
///
/// - `400 Bad Request`: Blank display name
/// - `404 Not Found`: Tournament doesn't exist
/// - `409 Conflict`: Player id already enrolled
pub async fn add_player(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
    Json(body): Json<PlayerPayload>,
) -> Result<Json<PlayerResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state
        .manager
        .add_player(&tournament_id, body.into_draft())
        .await
    {
        Ok(player) => Ok(Json(PlayerResponse::from(player))),
        Err(e) => Err(error_response(e)),
    }
}

/// Overwrite a player's point total.
///
/// The body is the bare new total as a JSON number, e.g. `88.5`.
pub async fn set_player_points(
    State(state): State<AppState>,
    Path((tournament_id, player_id)): Path<(String, String)>,
    Json(points): Json<f64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state
        .manager
        .set_player_points(&tournament_id, &player_id, points)
        .await
    {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => Err(error_response(e)),
    }
}

/// Transfer points from the target player to the path player.
///
/// The body is the amount as a JSON number. The target must hold at
/// least that amount or the transfer is rejected whole.
///
/// # Errors
///
/// - `400 Bad Request`: Target holds fewer points than requested
/// - `404 Not Found`: Tournament or either player doesn't exist
pub async fn steal_points(
    State(state): State<AppState>,
    Path((tournament_id, player_id, target_id)): Path<(String, String, String)>,
    Json(amount): Json<f64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state
        .manager
        .steal_points(&tournament_id, &player_id, &target_id, amount)
        .await
    {
        Ok(()) => {
            crate::metrics::points_transfers_total();
            Ok(StatusCode::OK)
        }
        Err(e) => Err(error_response(e)),
    }
}
