//! Tournament and player data models.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tournament ID type (opaque string, uuid v4 when generated)
pub type TournamentId = String;

/// Player ID type (opaque string, uuid v4 when generated)
pub type PlayerId = String;

/// Points granted to a player enrolled without an explicit total
pub const DEFAULT_STARTING_POINTS: f64 = 50.0;

/// Timestamp format used for start/end dates (UTC, no zone suffix)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current UTC time formatted as [`TIMESTAMP_FORMAT`]
pub fn now_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A player enrolled in a tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique within the tournament, immutable
    pub id: PlayerId,
    /// Human-readable name, immutable
    pub display_name: String,
    /// Current point total, mutated only by set/steal operations
    pub points: f64,
}

/// Caller-supplied payload for enrolling a player
///
/// Omitted fields are filled in by [`Player::from_draft`]: a fresh uuid id
/// and [`DEFAULT_STARTING_POINTS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerDraft {
    /// Explicit id, or `None` to generate one
    pub id: Option<PlayerId>,
    /// Human-readable name
    pub display_name: String,
    /// Explicit starting points, or `None` for the default
    pub points: Option<f64>,
}

impl Player {
    /// Build a player from a draft, applying defaults
    pub fn from_draft(draft: PlayerDraft) -> Self {
        Self {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            display_name: draft.display_name,
            points: draft.points.unwrap_or(DEFAULT_STARTING_POINTS),
        }
    }
}

/// A tournament and its enrolled players
///
/// This is the unit of persistence: every mutation rewrites the whole
/// record through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    /// Unique across the store, immutable
    pub id: TournamentId,
    /// Tournament name, immutable after creation
    pub name: String,
    /// `true` until the tournament is closed; never flips back
    pub is_open: bool,
    /// Creation or caller-supplied start time
    pub start_date: String,
    /// Set exactly once, by close; `Some` iff `is_open` is `false`
    pub end_date: Option<String>,
    /// Enrolled players, unique by id; order carries no meaning
    pub players: Vec<Player>,
}

/// Caller-supplied payload for creating a tournament
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentDraft {
    /// Explicit id, or `None` to generate one
    pub id: Option<TournamentId>,
    /// Tournament name
    pub name: String,
    /// Explicit open flag, or `None` for `true`
    pub is_open: Option<bool>,
    /// Explicit start time, or `None` for the current time
    pub start_date: Option<String>,
    /// End time, normally absent on creation
    pub end_date: Option<String>,
    /// Players enrolled up front
    pub players: Vec<PlayerDraft>,
}

impl Tournament {
    /// Build a tournament from a draft, applying defaults
    pub fn from_draft(draft: TournamentDraft) -> Self {
        Self {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: draft.name,
            is_open: draft.is_open.unwrap_or(true),
            start_date: draft.start_date.unwrap_or_else(now_timestamp),
            end_date: draft.end_date,
            players: draft.players.into_iter().map(Player::from_draft).collect(),
        }
    }

    /// Look up a player by id
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}
