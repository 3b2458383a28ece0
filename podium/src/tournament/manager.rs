//! Tournament manager: the domain service behind every endpoint.
//!
//! Each operation loads a whole tournament document from the store, applies
//! the change in memory, and writes the whole document back. There is no
//! concurrency control: two interleaved writers race read-modify-write and
//! the last write wins, which callers accept in exchange for a store
//! surface of four primitives.

use std::collections::HashSet;
use std::sync::Arc;

use crate::db::TournamentStore;

use super::errors::{TournamentError, TournamentResult};
use super::models::{Player, PlayerDraft, Tournament, TournamentDraft, now_timestamp};
use super::ranking::{RankedPlayer, TournamentInfo, rank_players};

/// Page size used when a listing query does not name one
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Filter and slicing options for listing tournaments
///
/// `offset` addresses pages in units of `limit`: the result skips
/// `offset * limit` tournaments, then yields at most `limit`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentQuery {
    /// Keep only tournaments whose open flag matches
    pub is_open: Option<bool>,
    /// Page size, defaults to [`DEFAULT_LIST_LIMIT`]
    pub limit: Option<usize>,
    /// Page index, defaults to 0
    pub offset: Option<usize>,
}

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    store: Arc<dyn TournamentStore>,
}

impl TournamentManager {
    /// Create a new tournament manager over a persistence backend
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self { store }
    }

    /// Create a new tournament
    ///
    /// Fills in everything the draft leaves out: a uuid id, `is_open = true`,
    /// the current time as `start_date`, and default starting points for any
    /// players enrolled up front. Pre-enrolled players must carry distinct
    /// ids; a collision rejects the whole draft. Returns the stored record.
    pub async fn create_tournament(&self, draft: TournamentDraft) -> TournamentResult<Tournament> {
        if draft.name.trim().is_empty() {
            return Err(TournamentError::BlankField("name"));
        }
        if draft.players.iter().any(|p| p.display_name.trim().is_empty()) {
            return Err(TournamentError::BlankField("display_name"));
        }

        let tournament = Tournament::from_draft(draft);
        let mut seen = HashSet::with_capacity(tournament.players.len());
        for player in &tournament.players {
            if !seen.insert(player.id.as_str()) {
                return Err(TournamentError::DuplicatePlayer(player.id.clone()));
            }
        }
        self.store.insert(&tournament).await?;
        log::info!("Created tournament {}", tournament.id);
        Ok(tournament)
    }

    /// List tournaments with optional open-flag filter and page slicing
    ///
    /// Tournaments come back in the store's order with each roster ranked.
    pub async fn list_tournaments(
        &self,
        query: &TournamentQuery,
    ) -> TournamentResult<Vec<TournamentInfo>> {
        let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let offset = query.offset.unwrap_or(0);

        let tournaments = self.store.find_all().await?;
        Ok(tournaments
            .into_iter()
            .filter(|t| query.is_open.is_none_or(|open| t.is_open == open))
            .skip(offset.saturating_mul(limit))
            .take(limit)
            .map(TournamentInfo::from)
            .collect())
    }

    /// Fetch a single tournament with ranked players
    pub async fn get_tournament(&self, tournament_id: &str) -> TournamentResult<TournamentInfo> {
        let tournament = self.load_tournament(tournament_id).await?;
        Ok(TournamentInfo::from(tournament))
    }

    /// List a tournament's players in ranked order
    ///
    /// A missing tournament reads as an empty roster here; only the
    /// single-player lookup treats it as an error.
    pub async fn list_players(&self, tournament_id: &str) -> TournamentResult<Vec<RankedPlayer>> {
        match self.store.find_by_id(tournament_id).await? {
            Some(tournament) => Ok(rank_players(&tournament.players)),
            None => Ok(Vec::new()),
        }
    }

    /// Fetch one player of a tournament, with their current rank
    pub async fn get_player(
        &self,
        tournament_id: &str,
        player_id: &str,
    ) -> TournamentResult<RankedPlayer> {
        let tournament = self.load_tournament(tournament_id).await?;
        rank_players(&tournament.players)
            .into_iter()
            .find(|ranked| ranked.player.id == player_id)
            .ok_or_else(|| TournamentError::PlayerNotFound(player_id.to_string()))
    }

    /// Enroll a player in a tournament
    ///
    /// Rejects ids already present in the roster; the roster is left
    /// untouched in that case. Returns the stored player.
    pub async fn add_player(
        &self,
        tournament_id: &str,
        draft: PlayerDraft,
    ) -> TournamentResult<Player> {
        if draft.display_name.trim().is_empty() {
            return Err(TournamentError::BlankField("display_name"));
        }

        let mut tournament = self.load_tournament(tournament_id).await?;
        let player = Player::from_draft(draft);
        if tournament.player(&player.id).is_some() {
            return Err(TournamentError::DuplicatePlayer(player.id));
        }

        tournament.players.push(player.clone());
        self.store
            .replace_by_id(&tournament.id, &tournament)
            .await?;
        Ok(player)
    }

    /// Overwrite a player's point total
    pub async fn set_player_points(
        &self,
        tournament_id: &str,
        player_id: &str,
        points: f64,
    ) -> TournamentResult<()> {
        let mut tournament = self.load_tournament(tournament_id).await?;
        let player = tournament
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| TournamentError::PlayerNotFound(player_id.to_string()))?;
        player.points = points;

        self.store
            .replace_by_id(&tournament.id, &tournament)
            .await?;
        Ok(())
    }

    /// Transfer points from `target_id` to `thief_id`
    ///
    /// The target must hold at least `amount`; otherwise nothing changes
    /// and the caller gets [`TournamentError::InsufficientPoints`]. Both
    /// adjustments land in one document write, so no partial transfer can
    /// be observed. A player stealing from themselves passes the
    /// sufficiency check against their own total and nets zero.
    pub async fn steal_points(
        &self,
        tournament_id: &str,
        thief_id: &str,
        target_id: &str,
        amount: f64,
    ) -> TournamentResult<()> {
        let mut tournament = self.load_tournament(tournament_id).await?;
        if tournament.player(thief_id).is_none() {
            return Err(TournamentError::PlayerNotFound(thief_id.to_string()));
        }
        let target = tournament
            .player(target_id)
            .ok_or_else(|| TournamentError::PlayerNotFound(target_id.to_string()))?;
        if target.points < amount {
            return Err(TournamentError::InsufficientPoints {
                available: target.points,
                required: amount,
            });
        }

        for player in &mut tournament.players {
            if player.id == thief_id {
                player.points += amount;
            }
            if player.id == target_id {
                player.points -= amount;
            }
        }

        self.store
            .replace_by_id(&tournament.id, &tournament)
            .await?;
        Ok(())
    }

    /// Close a tournament
    ///
    /// Flips the open flag, clears the roster, and stamps the end date in
    /// one write. Closing an already-closed tournament fails without
    /// touching the record; there is no reopen.
    pub async fn close_tournament(&self, tournament_id: &str) -> TournamentResult<()> {
        let mut tournament = self.load_tournament(tournament_id).await?;
        if !tournament.is_open {
            return Err(TournamentError::AlreadyClosed(tournament.id));
        }

        tournament.is_open = false;
        tournament.players.clear();
        tournament.end_date = Some(now_timestamp());
        self.store
            .replace_by_id(&tournament.id, &tournament)
            .await?;
        log::info!("Closed tournament {}", tournament.id);
        Ok(())
    }

    async fn load_tournament(&self, tournament_id: &str) -> TournamentResult<Tournament> {
        self.store
            .find_by_id(tournament_id)
            .await?
            .ok_or_else(|| TournamentError::TournamentNotFound(tournament_id.to_string()))
    }
}
