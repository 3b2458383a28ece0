//! Tournament module for point-based tournaments.
//!
//! This module provides tournament management functionality including:
//! - Tournament creation, listing, and lookup
//! - Player enrollment with default starting points
//! - Point assignment and player-to-player transfers
//! - Ranked standings on every read
//! - Closing a tournament (flag flip, roster wipe, end date stamp)
//!
//! ## Example
//!
//! ```
//! use podium::db::MemoryTournamentStore;
//! use podium::tournament::{PlayerDraft, TournamentDraft, TournamentManager};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = TournamentManager::new(Arc::new(MemoryTournamentStore::new()));
//!
//!     let tournament = manager
//!         .create_tournament(TournamentDraft {
//!             name: "Sunday Special".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     manager
//!         .add_player(
//!             &tournament.id,
//!             PlayerDraft {
//!                 display_name: "Ana".to_string(),
//!                 ..Default::default()
//!             },
//!         )
//!         .await?;
//!
//!     let standings = manager.list_players(&tournament.id).await?;
//!     assert_eq!(standings[0].rank, 1);
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod ranking;

pub use errors::{StoreError, StoreResult, TournamentError, TournamentResult};
pub use manager::{DEFAULT_LIST_LIMIT, TournamentManager, TournamentQuery};
pub use models::{
    DEFAULT_STARTING_POINTS, Player, PlayerDraft, PlayerId, Tournament, TournamentDraft,
    TournamentId,
};
pub use ranking::{RankedPlayer, TournamentInfo, rank_players};
