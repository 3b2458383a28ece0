//! # Podium
//!
//! A tournament points library: tournaments enroll players, players hold
//! point totals, totals can be reassigned or stolen between players, and
//! every read decorates the roster with 1-based standings.
//!
//! Tournaments are persisted as whole documents behind the
//! [`db::TournamentStore`] trait, with a PostgreSQL backend for servers and
//! an in-memory backend for tests and embedded use. All mutations are
//! read-modify-write on one document; the last write wins.
//!
//! ## Core Modules
//!
//! - [`tournament`]: Domain model, ranking engine, and the tournament manager
//! - [`db`]: Connection pooling and the pluggable tournament store
//!
//! ## Example
//!
//! ```
//! use podium::tournament::{Player, rank_players};
//!
//! let standings = rank_players(&[
//!     Player { id: "a".into(), display_name: "Ana".into(), points: 60.0 },
//!     Player { id: "b".into(), display_name: "Ben".into(), points: 40.0 },
//! ]);
//! assert_eq!(standings[0].rank, 1);
//! assert_eq!(standings[0].player.display_name, "Ana");
//! ```

/// Tournament domain: models, ranking, manager, and errors.
pub mod tournament;
pub use tournament::{
    DEFAULT_LIST_LIMIT, DEFAULT_STARTING_POINTS, Player, PlayerDraft, RankedPlayer, Tournament,
    TournamentDraft, TournamentError, TournamentInfo, TournamentManager, TournamentQuery,
    TournamentResult,
};

/// Database connection pooling and tournament store backends.
pub mod db;
pub use db::{Database, DatabaseConfig, MemoryTournamentStore, PgTournamentStore, TournamentStore};
