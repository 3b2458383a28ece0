//! Tournament error types.

use thiserror::Error;

/// Persistence errors, shared by every store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Document (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Tournament domain errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Tournament not found
    #[error("Tournament not found: {0}")]
    TournamentNotFound(String),

    /// Player not found within an existing tournament
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// Player id already enrolled in the tournament
    #[error("Player already enrolled: {0}")]
    DuplicatePlayer(String),

    /// Required text field was empty or whitespace
    #[error("Field must not be blank: {0}")]
    BlankField(&'static str),

    /// Transfer amount exceeds the target's point total
    #[error("Insufficient points: available {available}, required {required}")]
    InsufficientPoints { available: f64, required: f64 },

    /// Close requested on a tournament that is no longer open
    #[error("Tournament already closed: {0}")]
    AlreadyClosed(String),

    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TournamentError {
    /// Get a client-safe error message that doesn't leak internals
    ///
    /// Store errors are sanitized so SQL or serialization details never
    /// reach an HTTP response body.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Store(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
