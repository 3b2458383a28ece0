//! Tournament store: the persistence trait and its PostgreSQL backend.
//!
//! Tournaments are persisted as whole documents. Every mutation in the
//! domain layer is a read-modify-write of one document, so the store
//! surface is deliberately small: point lookup, full scan, insert, and
//! whole-document replace.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::tournament::{StoreResult, Tournament};

/// Trait for tournament persistence, enabling swappable backends
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Find a tournament by id
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Tournament>>;

    /// Fetch every tournament, in the backend's stable order
    async fn find_all(&self) -> StoreResult<Vec<Tournament>>;

    /// Insert a new tournament
    ///
    /// Callers are expected to supply a fresh id; backends with a key
    /// constraint reject duplicates as a [`StoreError::Database`] error.
    ///
    /// [`StoreError::Database`]: crate::tournament::StoreError::Database
    async fn insert(&self, tournament: &Tournament) -> StoreResult<()>;

    /// Replace the document stored under `id` with `tournament`
    ///
    /// Matching zero documents is not an error: a replace races an
    /// interleaved delete or a bad id silently, the same way a Mongo-style
    /// update-by-id does. Last write wins.
    async fn replace_by_id(&self, id: &str, tournament: &Tournament) -> StoreResult<()>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> StoreResult<()>;
}

/// Default PostgreSQL implementation of `TournamentStore`
///
/// Uses a single `tournaments` table as a document store: the id column for
/// lookups, a JSONB column for the serialized [`Tournament`].
pub struct PgTournamentStore {
    pool: PgPool,
}

impl PgTournamentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the backing table when it does not exist yet
    ///
    /// Run once at startup, before the store serves requests.
    pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tournaments (
                id TEXT PRIMARY KEY,
                doc JSONB NOT NULL
            )",
        )
        .execute(pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl TournamentStore for PgTournamentStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Tournament>> {
        let row = sqlx::query("SELECT doc FROM tournaments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => {
                let doc: serde_json::Value = r.get("doc");
                Ok(Some(serde_json::from_value(doc)?))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> StoreResult<Vec<Tournament>> {
        // Order by id so offset/limit slicing upstream stays stable
        let rows = sqlx::query("SELECT doc FROM tournaments ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut tournaments = Vec::with_capacity(rows.len());
        for row in rows {
            let doc: serde_json::Value = row.get("doc");
            tournaments.push(serde_json::from_value(doc)?);
        }
        Ok(tournaments)
    }

    async fn insert(&self, tournament: &Tournament) -> StoreResult<()> {
        let doc = serde_json::to_value(tournament)?;
        sqlx::query("INSERT INTO tournaments (id, doc) VALUES ($1, $2)")
            .bind(&tournament.id)
            .bind(doc)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn replace_by_id(&self, id: &str, tournament: &Tournament) -> StoreResult<()> {
        let doc = serde_json::to_value(tournament)?;
        sqlx::query("UPDATE tournaments SET doc = $2 WHERE id = $1")
            .bind(id)
            .bind(doc)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
