//! In-memory implementation of the tournament store.
//!
//! Backs tests and embedded deployments that have no PostgreSQL around.
//! Tournaments are held in insertion order, so list slicing behaves
//! deterministically under test.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::tournament::{StoreResult, Tournament};

use super::store::TournamentStore;

/// Tournament store backed by process memory
#[derive(Default)]
pub struct MemoryTournamentStore {
    tournaments: RwLock<Vec<Tournament>>,
}

impl MemoryTournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with tournaments
    pub fn with_tournaments(tournaments: Vec<Tournament>) -> Self {
        Self {
            tournaments: RwLock::new(tournaments),
        }
    }
}

#[async_trait]
impl TournamentStore for MemoryTournamentStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Tournament>> {
        let tournaments = self.tournaments.read().await;
        Ok(tournaments.iter().find(|t| t.id == id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Tournament>> {
        Ok(self.tournaments.read().await.clone())
    }

    async fn insert(&self, tournament: &Tournament) -> StoreResult<()> {
        self.tournaments.write().await.push(tournament.clone());
        Ok(())
    }

    async fn replace_by_id(&self, id: &str, tournament: &Tournament) -> StoreResult<()> {
        let mut tournaments = self.tournaments.write().await;
        if let Some(slot) = tournaments.iter_mut().find(|t| t.id == id) {
            *slot = tournament.clone();
        }
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::models::TournamentDraft;

    fn tournament(id: &str) -> Tournament {
        Tournament::from_draft(TournamentDraft {
            id: Some(id.to_string()),
            name: format!("Cup {id}"),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_insert_then_find_by_id() {
        let store = MemoryTournamentStore::new();
        store.insert(&tournament("t1")).await.unwrap();

        let found = store.find_by_id("t1").await.unwrap();
        assert_eq!(found.map(|t| t.id), Some("t1".to_string()));
        assert!(store.find_by_id("t2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let store = MemoryTournamentStore::new();
        for id in ["b", "a", "c"] {
            store.insert(&tournament(id)).await.unwrap();
        }

        let all = store.find_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_replace_swaps_the_stored_document() {
        let store = MemoryTournamentStore::new();
        store.insert(&tournament("t1")).await.unwrap();

        let mut updated = tournament("t1");
        updated.is_open = false;
        store.replace_by_id("t1", &updated).await.unwrap();

        let found = store.find_by_id("t1").await.unwrap().unwrap();
        assert!(!found.is_open);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_replace_missing_id_is_silent() {
        let store = MemoryTournamentStore::new();
        store
            .replace_by_id("ghost", &tournament("ghost"))
            .await
            .unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
