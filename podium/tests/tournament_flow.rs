//! Integration tests for the tournament lifecycle
//!
//! These tests drive the manager over the in-memory store, from creation
//! through enrollment, point transfers, standings, and closing.

#[cfg(test)]
mod tournament_flow_tests {
    use podium::db::MemoryTournamentStore;
    use podium::tournament::{
        DEFAULT_STARTING_POINTS, PlayerDraft, TournamentDraft, TournamentError,
        TournamentManager, TournamentQuery,
    };
    use std::sync::Arc;

    fn manager() -> TournamentManager {
        TournamentManager::new(Arc::new(MemoryTournamentStore::new()))
    }

    fn player(id: &str, name: &str) -> PlayerDraft {
        PlayerDraft {
            id: Some(id.to_string()),
            display_name: name.to_string(),
            points: None,
        }
    }

    #[tokio::test]
    async fn test_full_tournament_lifecycle() {
        let manager = manager();

        // Create with one player enrolled up front
        let created = manager
            .create_tournament(TournamentDraft {
                name: "Winter Cup".to_string(),
                players: vec![player("ana", "Ana")],
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(created.is_open);
        assert_eq!(created.players[0].points, DEFAULT_STARTING_POINTS);

        // Enroll two more and move points around
        manager.add_player(&created.id, player("ben", "Ben")).await.unwrap();
        manager.add_player(&created.id, player("cho", "Cho")).await.unwrap();
        manager
            .set_player_points(&created.id, "cho", 70.0)
            .await
            .unwrap();
        manager
            .steal_points(&created.id, "ana", "ben", 10.0)
            .await
            .unwrap();

        // Standings: Cho 70, Ana 60, Ben 40
        let standings = manager.list_players(&created.id).await.unwrap();
        let order: Vec<(&str, f64, u32)> = standings
            .iter()
            .map(|r| (r.player.id.as_str(), r.player.points, r.rank))
            .collect();
        assert_eq!(
            order,
            vec![("cho", 70.0, 1), ("ana", 60.0, 2), ("ben", 40.0, 3)]
        );

        // Close and verify the roster is gone but the record remains
        manager.close_tournament(&created.id).await.unwrap();
        let closed = manager.get_tournament(&created.id).await.unwrap();
        assert!(!closed.is_open);
        assert!(closed.players.is_empty());
        assert!(closed.end_date.is_some());

        let err = manager.close_tournament(&created.id).await.unwrap_err();
        assert!(matches!(err, TournamentError::AlreadyClosed(_)));
    }

    #[tokio::test]
    async fn test_standings_reorder_after_transfers() {
        let manager = manager();
        let created = manager
            .create_tournament(TournamentDraft {
                name: "Swing Cup".to_string(),
                players: vec![player("a", "A"), player("b", "B")],
                ..Default::default()
            })
            .await
            .unwrap();

        // Equal points: tie broken by id, "a" leads
        let standings = manager.list_players(&created.id).await.unwrap();
        assert_eq!(standings[0].player.id, "a");

        // After b robs a, b leads outright
        manager
            .steal_points(&created.id, "b", "a", 25.0)
            .await
            .unwrap();
        let standings = manager.list_players(&created.id).await.unwrap();
        assert_eq!(standings[0].player.id, "b");
        assert_eq!(standings[0].player.points, 75.0);
        assert_eq!(standings[1].player.points, 25.0);
    }

    #[tokio::test]
    async fn test_transfers_conserve_total_points() {
        let manager = manager();
        let created = manager
            .create_tournament(TournamentDraft {
                name: "Conservation Cup".to_string(),
                players: vec![player("a", "A"), player("b", "B"), player("c", "C")],
                ..Default::default()
            })
            .await
            .unwrap();

        let total_before: f64 = manager
            .list_players(&created.id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.player.points)
            .sum();

        manager.steal_points(&created.id, "a", "b", 10.0).await.unwrap();
        manager.steal_points(&created.id, "b", "c", 35.5).await.unwrap();
        manager.steal_points(&created.id, "c", "a", 5.0).await.unwrap();
        // A failed transfer must not move anything either
        let err = manager
            .steal_points(&created.id, "a", "c", 1000.0)
            .await
            .unwrap_err();
        assert!(matches!(err, TournamentError::InsufficientPoints { .. }));

        let total_after: f64 = manager
            .list_players(&created.id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.player.points)
            .sum();
        assert_eq!(total_before, total_after);
    }

    #[tokio::test]
    async fn test_pagination_walks_all_open_tournaments() {
        let manager = manager();
        let mut ids = Vec::new();
        for i in 0..5 {
            let t = manager
                .create_tournament(TournamentDraft {
                    name: format!("Cup {i}"),
                    ..Default::default()
                })
                .await
                .unwrap();
            ids.push(t.id);
        }

        // Page through two at a time; the last page is short
        let mut seen = Vec::new();
        for page_index in 0..3 {
            let page = manager
                .list_tournaments(&TournamentQuery {
                    is_open: Some(true),
                    limit: Some(2),
                    offset: Some(page_index),
                })
                .await
                .unwrap();
            seen.extend(page.into_iter().map(|t| t.id));
        }
        assert_eq!(seen, ids);

        // Past the end is empty, not an error
        let past_the_end = manager
            .list_tournaments(&TournamentQuery {
                is_open: Some(true),
                limit: Some(2),
                offset: Some(99),
            })
            .await
            .unwrap();
        assert!(past_the_end.is_empty());
    }

    #[tokio::test]
    async fn test_closed_tournaments_drop_out_of_open_listing() {
        let manager = manager();
        let keep = manager
            .create_tournament(TournamentDraft {
                name: "Keep".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let close = manager
            .create_tournament(TournamentDraft {
                name: "Close".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        manager.close_tournament(&close.id).await.unwrap();

        let open = manager
            .list_tournaments(&TournamentQuery {
                is_open: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, keep.id);

        let everything = manager
            .list_tournaments(&TournamentQuery::default())
            .await
            .unwrap();
        assert_eq!(everything.len(), 2);
    }
}
