//! Ranking of tournament players by point total.

use serde::{Deserialize, Serialize};

use super::models::{Player, Tournament, TournamentId};

/// A player decorated with their position in the standings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlayer {
    /// The underlying player record
    pub player: Player,
    /// 1-based position, best first
    pub rank: u32,
}

/// Read model: a tournament with its players in ranked order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentInfo {
    pub id: TournamentId,
    pub name: String,
    pub is_open: bool,
    pub start_date: String,
    pub end_date: Option<String>,
    /// Standings, best first
    pub players: Vec<RankedPlayer>,
}

impl From<Tournament> for TournamentInfo {
    fn from(tournament: Tournament) -> Self {
        let players = rank_players(&tournament.players);
        Self {
            id: tournament.id,
            name: tournament.name,
            is_open: tournament.is_open,
            start_date: tournament.start_date,
            end_date: tournament.end_date,
            players,
        }
    }
}

/// Rank players by point total, best first.
///
/// Sorts descending by points, with ascending player id as the tie-break so
/// the output is deterministic. Ranks are the 1-based positions in that
/// order: equal totals get distinct consecutive ranks, never a shared one.
pub fn rank_players(players: &[Player]) -> Vec<RankedPlayer> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| b.points.total_cmp(&a.points).then_with(|| a.id.cmp(&b.id)));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, player)| RankedPlayer {
            player,
            rank: (i + 1) as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::models::{PlayerDraft, TournamentDraft};

    fn player(id: &str, points: f64) -> Player {
        Player {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            points,
        }
    }

    #[test]
    fn test_rank_empty_roster() {
        assert!(rank_players(&[]).is_empty());
    }

    #[test]
    fn test_rank_single_player() {
        let ranked = rank_players(&[player("a", 50.0)]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].player.id, "a");
    }

    #[test]
    fn test_rank_orders_by_points_descending() {
        let ranked = rank_players(&[player("a", 10.0), player("b", 30.0), player("c", 20.0)]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.player.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_tied_points_get_distinct_ranks_by_id() {
        let ranked = rank_players(&[player("b", 50.0), player("a", 50.0)]);
        assert_eq!(ranked[0].player.id, "a");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].player.id, "b");
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_rank_handles_negative_points() {
        let ranked = rank_players(&[player("a", -5.0), player("b", 0.0)]);
        assert_eq!(ranked[0].player.id, "b");
        assert_eq!(ranked[1].player.id, "a");
    }

    #[test]
    fn test_info_from_tournament_ranks_players() {
        let tournament = Tournament::from_draft(TournamentDraft {
            name: "Cup".to_string(),
            players: vec![
                PlayerDraft {
                    id: Some("low".to_string()),
                    display_name: "Low".to_string(),
                    points: Some(1.0),
                },
                PlayerDraft {
                    id: Some("high".to_string()),
                    display_name: "High".to_string(),
                    points: Some(99.0),
                },
            ],
            ..Default::default()
        });
        let info = TournamentInfo::from(tournament.clone());
        assert_eq!(info.id, tournament.id);
        assert_eq!(info.players[0].player.id, "high");
        assert_eq!(info.players[0].rank, 1);
        assert_eq!(info.players[1].player.id, "low");
        assert_eq!(info.players[1].rank, 2);
    }
}
