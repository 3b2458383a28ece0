/// Property-based tests for player ranking using proptest
///
/// These tests verify that the standings are always a permutation of the
/// roster with contiguous 1-based ranks, across randomly generated inputs.
use podium::tournament::{Player, rank_players};
use proptest::prelude::*;
use std::collections::HashSet;

// Strategy to generate a player with a short alphanumeric id and finite points
fn player_strategy() -> impl Strategy<Value = Player> {
    ("[a-z0-9]{1,8}", -1000.0f64..1000.0).prop_map(|(id, points)| Player {
        display_name: id.to_uppercase(),
        id,
        points,
    })
}

// Strategy to generate a roster with unique player ids
fn roster_strategy(max: usize) -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(player_strategy(), 0..=max).prop_filter(
        "Player ids must be unique",
        |players| {
            let ids: HashSet<&str> = players.iter().map(|p| p.id.as_str()).collect();
            ids.len() == players.len()
        },
    )
}

proptest! {
    #[test]
    fn test_ranks_are_exactly_one_to_n(players in roster_strategy(12)) {
        let ranked = rank_players(&players);
        prop_assert_eq!(ranked.len(), players.len());

        let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
        let expected: Vec<u32> = (1..=players.len() as u32).collect();
        prop_assert_eq!(ranks, expected);
    }

    #[test]
    fn test_points_never_increase_down_the_standings(players in roster_strategy(12)) {
        let ranked = rank_players(&players);
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].player.points >= pair[1].player.points,
                "standings out of order: {} before {}",
                pair[0].player.points,
                pair[1].player.points
            );
        }
    }

    #[test]
    fn test_standings_are_a_permutation_of_the_roster(players in roster_strategy(12)) {
        let ranked = rank_players(&players);

        let mut input_ids: Vec<&str> = players.iter().map(|p| p.id.as_str()).collect();
        let mut output_ids: Vec<&str> = ranked.iter().map(|r| r.player.id.as_str()).collect();
        input_ids.sort_unstable();
        output_ids.sort_unstable();
        prop_assert_eq!(input_ids, output_ids);
    }

    #[test]
    fn test_ranking_ignores_roster_order(players in roster_strategy(12)) {
        let forward = rank_players(&players);

        let mut reversed = players.clone();
        reversed.reverse();
        let backward = rank_players(&reversed);

        prop_assert_eq!(forward, backward);
    }
}
