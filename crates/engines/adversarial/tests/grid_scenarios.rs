//! End-to-end searches on real grid layouts
//!
//! - All three policies agree when the adversary has a single option
//! - Alpha-beta agrees with minimax and never expands more nodes
//! - Composite evaluation steers away from adversaries

use adversarial_engine::{
    CompositeEvaluator, EvaluatorKind, SearchAgent, SearchConfig, SearchContext,
    SearchPolicy, SearchStats,
};
use grid_core::{Direction, GameState, GridState};

/// Food 2 cells west, adversary 5 cells east against a wall, so it can only
/// ever move west.
const CORRIDOR: &str = "\
%%%%%%%%%%
%. P    G%
%%%%%%%%%%
";

const TWO_GHOSTS: &str = "\
%%%%%%%%%
%P. . .G%
%.%%%%%.%
%. o . G%
%%%%%%%%%
";

#[test]
fn test_policies_agree_on_corridor() {
    let state = GridState::from_layout_str(CORRIDOR).unwrap();

    for evaluator in [EvaluatorKind::Baseline, EvaluatorKind::Composite] {
        let config = SearchConfig::new(2, evaluator);
        let results: Vec<_> = SearchPolicy::ALL
            .iter()
            .map(|&policy| SearchAgent::new(policy, config.clone()).search(&state).unwrap())
            .collect();

        for r in &results {
            assert_eq!(r.action, Some(Direction::West), "{evaluator}");
            assert_eq!(r.value, results[0].value, "{evaluator}");
        }
    }
}

#[test]
fn test_corridor_baseline_value_is_the_win() {
    let state = GridState::from_layout_str(CORRIDOR).unwrap();
    let result = SearchAgent::minimax(SearchConfig::default()).search(&state).unwrap();
    // Two moves, one food, the win bonus
    assert_eq!(result.value, -2.0 + 10.0 + 500.0);
    assert_eq!(result.depth, 2);
}

#[test]
fn test_alphabeta_matches_minimax_with_two_adversaries() {
    let state = GridState::from_layout_str(TWO_GHOSTS).unwrap();
    assert_eq!(state.num_agents(), 3);

    let composite = CompositeEvaluator::default();
    for depth in 0..=3 {
        let ctx = SearchContext::new(depth, &composite);

        let mut mm_stats = SearchStats::default();
        let mm = SearchPolicy::Minimax.search(&state, &ctx, &mut mm_stats).unwrap();
        let mut ab_stats = SearchStats::default();
        let ab = SearchPolicy::AlphaBeta.search(&state, &ctx, &mut ab_stats).unwrap();

        assert_eq!(ab.value, mm.value, "depth {depth}");
        assert!(ab_stats.nodes <= mm_stats.nodes, "depth {depth}");
    }
}

#[test]
fn test_search_avoids_being_caught() {
    // Moving east walks into the adversary; waiting or going west survives.
    let state = GridState::from_layout_str("%%%%%%%\n%.  PG%\n%%%%%%%").unwrap();
    for policy in SearchPolicy::ALL {
        let action = SearchAgent::new(policy, SearchConfig::new(1, EvaluatorKind::Composite))
            .choose_action(&state)
            .unwrap();
        assert_ne!(action, Some(Direction::East), "{policy}");
        assert_ne!(action, Some(Direction::Stop), "{policy}");
    }
}
