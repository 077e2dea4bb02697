//! Tests for whole-game behaviour of the grid rules
//!
//! - Round-robin turns over several plies
//! - Board features exposed to evaluators
//! - Win and loss terminal states

use grid_core::{BoardView, CONTROLLED, Direction, GameState, GridState, Pos, rules};

const SMALL: &str = "\
%%%%%%%
%P . G%
% %%% %
%o   G%
%%%%%%%
";

// =============================================================================
// Board view
// =============================================================================

#[test]
fn test_board_view_reports_agents_and_food() {
    let state = GridState::from_layout_str(SMALL).unwrap();

    assert_eq!(state.num_agents(), 3);
    assert_eq!(state.controlled_position(), Pos::new(1, 1));

    let adversaries = state.adversaries();
    assert_eq!(adversaries.len(), 2);
    assert_eq!(adversaries[0].position, Pos::new(5, 1));
    assert_eq!(adversaries[1].position, Pos::new(5, 3));
    assert!(adversaries.iter().all(|a| a.scared_timer == 0));

    assert_eq!(state.food_positions(), vec![Pos::new(3, 1)]);
    assert_eq!(state.capsules(), &[Pos::new(1, 3)]);
}

// =============================================================================
// Turn rotation
// =============================================================================

#[test]
fn test_full_rotation_keeps_every_agent_on_open_cells() {
    let mut state = GridState::from_layout_str(SMALL).unwrap();

    for _ply in 0..4 {
        for agent in 0..state.num_agents() {
            if state.is_terminal() {
                return;
            }
            let actions = state.legal_actions(agent);
            assert!(!actions.is_empty(), "agent {agent} has no legal action");
            state = state.successor(agent, actions[0]).unwrap();
            let pos = state.agent(agent).unwrap().position;
            assert!(!state.layout().is_wall(pos));
        }
    }
}

#[test]
fn test_capsule_then_chase() {
    let state = GridState::from_layout_str(SMALL).unwrap();

    let s = state.successor(CONTROLLED, Direction::South).unwrap();
    let s = s.successor(1, Direction::South).unwrap();
    let s = s.successor(2, Direction::West).unwrap();
    let s = s.successor(CONTROLLED, Direction::South).unwrap();

    assert_eq!(s.controlled_position(), Pos::new(1, 3));
    assert!(s.capsules().is_empty());
    assert!(s.adversaries().iter().all(|a| a.scared_timer == rules::SCARED_TIME));
    assert_eq!(s.raw_score(), -2 * rules::TIME_PENALTY);
}

#[test]
fn test_display_includes_score() {
    let state = GridState::from_layout_str(SMALL).unwrap();
    let shown = state.to_string();
    assert!(shown.starts_with("%%%%%%%"));
    assert!(shown.ends_with("Score: 0"));
}
