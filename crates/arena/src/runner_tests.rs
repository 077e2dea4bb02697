use super::*;
use adversarial_engine::{SearchAgent, SearchConfig};
use grid_core::{AgentIndex, Direction, GameError, SearchResult};

use crate::config::{AgentKind, SessionSettings};

const CORRIDOR: &str = "\
%%%%%%%%%%
%. P    G%
%%%%%%%%%%
";

/// Plays the same action every turn.
struct Fixed {
    index: AgentIndex,
    action: Option<Direction>,
}

impl Agent<GridState> for Fixed {
    fn get_action(&mut self, _state: &GridState) -> Result<SearchResult<Direction>, GameError> {
        Ok(SearchResult::immediate(self.action, 0.0))
    }

    fn index(&self) -> AgentIndex {
        self.index
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

fn fixed(index: AgentIndex, action: Option<Direction>) -> Box<dyn Agent<GridState>> {
    Box::new(Fixed { index, action })
}

fn grid(text: &str) -> GridState {
    GridState::from_layout_str(text).unwrap()
}

#[test]
fn test_search_agent_wins_corridor() {
    let state = grid(CORRIDOR);
    let mut agents: Vec<Box<dyn Agent<GridState>>> = vec![
        Box::new(SearchAgent::alpha_beta(SearchConfig::default())),
        Box::new(RandomAgent::seeded(1, 0)),
    ];

    let record = GameRunner::new(50).play(0, &state, &mut agents).unwrap();

    assert_eq!(record.outcome, Outcome::Win);
    assert_eq!(record.score, 508.0);
    assert_eq!(record.moves, 2);
    assert!(record.nodes > 0);
}

#[test]
fn test_caught_is_a_loss() {
    let state = grid("%%%%%\n%PG.%\n%%%%%");
    let mut agents = vec![fixed(0, Some(Direction::East)), fixed(1, Some(Direction::East))];

    let record = GameRunner::new(50).play(4, &state, &mut agents).unwrap();

    assert_eq!(record.game, 4);
    assert_eq!(record.outcome, Outcome::Loss);
    assert_eq!(record.score, -501.0);
    assert_eq!(record.moves, 1);
}

#[test]
fn test_move_limit_is_a_timeout() {
    // The controlled agent is walled in and can only stop.
    let state = grid("%%%%%%%\n%P%. G%\n%%%%%%%");
    let mut agents: Vec<Box<dyn Agent<GridState>>> = vec![
        Box::new(RandomAgent::seeded(0, 1)),
        Box::new(RandomAgent::seeded(1, 2)),
    ];

    let record = GameRunner::new(5).play(0, &state, &mut agents).unwrap();

    assert_eq!(record.outcome, Outcome::Timeout);
    assert_eq!(record.moves, 5);
    assert_eq!(record.score, -5.0);
}

#[test]
fn test_missing_action_aborts_game() {
    let state = grid(CORRIDOR);
    let mut agents = vec![fixed(0, None), fixed(1, Some(Direction::West))];

    let err = GameRunner::new(10).play(0, &state, &mut agents).unwrap_err();
    assert!(matches!(err, ArenaError::NoAction { agent: 0, turn: 0 }));
}

#[test]
fn test_illegal_action_aborts_game() {
    let state = grid(CORRIDOR);
    let mut agents = vec![fixed(0, Some(Direction::North)), fixed(1, Some(Direction::West))];

    let err = GameRunner::new(10).play(0, &state, &mut agents).unwrap_err();
    assert!(matches!(
        err,
        ArenaError::Game(GameError::IllegalAction { agent: 0, action: Direction::North })
    ));
}

#[test]
fn test_agent_count_must_match_layout() {
    let state = grid(CORRIDOR);
    let mut agents = vec![fixed(0, Some(Direction::West))];

    let err = GameRunner::new(10).play(0, &state, &mut agents).unwrap_err();
    assert!(matches!(err, ArenaError::AgentCount { expected: 2, found: 1 }));
}

#[test]
fn test_agents_must_be_in_index_order() {
    let state = grid(CORRIDOR);
    let mut agents = vec![fixed(1, Some(Direction::West)), fixed(0, Some(Direction::West))];

    let err = GameRunner::new(10).play(0, &state, &mut agents).unwrap_err();
    assert!(matches!(err, ArenaError::AgentOrder { slot: 0, index: 1 }));
}

fn session(agent: AgentKind, games: u32, seed: u64) -> Session {
    let config = ArenaConfig {
        arena: SessionSettings {
            games,
            seed,
            agent,
            max_moves: 60,
            ..Default::default()
        },
        search: SearchConfig::default(),
    };
    let layout = Layout::parse("%%%%%%%%%\n%P. . .G%\n%.%%%%%.%\n%. o . G%\n%%%%%%%%%").unwrap();
    Session::new(config, layout)
}

#[test]
fn test_session_builds_one_agent_per_index() {
    let session = session(AgentKind::Minimax, 1, 0);
    let agents = session.agents_for(0);
    assert_eq!(agents.len(), 3);
    for (index, agent) in agents.iter().enumerate() {
        assert_eq!(agent.index(), index);
    }
}

#[test]
fn test_session_is_reproducible() {
    let a = session(AgentKind::Random, 4, 17).run().unwrap();
    let b = session(AgentKind::Random, 4, 17).run().unwrap();
    assert_eq!(a.games, b.games);
    assert_eq!(a.summary.total_games(), 4);
}

#[test]
fn test_session_records_every_game() {
    let results = session(AgentKind::AlphaBeta, 3, 5).run().unwrap();
    assert_eq!(results.games.len(), 3);
    assert_eq!(results.agent, "alphabeta");
    for (i, record) in results.games.iter().enumerate() {
        assert_eq!(record.game, i as u32);
        assert!(record.moves <= 60);
        assert!(record.nodes > 0);
    }
}
