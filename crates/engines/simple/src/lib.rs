//! Simple Agents
//!
//! Agents that do not search:
//! - [`RandomAgent`] plays a uniformly random legal action. It is the default
//!   adversary policy and a floor for any real agent.
//! - [`ReflexAgent`] looks one move ahead for the controlled agent.
//!
//! Both take an explicit seed so that games are reproducible.

pub mod reflex;

use grid_core::{Agent, AgentIndex, GameError, GameState, SearchResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub use reflex::ReflexAgent;


/// An agent that plays a random legal action.
///
/// No evaluation is done; every legal action is equally likely.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    index: AgentIndex,
    rng: StdRng,
    name: String,
    nodes: u64,
}

impl RandomAgent {
    pub fn seeded(index: AgentIndex, seed: u64) -> Self {
        Self {
            index,
            rng: StdRng::seed_from_u64(seed),
            name: format!("random-{index}"),
            nodes: 0,
        }
    }

    /// Number of decisions taken since the last `new_game`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn get_action(&mut self, state: &S) -> Result<SearchResult<S::Action>, GameError> {
        let actions = state.legal_actions(self.index);
        self.nodes += 1;
        let action = actions.choose(&mut self.rng).copied();
        Ok(SearchResult::immediate(action, 0.0))
    }

    fn index(&self) -> AgentIndex {
        self.index
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
