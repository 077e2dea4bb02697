//! One-ply reflex agent for the controlled agent.

use grid_core::{
    Agent, AgentIndex, BoardView, CONTROLLED, GameError, GameState, SearchResult, manhattan,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::trace;

/// Adversaries closer than this to the landing cell make an action fatal.
pub const DANGER_RADIUS: u32 = 3;

/// Scores every legal action by its immediate successor and plays the best.
///
/// Ties are broken by the agent's own seeded RNG.
#[derive(Debug, Clone)]
pub struct ReflexAgent {
    rng: StdRng,
    nodes: u64,
}

impl ReflexAgent {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Value of the state reached by the controlled agent's move.
    pub fn evaluate<S: GameState + BoardView>(successor: &S) -> f64 {
        let me = successor.controlled_position();
        let threatened = successor
            .adversaries()
            .iter()
            .any(|a| manhattan(a.position, me) < DANGER_RADIUS);
        if threatened {
            return f64::NEG_INFINITY;
        }

        let nearest_food = successor
            .food_positions()
            .into_iter()
            .map(|food| manhattan(food, me).max(1))
            .min();
        match nearest_food {
            Some(d) => successor.score() + 1.0 / d as f64,
            None => successor.score(),
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<S: GameState + BoardView> Agent<S> for ReflexAgent {
    fn get_action(&mut self, state: &S) -> Result<SearchResult<S::Action>, GameError> {
        let mut best_value = f64::NEG_INFINITY;
        let mut best = Vec::new();
        let mut expanded = 0;

        for action in state.legal_actions(CONTROLLED) {
            let successor = state.successor(CONTROLLED, action)?;
            expanded += 1;
            let value = Self::evaluate(&successor);
            trace!(?action, value, "reflex candidate");

            if best.is_empty() || value > best_value {
                best_value = value;
                best.clear();
                best.push(action);
            } else if value == best_value {
                best.push(action);
            }
        }

        self.nodes += expanded;
        let action = best.choose(&mut self.rng).copied();
        Ok(SearchResult {
            action,
            value: best_value,
            depth: 1,
            nodes: expanded,
        })
    }

    fn index(&self) -> AgentIndex {
        CONTROLLED
    }

    fn name(&self) -> &str {
        "reflex"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "reflex_tests.rs"]
mod reflex_tests;
