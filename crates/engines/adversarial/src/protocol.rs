//! Turn and depth bookkeeping shared by every search engine.
//!
//! A node is the triple (state, depth, agent-to-move). Depth counts full
//! rotations through all agents and only advances when the turn comes back
//! to the controlled agent.

use grid_core::{AgentIndex, CONTROLLED, GameState};

use crate::eval::Evaluate;

/// Value of a search node and the action that achieved it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<A> {
    pub value: f64,
    /// None at cutoff nodes and at chance nodes
    pub action: Option<A>,
}

impl<A: Copy> Scored<A> {
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            action: None,
        }
    }

    /// Starting point for a max or min node before any child is seen.
    pub(crate) fn unset(maximizing: bool) -> Self {
        Self::leaf(if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }

    /// Keeps the first action whose value strictly improves on the running
    /// best. The first child is always taken so a node with children never
    /// reports no action.
    pub(crate) fn offer(&mut self, maximizing: bool, value: f64, action: A) {
        let better = if maximizing {
            value > self.value
        } else {
            value < self.value
        };
        if better || self.action.is_none() {
            self.value = value;
            self.action = Some(action);
        }
    }
}

/// Node counter threaded through a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Immutable parameters of one search, passed to every recursive call.
#[derive(Debug)]
pub struct SearchContext<'a, E: ?Sized> {
    /// Maximum depth in plies
    pub max_depth: u32,
    pub evaluator: &'a E,
}

impl<'a, E: ?Sized> SearchContext<'a, E> {
    pub fn new(max_depth: u32, evaluator: &'a E) -> Self {
        Self {
            max_depth,
            evaluator,
        }
    }

    pub fn evaluate<S>(&self, state: &S) -> f64
    where
        E: Evaluate<S>,
    {
        self.evaluator.evaluate(state)
    }
}

/// What a node does next.
#[derive(Debug, Clone, PartialEq)]
pub enum Turn<A> {
    /// Evaluate the state directly
    Cutoff,
    /// Recurse once per action
    Expand {
        actions: Vec<A>,
        next_agent: AgentIndex,
        next_depth: u32,
    },
}

/// Decides whether `(state, depth, agent)` is a cutoff node and, if not,
/// which agent and depth its children are searched at.
pub fn next_turn<S: GameState>(
    state: &S,
    depth: u32,
    agent: AgentIndex,
    max_depth: u32,
) -> Turn<S::Action> {
    if depth >= max_depth || state.is_win() || state.is_lose() {
        return Turn::Cutoff;
    }

    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        return Turn::Cutoff;
    }

    let next_agent = (agent + 1) % state.num_agents().max(1);
    let next_depth = if next_agent == CONTROLLED {
        depth + 1
    } else {
        depth
    };

    Turn::Expand {
        actions,
        next_agent,
        next_depth,
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
