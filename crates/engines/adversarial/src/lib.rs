//! Adversarial Search Engine
//!
//! Depth-limited game-tree search for the controlled agent (index 0) against
//! one or more adversaries moving in a fixed round-robin order.
//!
//! Three policies share one turn/depth protocol and differ only in how they
//! combine child values at adversary turns:
//! - Minimax: adversaries minimize
//! - AlphaBeta: same value as minimax, with pruning
//! - Expectimax: adversaries choose uniformly at random

pub mod alphabeta;
pub mod config;
pub mod eval;
pub mod expectimax;
pub mod minimax;
pub mod protocol;

#[cfg(test)]
mod test_tree;

use std::fmt;
use std::str::FromStr;

use grid_core::{Agent, AgentIndex, BoardView, CONTROLLED, GameError, GameState, SearchResult};
use tracing::{debug, warn};

pub use alphabeta::{alphabeta, alphabeta_root};
pub use config::*;
pub use eval::{CompositeEvaluator, Evaluate, Evaluator, ScoreEvaluator};
pub use expectimax::expectimax;
pub use minimax::minimax;
pub use protocol::{Scored, SearchContext, SearchStats, Turn, next_turn};

/// How child values are combined at adversary turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl SearchPolicy {
    pub const ALL: [SearchPolicy; 3] = [
        SearchPolicy::Minimax,
        SearchPolicy::AlphaBeta,
        SearchPolicy::Expectimax,
    ];

    /// Runs the policy from the root: controlled agent to move, depth 0.
    pub fn search<S, E>(
        self,
        state: &S,
        ctx: &SearchContext<'_, E>,
        stats: &mut SearchStats,
    ) -> Result<Scored<S::Action>, GameError>
    where
        S: GameState,
        E: Evaluate<S> + ?Sized,
    {
        match self {
            SearchPolicy::Minimax => minimax(state, 0, CONTROLLED, ctx, stats),
            SearchPolicy::AlphaBeta => alphabeta_root(state, ctx, stats),
            SearchPolicy::Expectimax => expectimax(state, 0, CONTROLLED, ctx, stats),
        }
    }
}

impl fmt::Display for SearchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchPolicy::Minimax => "minimax",
            SearchPolicy::AlphaBeta => "alphabeta",
            SearchPolicy::Expectimax => "expectimax",
        })
    }
}

impl FromStr for SearchPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" | "minimaxagent" => Ok(SearchPolicy::Minimax),
            "alphabeta" | "alpha-beta" | "alphabetaagent" => Ok(SearchPolicy::AlphaBeta),
            "expectimax" | "expectimaxagent" => Ok(SearchPolicy::Expectimax),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Search agent for the controlled agent, configured by policy, depth and
/// evaluator.
///
/// Each call to [`SearchAgent::choose_action`] is an independent search; no
/// state is carried between turns apart from statistics.
#[derive(Debug, Clone)]
pub struct SearchAgent {
    policy: SearchPolicy,
    config: SearchConfig,
    evaluator: Evaluator,
    name: String,
    /// Node counter for statistics
    nodes: u64,
}

impl SearchAgent {
    pub fn new(policy: SearchPolicy, config: SearchConfig) -> Self {
        let evaluator = config.evaluator();
        Self {
            name: Self::display_name(policy, &config),
            policy,
            config,
            evaluator,
            nodes: 0,
        }
    }

    pub fn minimax(config: SearchConfig) -> Self {
        Self::new(SearchPolicy::Minimax, config)
    }

    pub fn alpha_beta(config: SearchConfig) -> Self {
        Self::new(SearchPolicy::AlphaBeta, config)
    }

    pub fn expectimax(config: SearchConfig) -> Self {
        Self::new(SearchPolicy::Expectimax, config)
    }

    fn display_name(policy: SearchPolicy, config: &SearchConfig) -> String {
        format!("{}-d{}-{}", policy, config.depth, config.evaluator)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Total nodes expanded since the last `new_game`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `state` and returns the root value and action.
    pub fn search<S>(&mut self, state: &S) -> Result<SearchResult<S::Action>, GameError>
    where
        S: GameState + BoardView,
    {
        let ctx = SearchContext::new(self.config.depth, &self.evaluator);
        let mut stats = SearchStats::default();
        let best = self.policy.search(state, &ctx, &mut stats)?;
        self.nodes += stats.nodes;

        debug!(
            policy = %self.policy,
            depth = self.config.depth,
            value = best.value,
            nodes = stats.nodes,
            action = ?best.action,
            "search complete"
        );

        Ok(SearchResult {
            action: best.action,
            value: best.value,
            depth: self.config.depth,
            nodes: stats.nodes,
        })
    }

    /// The action to play this turn.
    pub fn choose_action<S>(&mut self, state: &S) -> Result<Option<S::Action>, GameError>
    where
        S: GameState + BoardView,
    {
        Ok(self.search(state)?.action)
    }

    /// Set a named search option (`depth`, `evalFn`, weights). Returns true
    /// if the option was applied.
    pub fn set_option(&mut self, name: &str, value: &str) -> bool {
        let mut config = self.config.clone();
        match config.set(name, value) {
            Ok(()) => {
                self.reconfigure(config);
                true
            }
            Err(e) => {
                warn!(option = name, value, error = %e, "rejected search option");
                false
            }
        }
    }

    pub fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn reconfigure(&mut self, config: SearchConfig) {
        self.evaluator = config.evaluator();
        self.name = Self::display_name(self.policy, &config);
        self.config = config;
    }
}

impl<S: GameState + BoardView> Agent<S> for SearchAgent {
    fn get_action(&mut self, state: &S) -> Result<SearchResult<S::Action>, GameError> {
        self.search(state)
    }

    fn index(&self) -> AgentIndex {
        CONTROLLED
    }

    fn name(&self) -> &str {
        SearchAgent::name(self)
    }

    fn new_game(&mut self) {
        SearchAgent::new_game(self);
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        SearchAgent::set_option(self, name, value)
    }
}
