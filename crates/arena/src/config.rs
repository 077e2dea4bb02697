//! Arena configuration
//!
//! Loaded from a TOML file with an `[arena]` and a `[search]` table. Every
//! key is optional; CLI flags are applied on top by the binary.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use adversarial_engine::{SearchAgent, SearchConfig, SearchPolicy};
use grid_core::{Agent, AgentIndex, CONTROLLED, GridState};
use serde::{Deserialize, Serialize};
use simple_agents::{RandomAgent, ReflexAgent};

use crate::error::ArenaError;

/// Policy driving the controlled agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    #[default]
    #[serde(alias = "alpha-beta")]
    AlphaBeta,
    Expectimax,
    Reflex,
    Random,
}

impl AgentKind {
    fn policy(self) -> Option<SearchPolicy> {
        match self {
            AgentKind::Minimax => Some(SearchPolicy::Minimax),
            AgentKind::AlphaBeta => Some(SearchPolicy::AlphaBeta),
            AgentKind::Expectimax => Some(SearchPolicy::Expectimax),
            AgentKind::Reflex | AgentKind::Random => None,
        }
    }

    /// Builds the controlled agent. `seed` only matters for agents that
    /// draw random numbers.
    pub fn build(self, search: &SearchConfig, seed: u64) -> Box<dyn Agent<GridState>> {
        if let Some(policy) = self.policy() {
            return Box::new(SearchAgent::new(policy, search.clone()));
        }
        match self {
            AgentKind::Reflex => Box::new(ReflexAgent::seeded(seed)),
            _ => Box::new(RandomAgent::seeded(CONTROLLED, seed)),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgentKind::Minimax => "minimax",
            AgentKind::AlphaBeta => "alphabeta",
            AgentKind::Expectimax => "expectimax",
            AgentKind::Reflex => "reflex",
            AgentKind::Random => "random",
        })
    }
}

impl FromStr for AgentKind {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reflex" | "reflexagent" => Ok(AgentKind::Reflex),
            "random" | "randomagent" => Ok(AgentKind::Random),
            other => match other.parse::<SearchPolicy>() {
                Ok(SearchPolicy::Minimax) => Ok(AgentKind::Minimax),
                Ok(SearchPolicy::AlphaBeta) => Ok(AgentKind::AlphaBeta),
                Ok(SearchPolicy::Expectimax) => Ok(AgentKind::Expectimax),
                Err(_) => Err(ArenaError::UnknownAgent(s.to_string())),
            },
        }
    }
}

/// The `[arena]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Layout file to play on
    pub layout: PathBuf,
    /// Number of games in the session
    pub games: u32,
    /// Controlled-agent moves before a game is called a timeout
    pub max_moves: u32,
    /// Session seed; every agent RNG is derived from it
    pub seed: u64,
    pub agent: AgentKind,
    /// Where to write the JSON results (None = don't save)
    pub results: Option<PathBuf>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            layout: PathBuf::from("layouts/minimax_classic.lay"),
            games: 10,
            max_moves: 500,
            seed: 0,
            agent: AgentKind::default(),
            results: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub arena: SessionSettings,
    pub search: SearchConfig,
}

impl ArenaConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ArenaError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let text = std::fs::read_to_string(path).map_err(|e| ArenaError::io(path, e))?;
        Self::from_toml_str(&text)
    }
}

/// Seed for one agent's RNG in one game of a session.
///
/// Distinct (game, agent) pairs get unrelated streams, and the same triple
/// always gives the same seed.
pub fn agent_seed(session_seed: u64, game: u32, agent: AgentIndex) -> u64 {
    // SplitMix64 finalizer over the packed triple
    let mut z = session_seed
        .wrapping_add(u64::from(game).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add((agent as u64).wrapping_mul(0xD1B5_4A32_D192_ED03));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
