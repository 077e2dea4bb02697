use std::path::PathBuf;

use adversarial_engine::ConfigError;
use grid_core::{AgentIndex, GameError};
use thiserror::Error;

/// Failures that abort a game or a session.
#[derive(Error, Debug)]
pub enum ArenaError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("agent {agent} returned no action on turn {turn} of a live game")]
    NoAction { agent: AgentIndex, turn: u32 },

    #[error("layout needs {expected} agents, {found} were provided")]
    AgentCount { expected: usize, found: usize },

    #[error("agent in slot {slot} plays for agent {index}")]
    AgentOrder { slot: AgentIndex, index: AgentIndex },

    #[error("unknown agent: {0}")]
    UnknownAgent(String),

    #[error("failed to parse arena config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArenaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArenaError::Io {
            path: path.into(),
            source,
        }
    }
}
