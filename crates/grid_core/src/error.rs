use thiserror::Error;

use crate::types::{AgentIndex, Direction};

/// Failures raised by the game-state collaborator.
///
/// Search engines never create these; they only propagate them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("cannot generate a successor of a terminal state")]
    TerminalState,

    #[error("agent {agent} cannot play {action}")]
    IllegalAction { agent: AgentIndex, action: Direction },

    #[error("agent index {agent} out of range for {num_agents} agents")]
    InvalidAgent {
        agent: AgentIndex,
        num_agents: usize,
    },

    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Problems found while parsing a layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown character {ch:?} at row {row}, column {col}")]
    UnknownCell { ch: char, row: usize, col: usize },

    #[error("layout has no controlled agent ('P')")]
    MissingControlled,

    #[error("layout has more than one controlled agent ('P')")]
    DuplicateControlled,

    #[error("failed to read layout file {path}: {message}")]
    Io { path: String, message: String },
}
