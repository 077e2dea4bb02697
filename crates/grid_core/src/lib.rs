pub mod board;
pub mod error;
pub mod game;
pub mod layout;
pub mod rules;
pub mod types;

// Re-export core game logic (not agent-specific)
pub use board::GridState;
pub use error::*;
pub use game::*;
pub use layout::Layout;
pub use types::*;

// =============================================================================
// Agent trait: implemented by every policy (search, reflex, random)
// =============================================================================

/// Result of asking an agent for an action.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    /// The chosen action (None if the agent had nothing to play)
    pub action: Option<A>,
    /// Value of the decision from the controlled agent's perspective
    pub value: f64,
    /// Search depth used, in plies
    pub depth: u32,
    /// Number of nodes expanded (optional, for stats)
    pub nodes: u64,
}

impl<A> SearchResult<A> {
    /// Result for policies that do not search.
    pub fn immediate(action: Option<A>, value: f64) -> Self {
        Self {
            action,
            value,
            depth: 0,
            nodes: 1,
        }
    }
}

/// Trait that every agent taking part in a game must implement.
///
/// The driver calls `get_action` once per turn for the agent whose turn it is.
pub trait Agent<S: GameState> {
    /// Choose an action for `self.index()` in `state`.
    ///
    /// Errors only propagate what the game-state collaborator raised.
    fn get_action(&mut self, state: &S) -> Result<SearchResult<S::Action>, GameError>;

    /// Position of this agent in the turn rotation
    fn index(&self) -> AgentIndex;

    /// Human-readable name for logs and reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game (counters, RNG streams, etc.)
    fn new_game(&mut self) {}

    /// Optional: set a named option. Returns true if the option was applied.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
