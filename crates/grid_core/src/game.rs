//! The game-state capability consumed by search agents.
//!
//! Search engines only need the turn-taking surface ([`GameState`]); the
//! heuristic evaluators additionally read board features through
//! [`BoardView`]. Any game with a fixed round-robin agent order can plug in.

use crate::error::GameError;
use crate::types::{AdversaryView, AgentIndex, Pos};

pub trait GameState: Clone {
    type Action: Copy + Eq + std::fmt::Debug;

    /// Legal actions for `agent`, in a stable order.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// State reached after `agent` plays `action`.
    fn successor(&self, agent: AgentIndex, action: Self::Action) -> Result<Self, GameError>;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Number of agents in the rotation, always at least 1.
    fn num_agents(&self) -> usize;

    /// Raw game score from the controlled agent's perspective.
    fn score(&self) -> f64;

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// Board features read by heuristic evaluators.
pub trait BoardView {
    fn controlled_position(&self) -> Pos;

    /// One entry per adversary currently on the board, in agent order.
    fn adversaries(&self) -> Vec<AdversaryView>;

    /// Positions of every remaining consumable item.
    fn food_positions(&self) -> Vec<Pos>;
}
