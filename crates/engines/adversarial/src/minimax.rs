//! Full-width minimax over a round-robin agent order.

use grid_core::{AgentIndex, CONTROLLED, GameError, GameState};

use crate::eval::Evaluate;
use crate::protocol::{Scored, SearchContext, SearchStats, Turn, next_turn};

/// Value of `state` when the controlled agent maximizes and every adversary
/// minimizes.
///
/// Ties keep the first action in enumeration order.
pub fn minimax<S, E>(
    state: &S,
    depth: u32,
    agent: AgentIndex,
    ctx: &SearchContext<'_, E>,
    stats: &mut SearchStats,
) -> Result<Scored<S::Action>, GameError>
where
    S: GameState,
    E: Evaluate<S> + ?Sized,
{
    stats.nodes += 1;

    let (actions, next_agent, next_depth) = match next_turn(state, depth, agent, ctx.max_depth) {
        Turn::Cutoff => return Ok(Scored::leaf(ctx.evaluate(state))),
        Turn::Expand {
            actions,
            next_agent,
            next_depth,
        } => (actions, next_agent, next_depth),
    };

    let maximizing = agent == CONTROLLED;
    let mut best = Scored::unset(maximizing);
    for action in actions {
        let child = state.successor(agent, action)?;
        let value = minimax(&child, next_depth, next_agent, ctx, stats)?.value;
        best.offer(maximizing, value, action);
    }

    Ok(best)
}
