//! Expectimax: adversaries are chance nodes choosing uniformly at random.

use grid_core::{AgentIndex, CONTROLLED, GameError, GameState};

use crate::eval::Evaluate;
use crate::protocol::{Scored, SearchContext, SearchStats, Turn, next_turn};

/// Maximizes at the controlled agent and averages over every legal action
/// at adversary turns.
///
/// Chance nodes return `action: None`. Their parent only reads the value;
/// the only action a caller ever consumes is the one from the root call.
pub fn expectimax<S, E>(
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

    if agent == CONTROLLED {
        let mut best = Scored::unset(true);
        for action in actions {
            let child = state.successor(agent, action)?;
            let value = expectimax(&child, next_depth, next_agent, ctx, stats)?.value;
            best.offer(true, value, action);
        }
        return Ok(best);
    }

    // Cutoff already covers the empty case, so the count is never zero.
    let count = actions.len() as f64;
    let mut total = 0.0;
    for action in actions {
        let child = state.successor(agent, action)?;
        total += expectimax(&child, next_depth, next_agent, ctx, stats)?.value;
    }

    Ok(Scored::leaf(total / count))
}
