//! Minimax with alpha-beta pruning.

use grid_core::{AgentIndex, CONTROLLED, GameError, GameState};

use crate::eval::Evaluate;
use crate::protocol::{Scored, SearchContext, SearchStats, Turn, next_turn};

/// Same value as [`crate::minimax::minimax`], skipping subtrees that cannot
/// change the decision above them.
///
/// `alpha` is the best value the maximizer can already guarantee on the
/// current path, `beta` the best the minimizers can. Both are passed by value.
/// Pruning only happens on strict inequality, so equal-valued siblings are
/// still examined.
pub fn alphabeta<S, E>(
    state: &S,
    depth: u32,
    agent: AgentIndex,
    mut alpha: f64,
    mut beta: f64,
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
        let value = alphabeta(&child, next_depth, next_agent, alpha, beta, ctx, stats)?.value;
        best.offer(maximizing, value, action);

        if maximizing {
            if best.value > beta {
                return Ok(best); // Beta cutoff
            }
            alpha = alpha.max(best.value);
        } else {
            if best.value < alpha {
                return Ok(best); // Alpha cutoff
            }
            beta = beta.min(best.value);
        }
    }

    Ok(best)
}

/// Root call with the full (-inf, +inf) window.
pub fn alphabeta_root<S, E>(
    state: &S,
    ctx: &SearchContext<'_, E>,
    stats: &mut SearchStats,
) -> Result<Scored<S::Action>, GameError>
where
    S: GameState,
    E: Evaluate<S> + ?Sized,
{
    alphabeta(
        state,
        0,
        CONTROLLED,
        f64::NEG_INFINITY,
        f64::INFINITY,
        ctx,
        stats,
    )
}
