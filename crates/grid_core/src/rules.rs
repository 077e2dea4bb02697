//! Movement, consumption and collision rules for the grid game.

use crate::board::GridState;
use crate::error::GameError;
use crate::types::*;

/// Score lost on every controlled-agent move.
pub const TIME_PENALTY: i64 = 1;
pub const FOOD_REWARD: i64 = 10;
/// Awarded when the last food item is eaten.
pub const WIN_BONUS: i64 = 500;
pub const EAT_ADVERSARY_REWARD: i64 = 200;
pub const CAUGHT_PENALTY: i64 = 500;
/// Adversary moves an adversary stays scared after a capsule is eaten.
pub const SCARED_TIME: u32 = 40;

pub fn legal_actions(state: &GridState, agent: AgentIndex) -> Vec<Direction> {
    if state.check_agent(agent).is_err() {
        return Vec::new();
    }
    if agent == CONTROLLED {
        controlled_actions(state)
    } else {
        adversary_actions(state, agent)
    }
}

fn open_directions(state: &GridState, from: Pos) -> impl Iterator<Item = Direction> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |&d| d != Direction::Stop && !state.layout.is_wall(from.step(d)))
}

fn controlled_actions(state: &GridState) -> Vec<Direction> {
    let from = state.agents[CONTROLLED].position;
    let mut actions: Vec<Direction> = open_directions(state, from).collect();
    actions.push(Direction::Stop);
    actions
}

/// Adversaries never stop and only reverse when cornered.
fn adversary_actions(state: &GridState, agent: AgentIndex) -> Vec<Direction> {
    let ghost = &state.agents[agent];
    let mut actions: Vec<Direction> = open_directions(state, ghost.position).collect();
    let reverse = ghost.direction.reverse();
    if actions.len() > 1 && reverse != Direction::Stop {
        actions.retain(|&d| d != reverse);
    }
    if actions.is_empty() {
        actions.push(Direction::Stop);
    }
    actions
}

/// Applies `action` for `agent` and returns the successor state.
pub fn apply(state: &GridState, agent: AgentIndex, action: Direction) -> Result<GridState, GameError> {
    if state.win || state.lose {
        return Err(GameError::TerminalState);
    }
    state.check_agent(agent)?;
    if !legal_actions(state, agent).contains(&action) {
        return Err(GameError::IllegalAction { agent, action });
    }

    let mut next = state.clone();
    if agent == CONTROLLED {
        move_controlled(&mut next, action);
        next.score -= TIME_PENALTY;
    } else {
        let ghost = &mut next.agents[agent];
        ghost.position = ghost.position.step(action);
        ghost.direction = action;
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
    }
    resolve_collisions(&mut next, agent);
    Ok(next)
}

fn move_controlled(state: &mut GridState, action: Direction) {
    let me = &mut state.agents[CONTROLLED];
    me.position = me.position.step(action);
    me.direction = action;
    let pos = me.position;

    if let Some(i) = state.layout.index(pos)
        && state.food[i]
    {
        state.food[i] = false;
        state.food_left -= 1;
        state.score += FOOD_REWARD;
        if state.food_left == 0 && !state.lose {
            state.score += WIN_BONUS;
            state.win = true;
        }
    }

    if let Some(i) = state.capsules.iter().position(|&c| c == pos) {
        state.capsules.swap_remove(i);
        for ghost in &mut state.agents[1..] {
            ghost.scared_timer = SCARED_TIME;
        }
    }
}

/// The controlled agent checks every adversary; an adversary only itself.
fn resolve_collisions(state: &mut GridState, mover: AgentIndex) {
    let me = state.agents[CONTROLLED].position;
    let candidates: Vec<AgentIndex> = if mover == CONTROLLED {
        (1..state.agents.len()).collect()
    } else {
        vec![mover]
    };

    for index in candidates {
        let ghost = &mut state.agents[index];
        if ghost.position != me {
            continue;
        }
        if ghost.is_scared() {
            ghost.position = ghost.start;
            ghost.direction = Direction::Stop;
            ghost.scared_timer = 0;
            state.score += EAT_ADVERSARY_REWARD;
        } else if !state.win {
            state.score -= CAUGHT_PENALTY;
            state.lose = true;
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
