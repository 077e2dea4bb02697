//! Game runner for playing full games and seeded sessions

use grid_core::{Agent, CONTROLLED, GameState, GridState, Layout};
use serde::{Deserialize, Serialize};
use simple_agents::RandomAgent;
use tracing::{debug, info};

use crate::config::{ArenaConfig, agent_seed};
use crate::error::ArenaError;
use crate::results::SessionResults;

/// How a game ended, from the controlled agent's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    /// Move limit reached before the game was decided
    Timeout,
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: u32,
    pub outcome: Outcome,
    pub score: f64,
    /// Moves made by the controlled agent
    pub moves: u32,
    /// Nodes expanded by the controlled agent over the whole game
    pub nodes: u64,
}

/// Plays single games in round-robin order.
#[derive(Debug, Clone)]
pub struct GameRunner {
    max_moves: u32,
}

impl GameRunner {
    pub fn new(max_moves: u32) -> Self {
        Self { max_moves }
    }

    /// Play one game from `initial`. `agents[i]` moves for agent index `i`.
    ///
    /// The game stops on a win, a loss, or after `max_moves` moves of the
    /// controlled agent.
    pub fn play<S: GameState>(
        &self,
        game: u32,
        initial: &S,
        agents: &mut [Box<dyn Agent<S>>],
    ) -> Result<GameRecord, ArenaError> {
        let expected = initial.num_agents();
        if agents.len() != expected {
            return Err(ArenaError::AgentCount {
                expected,
                found: agents.len(),
            });
        }
        if let Some((slot, agent)) = agents.iter().enumerate().find(|(i, a)| a.index() != *i) {
            return Err(ArenaError::AgentOrder {
                slot,
                index: agent.index(),
            });
        }
        for agent in agents.iter_mut() {
            agent.new_game();
        }

        let mut state = initial.clone();
        let mut moves = 0;
        let mut nodes = 0;

        'game: while moves < self.max_moves {
            for (index, agent) in agents.iter_mut().enumerate() {
                if state.is_terminal() {
                    break 'game;
                }
                let result = agent.get_action(&state)?;
                let action = result.action.ok_or(ArenaError::NoAction {
                    agent: index,
                    turn: moves,
                })?;
                if index == CONTROLLED {
                    moves += 1;
                    nodes += result.nodes;
                }
                state = state.successor(index, action)?;
            }
        }

        let outcome = if state.is_win() {
            Outcome::Win
        } else if state.is_lose() {
            Outcome::Loss
        } else {
            Outcome::Timeout
        };

        Ok(GameRecord {
            game,
            outcome,
            score: state.score(),
            moves,
            nodes,
        })
    }
}

/// A reproducible series of games on one layout.
///
/// Adversaries play uniformly at random, each with its own RNG derived from
/// the session seed.
#[derive(Debug, Clone)]
pub struct Session {
    config: ArenaConfig,
    layout: Layout,
}

impl Session {
    pub fn new(config: ArenaConfig, layout: Layout) -> Self {
        Self { config, layout }
    }

    /// Reads the layout named in the config.
    pub fn from_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        let layout = Layout::from_file(&config.arena.layout).map_err(grid_core::GameError::from)?;
        Ok(Self::new(config, layout))
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Agents for game number `game`, in agent order.
    pub fn agents_for(&self, game: u32) -> Vec<Box<dyn Agent<GridState>>> {
        let settings = &self.config.arena;
        let mut agents = Vec::with_capacity(self.layout.num_agents());
        agents.push(
            settings
                .agent
                .build(&self.config.search, agent_seed(settings.seed, game, CONTROLLED)),
        );
        for index in 1..self.layout.num_agents() {
            let seed = agent_seed(settings.seed, game, index);
            agents.push(Box::new(RandomAgent::seeded(index, seed)) as Box<dyn Agent<GridState>>);
        }
        agents
    }

    pub fn run(&self) -> Result<SessionResults, ArenaError> {
        let settings = &self.config.arena;
        let runner = GameRunner::new(settings.max_moves);
        let initial = GridState::new(self.layout.clone());

        let mut results = SessionResults::new(
            settings.agent.to_string(),
            settings.layout.display().to_string(),
            settings.seed,
            self.config.search.clone(),
        );

        for game in 0..settings.games {
            let mut agents = self.agents_for(game);
            debug!(game, agent = agents[CONTROLLED].name(), "starting game");

            let record = runner.play(game, &initial, &mut agents)?;
            info!(
                "Game {}/{}: {:?} score {} in {} moves ({} nodes)",
                game + 1,
                settings.games,
                record.outcome,
                record.score,
                record.moves,
                record.nodes
            );
            results.add_game(record);
        }

        Ok(results)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
