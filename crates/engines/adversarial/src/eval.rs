//! Static evaluation of non-expanded states.
//!
//! Every evaluator scores a state from the controlled agent's perspective:
//! higher is better.

use grid_core::{BoardView, GameState, manhattan};

use crate::config::{CompositeWeights, EvaluatorKind, SearchConfig};

/// Distances below this are raised to it before dividing.
///
/// An adversary sharing the controlled agent's cell is distance 0; clamping
/// keeps every distance term finite and applies it consistently to threats,
/// scared adversaries and food.
pub const MIN_DISTANCE: u32 = 1;

pub trait Evaluate<S> {
    fn evaluate(&self, state: &S) -> f64;
}

/// Baseline: the raw game score, unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreEvaluator;

impl<S: GameState> Evaluate<S> for ScoreEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

/// Raw score adjusted for adversary threat, scared-adversary opportunity
/// and distance to the nearest food.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompositeEvaluator {
    pub weights: CompositeWeights,
}

impl CompositeEvaluator {
    pub fn new(weights: CompositeWeights) -> Self {
        Self { weights }
    }
}

fn clamped_distance(d: u32) -> f64 {
    d.max(MIN_DISTANCE) as f64
}

impl<S: GameState + BoardView> Evaluate<S> for CompositeEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        let w = &self.weights;
        let me = state.controlled_position();
        let mut score = state.score();

        for ghost in state.adversaries() {
            let distance = clamped_distance(manhattan(me, ghost.position));
            if ghost.scared_timer > 0 {
                score += w.scared_bonus / distance;
            } else {
                score -= w.threat_penalty / distance;
            }
        }

        let nearest_food = state
            .food_positions()
            .into_iter()
            .map(|food| manhattan(me, food))
            .min();
        if let Some(d) = nearest_food {
            score += w.food_bonus / clamped_distance(d);
        }

        score
    }
}

/// Evaluator selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Evaluator {
    #[default]
    Baseline,
    Composite(CompositeWeights),
}

impl Evaluator {
    pub fn from_config(config: &SearchConfig) -> Self {
        match config.evaluator {
            EvaluatorKind::Baseline => Evaluator::Baseline,
            EvaluatorKind::Composite => Evaluator::Composite(config.weights),
        }
    }

    pub fn kind(&self) -> EvaluatorKind {
        match self {
            Evaluator::Baseline => EvaluatorKind::Baseline,
            Evaluator::Composite(_) => EvaluatorKind::Composite,
        }
    }
}

impl<S: GameState + BoardView> Evaluate<S> for Evaluator {
    fn evaluate(&self, state: &S) -> f64 {
        match self {
            Evaluator::Baseline => ScoreEvaluator.evaluate(state),
            Evaluator::Composite(weights) => CompositeEvaluator::new(*weights).evaluate(state),
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
