//! Search configuration: depth limit and evaluator choice.
//!
//! Loaded from a `[search]` TOML table or from the classic comma-separated
//! agent argument string:
//!
//! ```text
//! depth=3,evalFn=better
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::eval::Evaluator;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed agent argument {0:?}, expected key=value")]
    MalformedArgument(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for option {key}")]
    InvalidValue { key: String, value: String },

    #[error("unknown evaluation function: {0}")]
    UnknownEvaluator(String),

    #[error("unknown search policy: {0}")]
    UnknownPolicy(String),

    #[error("failed to parse search config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    /// Raw game score
    #[default]
    #[serde(alias = "score", alias = "scoreEvaluationFunction")]
    Baseline,
    /// Score plus food and adversary distance terms
    #[serde(alias = "better", alias = "betterEvaluationFunction")]
    Composite,
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseline" | "score" | "scoreEvaluationFunction" => Ok(EvaluatorKind::Baseline),
            "composite" | "better" | "betterEvaluationFunction" => Ok(EvaluatorKind::Composite),
            _ => Err(ConfigError::UnknownEvaluator(s.to_string())),
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EvaluatorKind::Baseline => "baseline",
            EvaluatorKind::Composite => "composite",
        })
    }
}

/// Tunable constants of the composite evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    /// Subtracted as `threat_penalty / distance` per non-scared adversary
    pub threat_penalty: f64,
    /// Added as `food_bonus / distance` to the nearest food
    pub food_bonus: f64,
    /// Added as `scared_bonus / distance` per scared adversary
    pub scared_bonus: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            threat_penalty: 10.0,
            food_bonus: 10.0,
            scared_bonus: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum depth in plies (one ply = every agent moved once)
    pub depth: u32,
    pub evaluator: EvaluatorKind,
    pub weights: CompositeWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            evaluator: EvaluatorKind::default(),
            weights: CompositeWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn new(depth: u32, evaluator: EvaluatorKind) -> Self {
        Self {
            depth,
            evaluator,
            ..Default::default()
        }
    }

    /// Parse a `key=value,key=value` agent argument string on top of the
    /// defaults.
    pub fn from_agent_args(args: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_agent_args(args)?;
        Ok(config)
    }

    pub fn apply_agent_args(&mut self, args: &str) -> Result<(), ConfigError> {
        for pair in args.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedArgument(pair.to_string()))?;
            self.set(key.trim(), value.trim())?;
        }
        Ok(())
    }

    /// Set a single named option.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "depth" => {
                self.depth = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            }
            "evalFn" | "eval" | "evaluator" => self.evaluator = value.parse()?,
            "threat_penalty" | "food_bonus" | "scared_bonus" => {
                let weight: f64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
                match key {
                    "threat_penalty" => self.weights.threat_penalty = weight,
                    "food_bonus" => self.weights.food_bonus = weight,
                    _ => self.weights.scared_bonus = weight,
                }
            }
            _ => return Err(ConfigError::UnknownOption(key.to_string())),
        }
        Ok(())
    }

    /// Parse a standalone TOML document with the fields of this struct.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn evaluator(&self) -> Evaluator {
        Evaluator::from_config(self)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
