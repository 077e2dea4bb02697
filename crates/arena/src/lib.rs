//! Arena: game driver for the grid chase game
//!
//! This crate provides infrastructure for:
//! - Playing full games between the controlled agent and its adversaries
//! - Running reproducible sessions of many games from a seed
//! - Storing session results and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta at depth 3 against random adversaries
//! cargo run -p arena -- --layout layouts/minimax_classic.lay --agent alphabeta --depth 3
//!
//! # Classic agent arguments and a config file
//! cargo run -p arena -- --config arena.toml --agent-args depth=4,evalFn=better
//! ```

mod config;
mod error;
mod results;
mod runner;

pub use config::*;
pub use error::*;
pub use results::*;
pub use runner::*;
