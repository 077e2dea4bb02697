//! Arena CLI
//!
//! Runs a seeded session of games on one layout and reports the results.
//! CLI flags override the config file, which overrides the defaults.

use std::path::PathBuf;

use adversarial_engine::EvaluatorKind;
use anyhow::{Context, Result};
use arena::{AgentKind, ArenaConfig, Session};
use clap::Parser;
use tracing::info;

/// Play the grid chase game with search agents against random adversaries.
#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Run adversarial search agents on grid layouts")]
struct Cli {
    /// TOML config file with [arena] and [search] tables.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Layout file to play on.
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Controlled agent: minimax, alphabeta, expectimax, reflex or random.
    #[arg(short, long)]
    agent: Option<String>,

    /// Search depth in plies.
    #[arg(short, long)]
    depth: Option<u32>,

    /// Evaluation function: baseline (score) or composite (better).
    #[arg(short, long)]
    eval: Option<String>,

    /// Classic agent arguments, e.g. "depth=3,evalFn=better".
    #[arg(long)]
    agent_args: Option<String>,

    /// Number of games to play.
    #[arg(short, long)]
    games: Option<u32>,

    /// Session seed for reproducibility.
    #[arg(long)]
    seed: Option<u64>,

    /// Controlled-agent moves before a game times out.
    #[arg(long)]
    max_moves: Option<u32>,

    /// Write JSON results to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence).
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Layers the flags over `config`.
    fn apply(&self, config: &mut ArenaConfig) -> Result<()> {
        let arena = &mut config.arena;
        if let Some(layout) = &self.layout {
            arena.layout = layout.clone();
        }
        if let Some(agent) = &self.agent {
            arena.agent = agent.parse::<AgentKind>()?;
        }
        if let Some(games) = self.games {
            arena.games = games;
        }
        if let Some(seed) = self.seed {
            arena.seed = seed;
        }
        if let Some(max_moves) = self.max_moves {
            arena.max_moves = max_moves;
        }
        if let Some(output) = &self.output {
            arena.results = Some(output.clone());
        }

        let search = &mut config.search;
        if let Some(args) = &self.agent_args {
            search
                .apply_agent_args(args)
                .with_context(|| format!("invalid agent arguments {args:?}"))?;
        }
        if let Some(depth) = self.depth {
            search.depth = depth;
        }
        if let Some(eval) = &self.eval {
            search.evaluator = eval.parse::<EvaluatorKind>()?;
        }
        Ok(())
    }
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let mut config = match &cli.config {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ArenaConfig::default(),
    };
    cli.apply(&mut config)?;

    info!(
        agent = %config.arena.agent,
        layout = %config.arena.layout.display(),
        depth = config.search.depth,
        evaluator = %config.search.evaluator,
        games = config.arena.games,
        seed = config.arena.seed,
        "starting session"
    );

    let session = Session::from_config(config).context("failed to load layout")?;
    let results = session.run()?;
    results.print_report();

    if let Some(path) = &session.config().arena.results {
        results
            .save(path)
            .with_context(|| format!("failed to save results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }

    Ok(())
}
