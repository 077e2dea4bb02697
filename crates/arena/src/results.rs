//! Session results storage and reporting

use adversarial_engine::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ArenaError;
use crate::runner::{GameRecord, Outcome};

/// Totals over every game of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub wins: u32,
    pub losses: u32,
    pub timeouts: u32,
    pub average_score: f64,
    /// Fraction of games won (0.0-1.0)
    pub win_rate: f64,
    pub total_nodes: u64,
}

impl Summary {
    pub fn from_games(games: &[GameRecord]) -> Self {
        let mut summary = Summary::default();
        if games.is_empty() {
            return summary;
        }

        let mut total_score = 0.0;
        for record in games {
            match record.outcome {
                Outcome::Win => summary.wins += 1,
                Outcome::Loss => summary.losses += 1,
                Outcome::Timeout => summary.timeouts += 1,
            }
            total_score += record.score;
            summary.total_nodes += record.nodes;
        }

        let n = games.len() as f64;
        summary.average_score = total_score / n;
        summary.win_rate = summary.wins as f64 / n;
        summary
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.timeouts
    }
}

/// Complete session results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResults {
    /// Controlled agent policy
    pub agent: String,
    pub layout: String,
    pub seed: u64,
    /// Search settings used (ignored by non-search agents)
    pub search: SearchConfig,
    pub games: Vec<GameRecord>,
    pub summary: Summary,
}

impl SessionResults {
    pub fn new(agent: String, layout: String, seed: u64, search: SearchConfig) -> Self {
        Self {
            agent,
            layout,
            seed,
            search,
            games: Vec::new(),
            summary: Summary::default(),
        }
    }

    /// Add a finished game and refresh the summary
    pub fn add_game(&mut self, record: GameRecord) {
        self.games.push(record);
        self.summary = Summary::from_games(&self.games);
    }

    /// Save results to a JSON file, creating missing parent directories
    pub fn save(&self, path: &Path) -> Result<(), ArenaError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| ArenaError::io(dir, e))?;
        }
        std::fs::write(path, json).map_err(|e| ArenaError::io(path, e))
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ArenaError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Session: {} on {} ===\n\n", self.agent, self.layout));
        report.push_str(&format!(
            "Config: depth {}, {} evaluator, seed {}\n\n",
            self.search.depth, self.search.evaluator, self.seed
        ));

        report.push_str(&format!(
            "{:>5} {:<8} {:>8} {:>6} {:>12}\n",
            "Game", "Outcome", "Score", "Moves", "Nodes"
        ));
        report.push_str(&"-".repeat(43));
        report.push('\n');

        for record in &self.games {
            report.push_str(&format!(
                "{:>5} {:<8} {:>8} {:>6} {:>12}\n",
                record.game + 1,
                format!("{:?}", record.outcome),
                record.score,
                record.moves,
                record.nodes
            ));
        }

        let s = &self.summary;
        report.push('\n');
        report.push_str(&format!(
            "Wins: {}, Losses: {}, Timeouts: {}\n",
            s.wins, s.losses, s.timeouts
        ));
        report.push_str(&format!("Average score: {:.2}\n", s.average_score));
        report.push_str(&format!("Win rate: {:.1}%\n", s.win_rate * 100.0));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
