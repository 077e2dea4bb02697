//! Node counts and timings for each search policy on a few layouts.
//!
//! Usage:
//!   cargo run --release --example compare_engines -p adversarial_engine -- [depth] [evaluator]
//!
//! Examples:
//!   # Default: depth 3, baseline evaluator
//!   cargo run --release --example compare_engines -p adversarial_engine
//!
//!   # Deeper search with the composite evaluator
//!   cargo run --release --example compare_engines -p adversarial_engine -- 4 better

use adversarial_engine::{EvaluatorKind, SearchConfig, SearchContext, SearchPolicy, SearchStats};
use grid_core::GridState;
use std::env;
use std::time::{Duration, Instant};

const LAYOUTS: &[(&str, &str)] = &[
    ("Corridor", "%%%%%%%%%%\n%. P    G%\n%%%%%%%%%%"),
    (
        "Two adversaries",
        "%%%%%%%%%\n%P. . .G%\n%.%%%%%.%\n%. o . G%\n%%%%%%%%%",
    ),
    (
        "Open room",
        "%%%%%%%%%%\n%.. .  G.%\n%.%%.%%%.%\n%. P  o .%\n%.%%%%%%.%\n%..  G ..%\n%%%%%%%%%%",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
    let kind: EvaluatorKind = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();

    let config = SearchConfig::new(depth, kind);
    let evaluator = config.evaluator();

    println!("=== Engine Comparison ===");
    println!("Depth: {depth}  Evaluator: {kind}");
    println!();

    for (name, text) in LAYOUTS {
        let state = match GridState::from_layout_str(text) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        println!("{name}");

        for policy in SearchPolicy::ALL {
            let ctx = SearchContext::new(depth, &evaluator);
            let mut stats = SearchStats::default();

            let start = Instant::now();
            let result = policy.search(&state, &ctx, &mut stats);
            let elapsed = start.elapsed();

            match result {
                Ok(best) => println!(
                    "  {:.<14} {:>10} nodes in {:>9.3?} ({:>10.0} nps)  value {:>9.2}  action {:?}",
                    policy.to_string(),
                    stats.nodes,
                    elapsed,
                    nps(stats.nodes, elapsed),
                    best.value,
                    best.action,
                ),
                Err(e) => println!("  {policy}: search failed: {e}"),
            }
        }
        println!();
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
