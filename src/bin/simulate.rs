//! Balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 runs to stage 15
//!   cargo run --bin simulate -- -n 100 -t 6      # 100 runs to stage 6
//!   cargo run --bin simulate -- --seed 42        # Reproducible run
//!   cargo run --bin simulate -- --no-loans       # Frugal strategy

use snakeout::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("=== SNAKEOUT BALANCE SIMULATOR ===");
    println!();
    println!("Configuration:");
    println!("  Runs:          {}", config.num_runs);
    println!("  Target Stage:  {}", config.target_stage);
    println!("  Take Loans:    {}", config.take_loans);
    println!("  Buy Items:     {}", config.buy_items);
    if let Some(seed) = config.seed {
        println!("  Seed:          {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-t" | "--target" => {
                if i + 1 < args.len() {
                    config.target_stage = args[i + 1].parse().unwrap_or(15);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--no-loans" => {
                config.take_loans = false;
            }
            "--no-shop" => {
                config.buy_items = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Snakeout balance simulator");
    println!();
    println!("Options:");
    println!("  -n, --runs <N>     Number of runs (default 1000)");
    println!("  -t, --target <N>   Target stage (default 15)");
    println!("  -s, --seed <N>     Random seed for reproducibility");
    println!("      --no-loans     Never borrow from the bank");
    println!("      --no-shop      Never buy items");
    println!("      --json         Also write a JSON report");
    println!("  -v, --verbose      Per-run output");
    println!("  -q, --quiet        Summary only");
}
