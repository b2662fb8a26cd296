//! Six-card equity calculator.
//!
//! Validates the given hand strings, runs the simulation and prints one
//! percentage per player.
//!
//! ```text
//! sixcard Ah.Ac.oh.oc.x.x x.x.x.x.x.x x.x.x.x.x.x -n 100000 --seed 7
//! ```

use std::process::ExitCode;

use clap::Parser;

use sixcard_equity::{validate_and_parse, SimConfig, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sixcard",
    about = "Estimate equity for 6-card community-board poker hands",
    long_about = "Estimate equity by Monte Carlo simulation.\n\
                  Hands are six dot-separated tokens: known cards (Ah), \
                  suit placeholders (oh) or wildcards (x)."
)]
struct Args {
    /// Hand strings, one per player (e.g. "Ah.Ac.oh.oc.x.x")
    #[arg(required = true)]
    hands: Vec<String>,

    /// Number of trials to run
    #[arg(short = 'n', long)]
    trials: Option<u64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Trials per random stream
    #[arg(long)]
    batch_size: Option<u64>,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<String>,

    /// Write the report as JSON to this path
    #[arg(long)]
    json: Option<String>,

    /// Show a progress bar
    #[arg(long)]
    progress: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match SimConfig::from_json_file(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path);
                config
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        None => SimConfig::default(),
    };
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(threads) = args.threads {
        config.num_threads = Some(threads);
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    config.show_progress |= args.progress;

    let specs = match validate_and_parse(args.hands.as_slice()) {
        Ok(specs) => specs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let report = match Simulator::new(specs, config).run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    report.print_summary();

    if let Some(path) = &args.json {
        match report.save_json(path) {
            Ok(_) => log::info!("saved JSON: {}", path),
            Err(e) => {
                eprintln!("Error saving JSON: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
