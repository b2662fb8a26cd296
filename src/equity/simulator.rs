//! Monte Carlo equity simulation.
//!
//! Trials are grouped into fixed-size batches. Each batch gets its own deck
//! and an `StdRng` derived from the base seed and the batch index, runs on
//! the rayon pool, and returns a vector of win-shares per input position.
//! Batch results are summed in batch order, so the outcome depends only on
//! the seed and batch size.

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

use crate::cards::{HandEvaluator, HandRanker};
use crate::error::{ConfigError, EquityError, SimulationError};

use super::complete::Dealer;
use super::config::SimConfig;
use super::output::EquityReport;
use super::spec::HandSpec;

/// Runs trials over a fixed set of hand specifications.
#[derive(Debug, Clone)]
pub struct Simulator<E: HandRanker = HandEvaluator> {
    specs: Vec<HandSpec>,
    config: SimConfig,
    ranker: E,
}

impl Simulator<HandEvaluator> {
    /// Create a simulator using the built-in hand evaluator.
    pub fn new(specs: Vec<HandSpec>, config: SimConfig) -> Self {
        Self::with_ranker(specs, config, HandEvaluator::new())
    }
}

impl<E: HandRanker> Simulator<E> {
    /// Create a simulator with a custom 5-card ranker.
    pub fn with_ranker(specs: Vec<HandSpec>, config: SimConfig, ranker: E) -> Self {
        Self {
            specs,
            config,
            ranker,
        }
    }

    /// Run every trial and finalize percentages.
    pub fn run(&self) -> Result<EquityReport, EquityError> {
        self.config.validate()?;

        let start = Instant::now();
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let trials = self.config.trials;
        let batches = self.config.num_batches();

        log::info!(
            "simulating {} hands over {} trials ({} batches, seed {})",
            self.specs.len(),
            trials,
            batches,
            seed
        );
        self.warn_duplicates();

        let progress = if self.config.show_progress {
            let bar = ProgressBar::new(batches);
            let template = "{bar:40} {pos}/{len} batches [{elapsed_precise}<{eta_precise}]";
            if let Ok(style) = ProgressStyle::with_template(template) {
                bar.set_style(style);
            }
            bar
        } else {
            ProgressBar::hidden()
        };

        let compute = || {
            (0..batches)
                .into_par_iter()
                .map(|batch| -> Result<Vec<f64>, SimulationError> {
                    let first = batch * self.config.batch_size;
                    let count = self.config.batch_size.min(trials - first);
                    let shares = self.run_batch(batch_seed(seed, batch), count)?;
                    log::debug!("batch {} finished ({} trials)", batch, count);
                    progress.inc(1);
                    Ok(shares)
                })
                .collect::<Result<Vec<Vec<f64>>, SimulationError>>()
        };

        let per_batch = match self.config.num_threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads.max(1))
                .build()
                .map_err(|e| ConfigError::ThreadPool(e.to_string()))?
                .install(compute),
            None => compute(),
        }?;
        progress.finish_and_clear();

        let mut shares = vec![0.0; self.specs.len()];
        for batch in &per_batch {
            for (total, share) in shares.iter_mut().zip(batch) {
                *total += share;
            }
        }

        let hands = self.specs.iter().map(|s| s.text().to_string()).collect();
        let mut report = EquityReport::from_shares(hands, &shares, trials, seed);
        report.elapsed_seconds = start.elapsed().as_secs_f64();

        log::info!(
            "finished {} trials in {:.2}s ({:.0} trials/s)",
            trials,
            report.elapsed_seconds,
            trials as f64 / report.elapsed_seconds.max(f64::EPSILON)
        );

        Ok(report)
    }

    /// Run `count` trials with one random stream and return win-shares
    /// per input position.
    pub fn run_batch(&self, seed: u64, count: u64) -> Result<Vec<f64>, SimulationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut dealer = Dealer::new(&self.specs);
        let mut shares = vec![0.0; self.specs.len()];
        let mut scores = vec![0u32; self.specs.len()];

        for _ in 0..count {
            let deal = dealer.deal(&mut rng)?;
            for (score, hand) in scores.iter_mut().zip(&deal.hands) {
                *score = self.ranker.best_rank(hand, &deal.board);
            }
            award(&scores, &mut shares);
        }

        Ok(shares)
    }

    fn warn_duplicates(&self) {
        for (i, spec) in self.specs.iter().enumerate() {
            let first = self.specs.iter().position(|s| s.text() == spec.text());
            if first == Some(i) {
                let count = self.specs.iter().filter(|s| s.text() == spec.text()).count();
                if count > 1 {
                    log::warn!(
                        "hand '{}' appears {} times; its equity is reported per occurrence",
                        spec.text(),
                        count
                    );
                }
            }
        }
    }
}

/// Split one trial's win among every hand holding the best (lowest) score.
fn award(scores: &[u32], shares: &mut [f64]) {
    let Some(&best) = scores.iter().min() else {
        return;
    };
    let winners = scores.iter().filter(|&&s| s == best).count();
    let share = 1.0 / winners as f64;
    for (total, _) in shares.iter_mut().zip(scores).filter(|(_, &s)| s == best) {
        *total += share;
    }
}

/// Seed for one batch's random stream.
fn batch_seed(seed: u64, batch: u64) -> u64 {
    seed ^ batch.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
