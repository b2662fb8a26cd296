//! # Six-Card Equity
//!
//! Monte Carlo equity estimation for a 6-card community-board poker variant.
//! Each player holds six cards and makes the best five-card hand from
//! exactly two hole cards and exactly three of the five board cards.
//!
//! Hands may be only partly known. A hand string has six dot-separated
//! tokens: a known card (`Ah`), a suit placeholder (`oh`, any heart) or a
//! wildcard (`x`, any card).
//!
//! ## Quick Start
//!
//! ```no_run
//! use sixcard_equity::{simulate, validate};
//!
//! let hands = ["Ah.Ac.oh.oc.x.x", "x.x.x.x.x.x", "x.x.x.x.x.x"];
//! validate(&hands)?;
//! let report = simulate(&hands, 10_000)?;
//! for (hand, equity) in report.per_player() {
//!     println!("{hand}: {equity:.2}%");
//! }
//! # Ok::<(), sixcard_equity::EquityError>(())
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Cards, the working deck and hand ranking
//! - [`equity`]: Parsing, validation and the simulation loop
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//!   hand strings ──► validate ──► HandSpec ×N
//!                                     │
//!                                     ▼
//!               ┌──────────── Simulator (rayon batches) ────────────┐
//!               │  Dealer: placeholders → wildcards → board         │
//!               │  HandRanker: best of 15 hole pairs × 10 triples   │
//!               │  award: 1/k to each of k tied winners             │
//!               └───────────────────────────────────────────────────┘
//!                                     │
//!                                     ▼
//!                               EquityReport
//! ```

pub mod cards;
pub mod equity;
pub mod error;

pub use cards::{Card, HandEvaluator, HandRanker, Suit};
pub use equity::{validate, validate_and_parse, EquityReport, HandSpec, SimConfig, Simulator, Slot};
pub use error::{ConfigError, EquityError, SimulationError, ValidationError};

/// Estimate equity for `hands` over `trials` random deals.
///
/// Input is parsed but not cross-checked; call [`validate`] first.
pub fn simulate<S: AsRef<str>>(hands: &[S], trials: u64) -> Result<EquityReport, EquityError> {
    simulate_with(hands, &SimConfig::default().with_trials(trials))
}

/// Estimate equity with full control over seeding, threading and batching.
pub fn simulate_with<S: AsRef<str>>(hands: &[S], config: &SimConfig) -> Result<EquityReport, EquityError> {
    let specs = hands
        .iter()
        .map(|h| HandSpec::parse(h.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    if specs.is_empty() {
        return Err(ValidationError::NoHands.into());
    }
    Simulator::new(specs, config.clone()).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_then_simulate() {
        let hands = ["Ah.Ac.oh.oc.x.x", "x.x.x.x.x.x", "x.x.x.x.x.x"];
        validate(&hands).unwrap();
        let report = simulate_with(&hands, &SimConfig::default().with_trials(4_000).with_seed(1)).unwrap();
        let total: f64 = report.per_player().iter().map(|(_, e)| e).sum();
        assert!((total - 100.0).abs() < 1e-6);
        assert!(report.to_map().contains_key("x.x.x.x.x.x"));
    }

    #[test]
    fn test_simulate_rejects_malformed_input() {
        let err = simulate(&["Ah.Ac.x"], 10).unwrap_err();
        assert!(matches!(
            err,
            EquityError::Validation(ValidationError::WrongCardCount { .. })
        ));
    }

    #[test]
    fn test_simulate_surfaces_exhaustion() {
        let hands = ["oh.oh.oh.oh.oh.oh", "oh.oh.oh.oh.oh.oh", "oh.oh.x.x.x.x"];
        assert!(validate(&hands).is_err());
        let err = simulate_with(&hands, &SimConfig::default().with_trials(10).with_seed(0)).unwrap_err();
        assert!(matches!(err, EquityError::Simulation(SimulationError::DeckExhausted { .. })));
    }

    #[test]
    fn test_seeded_simulate_is_deterministic() {
        let hands = ["Kh.Qh.oh.x.x.x", "9s.9d.x.x.x.x"];
        let config = SimConfig::default().with_trials(1_500).with_seed(2718);
        let a = simulate_with(&hands, &config).unwrap();
        let b = simulate_with(&hands, &config).unwrap();
        assert_eq!(a.entries, b.entries);
    }
}
