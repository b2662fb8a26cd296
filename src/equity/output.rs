//! Simulation results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

/// Equity of one distinct hand string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandEquity {
    pub hand: String,
    /// How many input positions share this string.
    pub occurrences: usize,
    /// Percentage in [0, 100], already divided by `occurrences`.
    pub equity: f64,
}

/// Finalized result of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityReport {
    pub trials: u64,
    pub seed: u64,
    pub elapsed_seconds: f64,
    /// Input hand strings in input order.
    pub hands: Vec<String>,
    /// One entry per distinct hand string, in first-occurrence order.
    pub entries: Vec<HandEquity>,
}

impl EquityReport {
    /// Build a report from accumulated win-shares, one per input position.
    ///
    /// Positions with the same hand string share one bucket; the bucket's
    /// percentage is then divided by the number of positions in it.
    pub(crate) fn from_shares(hands: Vec<String>, shares: &[f64], trials: u64, seed: u64) -> Self {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut buckets: Vec<(String, usize, f64)> = Vec::new();

        for (hand, &share) in hands.iter().zip(shares) {
            match index.get(hand.as_str()) {
                Some(&i) => {
                    buckets[i].1 += 1;
                    buckets[i].2 += share;
                }
                None => {
                    index.insert(hand.as_str(), buckets.len());
                    buckets.push((hand.clone(), 1, share));
                }
            }
        }

        let entries = buckets
            .into_iter()
            .map(|(hand, occurrences, total)| HandEquity {
                hand,
                occurrences,
                equity: total / trials as f64 * 100.0 / occurrences as f64,
            })
            .collect();

        Self {
            trials,
            seed,
            elapsed_seconds: 0.0,
            hands,
            entries,
        }
    }

    /// Equity percentage for a hand string.
    pub fn get(&self, hand: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.hand == hand).map(|e| e.equity)
    }

    /// One percentage per input position.
    pub fn per_player(&self) -> Vec<(&str, f64)> {
        self.hands
            .iter()
            .map(|h| (h.as_str(), self.get(h).unwrap_or(0.0)))
            .collect()
    }

    /// Map from hand string to percentage.
    pub fn to_map(&self) -> FxHashMap<String, f64> {
        self.entries.iter().map(|e| (e.hand.clone(), e.equity)).collect()
    }

    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    pub fn print_summary(&self) {
        println!("\n=== Equity ({} trials, seed {}) ===", self.trials, self.seed);
        for (i, (hand, equity)) in self.per_player().into_iter().enumerate() {
            println!("Player {} ({}): {:.2}%", i + 1, hand, equity);
        }
        println!("Time: {:.2}s", self.elapsed_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_distinct_hands() {
        let report = EquityReport::from_shares(hands(&["a", "b"]), &[75.0, 25.0], 100, 1);
        assert_eq!(report.get("a"), Some(75.0));
        assert_eq!(report.get("b"), Some(25.0));
        assert_eq!(report.get("c"), None);
    }

    #[test]
    fn test_duplicate_strings_share_bucket() {
        let report = EquityReport::from_shares(hands(&["a", "x", "x"]), &[40.0, 35.0, 25.0], 100, 1);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[1].occurrences, 2);
        assert!((report.get("x").unwrap() - 30.0).abs() < 1e-12);

        let total: f64 = report.per_player().iter().map(|(_, e)| e).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_shape() {
        let report = EquityReport::from_shares(hands(&["a"]), &[10.0], 10, 3);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], 3);
        assert_eq!(json["entries"][0]["hand"], "a");
        assert_eq!(json["entries"][0]["equity"], 100.0);
    }
}
