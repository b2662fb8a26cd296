//! Configuration options for the equity simulator.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Configuration for a simulation run.
///
/// # Example
/// ```
/// use sixcard_equity::SimConfig;
///
/// let config = SimConfig::default().with_trials(50_000).with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of independent trials.
    pub trials: u64,

    /// Random seed for reproducibility.
    ///
    /// If `None`, a seed is drawn from entropy and reported in the result,
    /// so the run can still be repeated.
    pub seed: Option<u64>,

    /// Number of worker threads.
    ///
    /// Set to 0 or 1 for single-threaded execution.
    /// Set to `None` to use rayon's global pool.
    pub num_threads: Option<usize>,

    /// Trials per batch. Each batch owns one random stream, so results
    /// depend on the seed and this value but not on the thread count.
    pub batch_size: u64,

    /// Show a progress bar while running.
    pub show_progress: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: None,
            num_threads: None,
            batch_size: 1_000,
            show_progress: false,
        }
    }
}

impl SimConfig {
    /// Create a new SimConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the trial count.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set trials per batch.
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Builder method: toggle the progress bar.
    pub fn with_progress(mut self, enable: bool) -> Self {
        self.show_progress = enable;
        self
    }

    /// Number of batches the trials split into.
    pub fn num_batches(&self) -> u64 {
        self.trials.div_ceil(self.batch_size.max(1))
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::InvalidTrials);
        }
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        Ok(())
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.num_batches(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_batches_round_up() {
        let config = SimConfig::new().with_trials(2_500).with_batch_size(1_000);
        assert_eq!(config.num_batches(), 3);
        let config = SimConfig::new().with_trials(1).with_batch_size(1_000);
        assert_eq!(config.num_batches(), 1);
    }

    #[test]
    fn test_rejects_zero() {
        assert_eq!(
            SimConfig::new().with_trials(0).validate(),
            Err(ConfigError::InvalidTrials)
        );
        assert_eq!(
            SimConfig::new().with_batch_size(0).validate(),
            Err(ConfigError::InvalidBatchSize)
        );
    }

    #[test]
    fn test_json_partial_fields() {
        let config = SimConfig::from_json_str(r#"{ "trials": 500, "seed": 9 }"#).unwrap();
        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.batch_size, 1_000);

        assert!(matches!(
            SimConfig::from_json_str(r#"{ "trials": 0 }"#),
            Err(ConfigError::InvalidTrials)
        ));
        assert!(matches!(
            SimConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
