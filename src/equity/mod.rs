//! Equity estimation for partially specified 6-card hands.
//!
//! ## Modules
//!
//! - `spec`: Hand string parsing into slots
//! - `validate`: Cross-hand validation
//! - `complete`: Per-trial hand completion and board dealing
//! - `simulator`: The batched Monte Carlo loop and tie-split aggregation
//! - `config`: Simulation configuration
//! - `output`: Finalized equity reports

pub mod spec;
pub mod validate;
pub mod complete;
pub mod simulator;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use spec::{HandSpec, Slot};
pub use validate::{validate, validate_and_parse, MAX_HANDS};
pub use complete::{Deal, Dealer};
pub use simulator::Simulator;
pub use config::SimConfig;
pub use output::{EquityReport, HandEquity};
