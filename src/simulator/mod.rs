//! Headless balance simulator.
//!
//! Plays many seeded sessions with a simple autoplay policy to analyze:
//! - Final balance and cash flow after a simulated month
//! - How often purchases need financing
//! - How often a mandatory expense stalls a session
//!
//! Every run drives a real `Session`, so results match interactive play.

mod config;
mod report;
mod runner;
mod stats;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{decide, run_simulation, Decision};
pub use stats::RunStats;
