//! Simulation configuration.

use crate::core::EngineConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum ticks (simulated minutes) per session
    pub max_ticks_per_run: u64,

    /// Ticks that pass between two player decisions
    pub ticks_per_decision: u64,

    /// Whether the autoplayer finances purchases it cannot pay cash for
    pub use_credit: bool,

    /// Largest stock lot bought in one decision
    pub max_stock_lot: u32,

    /// Sell a stock position once the price is this many percent above cost
    pub take_profit_percent: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,

    /// Economy parameters for every session
    pub engine: EngineConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_ticks_per_run: 43_200,
            ticks_per_decision: 60,
            use_credit: true,
            max_stock_lot: 10,
            take_profit_percent: 5.0,
            verbosity: 1,
            engine: EngineConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small deterministic config for tests and smoke runs
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_ticks_per_run: 2_000,
            ticks_per_decision: 20,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Cash-only play: never finance a purchase
    pub fn cash_only(mut self) -> Self {
        self.use_credit = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_simulates_one_month() {
        let config = SimConfig::default();
        assert_eq!(config.max_ticks_per_run as f64, config.engine.minutes_per_month);
        assert!(config.use_credit);
    }

    #[test]
    fn test_quick_is_seeded() {
        let config = SimConfig::quick(7).cash_only();
        assert_eq!(config.seed, Some(7));
        assert!(!config.use_credit);
        assert_eq!(config.verbosity, 0);
    }
}
