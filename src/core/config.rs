//! Engine configuration.
//!
//! Every field has a default from [`crate::core::constants`], so a config file
//! only needs the values it wants to change.

use super::constants::*;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tunable economy parameters for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cash the player starts with
    pub initial_balance: f64,

    /// Wall-clock period of one passive-income tick
    pub tick_interval_ms: u64,

    /// Maximum number of balance samples kept for the chart
    pub history_capacity: usize,

    /// Monthly surcharge on financed purchases, as a fraction of the principal
    pub loan_payment_rate: f64,

    /// Fraction of the acquisition cost recovered when an asset is sold
    pub asset_salvage_rate: f64,

    /// Simulated minutes in one month; one tick advances one simulated minute
    pub minutes_per_month: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_balance: INITIAL_BALANCE,
            tick_interval_ms: TICK_INTERVAL_MS,
            history_capacity: BALANCE_HISTORY_CAPACITY,
            loan_payment_rate: LOAN_PAYMENT_RATE,
            asset_salvage_rate: ASSET_SALVAGE_RATE,
            minutes_per_month: MINUTES_PER_MONTH,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_balance.is_finite() || self.initial_balance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "initial_balance must be a non-negative number, got {}",
                self.initial_balance
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.loan_payment_rate) {
            return Err(ConfigError::Invalid(format!(
                "loan_payment_rate must be within 0..=1, got {}",
                self.loan_payment_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.asset_salvage_rate) {
            return Err(ConfigError::Invalid(format!(
                "asset_salvage_rate must be within 0..=1, got {}",
                self.asset_salvage_rate
            )));
        }
        if !self.minutes_per_month.is_finite() || self.minutes_per_month <= 0.0 {
            return Err(ConfigError::Invalid(
                "minutes_per_month must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.initial_balance, 10_000.0);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.minutes_per_month, 43_200.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{"initial_balance": 2500.0}"#).unwrap();
        assert_eq!(config.initial_balance, 2500.0);
        assert_eq!(config.loan_payment_rate, LOAN_PAYMENT_RATE);
        assert_eq!(config.history_capacity, BALANCE_HISTORY_CAPACITY);
    }

    #[test]
    fn test_rejects_zero_history() {
        let err = EngineConfig::from_json_str(r#"{"history_capacity": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_out_of_range_rates() {
        let config = EngineConfig {
            asset_salvage_rate: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            loan_payment_rate: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = EngineConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
