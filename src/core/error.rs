use thiserror::Error;

/// Reasons an intent is rejected. A rejected intent never mutates the game state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransactionError {
    #[error("Insufficient funds: need ${needed:.2}, have ${available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("Cash flow would turn negative: income ${income:.2}/mo vs expenses ${expenses_after:.2}/mo")]
    NegativeCashFlowRejected { income: f64, expenses_after: f64 },

    #[error("Not enough units to sell: requested {requested}, owned {owned}")]
    InsufficientHoldings { requested: u32, owned: u32 },

    #[error("You do not own {0}")]
    NothingOwned(String),

    #[error("Expenses are mandatory and cannot be skipped")]
    CannotSkipMandatory,

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Expenses cannot be sold")]
    NotSellable,
}

/// Errors raised while loading an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        let err = TransactionError::InsufficientFunds {
            needed: 150.0,
            available: 99.5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: need $150.00, have $99.50"
        );
        assert_eq!(
            TransactionError::NothingOwned("Restaurant".to_string()).to_string(),
            "You do not own Restaurant"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(err.to_string().starts_with("Config parse error"));
    }
}
