//! Per-session statistics.

use crate::core::GameState;
use serde::Serialize;

/// Outcome of one simulated session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub final_balance: f64,
    pub final_income: f64,
    pub final_expenses: f64,
    pub final_level: u32,
    pub total_ticks: u64,
    pub purchases: u32,
    pub financed_purchases: u32,
    pub sales: u32,
    pub skips: u32,
    pub rejections: u32,
    /// Ticks spent waiting to afford a mandatory expense
    pub waiting_ticks: u64,
    pub min_balance: f64,
    pub peak_balance: f64,
    /// The session ended early: an expense could never be afforded
    pub stalled: bool,
}

impl RunStats {
    pub fn new(initial_balance: f64) -> Self {
        Self {
            final_balance: initial_balance,
            min_balance: initial_balance,
            peak_balance: initial_balance,
            final_level: 1,
            ..Default::default()
        }
    }

    pub fn observe_balance(&mut self, balance: f64) {
        self.min_balance = self.min_balance.min(balance);
        self.peak_balance = self.peak_balance.max(balance);
    }

    /// Copy the closing figures from the final state.
    pub fn finish(&mut self, state: &GameState) {
        self.final_balance = state.balance;
        self.final_income = state.monthly_income;
        self.final_expenses = state.monthly_expenses;
        self.final_level = state.level();
        self.total_ticks = state.ticks_elapsed;
        self.observe_balance(state.balance);
    }

    pub fn cash_flow(&self) -> f64 {
        self.final_income - self.final_expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_extremes() {
        let mut stats = RunStats::new(100.0);
        stats.observe_balance(80.0);
        stats.observe_balance(140.0);
        assert_eq!(stats.min_balance, 80.0);
        assert_eq!(stats.peak_balance, 140.0);
    }
}
