//! Passive income tick.
//!
//! One tick stands for one simulated minute: the monthly cash flow is spread
//! evenly over `minutes_per_month` ticks and added to the balance.

use super::config::EngineConfig;
use super::game_state::GameState;

/// Result of processing a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub net_change: f64,
    pub balance: f64,
}

/// Balance change for one tick at the given monthly rates.
pub fn net_per_tick(monthly_income: f64, monthly_expenses: f64, minutes_per_month: f64) -> f64 {
    (monthly_income - monthly_expenses) / minutes_per_month
}

/// Accrue one tick of cash flow and record the new balance.
pub fn apply_tick(state: &mut GameState, config: &EngineConfig) -> TickOutcome {
    let net_change = net_per_tick(
        state.monthly_income,
        state.monthly_expenses,
        config.minutes_per_month,
    );
    state.balance += net_change;
    state.ticks_elapsed += 1;
    state.record_balance();
    state.bump_version();

    tracing::trace!(
        tick = state.ticks_elapsed,
        net_change,
        balance = state.balance,
        "tick"
    );

    TickOutcome {
        net_change,
        balance: state.balance,
    }
}

/// Process `count` ticks. Returns the total balance change.
pub fn apply_ticks(state: &mut GameState, config: &EngineConfig, count: u32) -> f64 {
    (0..count)
        .map(|_| apply_tick(state, config).net_change)
        .sum()
}
