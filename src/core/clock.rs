//! Wall-clock driver for the passive income tick.
//!
//! The clock does not own a thread or timer. The event loop asks it how many
//! ticks are due at a given `Instant` and runs them. The clock re-arms (its
//! phase restarts) whenever the income/expense rates it captured change, and
//! yields nothing once stopped.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    last_tick: Instant,
    running: bool,
    captured_rates: (f64, f64),
}

impl TickClock {
    /// A running clock whose first tick is due one interval after `now`.
    pub fn new(interval: Duration, now: Instant, monthly_income: f64, monthly_expenses: f64) -> Self {
        Self {
            interval,
            last_tick: now,
            running: true,
            captured_rates: (monthly_income, monthly_expenses),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn captured_rates(&self) -> (f64, f64) {
        self.captured_rates
    }

    /// Stop ticking. Safe to call more than once.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Start (or restart) with a fresh phase and freshly captured rates.
    pub fn restart(&mut self, now: Instant, monthly_income: f64, monthly_expenses: f64) {
        self.running = true;
        self.last_tick = now;
        self.captured_rates = (monthly_income, monthly_expenses);
    }

    /// Re-arm if the rates differ from the captured ones. Returns true when
    /// the clock was restarted.
    pub fn sync_rates(&mut self, now: Instant, monthly_income: f64, monthly_expenses: f64) -> bool {
        if !self.running || self.captured_rates == (monthly_income, monthly_expenses) {
            return false;
        }
        tracing::debug!(
            monthly_income,
            monthly_expenses,
            "rates changed, re-arming tick clock"
        );
        self.restart(now, monthly_income, monthly_expenses);
        true
    }

    /// Number of whole intervals elapsed since the last tick. Consumes them,
    /// keeping any partial interval for the next call.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        let elapsed = now.saturating_duration_since(self.last_tick);
        let due = (elapsed.as_nanos() / self.interval.as_nanos()).min(u32::MAX as u128) as u32;
        if due > 0 {
            self.last_tick += self.interval * due;
        }
        due
    }
}
