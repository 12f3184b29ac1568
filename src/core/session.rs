//! Session facade: owns the game state, random source, tick clock and the
//! notification collaborator.
//!
//! The presentation layer drives it from a single event loop: forward player
//! intents as they arrive, call [`Session::advance_clock`] on every loop
//! iteration, and read [`Session::state`] to render.

use super::clock::TickClock;
use super::config::EngineConfig;
use super::error::TransactionError;
use super::game_state::{GameState, Snapshot};
use super::notify::{Notification, Notifier};
use super::tick::{apply_tick, TickOutcome};
use super::transactions::{self, Receipt};
use rand::Rng;
use std::time::Instant;

pub struct Session<R: Rng, N: Notifier> {
    state: GameState,
    config: EngineConfig,
    rng: R,
    notifier: N,
    clock: TickClock,
}

impl<R: Rng, N: Notifier> Session<R, N> {
    /// Start a session now.
    pub fn new(config: EngineConfig, rng: R, notifier: N) -> Self {
        Self::start_at(
            config,
            rng,
            notifier,
            Instant::now(),
            chrono::Utc::now().timestamp(),
        )
    }

    /// Start a session with an explicit clock origin and start timestamp.
    pub fn start_at(
        config: EngineConfig,
        mut rng: R,
        notifier: N,
        now: Instant,
        started_at: i64,
    ) -> Self {
        let state = GameState::new(&config, started_at, &mut rng);
        let clock = TickClock::new(
            config.tick_interval(),
            now,
            state.monthly_income,
            state.monthly_expenses,
        );
        tracing::info!(
            session = %state.session_id,
            balance = state.balance,
            "session started"
        );
        Self {
            state,
            config,
            rng,
            notifier,
            clock,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn can_afford_cash(&self) -> bool {
        transactions::can_afford_cash(&self.state, None)
    }

    pub fn can_afford_with_loan(&self) -> bool {
        transactions::can_afford_with_loan(&self.state, &self.config, None)
    }

    pub fn buy(&mut self, use_loan: bool, quantity: Option<u32>) -> Result<Receipt, TransactionError> {
        let result = transactions::buy(
            &mut self.state,
            &self.config,
            use_loan,
            quantity,
            &mut self.rng,
        );
        self.publish(result)
    }

    pub fn sell(&mut self, quantity: Option<u32>) -> Result<Receipt, TransactionError> {
        let result = transactions::sell(&mut self.state, &self.config, quantity);
        self.publish(result)
    }

    pub fn skip(&mut self) -> Result<Receipt, TransactionError> {
        let result = transactions::skip(&mut self.state, &mut self.rng);
        self.publish(result)
    }

    pub fn set_stock_quantity(&mut self, quantity: u32) {
        self.state.set_stock_quantity(quantity);
    }

    pub fn increment_stock_quantity(&mut self) {
        self.state.increment_stock_quantity();
    }

    pub fn decrement_stock_quantity(&mut self) {
        self.state.decrement_stock_quantity();
    }

    /// Run one tick immediately, independent of the wall clock.
    pub fn tick(&mut self) -> TickOutcome {
        apply_tick(&mut self.state, &self.config)
    }

    /// Run every tick due at `now`. If the income/expense rates changed since
    /// the clock last captured them, the clock re-arms from `now` first.
    /// Returns the number of ticks run.
    pub fn advance_clock(&mut self, now: Instant) -> u32 {
        self.clock
            .sync_rates(now, self.state.monthly_income, self.state.monthly_expenses);
        let due = self.clock.due_ticks(now);
        for _ in 0..due {
            apply_tick(&mut self.state, &self.config);
        }
        due
    }

    /// Stop the tick clock. Further `advance_clock` calls run nothing.
    pub fn shutdown(&mut self) {
        if self.clock.is_running() {
            self.clock.stop();
            tracing::info!(
                session = %self.state.session_id,
                ticks = self.state.ticks_elapsed,
                balance = self.state.balance,
                "session ended"
            );
        }
    }

    /// Consume the session, returning the final state.
    pub fn into_state(mut self) -> GameState {
        self.shutdown();
        self.state
    }

    fn publish(
        &mut self,
        result: Result<Receipt, TransactionError>,
    ) -> Result<Receipt, TransactionError> {
        match &result {
            Ok(receipt) => self.notifier.notify(receipt.notification()),
            Err(err) => {
                tracing::warn!(error = %err, "intent rejected");
                self.notifier.notify(Notification::error(err.to_string()));
            }
        }
        result
    }
}
