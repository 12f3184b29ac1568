//! Simulation runner driving real sessions with a simple autoplay policy.
//!
//! The runner uses `Session` (the same facade the TUI uses) so simulated
//! play follows the exact transaction and tick rules.

use super::config::SimConfig;
use super::report::SimReport;
use super::stats::RunStats;
use crate::cards::Offer;
use crate::core::notify::TracingNotifier;
use crate::core::transactions::{can_afford_cash, can_afford_with_loan, Intent};
use crate::core::{GameState, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// What the autoplayer does with the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    BuyCash(u32),
    BuyCredit(u32),
    Sell(u32),
    Skip,
    /// Let time pass until a mandatory card becomes affordable
    Wait,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Balance ${:.0}, Cash flow {:+.0}/mo, Level {}, Buys {}, Sells {}{}",
                run_idx + 1,
                config.num_runs,
                run.final_balance,
                run.cash_flow(),
                run.final_level,
                run.purchases,
                run.sales,
                if run.stalled { " (stalled)" } else { "" }
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, config.max_ticks_per_run)
}

/// Pick an action for the current card.
pub fn decide(state: &GameState, config: &SimConfig) -> Decision {
    let can_finance = |quantity| {
        config.use_credit && can_afford_with_loan(state, &config.engine, Some(quantity))
    };

    match &state.current_offer {
        Offer::Stock(stock) => {
            if let Some(holding) = state.stocks.get(&stock.id) {
                let target = holding.avg_price * (1.0 + config.take_profit_percent / 100.0);
                if stock.price >= target {
                    return Decision::Sell(holding.quantity);
                }
            }
            let affordable = (state.balance / stock.price).floor().max(0.0) as u32;
            let lot = affordable.min(config.max_stock_lot);
            if lot >= 1 {
                Decision::BuyCash(lot)
            } else if can_finance(1) {
                Decision::BuyCredit(1)
            } else {
                Decision::Skip
            }
        }
        Offer::Asset(_) => {
            if can_afford_cash(state, Some(1)) {
                Decision::BuyCash(1)
            } else if can_finance(1) {
                Decision::BuyCredit(1)
            } else {
                Decision::Skip
            }
        }
        Offer::Expense(_) => {
            if can_afford_cash(state, Some(1)) {
                Decision::BuyCash(1)
            } else if can_finance(1) {
                Decision::BuyCredit(1)
            } else {
                Decision::Wait
            }
        }
    }
}

/// Simulate one session until it runs out of ticks or stalls.
fn simulate_single_run(config: &SimConfig, rng: ChaCha8Rng) -> RunStats {
    let mut session = Session::start_at(
        config.engine.clone(),
        rng,
        TracingNotifier,
        Instant::now(),
        0,
    );
    let mut stats = RunStats::new(config.engine.initial_balance);
    let ticks_per_decision = config.ticks_per_decision.max(1);

    while session.state().ticks_elapsed < config.max_ticks_per_run {
        let decision = decide(session.state(), config);
        let result = match decision {
            Decision::BuyCash(quantity) => Some(session.buy(false, Some(quantity))),
            Decision::BuyCredit(quantity) => Some(session.buy(true, Some(quantity))),
            Decision::Sell(quantity) => Some(session.sell(Some(quantity))),
            Decision::Skip => Some(session.skip()),
            Decision::Wait => None,
        };

        match result {
            Some(Ok(receipt)) => match receipt.intent {
                Intent::Buy => {
                    stats.purchases += 1;
                    if receipt.financed() {
                        stats.financed_purchases += 1;
                    }
                }
                Intent::Sell => stats.sales += 1,
                Intent::Skip => stats.skips += 1,
            },
            Some(Err(_)) => stats.rejections += 1,
            None => {
                if session.state().cash_flow() <= 0.0 {
                    // Balance can only shrink; the expense will never be affordable
                    stats.stalled = true;
                    break;
                }
            }
        }

        for _ in 0..ticks_per_decision {
            if session.state().ticks_elapsed >= config.max_ticks_per_run {
                break;
            }
            let outcome = session.tick();
            stats.observe_balance(outcome.balance);
            if decision == Decision::Wait {
                stats.waiting_ticks += 1;
            }
        }
    }

    let state = session.into_state();
    stats.finish(&state);
    stats
}
