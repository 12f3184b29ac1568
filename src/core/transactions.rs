//! Buy, sell and skip: the player intents that move the card rotation and
//! change balance, income and expenses.
//!
//! Every intent validates first and mutates second, so a rejected intent
//! leaves the state exactly as it was (version counter included).

use super::config::EngineConfig;
use super::constants::*;
use super::error::TransactionError;
use super::game_state::GameState;
use super::notify::Notification;
use crate::cards::{generate_offer, round_cents, CardType, Offer};
use crate::portfolio::{LedgerAction, LedgerEntry};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Buy,
    Sell,
    Skip,
}

/// What an accepted intent did.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub intent: Intent,
    pub card_type: CardType,
    /// Ticker symbol for stocks, display name otherwise
    pub label: String,
    pub quantity: u32,
    /// Signed change to the balance
    pub cash_delta: f64,
    /// Signed change to monthly income
    pub income_delta: f64,
    /// Signed change to monthly expenses (card expense plus any loan payment)
    pub expense_delta: f64,
    pub loan_payment: Option<f64>,
    pub xp_gained: u64,
    pub levels_gained: u32,
    pub level: u32,
    /// Card dealt after this intent (buy and skip only)
    pub next_card: Option<CardType>,
}

impl Receipt {
    pub fn financed(&self) -> bool {
        self.loan_payment.is_some()
    }

    /// Human-readable message for the notification channel.
    pub fn notification(&self) -> Notification {
        let credit = if self.financed() { " on credit" } else { "" };
        let mut notification = match (self.intent, self.card_type) {
            (Intent::Buy, CardType::Stock) => Notification::success(format!(
                "Bought {} × {}{}!",
                self.quantity, self.label, credit
            )),
            (Intent::Buy, CardType::Asset) => {
                Notification::success(format!("Acquired asset: {}{}!", self.label, credit))
            }
            (Intent::Buy, CardType::Expense) => {
                Notification::info(format!("New expense: {}{}!", self.label, credit))
            }
            (Intent::Sell, CardType::Stock) => Notification::success(format!(
                "Sold {} × {} for ${:.2}",
                self.quantity, self.label, self.cash_delta
            )),
            (Intent::Sell, _) => Notification::success(format!(
                "Sold {} for ${:.2}",
                self.label, self.cash_delta
            )),
            (Intent::Skip, _) => Notification::info("Card skipped"),
        };
        if self.levels_gained > 0 {
            notification
                .message
                .push_str(&format!(" Level {} reached!", self.level));
        }
        notification
    }
}

/// Cost of buying the current card at the given (or pending) quantity.
pub fn purchase_cost(state: &GameState, quantity: Option<u32>) -> f64 {
    state.current_offer.unit_price() * state.effective_quantity(quantity) as f64
}

/// Whether a cash purchase of the current card would be accepted.
pub fn can_afford_cash(state: &GameState, quantity: Option<u32>) -> bool {
    state.balance >= purchase_cost(state, quantity)
}

/// Whether a financed purchase of the current card would be accepted.
pub fn can_afford_with_loan(state: &GameState, config: &EngineConfig, quantity: Option<u32>) -> bool {
    let loan_payment = purchase_cost(state, quantity) * config.loan_payment_rate;
    check_loan(state, loan_payment).is_ok()
}

fn check_loan(state: &GameState, loan_payment: f64) -> Result<(), TransactionError> {
    let expenses_after = state.monthly_expenses + loan_payment;
    if state.monthly_income < expenses_after {
        return Err(TransactionError::NegativeCashFlowRejected {
            income: state.monthly_income,
            expenses_after,
        });
    }
    Ok(())
}

/// Accept the current card, paying cash or financing it.
///
/// `quantity` applies to stocks only (`None` uses the pending selector);
/// assets and expenses are always bought one at a time. On success the next
/// card in the rotation is dealt and the selector resets to 1.
pub fn buy(
    state: &mut GameState,
    config: &EngineConfig,
    use_loan: bool,
    quantity: Option<u32>,
    rng: &mut impl Rng,
) -> Result<Receipt, TransactionError> {
    let quantity = state.effective_quantity(quantity);
    if quantity == 0 {
        return Err(TransactionError::InvalidQuantity);
    }

    let total_cost = state.current_offer.unit_price() * quantity as f64;
    let loan_payment = if use_loan {
        Some(total_cost * config.loan_payment_rate)
    } else {
        None
    };

    match loan_payment {
        Some(payment) => check_loan(state, payment)?,
        None => {
            if state.balance < total_cost {
                return Err(TransactionError::InsufficientFunds {
                    needed: total_cost,
                    available: state.balance,
                });
            }
        }
    }

    // Validated; from here on nothing can fail.
    let cash_delta = if loan_payment.is_some() {
        0.0
    } else {
        state.balance -= total_cost;
        -total_cost
    };

    let offer = state.current_offer.clone();
    let (label, income_delta, card_expense, xp) = match &offer {
        Offer::Stock(stock) => {
            let income = stock.dividend * quantity as f64;
            state.monthly_income += income;
            state
                .stocks
                .apply_purchase(&stock.id, quantity, stock.price, stock.dividend);
            (
                stock.symbol.clone(),
                income,
                0.0,
                XP_BUY_STOCK_PER_UNIT * quantity as u64,
            )
        }
        Offer::Asset(asset) => {
            state.monthly_income += asset.income;
            state
                .assets
                .apply_purchase(&asset.id, 1, asset.cost, asset.income);
            (asset.name.clone(), asset.income, 0.0, XP_BUY_ASSET)
        }
        Offer::Expense(expense) => {
            state.monthly_expenses += expense.monthly_expense;
            (expense.name.clone(), 0.0, expense.monthly_expense, XP_BUY_EXPENSE)
        }
    };

    if let Some(payment) = loan_payment {
        state.monthly_expenses += payment;
    }

    let instrument_id = match &offer {
        Offer::Expense(_) => None,
        _ => Some(offer.id().to_string()),
    };
    state.ledger.append(LedgerEntry {
        kind: offer.card_type(),
        action: LedgerAction::Buy,
        name: offer.display_name(),
        monthly_income: income_delta - card_expense,
        price: total_cost,
        loan_payment,
        instrument_id: instrument_id.clone(),
        quantity: instrument_id.as_ref().map(|_| quantity),
    });

    let levels_gained = state.progress.add_experience(xp);
    let next_card = advance_card(state, rng);
    state.stock_quantity = DEFAULT_STOCK_QUANTITY;
    state.bump_version();

    tracing::info!(
        card = offer.card_type().name(),
        name = offer.name(),
        quantity,
        total_cost,
        financed = loan_payment.is_some(),
        "purchase accepted"
    );

    Ok(Receipt {
        intent: Intent::Buy,
        card_type: offer.card_type(),
        label,
        quantity,
        cash_delta,
        income_delta,
        expense_delta: card_expense + loan_payment.unwrap_or(0.0),
        loan_payment,
        xp_gained: xp,
        levels_gained,
        level: state.progress.level,
        next_card: Some(next_card),
    })
}

/// Sell units of the instrument on the current card.
///
/// Stocks sell at the current market price; assets sell one unit at a time
/// for a salvage fraction of their average acquisition cost. A stock sale
/// lowers income by the current dividend times the quantity; an asset sale by
/// the income that unit contributed. Income never goes below zero. Selling
/// never deals a new card.
pub fn sell(
    state: &mut GameState,
    config: &EngineConfig,
    quantity: Option<u32>,
) -> Result<Receipt, TransactionError> {
    let offer = state.current_offer.clone();
    let (label, quantity, proceeds, income_loss, xp) = match &offer {
        Offer::Stock(stock) => {
            let quantity = quantity.unwrap_or(state.stock_quantity);
            if quantity == 0 {
                return Err(TransactionError::InvalidQuantity);
            }
            state
                .stocks
                .apply_sale(&stock.id, quantity, Some(stock.dividend))?;
            (
                stock.symbol.clone(),
                quantity,
                stock.price * quantity as f64,
                stock.dividend * quantity as f64,
                XP_SELL_STOCK_PER_UNIT * quantity as u64,
            )
        }
        Offer::Asset(asset) => {
            if state.assets.quantity_of(&asset.id) < 1 {
                return Err(TransactionError::NothingOwned(asset.name.clone()));
            }
            let disposal = state.assets.apply_sale(&asset.id, 1, None)?;
            (
                asset.name.clone(),
                1,
                round_cents(disposal.avg_price * config.asset_salvage_rate),
                disposal.released_yield,
                XP_SELL_ASSET,
            )
        }
        Offer::Expense(_) => return Err(TransactionError::NotSellable),
    };

    state.balance += proceeds;
    let income_before = state.monthly_income;
    state.monthly_income = (state.monthly_income - income_loss).max(0.0);
    let income_delta = state.monthly_income - income_before;

    state.ledger.append(LedgerEntry {
        kind: offer.card_type(),
        action: LedgerAction::Sell,
        name: offer.display_name(),
        monthly_income: income_delta,
        price: proceeds,
        loan_payment: None,
        instrument_id: Some(offer.id().to_string()),
        quantity: Some(quantity),
    });

    let levels_gained = state.progress.add_experience(xp);
    state.bump_version();

    tracing::info!(
        card = offer.card_type().name(),
        name = offer.name(),
        quantity,
        proceeds,
        "sale accepted"
    );

    Ok(Receipt {
        intent: Intent::Sell,
        card_type: offer.card_type(),
        label,
        quantity,
        cash_delta: proceeds,
        income_delta,
        expense_delta: 0.0,
        loan_payment: None,
        xp_gained: xp,
        levels_gained,
        level: state.progress.level,
        next_card: None,
    })
}

/// Decline the current card and deal the next one. Expenses are mandatory.
pub fn skip(state: &mut GameState, rng: &mut impl Rng) -> Result<Receipt, TransactionError> {
    if state.current_card_type.is_mandatory() {
        return Err(TransactionError::CannotSkipMandatory);
    }

    let card_type = state.current_card_type;
    let label = state.current_offer.display_name();
    let next_card = advance_card(state, rng);
    state.bump_version();

    tracing::debug!(skipped = %label, next = next_card.name(), "card skipped");

    Ok(Receipt {
        intent: Intent::Skip,
        card_type,
        label,
        quantity: 0,
        cash_delta: 0.0,
        income_delta: 0.0,
        expense_delta: 0.0,
        loan_payment: None,
        xp_gained: 0,
        levels_gained: 0,
        level: state.progress.level,
        next_card: Some(next_card),
    })
}

fn advance_card(state: &mut GameState, rng: &mut impl Rng) -> CardType {
    let next = state.current_card_type.next();
    state.current_offer = generate_offer(next, rng);
    state.current_card_type = next;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{AssetOffer, ExpenseOffer, StockOffer};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (GameState, EngineConfig, ChaCha8Rng) {
        let config = EngineConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = GameState::new(&config, 0, &mut rng);
        (state, config, rng)
    }

    fn tech(price: f64, dividend: f64) -> Offer {
        Offer::Stock(StockOffer {
            id: "1".to_string(),
            name: "TechCorp".to_string(),
            symbol: "TECH".to_string(),
            price,
            percent_change: 0.0,
            dividend,
        })
    }

    fn car_wash(cost: f64, income: f64) -> Offer {
        Offer::Asset(AssetOffer {
            id: "3".to_string(),
            name: "Car Wash".to_string(),
            icon: "Car".to_string(),
            cost,
            income,
        })
    }

    fn yacht() -> Offer {
        Offer::Expense(ExpenseOffer {
            id: "2".to_string(),
            name: "Yacht".to_string(),
            icon: "Ship".to_string(),
            cost: 2000.0,
            monthly_expense: 200.0,
        })
    }

    #[test]
    fn test_buy_stock_cash() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(tech(150.0, 15.0));

        let receipt = buy(&mut state, &config, false, Some(1), &mut rng).unwrap();
        assert_eq!(state.balance, 9850.0);
        assert_eq!(state.monthly_income, 15.0);
        assert_eq!(state.monthly_expenses, 0.0);
        assert_eq!(state.stocks.quantity_of("1"), 1);
        assert_eq!(state.experience(), 20);
        assert_eq!(state.current_card_type, CardType::Asset);
        assert_eq!(receipt.next_card, Some(CardType::Asset));
        assert_eq!(receipt.cash_delta, -150.0);
        assert_eq!(receipt.notification().message, "Bought 1 × TECH!");
    }

    #[test]
    fn test_buy_stock_quantity_scales_everything() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(tech(100.0, 10.0));

        buy(&mut state, &config, false, Some(3), &mut rng).unwrap();
        assert_eq!(state.balance, 9700.0);
        assert_eq!(state.monthly_income, 30.0);
        assert_eq!(state.stocks.quantity_of("1"), 3);
        assert_eq!(state.experience(), 60);
        assert_eq!(state.ledger.last().unwrap().quantity, Some(3));
    }

    #[test]
    fn test_buy_uses_pending_quantity_and_resets_it() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(tech(100.0, 10.0));
        state.set_stock_quantity(4);

        buy(&mut state, &config, false, None, &mut rng).unwrap();
        assert_eq!(state.stocks.quantity_of("1"), 4);
        assert_eq!(state.stock_quantity, 1);
    }

    #[test]
    fn test_buy_asset_ignores_quantity() {
        let (mut state, config, mut rng) = setup();
        state.balance = 100_000.0;
        state.present_offer(car_wash(30_000.0, 300.0));

        buy(&mut state, &config, false, Some(5), &mut rng).unwrap();
        assert_eq!(state.balance, 70_000.0);
        assert_eq!(state.monthly_income, 300.0);
        assert_eq!(state.assets.quantity_of("3"), 1);
        assert_eq!(state.experience(), 50);
        assert_eq!(state.current_card_type, CardType::Expense);
    }

    #[test]
    fn test_buy_expense_adds_recurring_cost() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(yacht());

        let receipt = buy(&mut state, &config, false, None, &mut rng).unwrap();
        assert_eq!(state.balance, 8000.0);
        assert_eq!(state.monthly_expenses, 200.0);
        assert_eq!(state.experience(), 10);
        assert_eq!(state.current_card_type, CardType::Stock);

        let entry = state.ledger.last().unwrap();
        assert_eq!(entry.monthly_income, -200.0);
        assert_eq!(entry.instrument_id, None);
        assert_eq!(
            receipt.notification().level,
            crate::core::notify::NotificationLevel::Info
        );
    }

    #[test]
    fn test_loan_adds_ten_percent_payment_without_debit() {
        let (mut state, config, mut rng) = setup();
        state.monthly_income = 100.0;
        state.present_offer(tech(150.0, 15.0));

        let receipt = buy(&mut state, &config, true, Some(2), &mut rng).unwrap();
        assert_eq!(state.balance, 10_000.0);
        assert_eq!(state.monthly_income, 130.0);
        assert!((state.monthly_expenses - 30.0).abs() < 1e-9);
        assert!(receipt.financed());
        assert_eq!(receipt.notification().message, "Bought 2 × TECH on credit!");
        assert!(state.ledger.last().unwrap().is_financed());
    }

    #[test]
    fn test_loan_rejected_when_cash_flow_turns_negative() {
        let (mut state, config, mut rng) = setup();
        state.monthly_income = 100.0;
        state.monthly_expenses = 95.0;
        state.present_offer(tech(100.0, 10.0));
        let before = state.clone();

        let err = buy(&mut state, &config, true, Some(1), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::NegativeCashFlowRejected { .. }
        ));
        assert_eq!(state.balance, before.balance);
        assert_eq!(state.monthly_expenses, before.monthly_expenses);
        assert_eq!(state.version, before.version);
        assert_eq!(state.current_offer, before.current_offer);
    }

    #[test]
    fn test_loan_allowed_at_exact_break_even() {
        let (mut state, config, mut rng) = setup();
        state.monthly_income = 100.0;
        state.monthly_expenses = 90.0;
        state.present_offer(tech(100.0, 10.0));

        assert!(can_afford_with_loan(&state, &config, Some(1)));
        assert!(buy(&mut state, &config, true, Some(1), &mut rng).is_ok());
    }

    #[test]
    fn test_insufficient_funds() {
        let (mut state, config, mut rng) = setup();
        state.balance = 100.0;
        state.present_offer(tech(150.0, 15.0));
        assert!(!can_afford_cash(&state, None));
        let version = state.version;

        let err = buy(&mut state, &config, false, None, &mut rng).unwrap_err();
        assert_eq!(
            err,
            TransactionError::InsufficientFunds {
                needed: 150.0,
                available: 100.0
            }
        );
        assert_eq!(state.balance, 100.0);
        assert_eq!(state.version, version);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(tech(150.0, 15.0));
        assert_eq!(
            buy(&mut state, &config, false, Some(0), &mut rng),
            Err(TransactionError::InvalidQuantity)
        );
        assert_eq!(
            sell(&mut state, &config, Some(0)),
            Err(TransactionError::InvalidQuantity)
        );
    }

    #[test]
    fn test_sell_stock_at_market_price() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(tech(100.0, 10.0));
        buy(&mut state, &config, false, Some(3), &mut rng).unwrap();

        // Same stock comes back at a higher price
        state.present_offer(tech(120.0, 12.0));
        let receipt = sell(&mut state, &config, Some(2)).unwrap();

        assert_eq!(receipt.cash_delta, 240.0);
        assert_eq!(state.balance, 9700.0 + 240.0);
        // Income drops by the current dividend: 30 - 2 × 12
        assert!((state.monthly_income - 6.0).abs() < 1e-9);
        assert_eq!(state.stocks.quantity_of("1"), 1);
        assert_eq!(state.experience(), 60 + 20);
        // Selling does not advance the rotation
        assert_eq!(state.current_card_type, CardType::Stock);
        assert_eq!(state.ledger.last().unwrap().action, LedgerAction::Sell);
    }

    #[test]
    fn test_oversell_rejected() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(tech(100.0, 10.0));
        buy(&mut state, &config, false, Some(1), &mut rng).unwrap();
        state.present_offer(tech(100.0, 10.0));
        let before = state.clone();

        let err = sell(&mut state, &config, Some(2)).unwrap_err();
        assert_eq!(
            err,
            TransactionError::InsufficientHoldings {
                requested: 2,
                owned: 1
            }
        );
        assert_eq!(state.version, before.version);
        assert_eq!(state.stocks, before.stocks);
        assert_eq!(state.ledger, before.ledger);
    }

    #[test]
    fn test_sell_asset_salvages_seventy_percent_of_cost_basis() {
        let (mut state, config, mut rng) = setup();
        state.balance = 100_000.0;
        state.present_offer(car_wash(30_000.0, 300.0));
        buy(&mut state, &config, false, None, &mut rng).unwrap();

        // Displayed offer for the same asset is cheaper now
        state.present_offer(car_wash(26_000.0, 260.0));
        let receipt = sell(&mut state, &config, None).unwrap();

        assert_eq!(receipt.cash_delta, 21_000.0);
        assert_eq!(state.balance, 70_000.0 + 21_000.0);
        assert_eq!(state.monthly_income, 0.0);
        assert_eq!(state.assets.quantity_of("3"), 0);
        assert_eq!(state.experience(), 75);
        assert_eq!(receipt.notification().message, "Sold Car Wash for $21000.00");
    }

    #[test]
    fn test_sell_unowned_asset() {
        let (mut state, config, _) = setup();
        state.present_offer(car_wash(30_000.0, 300.0));
        let before = state.snapshot();
        assert_eq!(
            sell(&mut state, &config, None),
            Err(TransactionError::NothingOwned("Car Wash".to_string()))
        );
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_sell_expense_not_possible() {
        let (mut state, config, _) = setup();
        state.present_offer(yacht());
        let before = state.snapshot();
        assert_eq!(
            sell(&mut state, &config, None),
            Err(TransactionError::NotSellable)
        );
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_stock_sale_uses_current_dividend() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(tech(100.0, 12.0));
        buy(&mut state, &config, false, Some(1), &mut rng).unwrap();
        assert_eq!(state.monthly_income, 12.0);

        state.present_offer(tech(100.0, 10.0));
        let receipt = sell(&mut state, &config, Some(1)).unwrap();
        assert_eq!(state.monthly_income, 2.0);
        assert_eq!(receipt.income_delta, -10.0);
        assert!(state.stocks.get("1").is_none());
    }

    #[test]
    fn test_skip_advances_rotation_only() {
        let (mut state, _, mut rng) = setup();
        let balance = state.balance;

        let receipt = skip(&mut state, &mut rng).unwrap();
        assert_eq!(receipt.notification().message, "Card skipped");
        assert_eq!(state.current_card_type, CardType::Asset);
        assert_eq!(state.current_offer.card_type(), CardType::Asset);
        assert_eq!(state.balance, balance);

        skip(&mut state, &mut rng).unwrap();
        assert_eq!(state.current_card_type, CardType::Expense);
        assert_eq!(
            skip(&mut state, &mut rng),
            Err(TransactionError::CannotSkipMandatory)
        );
        assert_eq!(state.current_card_type, CardType::Expense);
    }

    #[test]
    fn test_level_up_in_notification() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(tech(10.0, 1.0));

        let receipt = buy(&mut state, &config, false, Some(5), &mut rng).unwrap();
        assert_eq!(receipt.levels_gained, 1);
        assert_eq!(state.level(), 2);
        assert_eq!(state.experience(), 0);
        assert_eq!(
            receipt.notification().message,
            "Bought 5 × TECH! Level 2 reached!"
        );
    }

    #[test]
    fn test_income_never_negative_after_sale() {
        let (mut state, config, mut rng) = setup();
        state.present_offer(tech(100.0, 10.0));
        buy(&mut state, &config, false, Some(1), &mut rng).unwrap();
        state.monthly_income = 5.0;

        state.present_offer(tech(100.0, 10.0));
        sell(&mut state, &config, Some(1)).unwrap();
        assert_eq!(state.monthly_income, 0.0);
    }
}
