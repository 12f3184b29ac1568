use super::config::EngineConfig;
use super::constants::DEFAULT_STOCK_QUANTITY;
use super::progression::Progress;
use crate::cards::{generate_offer, CardType, Offer};
use crate::portfolio::{Holding, HoldingsRegistry, Ledger, LedgerEntry};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Whole session state. Mutated only by transactions and ticks; every
/// successful mutation bumps `version`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub session_id: String,
    pub started_at: i64,
    pub version: u64,
    pub balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub progress: Progress,
    /// Most recent balance last
    pub balance_history: VecDeque<f64>,
    pub history_capacity: usize,
    pub current_card_type: CardType,
    pub current_offer: Offer,
    /// Pending number of shares for the next stock buy or sell (≥ 1)
    pub stock_quantity: u32,
    pub stocks: HoldingsRegistry,
    pub assets: HoldingsRegistry,
    pub ledger: Ledger,
    pub ticks_elapsed: u64,
}

impl GameState {
    /// Creates a fresh session: initial balance, empty portfolio, and a
    /// stock offer on the table.
    pub fn new(config: &EngineConfig, started_at: i64, rng: &mut impl Rng) -> Self {
        use uuid::Uuid;

        let history_capacity = config.history_capacity.max(1);
        let mut balance_history = VecDeque::with_capacity(history_capacity);
        balance_history.push_back(config.initial_balance);

        Self {
            session_id: Uuid::new_v4().to_string(),
            started_at,
            version: 0,
            balance: config.initial_balance,
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            progress: Progress::new(),
            balance_history,
            history_capacity,
            current_card_type: CardType::Stock,
            current_offer: generate_offer(CardType::Stock, rng),
            stock_quantity: DEFAULT_STOCK_QUANTITY,
            stocks: HoldingsRegistry::new(),
            assets: HoldingsRegistry::new(),
            ledger: Ledger::new(),
            ticks_elapsed: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn experience(&self) -> u64 {
        self.progress.experience
    }

    /// Monthly income minus monthly expenses.
    pub fn cash_flow(&self) -> f64 {
        self.monthly_income - self.monthly_expenses
    }

    /// Units owned of the instrument on the current card (0 for expenses).
    pub fn owned_quantity_of_current(&self) -> u32 {
        match &self.current_offer {
            Offer::Stock(s) => self.stocks.quantity_of(&s.id),
            Offer::Asset(a) => self.assets.quantity_of(&a.id),
            Offer::Expense(_) => 0,
        }
    }

    /// Quantity a buy of the current card applies to.
    pub fn effective_quantity(&self, requested: Option<u32>) -> u32 {
        match self.current_card_type {
            CardType::Stock => requested.unwrap_or(self.stock_quantity),
            CardType::Asset | CardType::Expense => 1,
        }
    }

    /// Put `offer` on the table, keeping the card type in step with it.
    ///
    /// Test hook for staging a specific card; play only changes the offer
    /// through buy and skip.
    #[doc(hidden)]
    pub fn present_offer(&mut self, offer: Offer) {
        self.current_card_type = offer.card_type();
        self.current_offer = offer;
        self.bump_version();
    }

    pub fn set_stock_quantity(&mut self, quantity: u32) {
        let quantity = quantity.max(1);
        if quantity != self.stock_quantity {
            self.stock_quantity = quantity;
            self.bump_version();
        }
    }

    pub fn increment_stock_quantity(&mut self) {
        self.set_stock_quantity(self.stock_quantity.saturating_add(1));
    }

    pub fn decrement_stock_quantity(&mut self) {
        self.set_stock_quantity(self.stock_quantity.saturating_sub(1));
    }

    /// Append the current balance to history, dropping the oldest samples
    /// beyond capacity.
    pub(crate) fn record_balance(&mut self) {
        self.balance_history.push_back(self.balance);
        while self.balance_history.len() > self.history_capacity {
            self.balance_history.pop_front();
        }
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.version,
            balance: self.balance,
            monthly_income: self.monthly_income,
            monthly_expenses: self.monthly_expenses,
            cash_flow: self.cash_flow(),
            level: self.progress.level,
            experience: self.progress.experience,
            xp_needed: self.progress.xp_needed(),
            balance_history: self.balance_history.iter().copied().collect(),
            current_card_type: self.current_card_type,
            current_offer: self.current_offer.clone(),
            stock_quantity: self.stock_quantity,
            owned_current: self.owned_quantity_of_current(),
            stocks: self
                .stocks
                .iter()
                .map(|(id, h)| (id.to_string(), h.clone()))
                .collect(),
            assets: self
                .assets
                .iter()
                .map(|(id, h)| (id.to_string(), h.clone()))
                .collect(),
            ledger: self.ledger.entries().to_vec(),
        }
    }
}

/// Serializable copy of everything the presentation layer reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub version: u64,
    pub balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub cash_flow: f64,
    pub level: u32,
    pub experience: u64,
    pub xp_needed: u64,
    pub balance_history: Vec<f64>,
    pub current_card_type: CardType,
    pub current_offer: Offer,
    pub stock_quantity: u32,
    pub owned_current: u32,
    pub stocks: BTreeMap<String, Holding>,
    pub assets: BTreeMap<String, Holding>,
    pub ledger: Vec<LedgerEntry>,
}
