use crate::cards::CardType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerAction {
    Buy,
    Sell,
}

/// One line of the portfolio history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub kind: CardType,
    pub action: LedgerAction,
    pub name: String,
    /// Signed change to monthly cash flow caused by this transaction
    pub monthly_income: f64,
    /// Price paid on a buy, proceeds received on a sell
    pub price: f64,
    /// Monthly credit surcharge when the purchase was financed
    pub loan_payment: Option<f64>,
    pub instrument_id: Option<String>,
    pub quantity: Option<u32>,
}

impl LedgerEntry {
    pub fn is_financed(&self) -> bool {
        self.loan_payment.is_some()
    }
}

/// Append-only transaction log. Entries are never edited or removed; a sale
/// appends its own entry instead of touching the purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.last()
    }

    /// Total monthly credit surcharge across all financed purchases.
    pub fn total_loan_payments(&self) -> f64 {
        self.entries.iter().filter_map(|e| e.loan_payment).sum()
    }

    pub fn count_action(&self, action: LedgerAction) -> usize {
        self.entries.iter().filter(|e| e.action == action).count()
    }
}
