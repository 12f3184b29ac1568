use serde::{Deserialize, Serialize};

/// The three kinds of card, dealt in a fixed rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Stock,
    Asset,
    Expense,
}

impl CardType {
    /// Next card in the stock → asset → expense → stock rotation.
    pub fn next(self) -> Self {
        match self {
            CardType::Stock => CardType::Asset,
            CardType::Asset => CardType::Expense,
            CardType::Expense => CardType::Stock,
        }
    }

    /// Returns the display name for this card type.
    pub fn name(&self) -> &'static str {
        match self {
            CardType::Stock => "Stock",
            CardType::Asset => "Asset",
            CardType::Expense => "Expense",
        }
    }

    /// Short badge shown next to the card title.
    pub fn badge(&self) -> &'static str {
        match self {
            CardType::Stock => "Dividends",
            CardType::Asset => "Income",
            CardType::Expense => "Mandatory",
        }
    }

    /// Mandatory cards must be accepted and cannot be skipped.
    pub fn is_mandatory(self) -> bool {
        self == CardType::Expense
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockOffer {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    /// Price change versus the template base, in percent (unrounded)
    pub percent_change: f64,
    /// Monthly dividend per share
    pub dividend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetOffer {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub cost: f64,
    /// Monthly income added per unit bought
    pub income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseOffer {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub cost: f64,
    pub monthly_expense: f64,
}

/// The card currently presented to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Offer {
    Stock(StockOffer),
    Asset(AssetOffer),
    Expense(ExpenseOffer),
}

impl Offer {
    pub fn card_type(&self) -> CardType {
        match self {
            Offer::Stock(_) => CardType::Stock,
            Offer::Asset(_) => CardType::Asset,
            Offer::Expense(_) => CardType::Expense,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Offer::Stock(s) => &s.id,
            Offer::Asset(a) => &a.id,
            Offer::Expense(e) => &e.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Offer::Stock(s) => &s.name,
            Offer::Asset(a) => &a.name,
            Offer::Expense(e) => &e.name,
        }
    }

    /// Price of one unit: the share price for stocks, the cost otherwise.
    pub fn unit_price(&self) -> f64 {
        match self {
            Offer::Stock(s) => s.price,
            Offer::Asset(a) => a.cost,
            Offer::Expense(e) => e.cost,
        }
    }

    /// Signed change to monthly cash flow from accepting one unit.
    pub fn monthly_delta(&self) -> f64 {
        match self {
            Offer::Stock(s) => s.dividend,
            Offer::Asset(a) => a.income,
            Offer::Expense(e) => -e.monthly_expense,
        }
    }

    /// Label used in the portfolio, e.g. "TechCorp (TECH)".
    pub fn display_name(&self) -> String {
        match self {
            Offer::Stock(s) => format!("{} ({})", s.name, s.symbol),
            Offer::Asset(a) => a.name.clone(),
            Offer::Expense(e) => e.name.clone(),
        }
    }
}
