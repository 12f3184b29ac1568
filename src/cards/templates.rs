//! Static card catalog. Base figures are never mutated; generation applies
//! variance on top of them.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub base_price: f64,
    pub base_dividend: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub base_cost: f64,
    pub base_income: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub base_cost: f64,
    pub base_expense: f64,
}

pub const STOCK_TEMPLATES: &[StockTemplate] = &[
    StockTemplate {
        id: "1",
        name: "TechCorp",
        symbol: "TECH",
        base_price: 150.0,
        base_dividend: 15.0,
    },
    StockTemplate {
        id: "2",
        name: "MegaBank",
        symbol: "BANK",
        base_price: 80.0,
        base_dividend: 8.0,
    },
    StockTemplate {
        id: "3",
        name: "EnergyPlus",
        symbol: "ENRG",
        base_price: 120.0,
        base_dividend: 12.0,
    },
    StockTemplate {
        id: "4",
        name: "FoodChain",
        symbol: "FOOD",
        base_price: 95.0,
        base_dividend: 10.0,
    },
];

pub const ASSET_TEMPLATES: &[AssetTemplate] = &[
    AssetTemplate {
        id: "1",
        name: "Apartment",
        icon: "Home",
        base_cost: 50_000.0,
        base_income: 500.0,
    },
    AssetTemplate {
        id: "2",
        name: "Business",
        icon: "Store",
        base_cost: 100_000.0,
        base_income: 1500.0,
    },
    AssetTemplate {
        id: "3",
        name: "Car Wash",
        icon: "Car",
        base_cost: 30_000.0,
        base_income: 300.0,
    },
    AssetTemplate {
        id: "4",
        name: "Restaurant",
        icon: "UtensilsCrossed",
        base_cost: 150_000.0,
        base_income: 2500.0,
    },
];

pub const EXPENSE_TEMPLATES: &[ExpenseTemplate] = &[
    ExpenseTemplate {
        id: "1",
        name: "New Car",
        icon: "Car",
        base_cost: 25_000.0,
        base_expense: 250.0,
    },
    ExpenseTemplate {
        id: "2",
        name: "Yacht",
        icon: "Ship",
        base_cost: 200_000.0,
        base_expense: 2000.0,
    },
    ExpenseTemplate {
        id: "3",
        name: "Second Home",
        icon: "Home",
        base_cost: 80_000.0,
        base_expense: 800.0,
    },
    ExpenseTemplate {
        id: "4",
        name: "Private Jet",
        icon: "Plane",
        base_cost: 500_000.0,
        base_expense: 5000.0,
    },
];

pub fn find_stock(id: &str) -> Option<&'static StockTemplate> {
    STOCK_TEMPLATES.iter().find(|t| t.id == id)
}

pub fn find_asset(id: &str) -> Option<&'static AssetTemplate> {
    ASSET_TEMPLATES.iter().find(|t| t.id == id)
}
