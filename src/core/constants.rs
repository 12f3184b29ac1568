// Session
pub const INITIAL_BALANCE: f64 = 10_000.0;
pub const BALANCE_HISTORY_CAPACITY: usize = 50;
pub const DEFAULT_STOCK_QUANTITY: u32 = 1;

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MINUTES_PER_MONTH: f64 = DAYS_PER_MONTH * 24.0 * 60.0;

// Stock offers: change drawn uniformly from ±(SPAN / 2) percent
pub const STOCK_CHANGE_SPAN_PERCENT: f64 = 20.0;
pub const STOCK_MIN_PRICE: f64 = 10.0;
pub const STOCK_MIN_DIVIDEND: f64 = 1.0;

// Asset and expense offers: variance drawn uniformly from ±(SPAN / 2)
pub const PROPERTY_VARIANCE_SPAN: f64 = 0.3;
pub const PROPERTY_MIN_COST: f64 = 1000.0;
pub const PROPERTY_MIN_MONTHLY: f64 = 10.0;

// Credit and disposal
pub const LOAN_PAYMENT_RATE: f64 = 0.10;
pub const ASSET_SALVAGE_RATE: f64 = 0.70;

// XP and leveling
pub const XP_PER_LEVEL: u64 = 100;
pub const XP_BUY_STOCK_PER_UNIT: u64 = 20;
pub const XP_BUY_ASSET: u64 = 50;
pub const XP_BUY_EXPENSE: u64 = 10;
pub const XP_SELL_STOCK_PER_UNIT: u64 = 10;
pub const XP_SELL_ASSET: u64 = 25;

// Presentation
pub const MAX_RECENT_NOTIFICATIONS: usize = 6;
