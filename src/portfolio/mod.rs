//! Portfolio: per-instrument holdings and the transaction ledger.

pub mod holdings;
pub mod ledger;

pub use holdings::*;
pub use ledger::*;
