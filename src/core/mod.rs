//! Core engine: game state, transactions, progression and the passive tick.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod notify;
pub mod progression;
pub mod session;
pub mod tick;
pub mod transactions;

pub use clock::TickClock;
pub use config::EngineConfig;
pub use error::{ConfigError, TransactionError};
pub use game_state::*;
pub use notify::*;
pub use progression::*;
pub use session::Session;
pub use tick::*;
pub use transactions::*;
