//! Cashflow - card-driven personal finance game engine
//!
//! This module exposes the game logic for the TUI, the simulator and tests.

pub mod cards;
pub mod core;
pub mod portfolio;
pub mod simulator;
pub mod ui;

pub use crate::core::{EngineConfig, GameState, Session};
