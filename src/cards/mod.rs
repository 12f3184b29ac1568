//! Card system: template catalog, offer types, and generation.

pub mod generation;
pub mod templates;
pub mod types;

pub use generation::*;
pub use templates::*;
pub use types::*;
