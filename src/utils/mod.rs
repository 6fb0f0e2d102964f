/// Module containing A1 notation helpers for cell and range references
pub mod a1;
/// Module containing environment based configuration helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use a1::*;
pub use logger::*;
