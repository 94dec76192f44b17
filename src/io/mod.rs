//! Input/output helpers.
//!
//! - solved-set JSON export (`export`)

pub mod export;

pub use export::*;
