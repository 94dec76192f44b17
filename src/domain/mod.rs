//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the four related quantities (`Quantity`)
//! - caller inputs with optional slots (`QuantityInputs`, `InputShape`)
//! - the solved result (`QuantitySet`)
//! - solver and output settings (`AllPresentPolicy`, `SolveConfig`, `OutputOptions`)

pub mod types;

pub use types::*;
