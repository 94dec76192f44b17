//! Reporting utilities: text and JSON rendering of solved quantity sets.

pub mod format;

pub use format::*;
