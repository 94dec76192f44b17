//! `treynor` library crate.
//!
//! Solves `Treynor Ratio = (Return - Risk-Free Rate) / Beta` for whichever of
//! the four quantities is missing. The binary (`treynor`) is a thin wrapper
//! around this library so the solver and console session are testable without
//! spawning processes.

pub mod app;
pub mod cli;
pub mod console;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod solver;
