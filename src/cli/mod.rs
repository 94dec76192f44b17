//! Command-line parsing for the Treynor solver.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! solver and console code. Values given on the command line use the same
//! `none`-or-decimal rules as the interactive prompt.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::console::parse_decimal_or_none;
use crate::domain::{AllPresentPolicy, SolveConfig};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "treynor",
    version,
    about = "Solve Treynor Ratio = (Return - Risk-Free Rate) / Beta for the missing value"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for the four values on stdin (the default when no subcommand is given).
    Prompt(CommonArgs),
    /// Solve from flags; omitted values (or `none`) are the ones to solve for.
    Solve(SolveArgs),
}

/// Options shared by both modes.
#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    /// What to do when all four values are supplied.
    #[arg(long, value_enum, default_value_t = AllPresentPolicy::Recompute)]
    pub all_present: AllPresentPolicy,

    /// Relative tolerance used by `--all-present validate`.
    #[arg(long, default_value_t = SolveConfig::DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Print the solved values as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Write the solved values to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for non-interactive solving.
#[derive(Debug, Args, Clone)]
pub struct SolveArgs {
    /// Portfolio return (decimal, e.g. 0.15).
    #[arg(long = "return", allow_negative_numbers = true, value_parser = parse_slot)]
    pub return_: Option<Slot>,

    /// Portfolio beta.
    #[arg(long, allow_negative_numbers = true, value_parser = parse_slot)]
    pub beta: Option<Slot>,

    /// Risk-free rate (decimal, e.g. 0.03).
    #[arg(long, allow_negative_numbers = true, value_parser = parse_slot)]
    pub risk_free_rate: Option<Slot>,

    /// Treynor ratio.
    #[arg(long, allow_negative_numbers = true, value_parser = parse_slot)]
    pub treynor_ratio: Option<Slot>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// A value given on the command line; `none` parses to `Slot(None)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot(pub Option<f64>);

fn parse_slot(text: &str) -> Result<Slot, String> {
    parse_decimal_or_none(text)
        .map(Slot)
        .map_err(|e| format!("expected a decimal number or 'none' ({e})"))
}

impl SolveArgs {
    pub fn value(slot: Option<Slot>) -> Option<f64> {
        slot.and_then(|s| s.0)
    }
}
