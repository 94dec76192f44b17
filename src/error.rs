//! Error types.
//!
//! - `SolveError`: why a quantity set could not be resolved
//! - `ConsoleError`: failures of the prompt session (bad text, early EOF, solver)
//! - `AppError`: process-level failure carrying an exit code

use thiserror::Error;

use crate::domain::Quantity;

/// Reasons the solver rejects a set of inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("Provide at least three values to calculate the missing one.")]
    InsufficientInputs { absent: usize },

    #[error("{}", division_by_zero_message(.divisor))]
    DivisionByZero { divisor: Quantity },

    #[error(
        "Supplied Treynor Ratio {supplied} does not match (Return - Risk-Free Rate) / Beta = {computed}."
    )]
    Inconsistent { supplied: f64, computed: f64 },

    #[error("{} is not a finite number; check the inputs for overflow.", .quantity.label())]
    NonFinite { quantity: Quantity },
}

fn division_by_zero_message(divisor: &Quantity) -> &'static str {
    match divisor {
        Quantity::TreynorRatio => "Treynor Ratio cannot be zero when calculating Beta.",
        _ => "Beta cannot be zero when calculating the Treynor Ratio.",
    }
}

/// Failures of an interactive (or scripted) console session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsoleError {
    #[error("Invalid input. Please enter numeric values or 'None' for missing values.")]
    InvalidInput { quantity: Quantity, text: String },

    #[error("Invalid input. Expected a value for {} but input ended.", .quantity.label())]
    UnexpectedEof { quantity: Quantity },

    #[error("Error: {0}")]
    Solve(#[from] SolveError),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::new(2, format!("I/O error: {err}"))
    }
}
