//! Solve the Treynor relation for whichever quantity is missing.
//!
//! Resolution order is fixed: Treynor ratio, then return, then beta, then
//! risk-free rate. With all four supplied, `AllPresentPolicy` decides between
//! recomputing the Treynor ratio and checking the supplied one.

use tracing::debug;

use crate::domain::{AllPresentPolicy, InputShape, Quantity, QuantityInputs, QuantitySet, SolveConfig};
use crate::error::SolveError;

/// Solve with default settings (recompute when all four are present).
pub fn solve(inputs: &QuantityInputs) -> Result<QuantitySet, SolveError> {
    solve_with(inputs, &SolveConfig::default())
}

/// Solve for the single absent quantity.
pub fn solve_with(inputs: &QuantityInputs, config: &SolveConfig) -> Result<QuantitySet, SolveError> {
    let target = match inputs.shape() {
        InputShape::Underdetermined { absent } => {
            return Err(SolveError::InsufficientInputs { absent });
        }
        InputShape::OneAbsent(quantity) => quantity,
        InputShape::AllPresent => match config.all_present {
            AllPresentPolicy::Recompute => Quantity::TreynorRatio,
            AllPresentPolicy::Validate => return validate(inputs, config.tolerance),
        },
    };

    debug!(target_quantity = target.label(), "solving");
    let set = resolve(inputs, target)?;
    ensure_finite(&set, target)
}

/// Reject sets that overflowed (or carried `inf`/`NaN` through), starting with the solved slot.
fn ensure_finite(set: &QuantitySet, solved: Quantity) -> Result<QuantitySet, SolveError> {
    let order = std::iter::once(solved).chain(Quantity::ALL.into_iter().filter(|q| *q != solved));
    for quantity in order {
        if !set.get(quantity).is_finite() {
            return Err(SolveError::NonFinite { quantity });
        }
    }
    Ok(*set)
}

fn resolve(inputs: &QuantityInputs, target: Quantity) -> Result<QuantitySet, SolveError> {
    let insufficient = || SolveError::InsufficientInputs {
        absent: inputs.absent().len(),
    };

    let set = match target {
        Quantity::TreynorRatio => {
            let (Some(r), Some(b), Some(rf)) = (inputs.return_, inputs.beta, inputs.risk_free_rate) else {
                return Err(insufficient());
            };
            if b == 0.0 {
                return Err(SolveError::DivisionByZero { divisor: Quantity::Beta });
            }
            QuantitySet {
                return_: r,
                beta: b,
                risk_free_rate: rf,
                treynor_ratio: (r - rf) / b,
            }
        }
        Quantity::Return => {
            let (Some(b), Some(rf), Some(t)) = (inputs.beta, inputs.risk_free_rate, inputs.treynor_ratio) else {
                return Err(insufficient());
            };
            QuantitySet {
                return_: t * b + rf,
                beta: b,
                risk_free_rate: rf,
                treynor_ratio: t,
            }
        }
        Quantity::Beta => {
            let (Some(r), Some(rf), Some(t)) = (inputs.return_, inputs.risk_free_rate, inputs.treynor_ratio) else {
                return Err(insufficient());
            };
            if t == 0.0 {
                return Err(SolveError::DivisionByZero {
                    divisor: Quantity::TreynorRatio,
                });
            }
            QuantitySet {
                return_: r,
                beta: (r - rf) / t,
                risk_free_rate: rf,
                treynor_ratio: t,
            }
        }
        Quantity::RiskFreeRate => {
            let (Some(r), Some(b), Some(t)) = (inputs.return_, inputs.beta, inputs.treynor_ratio) else {
                return Err(insufficient());
            };
            QuantitySet {
                return_: r,
                beta: b,
                risk_free_rate: r - t * b,
                treynor_ratio: t,
            }
        }
    };

    Ok(set)
}

fn validate(inputs: &QuantityInputs, tolerance: f64) -> Result<QuantitySet, SolveError> {
    let supplied = resolve(inputs, Quantity::TreynorRatio)?;
    let Some(treynor_ratio) = inputs.treynor_ratio else {
        return Ok(supplied);
    };

    let computed = supplied.treynor_ratio;
    if !approx_eq(treynor_ratio, computed, tolerance) {
        debug!(treynor_ratio, computed, "supplied Treynor ratio rejected");
        return Err(SolveError::Inconsistent {
            supplied: treynor_ratio,
            computed,
        });
    }

    debug!(target_quantity = Quantity::TreynorRatio.label(), "validated supplied values");
    ensure_finite(
        &QuantitySet {
            treynor_ratio,
            ..supplied
        },
        Quantity::TreynorRatio,
    )
}

/// `|a - b| <= tol * max(1, |a|, |b|)`.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= tolerance * scale
}
