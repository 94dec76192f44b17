//! Shared domain types.
//!
//! The Treynor relation ties four quantities together:
//!
//! `treynor = (return - risk_free_rate) / beta`
//!
//! Inputs arrive as four optional slots (`QuantityInputs`); a successful solve
//! produces a fully populated `QuantitySet`.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the four related quantities, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Return,
    Beta,
    RiskFreeRate,
    TreynorRatio,
}

impl Quantity {
    /// Fixed input/prompt order.
    pub const ALL: [Quantity; 4] = [
        Quantity::Return,
        Quantity::Beta,
        Quantity::RiskFreeRate,
        Quantity::TreynorRatio,
    ];

    /// External key used in rendered output and JSON.
    pub fn label(self) -> &'static str {
        match self {
            Quantity::Return => "Return",
            Quantity::Beta => "Beta",
            Quantity::RiskFreeRate => "Risk-Free Rate",
            Quantity::TreynorRatio => "Treynor Ratio",
        }
    }
}

/// Caller-supplied values; `None` marks the slot to solve for.
///
/// A zero is a present value, never absence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuantityInputs {
    pub return_: Option<f64>,
    pub beta: Option<f64>,
    pub risk_free_rate: Option<f64>,
    pub treynor_ratio: Option<f64>,
}

/// How many slots are missing, and which one when exactly one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    AllPresent,
    OneAbsent(Quantity),
    Underdetermined { absent: usize },
}

impl QuantityInputs {
    pub fn new(
        return_: Option<f64>,
        beta: Option<f64>,
        risk_free_rate: Option<f64>,
        treynor_ratio: Option<f64>,
    ) -> Self {
        Self {
            return_,
            beta,
            risk_free_rate,
            treynor_ratio,
        }
    }

    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Return => self.return_,
            Quantity::Beta => self.beta,
            Quantity::RiskFreeRate => self.risk_free_rate,
            Quantity::TreynorRatio => self.treynor_ratio,
        }
    }

    pub fn set(&mut self, quantity: Quantity, value: Option<f64>) {
        let slot = match quantity {
            Quantity::Return => &mut self.return_,
            Quantity::Beta => &mut self.beta,
            Quantity::RiskFreeRate => &mut self.risk_free_rate,
            Quantity::TreynorRatio => &mut self.treynor_ratio,
        };
        *slot = value;
    }

    /// Absent slots in input order.
    pub fn absent(&self) -> Vec<Quantity> {
        Quantity::ALL
            .into_iter()
            .filter(|q| self.get(*q).is_none())
            .collect()
    }

    pub fn shape(&self) -> InputShape {
        match self.absent().as_slice() {
            [] => InputShape::AllPresent,
            [only] => InputShape::OneAbsent(*only),
            many => InputShape::Underdetermined { absent: many.len() },
        }
    }
}

/// A fully resolved set of the four quantities.
///
/// Serializes with the external labels as keys, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantitySet {
    #[serde(rename = "Return")]
    pub return_: f64,
    #[serde(rename = "Beta")]
    pub beta: f64,
    #[serde(rename = "Risk-Free Rate")]
    pub risk_free_rate: f64,
    #[serde(rename = "Treynor Ratio")]
    pub treynor_ratio: f64,
}

impl QuantitySet {
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Return => self.return_,
            Quantity::Beta => self.beta,
            Quantity::RiskFreeRate => self.risk_free_rate,
            Quantity::TreynorRatio => self.treynor_ratio,
        }
    }

    /// Treynor ratio implied by the other three values.
    pub fn treynor_of(&self) -> f64 {
        (self.return_ - self.risk_free_rate) / self.beta
    }
}

/// What to do when all four values are supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AllPresentPolicy {
    /// Recompute the Treynor ratio from the other three, discarding the supplied one.
    #[default]
    Recompute,
    /// Keep the supplied values if they already satisfy the relation, else fail.
    Validate,
}

/// Solver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveConfig {
    pub all_present: AllPresentPolicy,
    /// Relative tolerance for the validate policy (absolute below magnitude 1).
    pub tolerance: f64,
}

impl SolveConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            all_present: AllPresentPolicy::Recompute,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

/// How a solved set is presented.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputOptions {
    /// Print pretty JSON instead of the text block.
    pub json: bool,
    /// Also write the solved set to this JSON file.
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_classifies_absent_slots() {
        let all = QuantityInputs::new(Some(0.15), Some(1.2), Some(0.03), Some(0.1));
        assert_eq!(all.shape(), InputShape::AllPresent);

        let one = QuantityInputs::new(Some(0.15), None, Some(0.03), Some(0.1));
        assert_eq!(one.shape(), InputShape::OneAbsent(Quantity::Beta));

        let two = QuantityInputs::new(Some(0.1), None, None, Some(0.2));
        assert_eq!(two.shape(), InputShape::Underdetermined { absent: 2 });
        assert_eq!(two.absent(), vec![Quantity::Beta, Quantity::RiskFreeRate]);

        assert_eq!(
            QuantityInputs::default().shape(),
            InputShape::Underdetermined { absent: 4 }
        );
    }

    #[test]
    fn zero_is_present() {
        let inputs = QuantityInputs::new(Some(0.15), Some(1.2), Some(0.0), None);
        assert_eq!(inputs.shape(), InputShape::OneAbsent(Quantity::TreynorRatio));
    }

    #[test]
    fn set_and_get_follow_quantity() {
        let mut inputs = QuantityInputs::default();
        for (i, q) in Quantity::ALL.into_iter().enumerate() {
            inputs.set(q, Some(i as f64));
        }
        assert_eq!(inputs, QuantityInputs::new(Some(0.0), Some(1.0), Some(2.0), Some(3.0)));
        assert_eq!(inputs.get(Quantity::RiskFreeRate), Some(2.0));
    }

    #[test]
    fn quantity_set_serializes_with_labels_in_order() {
        let set = QuantitySet {
            return_: 0.15,
            beta: 1.2,
            risk_free_rate: 0.03,
            treynor_ratio: 0.1,
        };
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"Return":0.15,"Beta":1.2,"Risk-Free Rate":0.03,"Treynor Ratio":0.1}"#
        );
        let back: QuantitySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
