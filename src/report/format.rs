//! Formatted terminal output.
//!
//! Values are printed with Rust's shortest round-trip float formatting, so what
//! is shown is exactly what was computed.

use crate::domain::{Quantity, QuantitySet};
use crate::error::AppError;

/// Render a solved set as `Calculated Values:` followed by one labeled line per quantity.
pub fn format_quantity_set(set: &QuantitySet) -> String {
    let mut out = String::new();

    out.push_str("Calculated Values:\n");
    for quantity in Quantity::ALL {
        let label = format!("{}:", quantity.label());
        out.push_str(&format!("  {label:<15} {}\n", set.get(quantity)));
    }

    out
}

/// Render a solved set as pretty JSON (same keys as the text output).
pub fn format_quantity_set_json(set: &QuantitySet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(set)
}

/// Render as JSON or as the text block; both end with a newline.
pub fn render_quantity_set(set: &QuantitySet, json: bool) -> Result<String, AppError> {
    if !json {
        return Ok(format_quantity_set(set));
    }
    let mut out = format_quantity_set_json(set)
        .map_err(|e| AppError::new(2, format!("Failed to render JSON: {e}")))?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuantitySet {
        QuantitySet {
            return_: 0.15,
            beta: 1.2,
            risk_free_rate: 0.03,
            treynor_ratio: 0.09999999999999999,
        }
    }

    #[test]
    fn text_golden_snapshot() {
        let expected = concat!(
            "Calculated Values:\n",
            "  Return:         0.15\n",
            "  Beta:           1.2\n",
            "  Risk-Free Rate: 0.03\n",
            "  Treynor Ratio:  0.09999999999999999\n",
        );
        assert_eq!(format_quantity_set(&sample()), expected);
    }

    #[test]
    fn json_uses_external_labels() {
        let json = format_quantity_set_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Return"], 0.15);
        assert_eq!(value["Risk-Free Rate"], 0.03);
        assert_eq!(value["Treynor Ratio"], 0.09999999999999999);
    }

    #[test]
    fn render_switches_on_json_flag() {
        let text = render_quantity_set(&sample(), false).unwrap();
        assert!(text.starts_with("Calculated Values:\n"));

        let json = render_quantity_set(&sample(), true).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with("}\n"));
        let back: QuantitySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
