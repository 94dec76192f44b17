//! Line-oriented console session.
//!
//! Reads one line per quantity (in `Quantity::ALL` order), where `none`
//! (any case) marks the value to solve for. The session is generic over its
//! reader and writer so it can be driven from stdin or from a buffer.

use std::io::{BufRead, Write};
use std::num::ParseFloatError;

use tracing::debug;

use crate::domain::{Quantity, QuantityInputs, QuantitySet, SolveConfig};
use crate::error::{AppError, ConsoleError};
use crate::report::render_quantity_set;
use crate::solver::solve_with;

const BANNER: &str = "Enter the values for the following. Type 'None' for the missing value:";

/// Result of one session.
///
/// `Rejected` means the message has already been written to the output.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Solved(QuantitySet),
    Rejected(ConsoleError),
}

/// Prompt text for a quantity.
pub fn prompt(quantity: Quantity) -> &'static str {
    match quantity {
        Quantity::Return => "Return (as decimal, e.g., 0.15 for 15%): ",
        Quantity::Beta => "Beta: ",
        Quantity::RiskFreeRate => "Risk-Free Rate (as decimal, e.g., 0.03 for 3%): ",
        Quantity::TreynorRatio => "Treynor Ratio: ",
    }
}

/// `none` (case-insensitive) is absent; anything else must parse as a decimal.
pub fn parse_decimal_or_none(text: &str) -> Result<Option<f64>, ParseFloatError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    text.parse::<f64>().map(Some)
}

/// Parse one console line for `quantity`.
pub fn parse_value(quantity: Quantity, text: &str) -> Result<Option<f64>, ConsoleError> {
    parse_decimal_or_none(text).map_err(|_| ConsoleError::InvalidInput {
        quantity,
        text: text.trim().to_string(),
    })
}

/// Prompt for and read all four lines, then parse them in order.
///
/// The first unparseable line is reported; the solver never sees partial input.
pub fn read_inputs<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Result<QuantityInputs, ConsoleError>, AppError> {
    let mut lines = Vec::with_capacity(Quantity::ALL.len());

    for quantity in Quantity::ALL {
        write!(output, "{}", prompt(quantity))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Err(ConsoleError::UnexpectedEof { quantity }));
        }
        lines.push((quantity, line));
    }

    let mut inputs = QuantityInputs::default();
    for (quantity, line) in &lines {
        match parse_value(*quantity, line) {
            Ok(value) => inputs.set(*quantity, value),
            Err(err) => return Ok(Err(err)),
        }
    }

    Ok(Ok(inputs))
}

/// Run a full prompt/solve/print session.
///
/// With `json` set, a solved set is printed as pretty JSON instead of the text block.
/// `Err` is reserved for I/O failures on the reader or writer.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &SolveConfig,
    json: bool,
) -> Result<SessionOutcome, AppError> {
    writeln!(output, "{BANNER}")?;

    let inputs = match read_inputs(input, output)? {
        Ok(inputs) => inputs,
        Err(err) => {
            writeln!(output)?;
            return reject(output, err);
        }
    };
    debug!(?inputs, "console inputs parsed");

    match solve_with(&inputs, config) {
        Ok(set) => {
            writeln!(output)?;
            write!(output, "{}", render_quantity_set(&set, json)?)?;
            Ok(SessionOutcome::Solved(set))
        }
        Err(err) => {
            writeln!(output)?;
            reject(output, ConsoleError::Solve(err))
        }
    }
}

fn reject<W: Write>(output: &mut W, err: ConsoleError) -> Result<SessionOutcome, AppError> {
    debug!(error = ?err, "session rejected");
    writeln!(output, "{err}")?;
    Ok(SessionOutcome::Rejected(err))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::domain::AllPresentPolicy;
    use crate::error::SolveError;

    fn run(text: &str) -> (SessionOutcome, String) {
        run_with(text, &SolveConfig::default())
    }

    fn run_with(text: &str, config: &SolveConfig) -> (SessionOutcome, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run_session(&mut input, &mut output, config, false).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn none_in_any_case_is_absent() {
        for text in ["none", "NONE", "None", "  nOnE \n"] {
            assert_eq!(parse_value(Quantity::Beta, text).unwrap(), None, "{text:?}");
        }
    }

    #[test]
    fn numbers_parse() {
        assert_eq!(parse_value(Quantity::Return, "0.15\n").unwrap(), Some(0.15));
        assert_eq!(parse_value(Quantity::Return, "-0.02").unwrap(), Some(-0.02));
        assert_eq!(parse_value(Quantity::Return, "0").unwrap(), Some(0.0));
        assert_eq!(parse_value(Quantity::Return, "1e-2").unwrap(), Some(0.01));
    }

    #[test]
    fn garbage_is_invalid_input() {
        let err = parse_value(Quantity::Beta, "abc").unwrap_err();
        assert_eq!(
            err,
            ConsoleError::InvalidInput {
                quantity: Quantity::Beta,
                text: "abc".to_string()
            }
        );
        assert!(parse_value(Quantity::Beta, "").is_err());
    }

    #[test]
    fn session_solves_missing_treynor() {
        let (outcome, text) = run("0.15\n1.2\n0.03\nNone\n");
        let SessionOutcome::Solved(set) = outcome else {
            panic!("expected solved, got {outcome:?}");
        };
        assert!((set.treynor_ratio - 0.1).abs() < 1e-12);

        assert!(text.starts_with(BANNER));
        assert!(text.contains(prompt(Quantity::Return)));
        assert!(text.contains(prompt(Quantity::TreynorRatio)));
        assert!(text.contains("Calculated Values:"));
        assert!(text.contains("Risk-Free Rate: 0.03"));
    }

    #[test]
    fn session_reports_invalid_input_without_solving() {
        let (outcome, text) = run("0.15\nabc\n0.03\nnone\n");
        assert!(matches!(
            outcome,
            SessionOutcome::Rejected(ConsoleError::InvalidInput {
                quantity: Quantity::Beta,
                ..
            })
        ));
        assert!(text.contains("Invalid input. Please enter numeric values or 'None' for missing values."));
        assert!(!text.contains("Calculated Values:"));
    }

    #[test]
    fn session_prompts_for_all_four_before_parsing() {
        let (outcome, text) = run("abc\n1.2\n0.03\nnone\n");
        assert!(matches!(
            outcome,
            SessionOutcome::Rejected(ConsoleError::InvalidInput {
                quantity: Quantity::Return,
                ..
            })
        ));
        for quantity in Quantity::ALL {
            assert!(text.contains(prompt(quantity)), "missing prompt for {quantity:?}");
        }
    }

    #[test]
    fn session_reports_first_bad_line_in_order() {
        let (outcome, _) = run("0.15\nx\ny\nnone\n");
        assert_eq!(
            outcome,
            SessionOutcome::Rejected(ConsoleError::InvalidInput {
                quantity: Quantity::Beta,
                text: "x".to_string()
            })
        );
    }

    #[test]
    fn session_prints_json_when_asked() {
        let mut input = Cursor::new(b"none\n1.2\n0.03\n0.1\n".to_vec());
        let mut output = Vec::new();
        let outcome = run_session(&mut input, &mut output, &SolveConfig::default(), true).unwrap();
        let SessionOutcome::Solved(set) = outcome else {
            panic!("expected solved, got {outcome:?}");
        };

        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains("Calculated Values:"));
        let json = &text[text.find('{').unwrap()..];
        let back: QuantitySet = serde_json::from_str(json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn session_reports_solver_errors() {
        let (outcome, text) = run("0.1\nnone\nnone\n0.2\n");
        assert_eq!(
            outcome,
            SessionOutcome::Rejected(ConsoleError::Solve(SolveError::InsufficientInputs { absent: 2 }))
        );
        assert!(text.contains("Error: Provide at least three values to calculate the missing one."));

        let (outcome, text) = run("0.15\n0\n0.03\nnone\n");
        assert_eq!(
            outcome,
            SessionOutcome::Rejected(ConsoleError::Solve(SolveError::DivisionByZero {
                divisor: Quantity::Beta
            }))
        );
        assert!(text.contains("Error: Beta cannot be zero"));
    }

    #[test]
    fn session_handles_early_eof() {
        let (outcome, _) = run("0.15\n1.2\n");
        assert_eq!(
            outcome,
            SessionOutcome::Rejected(ConsoleError::UnexpectedEof {
                quantity: Quantity::RiskFreeRate
            })
        );
    }

    #[test]
    fn session_honors_validate_policy() {
        let config = SolveConfig {
            all_present: AllPresentPolicy::Validate,
            ..SolveConfig::default()
        };
        let (outcome, text) = run_with("0.15\n1.2\n0.03\n0.5\n", &config);
        assert!(matches!(
            outcome,
            SessionOutcome::Rejected(ConsoleError::Solve(SolveError::Inconsistent { .. }))
        ));
        assert!(text.contains("Error: Supplied Treynor Ratio 0.5"));
    }
}
