//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging
//! - parses CLI arguments
//! - runs the prompt session or a direct solve
//! - prints the result and writes the optional export

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::debug;

use crate::cli::{Command, CommonArgs, SolveArgs};
use crate::console::{SessionOutcome, run_session};
use crate::domain::{OutputOptions, QuantityInputs, QuantitySet, SolveConfig};
use crate::error::{AppError, ConsoleError};
use crate::report::render_quantity_set;
use crate::solver::solve_with;

/// How a run ended when no I/O or usage failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Solved,
    /// The inputs were rejected; the reason has been printed to stdout.
    Rejected,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Solved => 0,
            RunStatus::Rejected => 1,
        }
    }
}

/// Entry point for the `treynor` binary.
pub fn run() -> Result<RunStatus, AppError> {
    crate::logging::init();

    // `treynor` and `treynor --export x.json` behave like `treynor prompt ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let stdout = io::stdout();
    match cli.command {
        Command::Prompt(args) => handle_prompt(&mut io::stdin().lock(), &mut stdout.lock(), &args),
        Command::Solve(args) => handle_solve(&mut stdout.lock(), &args),
    }
}

/// Interactive session: prompts on `output`, reads four lines from `input`.
pub fn handle_prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    args: &CommonArgs,
) -> Result<RunStatus, AppError> {
    let (config, options) = config_from_args(args);

    match run_session(input, output, &config, options.json)? {
        SessionOutcome::Solved(set) => {
            export_if_requested(&options, &set)?;
            Ok(RunStatus::Solved)
        }
        SessionOutcome::Rejected(_) => Ok(RunStatus::Rejected),
    }
}

/// Solve from flags and print the result (or the rejection message) to `output`.
pub fn handle_solve<W: Write>(output: &mut W, args: &SolveArgs) -> Result<RunStatus, AppError> {
    let (config, options) = config_from_args(&args.common);
    let inputs = inputs_from_args(args);
    debug!(?inputs, ?config, "solving from flags");

    let set = match solve_with(&inputs, &config) {
        Ok(set) => set,
        Err(err) => {
            writeln!(output, "{}", ConsoleError::Solve(err))?;
            return Ok(RunStatus::Rejected);
        }
    };

    write!(output, "{}", render_quantity_set(&set, options.json)?)?;
    export_if_requested(&options, &set)?;
    Ok(RunStatus::Solved)
}

fn export_if_requested(options: &OutputOptions, set: &QuantitySet) -> Result<(), AppError> {
    if let Some(path) = &options.export {
        crate::io::export::write_quantity_set_json(path, set)?;
    }
    Ok(())
}

/// Split shared flags into solver settings and output settings.
pub fn config_from_args(args: &CommonArgs) -> (SolveConfig, OutputOptions) {
    let config = SolveConfig {
        all_present: args.all_present,
        tolerance: args.tolerance,
    };
    let options = OutputOptions {
        json: args.json,
        export: args.export.clone(),
    };
    (config, options)
}

pub fn inputs_from_args(args: &SolveArgs) -> QuantityInputs {
    QuantityInputs::new(
        SolveArgs::value(args.return_),
        SolveArgs::value(args.beta),
        SolveArgs::value(args.risk_free_rate),
        SolveArgs::value(args.treynor_ratio),
    )
}

/// Rewrite argv so `treynor` defaults to `treynor prompt`.
///
/// Rules:
/// - `treynor`                       -> `treynor prompt`
/// - `treynor --export out.json ...` -> `treynor prompt --export out.json ...`
/// - `treynor --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("prompt".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "prompt" | "solve");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "prompt flags".
    if arg1.starts_with('-') {
        argv.insert(1, "prompt".to_string());
        return argv;
    }

    argv
}
