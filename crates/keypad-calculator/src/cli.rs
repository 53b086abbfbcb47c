//! Command-line interface definitions and command runners

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{CalculatorConfig, Verbosity};
use crate::controller::Calculator;
use crate::core::evaluator::evaluate;
use crate::core::format::format_number;
use crate::core::ERROR_SENTINEL;
use crate::driver::CalculatorDriver;
use crate::error::{CliError, CliResult};

/// Keypad calculator: build an expression key by key, evaluate it on demand
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress everything but errors in the log
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// YAML configuration file
    #[arg(long, global = true, env = "KEYPAD_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one expression and print the result
    Eval(EvalArgs),

    /// Press keypad buttons in order and print the display
    Press(PressArgs),

    /// Run the interactive terminal keypad
    #[cfg(feature = "tui")]
    Interactive,
}

/// Arguments for `eval`
#[derive(clap::Args, Debug)]
pub struct EvalArgs {
    /// Expression such as "2+3×4" (`*` and `/` also work)
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

/// Arguments for `press`
#[derive(clap::Args, Debug)]
pub struct PressArgs {
    /// Button labels or key names: 0-9 . + - × ÷ * / % ± ⌫ C = Enter Backspace Escape
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Also print the history list
    #[arg(long)]
    pub history: bool,

    /// Print display and history as JSON
    #[arg(long, conflicts_with = "history")]
    pub json: bool,
}

impl Cli {
    /// Verbosity derived from the -q/-v flags
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Loads the configuration file if one was given
    pub fn calculator_config(&self) -> CliResult<CalculatorConfig> {
        match &self.config {
            Some(path) => CalculatorConfig::load(path),
            None => Ok(CalculatorConfig::default()),
        }
    }
}

/// Installs the tracing subscriber; `RUST_LOG` overrides the verbosity flags
pub fn init_tracing(verbosity: Verbosity, json: bool) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| CliError::config(format!("cannot install logger: {e}")))
}

/// Runs `eval`, writing the result (or the error sentinel) to `out`
pub fn run_eval(args: &EvalArgs, out: &mut impl Write) -> CliResult<()> {
    match evaluate(&args.expression) {
        Ok(value) => {
            writeln!(out, "{}", format_number(value))?;
            Ok(())
        }
        Err(err) => {
            writeln!(out, "{ERROR_SENTINEL}")?;
            Err(err.into())
        }
    }
}

/// Runs `press`, writing the final display (and optionally history) to `out`
pub fn run_press(
    args: &PressArgs,
    config: &CalculatorConfig,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut calc = Calculator::with_config(config);
    for key in &args.keys {
        calc.press(key)?;
    }

    if args.json {
        serde_json::to_writer(&mut *out, &calc.snapshot())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", calc.display())?;
    if args.history && !calc.history().is_empty() {
        writeln!(out, "{}", calc.history().export_formatted())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("keypad-calc").chain(args.iter().copied())).unwrap()
    }

    fn press_args(keys: &[&str]) -> PressArgs {
        PressArgs {
            keys: keys.iter().map(ToString::to_string).collect(),
            history: false,
            json: false,
        }
    }

    // ===== Argument parsing tests =====

    #[test]
    fn test_parse_eval() {
        let cli = parse(&["eval", "2+3*4"]);
        match cli.command {
            Commands::Eval(args) => assert_eq!(args.expression, "2+3*4"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_eval_leading_minus() {
        let cli = parse(&["eval", "-5+3"]);
        assert!(matches!(cli.command, Commands::Eval(ref a) if a.expression == "-5+3"));
    }

    #[test]
    fn test_parse_press_flags() {
        let cli = parse(&["-vv", "press", "1", "-", "2", "=", "--history"]);
        assert_eq!(cli.verbosity(), Verbosity::Debug);
        match cli.command {
            Commands::Press(args) => {
                assert_eq!(args.keys, vec!["1", "-", "2", "="]);
                assert!(args.history);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_press_requires_keys() {
        assert!(Cli::try_parse_from(["keypad-calc", "press"]).is_err());
    }

    #[test]
    fn test_parse_json_conflicts_with_history() {
        assert!(Cli::try_parse_from(["keypad-calc", "press", "1", "--json", "--history"]).is_err());
    }

    #[test]
    fn test_quiet_wins() {
        let cli = parse(&["-q", "-v", "eval", "1"]);
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_calculator_config_default() {
        let cli = parse(&["eval", "1"]);
        assert_eq!(cli.calculator_config().unwrap(), CalculatorConfig::default());
    }

    // ===== Runner tests =====

    #[test]
    fn test_run_eval_success() {
        let mut out = Vec::new();
        let args = EvalArgs {
            expression: "2+3×4".into(),
        };
        run_eval(&args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "14\n");
    }

    #[test]
    fn test_run_eval_failure_prints_sentinel() {
        let mut out = Vec::new();
        let args = EvalArgs {
            expression: "5/0".into(),
        };
        let err = run_eval(&args, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Evaluation(_)));
        assert_eq!(String::from_utf8(out).unwrap(), "Error\n");
    }

    #[test]
    fn test_run_press_display() {
        let mut out = Vec::new();
        run_press(
            &press_args(&["2", "0", "0", "+", "5", "0", "%"]),
            &CalculatorConfig::default(),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "200+0.5\n");
    }

    #[test]
    fn test_run_press_history() {
        let mut args = press_args(&["1", "+", "1", "=", "×", "3", "Enter"]);
        args.history = true;
        let mut out = Vec::new();
        run_press(&args, &CalculatorConfig::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "6\n2×3 = 6\n1+1 = 2\n"
        );
    }

    #[test]
    fn test_run_press_json() {
        let mut args = press_args(&["9", "±"]);
        args.json = true;
        let mut out = Vec::new();
        run_press(&args, &CalculatorConfig::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"display\":\"-9\",\"history\":[]}\n"
        );
    }

    #[test]
    fn test_run_press_unknown_key() {
        let mut out = Vec::new();
        let err = run_press(
            &press_args(&["1", "sin"]),
            &CalculatorConfig::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::UnknownKey { .. }));
        assert!(out.is_empty());
    }
}
