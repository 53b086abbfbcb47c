//! keypad-calc: command-line front end for the keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc eval "2+3*4"              # prints 14
//! keypad-calc press 2 0 0 + 5 0 %       # prints 200+0.5
//! keypad-calc press 9 ÷ 2 = --history   # prints 4.5, then the history
//! keypad-calc interactive               # terminal keypad
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use keypad_calculator::cli::{init_tracing, run_eval, run_press, Cli, Commands};
use keypad_calculator::CliResult;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity(), cli.log_json)?;

    let config = cli.calculator_config()?;
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::Eval(args) => run_eval(args, &mut stdout),
        Commands::Press(args) => run_press(args, &config, &mut stdout),
        #[cfg(feature = "tui")]
        Commands::Interactive => {
            drop(stdout);
            let mut calc = keypad_calculator::controller::Calculator::with_config(&config);
            keypad_calculator::terminal::run_session(&mut calc)
        }
    }
}
