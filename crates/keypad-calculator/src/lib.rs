//! Keypad Calculator
//!
//! The core of a keypad calculator: an editable expression buffer driven by
//! button presses, and a shunting-yard evaluator that turns the finished
//! expression into a number.
//!
//! # Layers
//!
//! - [`core`]: pure pieces (tokenizer, postfix evaluator, buffer edits, history)
//! - [`controller::Calculator`]: the single owner of display and history state
//! - [`input`]: event enum, keyboard/label mapping, keypad layout
//! - [`driver`]: scenario checks written once against any front end
//! - [`cli`] and `terminal`: the `keypad-calc` binary
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! assert_eq!(evaluate("2+3×4"), Ok(14.0));
//! assert_eq!(evaluate("5÷0"), Err(CalcError::DivisionByZero));
//!
//! let mut calc = Calculator::new();
//! for input in [Input::Digit(1), Input::Digit(2), Input::ToggleSign] {
//!     calc.dispatch(input);
//! }
//! assert_eq!(calc.display(), "-12");
//!
//! calc.dispatch(Input::Operator(Operation::Multiply));
//! calc.dispatch(Input::Digit(2));
//! calc.dispatch(Input::Evaluate);
//! assert_eq!(calc.display(), "-24");
//! assert_eq!(calc.history().latest().unwrap().expression, "-12×2");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
mod error;
pub mod input;

#[cfg(feature = "tui")]
pub mod terminal;

pub use error::{CliError, CliResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::controller::{Calculator, Outcome, Snapshot};
    pub use crate::core::buffer::ExpressionBuffer;
    pub use crate::core::evaluator::evaluate;
    pub use crate::core::format::format_number;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{is_sign_marker, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Operation, ERROR_SENTINEL};
    pub use crate::driver::{CalculatorDriver, HistoryItem};
    pub use crate::input::{Input, Keypad, KeypadButton};
}
