//! Calculator controller
//!
//! Owns the expression buffer and the history. UI collaborators only talk to
//! [`Calculator::dispatch`] and the read accessors; nothing else mutates state.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::CalculatorConfig;
use crate::core::buffer::ExpressionBuffer;
use crate::core::evaluator::evaluate;
use crate::core::format::format_number;
use crate::core::history::{History, HistoryEntry};
use crate::core::CalcError;
use crate::input::Input;

/// What a dispatched input did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The expression text changed
    Edited,
    /// The input was valid but had nothing to do
    Unchanged,
    /// Evaluation succeeded and this entry was recorded
    Evaluated(HistoryEntry),
    /// Evaluation failed; the display now shows the error sentinel
    Failed(CalcError),
    /// All history entries were dropped
    HistoryCleared,
}

/// Point-in-time view of the calculator, for rendering or JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current display text
    pub display: String,
    /// History, newest first
    pub history: Vec<HistoryEntry>,
}

/// The calculator state machine
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    buffer: ExpressionBuffer,
    history: History,
}

impl Calculator {
    /// Creates a calculator showing "0" with an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator from configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            buffer: ExpressionBuffer::new(),
            history: History::with_capacity(config.history_capacity),
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    /// Returns true while the error sentinel is shown
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.buffer.is_error()
    }

    /// Returns the calculation history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Captures display and history
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display().to_string(),
            history: self.history.to_vec(),
        }
    }

    /// Applies one input event
    pub fn dispatch(&mut self, input: Input) -> Outcome {
        match input {
            Input::Evaluate => return self.evaluate(),
            Input::ClearHistory => {
                self.clear_history();
                return Outcome::HistoryCleared;
            }
            _ => {}
        }

        let before = self.buffer.clone();
        match input {
            Input::Digit(d) => self.buffer.append_digit(d),
            Input::Dot => self.buffer.append_dot(),
            Input::Operator(op) => self.buffer.append_operator(op),
            Input::Backspace => self.buffer.backspace(),
            Input::Clear => self.buffer.clear(),
            Input::Percent => self.buffer.apply_percent(),
            Input::ToggleSign => self.buffer.toggle_sign(),
            Input::Evaluate | Input::ClearHistory => {}
        }

        debug!(?input, expression = %self.buffer, "input applied");

        if self.buffer == before {
            Outcome::Unchanged
        } else {
            Outcome::Edited
        }
    }

    /// Applies a sequence of inputs, returning the last outcome
    pub fn dispatch_all(&mut self, inputs: impl IntoIterator<Item = Input>) -> Option<Outcome> {
        inputs.into_iter().map(|input| self.dispatch(input)).last()
    }

    /// Evaluates the current expression.
    ///
    /// Success replaces the expression with the result and records history;
    /// failure shows the error sentinel. Evaluating the sentinel itself is a
    /// no-op.
    pub fn evaluate(&mut self) -> Outcome {
        if self.buffer.is_error() {
            return Outcome::Unchanged;
        }

        let expression = self.buffer.as_str().to_string();
        match evaluate(&expression) {
            Ok(value) => {
                let result = format_number(value);
                info!(%expression, %result, "expression evaluated");

                self.buffer.set_result(value);
                let entry = HistoryEntry::new(expression, result);
                if let Some(evicted) = self.history.push(entry.clone()) {
                    debug!(expression = %evicted.expression, "history entry evicted");
                }
                Outcome::Evaluated(entry)
            }
            Err(err) => {
                warn!(%expression, kind = err.kind(), error = %err, "evaluation failed");
                self.buffer.set_error();
                Outcome::Failed(err)
            }
        }
    }

    /// Drops all history entries
    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }
}
