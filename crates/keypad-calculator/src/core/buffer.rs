//! Editable expression buffer
//!
//! Holds the text shown on the calculator display. Edits never fail: an edit
//! that makes no sense for the current text leaves it unchanged.
//!
//! Invariants:
//! - the text is never empty and starts out as `"0"`
//! - two binary operators never follow each other (a `+`/`-` after an
//!   operator is a sign, see [`is_sign_marker`](crate::core::parser::is_sign_marker))
//! - while [`ERROR_SENTINEL`] is shown, the next edit starts from `"0"`

use crate::core::evaluator::parse_number;
use crate::core::format::format_number;
use crate::core::parser::split_current_number;
use crate::core::{Operation, ERROR_SENTINEL};

const INITIAL: &str = "0";

/// The live expression text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl Default for ExpressionBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBuffer {
    /// Creates a buffer holding `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: INITIAL.to_string(),
        }
    }

    /// Creates a buffer with preset text (empty text becomes `"0"`)
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::new()
        } else {
            Self { text }
        }
    }

    /// Returns the current expression text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true while the error sentinel is displayed
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.text == ERROR_SENTINEL
    }

    fn ends_with_operator(&self) -> bool {
        self.text
            .chars()
            .next_back()
            .is_some_and(Operation::is_operator_char)
    }

    /// Replaces the error sentinel with `"0"`; returns true if it did
    fn reset_if_error(&mut self) -> bool {
        if self.is_error() {
            self.clear();
            return true;
        }
        false
    }

    /// Appends a digit (0-9), replacing a lone `"0"` or the error sentinel
    pub fn append_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.is_error() || self.text == INITIAL {
            self.text.clear();
        }
        self.text.push(ch);
    }

    /// Appends a decimal point to the current number, if it has none yet
    pub fn append_dot(&mut self) {
        if self.reset_if_error() {
            self.text.push('.');
            return;
        }

        if split_current_number(&self.text).number.contains('.') {
            return;
        }

        if self.ends_with_operator() {
            self.text.push_str("0.");
        } else {
            self.text.push('.');
        }
    }

    /// Appends an operator, replacing any trailing operator run.
    ///
    /// A dangling sign marker (`"5+-"`) goes with the operator it follows,
    /// so two binary operators never end up adjacent.
    pub fn append_operator(&mut self, op: Operation) {
        self.reset_if_error();

        let kept = self.text.trim_end_matches(Operation::is_operator_char).len();
        self.text.truncate(kept);
        if self.text.is_empty() {
            self.clear();
        }
        self.text.push(op.symbol());
    }

    /// Removes the last character; a single remaining character becomes `"0"`
    pub fn backspace(&mut self) {
        if self.reset_if_error() {
            return;
        }

        if self.text.chars().count() <= 1 {
            self.clear();
        } else {
            self.text.pop();
        }
    }

    /// Resets to `"0"`
    pub fn clear(&mut self) {
        INITIAL.clone_into(&mut self.text);
    }

    /// Divides the current number by 100 in place
    pub fn apply_percent(&mut self) {
        self.reset_if_error();

        let run = split_current_number(&self.text);
        let number = if run.number.is_empty() {
            INITIAL
        } else {
            run.number
        };

        let Ok(value) = parse_number(number) else {
            return;
        };

        self.text = format!("{}{}", run.prefix, format_number(value / 100.0));
    }

    /// Flips the sign of the current number (no-op on `"0"`)
    pub fn toggle_sign(&mut self) {
        self.reset_if_error();

        let run = split_current_number(&self.text);
        let number = if run.number.is_empty() {
            INITIAL
        } else {
            run.number
        };

        if number == INITIAL {
            return;
        }

        let toggled = match number.strip_prefix('-') {
            Some(unsigned) => unsigned.to_string(),
            None => format!("-{}", number.strip_prefix('+').unwrap_or(number)),
        };

        self.text = format!("{}{toggled}", run.prefix);
        if self.text.is_empty() {
            self.clear();
        }
    }

    /// Shows the error sentinel
    pub fn set_error(&mut self) {
        ERROR_SENTINEL.clone_into(&mut self.text);
    }

    /// Replaces the whole expression with a formatted result
    pub fn set_result(&mut self, value: f64) {
        self.text = format_number(value);
    }
}

impl std::fmt::Display for ExpressionBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
