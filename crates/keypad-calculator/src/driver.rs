//! Calculator driver abstraction
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against any front end that can press keys and read the display.

use crate::controller::Calculator;
use crate::core::ERROR_SENTINEL;
use crate::error::{CliError, CliResult};
use crate::input::Input;

/// Interface a front end exposes to scenario checks
pub trait CalculatorDriver {
    /// Presses a single button or key, by label (`"7"`, `"×"`, `"±"`, `"Enter"`)
    fn press(&mut self, label: &str) -> CliResult<()>;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Clears the expression
    fn clear(&mut self);

    /// Gets history entries (newest first)
    fn history(&self) -> Vec<HistoryItem>;

    /// Presses a whitespace-separated sequence of labels
    fn press_all(&mut self, labels: &str) -> CliResult<()> {
        for label in labels.split_whitespace() {
            self.press(label)?;
        }
        Ok(())
    }
}

/// A simplified history item for driver results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// The expression that was evaluated
    pub expression: String,
    /// The result as displayed
    pub result: String,
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, label: &str) -> CliResult<()> {
        let input = Input::from_label(label).ok_or_else(|| CliError::unknown_key(label))?;
        self.dispatch(input);
        Ok(())
    }

    fn display(&self) -> String {
        Calculator::display(self).to_string()
    }

    fn clear(&mut self) {
        self.dispatch(Input::Clear);
    }

    fn history(&self) -> Vec<HistoryItem> {
        Calculator::history(self)
            .iter()
            .map(|entry| HistoryItem {
                expression: entry.expression.clone(),
                result: entry.result.clone(),
            })
            .collect()
    }
}

// ===== Scenario checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies basic arithmetic
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CliResult<()> {
    for (keys, expected) in [
        ("2 + 3 =", "5"),
        ("1 0 - 4 =", "6"),
        ("6 × 7 =", "42"),
        ("2 0 ÷ 8 =", "2.5"),
    ] {
        driver.clear();
        driver.press_all(keys)?;
        assert_eq!(driver.display(), expected, "keys: {keys}");
    }
    Ok(())
}

/// Verifies operator precedence and left associativity
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) -> CliResult<()> {
    for (keys, expected) in [
        ("2 + 3 × 4 =", "14"),
        ("2 × 3 + 4 =", "10"),
        ("8 - 3 - 2 =", "3"),
        ("8 ÷ 4 × 2 =", "4"),
    ] {
        driver.clear();
        driver.press_all(keys)?;
        assert_eq!(driver.display(), expected, "keys: {keys}");
    }
    Ok(())
}

/// Verifies percent, sign toggle and backspace editing
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) -> CliResult<()> {
    driver.clear();
    driver.press_all("2 0 0 + 5 0 %")?;
    assert_eq!(driver.display(), "200+0.5");

    driver.clear();
    driver.press_all("1 2 ±")?;
    assert_eq!(driver.display(), "-12");
    driver.press("±")?;
    assert_eq!(driver.display(), "12");

    driver.press("⌫")?;
    assert_eq!(driver.display(), "1");
    driver.press("⌫")?;
    assert_eq!(driver.display(), "0");

    driver.press_all("5 + ×")?;
    assert_eq!(driver.display(), "5×");
    Ok(())
}

/// Verifies the error state and recovery
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) -> CliResult<()> {
    driver.clear();
    driver.press_all("5 ÷ 0 =")?;
    assert_eq!(driver.display(), ERROR_SENTINEL);

    driver.press("7")?;
    assert_eq!(driver.display(), "7");
    Ok(())
}

/// Verifies history tracking (bounded, newest first)
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) -> CliResult<()> {
    for i in 1..=9 {
        driver.clear();
        driver.press_all(&format!("{i} + 1 ="))?;
    }

    let history = driver.history();
    assert_eq!(history.len(), 8);
    assert_eq!(history[0].expression, "9+1");
    assert_eq!(history[0].result, "10");
    assert_eq!(history[7].expression, "2+1");
    Ok(())
}
