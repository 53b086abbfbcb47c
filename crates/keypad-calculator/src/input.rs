//! Input events and the keypad layout
//!
//! A UI collaborator turns button presses and key presses into [`Input`]
//! values and hands them to [`Calculator::dispatch`](crate::controller::Calculator::dispatch).

use crate::core::Operation;

/// Every event the calculator core accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Dot,
    /// Binary operator
    Operator(Operation),
    /// Delete the last character
    Backspace,
    /// Reset the expression to "0"
    Clear,
    /// Divide the current number by 100
    Percent,
    /// Flip the sign of the current number
    ToggleSign,
    /// Evaluate the expression
    Evaluate,
    /// Drop all history entries
    ClearHistory,
}

impl Input {
    /// Maps a keyboard key name to an input.
    ///
    /// Digits, `.`, `+ - * /`, `Enter`/`=`, `Backspace` and `Escape` are
    /// recognised; everything else is ignored.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => return Some(Self::Evaluate),
            "Backspace" => return Some(Self::Backspace),
            "Escape" => return Some(Self::Clear),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };
        Self::from_char(ch)
    }

    /// Maps a single typed character to an input
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Dot),
            '=' => Some(Self::Evaluate),
            _ => Operation::from_char(ch).map(Self::Operator),
        }
    }

    /// Maps a keypad button label to an input, falling back to key names
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "C" => Some(Self::Clear),
            "⌫" => Some(Self::Backspace),
            "%" => Some(Self::Percent),
            "±" => Some(Self::ToggleSign),
            _ => Self::from_key(label),
        }
    }

    /// Returns the keypad label for this input
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Dot => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Clear => "C".to_string(),
            Self::Percent => "%".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Evaluate => "=".to_string(),
            Self::ClearHistory => "Clear history".to_string(),
        }
    }

    /// Returns true for inputs that edit the expression text
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        !matches!(self, Self::Evaluate | Self::ClearHistory)
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Input sent when pressed
    pub input: Input,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.input.label()
    }
}

/// Keypad layout:
/// ```text
/// [ C ] [ ⌫ ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ ± ] [ 0 ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard 5x4 keypad
    #[must_use]
    pub fn new() -> Self {
        let layout: [[Input; 4]; 5] = [
            [
                Input::Clear,
                Input::Backspace,
                Input::Percent,
                Input::Operator(Operation::Divide),
            ],
            [
                Input::Digit(7),
                Input::Digit(8),
                Input::Digit(9),
                Input::Operator(Operation::Multiply),
            ],
            [
                Input::Digit(4),
                Input::Digit(5),
                Input::Digit(6),
                Input::Operator(Operation::Subtract),
            ],
            [
                Input::Digit(1),
                Input::Digit(2),
                Input::Digit(3),
                Input::Operator(Operation::Add),
            ],
            [
                Input::ToggleSign,
                Input::Digit(0),
                Input::Dot,
                Input::Evaluate,
            ],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, inputs)| {
                inputs
                    .iter()
                    .enumerate()
                    .map(move |(col, input)| KeypadButton {
                        input: *input,
                        row,
                        col,
                    })
            })
            .collect();

        Self { buttons, cols: 4 }
    }

    /// Returns all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Returns the number of columns
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.buttons.len().div_ceil(self.cols)
    }

    /// Returns the button at a grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if col >= self.cols {
            return None;
        }
        self.buttons.get(row * self.cols + col)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Key mapping tests =====

    #[test]
    fn test_from_key_digits() {
        for d in 0..=9u8 {
            assert_eq!(Input::from_key(&d.to_string()), Some(Input::Digit(d)));
        }
    }

    #[test]
    fn test_from_key_operators() {
        assert_eq!(
            Input::from_key("+"),
            Some(Input::Operator(Operation::Add))
        );
        assert_eq!(
            Input::from_key("-"),
            Some(Input::Operator(Operation::Subtract))
        );
        assert_eq!(
            Input::from_key("*"),
            Some(Input::Operator(Operation::Multiply))
        );
        assert_eq!(
            Input::from_key("/"),
            Some(Input::Operator(Operation::Divide))
        );
    }

    #[test]
    fn test_from_key_commands() {
        assert_eq!(Input::from_key("Enter"), Some(Input::Evaluate));
        assert_eq!(Input::from_key("="), Some(Input::Evaluate));
        assert_eq!(Input::from_key("Backspace"), Some(Input::Backspace));
        assert_eq!(Input::from_key("Escape"), Some(Input::Clear));
        assert_eq!(Input::from_key("."), Some(Input::Dot));
    }

    #[test]
    fn test_from_key_ignores_unknown() {
        for key in ["a", "Tab", "%", "F1", "", "12", "Shift"] {
            assert_eq!(Input::from_key(key), None, "{key:?}");
        }
    }

    // ===== Label tests =====

    #[test]
    fn test_from_label_keypad_specials() {
        assert_eq!(Input::from_label("C"), Some(Input::Clear));
        assert_eq!(Input::from_label("⌫"), Some(Input::Backspace));
        assert_eq!(Input::from_label("%"), Some(Input::Percent));
        assert_eq!(Input::from_label("±"), Some(Input::ToggleSign));
        assert_eq!(
            Input::from_label("×"),
            Some(Input::Operator(Operation::Multiply))
        );
    }

    #[test]
    fn test_from_label_falls_back_to_keys() {
        assert_eq!(Input::from_label("Escape"), Some(Input::Clear));
        assert_eq!(Input::from_label("7"), Some(Input::Digit(7)));
    }

    #[test]
    fn test_every_keypad_label_maps_back() {
        for button in Keypad::new().buttons() {
            assert_eq!(
                Input::from_label(&button.label()),
                Some(button.input),
                "label {}",
                button.label()
            );
        }
    }

    #[test]
    fn test_is_edit() {
        assert!(Input::Digit(1).is_edit());
        assert!(Input::Clear.is_edit());
        assert!(!Input::Evaluate.is_edit());
        assert!(!Input::ClearHistory.is_edit());
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.buttons().len(), 20);
        assert_eq!(keypad.cols(), 4);
        assert_eq!(keypad.rows(), 5);
    }

    #[test]
    fn test_keypad_corners() {
        let keypad = Keypad::default();
        assert_eq!(keypad.button_at(0, 0).unwrap().input, Input::Clear);
        assert_eq!(
            keypad.button_at(0, 3).unwrap().input,
            Input::Operator(Operation::Divide)
        );
        assert_eq!(keypad.button_at(4, 0).unwrap().input, Input::ToggleSign);
        assert_eq!(keypad.button_at(4, 3).unwrap().input, Input::Evaluate);
    }

    #[test]
    fn test_keypad_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.button_at(5, 0).is_none());
        assert!(keypad.button_at(0, 4).is_none());
    }

    #[test]
    fn test_keypad_find() {
        let keypad = Keypad::new();
        let five = keypad.find("5").unwrap();
        assert_eq!((five.row, five.col), (2, 1));
        assert!(keypad.find("^").is_none());
    }

    #[test]
    fn test_keypad_labels_unique() {
        let keypad = Keypad::new();
        let mut labels: Vec<String> = keypad.buttons().iter().map(KeypadButton::label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 20);
    }
}
