//! Scenario checks run through the public driver interface

#![allow(clippy::unwrap_used)]

use keypad_calculator::driver::{
    verify_basic_arithmetic, verify_editing, verify_error_recovery, verify_history,
    verify_precedence, CalculatorDriver,
};
use keypad_calculator::prelude::*;

#[test]
fn test_full_scenario_suite_on_one_calculator() {
    let mut calc = Calculator::new();
    verify_basic_arithmetic(&mut calc).unwrap();
    verify_precedence(&mut calc).unwrap();
    verify_editing(&mut calc).unwrap();
    verify_error_recovery(&mut calc).unwrap();
    verify_history(&mut calc).unwrap();
}

#[test]
fn test_keyboard_names_and_labels_mix() {
    let mut calc = Calculator::new();
    calc.press_all("1 2 Backspace 3 * 2 Enter").unwrap();
    assert_eq!(CalculatorDriver::display(&calc), "26");

    calc.press_all("Escape 4 / 8 =").unwrap();
    assert_eq!(CalculatorDriver::display(&calc), "0.5");

    let history = CalculatorDriver::history(&calc);
    assert_eq!(
        history[0],
        HistoryItem {
            expression: "4÷8".into(),
            result: "0.5".into()
        }
    );
    assert_eq!(history[1].expression, "13×2");
}

#[test]
fn test_signed_operand_after_operator() {
    let mut calc = Calculator::new();
    calc.press_all("5 × 3 ± =").unwrap();
    assert_eq!(CalculatorDriver::display(&calc), "-15");
    assert_eq!(CalculatorDriver::history(&calc)[0].expression, "5×-3");
}

#[test]
fn test_failed_evaluation_keeps_history() {
    let mut calc = Calculator::new();
    calc.press_all("2 + 2 =").unwrap();
    calc.press_all("C 1 ÷ 0 =").unwrap();

    assert_eq!(CalculatorDriver::display(&calc), ERROR_SENTINEL);
    assert_eq!(CalculatorDriver::history(&calc).len(), 1);

    calc.press("=").unwrap();
    assert_eq!(CalculatorDriver::display(&calc), ERROR_SENTINEL);
    assert_eq!(CalculatorDriver::history(&calc).len(), 1);
}

#[test]
fn test_every_keypad_button_is_pressable() {
    let keypad = Keypad::new();
    let mut calc = Calculator::new();
    for button in keypad.buttons() {
        calc.press(&button.label()).unwrap();
        assert!(!CalculatorDriver::display(&calc).is_empty());
    }
}
