//! Postfix evaluator
//!
//! `evaluate` runs the whole pipeline: tokenize, shunting-yard, then a value
//! stack over the postfix tokens. It is a pure function; callers own any state.

use crate::core::parser::{to_postfix, Token, Tokenizer};
use crate::core::{CalcError, CalcResult};

/// Evaluates a keypad expression such as `"2+3×4"`.
///
/// Every `Ok` value is finite; overflow and NaN surface as
/// [`CalcError::NonFiniteResult`].
pub fn evaluate(expression: &str) -> CalcResult<f64> {
    let tokens = Tokenizer::new(expression).tokenize();
    let postfix = to_postfix(tokens);
    let value = evaluate_postfix(&postfix)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFiniteResult(value))
    }
}

/// Evaluates tokens already in postfix order
pub fn evaluate_postfix(postfix: &[Token]) -> CalcResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(text) => stack.push(parse_number(text)?),
            Token::Operator(op) => {
                let b = stack.pop().ok_or(CalcError::MalformedExpression)?;
                let a = stack.pop().ok_or(CalcError::MalformedExpression)?;
                stack.push(op.apply(a, b)?);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(CalcError::MalformedExpression),
    }
}

/// Parses a numeric literal: optional sign, digits, at most one `.`.
///
/// Stricter than `f64::from_str`, which would also take `inf`, `NaN` and
/// exponents.
pub fn parse_number(text: &str) -> CalcResult<f64> {
    let unsigned = text.strip_prefix(&['-', '+'][..]).unwrap_or(text);
    let digits = unsigned.chars().filter(char::is_ascii_digit).count();
    let dots = unsigned.chars().filter(|c| *c == '.').count();

    if digits == 0 || dots > 1 || digits + dots != unsigned.chars().count() {
        return Err(CalcError::InvalidNumber(text.to_string()));
    }

    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))
}
