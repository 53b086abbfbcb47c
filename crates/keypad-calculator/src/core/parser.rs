//! Tokenizer and infix-to-postfix conversion
//!
//! The expression text coming from the keypad is flat: numbers separated by
//! `+ - × ÷`, where a `+`/`-` with no operand before it is a sign that belongs
//! to the following number. [`is_sign_marker`] is the one place that decides
//! this; tokenizing, percent and sign toggling all go through it.

use crate::core::Operation;

/// Token produced by [`Tokenizer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Numeric literal text, including a folded sign (parsed during evaluation)
    Number(String),
    /// Binary operator
    Operator(Operation),
}

impl Token {
    /// Creates a number token from literal text
    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }

    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Decides whether `op` is a unary sign rather than a binary operator.
///
/// `prev` is the previous non-whitespace character of the expression. Only
/// `+` and `-` can be signs, and only at the start or right after another
/// operator.
#[must_use]
pub fn is_sign_marker(op: Operation, prev: Option<char>) -> bool {
    op.is_sign() && prev.map_or(true, Operation::is_operator_char)
}

/// Tokenizer for keypad expressions
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tokenizes the entire input.
    ///
    /// Never fails: anything that is not an operator is accumulated into the
    /// current number literal and rejected later when it does not parse.
    #[must_use]
    pub fn tokenize(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut number = String::new();
        let mut prev: Option<char> = None;

        for ch in self.input.chars() {
            if ch.is_whitespace() {
                continue;
            }

            match Operation::from_char(ch) {
                Some(op) => {
                    if !number.is_empty() {
                        tokens.push(Token::Number(std::mem::take(&mut number)));
                    }
                    if is_sign_marker(op, prev) {
                        number.push(op.symbol());
                    } else {
                        tokens.push(Token::Operator(op));
                    }
                }
                None => number.push(ch),
            }

            prev = Some(ch);
        }

        if !number.is_empty() {
            tokens.push(Token::Number(number));
        }

        tokens
    }
}

/// Converts infix tokens to postfix order (shunting-yard).
///
/// Equal precedence pops first, which makes every operator left-associative.
#[must_use]
pub fn to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Operation> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(op) => {
                while let Some(top) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(op);
            }
        }
    }

    output.extend(stack.into_iter().rev().map(Token::Operator));
    output
}

/// The trailing numeric run of an expression and everything before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRun<'a> {
    /// Text up to and including the last binary operator
    pub prefix: &'a str,
    /// Text after the last binary operator (may carry a sign, may be empty)
    pub number: &'a str,
}

/// Splits `expression` after its last binary operator.
///
/// Sign markers stay inside the run, so `"5×-3"` splits into `"5×"` and `"-3"`.
#[must_use]
pub fn split_current_number(expression: &str) -> NumberRun<'_> {
    let mut split_at = 0;
    let mut prev: Option<char> = None;

    for (idx, ch) in expression.char_indices() {
        if ch.is_whitespace() {
            continue;
        }
        if let Some(op) = Operation::from_char(ch) {
            if !is_sign_marker(op, prev) {
                split_at = idx + ch.len_utf8();
            }
        }
        prev = Some(ch);
    }

    let (prefix, number) = expression.split_at(split_at);
    NumberRun { prefix, number }
}
