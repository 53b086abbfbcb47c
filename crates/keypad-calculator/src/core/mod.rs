//! Calculator core: expression buffer, evaluator and history
//!
//! Everything in here is synchronous and allocation-light. The evaluator is a
//! pure function; the buffer and history are plain owned state.

pub mod buffer;
pub mod evaluator;
pub mod format;
pub mod history;
mod operations;
pub mod parser;

pub use operations::Operation;

use thiserror::Error;

/// Display value shown while the calculator is in the error state
pub const ERROR_SENTINEL: &str = "Error";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluation failures - all collapse into [`ERROR_SENTINEL`] at the controller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A numeric token could not be parsed
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    /// Right operand of a division was zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Postfix evaluation did not reduce to exactly one value
    #[error("Malformed expression")]
    MalformedExpression,
    /// Arithmetic produced infinity or NaN
    #[error("Non-finite result: {0}")]
    NonFiniteResult(f64),
}

impl CalcError {
    /// Short machine-friendly name of the error kind, used in logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidNumber(_) => "invalid_number",
            Self::DivisionByZero => "division_by_zero",
            Self::MalformedExpression => "malformed_expression",
            Self::NonFiniteResult(_) => "non_finite_result",
        }
    }
}
