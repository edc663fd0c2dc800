//! Error kinds raised while tokenizing, converting or evaluating.

use thiserror::Error;

/// Failure of a single evaluation request.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    /// Unbalanced parentheses, operand underflow, or a leftover stack depth other than one.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    /// A token that is neither a number, an operator, a parenthesis nor a known function.
    #[error("unknown token '{0}'")]
    UnknownToken(String),

    /// A non-finite value produced while strict numeric mode is active.
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    /// The displayed text could not be read back as a number.
    #[error("display does not hold a number: '{0}'")]
    InvalidDisplay(String),
}

impl CalcError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedExpression(msg.into())
    }
}
