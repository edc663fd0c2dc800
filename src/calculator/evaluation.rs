//! Postfix evaluation and result formatting.

use super::conversion::to_postfix;
use super::error::CalcError;
use super::token::PostfixToken;
use super::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How non-finite intermediate values are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericMode {
    /// Infinity and NaN propagate like ordinary IEEE-754 values.
    #[default]
    Ieee,
    /// Any non-finite value aborts evaluation with [`CalcError::NumericDomain`].
    Strict,
}

/// Options that shape a single evaluation and how its result is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalOptions {
    pub mode: NumericMode,
    /// Digits after the decimal point in the display form.
    pub precision: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            mode: NumericMode::Ieee,
            precision: 6,
        }
    }
}

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CalcResult {
    /// The expression produced a value.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Fixed-precision form, e.g. `4.000000`.
        display_result: String,
        /// Compact form without padding, e.g. `4`.
        clipboard_result: String,
    },
    /// The expression could not be evaluated.
    Error {
        /// The original expression.
        expression: String,
        /// Description of what went wrong.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }
}

/// Run a postfix queue over an operand stack.
///
/// Binary operators pop the right operand first, then the left one.
pub fn evaluate_postfix(tokens: &[PostfixToken], mode: NumericMode) -> Result<f64, CalcError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let value = match *token {
            PostfixToken::Number(n) => n,
            PostfixToken::Function(func) => {
                let arg = pop(&mut stack, token)?;
                func.apply(arg)
            }
            PostfixToken::Operator(op) => {
                let rhs = pop(&mut stack, token)?;
                let lhs = pop(&mut stack, token)?;
                op.apply(lhs, rhs)
            }
        };

        if mode == NumericMode::Strict && !value.is_finite() {
            return Err(CalcError::NumericDomain(format!(
                "'{}' produced {}",
                token,
                format_non_finite(value)
            )));
        }

        trace!(%token, value, depth = stack.len() + 1, "push");
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(CalcError::malformed("nothing to evaluate")),
        rest => Err(CalcError::malformed(format!(
            "{} values left on the stack",
            rest.len()
        ))),
    }
}

fn pop(stack: &mut Vec<f64>, token: &PostfixToken) -> Result<f64, CalcError> {
    stack
        .pop()
        .ok_or_else(|| CalcError::malformed(format!("missing operand for '{}'", token)))
}

/// Tokenize, convert and evaluate an infix expression.
pub fn evaluate(input: &str, mode: NumericMode) -> Result<f64, CalcError> {
    let tokens = tokenize(input);
    debug!(?tokens, "tokenized expression");
    let postfix = to_postfix(&tokens)?;
    evaluate_postfix(&postfix, mode)
}

/// Evaluate a mathematical expression into a displayable result.
pub fn evaluate_expression(input: &str, options: &EvalOptions) -> CalcResult {
    let expression = input.trim().to_string();

    match evaluate(&expression, options.mode) {
        Ok(value) => CalcResult::Success {
            display_result: format_display(value, options.precision),
            clipboard_result: format_clipboard(value),
            value,
            expression,
        },
        Err(err) => CalcResult::Error {
            message: err.to_string(),
            expression,
        },
    }
}

/// Format a number with a fixed number of decimals.
///
/// Non-finite values render as `Infinity`, `-Infinity` or `NaN`.
pub fn format_display(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", precision, value)
    } else {
        format_non_finite(value).to_string()
    }
}

fn format_non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

/// Format a number for clipboard (raw number, no padding).
fn format_clipboard(value: f64) -> String {
    if !value.is_finite() {
        format_non_finite(value).to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.10}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
