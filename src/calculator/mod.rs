//! Calculator module for evaluating keypad expressions.
//!
//! This module provides functionality to:
//! - Split input into tokens and reorder them into postfix form
//! - Evaluate postfix queues over an operand stack
//! - Detect if user input looks like a calculator expression
//! - Copy results to the clipboard

mod clipboard;
mod conversion;
mod detection;
mod error;
mod evaluation;
mod token;
mod tokenizer;

pub use clipboard::copy_to_clipboard;
pub use conversion::{postfix_string, to_postfix};
pub use detection::looks_like_expression;
pub use error::CalcError;
pub use evaluation::{
    CalcResult, EvalOptions, NumericMode, evaluate, evaluate_expression, evaluate_postfix,
    format_display,
};
pub use token::{FUNCTIONS, Function, Operator, PostfixToken, Token};
pub use tokenizer::{classify, tokenize};
