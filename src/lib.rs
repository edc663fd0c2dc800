//! Scientific calculator engine.
//!
//! Keypad input such as `2+3x4` or `sqrt(16)` is split into tokens, reordered
//! into postfix form by a shunting-yard pass and evaluated over an operand
//! stack. A [`session::Session`] adds the input buffer, history log and
//! memory register a keypad front end needs.

pub mod calculator;
pub mod config;
pub mod repl;
pub mod session;

pub use calculator::{CalcError, CalcResult, NumericMode, evaluate};
pub use config::Config;
pub use session::Session;
