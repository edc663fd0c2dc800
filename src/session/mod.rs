//! Calculator session: input buffer, display, history log and memory register.
//!
//! A [`Session`] is what a keypad front end drives. Button presses append to
//! the input buffer, `=` evaluates it, and every evaluation attempt resets the
//! buffer whether it succeeded or not.

mod history;

pub use history::HistoryEntry;

use crate::calculator::{CalcError, CalcResult, EvalOptions, evaluate_expression};
use crate::config::Config;
use tracing::{debug, warn};

/// State owned by one calculator instance.
#[derive(Clone, Debug)]
pub struct Session {
    input: String,
    display: String,
    history: Vec<HistoryEntry>,
    memory: f64,
    options: EvalOptions,
    error_text: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            input: String::new(),
            display: String::new(),
            history: Vec::new(),
            memory: 0.0,
            options: config.eval_options(),
            error_text: config.error_text.clone(),
        }
    }

    /// The pending input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The text currently shown: the last result or the error indicator.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Append the text of a pressed button to the input buffer.
    pub fn append(&mut self, text: &str) {
        self.input.push_str(text);
    }

    /// Remove the last character of the input buffer.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Reset the input buffer and the display.
    pub fn clear(&mut self) {
        self.input.clear();
        self.display.clear();
    }

    /// Evaluate the input buffer.
    ///
    /// Success shows the formatted result and logs `expr = result`. Failure
    /// shows the error indicator. The buffer is emptied in both cases.
    pub fn evaluate(&mut self) -> CalcResult {
        let input = std::mem::take(&mut self.input);
        let result = evaluate_expression(&input, &self.options);

        match HistoryEntry::from_calc_result(&result) {
            Some(entry) => {
                debug!(%entry, "evaluated");
                self.display = entry.display_result.clone();
                self.history.push(entry);
            }
            None => {
                warn!(expression = %input, error = result.display(), "evaluation failed");
                self.display = self.error_text.clone();
            }
        }

        result
    }

    /// Overwrite the memory register.
    pub fn store_memory(&mut self, value: f64) {
        self.memory = value;
    }

    /// Store the currently displayed value into memory.
    ///
    /// Fails, and shows the error indicator, when the display does not hold a number.
    pub fn store_display(&mut self) -> Result<f64, CalcError> {
        match self.display.trim().parse::<f64>() {
            Ok(value) => {
                self.store_memory(value);
                Ok(value)
            }
            Err(_) => {
                let err = CalcError::InvalidDisplay(self.display.clone());
                warn!(%err, "memory store failed");
                self.display = self.error_text.clone();
                Err(err)
            }
        }
    }

    /// The memory register, `0.0` until something is stored.
    pub fn recall_memory(&self) -> f64 {
        self.memory
    }

    /// Append the memory value to the input buffer, as the MR button does.
    pub fn recall_into_input(&mut self) {
        let recalled = format!("{}", self.memory);
        self.input.push_str(&recalled);
    }

    /// All logged calculations in chronological order.
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    pub fn history_entries(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The history joined with newlines, ready for display.
    pub fn history_text(&self) -> String {
        self.history().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::NumericMode;

    fn press_all(session: &mut Session, buttons: &[&str]) {
        for button in buttons {
            session.append(button);
        }
    }

    #[test]
    fn test_evaluate_success_updates_display_and_history() {
        let mut session = Session::default();
        press_all(&mut session, &["2", "+", "3", "x", "4"]);
        assert_eq!(session.input(), "2+3x4");

        let result = session.evaluate();
        assert!(result.is_success());
        assert_eq!(session.display(), "14.000000");
        assert_eq!(session.input(), "");
        assert_eq!(session.history(), vec!["2+3x4 = 14.000000"]);
    }

    #[test]
    fn test_history_keeps_insertion_order() {
        let mut session = Session::default();
        session.append("1+1");
        session.evaluate();
        session.append("2x2");
        session.evaluate();

        assert_eq!(session.history(), vec!["1+1 = 2.000000", "2x2 = 4.000000"]);
        assert_eq!(session.history_text(), "1+1 = 2.000000\n2x2 = 4.000000");
    }

    #[test]
    fn test_failed_evaluation_shows_error_and_clears_input() {
        let mut session = Session::default();
        session.append("(2+3))");

        let result = session.evaluate();
        assert!(!result.is_success());
        assert_eq!(session.display(), "Error");
        assert_eq!(session.input(), "");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut session = Session::default();
        session.append("12+");
        session.backspace();
        assert_eq!(session.input(), "12");

        session.clear();
        assert_eq!(session.input(), "");
        assert_eq!(session.display(), "");

        // Backspace on an empty buffer is a no-op
        session.backspace();
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_memory_round_trip() {
        let mut session = Session::default();
        assert_eq!(session.recall_memory(), 0.0);

        session.store_memory(7.5);
        assert_eq!(session.recall_memory(), 7.5);
    }

    #[test]
    fn test_store_display() {
        let mut session = Session::default();
        session.append("10/4");
        session.evaluate();

        assert_eq!(session.store_display(), Ok(2.5));
        assert_eq!(session.recall_memory(), 2.5);

        session.recall_into_input();
        session.append("x2");
        session.evaluate();
        assert_eq!(session.display(), "5.000000");
    }

    #[test]
    fn test_store_display_rejects_error_text() {
        let mut session = Session::default();
        session.store_memory(3.0);
        session.append("2+");
        session.evaluate();

        let err = session.store_display().unwrap_err();
        assert_eq!(err, CalcError::InvalidDisplay("Error".into()));
        assert_eq!(session.recall_memory(), 3.0);
    }

    #[test]
    fn test_strict_session_reports_division_by_zero() {
        let config = Config {
            numeric_mode: NumericMode::Strict,
            ..Config::default()
        };
        let mut session = Session::new(&config);
        session.append("1/0");
        session.evaluate();
        assert_eq!(session.display(), "Error");
    }

    #[test]
    fn test_ieee_session_shows_infinity() {
        let mut session = Session::default();
        session.append("1/0");
        session.evaluate();
        assert_eq!(session.display(), "Infinity");
        assert_eq!(session.history(), vec!["1/0 = Infinity"]);
    }

    #[test]
    fn test_custom_error_text() {
        let config = Config {
            error_text: "E".to_string(),
            ..Config::default()
        };
        let mut session = Session::new(&config);
        session.append("x");
        session.evaluate();
        assert_eq!(session.display(), "E");
    }
}
