//! History entries recorded after successful evaluations.

use crate::calculator::CalcResult;
use serde::Serialize;
use std::fmt;

/// One line of the calculation log, rendered as `expr = result`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// The expression as it was typed.
    pub expression: String,
    /// The result formatted for display.
    pub display_result: String,
}

impl HistoryEntry {
    /// Create an entry from a CalcResult.
    /// Returns None for failed evaluations, which are never logged.
    pub fn from_calc_result(result: &CalcResult) -> Option<Self> {
        match result {
            CalcResult::Success {
                expression,
                display_result,
                ..
            } => Some(Self {
                expression: expression.clone(),
                display_result: display_result.clone(),
            }),
            CalcResult::Error { .. } => None,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.display_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{EvalOptions, evaluate_expression};

    #[test]
    fn test_entry_from_success() {
        let result = evaluate_expression("2x2", &EvalOptions::default());
        let entry = HistoryEntry::from_calc_result(&result).unwrap();
        assert_eq!(entry.to_string(), "2x2 = 4.000000");
    }

    #[test]
    fn test_no_entry_from_error() {
        let result = evaluate_expression("2x", &EvalOptions::default());
        assert!(HistoryEntry::from_calc_result(&result).is_none());
    }
}
