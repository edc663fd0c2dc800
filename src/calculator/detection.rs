//! Expression detection for the calculator prompt.
//!
//! Determines whether a line of user input looks like a keypad expression
//! that should be evaluated, rather than a prompt command.

use super::token::FUNCTIONS;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches strings containing only keypad characters.
    /// Allows: digits, whitespace, dots, operators, parentheses, function letters.
    static ref KEYPAD_CHARS: Regex = Regex::new(
        r"^[\d\s\.\+\-x/\^()a-z]+$"
    ).unwrap();

    /// Matches parentheses that contain something (not empty).
    static ref HAS_PARENS: Regex = Regex::new(
        r"\([^)]+\)"
    ).unwrap();
}

/// Check if input looks like a potential calculator expression.
///
/// Returns `true` if the input:
/// 1. Contains only keypad characters
/// 2. Has at least one operator, function call, or non-trivial parentheses
/// 3. Is not just a plain number
pub fn looks_like_expression(input: &str) -> bool {
    let trimmed = input.trim();

    // Too short or empty
    if trimmed.len() < 2 {
        return false;
    }

    if !KEYPAD_CHARS.is_match(trimmed) {
        return false;
    }

    if is_plain_number(trimmed) {
        return false;
    }

    has_operator(trimmed) || has_function(trimmed) || HAS_PARENS.is_match(trimmed)
}

/// Check if the input is just a plain number (no operations).
fn is_plain_number(input: &str) -> bool {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    // Allow optional leading minus for negative numbers
    let to_check = cleaned.strip_prefix('-').unwrap_or(&cleaned);

    !to_check.is_empty() && to_check.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Check if input contains a binary operator between two operands.
fn has_operator(input: &str) -> bool {
    if input.contains('+') || input.contains('/') || input.contains('^') {
        return true;
    }

    let chars: Vec<char> = input.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if (c == '-' || c == 'x') && i > 0 {
            // Look back past any whitespace to find the previous non-space character
            let prev_non_space = chars[..i]
                .iter()
                .rev()
                .find(|&&ch| !ch.is_whitespace())
                .copied();

            // Binary if preceded by an operand: a digit or a closing paren
            if let Some(prev) = prev_non_space
                && (prev.is_ascii_digit() || prev == ')')
            {
                return true;
            }
        }
    }

    false
}

/// Check if input contains a call to a known function.
fn has_function(input: &str) -> bool {
    FUNCTIONS.iter().any(|(name, _)| {
        input.contains(&format!("{}(", name)) || input.contains(&format!("{} (", name))
    })
}
