//! Splitting raw keypad input into tokens.
//!
//! Splitting and classification are separate steps: [`tokenize`] only cuts the
//! string at operator and parenthesis boundaries, [`classify`] decides what
//! each piece is.

use super::error::CalcError;
use super::token::{Function, Operator, Token};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Either a single operator/paren character, or a run of anything else.
    static ref PIECES: Regex = Regex::new(r"[-+x/^()]|[^-+x/^()]+").unwrap();

    /// Digits with an optional fractional part.
    static ref NUMBER: Regex = Regex::new(r"^\d+(\.\d+)?$").unwrap();
}

/// Split an infix expression into trimmed, non-empty tokens.
///
/// Every operator or parenthesis becomes its own token; everything between
/// them (numbers, function names) stays joined.
pub fn tokenize(input: &str) -> Vec<String> {
    PIECES
        .find_iter(input)
        .map(|m| m.as_str().trim())
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify one raw token.
pub fn classify(raw: &str) -> Result<Token, CalcError> {
    if NUMBER.is_match(raw) {
        return raw
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| CalcError::UnknownToken(raw.to_string()));
    }

    if let Some(func) = Function::from_name(raw) {
        return Ok(Token::Function(func));
    }

    if let Some(op) = Operator::from_symbol(raw) {
        return Ok(Token::Operator(op));
    }

    match raw {
        "(" => Ok(Token::LeftParen),
        ")" => Ok(Token::RightParen),
        _ => Err(CalcError::UnknownToken(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_operators() {
        assert_eq!(tokenize("2+3x4"), vec!["2", "+", "3", "x", "4"]);
        assert_eq!(tokenize("12.5/0.5"), vec!["12.5", "/", "0.5"]);
        assert_eq!(tokenize("2^3^2"), vec!["2", "^", "3", "^", "2"]);
    }

    #[test]
    fn test_keeps_function_names_joined() {
        assert_eq!(
            tokenize("sqrt(16)+sin(90)"),
            vec!["sqrt", "(", "16", ")", "+", "sin", "(", "90", ")"]
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(tokenize(" 2 + ( 3 ) "), vec!["2", "+", "(", "3", ")"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let input = "(2+3)x4-cos(60)";
        assert_eq!(tokenize(input), tokenize(input));
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        assert_eq!(tokenize("2*3"), vec!["2*3"]);
        assert_eq!(tokenize("2+a"), vec!["2", "+", "a"]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("42").unwrap(), Token::Number(42.0));
        assert_eq!(classify("0.25").unwrap(), Token::Number(0.25));
        assert_eq!(classify("x").unwrap(), Token::Operator(Operator::Mul));
        assert_eq!(classify("^").unwrap(), Token::Operator(Operator::Pow));
        assert_eq!(classify("log").unwrap(), Token::Function(Function::Log));
        assert_eq!(classify("(").unwrap(), Token::LeftParen);
        assert_eq!(classify(")").unwrap(), Token::RightParen);
    }

    #[test]
    fn test_classify_rejects_malformed_numbers() {
        assert_eq!(classify("1."), Err(CalcError::UnknownToken("1.".into())));
        assert_eq!(classify(".5"), Err(CalcError::UnknownToken(".5".into())));
        assert_eq!(classify("1.2.3"), Err(CalcError::UnknownToken("1.2.3".into())));
        assert_eq!(classify("2*3"), Err(CalcError::UnknownToken("2*3".into())));
    }
}
