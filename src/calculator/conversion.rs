//! Infix to postfix conversion (shunting-yard).

use super::error::CalcError;
use super::token::{Function, Operator, PostfixToken, Token};
use super::tokenizer::classify;
use tracing::debug;

/// Entries of the pending-operator stack.
#[derive(Clone, Copy, Debug)]
enum Pending {
    Operator(Operator),
    Function(Function),
    LeftParen,
}

impl Pending {
    /// Functions and parentheses never compare above a binary operator.
    fn precedence(self) -> u8 {
        match self {
            Self::Operator(op) => op.precedence(),
            Self::Function(_) | Self::LeftParen => 0,
        }
    }

    fn into_output(self) -> Option<PostfixToken> {
        match self {
            Self::Operator(op) => Some(PostfixToken::Operator(op)),
            Self::Function(func) => Some(PostfixToken::Function(func)),
            Self::LeftParen => None,
        }
    }
}

/// Reorder raw infix tokens into postfix evaluation order.
///
/// Equal precedence resolves left-to-right for every operator, so `2^3^2`
/// groups as `(2^3)^2`. A function is emitted right after the parenthesized
/// group that follows it.
pub fn to_postfix<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<PostfixToken>, CalcError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for raw in tokens {
        match classify(raw.as_ref())? {
            Token::Number(n) => output.push(PostfixToken::Number(n)),
            Token::Function(func) => stack.push(Pending::Function(func)),
            Token::LeftParen => stack.push(Pending::LeftParen),
            Token::RightParen => {
                loop {
                    match stack.pop() {
                        Some(Pending::LeftParen) => break,
                        Some(pending) => output.extend(pending.into_output()),
                        None => return Err(CalcError::malformed("unmatched ')'")),
                    }
                }
                if let Some(Pending::Function(func)) = stack.last().copied() {
                    stack.pop();
                    output.push(PostfixToken::Function(func));
                }
            }
            Token::Operator(op) => {
                while let Some(&top) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    stack.pop();
                    output.extend(top.into_output());
                }
                stack.push(Pending::Operator(op));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending.into_output() {
            Some(token) => output.push(token),
            None => return Err(CalcError::malformed("unmatched '('")),
        }
    }

    debug!(postfix = %postfix_string(&output), "converted expression");
    Ok(output)
}

/// Render a postfix queue space-separated, e.g. `2 3 4 x +`.
pub fn postfix_string(tokens: &[PostfixToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::tokenizer::tokenize;

    fn convert(input: &str) -> String {
        postfix_string(&to_postfix(&tokenize(input)).unwrap())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(convert("2+3x4"), "2 3 4 x +");
        assert_eq!(convert("2x3+4"), "2 3 x 4 +");
        assert_eq!(convert("2+3^2x4"), "2 3 2 ^ 4 x +");
    }

    #[test]
    fn test_left_associative_ties() {
        assert_eq!(convert("8-3-2"), "8 3 - 2 -");
        assert_eq!(convert("16/4/2"), "16 4 / 2 /");
        assert_eq!(convert("2^3^2"), "2 3 ^ 2 ^");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(convert("(2+3)x4"), "2 3 + 4 x");
        assert_eq!(convert("2x(3+(4-1))"), "2 3 4 1 - + x");
    }

    #[test]
    fn test_functions_follow_their_group() {
        assert_eq!(convert("sin(90)"), "90 sin");
        assert_eq!(convert("sqrt(16)+1"), "16 sqrt 1 +");
        assert_eq!(convert("2xlog(100)"), "2 100 log x");
        assert_eq!(convert("sqrt(sqrt(16))"), "16 sqrt sqrt");
    }

    #[test]
    fn test_output_never_holds_parentheses() {
        let postfix = to_postfix(&tokenize("((1+2)x(3+4))")).unwrap();
        assert_eq!(postfix.len(), 7);
        assert_eq!(postfix_string(&postfix), "1 2 + 3 4 + x");
    }

    #[test]
    fn test_unmatched_closing_paren() {
        let err = to_postfix(&tokenize("(2+3))")).unwrap_err();
        assert!(matches!(err, CalcError::MalformedExpression(_)));
    }

    #[test]
    fn test_unmatched_opening_paren() {
        let err = to_postfix(&tokenize("(2+3")).unwrap_err();
        assert!(matches!(err, CalcError::MalformedExpression(_)));
    }

    #[test]
    fn test_unknown_token() {
        let err = to_postfix(&tokenize("2+abc")).unwrap_err();
        assert_eq!(err, CalcError::UnknownToken("abc".into()));
    }

    #[test]
    fn test_empty_input() {
        assert!(to_postfix::<String>(&[]).unwrap().is_empty());
    }
}
