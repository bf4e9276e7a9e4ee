//! Unit tests for the diagnostic messages.

use crate::lexer::tokens::TokenKind;

use super::errors::ParseError;

#[test]
fn test_unexpected_token_message() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::Assign,
        actual: TokenKind::Integer,
    };

    assert_eq!(
        error.to_string(),
        "expected next token to be Assign, got Integer instead"
    );
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = ParseError::NoPrefixParseFn {
        kind: TokenKind::Plus,
    };

    assert_eq!(error.to_string(), "no prefix parse function for Plus found");
}

#[test]
fn test_integer_parse_error_message() {
    let error = ParseError::IntegerParseError {
        literal: "9999999999999999999999".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "could not parse \"9999999999999999999999\" as integer"
    );
}
