use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A diagnostic recorded during parsing.
///
/// There is no severity distinction and no source position; diagnostics
/// describe the expected and actual token kinds only. Callers check
/// `Parser::errors()` after parsing to decide whether to trust the AST.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
}
