//! The main Parser struct and the top-level parse driver.
//!
//! The parser maintains a constant two-token lookahead window over the
//! lexer: `current` is the token being parsed, `peek` is the one after it.
//! `advance` shifts the window one token to the right, pulling a fresh
//! token from the lexer on demand; tokens are never buffered beyond the
//! window and never re-read.

use crate::{
    ast::ast::Code,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{precedence_of, Precedence},
    stmt::parse_stmt,
};

pub struct Parser {
    /// The token source, consumed strictly left to right
    lexer: Lexer,
    /// The token currently being parsed
    current: Token,
    /// One-token lookahead
    peek: Token,
    /// Diagnostics in order of occurrence; never cause an abort
    errors: Vec<ParseError>,
}

impl Parser {
    /// Creates a parser over `lexer` and primes the lookahead window with
    /// the first two tokens.
    pub fn new(mut lexer: Lexer) -> Parser {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Shifts `peek` into `current` and pulls a fresh token into `peek`.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances onto the peek token if it has the expected kind. Otherwise
    /// records an expected-vs-actual diagnostic and stays put; the caller
    /// is expected to abandon its construct and return the absent marker.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token_is(expected) {
            self.advance();
            true
        } else {
            self.errors.push(ParseError::UnexpectedToken {
                expected,
                actual: self.peek.kind,
            });
            false
        }
    }

    pub fn record_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    /// Diagnostics collected by the most recent `parse_code` call.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parses the whole token stream into a `Code` root.
    ///
    /// A statement that fails to parse is skipped, not inserted, and
    /// parsing resumes at the next token, so later statements are still
    /// attempted. This never fails: callers check `errors()` to decide
    /// whether to trust the result.
    pub fn parse_code(&mut self) -> Code {
        let mut code = Code::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(statement) = parse_stmt(self) {
                code.statements.push(statement);
            }
            self.advance();
        }

        code
    }
}
