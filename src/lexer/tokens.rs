use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Function);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };
}

/// Classifies an identifier run against the keyword table.
///
/// Anything not in `RESERVED_LOOKUP` is an ordinary identifier.
pub fn identifier_lookup(identifier: &str) -> TokenKind {
    if let Some(kind) = RESERVED_LOOKUP.get(identifier) {
        *kind
    } else {
        TokenKind::Identifier
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Integer,

    Comma,
    Semicolon,

    LParen,
    RParen,
    LBrace,
    RBrace,

    Assign,   // =
    Equal,    // ==
    Bang,     // !
    NotEqual, // !=

    LessThan,
    GreaterThan,

    Plus,
    Minus,
    Slash,
    Asterisk,

    // Reserved
    Let,
    Function,
    True,
    False,
    If,
    Else,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single token: its kind and the exact matched text.
///
/// EOF carries an empty literal; an `Illegal` token carries the offending
/// byte as its literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, literal: {} }}", self.kind, self.literal)
    }
}
