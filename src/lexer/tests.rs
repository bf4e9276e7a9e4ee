//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Single- and double-character operators
//! - Illegal bytes
//! - EOF behavior

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let mut lexer = Lexer::new(source.to_string());

    for (index, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(
            token,
            Token {
                kind: *kind,
                literal: literal.to_string()
            },
            "token {} of {:?}",
            index,
            source
        );
    }
}

#[test]
fn test_tokenize_punctuation() {
    assert_tokens(
        "=+(){},;",
        &[
            (TokenKind::Assign, "="),
            (TokenKind::Plus, "+"),
            (TokenKind::LParen, "("),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Comma, ","),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_tokenize_operators() {
    assert_tokens(
        "+ - * / < > = ! == !=",
        &[
            (TokenKind::Plus, "+"),
            (TokenKind::Minus, "-"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Slash, "/"),
            (TokenKind::LessThan, "<"),
            (TokenKind::GreaterThan, ">"),
            (TokenKind::Assign, "="),
            (TokenKind::Bang, "!"),
            (TokenKind::Equal, "=="),
            (TokenKind::NotEqual, "!="),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_tokenize_keywords() {
    assert_tokens(
        "let fn true false if else return",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Function, "fn"),
            (TokenKind::True, "true"),
            (TokenKind::False, "false"),
            (TokenKind::If, "if"),
            (TokenKind::Else, "else"),
            (TokenKind::Return, "return"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_tokenize_identifiers() {
    assert_tokens(
        "foo bar _underscore CamelCase lettuce",
        &[
            (TokenKind::Identifier, "foo"),
            (TokenKind::Identifier, "bar"),
            (TokenKind::Identifier, "_underscore"),
            (TokenKind::Identifier, "CamelCase"),
            (TokenKind::Identifier, "lettuce"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_tokenize_integers() {
    assert_tokens(
        "5 10 0 9007",
        &[
            (TokenKind::Integer, "5"),
            (TokenKind::Integer, "10"),
            (TokenKind::Integer, "0"),
            (TokenKind::Integer, "9007"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
";

    assert_tokens(
        source,
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Integer, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "ten"),
            (TokenKind::Assign, "="),
            (TokenKind::Integer, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "add"),
            (TokenKind::Assign, "="),
            (TokenKind::Function, "fn"),
            (TokenKind::LParen, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "y"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Identifier, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "result"),
            (TokenKind::Assign, "="),
            (TokenKind::Identifier, "add"),
            (TokenKind::LParen, "("),
            (TokenKind::Identifier, "five"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "ten"),
            (TokenKind::RParen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Bang, "!"),
            (TokenKind::Minus, "-"),
            (TokenKind::Slash, "/"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Integer, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Integer, "5"),
            (TokenKind::LessThan, "<"),
            (TokenKind::Integer, "10"),
            (TokenKind::GreaterThan, ">"),
            (TokenKind::Integer, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::If, "if"),
            (TokenKind::LParen, "("),
            (TokenKind::Integer, "5"),
            (TokenKind::LessThan, "<"),
            (TokenKind::Integer, "10"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Else, "else"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::False, "false"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Integer, "10"),
            (TokenKind::Equal, "=="),
            (TokenKind::Integer, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Integer, "10"),
            (TokenKind::NotEqual, "!="),
            (TokenKind::Integer, "9"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_tokenize_illegal_byte() {
    assert_tokens(
        "let x = @;",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Assign, "="),
            (TokenKind::Illegal, "@"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_tokenize_whitespace_handling() {
    assert_tokens(
        "  let \t x\n =\r 42  ",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Assign, "="),
            (TokenKind::Integer, "42"),
            (TokenKind::EOF, ""),
        ],
    );
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x".to_string());

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..10 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_tokenize_empty_input() {
    assert_tokens("", &[(TokenKind::EOF, ""), (TokenKind::EOF, "")]);
}

#[test]
fn test_adjacent_runs_do_not_merge() {
    // identifier/digit runs self-terminate without consuming the byte after
    assert_tokens(
        "abc123 5x",
        &[
            (TokenKind::Identifier, "abc"),
            (TokenKind::Integer, "123"),
            (TokenKind::Integer, "5"),
            (TokenKind::Identifier, "x"),
            (TokenKind::EOF, ""),
        ],
    );
}
