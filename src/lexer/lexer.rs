use crate::MK_TOKEN;

use super::tokens::{identifier_lookup, Token, TokenKind};

/// The lexer walks the source one byte at a time and hands out tokens on
/// demand. There is no token buffer: each `next_token` call derives exactly
/// one token from the cursor state and moves the cursor forward.
///
/// Invariant: `read_position` is always `position + 1`, except once the
/// input is exhausted, where `ch` stays at the NUL sentinel and every
/// further call keeps returning EOF.
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        let mut lexer = Lexer {
            input: source.into_bytes(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.read_position >= self.input.len() {
            self.ch = 0; // NUL sentinel
        } else {
            self.ch = self.input[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position < self.input.len() {
            self.input[self.read_position]
        } else {
            0
        }
    }

    fn skip_whitespace(&mut self) {
        while self.ch == b' ' || self.ch == b'\t' || self.ch == b'\n' || self.ch == b'\r' {
            self.read_char();
        }
    }

    /// Produces the next token. Total: unrecognized bytes come back as
    /// `Illegal` tokens rather than errors, and exhausted input keeps
    /// returning EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::Equal, "==")
                } else {
                    MK_TOKEN!(TokenKind::Assign, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::NotEqual, "!=")
                } else {
                    MK_TOKEN!(TokenKind::Bang, "!")
                }
            }
            b';' => MK_TOKEN!(TokenKind::Semicolon, ";"),
            b'(' => MK_TOKEN!(TokenKind::LParen, "("),
            b')' => MK_TOKEN!(TokenKind::RParen, ")"),
            b',' => MK_TOKEN!(TokenKind::Comma, ","),
            b'+' => MK_TOKEN!(TokenKind::Plus, "+"),
            b'{' => MK_TOKEN!(TokenKind::LBrace, "{"),
            b'}' => MK_TOKEN!(TokenKind::RBrace, "}"),
            b'-' => MK_TOKEN!(TokenKind::Minus, "-"),
            b'*' => MK_TOKEN!(TokenKind::Asterisk, "*"),
            b'/' => MK_TOKEN!(TokenKind::Slash, "/"),
            b'<' => MK_TOKEN!(TokenKind::LessThan, "<"),
            b'>' => MK_TOKEN!(TokenKind::GreaterThan, ">"),
            0 => MK_TOKEN!(TokenKind::EOF, ""),
            _ => {
                if is_letter(self.ch) {
                    // read_while leaves the cursor on the first byte past
                    // the run, so this case must not advance again
                    let literal = self.read_while(is_letter);
                    return Token {
                        kind: identifier_lookup(&literal),
                        literal,
                    };
                } else if is_digit(self.ch) {
                    let literal = self.read_while(is_digit);
                    return Token {
                        kind: TokenKind::Integer,
                        literal,
                    };
                } else {
                    MK_TOKEN!(TokenKind::Illegal, (self.ch as char).to_string())
                }
            }
        };

        self.read_char();
        token
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) -> String {
        let start = self.position;
        while predicate(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }
}

fn is_letter(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_uppercase() || byte == b'_'
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}
