//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization over a byte cursor
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - One-byte lookahead for the two-character operators `==` and `!=`
//! - Whitespace skipping and an idempotent EOF token

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
