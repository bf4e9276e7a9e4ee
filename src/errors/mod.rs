//! Error types for the front end.
//!
//! This module defines the diagnostics the parser accumulates. All of them
//! are non-fatal: the parser records them in order and keeps going, so a
//! single malformed construct never aborts the whole parse. Lexical errors
//! are not represented here at all; the lexer reifies unrecognized bytes as
//! `Illegal` tokens instead.

pub mod errors;

#[cfg(test)]
mod tests;
