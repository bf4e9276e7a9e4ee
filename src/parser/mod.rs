//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token stream
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (let, return, expression statements, blocks)
//! - Expression parsing (prefix/infix operators, literals, if, fn, calls)
//! - Error recovery: diagnostics accumulate and parsing continues
//!
//! Prefix and infix parse routines are bound to token kinds through
//! exhaustive `match` dispatch, with binding power from a fixed
//! kind-to-precedence table.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
