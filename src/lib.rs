#![allow(clippy::module_inception)]

//! Front end for a small expression-and-statement language.
//!
//! Source text goes through two stages:
//!
//! 1. The lexer turns bytes into a lazy stream of tokens.
//! 2. The parser pulls tokens on demand and builds an AST using Pratt
//!    (precedence climbing) parsing.
//!
//! There is no evaluator or code generator here; the AST and its textual
//! rendering are the final products.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
