use std::{env, fs::read_to_string};

use frontend::{lexer::lexer::Lexer, parser::parser::Parser};

/// Thin driver: feed a source file through the lexer and parser, then
/// print either the diagnostics or the rendered AST.
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let source = read_to_string(&args[1]).expect("Failed to read file!");

    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let code = parser.parse_code();

    if parser.errors().is_empty() {
        println!("{}", code);
    } else {
        for error in parser.errors() {
            println!("Error: {}", error);
        }
    }
}
