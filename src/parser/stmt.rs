use crate::{
    ast::{
        ast::Statement,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
    parser::{
        expr::{current_identifier, parse_expr},
        lookups::Precedence,
    },
};

use super::parser::Parser;

/// Statement dispatch: `let` and `return` have dedicated forms, anything
/// else is an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// `let NAME = EXPRESSION;` — the identifier and `=` are mandatory, the
/// trailing semicolon is not.
pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = current_identifier(parser);

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    parser.advance();
    let value = parse_expr(parser, Precedence::Lowest);

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Let(LetStatement { token, name, value }))
}

/// `return EXPRESSION;` — tolerates any number of trailing semicolons,
/// including none.
pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest);

    while parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Return(ReturnStatement { token, value }))
}

/// A bare expression, optionally terminated by a semicolon.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest);

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Expression(ExpressionStatement { token, expression }))
}

/// A `{ ... }` sequence of statements, used by if-expressions and function
/// bodies. Terminates on `}` or EOF; a missing closing brace is accepted
/// silently at this layer.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStatement {
    let token = parser.current_token().clone();
    let mut statements = Vec::new();

    parser.advance();
    while !parser.current_token_is(TokenKind::RBrace) && !parser.current_token_is(TokenKind::EOF) {
        if let Some(statement) = parse_stmt(parser) {
            statements.push(statement);
        }
        parser.advance();
    }

    BlockStatement { token, statements }
}
