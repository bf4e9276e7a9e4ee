use crate::{
    ast::{
        ast::Expression,
        expressions::{
            Boolean, CallExpression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
            IntegerLiteral, PrefixExpression,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

/// Precedence-climbing expression parser.
///
/// Looks up a prefix routine for the current token to build the initial
/// left-hand side, then keeps folding infix operators into it while the
/// upcoming operator binds tighter than `precedence`. Returns `None` (the
/// absent marker) when no prefix routine exists; hitting a token with no
/// infix routine just ends the climb.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    let mut left = prefix_parse(parser)?;

    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        if !has_infix_parse_fn(parser.peek_token_kind()) {
            return Some(left);
        }

        parser.advance();
        left = infix_parse(parser, left);
    }

    Some(left)
}

/// Prefix dispatch: one routine per token kind that may begin an
/// expression.
fn prefix_parse(parser: &mut Parser) -> Option<Expression> {
    match parser.current_token_kind() {
        TokenKind::Identifier => Some(Expression::Identifier(current_identifier(parser))),
        TokenKind::Integer => parse_integer_literal(parser),
        TokenKind::True | TokenKind::False => Some(parse_boolean(parser)),
        TokenKind::Bang | TokenKind::Minus => Some(parse_prefix_expr(parser)),
        TokenKind::LParen => parse_grouped_expr(parser),
        TokenKind::If => parse_if_expr(parser),
        TokenKind::Function => parse_function_literal(parser),
        kind => {
            parser.record_error(ParseError::NoPrefixParseFn { kind });
            None
        }
    }
}

/// Infix dispatch, invoked with the cursor already on the operator.
fn infix_parse(parser: &mut Parser, left: Expression) -> Expression {
    match parser.current_token_kind() {
        TokenKind::LParen => parse_call_expr(parser, left),
        _ => parse_infix_expr(parser, left),
    }
}

fn has_infix_parse_fn(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Slash
            | TokenKind::Asterisk
            | TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::LessThan
            | TokenKind::GreaterThan
            | TokenKind::LParen
    )
}

/// Builds an `Identifier` node from the current token. Also used by
/// let-statements and parameter lists.
pub fn current_identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();
    let value = token.literal.clone();
    Identifier { token, value }
}

fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
        Err(_) => {
            parser.record_error(ParseError::IntegerParseError {
                literal: token.literal,
            });
            None
        }
    }
}

fn parse_boolean(parser: &Parser) -> Expression {
    let token = parser.current_token().clone();
    let value = token.kind == TokenKind::True;
    Expression::Boolean(Boolean { token, value })
}

/// `!x` or `-x`: the operand parses at `Prefix` precedence, so `-a * b`
/// groups as `((-a) * b)`.
fn parse_prefix_expr(parser: &mut Parser) -> Expression {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();

    parser.advance();
    let right = parse_expr(parser, Precedence::Prefix);

    Expression::Prefix(PrefixExpression {
        token,
        operator,
        right: right.map(Box::new),
    })
}

/// Left-associative binary operator: the right operand parses at the
/// operator's own precedence, so equal-precedence operators bind left.
fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Expression {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();
    let precedence = parser.current_precedence();

    parser.advance();
    let right = parse_expr(parser, precedence);

    Expression::Infix(InfixExpression {
        token,
        left: Box::new(left),
        operator,
        right: right.map(Box::new),
    })
}

fn parse_grouped_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();

    let expression = parse_expr(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    expression
}

fn parse_if_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::LParen) {
        return None;
    }

    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }
    if !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }

    let consequence = parse_block_stmt(parser);

    let mut alternative = None;
    if parser.peek_token_is(TokenKind::Else) {
        parser.advance();

        if !parser.expect_peek(TokenKind::LBrace) {
            return None;
        }

        alternative = Some(parse_block_stmt(parser));
    }

    Some(Expression::If(IfExpression {
        token,
        condition: condition.map(Box::new),
        consequence,
        alternative,
    }))
}

fn parse_function_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::LParen) {
        return None;
    }

    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }

    let body = parse_block_stmt(parser);

    Some(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Comma-separated bare identifiers; `fn()` yields an empty list.
fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut identifiers = Vec::new();

    if parser.peek_token_is(TokenKind::RParen) {
        parser.advance();
        return Some(identifiers);
    }

    parser.advance();
    identifiers.push(current_identifier(parser));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        identifiers.push(current_identifier(parser));
    }

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(identifiers)
}

/// `(` as an infix operator: function application on the expression to its
/// left.
fn parse_call_expr(parser: &mut Parser, function: Expression) -> Expression {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser);

    Expression::Call(CallExpression {
        token,
        function: Box::new(function),
        arguments,
    })
}

/// Comma-separated argument expressions at `Lowest` precedence; an
/// argument that fails to parse records its diagnostic and is skipped.
fn parse_call_arguments(parser: &mut Parser) -> Vec<Expression> {
    let mut arguments = Vec::new();

    if parser.peek_token_is(TokenKind::RParen) {
        parser.advance();
        return arguments;
    }

    parser.advance();
    if let Some(argument) = parse_expr(parser, Precedence::Lowest) {
        arguments.push(argument);
    }

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        if let Some(argument) = parse_expr(parser, Precedence::Lowest) {
            arguments.push(argument);
        }
    }

    parser.expect_peek(TokenKind::RParen);

    arguments
}
