use std::fmt::Display;

use super::{
    expressions::{
        Boolean, CallExpression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
        IntegerLiteral, PrefixExpression,
    },
    statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
};

/// A statement in the language.
///
/// The statement set is fixed, so statements are a closed sum type rather
/// than an open trait: every consumer can match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    /// The literal of the statement's defining token, used in diagnostics.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(statement) => &statement.token.literal,
            Statement::Return(statement) => &statement.token.literal,
            Statement::Expression(statement) => &statement.token.literal,
            Statement::Block(statement) => &statement.token.literal,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(statement) => statement.fmt(f),
            Statement::Return(statement) => statement.fmt(f),
            Statement::Expression(statement) => statement.fmt(f),
            Statement::Block(statement) => statement.fmt(f),
        }
    }
}

/// An expression in the language, again a closed sum type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
}

impl Expression {
    /// The literal of the expression's defining token, used in diagnostics.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expression) => &expression.token.literal,
            Expression::IntegerLiteral(expression) => &expression.token.literal,
            Expression::Boolean(expression) => &expression.token.literal,
            Expression::Prefix(expression) => &expression.token.literal,
            Expression::Infix(expression) => &expression.token.literal,
            Expression::If(expression) => &expression.token.literal,
            Expression::Function(expression) => &expression.token.literal,
            Expression::Call(expression) => &expression.token.literal,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expression) => expression.fmt(f),
            Expression::IntegerLiteral(expression) => expression.fmt(f),
            Expression::Boolean(expression) => expression.fmt(f),
            Expression::Prefix(expression) => expression.fmt(f),
            Expression::Infix(expression) => expression.fmt(f),
            Expression::If(expression) => expression.fmt(f),
            Expression::Function(expression) => expression.fmt(f),
            Expression::Call(expression) => expression.fmt(f),
        }
    }
}

/// The parse result: the ordered statements of one source text.
///
/// Rendering a `Code` concatenates the canonical form of each statement,
/// with infix and prefix expressions fully parenthesized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Code {
    pub statements: Vec<Statement>,
}

impl Code {
    pub fn token_literal(&self) -> &str {
        if let Some(statement) = self.statements.first() {
            statement.token_literal()
        } else {
            ""
        }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }
        Ok(())
    }
}
