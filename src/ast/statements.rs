use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expression, Statement},
    expressions::Identifier,
};

/// Let Statement
/// Binds the result of an expression to a name: `let x = 5;`.
///
/// `value` is `None` when the right-hand side failed to parse; the
/// statement itself is still well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            value.fmt(f)?;
        }
        write!(f, ";")
    }
}

/// Return Statement
/// The `return` keyword followed by an optional expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        if let Some(value) = &self.value {
            value.fmt(f)?;
        }
        write!(f, ";")
    }
}

/// Expression Statement
/// Anything other than `let` or `return`: a bare expression with an
/// optional trailing semicolon.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Option<Expression>,
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(expression) = &self.expression {
            expression.fmt(f)?;
        }
        Ok(())
    }
}

/// Block Statement
/// A brace-delimited sequence of statements, used by if-expressions and
/// function bodies. Renders as its statements concatenated.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }
        Ok(())
    }
}
