use crate::ast::{Expr, StatementKind};

/// Statement node produced by an external script parser.
///
/// Only expression, return and variable statements are query targets;
/// the remaining kinds exist so a whole program body can be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Expression evaluated for its effect
    ///
    /// # Example
    /// ```text
    /// alert(1);
    /// ```
    Expression(Expr),

    /// Return with an optional argument
    Return(Option<Expr>),

    /// `var` statement. Each entry is normally an [`Expr::VariableDecl`].
    ///
    /// # Example
    /// ```text
    /// var a = 1, b;
    /// ```
    Variable(Vec<Expr>),

    /// Braced statement list
    Block(Vec<Statement>),

    /// Conditional statement
    If {
        test: Expr,
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
    },

    /// `while` loop
    While { test: Expr, body: Box<Statement> },

    /// `throw` statement
    Throw(Expr),

    /// Lone `;`
    Empty,
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Expression(_) => StatementKind::Expression,
            Statement::Return(_) => StatementKind::Return,
            Statement::Variable(_) => StatementKind::Variable,
            Statement::Block(_) => StatementKind::Block,
            Statement::If { .. } => StatementKind::If,
            Statement::While { .. } => StatementKind::While,
            Statement::Throw(_) => StatementKind::Throw,
            Statement::Empty => StatementKind::Empty,
        }
    }
}
