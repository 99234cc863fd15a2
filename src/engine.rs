use log::{debug, trace};

use crate::{
    ast::{Expr, Statement},
    error::QueryError,
    operations::Operation,
};

/// An ordered list of operations matched against a tree.
///
/// A query is built once with the chaining constructors in
/// [`crate::operations`] and then run any number of times. Running never
/// modifies the query, so one query can be shared between threads.
///
/// # Examples
///
/// ```
/// use astquery::Query;
/// use astquery::ast::{Expr, Operator};
///
/// // true || 5, in either operand order
/// let expr = Expr::Binary {
///     op: Operator::LogicalOr,
///     left: Box::new(Expr::Boolean(true)),
///     right: Box::new(Expr::Number(5.0)),
/// };
///
/// let query = Query::new()
///     .must_be_binary()
///     .has_operator([Operator::LogicalOr])
///     .one_side_other_side(Query::new().accept_boolean(5), Query::new().accept_numbers(5));
///
/// assert!(query.run(&expr).is_match());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    operations: Vec<Operation>,
}

/// Holds the first node captured during one or more runs.
///
/// The first operation to succeed stores its output here, and later
/// operations leave it alone. A capture shared across several
/// [`Query::run_with`] calls keeps the node from the earliest run until
/// [`Capture::reset`] is called.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capture<'a> {
    collected: Option<&'a Expr>,
}

impl<'a> Capture<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collected(&self) -> Option<&'a Expr> {
        self.collected
    }

    /// Clears the captured node so the next run captures afresh.
    pub fn reset(&mut self) {
        self.collected = None;
    }

    fn offer(&mut self, node: &'a Expr) {
        if self.collected.is_none() {
            self.collected = Some(node);
        }
    }
}

/// Result of a single run: the verdict plus whatever was captured.
///
/// A failed run may still carry a captured node if operations before the
/// failing one succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<'a> {
    pub result: Result<(), QueryError>,
    pub collected: Option<&'a Expr>,
}

impl<'a> Outcome<'a> {
    pub fn is_match(&self) -> bool {
        self.result.is_ok()
    }

    /// The captured node on success, the failure otherwise.
    pub fn into_result(self) -> Result<Option<&'a Expr>, QueryError> {
        self.result.map(|()| self.collected)
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation.
    pub fn then(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Runs the query against `node` with a fresh capture.
    pub fn run<'a>(&self, node: &'a Expr) -> Outcome<'a> {
        let mut capture = Capture::new();
        let result = self.execute(node, &mut capture).map(|_| ());
        Outcome {
            result,
            collected: capture.collected(),
        }
    }

    /// Runs the query against `node`, capturing into `capture`.
    ///
    /// Returns the node produced by the last operation.
    pub fn run_with<'a>(
        &self,
        node: &'a Expr,
        capture: &mut Capture<'a>,
    ) -> Result<&'a Expr, QueryError> {
        self.execute(node, capture)
    }

    /// Runs the query against the expression(s) a statement carries, with a
    /// fresh capture.
    pub fn run_statement<'a>(&self, statement: &'a Statement) -> Outcome<'a> {
        let mut capture = Capture::new();
        let result = self.run_statement_with(statement, &mut capture);
        Outcome {
            result,
            collected: capture.collected(),
        }
    }

    /// Statement adapter:
    ///
    /// - expression statement: runs on the expression
    /// - return statement: runs on the argument; a bare `return` only matches
    ///   a query without operations
    /// - variable statement: runs on every declarator in order and stops at
    ///   the first failure
    ///
    /// Any other statement fails with [`QueryError::UnsupportedStatement`].
    pub fn run_statement_with<'a>(
        &self,
        statement: &'a Statement,
        capture: &mut Capture<'a>,
    ) -> Result<(), QueryError> {
        match statement {
            Statement::Expression(expr) => self.execute(expr, capture).map(|_| ()),
            Statement::Return(argument) => self
                .execute_optional(argument.as_ref(), capture)
                .map(|_| ()),
            Statement::Variable(declarators) => {
                for declarator in declarators {
                    self.execute(declarator, capture)?;
                }
                Ok(())
            }
            Statement::Block(_)
            | Statement::If { .. }
            | Statement::While { .. }
            | Statement::Throw(_)
            | Statement::Empty => {
                debug!("rejecting {}", statement.kind());
                Err(QueryError::UnsupportedStatement(statement.kind()))
            }
        }
    }

    /// Threads `node` through every operation, stopping at the first failure.
    pub(crate) fn execute<'a>(
        &self,
        node: &'a Expr,
        capture: &mut Capture<'a>,
    ) -> Result<&'a Expr, QueryError> {
        let mut current = node;
        for operation in &self.operations {
            trace!("applying {} to {}", operation, current.kind());
            current = operation.apply(current)?;
            capture.offer(current);
        }
        Ok(current)
    }

    /// Like [`Query::execute`] for a node that may be absent. An absent node
    /// passes a query without operations and fails any other.
    pub(crate) fn execute_optional<'a>(
        &self,
        node: Option<&'a Expr>,
        capture: &mut Capture<'a>,
    ) -> Result<Option<&'a Expr>, QueryError> {
        match node {
            Some(node) => self.execute(node, capture).map(Some),
            None if self.operations.is_empty() => Ok(None),
            None => Err(QueryError::MissingNode),
        }
    }
}
