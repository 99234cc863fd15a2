//! Matching units a [`Query`] is assembled from.
//!
//! Every operation is a pure function of the current node: it either hands
//! a node on to the next operation (usually the same one, sometimes a node
//! inside it) or fails with a [`QueryError`]. Operations that hold nested
//! queries treat them as configuration and run them with a fresh capture.

use std::fmt;

use log::debug;
use regex::Regex;

use crate::{
    ast::{Expr, NodeKind, Operator},
    engine::{Capture, Query},
    error::QueryError,
    verify::{Content, verify_expression},
    walker::{CallFinder, ThisCounter, inspect},
};

const BINARY_LIKE: &[NodeKind] = &[NodeKind::Binary, NodeKind::Assign];
const BINARY: &[NodeKind] = &[NodeKind::Binary];
const UNARY: &[NodeKind] = &[NodeKind::Unary];
const ASSIGN: &[NodeKind] = &[NodeKind::Assign];
const ASSIGN_OR_VAR: &[NodeKind] = &[NodeKind::Assign, NodeKind::VariableDecl];
const OBJECT: &[NodeKind] = &[NodeKind::Object];
const FUNCTION: &[NodeKind] = &[NodeKind::Function];
const CALL: &[NodeKind] = &[NodeKind::Call];

#[derive(Debug, Clone)]
pub enum Operation {
    /// Passes the node through; only useful for capturing it.
    Empty,

    // Structural guards
    /// Binary or assignment node.
    MustBeBinary,
    MustBeUnary,
    MustBeAssign,
    /// Assignment or variable declarator.
    MustBeAssignOrVar,
    MustBeObjectLiteral,
    MustBeFunctionLiteral,
    MustBeCall,
    /// Call whose callee is a function literal, as in `(function() {})()`.
    MustBeAnonymousCall,

    /// Operator of an assign, binary or unary node must be in the set.
    HasOperator(Vec<Operator>),

    // Descent combinators
    /// Query every operand of a binary or unary node.
    Operands(Query),
    /// First query on one operand of a binary node and second on the other,
    /// in either order.
    OneSideOtherSide(Query, Query),
    /// Query the right operand, or the initializer of a declarator.
    RightSide(Query),
    /// First alternative that matches the current node wins.
    Either(Vec<Query>),

    // Leaf-content verifiers
    AcceptNumbers(usize),
    AcceptBoolean(usize),

    // Call shape
    /// Finds a call or `new` anywhere in the subtree and narrows to it.
    MustBeCallD { first_only: bool },
    /// Narrows a call to the identifier naming its callee.
    CallMustHaveIdentifier,

    /// Subtree must contain `this` somewhere.
    ContainsThis,

    /// Identifier whose name matches the pattern.
    NameMatches(Regex),
}

impl Operation {
    /// Applies the operation to `node`, returning the node the next operation
    /// receives.
    pub fn apply<'a>(&self, node: &'a Expr) -> Result<&'a Expr, QueryError> {
        match self {
            Operation::Empty => Ok(node),

            Operation::MustBeBinary => guard(node, BINARY_LIKE),
            Operation::MustBeUnary => guard(node, UNARY),
            Operation::MustBeAssign => guard(node, ASSIGN),
            Operation::MustBeAssignOrVar => guard(node, ASSIGN_OR_VAR),
            Operation::MustBeObjectLiteral => guard(node, OBJECT),
            Operation::MustBeFunctionLiteral => guard(node, FUNCTION),
            Operation::MustBeCall => guard(node, CALL),
            Operation::MustBeAnonymousCall => match node {
                Expr::Call { callee, .. } => {
                    guard(callee, FUNCTION)?;
                    Ok(node)
                }
                _ => guard(node, CALL),
            },

            Operation::HasOperator(operators) => {
                let operator = node
                    .operator()
                    .ok_or(QueryError::MissingOperator(node.kind()))?;
                if operators.contains(&operator) {
                    Ok(node)
                } else {
                    Err(QueryError::OperatorMismatch(operator))
                }
            }

            Operation::Operands(query) => match node {
                Expr::Binary { left, right, .. } => {
                    let failures: Vec<QueryError> = [sub_run(query, left), sub_run(query, right)]
                        .into_iter()
                        .filter_map(Result::err)
                        .collect();
                    if failures.is_empty() {
                        Ok(node)
                    } else {
                        Err(QueryError::Aggregate(failures))
                    }
                }
                Expr::Unary { operand, .. } => sub_run(query, operand).map(|()| node),
                _ => Err(QueryError::StructureMismatch(node.kind())),
            },

            Operation::OneSideOtherSide(one, other) => {
                let Expr::Binary { left, right, .. } = node else {
                    return Err(QueryError::TypeMismatch {
                        expected: BINARY,
                        actual: node.kind(),
                    });
                };
                let Err(first) = pair_run(one, left, other, right) else {
                    return Ok(node);
                };
                match pair_run(one, right, other, left) {
                    Ok(()) => Ok(node),
                    Err(second) => {
                        debug!("neither operand order matched {}", node.kind());
                        Err(QueryError::Aggregate(vec![first, second]))
                    }
                }
            }

            Operation::RightSide(query) => match node {
                Expr::Assign { right, .. } | Expr::Binary { right, .. } => {
                    sub_run(query, right).map(|()| node)
                }
                Expr::VariableDecl { initializer, .. } => {
                    let mut capture = Capture::default();
                    query
                        .execute_optional(initializer.as_deref(), &mut capture)
                        .map(|_| node)
                }
                _ => Err(QueryError::StructureMismatch(node.kind())),
            },

            Operation::Either(queries) => {
                let mut failures = Vec::with_capacity(queries.len());
                for query in queries {
                    match sub_run(query, node) {
                        Ok(()) => return Ok(node),
                        Err(err) => failures.push(err),
                    }
                }
                debug!("none of {} alternatives matched {}", queries.len(), node.kind());
                Err(QueryError::Aggregate(failures))
            }

            Operation::AcceptNumbers(depth) => {
                verify_expression(node, *depth, Content::Numbers).map(|()| node)
            }
            Operation::AcceptBoolean(depth) => {
                verify_expression(node, *depth, Content::Booleans).map(|()| node)
            }

            Operation::MustBeCallD { first_only } => {
                let mut finder = CallFinder::new(*first_only);
                inspect(node, &mut finder);
                finder.found.ok_or(QueryError::NoMatch)
            }

            Operation::CallMustHaveIdentifier => {
                let Expr::Call { callee, .. } = node else {
                    return guard(node, CALL);
                };
                match callee.as_ref() {
                    Expr::Identifier(_) => Ok(callee.as_ref()),
                    Expr::Dot { member, .. } if matches!(member.as_ref(), Expr::Identifier(_)) => {
                        Ok(member.as_ref())
                    }
                    _ => Err(QueryError::NoIdentifier),
                }
            }

            Operation::ContainsThis => {
                let mut counter = ThisCounter::default();
                inspect(node, &mut counter);
                if counter.found == 0 {
                    Err(QueryError::NoMatch)
                } else {
                    Ok(node)
                }
            }

            Operation::NameMatches(pattern) => match node {
                Expr::Identifier(name) if pattern.is_match(name) => Ok(node),
                Expr::Identifier(name) => Err(QueryError::NameMismatch(name.clone())),
                _ => Err(QueryError::NoIdentifier),
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Empty => "empty",
            Operation::MustBeBinary => "must_be_binary",
            Operation::MustBeUnary => "must_be_unary",
            Operation::MustBeAssign => "must_be_assign",
            Operation::MustBeAssignOrVar => "must_be_assign_or_var",
            Operation::MustBeObjectLiteral => "must_be_object_literal",
            Operation::MustBeFunctionLiteral => "must_be_function_literal",
            Operation::MustBeCall => "must_be_call",
            Operation::MustBeAnonymousCall => "must_be_anonymous_call",
            Operation::HasOperator(_) => "has_operator",
            Operation::Operands(_) => "operands",
            Operation::OneSideOtherSide(..) => "one_side_other_side",
            Operation::RightSide(_) => "right_side",
            Operation::Either(_) => "either",
            Operation::AcceptNumbers(_) => "accept_numbers",
            Operation::AcceptBoolean(_) => "accept_boolean",
            Operation::MustBeCallD { .. } => "must_be_call_d",
            Operation::CallMustHaveIdentifier => "call_must_have_identifier",
            Operation::ContainsThis => "contains_this",
            Operation::NameMatches(_) => "name_matches",
        };
        f.write_str(name)
    }
}

fn guard<'a>(node: &'a Expr, expected: &'static [NodeKind]) -> Result<&'a Expr, QueryError> {
    if expected.contains(&node.kind()) {
        Ok(node)
    } else {
        Err(QueryError::TypeMismatch {
            expected,
            actual: node.kind(),
        })
    }
}

fn sub_run(query: &Query, node: &Expr) -> Result<(), QueryError> {
    let mut capture = Capture::default();
    query.execute(node, &mut capture).map(|_| ())
}

/// Runs both halves of one operand assignment. Both halves always run so a
/// failed attempt reports every side that did not match.
fn pair_run(one: &Query, a: &Expr, other: &Query, b: &Expr) -> Result<(), QueryError> {
    let failures: Vec<QueryError> = [sub_run(one, a), sub_run(other, b)]
        .into_iter()
        .filter_map(Result::err)
        .collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(QueryError::Aggregate(failures))
    }
}

impl Query {
    /// Passes the node through, capturing it if nothing has been captured yet.
    pub fn empty(self) -> Self {
        self.then(Operation::Empty)
    }

    /// Restricts the node to a binary or assignment expression.
    pub fn must_be_binary(self) -> Self {
        self.then(Operation::MustBeBinary)
    }

    /// Restricts the node to a unary expression.
    pub fn must_be_unary(self) -> Self {
        self.then(Operation::MustBeUnary)
    }

    pub fn must_be_assign(self) -> Self {
        self.then(Operation::MustBeAssign)
    }

    pub fn must_be_assign_or_var(self) -> Self {
        self.then(Operation::MustBeAssignOrVar)
    }

    pub fn must_be_object_literal(self) -> Self {
        self.then(Operation::MustBeObjectLiteral)
    }

    pub fn must_be_function_literal(self) -> Self {
        self.then(Operation::MustBeFunctionLiteral)
    }

    /// Restricts the node itself to a call, without searching inside it.
    pub fn must_be_call(self) -> Self {
        self.then(Operation::MustBeCall)
    }

    /// Restricts the node to an immediately invoked function literal.
    pub fn must_be_anonymous_call(self) -> Self {
        self.then(Operation::MustBeAnonymousCall)
    }

    /// Searches the subtree for a call or `new` and narrows to it.
    ///
    /// With `first_only` the first call the walk finishes is taken, which for
    /// `f()()` is the inner `f()`. Without it the whole subtree is walked and
    /// the last one wins, which for `f()()` is the outer call.
    pub fn must_be_call_d(self, first_only: bool) -> Self {
        self.then(Operation::MustBeCallD { first_only })
    }

    /// Narrows a call to its callee identifier (`f` in `f()` and `o.f()`).
    pub fn call_must_have_identifier(self) -> Self {
        self.then(Operation::CallMustHaveIdentifier)
    }

    /// Filters assignment, binary and unary nodes by operator.
    pub fn has_operator(self, operators: impl IntoIterator<Item = Operator>) -> Self {
        self.then(Operation::HasOperator(operators.into_iter().collect()))
    }

    /// Runs `query` on every operand.
    ///
    /// Unary: the operand. Binary: left and right, both must match.
    pub fn operands(self, query: Query) -> Self {
        self.then(Operation::Operands(query))
    }

    /// Runs `one` and `other` on the two operands of a binary node. If the
    /// left/right assignment fails the swapped one is tried.
    pub fn one_side_other_side(self, one: Query, other: Query) -> Self {
        self.then(Operation::OneSideOtherSide(one, other))
    }

    pub fn right_side(self, query: Query) -> Self {
        self.then(Operation::RightSide(query))
    }

    /// Tries each alternative in order against the same node.
    pub fn either(self, queries: impl IntoIterator<Item = Query>) -> Self {
        self.then(Operation::Either(queries.into_iter().collect()))
    }

    /// Passes only if the subtree consists of numbers within `depth` levels.
    pub fn accept_numbers(self, depth: usize) -> Self {
        self.then(Operation::AcceptNumbers(depth))
    }

    /// Passes only if the subtree consists of booleans within `depth` levels.
    pub fn accept_boolean(self, depth: usize) -> Self {
        self.then(Operation::AcceptBoolean(depth))
    }

    pub fn contains_this(self) -> Self {
        self.then(Operation::ContainsThis)
    }

    /// Requires an identifier whose name matches `pattern`.
    pub fn name_matches(self, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(pattern)?;
        Ok(self.then(Operation::NameMatches(pattern)))
    }

    pub fn name_matches_regex(self, pattern: Regex) -> Self {
        self.then(Operation::NameMatches(pattern))
    }
}
