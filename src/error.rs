use thiserror::Error;

use crate::ast::{NodeKind, Operator, StatementKind};
use crate::verify::Content;

/// Reasons a node does not conform to a query.
///
/// A failed match is an ordinary answer, not a fault: callers decide whether
/// it means "rule does not apply" or "validation failed".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("expected {}, was {actual}", join_kinds(.expected))]
    TypeMismatch {
        expected: &'static [NodeKind],
        actual: NodeKind,
    },

    #[error("operator {0} is not accepted")]
    OperatorMismatch(Operator),

    #[error("{0} expression has no operator")]
    MissingOperator(NodeKind),

    #[error("{0} expression does not have the required structure")]
    StructureMismatch(NodeKind),

    #[error("{kind} node is not allowed where only {content} are accepted")]
    ContentMismatch { content: Content, kind: NodeKind },

    #[error("depth budget exhausted")]
    DepthExceeded,

    #[error("no matching node in subtree")]
    NoMatch,

    #[error("callee is not an identifier")]
    NoIdentifier,

    #[error("name {0:?} does not match")]
    NameMismatch(String),

    #[error("expected an expression, found none")]
    MissingNode,

    #[error("unsupported statement: {0}")]
    UnsupportedStatement(StatementKind),

    #[error("all branches failed: [{}]", join_errors(.0))]
    Aggregate(Vec<QueryError>),
}

fn join_kinds(kinds: &[NodeKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(" or ")
}

fn join_errors(errors: &[QueryError]) -> String {
    errors
        .iter()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
