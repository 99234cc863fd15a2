//! Printable JSON renderings of trees, for diagnostics.
//!
//! Useful for reporting which node a query captured:
//!
//! ```
//! use astquery::{Query, ast::Expr, output::to_json};
//!
//! let call = Expr::Call {
//!     callee: Box::new(Expr::Identifier("eval".to_string())),
//!     args: vec![],
//! };
//!
//! let outcome = Query::new().must_be_call().call_must_have_identifier().run(&call);
//! let captured = outcome.collected.map(to_json);
//! // Output: {"arguments":[],"callee":{"name":"eval","type":"identifier"},"type":"call"}
//! assert!(captured.is_some());
//! ```
//!
//! Object keys come out in sorted order, so output is deterministic.

use crate::{
    ast::{Expr, Statement},
    convert::{expr_to_json, statement_to_json},
};

/// Renders an expression as compact JSON.
pub fn to_json(expr: &Expr) -> String {
    expr_to_json(expr).to_string()
}

/// Renders an expression as JSON with 2-space indentation.
pub fn to_json_pretty(expr: &Expr) -> String {
    format!("{:#}", expr_to_json(expr))
}

/// Renders a statement as compact JSON.
pub fn statement_to_json_compact(statement: &Statement) -> String {
    statement_to_json(statement).to_string()
}
