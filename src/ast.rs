//! # Expression Tree Model
//!
//! This module defines the syntax tree that queries are matched against. Trees
//! come from an external script-language parser (or from the JSON interchange
//! in [`crate::convert`]); this crate only reads them.
//!
//! ## Architecture Overview
//!
//! - **[expressions]** - Expression nodes (operations, references, literals, calls, access)
//! - **[statements]** - Statement nodes, the entry points of [`crate::Query::run_statement`]
//! - **[operators]** - Operators carried by binary, unary and assignment nodes
//! - **[kinds]** - Field-less discriminants used in error reports
//!
//! ## Quick Start
//!
//! The tree for `true || 5`:
//!
//! ```
//! use astquery::ast::{Expr, NodeKind, Operator};
//!
//! let expr = Expr::Binary {
//!     op: Operator::LogicalOr,
//!     left: Box::new(Expr::Boolean(true)),
//!     right: Box::new(Expr::Number(5.0)),
//! };
//!
//! assert_eq!(expr.kind(), NodeKind::Binary);
//! assert_eq!(expr.operator(), Some(Operator::LogicalOr));
//! ```
//!
//! ## Shape Conventions
//!
//! - `Dot::member`, `Function::name` and `Function::params` hold
//!   [`Expr::Identifier`] nodes.
//! - `Statement::Variable` holds [`Expr::VariableDecl`] declarators.
//! - Trees are acyclic; nothing in the crate checks for cycles.
pub mod expressions;
pub mod kinds;
pub mod operators;
pub mod statements;

pub use expressions::Expr;
pub use kinds::{NodeKind, StatementKind};
pub use operators::Operator;
pub use statements::Statement;
