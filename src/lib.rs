pub mod ast;
pub mod convert;
pub mod engine;
pub mod error;
pub mod operations;
pub mod output;
pub mod verify;
pub mod walker;

pub use ast::{Expr, NodeKind, Operator, Statement, StatementKind};
pub use convert::{ConvertError, expr_from_json, expr_to_json, statement_from_json, statement_to_json};
pub use engine::{Capture, Outcome, Query};
pub use error::QueryError;
pub use operations::Operation;
pub use output::{statement_to_json_compact, to_json, to_json_pretty};
pub use verify::{Content, verify_expression};
pub use walker::{CallFinder, ThisCounter, Visitor, inspect};
