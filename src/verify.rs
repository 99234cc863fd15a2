use std::fmt;

use crate::{ast::Expr, error::QueryError};

/// Literal content a verified subtree is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    /// Rejects string and boolean literals.
    Numbers,
    /// Rejects string and number literals.
    Booleans,
}

impl Content {
    /// Per-node predicate. Only literals of the wrong type are rejected here;
    /// unsupported shapes are rejected by [`verify_expression`].
    pub fn admits(self, node: &Expr) -> bool {
        match self {
            Content::Numbers => !matches!(node, Expr::String(_) | Expr::Boolean(_)),
            Content::Booleans => !matches!(node, Expr::String(_) | Expr::Number(_)),
        }
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Numbers => f.write_str("numbers"),
            Content::Booleans => f.write_str("booleans"),
        }
    }
}

/// Checks that every node reachable from `node` is admitted by `content`,
/// descending at most `depth` levels.
///
/// Each level consumes one unit of budget before the node is examined, so a
/// literal needs a budget of 1 and `1 + (2 + 2)` needs 3. Both operands of a
/// binary node get the same remaining budget, and the left operand is checked
/// first.
///
/// Supported shapes are binary, unary and variable nodes plus number, string
/// and boolean literals; anything else fails with
/// [`QueryError::StructureMismatch`].
///
/// The check keeps its own stack, so a large budget on a deep tree does not
/// grow the call stack.
pub fn verify_expression(node: &Expr, depth: usize, content: Content) -> Result<(), QueryError> {
    let mut stack = vec![(node, depth)];

    while let Some((node, depth)) = stack.pop() {
        if depth == 0 {
            return Err(QueryError::DepthExceeded);
        }
        let depth = depth - 1;

        if !content.admits(node) {
            return Err(QueryError::ContentMismatch {
                content,
                kind: node.kind(),
            });
        }

        match node {
            Expr::Binary { left, right, .. } => {
                stack.push((right.as_ref(), depth));
                stack.push((left.as_ref(), depth));
            }
            Expr::Unary { operand, .. } => stack.push((operand.as_ref(), depth)),
            Expr::VariableDecl { initializer, .. } => match initializer {
                Some(initializer) => stack.push((initializer.as_ref(), depth)),
                None => return Err(QueryError::StructureMismatch(node.kind())),
            },
            Expr::Number(_) | Expr::String(_) | Expr::Boolean(_) => {}
            Expr::Assign { .. }
            | Expr::Identifier(_)
            | Expr::This
            | Expr::Call { .. }
            | Expr::New { .. }
            | Expr::Function { .. }
            | Expr::Dot { .. }
            | Expr::Bracket { .. }
            | Expr::Conditional { .. }
            | Expr::Sequence(_)
            | Expr::Array(_)
            | Expr::Object(_) => return Err(QueryError::StructureMismatch(node.kind())),
        }
    }

    Ok(())
}
