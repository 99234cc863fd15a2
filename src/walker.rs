//! Depth-first traversal of expression trees with early termination.
//!
//! [`inspect`] walks a subtree in pre-order and reports every node to a
//! [`Visitor`]. The visitor decides when the walk is over through
//! [`Visitor::done`], which is polled after each node is entered and after
//! each child subtree is finished. This is the only way to cut a walk short.
//!
//! Child order per kind:
//!
//! | kind        | children                          |
//! |-------------|-----------------------------------|
//! | array       | each element                      |
//! | assign      | left, right                       |
//! | binary      | left, right                       |
//! | bracket     | left, member                      |
//! | call / new  | callee, each argument             |
//! | conditional | test, consequent, alternate       |
//! | dot         | left, member                      |
//! | function    | name, each parameter (never body) |
//! | object      | each value                        |
//! | sequence    | each item                         |
//! | unary       | operand                           |
//! | variable    | initializer                       |
//!
//! The walk keeps its own stack, so deep trees do not grow the call stack.

use log::trace;

use crate::ast::Expr;

/// Receives nodes from [`inspect`].
pub trait Visitor<'a> {
    /// Called when a node is reached, before any of its children.
    fn enter(&mut self, node: &'a Expr);

    /// Called once every child of `node` has been walked.
    fn leave(&mut self, _node: &'a Expr) {}

    /// Stops the walk when it returns true.
    fn done(&self) -> bool {
        false
    }
}

enum Step<'a> {
    Enter(&'a Expr),
    Leave(&'a Expr),
}

/// Walks `root` and its descendants, feeding them to `visitor`.
pub fn inspect<'a, V: Visitor<'a> + ?Sized>(root: &'a Expr, visitor: &mut V) {
    let mut stack = vec![Step::Enter(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node) => {
                visitor.enter(node);
                if visitor.done() {
                    trace!("walk stopped on entering {}", node.kind());
                    return;
                }
                stack.push(Step::Leave(node));
                let first_child = stack.len();
                push_children(node, &mut stack);
                stack[first_child..].reverse();
            }
            Step::Leave(node) => {
                visitor.leave(node);
                if visitor.done() {
                    trace!("walk stopped on leaving {}", node.kind());
                    return;
                }
            }
        }
    }
}

/// Pushes children in walk order; the caller reverses them for the stack.
fn push_children<'a>(node: &'a Expr, stack: &mut Vec<Step<'a>>) {
    match node {
        Expr::Array(items) | Expr::Sequence(items) => {
            stack.extend(items.iter().map(Step::Enter));
        }
        Expr::Assign { left, right, .. } | Expr::Binary { left, right, .. } => {
            stack.push(Step::Enter(left));
            stack.push(Step::Enter(right));
        }
        Expr::Bracket { left, member } | Expr::Dot { left, member } => {
            stack.push(Step::Enter(left));
            stack.push(Step::Enter(member));
        }
        Expr::Call { callee, args } | Expr::New { callee, args } => {
            stack.push(Step::Enter(callee));
            stack.extend(args.iter().map(Step::Enter));
        }
        Expr::Conditional {
            test,
            consequent,
            alternate,
        } => {
            stack.push(Step::Enter(test));
            stack.push(Step::Enter(consequent));
            stack.push(Step::Enter(alternate));
        }
        Expr::Function { name, params, .. } => {
            if let Some(name) = name {
                stack.push(Step::Enter(name));
            }
            stack.extend(params.iter().map(Step::Enter));
        }
        Expr::Object(pairs) => {
            stack.extend(pairs.iter().map(|(_, value)| Step::Enter(value)));
        }
        Expr::Unary { operand, .. } => stack.push(Step::Enter(operand)),
        Expr::VariableDecl { initializer, .. } => {
            if let Some(initializer) = initializer {
                stack.push(Step::Enter(initializer));
            }
        }
        Expr::Identifier(_)
        | Expr::This
        | Expr::Number(_)
        | Expr::String(_)
        | Expr::Boolean(_) => {}
    }
}

/// Finds call and `new` expressions.
///
/// A call counts as found once the walk leaves it, so calls nested in its
/// callee or arguments are found before it. With `first_only` the walk stops
/// at the first one; otherwise every find overwrites the previous one and the
/// walk covers the whole subtree.
#[derive(Debug, Default)]
pub struct CallFinder<'a> {
    pub first_only: bool,
    pub found: Option<&'a Expr>,
}

impl<'a> CallFinder<'a> {
    pub fn new(first_only: bool) -> Self {
        CallFinder {
            first_only,
            found: None,
        }
    }
}

impl<'a> Visitor<'a> for CallFinder<'a> {
    fn enter(&mut self, _node: &'a Expr) {}

    fn leave(&mut self, node: &'a Expr) {
        if matches!(node, Expr::Call { .. } | Expr::New { .. }) {
            self.found = Some(node);
        }
    }

    fn done(&self) -> bool {
        self.first_only && self.found.is_some()
    }
}

/// Counts `this` expressions over a full walk.
#[derive(Debug, Default)]
pub struct ThisCounter {
    pub found: usize,
}

impl<'a> Visitor<'a> for ThisCounter {
    fn enter(&mut self, node: &'a Expr) {
        if matches!(node, Expr::This) {
            self.found += 1;
        }
    }
}
