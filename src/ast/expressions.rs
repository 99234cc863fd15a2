use crate::ast::{NodeKind, Operator, Statement};

/// Expression node produced by an external script parser.
///
/// Trees are immutable once built. Queries borrow into them and never
/// clone or rewrite nodes, so a node returned from a query can be compared
/// by address against the tree it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Operations
    /// Binary operation (arithmetic, comparison, logical)
    ///
    /// # Example
    /// ```text
    /// a || 5
    /// ```
    Binary {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Prefix or postfix unary operation
    ///
    /// # Examples
    /// ```text
    /// !done
    /// i++
    /// ```
    Unary {
        op: Operator,
        operand: Box<Expr>,
        postfix: bool,
    },

    /// Assignment, plain or compound
    ///
    /// # Example
    /// ```text
    /// total += 1
    /// ```
    Assign {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Single declarator of a `var` statement
    ///
    /// # Example
    /// ```text
    /// x = 1        // in `var x = 1, y;`
    /// ```
    VariableDecl {
        name: String,
        initializer: Option<Box<Expr>>,
    },

    // References
    /// Bare identifier
    Identifier(String),

    /// The `this` keyword
    This,

    // Literals
    /// Numeric literal
    Number(f64),

    /// String literal
    String(String),

    /// Boolean literal
    Boolean(bool),

    // Calls
    /// Function call
    ///
    /// # Examples
    /// ```text
    /// f(1, 2)
    /// obj.method()
    /// ```
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },

    /// Constructor call
    ///
    /// # Example
    /// ```text
    /// new Date(0)
    /// ```
    New {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },

    /// Function literal. `name` and `params` hold identifiers.
    ///
    /// # Example
    /// ```text
    /// function add(a, b) { return a + b; }
    /// ```
    Function {
        name: Option<Box<Expr>>,
        params: Vec<Expr>,
        body: Vec<Statement>,
    },

    // Access
    /// Member access by name. `member` holds an identifier.
    ///
    /// # Example
    /// ```text
    /// document.cookie
    /// ```
    Dot {
        left: Box<Expr>,
        member: Box<Expr>,
    },

    /// Computed member access
    ///
    /// # Example
    /// ```text
    /// window["eval"]
    /// ```
    Bracket {
        left: Box<Expr>,
        member: Box<Expr>,
    },

    /// Ternary conditional
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },

    /// Comma-separated sequence
    Sequence(Vec<Expr>),

    // Object and Array Literals
    /// Array literal
    Array(Vec<Expr>),

    /// Object literal as ordered key/value pairs
    ///
    /// # Example
    /// ```text
    /// {"name": n, total: 3}
    /// ```
    Object(Vec<(String, Expr)>),
}

impl Expr {
    /// Discriminant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Binary { .. } => NodeKind::Binary,
            Expr::Unary { .. } => NodeKind::Unary,
            Expr::Assign { .. } => NodeKind::Assign,
            Expr::VariableDecl { .. } => NodeKind::VariableDecl,
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::This => NodeKind::This,
            Expr::Number(_) => NodeKind::Number,
            Expr::String(_) => NodeKind::String,
            Expr::Boolean(_) => NodeKind::Boolean,
            Expr::Call { .. } => NodeKind::Call,
            Expr::New { .. } => NodeKind::New,
            Expr::Function { .. } => NodeKind::Function,
            Expr::Dot { .. } => NodeKind::Dot,
            Expr::Bracket { .. } => NodeKind::Bracket,
            Expr::Conditional { .. } => NodeKind::Conditional,
            Expr::Sequence(_) => NodeKind::Sequence,
            Expr::Array(_) => NodeKind::Array,
            Expr::Object(_) => NodeKind::Object,
        }
    }

    /// Operator of an assignment, binary or unary node.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expr::Assign { op, .. } | Expr::Binary { op, .. } | Expr::Unary { op, .. } => {
                Some(*op)
            }
            _ => None,
        }
    }
}
