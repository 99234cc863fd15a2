use std::fmt;

/// Field-less discriminant of [`Expr`](crate::ast::Expr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Binary,
    Unary,
    Assign,
    VariableDecl,
    Identifier,
    This,
    Number,
    String,
    Boolean,
    Call,
    New,
    Function,
    Dot,
    Bracket,
    Conditional,
    Sequence,
    Array,
    Object,
}

impl NodeKind {
    pub const ALL: [NodeKind; 18] = [
        NodeKind::Binary,
        NodeKind::Unary,
        NodeKind::Assign,
        NodeKind::VariableDecl,
        NodeKind::Identifier,
        NodeKind::This,
        NodeKind::Number,
        NodeKind::String,
        NodeKind::Boolean,
        NodeKind::Call,
        NodeKind::New,
        NodeKind::Function,
        NodeKind::Dot,
        NodeKind::Bracket,
        NodeKind::Conditional,
        NodeKind::Sequence,
        NodeKind::Array,
        NodeKind::Object,
    ];

    /// Stable lowercase name, also used as the `"type"` tag in JSON trees.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Binary => "binary",
            NodeKind::Unary => "unary",
            NodeKind::Assign => "assign",
            NodeKind::VariableDecl => "variable",
            NodeKind::Identifier => "identifier",
            NodeKind::This => "this",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Boolean => "boolean",
            NodeKind::Call => "call",
            NodeKind::New => "new",
            NodeKind::Function => "function",
            NodeKind::Dot => "dot",
            NodeKind::Bracket => "bracket",
            NodeKind::Conditional => "conditional",
            NodeKind::Sequence => "sequence",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }

    pub fn from_name(name: &str) -> Option<NodeKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-less discriminant of [`Statement`](crate::ast::Statement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Expression,
    Return,
    Variable,
    Block,
    If,
    While,
    Throw,
    Empty,
}

impl StatementKind {
    pub const ALL: [StatementKind; 8] = [
        StatementKind::Expression,
        StatementKind::Return,
        StatementKind::Variable,
        StatementKind::Block,
        StatementKind::If,
        StatementKind::While,
        StatementKind::Throw,
        StatementKind::Empty,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StatementKind::Expression => "expression_statement",
            StatementKind::Return => "return_statement",
            StatementKind::Variable => "variable_statement",
            StatementKind::Block => "block_statement",
            StatementKind::If => "if_statement",
            StatementKind::While => "while_statement",
            StatementKind::Throw => "throw_statement",
            StatementKind::Empty => "empty_statement",
        }
    }

    pub fn from_name(name: &str) -> Option<StatementKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
