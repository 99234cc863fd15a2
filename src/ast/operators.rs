use std::fmt;

/// Operators carried by binary, unary and assignment nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Arithmetic
    /// Addition or string concatenation (`+`)
    Plus,
    /// Subtraction or negation (`-`)
    Minus,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Slash,
    /// Remainder (`%`)
    Remainder,

    // Bitwise
    /// Bitwise AND (`&`)
    And,
    /// Bitwise OR (`|`)
    Or,
    /// Bitwise XOR (`^`)
    ExclusiveOr,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Signed right shift (`>>`)
    ShiftRight,
    /// Unsigned right shift (`>>>`)
    UnsignedShiftRight,

    // Logical
    /// Logical AND (`&&`)
    LogicalAnd,
    /// Logical OR (`||`)
    LogicalOr,

    // Comparison
    /// Loose equality (`==`)
    Equal,
    /// Loose inequality (`!=`)
    NotEqual,
    /// Strict equality (`===`)
    StrictEqual,
    /// Strict inequality (`!==`)
    StrictNotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessOrEqual,
    /// Greater than or equal (`>=`)
    GreaterOrEqual,
    /// `instanceof`
    InstanceOf,
    /// `in`
    In,

    // Unary
    /// Logical negation (`!`)
    Not,
    /// Bitwise negation (`~`)
    BitwiseNot,
    /// Increment (`++`)
    Increment,
    /// Decrement (`--`)
    Decrement,
    /// `typeof`
    TypeOf,
    /// `delete`
    Delete,
    /// `void`
    Void,

    // Assignment
    /// Plain assignment (`=`)
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubtractAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `%=`
    RemainderAssign,
}

impl Operator {
    const ALL: [Operator; 36] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Slash,
        Operator::Remainder,
        Operator::And,
        Operator::Or,
        Operator::ExclusiveOr,
        Operator::ShiftLeft,
        Operator::ShiftRight,
        Operator::UnsignedShiftRight,
        Operator::LogicalAnd,
        Operator::LogicalOr,
        Operator::Equal,
        Operator::NotEqual,
        Operator::StrictEqual,
        Operator::StrictNotEqual,
        Operator::Less,
        Operator::Greater,
        Operator::LessOrEqual,
        Operator::GreaterOrEqual,
        Operator::InstanceOf,
        Operator::In,
        Operator::Not,
        Operator::BitwiseNot,
        Operator::Increment,
        Operator::Decrement,
        Operator::TypeOf,
        Operator::Delete,
        Operator::Void,
        Operator::Assign,
        Operator::AddAssign,
        Operator::SubtractAssign,
        Operator::MultiplyAssign,
        Operator::DivideAssign,
        Operator::RemainderAssign,
    ];

    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Slash => "/",
            Operator::Remainder => "%",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::ExclusiveOr => "^",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::UnsignedShiftRight => ">>>",
            Operator::LogicalAnd => "&&",
            Operator::LogicalOr => "||",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::StrictEqual => "===",
            Operator::StrictNotEqual => "!==",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
            Operator::InstanceOf => "instanceof",
            Operator::In => "in",
            Operator::Not => "!",
            Operator::BitwiseNot => "~",
            Operator::Increment => "++",
            Operator::Decrement => "--",
            Operator::TypeOf => "typeof",
            Operator::Delete => "delete",
            Operator::Void => "void",
            Operator::Assign => "=",
            Operator::AddAssign => "+=",
            Operator::SubtractAssign => "-=",
            Operator::MultiplyAssign => "*=",
            Operator::DivideAssign => "/=",
            Operator::RemainderAssign => "%=",
        }
    }

    /// Looks an operator up by its source spelling.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
