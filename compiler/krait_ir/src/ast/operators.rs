//! Operator tags.
//!
//! Operators are plain data on their owning node, not node kinds of their
//! own; keeping them out of [`NodeKind`](super::NodeKind) keeps the
//! discriminant space closed and dispatch total.

/// Binary arithmetic and bitwise operators (`BinOp`, `AugAssign`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
    FloorDiv,
}

impl Operator {
    /// Source-level symbol, used by the print visitor.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mult => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "**",
            Operator::LShift => "<<",
            Operator::RShift => ">>",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::BitAnd => "&",
            Operator::FloorDiv => "//",
        }
    }
}

/// Unary operators (`UnaryOp`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOperator {
    Invert,
    Not,
    UAdd,
    USub,
}

impl UnaryOperator {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOperator::Invert => "~",
            UnaryOperator::Not => "not",
            UnaryOperator::UAdd => "+",
            UnaryOperator::USub => "-",
        }
    }
}

/// Short-circuiting boolean operators (`BoolOp`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BoolOperator {
    And,
    Or,
}

impl BoolOperator {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BoolOperator::And => "and",
            BoolOperator::Or => "or",
        }
    }
}

/// Comparison operators (`Compare` carries one per comparator).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

impl CmpOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::NotEq => "!=",
            CmpOp::Lt => "<",
            CmpOp::LtE => "<=",
            CmpOp::Gt => ">",
            CmpOp::GtE => ">=",
            CmpOp::Is => "is",
            CmpOp::IsNot => "is not",
            CmpOp::In => "in",
            CmpOp::NotIn => "not in",
        }
    }
}
