//! Node kind discriminants.
//!
//! `NodeKind` is the closed enumeration every consumer dispatches on. The
//! numeric tags are a contract shared with the tree producer's serialization
//! table and must never be renumbered without updating all sides; consumers
//! depend only on the symbolic names. The CFG pseudo-kinds are reserved here
//! from the start (tags 200+) so that synthesized nodes dispatch through
//! exactly the same discriminant space as parsed ones.

use strum::{Display, EnumIter};

/// Discriminant identifying a node's concrete kind.
///
/// Fixed at construction, unique per kind. The set is closed: every consumer
/// can enumerate it exhaustively (via `strum::IntoEnumIterator`) for
/// coverage checking.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, EnumIter)]
#[repr(u8)]
pub enum NodeKind {
    Alias = 1,
    Arguments = 2,
    Assign = 4,
    Attribute = 5,
    AugAssign = 6,
    BinOp = 7,
    BoolOp = 8,
    Call = 9,
    ClassDef = 10,
    Compare = 11,
    Comprehension = 12,
    Dict = 14,
    ExprStmt = 19,
    For = 20,
    FunctionDef = 21,
    Global = 23,
    If = 24,
    IfExp = 25,
    Import = 26,
    Index = 28,
    Keyword = 29,
    Lambda = 30,
    List = 31,
    ListComp = 32,
    Module = 33,
    Num = 34,
    Name = 35,
    Pass = 37,
    Print = 39,
    Return = 42,
    Slice = 44,
    Str = 45,
    Subscript = 46,
    Tuple = 49,
    UnaryOp = 50,
    With = 51,
    While = 52,
    Continue = 70,
    Break = 73,

    // Pseudo-kinds, producible only by CFG construction.
    Branch = 200,
    Jump = 201,
}

impl NodeKind {
    /// The wire tag shared with the producer.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// True for kinds in the statement family (including pseudo-kinds).
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::Assign
                | NodeKind::AugAssign
                | NodeKind::Break
                | NodeKind::ClassDef
                | NodeKind::Continue
                | NodeKind::ExprStmt
                | NodeKind::For
                | NodeKind::FunctionDef
                | NodeKind::Global
                | NodeKind::If
                | NodeKind::Import
                | NodeKind::Pass
                | NodeKind::Print
                | NodeKind::Return
                | NodeKind::While
                | NodeKind::With
                | NodeKind::Branch
                | NodeKind::Jump
        )
    }

    /// True for kinds in the expression family.
    pub const fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::Attribute
                | NodeKind::BinOp
                | NodeKind::BoolOp
                | NodeKind::Call
                | NodeKind::Compare
                | NodeKind::Dict
                | NodeKind::IfExp
                | NodeKind::Index
                | NodeKind::Lambda
                | NodeKind::List
                | NodeKind::ListComp
                | NodeKind::Name
                | NodeKind::Num
                | NodeKind::Slice
                | NodeKind::Str
                | NodeKind::Subscript
                | NodeKind::Tuple
                | NodeKind::UnaryOp
        )
    }

    /// True for kinds never produced by the parser.
    #[inline]
    pub const fn is_pseudo(self) -> bool {
        matches!(self, NodeKind::Branch | NodeKind::Jump)
    }

    /// True for kinds that carry a source position.
    ///
    /// Argument lists, keyword-argument entries, comprehension clauses and
    /// the module root are never independently positioned.
    #[inline]
    pub const fn has_span(self) -> bool {
        !matches!(
            self,
            NodeKind::Arguments | NodeKind::Keyword | NodeKind::Comprehension | NodeKind::Module
        )
    }

    /// True for kinds that introduce a nested variable scope.
    #[inline]
    pub const fn introduces_scope(self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDef | NodeKind::ClassDef | NodeKind::Lambda
        )
    }
}
