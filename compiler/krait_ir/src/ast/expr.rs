//! Expression nodes.
//!
//! `Expr` is the expression family: a closed enum with one struct per
//! concrete kind. Every expression evaluates to a value. Children are owned
//! (`Box`/`Vec`); topology is fixed after construction.

use super::kind::NodeKind;
use super::operators::{BoolOperator, CmpOp, Operator, UnaryOperator};
use super::{Arguments, Comprehension, Keyword};
use crate::span::{Span, Spanned};

/// Secondary discriminant for expressions whose syntactic shape is reused
/// as a read, an assignment target, a parameter binding, or a deletion
/// target. Data on the node, not a node kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprContext {
    Load,
    Store,
    Param,
    Del,
}

/// Numeric literal payload: exactly one representation is live.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Attribute(Attribute),
    BinOp(BinOp),
    BoolOp(BoolOp),
    Call(Call),
    Compare(Compare),
    Dict(Dict),
    IfExp(IfExp),
    Index(Index),
    Lambda(Lambda),
    List(List),
    ListComp(ListComp),
    Name(Name),
    Num(Num),
    Slice(Slice),
    Str(Str),
    Subscript(Subscript),
    Tuple(Tuple),
    UnaryOp(UnaryOp),
}

impl Expr {
    /// The node's kind discriminant.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Expr::Attribute(_) => NodeKind::Attribute,
            Expr::BinOp(_) => NodeKind::BinOp,
            Expr::BoolOp(_) => NodeKind::BoolOp,
            Expr::Call(_) => NodeKind::Call,
            Expr::Compare(_) => NodeKind::Compare,
            Expr::Dict(_) => NodeKind::Dict,
            Expr::IfExp(_) => NodeKind::IfExp,
            Expr::Index(_) => NodeKind::Index,
            Expr::Lambda(_) => NodeKind::Lambda,
            Expr::List(_) => NodeKind::List,
            Expr::ListComp(_) => NodeKind::ListComp,
            Expr::Name(_) => NodeKind::Name,
            Expr::Num(_) => NodeKind::Num,
            Expr::Slice(_) => NodeKind::Slice,
            Expr::Str(_) => NodeKind::Str,
            Expr::Subscript(_) => NodeKind::Subscript,
            Expr::Tuple(_) => NodeKind::Tuple,
            Expr::UnaryOp(_) => NodeKind::UnaryOp,
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Attribute(n) => n.span,
            Expr::BinOp(n) => n.span,
            Expr::BoolOp(n) => n.span,
            Expr::Call(n) => n.span,
            Expr::Compare(n) => n.span,
            Expr::Dict(n) => n.span,
            Expr::IfExp(n) => n.span,
            Expr::Index(n) => n.span,
            Expr::Lambda(n) => n.span,
            Expr::List(n) => n.span,
            Expr::ListComp(n) => n.span,
            Expr::Name(n) => n.span,
            Expr::Num(n) => n.span,
            Expr::Slice(n) => n.span,
            Expr::Str(n) => n.span,
            Expr::Subscript(n) => n.span,
            Expr::Tuple(n) => n.span,
            Expr::UnaryOp(n) => n.span,
        }
    }
}

/// Attribute access: `value.attr`.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub value: Box<Expr>,
    pub attr: String,
    pub ctx: ExprContext,
    pub span: Span,
}

/// Binary operation: `left op right`.
#[derive(Clone, Debug, PartialEq)]
pub struct BinOp {
    pub op: Operator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Short-circuiting boolean operation over two or more operands.
#[derive(Clone, Debug, PartialEq)]
pub struct BoolOp {
    pub op: BoolOperator,
    pub values: Vec<Expr>,
    pub span: Span,
}

/// Call: `func(args, kw=value, *starargs, **kwargs)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
    pub keywords: Vec<Keyword>,
    pub starargs: Option<Box<Expr>>,
    pub kwargs: Option<Box<Expr>>,
    pub span: Span,
}

/// Chained comparison: `left op comparators[0] op comparators[1] ...`.
///
/// `ops` and `comparators` run in lockstep; the producer guarantees equal
/// length.
#[derive(Clone, Debug, PartialEq)]
pub struct Compare {
    pub left: Box<Expr>,
    pub ops: Vec<CmpOp>,
    pub comparators: Vec<Expr>,
    pub span: Span,
}

/// Dict display. `keys` and `values` run in lockstep.
#[derive(Clone, Debug, PartialEq)]
pub struct Dict {
    pub keys: Vec<Expr>,
    pub values: Vec<Expr>,
    pub span: Span,
}

/// Conditional expression: `body if test else orelse`.
#[derive(Clone, Debug, PartialEq)]
pub struct IfExp {
    pub test: Box<Expr>,
    pub body: Box<Expr>,
    pub orelse: Box<Expr>,
    pub span: Span,
}

/// Plain subscript index, wrapping the index expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Index {
    pub value: Box<Expr>,
    pub span: Span,
}

/// Anonymous function: `lambda args: body`. Introduces a nested scope.
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    pub args: Arguments,
    pub body: Box<Expr>,
    pub span: Span,
}

/// List display: `[elts]`.
#[derive(Clone, Debug, PartialEq)]
pub struct List {
    pub elts: Vec<Expr>,
    pub ctx: ExprContext,
    pub span: Span,
}

/// List comprehension: `[elt for ... in ... if ...]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListComp {
    pub elt: Box<Expr>,
    pub generators: Vec<Comprehension>,
    pub span: Span,
}

/// Name reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub id: String,
    pub ctx: ExprContext,
    pub span: Span,
}

/// Numeric literal.
#[derive(Clone, Debug, PartialEq)]
pub struct Num {
    pub value: Number,
    pub span: Span,
}

/// Slice: `lower:upper:step`, each part optional.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub lower: Option<Box<Expr>>,
    pub upper: Option<Box<Expr>>,
    pub step: Option<Box<Expr>>,
    pub span: Span,
}

/// String literal.
#[derive(Clone, Debug, PartialEq)]
pub struct Str {
    pub value: String,
    pub span: Span,
}

/// Subscript: `value[slice]`, where `slice` is an `Index` or `Slice` node.
#[derive(Clone, Debug, PartialEq)]
pub struct Subscript {
    pub value: Box<Expr>,
    pub slice: Box<Expr>,
    pub ctx: ExprContext,
    pub span: Span,
}

/// Tuple display: `(elts)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tuple {
    pub elts: Vec<Expr>,
    pub ctx: ExprContext,
    pub span: Span,
}

/// Unary operation: `op operand`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnaryOp {
    pub op: UnaryOperator,
    pub operand: Box<Expr>,
    pub span: Span,
}
