//! The Krait syntax tree.
//!
//! A closed set of node kinds split into two disjoint families — statements
//! (effect only) and expressions (evaluate to a value) — plus a handful of
//! auxiliary nodes that belong to neither. Every node carries an immutable
//! [`NodeKind`] discriminant; single-discriminant dispatch over it is the
//! only form of runtime type inspection consumers perform.
//!
//! # Module Structure
//!
//! - `kind`: the `NodeKind` discriminant table
//! - `expr`: expression family
//! - `stmt`: statement family (including CFG pseudo-kinds)
//! - `operators`: operator tags (data, not kinds)
//! - `node`: `NodeRef`, the polymorphic borrowed view
//!
//! The tree is built once by the parser (CFG construction may later insert
//! pseudo-statements), is immutable in topology afterwards, and has a single
//! owning root (the [`Module`]). No node validates its own structural
//! well-formedness; that is the producer's responsibility.

mod expr;
mod kind;
mod node;
mod operators;
mod stmt;

pub use expr::{
    Attribute, BinOp, BoolOp, Call, Compare, Dict, Expr, ExprContext, IfExp, Index, Lambda, List,
    ListComp, Name, Num, Number, Slice, Str, Subscript, Tuple, UnaryOp,
};
pub use kind::NodeKind;
pub use node::NodeRef;
pub use operators::{BoolOperator, CmpOp, Operator, UnaryOperator};
pub use stmt::{
    Assign, AugAssign, Branch, Break, ClassDef, Continue, ExprStmt, For, FunctionDef, Global, If,
    Import, Jump, Pass, Print, Return, Stmt, While, With,
};

use crate::span::Span;

/// The owning root of a compilation unit. Not independently positioned.
#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    pub body: Vec<Stmt>,
}

/// Formal parameter list of a `FunctionDef` or `Lambda`.
/// Not independently positioned.
///
/// `defaults` is right-aligned against the tail of `args`: with `n` params
/// and `d` defaults, params `0..n-d` have no default and param `n-d+i`
/// pairs with `defaults[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments {
    pub args: Vec<Expr>,
    pub defaults: Vec<Expr>,
    /// Variadic-positional parameter name (`*rest`).
    pub vararg: Option<String>,
    /// Variadic-keyword parameter slot (`**kw`).
    pub kwarg: Option<Box<Expr>>,
}

impl Arguments {
    /// The default value paired with positional parameter `i`, if any.
    pub fn default_for(&self, i: usize) -> Option<&Expr> {
        let first_with_default = self.args.len() - self.defaults.len();
        if i >= first_with_default && i < self.args.len() {
            Some(&self.defaults[i - first_with_default])
        } else {
            None
        }
    }
}

/// A `kw=value` entry at a call site. Not independently positioned.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyword {
    pub arg: String,
    pub value: Box<Expr>,
}

/// One `for target in iter if ...` clause of a comprehension.
/// Not independently positioned.
#[derive(Clone, Debug, PartialEq)]
pub struct Comprehension {
    pub target: Box<Expr>,
    pub iter: Box<Expr>,
    pub ifs: Vec<Expr>,
}

/// One `name as asname` entry of an `import`.
#[derive(Clone, Debug, PartialEq)]
pub struct Alias {
    pub name: String,
    pub asname: Option<String>,
    pub span: Span,
}
