//! Core syntax tree for the Krait front end.
//!
//! Defines the closed node-kind hierarchy shared by every compiler phase:
//! the statement and expression families, the auxiliary nodes, and the two
//! CFG pseudo-kinds. On top of the tree it provides the dispatch roles
//! ([`visitor`]), pre-order linearization ([`flatten`]) and a debug
//! renderer ([`print`]).
//!
//! Trees are built once by the parser; CFG construction may insert
//! pseudo-statements afterwards. No phase mutates topology beyond that, so
//! nodes are freely shareable by reference.

pub mod ast;
pub mod cfg;
pub mod flatten;
pub mod print;
pub mod span;
pub mod visitor;

#[cfg(test)]
pub(crate) mod fixtures;

pub use ast::{Expr, Module, NodeKind, NodeRef, Stmt};
pub use cfg::BlockId;
pub use flatten::{find_kind, flatten};
pub use print::{dump, PrintVisitor};
pub use span::{Span, Spanned};
pub use visitor::{
    dispatch_expr, dispatch_stmt, visit_node, AstVisitor, ExprVisitor, NoopAstVisitor, StmtVisitor,
};
