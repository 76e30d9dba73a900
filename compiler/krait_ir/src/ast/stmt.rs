//! Statement nodes.
//!
//! `Stmt` is the statement family: nodes that execute for effect only. The
//! two CFG pseudo-kinds ([`Branch`], [`Jump`]) live here as ordinary
//! variants; they are synthesized by CFG construction, never parsed, and
//! dispatch through exactly the same arms as parsed statements.

use super::kind::NodeKind;
use super::operators::Operator;
use super::{Alias, Arguments};
use crate::ast::Expr;
use crate::cfg::BlockId;
use crate::span::{Span, Spanned};

/// A statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Assign(Assign),
    AugAssign(AugAssign),
    Break(Break),
    ClassDef(ClassDef),
    Continue(Continue),
    ExprStmt(ExprStmt),
    For(For),
    FunctionDef(FunctionDef),
    Global(Global),
    If(If),
    Import(Import),
    Pass(Pass),
    Print(Print),
    Return(Return),
    While(While),
    With(With),
    Branch(Branch),
    Jump(Jump),
}

impl Stmt {
    /// The node's kind discriminant.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Stmt::Assign(_) => NodeKind::Assign,
            Stmt::AugAssign(_) => NodeKind::AugAssign,
            Stmt::Break(_) => NodeKind::Break,
            Stmt::ClassDef(_) => NodeKind::ClassDef,
            Stmt::Continue(_) => NodeKind::Continue,
            Stmt::ExprStmt(_) => NodeKind::ExprStmt,
            Stmt::For(_) => NodeKind::For,
            Stmt::FunctionDef(_) => NodeKind::FunctionDef,
            Stmt::Global(_) => NodeKind::Global,
            Stmt::If(_) => NodeKind::If,
            Stmt::Import(_) => NodeKind::Import,
            Stmt::Pass(_) => NodeKind::Pass,
            Stmt::Print(_) => NodeKind::Print,
            Stmt::Return(_) => NodeKind::Return,
            Stmt::While(_) => NodeKind::While,
            Stmt::With(_) => NodeKind::With,
            Stmt::Branch(_) => NodeKind::Branch,
            Stmt::Jump(_) => NodeKind::Jump,
        }
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Assign(n) => n.span,
            Stmt::AugAssign(n) => n.span,
            Stmt::Break(n) => n.span,
            Stmt::ClassDef(n) => n.span,
            Stmt::Continue(n) => n.span,
            Stmt::ExprStmt(n) => n.span,
            Stmt::For(n) => n.span,
            Stmt::FunctionDef(n) => n.span,
            Stmt::Global(n) => n.span,
            Stmt::If(n) => n.span,
            Stmt::Import(n) => n.span,
            Stmt::Pass(n) => n.span,
            Stmt::Print(n) => n.span,
            Stmt::Return(n) => n.span,
            Stmt::While(n) => n.span,
            Stmt::With(n) => n.span,
            Stmt::Branch(n) => n.span,
            Stmt::Jump(n) => n.span,
        }
    }
}

/// Assignment: `targets[0] = targets[1] = ... = value`.
///
/// Targets carry `Store` context.
#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    pub targets: Vec<Expr>,
    pub value: Expr,
    pub span: Span,
}

/// Augmented assignment: `target op= value`.
#[derive(Clone, Debug, PartialEq)]
pub struct AugAssign {
    pub target: Expr,
    pub op: Operator,
    pub value: Expr,
    pub span: Span,
}

/// `break`.
#[derive(Clone, Debug, PartialEq)]
pub struct Break {
    pub span: Span,
}

/// Class definition. Introduces a nested scope.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDef {
    pub name: String,
    pub bases: Vec<Expr>,
    pub decorator_list: Vec<Expr>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `continue`.
#[derive(Clone, Debug, PartialEq)]
pub struct Continue {
    pub span: Span,
}

/// Expression evaluated for its side effects, result discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprStmt {
    pub value: Expr,
    pub span: Span,
}

/// `for target in iter: body else: orelse`.
#[derive(Clone, Debug, PartialEq)]
pub struct For {
    pub target: Expr,
    pub iter: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
    pub span: Span,
}

/// Function definition. Introduces a nested scope.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub args: Arguments,
    pub decorator_list: Vec<Expr>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `global names` directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Global {
    pub names: Vec<String>,
    pub span: Span,
}

/// `if test: body else: orelse`.
#[derive(Clone, Debug, PartialEq)]
pub struct If {
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
    pub span: Span,
}

/// `import` of one or more aliased module names.
#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    pub names: Vec<Alias>,
    pub span: Span,
}

/// `pass`.
#[derive(Clone, Debug, PartialEq)]
pub struct Pass {
    pub span: Span,
}

/// `print >>dest, values` — `nl` is false when the statement ends with a
/// trailing comma.
#[derive(Clone, Debug, PartialEq)]
pub struct Print {
    pub dest: Option<Expr>,
    pub values: Vec<Expr>,
    pub nl: bool,
    pub span: Span,
}

/// `return value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Return {
    pub value: Option<Expr>,
    pub span: Span,
}

/// `while test: body else: orelse`.
#[derive(Clone, Debug, PartialEq)]
pub struct While {
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
    pub span: Span,
}

/// `with context_expr as optional_vars: body`.
#[derive(Clone, Debug, PartialEq)]
pub struct With {
    pub context_expr: Expr,
    pub optional_vars: Option<Expr>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// Conditional transfer of control, synthesized by CFG construction at the
/// point where a parsed conditional or loop would branch.
///
/// The successor references are non-owning lookups into a block table owned
/// by the CFG phase; they are not children and structural traversal never
/// follows them.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub test: Expr,
    pub if_true: BlockId,
    pub if_false: BlockId,
    pub span: Span,
}

impl Branch {
    pub fn new(test: Expr, if_true: BlockId, if_false: BlockId) -> Self {
        Branch {
            test,
            if_true,
            if_false,
            span: Span::SYNTH,
        }
    }
}

/// Unconditional transfer of control, synthesized by CFG construction where
/// a parsed `break`/`continue` or fallthrough would leave the block.
#[derive(Clone, Debug, PartialEq)]
pub struct Jump {
    pub target: BlockId,
    pub span: Span,
}

impl Jump {
    pub fn new(target: BlockId) -> Self {
        Jump {
            target,
            span: Span::SYNTH,
        }
    }
}
