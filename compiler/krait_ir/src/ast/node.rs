//! Polymorphic node view.
//!
//! `NodeRef` lets consumers hold any node — statement, expression or
//! auxiliary — behind one type, read its kind and position without knowing
//! the concrete shape, and enumerate its children. `children()` is the
//! single authority for structural child order (source order, left to
//! right); both the generic dispatch driver and [`flatten`](crate::flatten)
//! traverse through it, so the two can never disagree on pre-order.

use super::{Alias, Arguments, Comprehension, Expr, Keyword, Module, NodeKind, Stmt};
use crate::span::{Span, Spanned};

/// A borrowed reference to any node in the tree.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodeRef<'a> {
    Module(&'a Module),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Arguments(&'a Arguments),
    Keyword(&'a Keyword),
    Comprehension(&'a Comprehension),
    Alias(&'a Alias),
}

impl<'a> NodeRef<'a> {
    /// The node's kind discriminant.
    pub fn kind(self) -> NodeKind {
        match self {
            NodeRef::Module(_) => NodeKind::Module,
            NodeRef::Stmt(s) => s.kind(),
            NodeRef::Expr(e) => e.kind(),
            NodeRef::Arguments(_) => NodeKind::Arguments,
            NodeRef::Keyword(_) => NodeKind::Keyword,
            NodeRef::Comprehension(_) => NodeKind::Comprehension,
            NodeRef::Alias(_) => NodeKind::Alias,
        }
    }

    /// Source position, for the kinds that carry one.
    pub fn span(self) -> Option<Span> {
        match self {
            NodeRef::Stmt(s) => Some(s.span()),
            NodeRef::Expr(e) => Some(e.span()),
            NodeRef::Alias(a) => Some(a.span),
            NodeRef::Module(_)
            | NodeRef::Arguments(_)
            | NodeRef::Keyword(_)
            | NodeRef::Comprehension(_) => None,
        }
    }

    /// This node's structural children, in source order.
    ///
    /// CFG successor references (`Branch`/`Jump` block ids) are non-owning
    /// lookups, not children, and are never produced here.
    pub fn children(self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        self.push_children(&mut out);
        out
    }

    fn push_children(self, out: &mut Vec<NodeRef<'a>>) {
        match self {
            NodeRef::Module(m) => push_stmts(out, &m.body),
            NodeRef::Alias(_) => {}
            NodeRef::Arguments(a) => {
                push_exprs(out, &a.args);
                push_exprs(out, &a.defaults);
                if let Some(kwarg) = &a.kwarg {
                    out.push(NodeRef::Expr(kwarg));
                }
            }
            NodeRef::Keyword(k) => out.push(NodeRef::Expr(&k.value)),
            NodeRef::Comprehension(c) => {
                out.push(NodeRef::Expr(&c.target));
                out.push(NodeRef::Expr(&c.iter));
                push_exprs(out, &c.ifs);
            }
            NodeRef::Stmt(stmt) => push_stmt_children(out, stmt),
            NodeRef::Expr(expr) => push_expr_children(out, expr),
        }
    }
}

fn push_stmts<'a>(out: &mut Vec<NodeRef<'a>>, stmts: &'a [Stmt]) {
    out.extend(stmts.iter().map(NodeRef::Stmt));
}

fn push_exprs<'a>(out: &mut Vec<NodeRef<'a>>, exprs: &'a [Expr]) {
    out.extend(exprs.iter().map(NodeRef::Expr));
}

fn push_opt<'a>(out: &mut Vec<NodeRef<'a>>, expr: &'a Option<Expr>) {
    if let Some(e) = expr {
        out.push(NodeRef::Expr(e));
    }
}

fn push_stmt_children<'a>(out: &mut Vec<NodeRef<'a>>, stmt: &'a Stmt) {
    match stmt {
        Stmt::Assign(n) => {
            push_exprs(out, &n.targets);
            out.push(NodeRef::Expr(&n.value));
        }
        Stmt::AugAssign(n) => {
            out.push(NodeRef::Expr(&n.target));
            out.push(NodeRef::Expr(&n.value));
        }
        Stmt::Break(_) | Stmt::Continue(_) | Stmt::Pass(_) | Stmt::Global(_) | Stmt::Jump(_) => {}
        Stmt::ClassDef(n) => {
            push_exprs(out, &n.decorator_list);
            push_exprs(out, &n.bases);
            push_stmts(out, &n.body);
        }
        Stmt::ExprStmt(n) => out.push(NodeRef::Expr(&n.value)),
        Stmt::For(n) => {
            out.push(NodeRef::Expr(&n.target));
            out.push(NodeRef::Expr(&n.iter));
            push_stmts(out, &n.body);
            push_stmts(out, &n.orelse);
        }
        Stmt::FunctionDef(n) => {
            push_exprs(out, &n.decorator_list);
            out.push(NodeRef::Arguments(&n.args));
            push_stmts(out, &n.body);
        }
        Stmt::If(n) => {
            out.push(NodeRef::Expr(&n.test));
            push_stmts(out, &n.body);
            push_stmts(out, &n.orelse);
        }
        Stmt::Import(n) => out.extend(n.names.iter().map(NodeRef::Alias)),
        Stmt::Print(n) => {
            push_opt(out, &n.dest);
            push_exprs(out, &n.values);
        }
        Stmt::Return(n) => push_opt(out, &n.value),
        Stmt::While(n) => {
            out.push(NodeRef::Expr(&n.test));
            push_stmts(out, &n.body);
            push_stmts(out, &n.orelse);
        }
        Stmt::With(n) => {
            out.push(NodeRef::Expr(&n.context_expr));
            push_opt(out, &n.optional_vars);
            push_stmts(out, &n.body);
        }
        Stmt::Branch(n) => out.push(NodeRef::Expr(&n.test)),
    }
}

fn push_expr_children<'a>(out: &mut Vec<NodeRef<'a>>, expr: &'a Expr) {
    match expr {
        Expr::Name(_) | Expr::Num(_) | Expr::Str(_) => {}
        Expr::Attribute(n) => out.push(NodeRef::Expr(&n.value)),
        Expr::BinOp(n) => {
            out.push(NodeRef::Expr(&n.left));
            out.push(NodeRef::Expr(&n.right));
        }
        Expr::BoolOp(n) => push_exprs(out, &n.values),
        Expr::Call(n) => {
            out.push(NodeRef::Expr(&n.func));
            push_exprs(out, &n.args);
            out.extend(n.keywords.iter().map(NodeRef::Keyword));
            if let Some(starargs) = &n.starargs {
                out.push(NodeRef::Expr(starargs));
            }
            if let Some(kwargs) = &n.kwargs {
                out.push(NodeRef::Expr(kwargs));
            }
        }
        Expr::Compare(n) => {
            out.push(NodeRef::Expr(&n.left));
            push_exprs(out, &n.comparators);
        }
        Expr::Dict(n) => {
            for (key, value) in n.keys.iter().zip(&n.values) {
                out.push(NodeRef::Expr(key));
                out.push(NodeRef::Expr(value));
            }
        }
        Expr::IfExp(n) => {
            out.push(NodeRef::Expr(&n.test));
            out.push(NodeRef::Expr(&n.body));
            out.push(NodeRef::Expr(&n.orelse));
        }
        Expr::Index(n) => out.push(NodeRef::Expr(&n.value)),
        Expr::Lambda(n) => {
            out.push(NodeRef::Arguments(&n.args));
            out.push(NodeRef::Expr(&n.body));
        }
        Expr::List(n) => push_exprs(out, &n.elts),
        Expr::ListComp(n) => {
            out.push(NodeRef::Expr(&n.elt));
            out.extend(n.generators.iter().map(NodeRef::Comprehension));
        }
        Expr::Slice(n) => {
            for part in [&n.lower, &n.upper, &n.step] {
                if let Some(e) = part {
                    out.push(NodeRef::Expr(e));
                }
            }
        }
        Expr::Subscript(n) => {
            out.push(NodeRef::Expr(&n.value));
            out.push(NodeRef::Expr(&n.slice));
        }
        Expr::Tuple(n) => push_exprs(out, &n.elts),
        Expr::UnaryOp(n) => out.push(NodeRef::Expr(&n.operand)),
    }
}
