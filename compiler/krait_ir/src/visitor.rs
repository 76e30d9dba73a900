//! Visitor dispatch framework.
//!
//! Three independent dispatch roles over the same kind discriminant:
//!
//! - [`AstVisitor`] — the generic walk role. One `bool`-returning handler
//!   per concrete kind; `true` means the handler has fully processed the
//!   node's subtree, `false` asks the driver ([`visit_node`]) to descend
//!   into the children itself. [`NoopAstVisitor`] is the base for consumers
//!   that only care about a few kinds: every default returns `false`.
//! - [`ExprVisitor`] — one value-returning handler per expression kind,
//!   dispatched by [`dispatch_expr`].
//! - [`StmtVisitor`] — one effect handler per statement kind, dispatched by
//!   [`dispatch_stmt`].
//!
//! Dispatch is single-discriminant: exactly one handler fires per node,
//! selected solely by kind, whether the node was parsed or synthesized by
//! CFG construction. Invoking a role on a kind the visitor does not cover
//! aborts unconditionally — an uncovered kind is a missing compiler
//! feature, not a recoverable runtime condition.

use crate::ast::{
    Alias, Arguments, Assign, Attribute, AugAssign, BinOp, BoolOp, Branch, Break, Call, ClassDef,
    Compare, Comprehension, Continue, Dict, Expr, ExprStmt, For, FunctionDef, Global, If, IfExp,
    Import, Index, Jump, Keyword, Lambda, List, ListComp, Module, Name, NodeKind, NodeRef, Num,
    Pass, Print, Return, Slice, Stmt, Str, Subscript, Tuple, UnaryOp, While, With,
};

/// Fatal path for every uncovered handler.
fn unhandled(kind: NodeKind) -> ! {
    tracing::error!(%kind, "no handler registered for node kind");
    panic!("unhandled node kind {kind}: visitor does not cover it");
}

/// Generic walk role. Handlers return `true` when they have fully processed
/// the node's subtree; `false` requests default descent by the driver.
///
/// Every default aborts; base partial visitors on [`NoopAstVisitor`]
/// instead of leaving kinds uncovered.
pub trait AstVisitor {
    fn visit_alias(&mut self, _node: &Alias) -> bool {
        unhandled(NodeKind::Alias)
    }
    fn visit_arguments(&mut self, _node: &Arguments) -> bool {
        unhandled(NodeKind::Arguments)
    }
    fn visit_assign(&mut self, _node: &Assign) -> bool {
        unhandled(NodeKind::Assign)
    }
    fn visit_attribute(&mut self, _node: &Attribute) -> bool {
        unhandled(NodeKind::Attribute)
    }
    fn visit_augassign(&mut self, _node: &AugAssign) -> bool {
        unhandled(NodeKind::AugAssign)
    }
    fn visit_binop(&mut self, _node: &BinOp) -> bool {
        unhandled(NodeKind::BinOp)
    }
    fn visit_boolop(&mut self, _node: &BoolOp) -> bool {
        unhandled(NodeKind::BoolOp)
    }
    fn visit_branch(&mut self, _node: &Branch) -> bool {
        unhandled(NodeKind::Branch)
    }
    fn visit_break(&mut self, _node: &Break) -> bool {
        unhandled(NodeKind::Break)
    }
    fn visit_call(&mut self, _node: &Call) -> bool {
        unhandled(NodeKind::Call)
    }
    fn visit_classdef(&mut self, _node: &ClassDef) -> bool {
        unhandled(NodeKind::ClassDef)
    }
    fn visit_compare(&mut self, _node: &Compare) -> bool {
        unhandled(NodeKind::Compare)
    }
    fn visit_comprehension(&mut self, _node: &Comprehension) -> bool {
        unhandled(NodeKind::Comprehension)
    }
    fn visit_continue(&mut self, _node: &Continue) -> bool {
        unhandled(NodeKind::Continue)
    }
    fn visit_dict(&mut self, _node: &Dict) -> bool {
        unhandled(NodeKind::Dict)
    }
    fn visit_expr_stmt(&mut self, _node: &ExprStmt) -> bool {
        unhandled(NodeKind::ExprStmt)
    }
    fn visit_for(&mut self, _node: &For) -> bool {
        unhandled(NodeKind::For)
    }
    fn visit_functiondef(&mut self, _node: &FunctionDef) -> bool {
        unhandled(NodeKind::FunctionDef)
    }
    fn visit_global(&mut self, _node: &Global) -> bool {
        unhandled(NodeKind::Global)
    }
    fn visit_if(&mut self, _node: &If) -> bool {
        unhandled(NodeKind::If)
    }
    fn visit_ifexp(&mut self, _node: &IfExp) -> bool {
        unhandled(NodeKind::IfExp)
    }
    fn visit_import(&mut self, _node: &Import) -> bool {
        unhandled(NodeKind::Import)
    }
    fn visit_index(&mut self, _node: &Index) -> bool {
        unhandled(NodeKind::Index)
    }
    fn visit_jump(&mut self, _node: &Jump) -> bool {
        unhandled(NodeKind::Jump)
    }
    fn visit_keyword(&mut self, _node: &Keyword) -> bool {
        unhandled(NodeKind::Keyword)
    }
    fn visit_lambda(&mut self, _node: &Lambda) -> bool {
        unhandled(NodeKind::Lambda)
    }
    fn visit_list(&mut self, _node: &List) -> bool {
        unhandled(NodeKind::List)
    }
    fn visit_listcomp(&mut self, _node: &ListComp) -> bool {
        unhandled(NodeKind::ListComp)
    }
    fn visit_module(&mut self, _node: &Module) -> bool {
        unhandled(NodeKind::Module)
    }
    fn visit_name(&mut self, _node: &Name) -> bool {
        unhandled(NodeKind::Name)
    }
    fn visit_num(&mut self, _node: &Num) -> bool {
        unhandled(NodeKind::Num)
    }
    fn visit_pass(&mut self, _node: &Pass) -> bool {
        unhandled(NodeKind::Pass)
    }
    fn visit_print(&mut self, _node: &Print) -> bool {
        unhandled(NodeKind::Print)
    }
    fn visit_return(&mut self, _node: &Return) -> bool {
        unhandled(NodeKind::Return)
    }
    fn visit_slice(&mut self, _node: &Slice) -> bool {
        unhandled(NodeKind::Slice)
    }
    fn visit_str(&mut self, _node: &Str) -> bool {
        unhandled(NodeKind::Str)
    }
    fn visit_subscript(&mut self, _node: &Subscript) -> bool {
        unhandled(NodeKind::Subscript)
    }
    fn visit_tuple(&mut self, _node: &Tuple) -> bool {
        unhandled(NodeKind::Tuple)
    }
    fn visit_unaryop(&mut self, _node: &UnaryOp) -> bool {
        unhandled(NodeKind::UnaryOp)
    }
    fn visit_while(&mut self, _node: &While) -> bool {
        unhandled(NodeKind::While)
    }
    fn visit_with(&mut self, _node: &With) -> bool {
        unhandled(NodeKind::With)
    }
}

/// Base for partial generic-role visitors: every handler defaults to
/// `false`, so the driver descends everywhere and implementors override
/// only the kinds they care about. Types implementing this get
/// [`AstVisitor`] for free through a blanket impl.
pub trait NoopAstVisitor {
    fn visit_alias(&mut self, _node: &Alias) -> bool {
        false
    }
    fn visit_arguments(&mut self, _node: &Arguments) -> bool {
        false
    }
    fn visit_assign(&mut self, _node: &Assign) -> bool {
        false
    }
    fn visit_attribute(&mut self, _node: &Attribute) -> bool {
        false
    }
    fn visit_augassign(&mut self, _node: &AugAssign) -> bool {
        false
    }
    fn visit_binop(&mut self, _node: &BinOp) -> bool {
        false
    }
    fn visit_boolop(&mut self, _node: &BoolOp) -> bool {
        false
    }
    fn visit_branch(&mut self, _node: &Branch) -> bool {
        false
    }
    fn visit_break(&mut self, _node: &Break) -> bool {
        false
    }
    fn visit_call(&mut self, _node: &Call) -> bool {
        false
    }
    fn visit_classdef(&mut self, _node: &ClassDef) -> bool {
        false
    }
    fn visit_compare(&mut self, _node: &Compare) -> bool {
        false
    }
    fn visit_comprehension(&mut self, _node: &Comprehension) -> bool {
        false
    }
    fn visit_continue(&mut self, _node: &Continue) -> bool {
        false
    }
    fn visit_dict(&mut self, _node: &Dict) -> bool {
        false
    }
    fn visit_expr_stmt(&mut self, _node: &ExprStmt) -> bool {
        false
    }
    fn visit_for(&mut self, _node: &For) -> bool {
        false
    }
    fn visit_functiondef(&mut self, _node: &FunctionDef) -> bool {
        false
    }
    fn visit_global(&mut self, _node: &Global) -> bool {
        false
    }
    fn visit_if(&mut self, _node: &If) -> bool {
        false
    }
    fn visit_ifexp(&mut self, _node: &IfExp) -> bool {
        false
    }
    fn visit_import(&mut self, _node: &Import) -> bool {
        false
    }
    fn visit_index(&mut self, _node: &Index) -> bool {
        false
    }
    fn visit_jump(&mut self, _node: &Jump) -> bool {
        false
    }
    fn visit_keyword(&mut self, _node: &Keyword) -> bool {
        false
    }
    fn visit_lambda(&mut self, _node: &Lambda) -> bool {
        false
    }
    fn visit_list(&mut self, _node: &List) -> bool {
        false
    }
    fn visit_listcomp(&mut self, _node: &ListComp) -> bool {
        false
    }
    fn visit_module(&mut self, _node: &Module) -> bool {
        false
    }
    fn visit_name(&mut self, _node: &Name) -> bool {
        false
    }
    fn visit_num(&mut self, _node: &Num) -> bool {
        false
    }
    fn visit_pass(&mut self, _node: &Pass) -> bool {
        false
    }
    fn visit_print(&mut self, _node: &Print) -> bool {
        false
    }
    fn visit_return(&mut self, _node: &Return) -> bool {
        false
    }
    fn visit_slice(&mut self, _node: &Slice) -> bool {
        false
    }
    fn visit_str(&mut self, _node: &Str) -> bool {
        false
    }
    fn visit_subscript(&mut self, _node: &Subscript) -> bool {
        false
    }
    fn visit_tuple(&mut self, _node: &Tuple) -> bool {
        false
    }
    fn visit_unaryop(&mut self, _node: &UnaryOp) -> bool {
        false
    }
    fn visit_while(&mut self, _node: &While) -> bool {
        false
    }
    fn visit_with(&mut self, _node: &With) -> bool {
        false
    }
}

impl<T: NoopAstVisitor> AstVisitor for T {
    fn visit_alias(&mut self, node: &Alias) -> bool {
        NoopAstVisitor::visit_alias(self, node)
    }
    fn visit_arguments(&mut self, node: &Arguments) -> bool {
        NoopAstVisitor::visit_arguments(self, node)
    }
    fn visit_assign(&mut self, node: &Assign) -> bool {
        NoopAstVisitor::visit_assign(self, node)
    }
    fn visit_attribute(&mut self, node: &Attribute) -> bool {
        NoopAstVisitor::visit_attribute(self, node)
    }
    fn visit_augassign(&mut self, node: &AugAssign) -> bool {
        NoopAstVisitor::visit_augassign(self, node)
    }
    fn visit_binop(&mut self, node: &BinOp) -> bool {
        NoopAstVisitor::visit_binop(self, node)
    }
    fn visit_boolop(&mut self, node: &BoolOp) -> bool {
        NoopAstVisitor::visit_boolop(self, node)
    }
    fn visit_branch(&mut self, node: &Branch) -> bool {
        NoopAstVisitor::visit_branch(self, node)
    }
    fn visit_break(&mut self, node: &Break) -> bool {
        NoopAstVisitor::visit_break(self, node)
    }
    fn visit_call(&mut self, node: &Call) -> bool {
        NoopAstVisitor::visit_call(self, node)
    }
    fn visit_classdef(&mut self, node: &ClassDef) -> bool {
        NoopAstVisitor::visit_classdef(self, node)
    }
    fn visit_compare(&mut self, node: &Compare) -> bool {
        NoopAstVisitor::visit_compare(self, node)
    }
    fn visit_comprehension(&mut self, node: &Comprehension) -> bool {
        NoopAstVisitor::visit_comprehension(self, node)
    }
    fn visit_continue(&mut self, node: &Continue) -> bool {
        NoopAstVisitor::visit_continue(self, node)
    }
    fn visit_dict(&mut self, node: &Dict) -> bool {
        NoopAstVisitor::visit_dict(self, node)
    }
    fn visit_expr_stmt(&mut self, node: &ExprStmt) -> bool {
        NoopAstVisitor::visit_expr_stmt(self, node)
    }
    fn visit_for(&mut self, node: &For) -> bool {
        NoopAstVisitor::visit_for(self, node)
    }
    fn visit_functiondef(&mut self, node: &FunctionDef) -> bool {
        NoopAstVisitor::visit_functiondef(self, node)
    }
    fn visit_global(&mut self, node: &Global) -> bool {
        NoopAstVisitor::visit_global(self, node)
    }
    fn visit_if(&mut self, node: &If) -> bool {
        NoopAstVisitor::visit_if(self, node)
    }
    fn visit_ifexp(&mut self, node: &IfExp) -> bool {
        NoopAstVisitor::visit_ifexp(self, node)
    }
    fn visit_import(&mut self, node: &Import) -> bool {
        NoopAstVisitor::visit_import(self, node)
    }
    fn visit_index(&mut self, node: &Index) -> bool {
        NoopAstVisitor::visit_index(self, node)
    }
    fn visit_jump(&mut self, node: &Jump) -> bool {
        NoopAstVisitor::visit_jump(self, node)
    }
    fn visit_keyword(&mut self, node: &Keyword) -> bool {
        NoopAstVisitor::visit_keyword(self, node)
    }
    fn visit_lambda(&mut self, node: &Lambda) -> bool {
        NoopAstVisitor::visit_lambda(self, node)
    }
    fn visit_list(&mut self, node: &List) -> bool {
        NoopAstVisitor::visit_list(self, node)
    }
    fn visit_listcomp(&mut self, node: &ListComp) -> bool {
        NoopAstVisitor::visit_listcomp(self, node)
    }
    fn visit_module(&mut self, node: &Module) -> bool {
        NoopAstVisitor::visit_module(self, node)
    }
    fn visit_name(&mut self, node: &Name) -> bool {
        NoopAstVisitor::visit_name(self, node)
    }
    fn visit_num(&mut self, node: &Num) -> bool {
        NoopAstVisitor::visit_num(self, node)
    }
    fn visit_pass(&mut self, node: &Pass) -> bool {
        NoopAstVisitor::visit_pass(self, node)
    }
    fn visit_print(&mut self, node: &Print) -> bool {
        NoopAstVisitor::visit_print(self, node)
    }
    fn visit_return(&mut self, node: &Return) -> bool {
        NoopAstVisitor::visit_return(self, node)
    }
    fn visit_slice(&mut self, node: &Slice) -> bool {
        NoopAstVisitor::visit_slice(self, node)
    }
    fn visit_str(&mut self, node: &Str) -> bool {
        NoopAstVisitor::visit_str(self, node)
    }
    fn visit_subscript(&mut self, node: &Subscript) -> bool {
        NoopAstVisitor::visit_subscript(self, node)
    }
    fn visit_tuple(&mut self, node: &Tuple) -> bool {
        NoopAstVisitor::visit_tuple(self, node)
    }
    fn visit_unaryop(&mut self, node: &UnaryOp) -> bool {
        NoopAstVisitor::visit_unaryop(self, node)
    }
    fn visit_while(&mut self, node: &While) -> bool {
        NoopAstVisitor::visit_while(self, node)
    }
    fn visit_with(&mut self, node: &With) -> bool {
        NoopAstVisitor::visit_with(self, node)
    }
}

/// Fire the generic-role handler for one node. Exactly one handler per
/// node, selected solely by kind.
fn dispatch<V: AstVisitor + ?Sized>(visitor: &mut V, node: NodeRef<'_>) -> bool {
    match node {
        NodeRef::Module(n) => visitor.visit_module(n),
        NodeRef::Arguments(n) => visitor.visit_arguments(n),
        NodeRef::Keyword(n) => visitor.visit_keyword(n),
        NodeRef::Comprehension(n) => visitor.visit_comprehension(n),
        NodeRef::Alias(n) => visitor.visit_alias(n),
        NodeRef::Stmt(stmt) => match stmt {
            Stmt::Assign(n) => visitor.visit_assign(n),
            Stmt::AugAssign(n) => visitor.visit_augassign(n),
            Stmt::Break(n) => visitor.visit_break(n),
            Stmt::ClassDef(n) => visitor.visit_classdef(n),
            Stmt::Continue(n) => visitor.visit_continue(n),
            Stmt::ExprStmt(n) => visitor.visit_expr_stmt(n),
            Stmt::For(n) => visitor.visit_for(n),
            Stmt::FunctionDef(n) => visitor.visit_functiondef(n),
            Stmt::Global(n) => visitor.visit_global(n),
            Stmt::If(n) => visitor.visit_if(n),
            Stmt::Import(n) => visitor.visit_import(n),
            Stmt::Pass(n) => visitor.visit_pass(n),
            Stmt::Print(n) => visitor.visit_print(n),
            Stmt::Return(n) => visitor.visit_return(n),
            Stmt::While(n) => visitor.visit_while(n),
            Stmt::With(n) => visitor.visit_with(n),
            Stmt::Branch(n) => visitor.visit_branch(n),
            Stmt::Jump(n) => visitor.visit_jump(n),
        },
        NodeRef::Expr(expr) => match expr {
            Expr::Attribute(n) => visitor.visit_attribute(n),
            Expr::BinOp(n) => visitor.visit_binop(n),
            Expr::BoolOp(n) => visitor.visit_boolop(n),
            Expr::Call(n) => visitor.visit_call(n),
            Expr::Compare(n) => visitor.visit_compare(n),
            Expr::Dict(n) => visitor.visit_dict(n),
            Expr::IfExp(n) => visitor.visit_ifexp(n),
            Expr::Index(n) => visitor.visit_index(n),
            Expr::Lambda(n) => visitor.visit_lambda(n),
            Expr::List(n) => visitor.visit_list(n),
            Expr::ListComp(n) => visitor.visit_listcomp(n),
            Expr::Name(n) => visitor.visit_name(n),
            Expr::Num(n) => visitor.visit_num(n),
            Expr::Slice(n) => visitor.visit_slice(n),
            Expr::Str(n) => visitor.visit_str(n),
            Expr::Subscript(n) => visitor.visit_subscript(n),
            Expr::Tuple(n) => visitor.visit_tuple(n),
            Expr::UnaryOp(n) => visitor.visit_unaryop(n),
        },
    }
}

/// Drive the generic role over a subtree: fire the handler for `node`,
/// then descend into its children unless the handler claimed the subtree.
pub fn visit_node<V: AstVisitor + ?Sized>(visitor: &mut V, node: NodeRef<'_>) {
    if !dispatch(visitor, node) {
        for child in node.children() {
            visit_node(visitor, child);
        }
    }
}

/// Expression-result role: exactly one result value per expression kind.
pub trait ExprVisitor {
    type Value;

    fn visit_attribute(&mut self, _node: &Attribute) -> Self::Value {
        unhandled(NodeKind::Attribute)
    }
    fn visit_binop(&mut self, _node: &BinOp) -> Self::Value {
        unhandled(NodeKind::BinOp)
    }
    fn visit_boolop(&mut self, _node: &BoolOp) -> Self::Value {
        unhandled(NodeKind::BoolOp)
    }
    fn visit_call(&mut self, _node: &Call) -> Self::Value {
        unhandled(NodeKind::Call)
    }
    fn visit_compare(&mut self, _node: &Compare) -> Self::Value {
        unhandled(NodeKind::Compare)
    }
    fn visit_dict(&mut self, _node: &Dict) -> Self::Value {
        unhandled(NodeKind::Dict)
    }
    fn visit_ifexp(&mut self, _node: &IfExp) -> Self::Value {
        unhandled(NodeKind::IfExp)
    }
    fn visit_index(&mut self, _node: &Index) -> Self::Value {
        unhandled(NodeKind::Index)
    }
    fn visit_lambda(&mut self, _node: &Lambda) -> Self::Value {
        unhandled(NodeKind::Lambda)
    }
    fn visit_list(&mut self, _node: &List) -> Self::Value {
        unhandled(NodeKind::List)
    }
    fn visit_listcomp(&mut self, _node: &ListComp) -> Self::Value {
        unhandled(NodeKind::ListComp)
    }
    fn visit_name(&mut self, _node: &Name) -> Self::Value {
        unhandled(NodeKind::Name)
    }
    fn visit_num(&mut self, _node: &Num) -> Self::Value {
        unhandled(NodeKind::Num)
    }
    fn visit_slice(&mut self, _node: &Slice) -> Self::Value {
        unhandled(NodeKind::Slice)
    }
    fn visit_str(&mut self, _node: &Str) -> Self::Value {
        unhandled(NodeKind::Str)
    }
    fn visit_subscript(&mut self, _node: &Subscript) -> Self::Value {
        unhandled(NodeKind::Subscript)
    }
    fn visit_tuple(&mut self, _node: &Tuple) -> Self::Value {
        unhandled(NodeKind::Tuple)
    }
    fn visit_unaryop(&mut self, _node: &UnaryOp) -> Self::Value {
        unhandled(NodeKind::UnaryOp)
    }
}

/// Fire the expression-result handler for one expression.
pub fn dispatch_expr<V: ExprVisitor + ?Sized>(visitor: &mut V, expr: &Expr) -> V::Value {
    match expr {
        Expr::Attribute(n) => visitor.visit_attribute(n),
        Expr::BinOp(n) => visitor.visit_binop(n),
        Expr::BoolOp(n) => visitor.visit_boolop(n),
        Expr::Call(n) => visitor.visit_call(n),
        Expr::Compare(n) => visitor.visit_compare(n),
        Expr::Dict(n) => visitor.visit_dict(n),
        Expr::IfExp(n) => visitor.visit_ifexp(n),
        Expr::Index(n) => visitor.visit_index(n),
        Expr::Lambda(n) => visitor.visit_lambda(n),
        Expr::List(n) => visitor.visit_list(n),
        Expr::ListComp(n) => visitor.visit_listcomp(n),
        Expr::Name(n) => visitor.visit_name(n),
        Expr::Num(n) => visitor.visit_num(n),
        Expr::Slice(n) => visitor.visit_slice(n),
        Expr::Str(n) => visitor.visit_str(n),
        Expr::Subscript(n) => visitor.visit_subscript(n),
        Expr::Tuple(n) => visitor.visit_tuple(n),
        Expr::UnaryOp(n) => visitor.visit_unaryop(n),
    }
}

/// Statement-effect role: one side-effecting handler per statement kind,
/// pseudo-kinds included.
pub trait StmtVisitor {
    fn visit_assign(&mut self, _node: &Assign) {
        unhandled(NodeKind::Assign)
    }
    fn visit_augassign(&mut self, _node: &AugAssign) {
        unhandled(NodeKind::AugAssign)
    }
    fn visit_break(&mut self, _node: &Break) {
        unhandled(NodeKind::Break)
    }
    fn visit_classdef(&mut self, _node: &ClassDef) {
        unhandled(NodeKind::ClassDef)
    }
    fn visit_continue(&mut self, _node: &Continue) {
        unhandled(NodeKind::Continue)
    }
    fn visit_expr_stmt(&mut self, _node: &ExprStmt) {
        unhandled(NodeKind::ExprStmt)
    }
    fn visit_for(&mut self, _node: &For) {
        unhandled(NodeKind::For)
    }
    fn visit_functiondef(&mut self, _node: &FunctionDef) {
        unhandled(NodeKind::FunctionDef)
    }
    fn visit_global(&mut self, _node: &Global) {
        unhandled(NodeKind::Global)
    }
    fn visit_if(&mut self, _node: &If) {
        unhandled(NodeKind::If)
    }
    fn visit_import(&mut self, _node: &Import) {
        unhandled(NodeKind::Import)
    }
    fn visit_pass(&mut self, _node: &Pass) {
        unhandled(NodeKind::Pass)
    }
    fn visit_print(&mut self, _node: &Print) {
        unhandled(NodeKind::Print)
    }
    fn visit_return(&mut self, _node: &Return) {
        unhandled(NodeKind::Return)
    }
    fn visit_while(&mut self, _node: &While) {
        unhandled(NodeKind::While)
    }
    fn visit_with(&mut self, _node: &With) {
        unhandled(NodeKind::With)
    }
    fn visit_branch(&mut self, _node: &Branch) {
        unhandled(NodeKind::Branch)
    }
    fn visit_jump(&mut self, _node: &Jump) {
        unhandled(NodeKind::Jump)
    }
}

/// Fire the statement-effect handler for one statement.
pub fn dispatch_stmt<V: StmtVisitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Assign(n) => visitor.visit_assign(n),
        Stmt::AugAssign(n) => visitor.visit_augassign(n),
        Stmt::Break(n) => visitor.visit_break(n),
        Stmt::ClassDef(n) => visitor.visit_classdef(n),
        Stmt::Continue(n) => visitor.visit_continue(n),
        Stmt::ExprStmt(n) => visitor.visit_expr_stmt(n),
        Stmt::For(n) => visitor.visit_for(n),
        Stmt::FunctionDef(n) => visitor.visit_functiondef(n),
        Stmt::Global(n) => visitor.visit_global(n),
        Stmt::If(n) => visitor.visit_if(n),
        Stmt::Import(n) => visitor.visit_import(n),
        Stmt::Pass(n) => visitor.visit_pass(n),
        Stmt::Print(n) => visitor.visit_print(n),
        Stmt::Return(n) => visitor.visit_return(n),
        Stmt::While(n) => visitor.visit_while(n),
        Stmt::With(n) => visitor.visit_with(n),
        Stmt::Branch(n) => visitor.visit_branch(n),
        Stmt::Jump(n) => visitor.visit_jump(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Number;
    use crate::cfg::BlockId;
    use crate::fixtures;
    use crate::flatten::{find_kind, flatten};
    use pretty_assertions::assert_eq;

    struct NameCollector {
        seen: Vec<String>,
    }

    impl NoopAstVisitor for NameCollector {
        fn visit_name(&mut self, node: &Name) -> bool {
            self.seen.push(node.id.clone());
            false
        }
    }

    #[test]
    fn noop_base_descends_everywhere() {
        let module = fixtures::everything_module();
        let mut collector = NameCollector { seen: Vec::new() };
        visit_node(&mut collector, NodeRef::Module(&module));

        let expected = find_kind([NodeRef::Module(&module)], NodeKind::Name, true).len();
        assert_eq!(collector.seen.len(), expected);
    }

    #[test]
    fn each_node_fires_exactly_one_handler() {
        struct Counter {
            assigns: usize,
            nums: usize,
            others: usize,
        }

        impl NoopAstVisitor for Counter {
            fn visit_assign(&mut self, _node: &Assign) -> bool {
                self.assigns += 1;
                false
            }
            fn visit_num(&mut self, _node: &Num) -> bool {
                self.nums += 1;
                false
            }
            fn visit_module(&mut self, _node: &Module) -> bool {
                self.others += 1;
                false
            }
        }

        let module = fixtures::everything_module();
        let mut counter = Counter {
            assigns: 0,
            nums: 0,
            others: 0,
        };
        visit_node(&mut counter, NodeRef::Module(&module));

        let root = [NodeRef::Module(&module)];
        assert_eq!(counter.assigns, find_kind(root, NodeKind::Assign, true).len());
        assert_eq!(counter.nums, find_kind(root, NodeKind::Num, true).len());
        assert_eq!(counter.others, 1);
    }

    #[test]
    fn handled_subtrees_are_not_descended() {
        struct SkipFunctions {
            names: Vec<String>,
        }

        impl NoopAstVisitor for SkipFunctions {
            fn visit_functiondef(&mut self, _node: &FunctionDef) -> bool {
                true
            }
            fn visit_name(&mut self, node: &Name) -> bool {
                self.names.push(node.id.clone());
                false
            }
        }

        let stmt = fixtures::nested_function();
        let mut visitor = SkipFunctions { names: Vec::new() };
        visit_node(&mut visitor, NodeRef::Stmt(&stmt));
        assert!(visitor.names.is_empty());
    }

    #[test]
    #[should_panic(expected = "unhandled node kind")]
    fn generic_role_aborts_on_uncovered_kind() {
        struct Covered;
        impl AstVisitor for Covered {
            fn visit_assign(&mut self, _node: &Assign) -> bool {
                false
            }
        }

        let stmt = fixtures::ifexp_assign();
        // Descends from the covered Assign into its Name target.
        visit_node(&mut Covered, NodeRef::Stmt(&stmt));
    }

    #[test]
    #[should_panic(expected = "unhandled node kind")]
    fn statement_role_aborts_on_uncovered_pseudo_kind() {
        struct ParsedOnly;
        impl StmtVisitor for ParsedOnly {
            fn visit_assign(&mut self, _node: &Assign) {}
        }

        let branch = Stmt::Branch(Branch::new(
            fixtures::load("done", 1),
            BlockId::new(1),
            BlockId::new(2),
        ));
        dispatch_stmt(&mut ParsedOnly, &branch);
    }

    #[test]
    fn expression_role_computes_values() {
        struct ConstFold;

        impl ExprVisitor for ConstFold {
            type Value = i64;

            fn visit_num(&mut self, node: &Num) -> i64 {
                match node.value {
                    Number::Int(v) => v,
                    Number::Float(v) => v as i64,
                }
            }

            fn visit_binop(&mut self, node: &BinOp) -> i64 {
                let left = dispatch_expr(self, &node.left);
                let right = dispatch_expr(self, &node.right);
                match node.op {
                    crate::ast::Operator::Add => left + right,
                    crate::ast::Operator::Mult => left * right,
                    _ => unhandled(NodeKind::BinOp),
                }
            }

            fn visit_unaryop(&mut self, node: &UnaryOp) -> i64 {
                match node.op {
                    crate::ast::UnaryOperator::USub => -dispatch_expr(self, &node.operand),
                    _ => unhandled(NodeKind::UnaryOp),
                }
            }
        }

        // (1 + 2) * -3
        let expr = Expr::BinOp(BinOp {
            op: crate::ast::Operator::Mult,
            left: Box::new(Expr::BinOp(BinOp {
                op: crate::ast::Operator::Add,
                left: Box::new(fixtures::int(1, 1)),
                right: Box::new(fixtures::int(2, 1)),
                span: fixtures::sp(1),
            })),
            right: Box::new(Expr::UnaryOp(UnaryOp {
                op: crate::ast::UnaryOperator::USub,
                operand: Box::new(fixtures::int(3, 1)),
                span: fixtures::sp(1),
            })),
            span: fixtures::sp(1),
        });
        assert_eq!(dispatch_expr(&mut ConstFold, &expr), -9);
    }

    #[test]
    fn statement_role_collects_effects() {
        struct BlockSummary {
            kinds: Vec<NodeKind>,
            jump_targets: Vec<u32>,
        }

        impl StmtVisitor for BlockSummary {
            fn visit_assign(&mut self, node: &Assign) {
                let _ = node;
                self.kinds.push(NodeKind::Assign);
            }
            fn visit_branch(&mut self, node: &Branch) {
                self.kinds.push(NodeKind::Branch);
                self.jump_targets
                    .extend([node.if_true.index(), node.if_false.index()]);
            }
            fn visit_jump(&mut self, node: &Jump) {
                self.kinds.push(NodeKind::Jump);
                self.jump_targets.push(node.target.index());
            }
        }

        let block = vec![
            fixtures::ifexp_assign(),
            Stmt::Branch(Branch::new(
                fixtures::load("ready", 2),
                BlockId::new(1),
                BlockId::new(2),
            )),
            Stmt::Jump(Jump::new(BlockId::new(3))),
        ];
        let mut summary = BlockSummary {
            kinds: Vec::new(),
            jump_targets: Vec::new(),
        };
        for stmt in &block {
            dispatch_stmt(&mut summary, stmt);
        }
        assert_eq!(
            summary.kinds,
            vec![NodeKind::Assign, NodeKind::Branch, NodeKind::Jump]
        );
        assert_eq!(summary.jump_targets, vec![1, 2, 3]);
    }

    #[test]
    fn pseudo_kinds_dispatch_like_parsed_statements() {
        let module = fixtures::everything_module();
        let kinds: Vec<NodeKind> = flatten([NodeRef::Module(&module)], true)
            .iter()
            .map(|n| n.kind())
            .filter(|k| k.is_pseudo())
            .collect();
        assert_eq!(kinds, vec![NodeKind::Branch, NodeKind::Jump]);
    }
}
