//! Source-shaped debug rendering.
//!
//! [`PrintVisitor`] is a total generic-role visitor: it covers every node
//! kind, pseudo-kinds included, and renders a readable approximation of the
//! surface syntax. Every handler claims its subtree, so the driver never
//! descends on its own and the visitor controls layout completely. The
//! output is a debugging aid, not a formatter; it makes no round-trip
//! promise.

use crate::ast::{
    Alias, Arguments, Assign, Attribute, AugAssign, BinOp, BoolOp, Branch, Break, Call, ClassDef,
    Compare, Comprehension, Continue, Dict, Expr, ExprStmt, For, FunctionDef, Global, If, IfExp,
    Import, Index, Jump, Keyword, Lambda, List, ListComp, Module, Name, NodeRef, Num, Number,
    Pass, Print, Return, Slice, Stmt, Str, Subscript, Tuple, UnaryOp, UnaryOperator, While, With,
};
use crate::visitor::{visit_node, AstVisitor};

/// Render any node to a string.
pub fn dump(node: NodeRef<'_>) -> String {
    let mut printer = PrintVisitor::new();
    visit_node(&mut printer, node);
    printer.into_output()
}

/// Total rendering visitor. See the module docs.
pub struct PrintVisitor {
    out: String,
    indent: usize,
}

impl PrintVisitor {
    pub fn new() -> Self {
        PrintVisitor {
            out: String::new(),
            indent: 0,
        }
    }

    pub fn into_output(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn suite(&mut self, stmts: &[Stmt]) {
        self.indent += 1;
        if stmts.is_empty() {
            self.line("pass");
        }
        for stmt in stmts {
            visit_node(self, NodeRef::Stmt(stmt));
        }
        self.indent -= 1;
    }

    fn decorators(&mut self, decorator_list: &[Expr]) {
        for decorator in decorator_list {
            self.line(&format!("@{}", expr_str(decorator)));
        }
    }
}

impl Default for PrintVisitor {
    fn default() -> Self {
        PrintVisitor::new()
    }
}

impl AstVisitor for PrintVisitor {
    fn visit_module(&mut self, node: &Module) -> bool {
        for stmt in &node.body {
            visit_node(self, NodeRef::Stmt(stmt));
        }
        true
    }

    fn visit_alias(&mut self, node: &Alias) -> bool {
        self.line(&alias_str(node));
        true
    }

    fn visit_arguments(&mut self, node: &Arguments) -> bool {
        self.line(&args_str(node));
        true
    }

    fn visit_keyword(&mut self, node: &Keyword) -> bool {
        self.line(&keyword_str(node));
        true
    }

    fn visit_comprehension(&mut self, node: &Comprehension) -> bool {
        self.line(&comprehension_str(node));
        true
    }

    fn visit_assign(&mut self, node: &Assign) -> bool {
        let mut text = String::new();
        for target in &node.targets {
            text.push_str(&expr_str(target));
            text.push_str(" = ");
        }
        text.push_str(&expr_str(&node.value));
        self.line(&text);
        true
    }

    fn visit_augassign(&mut self, node: &AugAssign) -> bool {
        self.line(&format!(
            "{} {}= {}",
            expr_str(&node.target),
            node.op.as_symbol(),
            expr_str(&node.value)
        ));
        true
    }

    fn visit_break(&mut self, _node: &Break) -> bool {
        self.line("break");
        true
    }

    fn visit_classdef(&mut self, node: &ClassDef) -> bool {
        self.decorators(&node.decorator_list);
        if node.bases.is_empty() {
            self.line(&format!("class {}:", node.name));
        } else {
            self.line(&format!("class {}({}):", node.name, exprs_str(&node.bases)));
        }
        self.suite(&node.body);
        true
    }

    fn visit_continue(&mut self, _node: &Continue) -> bool {
        self.line("continue");
        true
    }

    fn visit_expr_stmt(&mut self, node: &ExprStmt) -> bool {
        self.line(&expr_str(&node.value));
        true
    }

    fn visit_for(&mut self, node: &For) -> bool {
        self.line(&format!(
            "for {} in {}:",
            expr_str(&node.target),
            expr_str(&node.iter)
        ));
        self.suite(&node.body);
        if !node.orelse.is_empty() {
            self.line("else:");
            self.suite(&node.orelse);
        }
        true
    }

    fn visit_functiondef(&mut self, node: &FunctionDef) -> bool {
        self.decorators(&node.decorator_list);
        self.line(&format!("def {}({}):", node.name, args_str(&node.args)));
        self.suite(&node.body);
        true
    }

    fn visit_global(&mut self, node: &Global) -> bool {
        self.line(&format!("global {}", node.names.join(", ")));
        true
    }

    fn visit_if(&mut self, node: &If) -> bool {
        self.line(&format!("if {}:", expr_str(&node.test)));
        self.suite(&node.body);
        if !node.orelse.is_empty() {
            self.line("else:");
            self.suite(&node.orelse);
        }
        true
    }

    fn visit_import(&mut self, node: &Import) -> bool {
        let names: Vec<String> = node.names.iter().map(alias_str).collect();
        self.line(&format!("import {}", names.join(", ")));
        true
    }

    fn visit_pass(&mut self, _node: &Pass) -> bool {
        self.line("pass");
        true
    }

    fn visit_print(&mut self, node: &Print) -> bool {
        let mut text = String::from("print");
        if let Some(dest) = &node.dest {
            text.push_str(" >>");
            text.push_str(&expr_str(dest));
            if !node.values.is_empty() {
                text.push(',');
            }
        }
        if !node.values.is_empty() {
            text.push(' ');
            text.push_str(&exprs_str(&node.values));
        }
        if !node.nl {
            text.push(',');
        }
        self.line(&text);
        true
    }

    fn visit_return(&mut self, node: &Return) -> bool {
        match &node.value {
            Some(value) => self.line(&format!("return {}", expr_str(value))),
            None => self.line("return"),
        }
        true
    }

    fn visit_while(&mut self, node: &While) -> bool {
        self.line(&format!("while {}:", expr_str(&node.test)));
        self.suite(&node.body);
        if !node.orelse.is_empty() {
            self.line("else:");
            self.suite(&node.orelse);
        }
        true
    }

    fn visit_with(&mut self, node: &With) -> bool {
        match &node.optional_vars {
            Some(vars) => self.line(&format!(
                "with {} as {}:",
                expr_str(&node.context_expr),
                expr_str(vars)
            )),
            None => self.line(&format!("with {}:", expr_str(&node.context_expr))),
        }
        self.suite(&node.body);
        true
    }

    fn visit_branch(&mut self, node: &Branch) -> bool {
        self.line(&format!(
            "branch {} ? {} : {}",
            expr_str(&node.test),
            node.if_true,
            node.if_false
        ));
        true
    }

    fn visit_jump(&mut self, node: &Jump) -> bool {
        self.line(&format!("jump {}", node.target));
        true
    }

    fn visit_attribute(&mut self, node: &Attribute) -> bool {
        self.line(&attribute_str(node));
        true
    }

    fn visit_binop(&mut self, node: &BinOp) -> bool {
        self.line(&binop_str(node));
        true
    }

    fn visit_boolop(&mut self, node: &BoolOp) -> bool {
        self.line(&boolop_str(node));
        true
    }

    fn visit_call(&mut self, node: &Call) -> bool {
        self.line(&call_str(node));
        true
    }

    fn visit_compare(&mut self, node: &Compare) -> bool {
        self.line(&compare_str(node));
        true
    }

    fn visit_dict(&mut self, node: &Dict) -> bool {
        self.line(&dict_str(node));
        true
    }

    fn visit_ifexp(&mut self, node: &IfExp) -> bool {
        self.line(&ifexp_str(node));
        true
    }

    fn visit_index(&mut self, node: &Index) -> bool {
        self.line(&expr_str(&node.value));
        true
    }

    fn visit_lambda(&mut self, node: &Lambda) -> bool {
        self.line(&lambda_str(node));
        true
    }

    fn visit_list(&mut self, node: &List) -> bool {
        self.line(&format!("[{}]", exprs_str(&node.elts)));
        true
    }

    fn visit_listcomp(&mut self, node: &ListComp) -> bool {
        self.line(&listcomp_str(node));
        true
    }

    fn visit_name(&mut self, node: &Name) -> bool {
        self.line(&node.id);
        true
    }

    fn visit_num(&mut self, node: &Num) -> bool {
        self.line(&number_str(&node.value));
        true
    }

    fn visit_slice(&mut self, node: &Slice) -> bool {
        self.line(&slice_str(node));
        true
    }

    fn visit_str(&mut self, node: &Str) -> bool {
        self.line(&format!("'{}'", node.value));
        true
    }

    fn visit_subscript(&mut self, node: &Subscript) -> bool {
        self.line(&subscript_str(node));
        true
    }

    fn visit_tuple(&mut self, node: &Tuple) -> bool {
        self.line(&format!("({})", exprs_str(&node.elts)));
        true
    }

    fn visit_unaryop(&mut self, node: &UnaryOp) -> bool {
        self.line(&unaryop_str(node));
        true
    }
}

fn number_str(value: &Number) -> String {
    match value {
        Number::Int(v) => v.to_string(),
        Number::Float(v) => {
            if v.fract() == 0.0 && v.is_finite() {
                format!("{v:.1}")
            } else {
                v.to_string()
            }
        }
    }
}

fn exprs_str(exprs: &[Expr]) -> String {
    let parts: Vec<String> = exprs.iter().map(expr_str).collect();
    parts.join(", ")
}

fn alias_str(alias: &Alias) -> String {
    match &alias.asname {
        Some(asname) => format!("{} as {}", alias.name, asname),
        None => alias.name.clone(),
    }
}

fn keyword_str(keyword: &Keyword) -> String {
    format!("{}={}", keyword.arg, expr_str(&keyword.value))
}

fn args_str(args: &Arguments) -> String {
    let mut parts = Vec::new();
    for (i, arg) in args.args.iter().enumerate() {
        match args.default_for(i) {
            Some(default) => parts.push(format!("{}={}", expr_str(arg), expr_str(default))),
            None => parts.push(expr_str(arg)),
        }
    }
    if let Some(vararg) = &args.vararg {
        parts.push(format!("*{vararg}"));
    }
    if let Some(kwarg) = &args.kwarg {
        parts.push(format!("**{}", expr_str(kwarg)));
    }
    parts.join(", ")
}

fn comprehension_str(generator: &Comprehension) -> String {
    let mut text = format!(
        "for {} in {}",
        expr_str(&generator.target),
        expr_str(&generator.iter)
    );
    for cond in &generator.ifs {
        text.push_str(" if ");
        text.push_str(&expr_str(cond));
    }
    text
}

fn attribute_str(node: &Attribute) -> String {
    format!("{}.{}", expr_str(&node.value), node.attr)
}

fn binop_str(node: &BinOp) -> String {
    format!(
        "({} {} {})",
        expr_str(&node.left),
        node.op.as_symbol(),
        expr_str(&node.right)
    )
}

fn boolop_str(node: &BoolOp) -> String {
    let parts: Vec<String> = node.values.iter().map(expr_str).collect();
    format!("({})", parts.join(&format!(" {} ", node.op.as_symbol())))
}

fn call_str(node: &Call) -> String {
    let mut parts: Vec<String> = node.args.iter().map(expr_str).collect();
    parts.extend(node.keywords.iter().map(keyword_str));
    if let Some(starargs) = &node.starargs {
        parts.push(format!("*{}", expr_str(starargs)));
    }
    if let Some(kwargs) = &node.kwargs {
        parts.push(format!("**{}", expr_str(kwargs)));
    }
    format!("{}({})", expr_str(&node.func), parts.join(", "))
}

fn compare_str(node: &Compare) -> String {
    let mut text = format!("({}", expr_str(&node.left));
    for (op, comparator) in node.ops.iter().zip(&node.comparators) {
        text.push(' ');
        text.push_str(op.as_symbol());
        text.push(' ');
        text.push_str(&expr_str(comparator));
    }
    text.push(')');
    text
}

fn dict_str(node: &Dict) -> String {
    let parts: Vec<String> = node
        .keys
        .iter()
        .zip(&node.values)
        .map(|(k, v)| format!("{}: {}", expr_str(k), expr_str(v)))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

fn ifexp_str(node: &IfExp) -> String {
    format!(
        "({} if {} else {})",
        expr_str(&node.body),
        expr_str(&node.test),
        expr_str(&node.orelse)
    )
}

fn lambda_str(node: &Lambda) -> String {
    format!("(lambda {}: {})", args_str(&node.args), expr_str(&node.body))
}

fn listcomp_str(node: &ListComp) -> String {
    let mut text = format!("[{}", expr_str(&node.elt));
    for generator in &node.generators {
        text.push(' ');
        text.push_str(&comprehension_str(generator));
    }
    text.push(']');
    text
}

fn slice_str(node: &Slice) -> String {
    let mut text = String::new();
    if let Some(lower) = &node.lower {
        text.push_str(&expr_str(lower));
    }
    text.push(':');
    if let Some(upper) = &node.upper {
        text.push_str(&expr_str(upper));
    }
    if let Some(step) = &node.step {
        text.push(':');
        text.push_str(&expr_str(step));
    }
    text
}

fn subscript_str(node: &Subscript) -> String {
    format!("{}[{}]", expr_str(&node.value), expr_str(&node.slice))
}

fn unaryop_str(node: &UnaryOp) -> String {
    match node.op {
        UnaryOperator::Not => format!("(not {})", expr_str(&node.operand)),
        _ => format!("({}{})", node.op.as_symbol(), expr_str(&node.operand)),
    }
}

fn expr_str(expr: &Expr) -> String {
    match expr {
        Expr::Attribute(n) => attribute_str(n),
        Expr::BinOp(n) => binop_str(n),
        Expr::BoolOp(n) => boolop_str(n),
        Expr::Call(n) => call_str(n),
        Expr::Compare(n) => compare_str(n),
        Expr::Dict(n) => dict_str(n),
        Expr::IfExp(n) => ifexp_str(n),
        Expr::Index(n) => expr_str(&n.value),
        Expr::Lambda(n) => lambda_str(n),
        Expr::List(n) => format!("[{}]", exprs_str(&n.elts)),
        Expr::ListComp(n) => listcomp_str(n),
        Expr::Name(n) => n.id.clone(),
        Expr::Num(n) => number_str(&n.value),
        Expr::Slice(n) => slice_str(n),
        Expr::Str(n) => format!("'{}'", n.value),
        Expr::Subscript(n) => subscript_str(n),
        Expr::Tuple(n) => format!("({})", exprs_str(&n.elts)),
        Expr::UnaryOp(n) => unaryop_str(n),
    }
}
