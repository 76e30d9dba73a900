//! Hand-built trees shared across test modules.

use crate::ast::{
    Alias, Arguments, Assign, Attribute, AugAssign, BinOp, BoolOp, BoolOperator, Branch, Break,
    Call, ClassDef, CmpOp, Compare, Comprehension, Continue, Dict, Expr, ExprContext, ExprStmt,
    For, FunctionDef, Global, If, IfExp, Import, Index, Jump, Keyword, Lambda, List, ListComp,
    Module, Name, Num, Number, Operator, Pass, Print, Return, Slice, Stmt, Str, Subscript, Tuple,
    UnaryOp, UnaryOperator, While, With,
};
use crate::cfg::BlockId;
use crate::span::Span;

pub(crate) fn sp(line: u32) -> Span {
    Span::new(line, 0)
}

pub(crate) fn load(id: &str, line: u32) -> Expr {
    Expr::Name(Name {
        id: id.to_owned(),
        ctx: ExprContext::Load,
        span: sp(line),
    })
}

pub(crate) fn store(id: &str, line: u32) -> Expr {
    Expr::Name(Name {
        id: id.to_owned(),
        ctx: ExprContext::Store,
        span: sp(line),
    })
}

pub(crate) fn param(id: &str, line: u32) -> Expr {
    Expr::Name(Name {
        id: id.to_owned(),
        ctx: ExprContext::Param,
        span: sp(line),
    })
}

pub(crate) fn int(value: i64, line: u32) -> Expr {
    Expr::Num(Num {
        value: Number::Int(value),
        span: sp(line),
    })
}

pub(crate) fn float(value: f64, line: u32) -> Expr {
    Expr::Num(Num {
        value: Number::Float(value),
        span: sp(line),
    })
}

pub(crate) fn str_lit(value: &str, line: u32) -> Expr {
    Expr::Str(Str {
        value: value.to_owned(),
        span: sp(line),
    })
}

/// `x = 1 if y else 2`.
pub(crate) fn ifexp_assign() -> Stmt {
    Stmt::Assign(Assign {
        targets: vec![store("x", 1)],
        value: Expr::IfExp(IfExp {
            test: Box::new(load("y", 1)),
            body: Box::new(int(1, 1)),
            orelse: Box::new(int(2, 1)),
            span: sp(1),
        }),
        span: sp(1),
    })
}

/// A function definition with a non-empty body.
pub(crate) fn nested_function() -> Stmt {
    Stmt::FunctionDef(FunctionDef {
        name: "helper".to_owned(),
        args: Arguments {
            args: vec![param("a", 1)],
            defaults: vec![],
            vararg: None,
            kwarg: None,
        },
        decorator_list: vec![],
        body: vec![Stmt::Return(Return {
            value: Some(load("a", 2)),
            span: sp(2),
        })],
        span: sp(1),
    })
}

/// One `global` directive at module level, one inside a function body, one
/// inside a class body, with ascending line numbers.
pub(crate) fn globals_at_three_depths() -> Module {
    Module {
        body: vec![
            Stmt::Global(Global {
                names: vec!["counter".to_owned()],
                span: sp(1),
            }),
            Stmt::FunctionDef(FunctionDef {
                name: "bump".to_owned(),
                args: Arguments {
                    args: vec![],
                    defaults: vec![],
                    vararg: None,
                    kwarg: None,
                },
                decorator_list: vec![],
                body: vec![Stmt::Global(Global {
                    names: vec!["counter".to_owned()],
                    span: sp(3),
                })],
                span: sp(2),
            }),
            Stmt::ClassDef(ClassDef {
                name: "Counter".to_owned(),
                bases: vec![],
                decorator_list: vec![],
                body: vec![Stmt::Global(Global {
                    names: vec!["counter".to_owned()],
                    span: sp(5),
                })],
                span: sp(4),
            }),
        ],
    }
}

/// A module exercising every node kind at least once.
pub(crate) fn everything_module() -> Module {
    let import = Stmt::Import(Import {
        names: vec![
            Alias {
                name: "os".to_owned(),
                asname: None,
                span: sp(1),
            },
            Alias {
                name: "sys".to_owned(),
                asname: Some("system".to_owned()),
                span: sp(1),
            },
        ],
        span: sp(1),
    });

    let main_args = Arguments {
        args: vec![param("a", 3), param("b", 3)],
        defaults: vec![int(1, 3)],
        vararg: Some("rest".to_owned()),
        kwarg: Some(Box::new(param("kw", 3))),
    };

    let attr_assign = Stmt::Assign(Assign {
        targets: vec![Expr::Attribute(Attribute {
            value: Box::new(load("obj", 6)),
            attr: "field".to_owned(),
            ctx: ExprContext::Store,
            span: sp(6),
        })],
        value: Expr::Subscript(Subscript {
            value: Box::new(load("data", 6)),
            slice: Box::new(Expr::Slice(Slice {
                lower: Some(Box::new(int(0, 6))),
                upper: Some(Box::new(load("n", 6))),
                step: None,
                span: sp(6),
            })),
            ctx: ExprContext::Load,
            span: sp(6),
        }),
        span: sp(6),
    });

    let index_assign = Stmt::Assign(Assign {
        targets: vec![store("item", 7)],
        value: Expr::Subscript(Subscript {
            value: Box::new(load("data", 7)),
            slice: Box::new(Expr::Index(Index {
                value: Box::new(int(0, 7)),
                span: sp(7),
            })),
            ctx: ExprContext::Load,
            span: sp(7),
        }),
        span: sp(7),
    });

    let unpack_assign = Stmt::Assign(Assign {
        targets: vec![Expr::Tuple(Tuple {
            elts: vec![store("p", 8), store("q", 8)],
            ctx: ExprContext::Store,
            span: sp(8),
        })],
        value: Expr::List(List {
            elts: vec![int(1, 8), int(2, 8)],
            ctx: ExprContext::Load,
            span: sp(8),
        }),
        span: sp(8),
    });

    let call_stmt = Stmt::ExprStmt(ExprStmt {
        value: Expr::Call(Call {
            func: Box::new(Expr::Attribute(Attribute {
                value: Box::new(load("log", 9)),
                attr: "write".to_owned(),
                ctx: ExprContext::Load,
                span: sp(9),
            })),
            args: vec![str_lit("msg", 9)],
            keywords: vec![Keyword {
                arg: "level".to_owned(),
                value: Box::new(int(2, 9)),
            }],
            starargs: Some(Box::new(load("rest", 9))),
            kwargs: Some(Box::new(load("kw", 9))),
            span: sp(9),
        }),
        span: sp(9),
    });

    let print_stmt = Stmt::Print(Print {
        dest: Some(load("stderr", 10)),
        values: vec![str_lit("x =", 10), load("x", 10)],
        nl: false,
        span: sp(10),
    });

    let loop_body = Stmt::If(If {
        test: Expr::BoolOp(BoolOp {
            op: BoolOperator::And,
            values: vec![
                Expr::Compare(Compare {
                    left: Box::new(load("i", 12)),
                    ops: vec![CmpOp::Gt],
                    comparators: vec![int(0, 12)],
                    span: sp(12),
                }),
                load("flag", 12),
            ],
            span: sp(12),
        }),
        body: vec![Stmt::Continue(Continue { span: sp(13) })],
        orelse: vec![Stmt::Break(Break { span: sp(15) })],
        span: sp(12),
    });

    let for_stmt = Stmt::For(For {
        target: store("i", 11),
        iter: Expr::Call(Call {
            func: Box::new(load("range", 11)),
            args: vec![load("n", 11)],
            keywords: vec![],
            starargs: None,
            kwargs: None,
            span: sp(11),
        }),
        body: vec![loop_body],
        orelse: vec![Stmt::Pass(Pass { span: sp(17) })],
        span: sp(11),
    });

    let while_stmt = Stmt::While(While {
        test: Expr::UnaryOp(UnaryOp {
            op: UnaryOperator::Not,
            operand: Box::new(load("done", 18)),
            span: sp(18),
        }),
        body: vec![Stmt::AugAssign(AugAssign {
            target: store("x", 19),
            op: Operator::Add,
            value: int(1, 19),
            span: sp(19),
        })],
        orelse: vec![],
        span: sp(18),
    });

    let with_stmt = Stmt::With(With {
        context_expr: Expr::Call(Call {
            func: Box::new(load("open", 20)),
            args: vec![str_lit("out.txt", 20)],
            keywords: vec![],
            starargs: None,
            kwargs: None,
            span: sp(20),
        }),
        optional_vars: Some(store("f", 20)),
        body: vec![Stmt::ExprStmt(ExprStmt {
            value: Expr::Dict(Dict {
                keys: vec![str_lit("ratio", 21)],
                values: vec![float(2.5, 21)],
                span: sp(21),
            }),
            span: sp(21),
        })],
        span: sp(20),
    });

    let return_stmt = Stmt::Return(Return {
        value: Some(Expr::ListComp(ListComp {
            elt: Box::new(Expr::BinOp(BinOp {
                op: Operator::Mult,
                left: Box::new(load("v", 22)),
                right: Box::new(int(2, 22)),
                span: sp(22),
            })),
            generators: vec![Comprehension {
                target: Box::new(store("v", 22)),
                iter: Box::new(load("items", 22)),
                ifs: vec![Expr::Compare(Compare {
                    left: Box::new(load("v", 22)),
                    ops: vec![CmpOp::NotEq],
                    comparators: vec![int(0, 22)],
                    span: sp(22),
                })],
            }],
            span: sp(22),
        })),
        span: sp(22),
    });

    let main = Stmt::FunctionDef(FunctionDef {
        name: "main".to_owned(),
        args: main_args,
        decorator_list: vec![load("traced", 2)],
        body: vec![
            Stmt::Global(Global {
                names: vec!["counter".to_owned()],
                span: sp(4),
            }),
            ifexp_assign_at(5),
            attr_assign,
            index_assign,
            unpack_assign,
            call_stmt,
            print_stmt,
            for_stmt,
            while_stmt,
            with_stmt,
            return_stmt,
        ],
        span: sp(3),
    });

    let widget = Stmt::ClassDef(ClassDef {
        name: "Widget".to_owned(),
        bases: vec![load("object", 24)],
        decorator_list: vec![],
        body: vec![Stmt::Assign(Assign {
            targets: vec![store("area", 25)],
            value: Expr::Lambda(Lambda {
                args: Arguments {
                    args: vec![param("w", 25), param("h", 25)],
                    defaults: vec![],
                    vararg: None,
                    kwarg: None,
                },
                body: Box::new(Expr::BinOp(BinOp {
                    op: Operator::Mult,
                    left: Box::new(load("w", 25)),
                    right: Box::new(load("h", 25)),
                    span: sp(25),
                })),
                span: sp(25),
            }),
            span: sp(25),
        })],
        span: sp(24),
    });

    let branch = Stmt::Branch(Branch::new(
        load("ready", 27),
        BlockId::new(1),
        BlockId::new(2),
    ));
    let jump = Stmt::Jump(Jump::new(BlockId::new(0)));

    Module {
        body: vec![import, main, widget, branch, jump],
    }
}

fn ifexp_assign_at(line: u32) -> Stmt {
    Stmt::Assign(Assign {
        targets: vec![store("x", line)],
        value: Expr::IfExp(IfExp {
            test: Box::new(load("y", line)),
            body: Box::new(int(1, line)),
            orelse: Box::new(int(2, line)),
            span: sp(line),
        }),
        span: sp(line),
    })
}
