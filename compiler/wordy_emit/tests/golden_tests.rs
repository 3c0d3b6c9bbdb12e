//! Golden tests for whole-program emission.
//!
//! Each program is built as a tree and emitted with its own class name; the
//! output must match the file in `tests/golden/` byte for byte.

use pretty_assertions::assert_eq;
use wordy_emit::{emit_program, EmitConfig};
use wordy_ir::{BinaryOp, ComparisonOp, Expr, Stmt};

fn add(lhs: Expr, rhs: f64) -> Expr {
    Expr::binary(BinaryOp::Add, lhs, Expr::constant(rhs))
}

fn assert_golden(root: &Stmt, class_name: &str, expected: &str) {
    let config = EmitConfig::default().with_class_name(class_name);
    match emit_program(root, &config) {
        Ok(output) => assert_eq!(output, expected),
        Err(err) => panic!("{class_name} failed to emit: {err}"),
    }
}

#[test]
fn count_to_three() {
    let root = Stmt::block([
        Stmt::assign("x", Expr::constant(0.0)),
        Stmt::loop_node(Stmt::block([
            Stmt::print(Expr::var("x")),
            Stmt::assign("x", add(Expr::var("x"), 1.0)),
            Stmt::if_then(
                ComparisonOp::GtEq,
                Expr::var("x"),
                Expr::constant(3.0),
                Stmt::LoopExit,
            ),
        ])),
    ]);
    assert_golden(
        &root,
        "CountToThree",
        include_str!("golden/count_to_three.java"),
    );
}

#[test]
fn nested_loops() {
    let inner_loop = Stmt::loop_node(Stmt::block([
        Stmt::print(Expr::binary(
            BinaryOp::Add,
            Expr::binary(BinaryOp::Mul, Expr::var("outer"), Expr::constant(10.0)),
            Expr::var("inner"),
        )),
        Stmt::assign("inner", add(Expr::var("inner"), 1.0)),
        Stmt::if_then(
            ComparisonOp::Eq,
            Expr::var("inner"),
            Expr::constant(2.0),
            Stmt::LoopExit,
        ),
    ]));
    let root = Stmt::block([
        Stmt::assign("outer", Expr::constant(0.0)),
        Stmt::loop_node(Stmt::block([
            Stmt::assign("inner", Expr::constant(0.0)),
            inner_loop,
            Stmt::assign("outer", add(Expr::var("outer"), 1.0)),
            Stmt::if_then(
                ComparisonOp::Eq,
                Expr::var("outer"),
                Expr::constant(2.0),
                Stmt::LoopExit,
            ),
        ])),
        Stmt::print(Expr::var("outer")),
    ]);
    assert_golden(
        &root,
        "NestedLoops",
        include_str!("golden/nested_loops.java"),
    );
}

#[test]
fn exit_in_else() {
    let root = Stmt::block([
        Stmt::assign("n", Expr::constant(1.0)),
        Stmt::loop_node(Stmt::block([
            Stmt::conditional(
                ComparisonOp::Lt,
                Expr::var("n"),
                Expr::constant(100.0),
                Stmt::assign(
                    "n",
                    Expr::binary(BinaryOp::Pow, Expr::var("n"), Expr::constant(2.0)),
                ),
                Stmt::LoopExit,
            ),
            Stmt::assign("n", add(Expr::var("n"), 1.0)),
        ])),
        Stmt::print(Expr::var("n")),
    ]);
    assert_golden(
        &root,
        "ExitInElse",
        include_str!("golden/exit_in_else.java"),
    );
}
