use super::*;
use crate::ast::{BinaryOp, ComparisonOp};

fn roles(children: &Children<'_>) -> Vec<String> {
    children.iter().map(|(role, _)| role.to_string()).collect()
}

#[test]
fn loop_has_single_body_child() {
    let body = Stmt::print(Expr::var("x"));
    let node = Stmt::loop_node(body.clone());
    let children = node.children();
    assert_eq!(children.len(), 1);
    assert_eq!(
        children[0],
        (ChildRole::Named("body"), NodeRef::Stmt(&body))
    );
}

#[test]
fn loop_exit_has_no_children() {
    assert!(Stmt::LoopExit.children().is_empty());
}

#[test]
fn block_children_are_indexed_in_order() {
    let block = Stmt::block([Stmt::LoopExit, Stmt::empty(), Stmt::LoopExit]);
    assert_eq!(roles(&block.children()), ["0", "1", "2"]);
}

#[test]
fn conditional_children_order() {
    let stmt = Stmt::if_then(
        ComparisonOp::Lt,
        Expr::var("a"),
        Expr::constant(1.0),
        Stmt::LoopExit,
    );
    assert_eq!(roles(&stmt.children()), ["lhs", "rhs", "ifTrue", "ifFalse"]);
}

#[test]
fn expression_children() {
    let expr = Expr::binary(BinaryOp::Mul, Expr::var("a"), Expr::var("b"));
    assert_eq!(roles(&expr.children()), ["lhs", "rhs"]);
    assert!(Expr::var("a").children().is_empty());
    assert!(Expr::constant(1.0).children().is_empty());
}

#[test]
fn children_are_side_effect_free() {
    let node = Stmt::loop_node(Stmt::assign("x", Expr::constant(2.0)));
    let before = node.clone();
    let first = node.children().len();
    let second = node.children().len();
    assert_eq!(first, second);
    assert_eq!(node, before);
}

#[test]
fn labels_carry_payload() {
    let assign = Stmt::assign("x", Expr::constant(3.0));
    assert_eq!(NodeRef::from(&assign).label(), "Assignment (x)");
    let cond = Stmt::if_then(
        ComparisonOp::GtEq,
        Expr::var("x"),
        Expr::constant(3.0),
        Stmt::LoopExit,
    );
    assert_eq!(NodeRef::from(&cond).label(), "Conditional (>=)");
    let constant = Expr::constant(3.0);
    assert_eq!(NodeRef::from(&constant).label(), "Constant (3.0)");
    let looped = Stmt::loop_node(Stmt::LoopExit);
    assert_eq!(NodeRef::from(&looped).label(), "Loop");
}
