use super::*;
use crate::emitter::StringEmitter;
use wordy_ir::{BinaryOp, ComparisonOp, Expr};

fn render_at(stmt: &Stmt, depth: usize) -> String {
    let mut out = StringEmitter::new();
    emit_stmt(stmt, &mut out, &EmitConfig::default(), depth);
    out.output()
}

fn render(stmt: &Stmt) -> String {
    render_at(stmt, 0)
}

fn counting_loop() -> Stmt {
    Stmt::loop_node(Stmt::block([
        Stmt::print(Expr::var("x")),
        Stmt::assign(
            "x",
            Expr::binary(BinaryOp::Add, Expr::var("x"), Expr::constant(1.0)),
        ),
        Stmt::if_then(
            ComparisonOp::GtEq,
            Expr::var("x"),
            Expr::constant(3.0),
            Stmt::LoopExit,
        ),
    ]))
}

mod loop_emission {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loop_with_block_body() {
        let expected = "\
while (true)
{
    System.out.println(x);
    x = (x + 1.0);
    if (x >= 3.0)
        break;
}
";
        assert_eq!(render(&counting_loop()), expected);
    }

    #[test]
    fn loop_with_single_statement_body() {
        let tree = Stmt::loop_node(Stmt::LoopExit);
        assert_eq!(render(&tree), "while (true)\n    break;\n");
    }

    #[test]
    fn header_is_followed_directly_by_body_text() {
        let bodies = [
            Stmt::LoopExit,
            Stmt::print(Expr::var("x")),
            Stmt::block([Stmt::LoopExit]),
            counting_loop(),
        ];
        for body in bodies {
            let nested_depth = usize::from(!matches!(body, Stmt::Block { .. }));
            let expected = format!("{LOOP_HEADER}\n{}", render_at(&body, nested_depth));
            assert_eq!(render(&Stmt::loop_node(body)), expected);
        }
    }

    #[test]
    fn nested_loops_indent_by_depth() {
        let tree = Stmt::loop_node(Stmt::loop_node(Stmt::LoopExit));
        assert_eq!(
            render(&tree),
            "while (true)\n    while (true)\n        break;\n"
        );
    }

    #[test]
    fn emission_is_deterministic() {
        let tree = counting_loop();
        assert_eq!(render(&tree), render(&tree));
    }

    #[test]
    fn custom_indent_size() {
        let mut out = StringEmitter::new();
        let config = EmitConfig::default().with_indent_size(2);
        emit_stmt(&Stmt::loop_node(Stmt::LoopExit), &mut out, &config, 1);
        assert_eq!(out.output(), "  while (true)\n    break;\n");
    }
}

mod statement_emission {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_else_is_omitted() {
        let tree = Stmt::if_then(
            ComparisonOp::Lt,
            Expr::var("a"),
            Expr::var("b"),
            Stmt::print(Expr::var("a")),
        );
        assert_eq!(render(&tree), "if (a < b)\n    System.out.println(a);\n");
    }

    #[test]
    fn then_branch_is_braced_when_else_follows() {
        // if (a == 0) { if (b == 0) print a } else print b
        let inner = Stmt::if_then(
            ComparisonOp::Eq,
            Expr::var("b"),
            Expr::constant(0.0),
            Stmt::print(Expr::var("a")),
        );
        let tree = Stmt::conditional(
            ComparisonOp::Eq,
            Expr::var("a"),
            Expr::constant(0.0),
            inner,
            Stmt::print(Expr::var("b")),
        );
        let expected = "\
if (a == 0.0)
{
    if (b == 0.0)
        System.out.println(a);
}
else
    System.out.println(b);
";
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn unreachable_statements_are_not_emitted() {
        let tree = Stmt::loop_node(Stmt::block([Stmt::LoopExit, Stmt::print(Expr::constant(1.0))]));
        assert_eq!(render(&tree), "while (true)\n{\n    break;\n}\n");
    }

    #[test]
    fn statements_after_endless_loop_are_not_emitted() {
        let tree = Stmt::block([
            Stmt::loop_node(Stmt::print(Expr::var("x"))),
            Stmt::print(Expr::constant(2.0)),
        ]);
        assert_eq!(
            render(&tree),
            "{\n    while (true)\n        System.out.println(x);\n}\n"
        );
    }

    #[test]
    fn statements_after_exiting_loop_are_emitted() {
        let tree = Stmt::block([
            Stmt::loop_node(Stmt::LoopExit),
            Stmt::print(Expr::constant(2.0)),
        ]);
        assert_eq!(
            render(&tree),
            "{\n    while (true)\n        break;\n    System.out.println(2.0);\n}\n"
        );
    }
}
