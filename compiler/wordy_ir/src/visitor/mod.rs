//! AST Visitor Pattern
//!
//! Read-only traversal of a Wordy tree. The visitor may mutate its own state;
//! the tree stays immutable.
//!
//! Default implementations call the `walk_*` functions, which descend through
//! [`Stmt::children`] / [`Expr::children`] in role order. Override `visit_*`
//! to add behavior at specific nodes, and call the matching `walk_*` to keep
//! descending.
//!
//! # Example
//!
//! ```text
//! struct CountLoops {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountLoops {
//!     fn visit_stmt(&mut self, stmt: &'ast Stmt) {
//!         if matches!(stmt, Stmt::Loop { .. }) {
//!             self.count += 1;
//!         }
//!         walk_stmt(self, stmt);
//!     }
//! }
//! ```

use crate::ast::{Expr, Stmt};
use crate::node::NodeRef;
use crate::stack::ensure_sufficient_stack;

/// AST Visitor trait.
pub trait Visitor<'ast> {
    /// Visit a statement.
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
}

/// Visit every child of `stmt`.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    walk_children(visitor, NodeRef::Stmt(stmt));
}

/// Visit every child of `expr`.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    walk_children(visitor, NodeRef::Expr(expr));
}

/// Dispatch each child of `node` to the matching `visit_*` method.
pub fn walk_children<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: NodeRef<'ast>) {
    ensure_sufficient_stack(|| {
        for (_, child) in node.children() {
            match child {
                NodeRef::Stmt(stmt) => visitor.visit_stmt(stmt),
                NodeRef::Expr(expr) => visitor.visit_expr(expr),
            }
        }
    });
}
