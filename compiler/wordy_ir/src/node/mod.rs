//! Uniform child view over statements and expressions.
//!
//! `children()` is the one place that knows where each kind keeps its
//! children. Generic walks, the tree dump, and the loop-exit check are all
//! driven by it, so they never match on node kinds themselves.

use std::fmt;

use smallvec::SmallVec;

use crate::ast::{Expr, Stmt};

/// Name under which a parent holds a child.
///
/// Fixed kinds use a stable role name (`"body"`, `"lhs"`, ...). Blocks hold
/// a variable number of children and name them by position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ChildRole {
    Named(&'static str),
    Index(usize),
}

impl fmt::Display for ChildRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildRole::Named(name) => f.write_str(name),
            ChildRole::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A borrowed node of either role.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeRef<'a> {
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

/// Ordered children of one node, in emission order.
pub type Children<'a> = SmallVec<[(ChildRole, NodeRef<'a>); 4]>;

impl<'a> From<&'a Stmt> for NodeRef<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        NodeRef::Stmt(stmt)
    }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        NodeRef::Expr(expr)
    }
}

impl<'a> NodeRef<'a> {
    pub fn children(self) -> Children<'a> {
        match self {
            NodeRef::Stmt(stmt) => stmt.children(),
            NodeRef::Expr(expr) => expr.children(),
        }
    }

    pub const fn kind_name(self) -> &'static str {
        match self {
            NodeRef::Stmt(stmt) => stmt.kind_name(),
            NodeRef::Expr(expr) => expr.kind_name(),
        }
    }

    /// Kind name plus scalar payload, e.g. `Assignment (x)` or `Constant (3.0)`.
    pub fn label(self) -> String {
        match self {
            NodeRef::Stmt(Stmt::Assignment { variable, .. }) => {
                format!("Assignment ({variable})")
            }
            NodeRef::Stmt(Stmt::Conditional { operator, .. }) => {
                format!("Conditional ({})", operator.as_symbol())
            }
            NodeRef::Stmt(stmt) => stmt.kind_name().to_string(),
            NodeRef::Expr(Expr::Constant(value)) => format!("Constant ({value})"),
            NodeRef::Expr(Expr::Variable { name }) => format!("Variable ({name})"),
            NodeRef::Expr(Expr::Binary { operator, .. }) => {
                format!("BinaryExpression ({})", operator.as_symbol())
            }
        }
    }
}

impl Stmt {
    /// Role-named children of this statement.
    pub fn children(&self) -> Children<'_> {
        let mut children = Children::new();
        match self {
            Stmt::Block { statements } => {
                children.extend(
                    statements
                        .iter()
                        .enumerate()
                        .map(|(i, stmt)| (ChildRole::Index(i), NodeRef::Stmt(stmt))),
                );
            }
            Stmt::Assignment { value, .. } | Stmt::Print { value } => {
                children.push((ChildRole::Named("value"), NodeRef::Expr(value)));
            }
            Stmt::Conditional {
                lhs,
                rhs,
                if_true,
                if_false,
                ..
            } => {
                children.push((ChildRole::Named("lhs"), NodeRef::Expr(lhs)));
                children.push((ChildRole::Named("rhs"), NodeRef::Expr(rhs)));
                children.push((ChildRole::Named("ifTrue"), NodeRef::Stmt(if_true)));
                children.push((ChildRole::Named("ifFalse"), NodeRef::Stmt(if_false)));
            }
            Stmt::Loop { body } => {
                children.push((ChildRole::Named("body"), NodeRef::Stmt(body)));
            }
            Stmt::LoopExit => {}
        }
        children
    }
}

impl Expr {
    /// Role-named children of this expression.
    pub fn children(&self) -> Children<'_> {
        let mut children = Children::new();
        match self {
            Expr::Constant(_) | Expr::Variable { .. } => {}
            Expr::Binary { lhs, rhs, .. } => {
                children.push((ChildRole::Named("lhs"), NodeRef::Expr(lhs)));
                children.push((ChildRole::Named("rhs"), NodeRef::Expr(rhs)));
            }
        }
        children
    }
}

#[cfg(test)]
mod tests;
