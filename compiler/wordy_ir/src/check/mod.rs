//! Static loop-exit check.
//!
//! A `LoopExit` with no enclosing `Loop` is a program-structure error. The
//! interpreter only notices it when the exit actually runs; this check finds
//! it up front, whether or not the statement is reachable. Program emission
//! runs it unconditionally because the host language rejects a `break` that
//! is not inside a loop.

use std::fmt;

use crate::ast::Stmt;
use crate::node::{ChildRole, NodeRef};
use crate::stack::ensure_sufficient_stack;

/// Path from the root to a node, as the roles taken at each step.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct NodePath(Vec<ChildRole>);

impl NodePath {
    pub fn roles(&self) -> &[ChildRole] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for (i, role) in self.roles().iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{role}")?;
        }
        Ok(())
    }
}

/// Tree-shape errors found before running or emitting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("loop exit outside of any loop at {path}")]
    LoopExitOutsideLoop { path: NodePath },
}

/// Report the first `LoopExit` (in pre-order) that has no enclosing `Loop`.
pub fn check_loop_exits(root: &Stmt) -> Result<(), StructureError> {
    let mut path = Vec::new();
    check_stmt(root, false, &mut path)
}

fn check_stmt(
    stmt: &Stmt,
    inside_loop: bool,
    path: &mut Vec<ChildRole>,
) -> Result<(), StructureError> {
    ensure_sufficient_stack(|| {
        if matches!(stmt, Stmt::LoopExit) && !inside_loop {
            return Err(StructureError::LoopExitOutsideLoop {
                path: NodePath(path.clone()),
            });
        }

        let inside_loop = inside_loop || matches!(stmt, Stmt::Loop { .. });
        for (role, child) in stmt.children() {
            // Expressions cannot contain statements.
            if let NodeRef::Stmt(child) = child {
                path.push(role);
                check_stmt(child, inside_loop, path)?;
                path.pop();
            }
        }
        Ok(())
    })
}
