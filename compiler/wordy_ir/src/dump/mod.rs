//! Tree printing for debugging.
//!
//! [`dump`] renders one node per line, indented by depth, as
//! `role: Label`. The compact `Display` form renders a node on a single line
//! as `Kind { role: child, ... }`.

use std::fmt::{self, Write};

use crate::ast::{Expr, Stmt};
use crate::node::{ChildRole, NodeRef};
use crate::stack::ensure_sufficient_stack;

/// Spaces per nesting level in [`dump`] output.
const DUMP_INDENT: usize = 2;

/// Render `node` and its descendants as an indented tree.
///
/// ```text
/// Loop
///   body: Block
///     0: Print
///       value: Variable (x)
///     1: LoopExit
/// ```
pub fn dump<'a>(node: impl Into<NodeRef<'a>>) -> String {
    let mut out = String::new();
    dump_into(&mut out, None, node.into(), 0);
    out
}

fn dump_into(out: &mut String, role: Option<ChildRole>, node: NodeRef<'_>, depth: usize) {
    ensure_sufficient_stack(|| {
        out.extend(std::iter::repeat(' ').take(depth * DUMP_INDENT));
        if let Some(role) = role {
            // Writing to a String cannot fail.
            let _ = write!(out, "{role}: ");
        }
        out.push_str(&node.label());
        out.push('\n');
        for (child_role, child) in node.children() {
            dump_into(out, Some(child_role), child, depth + 1);
        }
    });
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.write_str(&self.label())?;
            let children = self.children();
            if children.is_empty() {
                return Ok(());
            }
            f.write_str(" { ")?;
            for (i, (role, child)) in children.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{role}: {child}")?;
            }
            f.write_str(" }")
        })
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        NodeRef::Stmt(self).fmt(f)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        NodeRef::Expr(self).fmt(f)
    }
}
