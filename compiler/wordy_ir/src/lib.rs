//! Wordy IR - AST types for the Wordy language.
//!
//! This crate contains the tree both back ends consume:
//! - Statement and expression nodes (`Stmt`, `Expr`) as closed enums
//! - A uniform child view (`NodeRef`, `ChildRole`, `Children`) used for
//!   generic walks, tree dumps, and the loop-exit structure check
//! - A `Visitor` for read-only traversal
//! - Stack growth for recursion over deeply nested trees
//!
//! # Design Philosophy
//!
//! - **Owned trees**: every child is boxed and owned by exactly one parent,
//!   so there is no sharing and no cycles. Trees are never mutated after
//!   construction.
//! - **Structural identity**: equality and hashing are derived, so two nodes
//!   are equal iff they have the same kind, payload, and children.
//!
//! Constants store their value as `u64` bits for `Eq`/`Hash` compatibility.

pub mod ast;
pub mod check;
pub mod dump;
pub mod node;
mod stack;
pub mod visitor;

pub use ast::{BinaryOp, ComparisonOp, Expr, Number, Stmt};
pub use check::{check_loop_exits, NodePath, StructureError};
pub use dump::dump;
pub use node::{ChildRole, Children, NodeRef};
pub use stack::ensure_sufficient_stack;
pub use visitor::{walk_children, walk_expr, walk_stmt, Visitor};
