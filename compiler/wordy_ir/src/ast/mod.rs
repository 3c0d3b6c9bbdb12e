//! AST node definitions.
//!
//! Two closed enums cover the whole language: `Stmt` for nodes executed for
//! their effects, `Expr` for nodes that compute a number. Interpreter and
//! emitter dispatch over them with exhaustive `match`, so adding a kind is a
//! compile error everywhere it still needs handling.
//!
//! All types derive `Clone, Eq, PartialEq, Hash, Debug`. Equality is deep and
//! kind-discriminated: `Loop { body }` never equals `Block { .. }`, even when
//! the children line up.

mod number;
mod operators;

pub use number::Number;
pub use operators::{BinaryOp, ComparisonOp};

/// A statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    /// Ordered sequence of statements.
    Block { statements: Vec<Stmt> },

    /// `variable = value`
    Assignment { variable: String, value: Box<Expr> },

    /// Two-way branch on a comparison of two expressions.
    ///
    /// Both branches are always present; a missing `else` is an empty block.
    Conditional {
        operator: ComparisonOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        if_true: Box<Stmt>,
        if_false: Box<Stmt>,
    },

    /// Repeat `body` until a `LoopExit` inside it runs.
    ///
    /// There is no condition and no counter. The only way out is the
    /// loop-exit outcome, which is intercepted by the nearest enclosing loop.
    Loop { body: Box<Stmt> },

    /// Leave the nearest enclosing `Loop`.
    LoopExit,

    /// Write the value of an expression as one line of output.
    Print { value: Box<Expr> },
}

/// An expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Numeric literal.
    Constant(Number),

    /// Reference to a variable in the evaluation context.
    Variable { name: String },

    /// Arithmetic on two operands.
    Binary {
        operator: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Stmt {
    /// The empty block, used for absent `else` branches.
    pub fn empty() -> Self {
        Stmt::Block {
            statements: Vec::new(),
        }
    }

    pub fn block(statements: impl IntoIterator<Item = Stmt>) -> Self {
        Stmt::Block {
            statements: statements.into_iter().collect(),
        }
    }

    pub fn assign(variable: impl Into<String>, value: Expr) -> Self {
        Stmt::Assignment {
            variable: variable.into(),
            value: Box::new(value),
        }
    }

    pub fn conditional(
        operator: ComparisonOp,
        lhs: Expr,
        rhs: Expr,
        if_true: Stmt,
        if_false: Stmt,
    ) -> Self {
        Stmt::Conditional {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    /// Conditional with an empty `else` branch.
    pub fn if_then(operator: ComparisonOp, lhs: Expr, rhs: Expr, if_true: Stmt) -> Self {
        Self::conditional(operator, lhs, rhs, if_true, Self::empty())
    }

    pub fn loop_node(body: Stmt) -> Self {
        Stmt::Loop {
            body: Box::new(body),
        }
    }

    pub fn print(value: Expr) -> Self {
        Stmt::Print {
            value: Box::new(value),
        }
    }

    /// Stable discriminant name of this statement kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Block { .. } => "Block",
            Stmt::Assignment { .. } => "Assignment",
            Stmt::Conditional { .. } => "Conditional",
            Stmt::Loop { .. } => "Loop",
            Stmt::LoopExit => "LoopExit",
            Stmt::Print { .. } => "Print",
        }
    }
}

impl Expr {
    pub fn constant(value: f64) -> Self {
        Expr::Constant(Number::new(value))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable { name: name.into() }
    }

    pub fn binary(operator: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Stable discriminant name of this expression kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Expr::Constant(_) => "Constant",
            Expr::Variable { .. } => "Variable",
            Expr::Binary { .. } => "BinaryExpression",
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::constant(value)
    }
}
