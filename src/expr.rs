//! Boolean expression trees.
//!
//! An [`Expr`] is an immutable formula over puzzle variables, built from
//! variables, a single unary connective ([`Expr::Not`]) and eight binary
//! connectives ([`Op`]).
//!
//! ## Rendering
//!
//! The textual form is fully parenthesised below the top level:
//!
//! ```text
//! render(B ∧ ¬C, false) = "B∧¬C"
//! render(B ∧ ¬C, true)  = "(B∧¬C)"
//! ```
//!
//! Operands of a binary node are always rendered parenthesised, whatever the
//! parent's own flag, so nested formulas never need precedence rules.

use std::collections::BTreeSet;
use std::fmt::{self, Write};

use crate::types::{Assignment, Var};

/// Glyph used for negation.
pub const NOT_GLYPH: char = '¬';

/// Binary boolean connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Op {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
    Implies,
    ImpliedBy,
}

impl Op {
    /// All operators, in declaration order.
    pub const ALL: [Op; 8] = [
        Op::And,
        Op::Or,
        Op::Xor,
        Op::Nand,
        Op::Nor,
        Op::Xnor,
        Op::Implies,
        Op::ImpliedBy,
    ];

    /// Applies the operator's truth table.
    pub fn apply(self, l: bool, r: bool) -> bool {
        match self {
            Op::And => l && r,
            Op::Or => l || r,
            Op::Xor => l ^ r,
            Op::Nand => !(l && r),
            Op::Nor => !(l || r),
            Op::Xnor => !(l ^ r),
            Op::Implies => !l || r,
            Op::ImpliedBy => !r || l,
        }
    }

    /// Glyph used when rendering the operator.
    pub fn glyph(self) -> char {
        match self {
            Op::And => '∧',
            Op::Or => '∨',
            Op::Xor => '⊻',
            Op::Nand => '|',
            Op::Nor => '↓',
            Op::Xnor => '↔',
            Op::Implies => '→',
            Op::ImpliedBy => '←',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A boolean expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Variable leaf
    Var(Var),
    /// Negation
    Not(Box<Expr>),
    /// Binary connective: left, right, operator
    Binary(Box<Expr>, Box<Expr>, Op),
}

impl Expr {
    pub fn var(var: Var) -> Self {
        Expr::Var(var)
    }

    /// Wraps `inner` in a negation. No simplification is performed.
    pub fn not(inner: Self) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn binary(lhs: Self, rhs: Self, op: Op) -> Self {
        Expr::Binary(Box::new(lhs), Box::new(rhs), op)
    }

    /// Evaluate the expression under the given assignment.
    pub fn eval(&self, assignment: Assignment) -> bool {
        match self {
            Expr::Var(v) => assignment.get(*v),
            Expr::Not(e) => !e.eval(assignment),
            Expr::Binary(l, r, op) => op.apply(l.eval(assignment), r.eval(assignment)),
        }
    }

    /// Render the expression, wrapping a top-level binary node in parentheses
    /// when `parenthesize` is set.
    pub fn render(&self, parenthesize: bool) -> String {
        Rendered(self, parenthesize).to_string()
    }

    fn write_to(&self, w: &mut fmt::Formatter<'_>, parenthesize: bool) -> fmt::Result {
        match self {
            Expr::Var(v) => write!(w, "{}", v),
            Expr::Not(e) => {
                w.write_char(NOT_GLYPH)?;
                e.write_to(w, true)
            }
            Expr::Binary(l, r, op) => {
                if parenthesize {
                    w.write_char('(')?;
                }
                l.write_to(w, true)?;
                w.write_char(op.glyph())?;
                r.write_to(w, true)?;
                if parenthesize {
                    w.write_char(')')?;
                }
                Ok(())
            }
        }
    }

    /// Depth of the expression tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::Binary(l, r, _) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::Binary(l, r, _) => 1 + l.size() + r.size(),
        }
    }

    /// Number of [`Expr::Not`] nodes anywhere in the tree.
    pub fn count_not(&self) -> usize {
        match self {
            Expr::Var(_) => 0,
            Expr::Not(e) => 1 + e.count_not(),
            Expr::Binary(l, r, _) => l.count_not() + r.count_not(),
        }
    }

    /// Whether `var` occurs anywhere in the tree.
    pub fn mentions(&self, var: Var) -> bool {
        match self {
            Expr::Var(v) => *v == var,
            Expr::Not(e) => e.mentions(var),
            Expr::Binary(l, r, _) => l.mentions(var) || r.mentions(var),
        }
    }

    /// Set of variables occurring in the tree.
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<Var>) {
        match self {
            Expr::Var(v) => {
                vars.insert(*v);
            }
            Expr::Not(e) => e.collect_variables(vars),
            Expr::Binary(l, r, _) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, false)
    }
}

struct Rendered<'a>(&'a Expr, bool);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_to(f, self.1)
    }
}

// ============================================================================
// Tests
// ============================================================================
