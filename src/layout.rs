//! Left-to-right layout of rendered expressions.
//!
//! The layout pass visits the same tokens, in the same order, as
//! [`Expr::render`]. Each token is handed to a caller-supplied placement
//! callback `place(token, x) -> advance`, which creates whatever visual
//! element it needs at horizontal offset `x` and reports how much width it
//! consumed. The pass itself has no side effects.

use crate::expr::{Expr, NOT_GLYPH};

impl Expr {
    /// Lay out the expression starting at offset `x`, calling `place` once per
    /// visible token, and return the total advance consumed.
    ///
    /// Parentheses are emitted for the current node only when `parenthesize`
    /// is set; children are always laid out parenthesised, exactly as in
    /// [`Expr::render`].
    pub fn instantiate<F>(&self, x: f32, parenthesize: bool, place: &mut F) -> f32
    where
        F: FnMut(char, f32) -> f32,
    {
        match self {
            Expr::Var(v) => place(v.letter(), x),
            Expr::Not(e) => {
                let w = place(NOT_GLYPH, x);
                w + e.instantiate(x + w, true, place)
            }
            Expr::Binary(l, r, op) => {
                let mut w = 0.0;
                if parenthesize {
                    w += place('(', x);
                }
                w += l.instantiate(x + w, true, place);
                w += place(op.glyph(), x + w);
                w += r.instantiate(x + w, true, place);
                if parenthesize {
                    w += place(')', x + w);
                }
                w
            }
        }
    }

    /// Total width of the laid-out expression, given the advance of each token.
    pub fn measure<F>(&self, parenthesize: bool, advance: F) -> f32
    where
        F: Fn(char) -> f32,
    {
        self.instantiate(0.0, parenthesize, &mut |c, _| advance(c))
    }
}

/// Scale factor that fits content of `width` into `max_width`, never enlarging.
pub fn fit_scale(width: f32, max_width: f32) -> f32 {
    if width <= max_width || width <= 0.0 {
        1.0
    } else {
        max_width / width
    }
}
