//! Random expression generator.
//!
//! ## Algorithm
//!
//! ```text
//! leaves   = shuffle(candidates)[..2]
//! budget   = 1
//! while |leaves| > 1:
//!     l, r = pick_and_remove(leaves), pick_and_remove(leaves)
//!     l, r = maybe_not(l), maybe_not(r)       -- each with odds 1/3
//!     leaves.push(Binary(l, r, uniform(Op)))
//! return maybe_not(leaves[0])
//! ```
//!
//! A single negation budget is shared by the whole call, so a generated
//! expression contains at most one [`Expr::Not`].

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::expr::Expr;
use crate::random::{pick_and_remove, random_op};
use crate::types::Var;

/// Maximum number of variable leaves combined into one expression.
pub const MAX_LEAVES: usize = 2;

/// Maximum number of negations introduced into one expression.
pub const NEGATION_BUDGET: usize = 1;

/// Odds (numerator, denominator) of negating a sub-expression.
const NEGATION_ODDS: (u32, u32) = (1, 3);

/// Generate a random expression over (at most two of) `candidates`.
///
/// `candidates` must not contain the variable the expression is going to
/// define; the result only ever mentions variables from `candidates`.
///
/// # Panics
///
/// Panics if `candidates` is empty.
pub fn generate<R>(candidates: &[Var], rng: &mut R) -> Expr
where
    R: Rng + ?Sized,
{
    assert!(!candidates.is_empty(), "Cannot generate an expression without variables");

    let mut leaves: Vec<Expr> = candidates.iter().copied().map(Expr::var).collect();
    leaves.shuffle(rng);
    leaves.truncate(MAX_LEAVES);

    let mut budget = NEGATION_BUDGET;

    while leaves.len() > 1 {
        let (Some(l), Some(r)) = (
            pick_and_remove(rng, &mut leaves),
            pick_and_remove(rng, &mut leaves),
        ) else {
            unreachable!("at least two leaves remain");
        };
        let l = maybe_negate(l, &mut budget, rng);
        let r = maybe_negate(r, &mut budget, rng);
        leaves.push(Expr::binary(l, r, random_op(rng)));
    }

    let Some(last) = leaves.pop() else {
        unreachable!("exactly one leaf remains");
    };
    let expr = if budget > 0 {
        maybe_negate(last, &mut budget, rng)
    } else {
        last
    };
    debug!("generate(candidates = {:?}) -> {}", candidates, expr);
    expr
}

/// Roll the negation odds; wrap `expr` in `Not` if the roll succeeds and the
/// budget allows it.
fn maybe_negate<R>(expr: Expr, budget: &mut usize, rng: &mut R) -> Expr
where
    R: Rng + ?Sized,
{
    let (num, den) = NEGATION_ODDS;
    if rng.gen_ratio(num, den) && *budget > 0 {
        *budget -= 1;
        Expr::not(expr)
    } else {
        expr
    }
}
