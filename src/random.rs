//! Random choice helpers on top of [`rand::Rng`].
//!
//! Every function takes the generator explicitly, so a seeded generator
//! reproduces the same puzzle.

use rand::Rng;

use crate::expr::Op;

/// Removes and returns a uniformly chosen element, keeping the order of the rest.
///
/// Returns `None` if `items` is empty.
pub fn pick_and_remove<T, R>(rng: &mut R, items: &mut Vec<T>) -> Option<T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    let i = rng.gen_range(0..items.len());
    Some(items.remove(i))
}

/// Picks one of the eight binary operators uniformly.
pub fn random_op<R>(rng: &mut R) -> Op
where
    R: Rng + ?Sized,
{
    Op::ALL[rng.gen_range(0..Op::ALL.len())]
}
