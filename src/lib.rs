//! # superlogic: self-referential boolean logic puzzles
//!
//! **`superlogic`** generates puzzles of the following shape: given `N`
//! boolean variables (`N` is 3 or 4), each variable is *defined* by a boolean
//! expression over the **other** variables,
//!
//! ```text
//! A = B∧C
//! B = ¬A∨C
//! C = A↓B
//! ```
//!
//! and exactly one assignment makes every variable equal to the value of its
//! own expression. Finding that assignment is the puzzle.
//!
//! ## Key Features
//!
//! - **Small closed AST**: [`Expr`][crate::expr::Expr] is a plain sum type over variables, negation and eight binary connectives.
//! - **Exhaustive verification**: uniqueness is checked by brute force over all `2^N` assignments.
//! - **Explicit randomness**: every generator call takes the RNG as an argument, so a seeded [`rand::Rng`] reproduces a puzzle exactly.
//! - **Bounded retries**: the generate-and-verify loop gives up with [`Error::Exhausted`][crate::error::Error::Exhausted] after a configurable number of attempts.
//!
//! ## Basic Usage
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use superlogic::puzzle::{PuzzleBuilder, PuzzleConfig};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let builder = PuzzleBuilder::new(PuzzleConfig::default()).unwrap();
//! let puzzle = builder.build(&mut rng).unwrap();
//!
//! // One line per variable: "A = ...", "B = ...", "C = ..."
//! println!("{}", puzzle);
//!
//! let answer = puzzle.solution().to_values(puzzle.num_vars());
//! assert!(puzzle.check(&answer));
//! ```
//!
//! ## Core Components
//!
//! - **[`expr`]**: expression trees, evaluation and rendering.
//! - **[`layout`]**: token-by-token layout of rendered expressions for a presentation layer.
//! - **[`generator`]**: random construction of a single defining expression.
//! - **[`puzzle`]**: the generate-and-verify loop and the resulting [`Puzzle`][crate::puzzle::Puzzle].
//! - **[`command`]**: textual commands and the player's selection vector.

pub mod command;
pub mod error;
pub mod expr;
pub mod generator;
pub mod layout;
pub mod puzzle;
pub mod random;
pub mod types;

pub use error::{Error, Result};
pub use expr::{Expr, Op};
pub use puzzle::{Puzzle, PuzzleBuilder, PuzzleConfig};
pub use types::{Assignment, Var};
