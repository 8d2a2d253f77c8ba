//! Puzzle construction and verification.
//!
//! A puzzle over `N` variables consists of `N` expressions, where
//! `expressions[v]` defines the value variable `v` must take. An assignment
//! is a *solution* iff every variable equals the value of its own expression:
//!
//! ```text
//! ∀v. bit(a, v) == expressions[v].eval(a)
//! ```
//!
//! The builder repeatedly generates a fresh set of expressions and checks all
//! `2^N` assignments, accepting the first set with exactly one solution.
//! Rejected sets are discarded in full.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use superlogic::puzzle::{solutions, PuzzleBuilder, PuzzleConfig};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let builder = PuzzleBuilder::new(PuzzleConfig::default().with_num_vars(4)).unwrap();
//! let puzzle = builder.build(&mut rng).unwrap();
//!
//! assert_eq!(puzzle.num_vars(), 4);
//! assert_eq!(solutions(puzzle.expressions()), vec![puzzle.solution()]);
//! ```

use std::fmt;

use log::{debug, info, warn};
use rand::Rng;

use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::generator::generate;
use crate::types::{Assignment, Var};

/// Smallest supported number of puzzle variables.
pub const MIN_PUZZLE_VARS: usize = 3;
/// Largest supported number of puzzle variables.
pub const MAX_PUZZLE_VARS: usize = 4;

/// Default cap on the number of generate-and-verify attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Whether `assignment` satisfies every defining expression.
pub fn is_consistent(expressions: &[Expr], assignment: Assignment) -> bool {
    expressions
        .iter()
        .enumerate()
        .all(|(v, e)| assignment.get(Var::new(v)) == e.eval(assignment))
}

/// All solutions of the expression set, by exhaustive enumeration.
pub fn solutions(expressions: &[Expr]) -> Vec<Assignment> {
    Assignment::all(expressions.len())
        .filter(|&a| is_consistent(expressions, a))
        .collect()
}

/// A uniquely solvable set of defining expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    expressions: Vec<Expr>,
    solution: Assignment,
}

impl Puzzle {
    /// Validates a hand-made expression set and wraps it as a puzzle.
    pub fn from_expressions(expressions: Vec<Expr>) -> Result<Self> {
        let num_vars = expressions.len();
        if !(MIN_PUZZLE_VARS..=MAX_PUZZLE_VARS).contains(&num_vars) {
            return Err(Error::UnsupportedVariableCount { num_vars });
        }
        for (var, e) in Var::all(num_vars).zip(&expressions) {
            if e.mentions(var) {
                return Err(Error::SelfReference { var });
            }
        }
        let found = solutions(&expressions);
        if found.len() != 1 {
            return Err(Error::NotUnique {
                solutions: found.len(),
            });
        }
        Ok(Puzzle {
            expressions,
            solution: found[0],
        })
    }

    pub fn num_vars(&self) -> usize {
        self.expressions.len()
    }

    pub fn expressions(&self) -> &[Expr] {
        &self.expressions
    }

    /// Expression defining `var`.
    pub fn expression(&self, var: Var) -> &Expr {
        &self.expressions[var.index()]
    }

    /// The unique solution.
    pub fn solution(&self) -> Assignment {
        self.solution
    }

    pub fn is_solution(&self, assignment: Assignment) -> bool {
        assignment == self.solution
    }

    /// Compares a selection vector against the solution.
    ///
    /// Returns `true` iff `selected` has one entry per variable and
    /// `selected[v] == bit(solution, v)` for every `v`.
    pub fn check(&self, selected: &[bool]) -> bool {
        selected.len() == self.num_vars()
            && Var::all(self.num_vars()).all(|v| selected[v.index()] == self.solution.get(v))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, e) in Var::all(self.num_vars()).zip(&self.expressions) {
            writeln!(f, "{} = {}", var, e)?;
        }
        Ok(())
    }
}

/// Configuration for [`PuzzleBuilder`].
///
/// # Examples
///
/// ```
/// use superlogic::puzzle::PuzzleConfig;
///
/// let config = PuzzleConfig::default()
///     .with_num_vars(4)
///     .with_max_attempts(Some(500))
///     .with_id(7);
/// assert_eq!(config.num_vars, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of variables, `3` or `4`.
    pub num_vars: usize,
    /// Attempt cap; `None` retries until a puzzle is found.
    pub max_attempts: Option<usize>,
    /// Instance tag used in log messages.
    pub id: u32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            num_vars: MIN_PUZZLE_VARS,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            id: 1,
        }
    }
}

impl PuzzleConfig {
    pub fn with_num_vars(mut self, num_vars: usize) -> Self {
        self.num_vars = num_vars;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

/// Outcome of a single generate-and-verify attempt.
#[derive(Debug, Clone)]
pub enum Attempt {
    /// The expressions have exactly one solution.
    Accepted(Puzzle),
    /// The expressions have zero or several solutions.
    Rejected {
        expressions: Vec<Expr>,
        solutions: Vec<Assignment>,
    },
}

enum State {
    Searching { attempts: usize },
    Solved(Puzzle),
}

/// Generates uniquely solvable puzzles.
#[derive(Debug, Clone)]
pub struct PuzzleBuilder {
    config: PuzzleConfig,
}

impl PuzzleBuilder {
    pub fn new(config: PuzzleConfig) -> Result<Self> {
        let num_vars = config.num_vars;
        if !(MIN_PUZZLE_VARS..=MAX_PUZZLE_VARS).contains(&num_vars) {
            return Err(Error::UnsupportedVariableCount { num_vars });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Generate one fresh expression set and check it for a unique solution.
    pub fn attempt<R>(&self, rng: &mut R) -> Attempt
    where
        R: Rng + ?Sized,
    {
        let n = self.config.num_vars;
        let expressions: Vec<Expr> = Var::all(n)
            .map(|v| {
                let candidates: Vec<Var> = Var::all(n).filter(|&x| x != v).collect();
                let e = generate(&candidates, rng);
                assert!(!e.mentions(v), "Expression for {} refers to itself: {}", v, e);
                e
            })
            .collect();

        let found = solutions(&expressions);
        if found.len() == 1 {
            Attempt::Accepted(Puzzle {
                expressions,
                solution: found[0],
            })
        } else {
            Attempt::Rejected {
                expressions,
                solutions: found,
            }
        }
    }

    /// Retry [`attempt`][Self::attempt] until a puzzle is accepted.
    ///
    /// Fails with [`Error::Exhausted`] once `max_attempts` attempts were rejected.
    pub fn build<R>(&self, rng: &mut R) -> Result<Puzzle>
    where
        R: Rng + ?Sized,
    {
        let id = self.config.id;
        let mut state = State::Searching { attempts: 0 };
        loop {
            state = match state {
                State::Solved(puzzle) => return Ok(puzzle),
                State::Searching { attempts } => {
                    if self.config.max_attempts.is_some_and(|max| attempts >= max) {
                        warn!(
                            "[superlogic #{}] generation exhausted after {} attempts",
                            id, attempts
                        );
                        return Err(Error::Exhausted { attempts });
                    }
                    match self.attempt(rng) {
                        Attempt::Accepted(puzzle) => {
                            info!(
                                "[superlogic #{}] accepted after {} attempts, solution = {}",
                                id,
                                attempts + 1,
                                puzzle.solution().to_tf_string(puzzle.num_vars())
                            );
                            State::Solved(puzzle)
                        }
                        Attempt::Rejected { solutions, .. } => {
                            debug!(
                                "[superlogic #{}] attempt {} rejected: {} solutions",
                                id,
                                attempts + 1,
                                solutions.len()
                            );
                            State::Searching { attempts: attempts + 1 }
                        }
                    }
                }
            };
        }
    }
}
