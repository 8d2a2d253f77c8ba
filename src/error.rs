use std::fmt;

use crate::puzzle::{MAX_PUZZLE_VARS, MIN_PUZZLE_VARS};
use crate::types::Var;

/// Error type for puzzle generation and play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Number of variables outside the supported range.
    UnsupportedVariableCount { num_vars: usize },
    /// The builder hit its attempt cap without finding a uniquely solvable puzzle.
    Exhausted { attempts: usize },
    /// An expression set has zero or several solutions.
    NotUnique { solutions: usize },
    /// The expression defining `var` mentions `var` itself.
    SelfReference { var: Var },
    /// A list of per-variable values has the wrong length.
    WrongLength { expected: usize, found: usize },
    /// Text that is not a recognised command.
    InvalidCommand { input: String },
    /// A variable outside the puzzle.
    UnknownVariable { var: Var },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedVariableCount { num_vars } => write!(
                f,
                "Unsupported number of variables: {} (expected {}..={})",
                num_vars, MIN_PUZZLE_VARS, MAX_PUZZLE_VARS
            ),
            Error::Exhausted { attempts } => {
                write!(f, "Generation exhausted after {} attempts", attempts)
            }
            Error::NotUnique { solutions } => {
                write!(f, "Expected exactly one solution, found {}", solutions)
            }
            Error::SelfReference { var } => {
                write!(f, "Expression for {} refers to {}", var, var)
            }
            Error::WrongLength { expected, found } => {
                write!(f, "Expected {} values, found {}", expected, found)
            }
            Error::InvalidCommand { input } => write!(f, "Invalid command: {:?}", input),
            Error::UnknownVariable { var } => write!(f, "Unknown variable: {}", var),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
