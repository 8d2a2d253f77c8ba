//! Textual commands and the player's selection vector.
//!
//! A command is one of:
//!
//! - a single variable letter, e.g. `b` — toggle that variable;
//! - `submit` — compare the selection against the solution;
//! - exactly `N` values, e.g. `TFT`, `1 0 1` — set every variable at once.
//!
//! Matching is case-insensitive; whitespace, commas and an optional leading
//! `press`/`toggle`/`set` keyword are ignored.

use std::fmt;

use crate::error::{Error, Result};
use crate::puzzle::Puzzle;
use crate::types::Var;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(Var),
    Submit,
    Set(Vec<bool>),
}

impl Command {
    /// Parse a command for a puzzle with `num_vars` variables.
    pub fn parse(input: &str, num_vars: usize) -> Result<Self> {
        let invalid = || Error::InvalidCommand {
            input: input.to_string(),
        };

        let text = input.trim().to_ascii_lowercase();
        let mut words = text.split_whitespace().peekable();
        if let Some(&("press" | "toggle" | "set")) = words.peek() {
            words.next();
        }
        let rest: Vec<&str> = words.collect();

        if let [word] = rest[..] {
            if word == "submit" {
                return Ok(Command::Submit);
            }
            let mut chars = word.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(var) = Var::from_letter(c).filter(|v| v.index() < num_vars) {
                    return Ok(Command::Toggle(var));
                }
            }
        }

        let values = rest
            .iter()
            .flat_map(|w| w.chars())
            .filter(|&c| c != ',')
            .map(|c| match c {
                't' | '1' => Ok(true),
                'f' | '0' => Ok(false),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<bool>>>()?;

        if values.is_empty() {
            return Err(invalid());
        }
        if values.len() != num_vars {
            return Err(Error::WrongLength {
                expected: num_vars,
                found: values.len(),
            });
        }
        Ok(Command::Set(values))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Toggle(var) => write!(f, "toggle {}", var),
            Command::Submit => write!(f, "submit"),
            Command::Set(values) => {
                write!(f, "set ")?;
                for &value in values {
                    write!(f, "{}", if value { 'T' } else { 'F' })?;
                }
                Ok(())
            }
        }
    }
}

/// Result of applying a command to a [`Selection`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Toggled { var: Var, value: bool },
    Set,
    Submitted { correct: bool },
}

/// The player's current guess: one value per variable, all `false` initially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    values: Vec<bool>,
}

impl Selection {
    pub fn new(num_vars: usize) -> Self {
        Self {
            values: vec![false; num_vars],
        }
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn toggle(&mut self, var: Var) -> Result<bool> {
        let value = self
            .values
            .get_mut(var.index())
            .ok_or(Error::UnknownVariable { var })?;
        *value = !*value;
        Ok(*value)
    }

    pub fn set(&mut self, values: &[bool]) -> Result<()> {
        if values.len() != self.values.len() {
            return Err(Error::WrongLength {
                expected: self.values.len(),
                found: values.len(),
            });
        }
        self.values.copy_from_slice(values);
        Ok(())
    }

    /// Apply `command`, checking submissions against `puzzle`.
    pub fn apply(&mut self, command: &Command, puzzle: &Puzzle) -> Result<Outcome> {
        match command {
            Command::Toggle(var) => {
                let value = self.toggle(*var)?;
                Ok(Outcome::Toggled { var: *var, value })
            }
            Command::Set(values) => {
                self.set(values)?;
                Ok(Outcome::Set)
            }
            Command::Submit => Ok(Outcome::Submitted {
                correct: puzzle.check(&self.values),
            }),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, &value) in Var::all(self.values.len()).zip(&self.values) {
            if var.index() > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", var, if value { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}
