//! Type-safe wrappers for puzzle variables and truth assignments.
//!
//! This module provides newtype wrappers that keep variable indices and
//! assignment bitfields apart, so an index can never be mistaken for a set
//! of truth values (and vice versa).
use std::fmt;

/// Largest number of variables a [`Var`] can name (one per letter `A..=Z`).
pub const MAX_VARS: usize = 26;

/// A variable identifier (0-indexed).
///
/// Variables are rendered as capital letters: `0 → A`, `1 → B`, and so on.
///
/// # Invariants
///
/// - Variable indices are `< MAX_VARS`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(usize);

impl Var {
    /// Creates a new variable with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= MAX_VARS`.
    pub fn new(index: usize) -> Self {
        assert!(index < MAX_VARS, "Variable index must be < {}", MAX_VARS);
        Var(index)
    }

    /// Returns the raw variable index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the letter naming this variable.
    pub fn letter(self) -> char {
        (b'A' + self.0 as u8) as char
    }

    /// Parses a variable letter (case-insensitive).
    pub fn from_letter(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        if c.is_ascii_uppercase() {
            Some(Var((c as u8 - b'A') as usize))
        } else {
            None
        }
    }

    /// Iterates over the first `n` variables, `A` upwards.
    pub fn all(n: usize) -> impl Iterator<Item = Var> {
        (0..n).map(Var::new)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl From<Var> for usize {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A truth assignment: bit `v` holds the value of variable `v`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Assignment(u32);

impl Assignment {
    /// Creates an assignment from its raw bitfield.
    pub const fn new(bits: u32) -> Self {
        Assignment(bits)
    }

    /// Returns the raw bitfield.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns the value of `var`.
    pub fn get(self, var: Var) -> bool {
        (self.0 >> var.index()) & 1 == 1
    }

    /// Returns a copy with `var` set to `value`.
    pub fn with(self, var: Var, value: bool) -> Self {
        let mask = 1 << var.index();
        if value {
            Assignment(self.0 | mask)
        } else {
            Assignment(self.0 & !mask)
        }
    }

    /// Iterates over every assignment of `num_vars` variables, `0..2^num_vars`.
    pub fn all(num_vars: usize) -> impl Iterator<Item = Assignment> {
        assert!(num_vars <= MAX_VARS);
        (0..1u32 << num_vars).map(Assignment)
    }

    /// Packs a slice of values (index = variable) into an assignment.
    pub fn from_values(values: &[bool]) -> Self {
        assert!(values.len() <= MAX_VARS);
        let mut assignment = Assignment(0);
        for (i, &value) in values.iter().enumerate() {
            assignment = assignment.with(Var::new(i), value);
        }
        assignment
    }

    /// Unpacks the first `num_vars` values.
    pub fn to_values(self, num_vars: usize) -> Vec<bool> {
        Var::all(num_vars).map(|v| self.get(v)).collect()
    }

    /// Renders the first `num_vars` values as `T`/`F`, variable `A` first.
    pub fn to_tf_string(self, num_vars: usize) -> String {
        Var::all(num_vars)
            .map(|v| if self.get(v) { 'T' } else { 'F' })
            .collect()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

impl From<u32> for Assignment {
    fn from(bits: u32) -> Self {
        Assignment(bits)
    }
}

impl From<Assignment> for u32 {
    fn from(assignment: Assignment) -> Self {
        assignment.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_creation() {
        let a = Var::new(0);
        let b = Var::new(1);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert!(a < b);
    }

    #[test]
    #[should_panic(expected = "Variable index must be < 26")]
    fn test_var_out_of_range_panics() {
        Var::new(26);
    }

    #[test]
    fn test_var_letters() {
        assert_eq!(Var::new(0).letter(), 'A');
        assert_eq!(Var::new(3).letter(), 'D');
        assert_eq!(Var::new(25).to_string(), "Z");
        assert_eq!(Var::from_letter('c'), Some(Var::new(2)));
        assert_eq!(Var::from_letter('B'), Some(Var::new(1)));
        assert_eq!(Var::from_letter('1'), None);
    }

    #[test]
    fn test_assignment_bits() {
        let a = Assignment::new(0b101);
        assert!(a.get(Var::new(0)));
        assert!(!a.get(Var::new(1)));
        assert!(a.get(Var::new(2)));
        assert!(!a.get(Var::new(3)));

        let b = a.with(Var::new(1), true).with(Var::new(0), false);
        assert_eq!(b.bits(), 0b110);
    }

    #[test]
    fn test_assignment_enumeration() {
        let all: Vec<u32> = Assignment::all(3).map(u32::from).collect();
        assert_eq!(all, (0..8).collect::<Vec<_>>());
        assert_eq!(Assignment::all(4).count(), 16);
    }

    #[test]
    fn test_assignment_values() {
        let a = Assignment::from_values(&[false, true, true]);
        assert_eq!(a.bits(), 0b110);
        assert_eq!(a.to_values(3), vec![false, true, true]);
        assert_eq!(a.to_values(4), vec![false, true, true, false]);
        assert_eq!(a.to_tf_string(3), "FTT");
    }
}
