//! Core Score trait definition

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Neg, Sub};

use super::ScoreLevel;

/// Core trait for all score types in PlanForge.
///
/// Scores represent the quality of a planning solution. They are used to:
/// - Compare solutions (better/worse/equal)
/// - Guide the optimization process
/// - Determine feasibility
///
/// All score implementations must be immutable value types that are
/// thread-safe and totally ordered. Levels are compared in fixed priority
/// order; the first level that differs decides the comparison.
///
/// [`Score::level_delta`] is the single source of ordering truth: `Ord`,
/// acceptance decisions, best-solution promotion and termination thresholds
/// all derive from it.
pub trait Score:
    Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Hash
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Returns true if this score represents a feasible solution.
    fn is_feasible(&self) -> bool;

    /// Returns the zero score (identity element for addition).
    fn zero() -> Self;

    /// Returns true if every level is zero.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Returns the number of score levels.
    fn levels_count() -> usize;

    /// Returns the score values as a vector of i64, highest priority first.
    fn to_level_numbers(&self) -> Vec<i64>;

    /// Creates a score from level numbers.
    ///
    /// # Panics
    /// Panics if the number of levels doesn't match `levels_count()`.
    fn from_level_numbers(levels: &[i64]) -> Self;

    /// Creates a score carrying `amount` at `level` and zero elsewhere.
    fn of_level(level: ScoreLevel, amount: i64) -> Self;

    /// Multiplies every level by a scalar, rounding to the nearest integer.
    fn multiply(&self, multiplicand: f64) -> Self;

    /// Divides every level by a scalar, rounding to the nearest integer.
    ///
    /// Division by zero saturates each non-zero level to `i64::MAX`/`i64::MIN`.
    fn divide(&self, divisor: f64) -> Self;

    /// Raises every level to a power, rounding to the nearest integer.
    fn power(&self, exponent: f64) -> Self;

    /// Returns the absolute value of this score.
    fn abs(&self) -> Self;

    /// Returns the semantic label for the score level at the given index.
    ///
    /// # Panics
    /// Panics if `index >= levels_count()`.
    fn level_label(index: usize) -> ScoreLevel;

    /// Signed difference `self - other` at the first level where they differ,
    /// or 0 when the scores are equal.
    fn level_delta(&self, other: &Self) -> i64 {
        self.to_level_numbers()
            .into_iter()
            .zip(other.to_level_numbers())
            .map(|(a, b)| a.saturating_sub(b))
            .find(|delta| *delta != 0)
            .unwrap_or(0)
    }

    /// Compares two scores by the sign of [`Score::level_delta`].
    fn compare(&self, other: &Self) -> Ordering {
        self.level_delta(other).cmp(&0)
    }

    /// Returns true if this score is better than the other score.
    fn is_better_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Returns true if this score is worse than the other score.
    fn is_worse_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

/// Marker trait for scores that can be parsed from a string.
pub trait ParseableScore: Score {
    /// Parses a score from a string representation.
    ///
    /// # Format
    /// - `"0hard/-100soft"`
    /// - `"-2init/0hard/-100soft"`
    fn parse(s: &str) -> Result<Self, ScoreParseError>;

    /// Returns the string representation of this score.
    fn to_string_repr(&self) -> String;
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Score parse error: {message}")]
pub struct ScoreParseError {
    pub message: String,
}

impl ScoreParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
