//! HardSoftScore - hard and soft levels with an optional init prefix

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::traits::{ParseableScore, Score, ScoreParseError};
use super::ScoreLevel;

/// A score with an init level, a hard level and a soft level.
///
/// The init level counts uninitialized variables as a negative number, so
/// an incomplete assignment always compares below a complete one. Hard
/// constraints must be satisfied for a solution to be feasible; soft
/// constraints are optimization objectives.
///
/// Levels are compared in order `init > hard > soft`.
///
/// # Examples
///
/// ```
/// use planforge_core::HardSoftScore;
///
/// let score1 = HardSoftScore::of(-1, -100);  // 1 hard constraint broken
/// let score2 = HardSoftScore::of(0, -200);   // Feasible but poor soft score
///
/// // Feasible solutions are always better than infeasible ones
/// assert!(score2 > score1);
///
/// // Any uninitialized variable outweighs every hard penalty
/// let partial = HardSoftScore::of_uninitialized(-1, 0, 0);
/// assert!(score1 > partial);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftScore {
    init: i64,
    hard: i64,
    soft: i64,
}

impl HardSoftScore {
    /// The zero score.
    pub const ZERO: HardSoftScore = HardSoftScore::of_uninitialized(0, 0, 0);

    /// One hard constraint reward.
    pub const ONE_HARD: HardSoftScore = HardSoftScore::of_hard(1);

    /// One soft constraint reward.
    pub const ONE_SOFT: HardSoftScore = HardSoftScore::of_soft(1);

    /// Creates a fully initialized score.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftScore { init: 0, hard, soft }
    }

    /// Creates a score with an explicit init level.
    #[inline]
    pub const fn of_uninitialized(init: i64, hard: i64, soft: i64) -> Self {
        HardSoftScore { init, hard, soft }
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftScore::of(hard, 0)
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftScore::of(0, soft)
    }

    #[inline]
    pub const fn init(&self) -> i64 {
        self.init
    }

    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Returns true when no variable is left uninitialized.
    #[inline]
    pub const fn is_solution_initialized(&self) -> bool {
        self.init >= 0
    }

    fn map_levels(&self, f: impl Fn(i64) -> i64) -> Self {
        HardSoftScore::of_uninitialized(f(self.init), f(self.hard), f(self.soft))
    }
}

fn round_level(value: f64) -> i64 {
    // `as` saturates on overflow and maps NaN to 0
    value.round() as i64
}

impl Score for HardSoftScore {
    #[inline]
    fn is_feasible(&self) -> bool {
        self.init >= 0 && self.hard >= 0
    }

    #[inline]
    fn zero() -> Self {
        HardSoftScore::ZERO
    }

    #[inline]
    fn levels_count() -> usize {
        3
    }

    fn to_level_numbers(&self) -> Vec<i64> {
        vec![self.init, self.hard, self.soft]
    }

    fn from_level_numbers(levels: &[i64]) -> Self {
        assert_eq!(levels.len(), 3, "HardSoftScore requires exactly 3 levels");
        HardSoftScore::of_uninitialized(levels[0], levels[1], levels[2])
    }

    fn of_level(level: ScoreLevel, amount: i64) -> Self {
        match level {
            ScoreLevel::Init => HardSoftScore::of_uninitialized(amount, 0, 0),
            ScoreLevel::Hard => HardSoftScore::of_hard(amount),
            ScoreLevel::Soft => HardSoftScore::of_soft(amount),
        }
    }

    fn multiply(&self, multiplicand: f64) -> Self {
        self.map_levels(|level| round_level(level as f64 * multiplicand))
    }

    fn divide(&self, divisor: f64) -> Self {
        self.map_levels(|level| round_level(level as f64 / divisor))
    }

    fn power(&self, exponent: f64) -> Self {
        self.map_levels(|level| round_level((level as f64).powf(exponent)))
    }

    fn abs(&self) -> Self {
        self.map_levels(i64::saturating_abs)
    }

    fn level_label(index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Init,
            1 => ScoreLevel::Hard,
            2 => ScoreLevel::Soft,
            _ => panic!("HardSoftScore has 3 levels, got index {}", index),
        }
    }

    #[inline]
    fn level_delta(&self, other: &Self) -> i64 {
        if self.init != other.init {
            self.init.saturating_sub(other.init)
        } else if self.hard != other.hard {
            self.hard.saturating_sub(other.hard)
        } else {
            self.soft.saturating_sub(other.soft)
        }
    }
}

impl Ord for HardSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level_delta(other).cmp(&0)
    }
}

impl PartialOrd for HardSoftScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Level arithmetic wraps so that `(a + b) - b == a` holds for every `i64`.
impl Add for HardSoftScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        HardSoftScore::of_uninitialized(
            self.init.wrapping_add(other.init),
            self.hard.wrapping_add(other.hard),
            self.soft.wrapping_add(other.soft),
        )
    }
}

impl Sub for HardSoftScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        HardSoftScore::of_uninitialized(
            self.init.wrapping_sub(other.init),
            self.hard.wrapping_sub(other.hard),
            self.soft.wrapping_sub(other.soft),
        )
    }
}

impl Neg for HardSoftScore {
    type Output = Self;

    fn neg(self) -> Self {
        self.map_levels(i64::wrapping_neg)
    }
}

impl fmt::Debug for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardSoftScore({}, {}, {})",
            self.init, self.hard, self.soft
        )
    }
}

impl fmt::Display for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.init != 0 {
            write!(f, "{}init/", self.init)?;
        }
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}

fn parse_level(part: &str, suffix: &str) -> Result<i64, ScoreParseError> {
    let part = part.trim();
    let number = part.strip_suffix(suffix).ok_or_else(|| {
        ScoreParseError::new(format!("level '{}' must end with '{}'", part, suffix))
    })?;
    number
        .parse::<i64>()
        .map_err(|e| ScoreParseError::new(format!("invalid {} level '{}': {}", suffix, number, e)))
}

impl ParseableScore for HardSoftScore {
    fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [hard, soft] => Ok(HardSoftScore::of(
                parse_level(hard, "hard")?,
                parse_level(soft, "soft")?,
            )),
            [init, hard, soft] => Ok(HardSoftScore::of_uninitialized(
                parse_level(init, "init")?,
                parse_level(hard, "hard")?,
                parse_level(soft, "soft")?,
            )),
            _ => Err(ScoreParseError::new(format!(
                "invalid HardSoftScore '{}': expected 2 or 3 parts separated by '/'",
                s
            ))),
        }
    }

    fn to_string_repr(&self) -> String {
        self.to_string()
    }
}

impl std::str::FromStr for HardSoftScore {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <HardSoftScore as ParseableScore>::parse(s)
    }
}
