//! Constraint classification.

use crate::score::ScoreLevel;

/// The score level a constraint's weight lands on.
///
/// # Example
///
/// ```
/// use planforge_core::{ConstraintKind, ScoreLevel};
///
/// assert_eq!(ConstraintKind::Hard.level(), ScoreLevel::Hard);
/// assert_eq!(ConstraintKind::Soft.level(), ScoreLevel::Soft);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintKind {
    /// Affects feasibility.
    Hard,
    /// Affects quality only.
    Soft,
}

impl ConstraintKind {
    /// Returns the score level this kind maps to.
    pub const fn level(self) -> ScoreLevel {
        match self {
            ConstraintKind::Hard => ScoreLevel::Hard,
            ConstraintKind::Soft => ScoreLevel::Soft,
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintKind::Hard => f.write_str("HARD"),
            ConstraintKind::Soft => f.write_str("SOFT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ConstraintKind::Hard.to_string(), "HARD");
        assert_eq!(ConstraintKind::Soft.to_string(), "SOFT");
    }

    #[test]
    fn test_kind_levels_differ() {
        assert_ne!(ConstraintKind::Hard.level(), ConstraintKind::Soft.level());
    }
}
