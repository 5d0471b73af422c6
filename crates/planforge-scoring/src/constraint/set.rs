//! Ordered constraint collections and full score calculation.

use planforge_core::{ConstraintKind, PlanningSolution, Score};

use super::Constraint;

/// An ordered collection of constraints.
///
/// Iteration order is insertion order, which keeps every evaluation
/// deterministic for reproducible runs.
pub struct ConstraintSet<S> {
    constraints: Vec<Constraint<S>>,
}

/// One constraint's outcome against a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintMatch<Sc> {
    pub name: String,
    pub kind: ConstraintKind,
    pub weight: i64,
    pub matched: bool,
    pub score: Sc,
}

impl<S> ConstraintSet<S> {
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Appends a constraint, builder style.
    pub fn with(mut self, constraint: Constraint<S>) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Appends a constraint.
    pub fn add(&mut self, constraint: Constraint<S>) {
        self.constraints.push(constraint);
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Constraint<S>> {
        self.constraints.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint<S>> {
        self.constraints.iter()
    }
}

impl<S: PlanningSolution> ConstraintSet<S> {
    /// Evaluates every constraint against the whole solution.
    ///
    /// This is the ground truth every cached score is checked against.
    pub fn calculate(&self, solution: &S) -> S::Score {
        self.constraints
            .iter()
            .filter(|constraint| constraint.matches(solution))
            .fold(S::Score::zero(), |total, constraint| {
                total + constraint.score::<S::Score>()
            })
    }

    /// Evaluates every constraint and reports each outcome.
    pub fn explain(&self, solution: &S) -> Vec<ConstraintMatch<S::Score>> {
        self.constraints
            .iter()
            .map(|constraint| {
                let matched = constraint.matches(solution);
                ConstraintMatch {
                    name: constraint.name().to_string(),
                    kind: constraint.kind(),
                    weight: constraint.weight(),
                    matched,
                    score: constraint.contribution(matched),
                }
            })
            .collect()
    }
}

impl<S> Default for ConstraintSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromIterator<Constraint<S>> for ConstraintSet<S> {
    fn from_iter<I: IntoIterator<Item = Constraint<S>>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl<'a, S> IntoIterator for &'a ConstraintSet<S> {
    type Item = &'a Constraint<S>;
    type IntoIter = std::slice::Iter<'a, Constraint<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

impl<S> std::fmt::Debug for ConstraintSet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.constraints.iter()).finish()
    }
}
