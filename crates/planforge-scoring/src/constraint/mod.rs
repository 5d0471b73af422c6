//! Constraints and constraint sets.

mod set;


use std::fmt;

use planforge_core::{ConstraintKind, Score, VariableRef};

pub use set::{ConstraintMatch, ConstraintSet};

type Predicate<S> = Box<dyn Fn(&S) -> bool + Send + Sync>;
type WatchFilter = Box<dyn Fn(VariableRef) -> bool + Send + Sync>;

/// A named, weighted predicate over a solution.
///
/// When the predicate matches, the constraint contributes `weight` at the
/// level of its [`ConstraintKind`]. Penalties use negative weights.
///
/// # Example
///
/// ```
/// use planforge_core::{HardSoftScore, VariableRef};
/// use planforge_scoring::Constraint;
///
/// let too_big = Constraint::hard("Capacity", -1, |load: &Vec<i64>| load.iter().sum::<i64>() > 10)
///     .watching(|var: VariableRef| var.entity < 2);
///
/// assert!(too_big.matches(&vec![8, 5]));
/// assert_eq!(too_big.score::<HardSoftScore>(), HardSoftScore::of_hard(-1));
/// assert!(!too_big.watches(VariableRef::new(3, 0)));
/// ```
pub struct Constraint<S> {
    name: String,
    kind: ConstraintKind,
    weight: i64,
    predicate: Predicate<S>,
    watch_filter: Option<WatchFilter>,
}

impl<S> Constraint<S> {
    pub fn new(
        name: impl Into<String>,
        kind: ConstraintKind,
        weight: i64,
        predicate: impl Fn(&S) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            weight,
            predicate: Box::new(predicate),
            watch_filter: None,
        }
    }

    /// Creates a hard constraint.
    pub fn hard(
        name: impl Into<String>,
        weight: i64,
        predicate: impl Fn(&S) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, ConstraintKind::Hard, weight, predicate)
    }

    /// Creates a soft constraint.
    pub fn soft(
        name: impl Into<String>,
        weight: i64,
        predicate: impl Fn(&S) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, ConstraintKind::Soft, weight, predicate)
    }

    /// Restricts the variables whose change can flip this constraint's match.
    ///
    /// The incremental director skips re-evaluation for changes outside the
    /// filter, so the filter must cover every variable the predicate reads.
    pub fn watching(mut self, filter: impl Fn(VariableRef) -> bool + Send + Sync + 'static) -> Self {
        self.watch_filter = Some(Box::new(filter));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Evaluates the predicate against the whole solution.
    pub fn matches(&self, solution: &S) -> bool {
        (self.predicate)(solution)
    }

    /// Returns true if a change to `var` may affect this constraint.
    pub fn watches(&self, var: VariableRef) -> bool {
        self.watch_filter.as_ref().map_or(true, |filter| filter(var))
    }

    /// The weight placed at this constraint's level.
    pub fn score<Sc: Score>(&self) -> Sc {
        Sc::of_level(self.kind.level(), self.weight)
    }

    /// The score contribution for a given match state.
    pub fn contribution<Sc: Score>(&self, matched: bool) -> Sc {
        if matched {
            self.score()
        } else {
            Sc::zero()
        }
    }
}

impl<S> fmt::Debug for Constraint<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("weight", &self.weight)
            .field("filtered", &self.watch_filter.is_some())
            .finish()
    }
}
