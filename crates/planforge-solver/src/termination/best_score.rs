//! Best score threshold termination.

use std::fmt::Debug;

use planforge_core::{PlanningSolution, Score};
use planforge_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once the best score reaches or exceeds a target.
///
/// # Example
///
/// ```
/// use planforge_core::HardSoftScore;
/// use planforge_solver::termination::BestScoreTermination;
///
/// let term = BestScoreTermination::new(HardSoftScore::ZERO);
/// assert_eq!(term.target(), HardSoftScore::ZERO);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BestScoreTermination<Sc: Score> {
    target: Sc,
}

impl<Sc: Score> BestScoreTermination<Sc> {
    pub fn new(target: Sc) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Sc {
        self.target
    }
}

impl<S, D> Termination<S, D> for BestScoreTermination<S::Score>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope
            .best_score()
            .is_some_and(|best| !best.is_worse_than(&self.target))
    }
}
