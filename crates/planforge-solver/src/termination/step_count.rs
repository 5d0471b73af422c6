//! Step count termination.

use planforge_core::PlanningSolution;
use planforge_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once the solver has taken `limit` local-search steps.
///
/// Accepted and rejected moves both count as a step.
///
/// # Example
///
/// ```
/// use planforge_solver::termination::StepCountTermination;
///
/// let term = StepCountTermination::new(10);
/// assert_eq!(term.limit(), 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope.step_count() >= self.limit
    }
}
