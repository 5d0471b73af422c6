//! Termination based on lack of improvement.

use planforge_core::PlanningSolution;
use planforge_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once `limit` steps pass without a new best solution.
///
/// Reads the step of the last best-solution improvement from the solver
/// scope, so it keeps no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct UnimprovedStepCountTermination {
    limit: u64,
}

impl UnimprovedStepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D>
    for UnimprovedStepCountTermination
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        let unimproved = solver_scope
            .step_count()
            .saturating_sub(solver_scope.last_improvement_step());
        unimproved >= self.limit
    }
}
