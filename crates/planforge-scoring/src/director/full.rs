//! Score director with full recalculation.

use std::sync::Arc;

use planforge_core::{PlanningSolution, ValueOf, VariableRef};

use super::traits::{write_into, ScoreDirector};
use crate::constraint::ConstraintSet;

/// A score director that re-evaluates the whole constraint set on every
/// calculation.
///
/// Change hooks are no-ops. This is the ground-truth mode and the
/// reference the incremental director is checked against.
pub struct FullScoreDirector<S: PlanningSolution> {
    working_solution: S,
    constraints: Arc<ConstraintSet<S>>,
    calculation_count: u64,
}

impl<S: PlanningSolution> FullScoreDirector<S> {
    pub fn new(solution: S, constraints: Arc<ConstraintSet<S>>) -> Self {
        FullScoreDirector {
            working_solution: solution,
            constraints,
            calculation_count: 0,
        }
    }

    pub fn constraints(&self) -> &ConstraintSet<S> {
        &self.constraints
    }

    /// Consumes the director and returns the working solution.
    pub fn into_working_solution(self) -> S {
        self.working_solution
    }
}

impl<S: PlanningSolution> ScoreDirector<S> for FullScoreDirector<S> {
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut S {
        &mut self.working_solution
    }

    fn set_working_solution(&mut self, solution: S) -> S {
        std::mem::replace(&mut self.working_solution, solution)
    }

    fn calculate_score(&mut self) -> S::Score {
        let score = self.constraints.calculate(&self.working_solution);
        self.working_solution.set_score(Some(score));
        self.calculation_count += 1;
        score
    }

    fn restore_working_score(&mut self, score: Option<S::Score>) {
        self.working_solution.set_score(score);
    }

    fn calculate_full_score(&self) -> S::Score {
        self.constraints.calculate(&self.working_solution)
    }

    fn before_variable_changed(&mut self, _var: VariableRef) {}

    fn after_variable_changed(&mut self, _var: VariableRef) {}

    fn write_variable(&mut self, var: VariableRef, value: Option<ValueOf<S>>) -> Option<ValueOf<S>> {
        write_into(&mut self.working_solution, var, value)
    }

    fn calculation_count(&self) -> u64 {
        self.calculation_count
    }
}
