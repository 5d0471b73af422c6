//! Score director selection.

use std::sync::Arc;

use planforge_core::{PlanningSolution, ValueOf, VariableRef};

use super::full::FullScoreDirector;
use super::incremental::IncrementalScoreDirector;
use super::traits::ScoreDirector;
use crate::constraint::ConstraintSet;

/// A score director whose mode is picked at runtime.
pub enum AnyScoreDirector<S: PlanningSolution> {
    Full(FullScoreDirector<S>),
    Incremental(IncrementalScoreDirector<S>),
}

macro_rules! delegate {
    ($self:ident, $director:ident => $body:expr) => {
        match $self {
            AnyScoreDirector::Full($director) => $body,
            AnyScoreDirector::Incremental($director) => $body,
        }
    };
}

impl<S: PlanningSolution> AnyScoreDirector<S> {
    /// Consumes the director and returns the working solution.
    pub fn into_working_solution(self) -> S {
        delegate!(self, d => d.into_working_solution())
    }
}

impl<S: PlanningSolution> ScoreDirector<S> for AnyScoreDirector<S> {
    fn working_solution(&self) -> &S {
        delegate!(self, d => d.working_solution())
    }

    fn working_solution_mut(&mut self) -> &mut S {
        delegate!(self, d => d.working_solution_mut())
    }

    fn set_working_solution(&mut self, solution: S) -> S {
        delegate!(self, d => d.set_working_solution(solution))
    }

    fn calculate_score(&mut self) -> S::Score {
        delegate!(self, d => d.calculate_score())
    }

    fn restore_working_score(&mut self, score: Option<S::Score>) {
        delegate!(self, d => d.restore_working_score(score))
    }

    fn calculate_full_score(&self) -> S::Score {
        delegate!(self, d => d.calculate_full_score())
    }

    fn before_variable_changed(&mut self, var: VariableRef) {
        delegate!(self, d => d.before_variable_changed(var))
    }

    fn after_variable_changed(&mut self, var: VariableRef) {
        delegate!(self, d => d.after_variable_changed(var))
    }

    fn write_variable(&mut self, var: VariableRef, value: Option<ValueOf<S>>) -> Option<ValueOf<S>> {
        delegate!(self, d => d.write_variable(var, value))
    }

    fn calculation_count(&self) -> u64 {
        delegate!(self, d => d.calculation_count())
    }

    fn is_incremental(&self) -> bool {
        delegate!(self, d => d.is_incremental())
    }

    fn reset(&mut self) {
        delegate!(self, d => d.reset())
    }
}

/// Builds score directors over a shared constraint set.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use planforge_scoring::{ConstraintSet, ScoreDirector, ScoreDirectorFactory};
/// # use planforge_core::{BasicVariable, HardSoftScore, PlanningEntity, PlanningSolution};
/// # #[derive(Clone)] struct Empty;
/// # impl PlanningEntity for Empty {
/// #     type Variable = BasicVariable<i64>;
/// #     fn variables(&self) -> &[Self::Variable] { &[] }
/// #     fn variables_mut(&mut self) -> &mut [Self::Variable] { &mut [] }
/// # }
/// # #[derive(Clone)] struct Plan { entities: Vec<Empty>, score: Option<HardSoftScore> }
/// # impl PlanningSolution for Plan {
/// #     type Score = HardSoftScore;
/// #     type Entity = Empty;
/// #     type ProblemFacts = ();
/// #     fn score(&self) -> Option<HardSoftScore> { self.score }
/// #     fn set_score(&mut self, score: Option<HardSoftScore>) { self.score = score; }
/// #     fn entities(&self) -> &[Empty] { &self.entities }
/// #     fn entities_mut(&mut self) -> &mut Vec<Empty> { &mut self.entities }
/// #     fn problem_facts(&self) -> &() { &() }
/// #     fn set_problem_facts(&mut self, _: ()) {}
/// # }
///
/// let factory = ScoreDirectorFactory::new(Arc::new(ConstraintSet::<Plan>::new()), true);
/// let director = factory.build(Plan { entities: Vec::new(), score: None });
/// assert!(director.is_incremental());
/// ```
pub struct ScoreDirectorFactory<S: PlanningSolution> {
    constraints: Arc<ConstraintSet<S>>,
    incremental: bool,
}

impl<S: PlanningSolution> ScoreDirectorFactory<S> {
    pub fn new(constraints: Arc<ConstraintSet<S>>, incremental: bool) -> Self {
        Self {
            constraints,
            incremental,
        }
    }

    pub fn constraints(&self) -> &Arc<ConstraintSet<S>> {
        &self.constraints
    }

    pub fn build(&self, solution: S) -> AnyScoreDirector<S> {
        let constraints = Arc::clone(&self.constraints);
        if self.incremental {
            AnyScoreDirector::Incremental(IncrementalScoreDirector::new(solution, constraints))
        } else {
            AnyScoreDirector::Full(FullScoreDirector::new(solution, constraints))
        }
    }
}
