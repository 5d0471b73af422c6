//! Change move selection.

use planforge_core::{PlanningEntity, PlanningSolution, PlanningVariable, ValueOf, VariableRef};
use planforge_scoring::ScoreDirector;
use rand::rngs::StdRng;

use super::MoveSelector;
use crate::heuristic::r#move::{is_feasible_move, AnyMove, ChangeMove};

/// Returns the first feasible change in entity, variable, value order.
///
/// Values equal to the variable's current value are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeMoveSelector;

impl ChangeMoveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution> MoveSelector<S> for ChangeMoveSelector {
    fn select_move<D: ScoreDirector<S>>(
        &mut self,
        director: &mut D,
        _rng: &mut StdRng,
    ) -> Option<AnyMove<S>> {
        let entity_count = director.working_solution().entity_count();
        for entity in 0..entity_count {
            let variable_count = match director.working_solution().entities().get(entity) {
                Some(e) if !e.is_pinned() => e.variables().len(),
                _ => continue,
            };
            for variable in 0..variable_count {
                let var = VariableRef::new(entity, variable);
                for value in candidate_values(director.working_solution(), var) {
                    let mut mv = ChangeMove::new(var, Some(value));
                    if is_feasible_move::<S, _, _>(director, &mut mv) {
                        return Some(AnyMove::Change(mv));
                    }
                }
            }
        }
        None
    }
}

/// Values in the variable's range other than its current one.
pub(crate) fn candidate_values<S: PlanningSolution>(solution: &S, var: VariableRef) -> Vec<ValueOf<S>> {
    let Some(variable) = solution.variable(var) else {
        return Vec::new();
    };
    let current = variable.value();
    variable
        .value_range()
        .create_iterator()
        .filter(|value| Some(value) != current)
        .collect()
}
