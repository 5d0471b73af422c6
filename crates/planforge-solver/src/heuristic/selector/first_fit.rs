//! First-fit swap selection.

use planforge_core::{PlanningSolution, VariableRef};
use planforge_scoring::ScoreDirector;
use rand::rngs::StdRng;

use super::{movable_variable_count, MoveSelector};
use crate::heuristic::r#move::{is_feasible_move, AnyMove, SwapMove};

/// Returns the first feasible swap in scan order.
///
/// Scans entity pairs `i < j`, trying each variable of entity `i` against
/// the first variable of entity `j`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstFitMoveSelector;

impl FirstFitMoveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution> MoveSelector<S> for FirstFitMoveSelector {
    fn select_move<D: ScoreDirector<S>>(
        &mut self,
        director: &mut D,
        _rng: &mut StdRng,
    ) -> Option<AnyMove<S>> {
        let entity_count = director.working_solution().entity_count();
        if entity_count < 2 {
            return None;
        }

        for i in 0..entity_count {
            let left_count = movable_variable_count(director.working_solution(), i);
            if left_count == 0 {
                continue;
            }
            for j in (i + 1)..entity_count {
                if movable_variable_count(director.working_solution(), j) == 0 {
                    continue;
                }
                for variable in 0..left_count {
                    let mut mv = SwapMove::new(VariableRef::new(i, variable), VariableRef::new(j, 0));
                    if is_feasible_move::<S, _, _>(director, &mut mv) {
                        return Some(AnyMove::Swap(mv));
                    }
                }
            }
        }
        None
    }
}
