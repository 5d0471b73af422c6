//! Random swap selection.

use planforge_core::{PlanningSolution, VariableRef};
use planforge_scoring::ScoreDirector;
use rand::rngs::StdRng;
use rand::Rng;

use super::{movable_variable_count, MoveSelector};
use crate::heuristic::r#move::{is_feasible_move, AnyMove, SwapMove};

/// Samples that end on a self-pairing or an entity without movable
/// variables still count against this bound.
pub const MAX_ATTEMPTS: usize = 10;

/// Samples random swaps and returns the first feasible one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomMoveSelector;

impl RandomMoveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution> MoveSelector<S> for RandomMoveSelector {
    fn select_move<D: ScoreDirector<S>>(
        &mut self,
        director: &mut D,
        rng: &mut StdRng,
    ) -> Option<AnyMove<S>> {
        random_feasible_swap::<S, D>(director, rng).map(AnyMove::Swap)
    }
}

/// Draws up to [`MAX_ATTEMPTS`] swaps and returns the first feasible one.
pub(crate) fn random_feasible_swap<S, D>(director: &mut D, rng: &mut StdRng) -> Option<SwapMove>
where
    S: PlanningSolution,
    D: ScoreDirector<S> + ?Sized,
{
    let entity_count = director.working_solution().entity_count();
    if entity_count < 2 {
        return None;
    }

    for _ in 0..MAX_ATTEMPTS {
        let i = rng.random_range(0..entity_count);
        let j = rng.random_range(0..entity_count);
        if i == j {
            continue;
        }
        let left_count = movable_variable_count(director.working_solution(), i);
        let right_count = movable_variable_count(director.working_solution(), j);
        if left_count == 0 || right_count == 0 {
            continue;
        }
        let mut mv = SwapMove::new(
            VariableRef::new(i, rng.random_range(0..left_count)),
            VariableRef::new(j, rng.random_range(0..right_count)),
        );
        if is_feasible_move::<S, _, _>(director, &mut mv) {
            return Some(mv);
        }
    }
    None
}
