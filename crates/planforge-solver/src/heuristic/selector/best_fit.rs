//! Best-fit swap selection.

use planforge_core::{PlanningSolution, Score, VariableRef};
use planforge_scoring::ScoreDirector;
use rand::rngs::StdRng;

use super::{movable_variable_count, MoveSelector};
use crate::heuristic::r#move::{evaluate_move, AnyMove, Move, SwapMove};

/// Evaluates every swap between variables of different entities and returns
/// the feasible one with the strictly greatest score.
///
/// Ties keep the first swap found. Each call costs
/// `O(entities² × variables²)` score calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestFitMoveSelector;

impl BestFitMoveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution> MoveSelector<S> for BestFitMoveSelector {
    fn select_move<D: ScoreDirector<S>>(
        &mut self,
        director: &mut D,
        _rng: &mut StdRng,
    ) -> Option<AnyMove<S>> {
        let entity_count = director.working_solution().entity_count();
        let mut best: Option<(SwapMove, S::Score)> = None;

        for i in 0..entity_count {
            let left_count = movable_variable_count(director.working_solution(), i);
            for j in (i + 1)..entity_count {
                let right_count = movable_variable_count(director.working_solution(), j);
                for left in 0..left_count {
                    for right in 0..right_count {
                        let mut mv =
                            SwapMove::new(VariableRef::new(i, left), VariableRef::new(j, right));
                        if !Move::<S>::is_doable(&mv, &*director) {
                            continue;
                        }
                        let score = evaluate_move::<S, _, _>(director, &mut mv);
                        if !score.is_feasible() {
                            continue;
                        }
                        let improves = best
                            .as_ref()
                            .map_or(true, |(_, best_score)| score.is_better_than(best_score));
                        if improves {
                            best = Some((mv, score));
                        }
                    }
                }
            }
        }

        best.map(|(mv, _)| AnyMove::Swap(mv))
    }
}
