//! Construction heuristic phase implementation.

use planforge_config::ConstructionHeuristicType;
use planforge_core::{
    PlanningEntity, PlanningSolution, PlanningVariable, Result, Score, ValueOf, VariableRef,
};
use planforge_scoring::ScoreDirector;
use tracing::{debug, info};

use crate::heuristic::r#move::{evaluate_move, ChangeMove};
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};

/// Builds an initial assignment before local search.
///
/// Variables that already hold a value are left as they are, and so are
/// pinned entities. The phase polls cancellation between entities.
///
/// # Example
///
/// ```
/// use planforge_config::ConstructionHeuristicType;
/// use planforge_solver::phase::ConstructionHeuristicPhase;
///
/// let phase = ConstructionHeuristicPhase::new(ConstructionHeuristicType::FirstFitDecreasing);
/// assert_eq!(phase.heuristic(), ConstructionHeuristicType::FirstFitDecreasing);
/// ```
#[derive(Debug, Clone)]
pub struct ConstructionHeuristicPhase {
    heuristic: ConstructionHeuristicType,
    phase_index: usize,
}

impl ConstructionHeuristicPhase {
    pub fn new(heuristic: ConstructionHeuristicType) -> Self {
        Self {
            heuristic,
            phase_index: 0,
        }
    }

    pub fn with_phase_index(mut self, phase_index: usize) -> Self {
        self.phase_index = phase_index;
        self
    }

    pub fn heuristic(&self) -> ConstructionHeuristicType {
        self.heuristic
    }

    /// Assigns the first value whose score is feasible.
    ///
    /// When no value is feasible the variable keeps the best-scoring one.
    fn first_fit<S, D>(director: &mut D, var: VariableRef, values: Vec<ValueOf<S>>) -> bool
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
    {
        let mut fallback: Option<(ValueOf<S>, S::Score)> = None;
        for value in values {
            director.change_variable(var, Some(value.clone()));
            let score = director.calculate_score();
            if score.is_feasible() {
                return true;
            }
            if fallback
                .as_ref()
                .map_or(true, |(_, best)| score.is_better_than(best))
            {
                fallback = Some((value, score));
            }
        }
        match fallback {
            Some((value, _)) => {
                director.change_variable(var, Some(value));
                director.calculate_score();
                true
            }
            None => false,
        }
    }

    /// Evaluates every value and commits the one with the strictly best score.
    fn best_fit<S, D>(director: &mut D, var: VariableRef, values: Vec<ValueOf<S>>) -> bool
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
    {
        let mut best: Option<(ValueOf<S>, S::Score)> = None;
        for value in values {
            let mut mv = ChangeMove::<S>::new(var, Some(value.clone()));
            let score = evaluate_move::<S, _, _>(director, &mut mv);
            if best
                .as_ref()
                .map_or(true, |(_, best_score)| score.is_better_than(best_score))
            {
                best = Some((value, score));
            }
        }
        match best {
            Some((value, _)) => {
                director.change_variable(var, Some(value));
                director.calculate_score();
                true
            }
            None => false,
        }
    }
}

/// Order in which entities are constructed.
///
/// First fit decreasing sorts by variable count, largest first. The sort is
/// stable, so entities with equal counts keep their relative order.
pub fn entity_order<S: PlanningSolution>(
    solution: &S,
    heuristic: ConstructionHeuristicType,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..solution.entity_count()).collect();
    if heuristic == ConstructionHeuristicType::FirstFitDecreasing {
        let entities = solution.entities();
        order.sort_by(|&a, &b| {
            entities[b]
                .variables()
                .len()
                .cmp(&entities[a].variables().len())
        });
    }
    order
}

impl<S, D> Phase<S, D> for ConstructionHeuristicPhase
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
{
    fn solve(&mut self, solver_scope: &mut SolverScope<S, D>) -> Result<()> {
        let phase_type = <Self as Phase<S, D>>::phase_type_name(self);
        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_index, phase_type);
        info!(
            event = "phase_start",
            phase = phase_type,
            phase_index = self.phase_index,
            heuristic = ?self.heuristic,
        );

        let order = entity_order(phase_scope.solver_scope().working_solution(), self.heuristic);
        let mut assigned = 0u64;
        let mut cancelled = false;

        for entity in order {
            if phase_scope.solver_scope().is_cancelled() {
                cancelled = true;
                break;
            }
            let pending: Vec<(VariableRef, Vec<ValueOf<S>>)> = {
                let solution = phase_scope.solver_scope().working_solution();
                let Some(e) = solution.entities().get(entity) else {
                    continue;
                };
                if e.is_pinned() {
                    continue;
                }
                e.variables()
                    .iter()
                    .enumerate()
                    .filter(|(_, variable)| !variable.is_initialized())
                    .map(|(index, variable)| {
                        let values = variable.value_range().create_iterator().collect();
                        (VariableRef::new(entity, index), values)
                    })
                    .collect()
            };

            for (var, values) in pending {
                let director = phase_scope.score_director_mut();
                let placed = match self.heuristic {
                    ConstructionHeuristicType::FirstFit => Self::first_fit(director, var, values),
                    ConstructionHeuristicType::FirstFitDecreasing => {
                        Self::best_fit(director, var, values)
                    }
                };
                if placed {
                    assigned += 1;
                } else {
                    debug!(event = "empty_value_range", variable = %var);
                }
            }
        }

        phase_scope.update_best_solution();
        let score = phase_scope.calculate_score();
        info!(
            event = "phase_end",
            phase = phase_type,
            phase_index = self.phase_index,
            duration_ms = phase_scope.stats().elapsed_ms(),
            assigned,
            cancelled,
            score = %score,
        );
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "ConstructionHeuristic"
    }
}
