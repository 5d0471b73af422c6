//! Incremental score director with exact delta scoring.

use std::collections::BTreeSet;
use std::sync::Arc;

use planforge_core::{PlanningSolution, Score, ValueOf, VariableRef};

use super::traits::{write_into, ScoreDirector};
use crate::constraint::ConstraintSet;

/// A score director that keeps a cached score up to date across changes.
///
/// The director remembers which constraints currently match. Before-hooks
/// mark variables (and their entities) dirty; once every opened change has
/// been closed by its after-hook, only the constraints watching a dirty
/// variable are re-evaluated, and the cached score is adjusted by the
/// difference between their stale and fresh contributions.
///
/// Hooks must come in matching pairs. A change left open keeps the cache at
/// its pre-change value until it is closed.
pub struct IncrementalScoreDirector<S: PlanningSolution> {
    working_solution: S,
    constraints: Arc<ConstraintSet<S>>,
    matched: Vec<bool>,
    cached_score: Option<S::Score>,
    dirty_variables: BTreeSet<VariableRef>,
    dirty_entities: BTreeSet<usize>,
    open_changes: usize,
    calculation_count: u64,
}

impl<S: PlanningSolution> IncrementalScoreDirector<S> {
    pub fn new(solution: S, constraints: Arc<ConstraintSet<S>>) -> Self {
        IncrementalScoreDirector {
            working_solution: solution,
            matched: Vec::with_capacity(constraints.len()),
            constraints,
            cached_score: None,
            dirty_variables: BTreeSet::new(),
            dirty_entities: BTreeSet::new(),
            open_changes: 0,
            calculation_count: 0,
        }
    }

    pub fn constraints(&self) -> &ConstraintSet<S> {
        &self.constraints
    }

    /// Entities touched by changes that have not been merged yet.
    pub fn dirty_entities(&self) -> &BTreeSet<usize> {
        &self.dirty_entities
    }

    /// Returns true once a full evaluation has warmed the cache.
    pub fn is_warm(&self) -> bool {
        self.cached_score.is_some()
    }

    /// Consumes the director and returns the working solution.
    pub fn into_working_solution(self) -> S {
        self.working_solution
    }

    fn invalidate(&mut self) {
        self.cached_score = None;
        self.matched.clear();
        self.dirty_variables.clear();
        self.dirty_entities.clear();
        self.open_changes = 0;
    }

    fn warm_up(&mut self) -> S::Score {
        self.matched = self
            .constraints
            .iter()
            .map(|constraint| constraint.matches(&self.working_solution))
            .collect();
        let score = self
            .constraints
            .iter()
            .zip(&self.matched)
            .fold(S::Score::zero(), |total, (constraint, &matched)| {
                total + constraint.contribution::<S::Score>(matched)
            });
        self.cached_score = Some(score);
        score
    }

    fn merge_dirty(&mut self) {
        let Some(mut score) = self.cached_score else {
            self.dirty_variables.clear();
            self.dirty_entities.clear();
            return;
        };

        for (index, constraint) in self.constraints.iter().enumerate() {
            if !self.dirty_variables.iter().any(|&var| constraint.watches(var)) {
                continue;
            }
            let now = constraint.matches(&self.working_solution);
            let was = self.matched[index];
            if now != was {
                score = score - constraint.contribution::<S::Score>(was)
                    + constraint.contribution::<S::Score>(now);
                self.matched[index] = now;
            }
        }

        self.cached_score = Some(score);
        self.dirty_variables.clear();
        self.dirty_entities.clear();
    }
}

impl<S: PlanningSolution> ScoreDirector<S> for IncrementalScoreDirector<S> {
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut S {
        self.invalidate();
        &mut self.working_solution
    }

    fn set_working_solution(&mut self, solution: S) -> S {
        self.invalidate();
        std::mem::replace(&mut self.working_solution, solution)
    }

    fn calculate_score(&mut self) -> S::Score {
        let score = match self.cached_score {
            Some(score) => score,
            None => self.warm_up(),
        };
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

    fn before_variable_changed(&mut self, var: VariableRef) {
        self.dirty_variables.insert(var);
        self.dirty_entities.insert(var.entity);
        self.open_changes += 1;
    }

    fn after_variable_changed(&mut self, var: VariableRef) {
        // An unpaired after-hook still marks the variable so it is merged.
        self.dirty_variables.insert(var);
        self.dirty_entities.insert(var.entity);
        self.open_changes = self.open_changes.saturating_sub(1);
        if self.open_changes == 0 {
            self.merge_dirty();
        }
    }

    fn write_variable(&mut self, var: VariableRef, value: Option<ValueOf<S>>) -> Option<ValueOf<S>> {
        write_into(&mut self.working_solution, var, value)
    }

    fn calculation_count(&self) -> u64 {
        self.calculation_count
    }

    fn is_incremental(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.invalidate();
    }
}
