//! Phase-level scope.

use planforge_core::PlanningSolution;
use planforge_scoring::ScoreDirector;

use super::SolverScope;
use crate::stats::PhaseStats;

/// Scope for a single phase of solving.
///
/// # Type Parameters
/// * `'a` - Lifetime of the solver scope reference
/// * `S` - The planning solution type
/// * `D` - The score director type
pub struct PhaseScope<'a, S: PlanningSolution, D: ScoreDirector<S>> {
    solver_scope: &'a mut SolverScope<S, D>,
    starting_score: Option<S::Score>,
    stats: PhaseStats,
}

impl<'a, S: PlanningSolution, D: ScoreDirector<S>> PhaseScope<'a, S, D> {
    pub fn new(
        solver_scope: &'a mut SolverScope<S, D>,
        phase_index: usize,
        phase_type: &'static str,
    ) -> Self {
        let starting_score = solver_scope.best_score().copied();
        Self {
            solver_scope,
            starting_score,
            stats: PhaseStats::new(phase_index, phase_type),
        }
    }

    pub fn phase_index(&self) -> usize {
        self.stats.phase_index
    }

    /// Best score when this phase started.
    pub fn starting_score(&self) -> Option<&S::Score> {
        self.starting_score.as_ref()
    }

    pub fn stats(&self) -> &PhaseStats {
        &self.stats
    }

    pub fn step_count(&self) -> u64 {
        self.stats.step_count
    }

    /// Advances both the phase and the solver step counters.
    pub fn increment_step_count(&mut self) -> u64 {
        self.stats.record_step();
        self.solver_scope.increment_step_count();
        self.stats.step_count
    }

    /// Records a judged move at both phase and solver level.
    pub fn record_move(&mut self, accepted: bool) {
        self.stats.record_move(accepted);
        self.solver_scope.stats_mut().record_move(accepted);
    }

    pub fn solver_scope(&self) -> &SolverScope<S, D> {
        self.solver_scope
    }

    pub fn solver_scope_mut(&mut self) -> &mut SolverScope<S, D> {
        self.solver_scope
    }

    pub fn score_director(&self) -> &D {
        self.solver_scope.score_director()
    }

    pub fn score_director_mut(&mut self) -> &mut D {
        self.solver_scope.score_director_mut()
    }

    pub fn calculate_score(&mut self) -> S::Score {
        self.solver_scope.calculate_score()
    }

    pub fn update_best_solution(&mut self) -> bool {
        self.solver_scope.update_best_solution()
    }
}
