//! Local search phase implementation.

use std::fmt::Debug;

use planforge_core::{PlanForgeError, PlanningSolution, Result};
use planforge_scoring::ScoreDirector;
use tracing::{debug, error, info, trace, warn};

use crate::heuristic::r#move::Move;
use crate::heuristic::selector::MoveSelector;
use crate::phase::localsearch::Acceptor;
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};
use crate::termination::Termination;

/// Local search phase that improves an existing solution.
///
/// Per step:
/// 1. Stop if cancelled, if the termination fires, or if the selector has
///    no move
/// 2. Execute the selected move and score it
/// 3. Keep it if the acceptor accepts, otherwise undo it
/// 4. Record a new best solution if the kept move improved on it
///
/// # Type Parameters
/// * `MS` - The move selector type
/// * `A` - The acceptor type
/// * `T` - The termination type
pub struct LocalSearchPhase<MS, A, T> {
    move_selector: MS,
    acceptor: A,
    termination: T,
    phase_index: usize,
    assert_scores: bool,
}

impl<MS, A, T> LocalSearchPhase<MS, A, T> {
    pub fn new(move_selector: MS, acceptor: A, termination: T) -> Self {
        Self {
            move_selector,
            acceptor,
            termination,
            phase_index: 1,
            assert_scores: false,
        }
    }

    pub fn with_phase_index(mut self, phase_index: usize) -> Self {
        self.phase_index = phase_index;
        self
    }

    /// Compares the director's score with a full recalculation after every
    /// step and fails the phase on a mismatch.
    pub fn with_score_assertions(mut self, enabled: bool) -> Self {
        self.assert_scores = enabled;
        self
    }

    pub fn acceptor(&self) -> &A {
        &self.acceptor
    }
}

impl<MS: Debug, A: Debug, T: Debug> Debug for LocalSearchPhase<MS, A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("move_selector", &self.move_selector)
            .field("acceptor", &self.acceptor)
            .field("termination", &self.termination)
            .field("phase_index", &self.phase_index)
            .field("assert_scores", &self.assert_scores)
            .finish()
    }
}

impl<S, D, MS, A, T> Phase<S, D> for LocalSearchPhase<MS, A, T>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
    MS: MoveSelector<S>,
    A: Acceptor<S>,
    T: Termination<S, D>,
{
    fn solve(&mut self, solver_scope: &mut SolverScope<S, D>) -> Result<()> {
        let phase_type = <Self as Phase<S, D>>::phase_type_name(self);
        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_index, phase_type);

        let mut last_step_score = phase_scope.calculate_score();
        self.acceptor.phase_started(&last_step_score);
        self.move_selector.reset();
        info!(
            event = "phase_start",
            phase = phase_type,
            phase_index = self.phase_index,
            acceptor = ?self.acceptor,
            score = %last_step_score,
        );

        let outcome = loop {
            if phase_scope.solver_scope().is_cancelled()
                || self.termination.is_terminated(phase_scope.solver_scope())
            {
                break Ok(());
            }

            let (director, rng) = phase_scope.solver_scope_mut().director_and_rng();
            let Some(mut mv) = self.move_selector.select_move(director, rng) else {
                debug!(event = "no_move", phase = phase_type);
                break Ok(());
            };

            mv.execute(director);
            let move_score = director.calculate_score();
            let verdict = self
                .acceptor
                .is_accepted(&mv, &last_step_score, &move_score, rng)
                .and_then(|accepted| {
                    if accepted {
                        self.acceptor.move_accepted(&mv, &move_score)?;
                    }
                    Ok(accepted)
                });
            let accepted = verdict.unwrap_or_else(|err| {
                warn!(event = "move_rejected", error = %err, mv = ?mv);
                false
            });

            if accepted {
                last_step_score = move_score;
            } else {
                mv.undo(director);
            }

            if self.assert_scores {
                let cached = director.calculate_score();
                let recalculated = director.calculate_full_score();
                if cached != recalculated {
                    error!(
                        event = "score_corruption",
                        mv = ?mv,
                        cached = %cached,
                        recalculated = %recalculated,
                    );
                    break Err(PlanForgeError::ScoreCorruption {
                        after: format!("{:?}", mv),
                        cached: cached.to_string(),
                        recalculated: recalculated.to_string(),
                    });
                }
            }

            phase_scope.record_move(accepted);
            let step = phase_scope.increment_step_count();
            if accepted {
                phase_scope.update_best_solution();
            }
            self.acceptor.step_ended(&last_step_score);
            trace!(
                event = "step",
                step,
                accepted,
                score = %last_step_score,
            );
        };

        self.acceptor.phase_ended();
        let best_score = phase_scope
            .solver_scope()
            .best_score()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        let stats = phase_scope.stats();
        info!(
            event = "phase_end",
            phase = phase_type,
            phase_index = self.phase_index,
            duration_ms = stats.elapsed_ms(),
            steps = stats.step_count,
            moves_accepted = stats.moves_accepted,
            steps_per_sec = stats.steps_per_second(),
            score = %last_step_score,
            best_score = %best_score,
        );
        outcome
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
