//! Solver implementation.

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use planforge_config::{ConfigError, ScoreDirectorType, SolverConfig};
use planforge_core::{ParseableScore, PlanForgeError, PlanningSolution};
use planforge_scoring::{AnyScoreDirector, ConstraintSet, ScoreDirectorFactory};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::info;

use crate::builder::PhaseBuilder;
use crate::phase::Phase;
use crate::scope::{BestSolutionSender, SolverScope};
use crate::stats::SolverStats;

/// Runs construction followed by local search on a planning problem.
///
/// A solver owns its configuration and constraints and can solve any
/// number of problems one after the other. Each [`solve`](Self::solve)
/// starts from fresh acceptor, selector and termination state.
///
/// # Example
///
/// ```
/// use planforge_config::{SolverConfig, TerminationConfig};
/// use planforge_core::Score;
/// use planforge_scoring::{Constraint, ConstraintSet};
/// use planforge_solver::Solver;
/// use planforge_test::slots::{has_duplicate_values, slot_problem};
/// use planforge_test::SlotSolution;
///
/// let mut constraints = ConstraintSet::new();
/// constraints.add(Constraint::hard("All different", -1, |s: &SlotSolution| {
///     has_duplicate_values(s)
/// }));
///
/// let config = SolverConfig::default()
///     .with_random_seed(42)
///     .with_termination(TerminationConfig::none().with_step_count_limit(20));
/// let mut solver = Solver::new(config, constraints).unwrap();
/// let solution = solver.solve(slot_problem(2, vec![1, 2, 3])).unwrap();
/// assert!(solution.score.unwrap().is_feasible());
/// ```
pub struct Solver<S: PlanningSolution> {
    config: SolverConfig,
    constraints: Arc<ConstraintSet<S>>,
    best_score_limit: Option<S::Score>,
    terminate_flag: Arc<AtomicBool>,
    best_solution_sender: Option<BestSolutionSender<S>>,
    last_stats: Option<SolverStats>,
}

impl<S> Solver<S>
where
    S: PlanningSolution,
    S::Score: ParseableScore,
{
    /// Creates a solver, rejecting configuration that cannot be clamped.
    pub fn new(
        config: SolverConfig,
        constraints: impl Into<Arc<ConstraintSet<S>>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let best_score_limit = config.termination.parse_best_score_limit::<S::Score>()?;
        Ok(Self {
            config,
            constraints: constraints.into(),
            best_score_limit,
            terminate_flag: Arc::new(AtomicBool::new(false)),
            best_solution_sender: None,
            last_stats: None,
        })
    }

    /// Streams every new best solution to `sender`.
    pub fn with_best_solution_sender(mut self, sender: BestSolutionSender<S>) -> Self {
        self.best_solution_sender = Some(sender);
        self
    }

    /// Opens a channel that receives every new best solution of later solves.
    ///
    /// Replaces any previously configured sender.
    pub fn subscribe(&mut self) -> UnboundedReceiver<(S, S::Score)> {
        let (sender, receiver) = unbounded_channel();
        self.best_solution_sender = Some(sender);
        receiver
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn constraints(&self) -> &ConstraintSet<S> {
        &self.constraints
    }

    /// Returns a handle that can stop a running solve from another thread.
    pub fn handle(&self) -> SolverHandle {
        SolverHandle {
            flag: Arc::clone(&self.terminate_flag),
        }
    }

    /// Requests the running solve to stop at its next step boundary.
    pub fn stop(&self) {
        self.terminate_flag.store(true, Ordering::SeqCst);
    }

    /// True after a stop request or once the last solve returned.
    pub fn is_terminated(&self) -> bool {
        self.terminate_flag.load(Ordering::SeqCst)
    }

    /// Statistics of the most recent solve.
    pub fn stats(&self) -> Option<&SolverStats> {
        self.last_stats.as_ref()
    }

    /// Solves `problem` and returns the best solution found, with its score set.
    ///
    /// Stops when the local-search termination fires, the time limit passes,
    /// [`stop`](Self::stop) is called or no move is left. A stop request
    /// issued before this call is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`PlanForgeError::ScoreCorruption`] when `full_assert` mode
    /// catches the incremental score drifting from a full recalculation.
    pub fn solve(&mut self, problem: S) -> Result<S, PlanForgeError> {
        self.terminate_flag.store(false, Ordering::SeqCst);

        let incremental = self.config.score_director == ScoreDirectorType::Incremental;
        let director =
            ScoreDirectorFactory::new(Arc::clone(&self.constraints), incremental).build(problem);
        let scope = match self.config.effective_seed() {
            Some(seed) => SolverScope::with_seed(director, seed),
            None => SolverScope::new(director),
        };
        let mut scope = scope
            .with_time_limit(self.config.time_limit())
            .with_terminate_flag(Arc::clone(&self.terminate_flag))
            .with_best_solution_sender(self.best_solution_sender.clone());

        scope.start_solving();
        let initial_score = scope.calculate_score();
        scope.update_best_solution();
        let solution = scope.working_solution();
        info!(
            event = "solve_start",
            entity_count = solution.entity_count(),
            variable_count = solution.variable_refs().len(),
            uninitialized = solution.uninitialized_count(),
            parallel_thread_count = self.config.parallel_thread_count,
            seed = ?self.config.effective_seed(),
            score = %initial_score,
        );

        let outcome = self.run_phases(&mut scope);

        self.terminate_flag.store(true, Ordering::SeqCst);
        let uninitialized = scope.working_solution().uninitialized_count();
        let (best, stats) = scope.finish();
        let best_score = best
            .score()
            .map_or_else(|| "none".to_string(), |score| score.to_string());
        info!(
            event = "solve_end",
            duration_ms = stats.elapsed().as_millis() as u64,
            steps = stats.step_count,
            moves_evaluated = stats.moves_evaluated,
            moves_accepted = stats.moves_accepted,
            score_calculations = stats.score_calculations,
            uninitialized,
            best_score = %best_score,
        );
        self.last_stats = Some(stats);
        outcome.map(|()| best)
    }

    fn run_phases(
        &self,
        scope: &mut SolverScope<S, AnyScoreDirector<S>>,
    ) -> Result<(), PlanForgeError> {
        let mut construction = PhaseBuilder::construction(&self.config);
        construction.solve(scope)?;

        if let Some(mut local_search) = PhaseBuilder::local_search::<S, AnyScoreDirector<S>>(
            &self.config,
            self.best_score_limit,
            Arc::clone(&self.terminate_flag),
        ) {
            local_search.solve(scope)?;
        }
        Ok(())
    }
}

impl<S: PlanningSolution> Debug for Solver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("config", &self.config)
            .field("constraints", &self.constraints.len())
            .field("terminated", &self.terminate_flag.load(Ordering::SeqCst))
            .finish()
    }
}

/// Cloneable stop switch for a [`Solver`].
///
/// # Example
///
/// ```
/// use planforge_config::SolverConfig;
/// use planforge_scoring::ConstraintSet;
/// use planforge_solver::Solver;
/// use planforge_test::SlotSolution;
///
/// let solver = Solver::<SlotSolution>::new(SolverConfig::default(), ConstraintSet::new()).unwrap();
/// let handle = solver.handle();
/// assert!(!handle.is_terminated());
/// handle.stop();
/// assert!(solver.is_terminated());
/// ```
#[derive(Debug, Clone)]
pub struct SolverHandle {
    flag: Arc<AtomicBool>,
}

impl SolverHandle {
    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_terminated(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
