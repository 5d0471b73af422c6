//! Solver-level scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use planforge_core::{PlanningSolution, Score, ScoreLevel};
use planforge_scoring::ScoreDirector;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::stats::SolverStats;

/// Channel end that receives every new best solution with its score.
pub type BestSolutionSender<S> = UnboundedSender<(S, <S as PlanningSolution>::Score)>;

/// Top-level scope for the entire solving process.
///
/// Generic over `D: ScoreDirector<S>` so phases run without dynamic
/// dispatch on the director.
pub struct SolverScope<S: PlanningSolution, D: ScoreDirector<S>> {
    score_director: D,
    best_solution: Option<S>,
    best_score: Option<S::Score>,
    rng: StdRng,
    start_time: Option<Instant>,
    deadline: Option<Instant>,
    time_limit: Option<Duration>,
    step_count: u64,
    last_improvement_step: u64,
    terminate_flag: Option<Arc<AtomicBool>>,
    best_solution_sender: Option<BestSolutionSender<S>>,
    stats: SolverStats,
}

impl<S: PlanningSolution, D: ScoreDirector<S>> SolverScope<S, D> {
    pub fn new(score_director: D) -> Self {
        Self::with_rng(score_director, StdRng::from_os_rng())
    }

    pub fn with_seed(score_director: D, seed: u64) -> Self {
        Self::with_rng(score_director, StdRng::seed_from_u64(seed))
    }

    fn with_rng(score_director: D, rng: StdRng) -> Self {
        Self {
            score_director,
            best_solution: None,
            best_score: None,
            rng,
            start_time: None,
            deadline: None,
            time_limit: None,
            step_count: 0,
            last_improvement_step: 0,
            terminate_flag: None,
            best_solution_sender: None,
            stats: SolverStats::default(),
        }
    }

    /// Sets a wall-clock limit measured from [`start_solving`](Self::start_solving).
    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    /// Shares a stop flag that is polled at every step boundary.
    pub fn with_terminate_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_flag = Some(flag);
        self
    }

    pub fn with_best_solution_sender(mut self, sender: Option<BestSolutionSender<S>>) -> Self {
        self.best_solution_sender = sender;
        self
    }

    pub fn start_solving(&mut self) {
        let now = Instant::now();
        self.start_time = Some(now);
        self.deadline = self.time_limit.map(|limit| now + limit);
        self.step_count = 0;
        self.last_improvement_step = 0;
        self.stats.start();
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn score_director(&self) -> &D {
        &self.score_director
    }

    pub fn score_director_mut(&mut self) -> &mut D {
        &mut self.score_director
    }

    /// Splits the scope into the director and the random generator.
    pub fn director_and_rng(&mut self) -> (&mut D, &mut StdRng) {
        (&mut self.score_director, &mut self.rng)
    }

    pub fn working_solution(&self) -> &S {
        self.score_director.working_solution()
    }

    pub fn calculate_score(&mut self) -> S::Score {
        self.score_director.calculate_score()
    }

    pub fn best_solution(&self) -> Option<&S> {
        self.best_solution.as_ref()
    }

    pub fn best_score(&self) -> Option<&S::Score> {
        self.best_score.as_ref()
    }

    /// Records the working solution as best if it ranks strictly higher.
    ///
    /// Unassigned variables count against the init level, so a partially
    /// assigned solution never outranks a complete one. Returns true when the
    /// best solution changed.
    pub fn update_best_solution(&mut self) -> bool {
        let raw = self.score_director.calculate_score();
        let uninitialized = self.score_director.working_solution().uninitialized_count();
        let score = if uninitialized == 0 {
            raw
        } else {
            let penalty = i64::try_from(uninitialized).unwrap_or(i64::MAX);
            raw + S::Score::of_level(ScoreLevel::Init, -penalty)
        };

        let is_better = self
            .best_score
            .as_ref()
            .map_or(true, |best| score.is_better_than(best));
        if !is_better {
            return false;
        }

        let mut best = self.score_director.clone_working_solution();
        best.set_score(Some(score));
        debug!(
            event = "new_best",
            step = self.step_count,
            score = %score,
        );
        if let Some(sender) = &self.best_solution_sender {
            // A dropped receiver only means nobody is listening anymore.
            let _ = sender.send((best.clone(), score));
        }
        self.best_solution = Some(best);
        self.best_score = Some(score);
        self.last_improvement_step = self.step_count;
        self.stats.record_improvement();
        true
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.step_count += 1;
        self.stats.record_step();
        self.step_count
    }

    /// Local-search steps taken since solving started.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Step at which the best solution last improved.
    pub fn last_improvement_step(&self) -> u64 {
        self.last_improvement_step
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SolverStats {
        &mut self.stats
    }

    /// True once a stop was requested or the deadline passed.
    pub fn is_cancelled(&self) -> bool {
        let stopped = self
            .terminate_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst));
        stopped || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Finalizes statistics and returns them with the best solution.
    pub fn finish(mut self) -> (S, SolverStats) {
        let calculations = self.score_director.calculation_count();
        self.stats.finish(calculations);
        let solution = match self.best_solution {
            Some(best) => best,
            None => self.score_director.clone_working_solution(),
        };
        (solution, self.stats)
    }
}
