//! Solver statistics.
//!
//! Plain counters for solver and phase performance tracking.

use std::time::{Duration, Instant};

/// Solver-level statistics.
///
/// Aggregates metrics across every phase of one solve run.
///
/// # Example
///
/// ```
/// use planforge_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_move(true);
/// stats.record_move(false);
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.moves_evaluated, 2);
/// assert_eq!(stats.moves_accepted, 1);
/// assert_eq!(stats.acceptance_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    frozen_elapsed: Option<Duration>,
    /// Local-search steps taken across all phases.
    pub step_count: u64,
    /// Moves executed and judged by an acceptor.
    pub moves_evaluated: u64,
    /// Moves kept after acceptance.
    pub moves_accepted: u64,
    /// Score calculations reported by the score director.
    pub score_calculations: u64,
    /// Times a strictly better best solution was recorded.
    pub best_solution_improvements: u64,
}

impl SolverStats {
    /// Marks the start of solving and clears every counter.
    pub fn start(&mut self) {
        *self = Self {
            start_time: Some(Instant::now()),
            ..Self::default()
        };
    }

    /// Freezes the elapsed time and records the final calculation count.
    pub fn finish(&mut self, score_calculations: u64) {
        self.frozen_elapsed = Some(self.elapsed());
        self.score_calculations = score_calculations;
    }

    /// Time since solving started, or the solve duration once finished.
    pub fn elapsed(&self) -> Duration {
        self.frozen_elapsed
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_improvement(&mut self) {
        self.best_solution_improvements += 1;
    }

    /// Returns the moves per second rate.
    pub fn moves_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.moves_evaluated as f64 / secs
        } else {
            0.0
        }
    }

    /// Returns the acceptance rate (accepted / evaluated).
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_evaluated as f64
        }
    }
}

/// Phase-level statistics.
///
/// # Example
///
/// ```
/// use planforge_solver::stats::PhaseStats;
///
/// let mut stats = PhaseStats::new(1, "LocalSearch");
/// stats.record_step();
/// stats.record_move(true);
///
/// assert_eq!(stats.phase_index, 1);
/// assert_eq!(stats.phase_type, "LocalSearch");
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.moves_accepted, 1);
/// ```
#[derive(Debug, Clone)]
pub struct PhaseStats {
    /// Index of this phase (0-based).
    pub phase_index: usize,
    /// Type name of the phase.
    pub phase_type: &'static str,
    start_time: Instant,
    pub step_count: u64,
    pub moves_evaluated: u64,
    pub moves_accepted: u64,
}

impl PhaseStats {
    pub fn new(phase_index: usize, phase_type: &'static str) -> Self {
        Self {
            phase_index,
            phase_type,
            start_time: Instant::now(),
            step_count: 0,
            moves_evaluated: 0,
            moves_accepted: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start_time.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
    }

    /// Steps per second, truncated.
    pub fn steps_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.step_count as f64 / secs) as u64
        } else {
            0
        }
    }
}
