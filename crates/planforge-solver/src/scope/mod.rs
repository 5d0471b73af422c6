//! Scope hierarchy for solver execution.
//!
//! - [`SolverScope`]: one per solve; owns the score director, the best
//!   solution, the random generator and the cancellation state
//! - [`PhaseScope`]: borrowed per phase; tracks phase statistics

mod phase;
mod solver;

pub use phase::PhaseScope;
pub use solver::{BestSolutionSender, SolverScope};
