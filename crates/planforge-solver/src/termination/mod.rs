//! Termination conditions for the local-search loop.
//!
//! Wall-clock limits and explicit stop requests are observed through
//! [`SolverScope::is_cancelled`], which every phase polls at each step
//! boundary. The conditions here cover everything else.

mod best_score;
mod composite;
mod external;
mod step_count;
mod unimproved;

use std::fmt::Debug;

use planforge_core::PlanningSolution;
use planforge_scoring::ScoreDirector;

use crate::scope::SolverScope;

pub use best_score::BestScoreTermination;
pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use step_count::StepCountTermination;
pub use unimproved::UnimprovedStepCountTermination;

/// Trait for determining when to stop solving.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `D` - The score director type
pub trait Termination<S: PlanningSolution, D: ScoreDirector<S>>: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool;
}

impl<S, D, T> Termination<S, D> for Box<T>
where
    S: PlanningSolution,
    D: ScoreDirector<S>,
    T: Termination<S, D> + ?Sized,
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        (**self).is_terminated(solver_scope)
    }
}

#[cfg(test)]
mod tests;
