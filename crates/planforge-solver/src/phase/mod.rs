//! Solver phases.
//!
//! Phases run in sequence against one [`SolverScope`]:
//! - [`ConstructionHeuristicPhase`]: assigns every unassigned variable
//! - [`LocalSearchPhase`]: improves the assignment move by move

pub mod construction;
pub mod localsearch;

use std::fmt::Debug;

use planforge_core::{PlanningSolution, Result};
use planforge_scoring::ScoreDirector;

use crate::scope::SolverScope;

pub use construction::ConstructionHeuristicPhase;
pub use localsearch::LocalSearchPhase;

/// A phase of the solving process.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `D` - The score director type
pub trait Phase<S: PlanningSolution, D: ScoreDirector<S>>: Send + Debug {
    /// Executes this phase against the working solution in `solver_scope`,
    /// recording improvements as the best solution.
    ///
    /// Errors only on detected score corruption; the working solution is
    /// consistent whenever this returns.
    fn solve(&mut self, solver_scope: &mut SolverScope<S, D>) -> Result<()>;

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
