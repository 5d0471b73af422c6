//! Solver entry point that hides all internal wiring.

use std::path::Path;

use planforge_config::{ConfigError, SolverConfig};
use planforge_core::{ParseableScore, PlanForgeError, PlanningSolution};
use planforge_scoring::ConstraintSet;
use planforge_solver::Solver;
use thiserror::Error;
use tracing::debug;

/// Configuration file picked up by [`run_solver`] from the working directory.
pub const CONFIG_FILE: &str = "solver.toml";

/// Errors from the one-call entry points.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solve(#[from] PlanForgeError),
}

/// Solves `problem` with the configuration in `solver.toml`, or the
/// defaults when that file does not exist.
///
/// A `solver.toml` that exists but does not parse is an error.
pub fn run_solver<S>(problem: S, constraints: ConstraintSet<S>) -> Result<S, SolveError>
where
    S: PlanningSolution,
    S::Score: ParseableScore,
{
    let config = if Path::new(CONFIG_FILE).exists() {
        SolverConfig::load(CONFIG_FILE)?
    } else {
        debug!(event = "config_defaults", file = CONFIG_FILE);
        SolverConfig::default()
    };
    run_solver_with_config(problem, constraints, config)
}

/// Solves `problem` with an explicit configuration.
///
/// # Example
///
/// ```
/// use planforge::prelude::*;
/// use planforge_test::slots::{has_duplicate_values, slot_problem};
/// use planforge_test::SlotSolution;
///
/// let constraints = ConstraintSet::new().with(Constraint::hard(
///     "All different",
///     -1,
///     |s: &SlotSolution| has_duplicate_values(s),
/// ));
/// let config = SolverConfig::default()
///     .with_random_seed(3)
///     .with_local_search(LocalSearchConfig::disabled());
///
/// let solution = planforge::run_solver_with_config(slot_problem(3, vec![1, 2, 3]), constraints, config).unwrap();
/// assert_eq!(solution.score, Some(HardSoftScore::ZERO));
/// ```
pub fn run_solver_with_config<S>(
    problem: S,
    constraints: ConstraintSet<S>,
    config: SolverConfig,
) -> Result<S, SolveError>
where
    S: PlanningSolution,
    S::Score: ParseableScore,
{
    #[cfg(feature = "console")]
    crate::console::init();

    let mut solver = Solver::new(config, constraints)?;
    Ok(solver.solve(problem)?)
}
