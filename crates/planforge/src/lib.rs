//! PlanForge - A planning-problem solver in Rust
//!
//! Describe the problem through the domain traits, score it with a
//! [`ConstraintSet`], and hand both to a [`Solver`].
//!
//! # Example
//!
//! ```rust
//! use planforge::prelude::*;
//!
//! // Score types are re-exported
//! let score = HardSoftScore::of(0, -100);
//! assert_eq!(score.hard(), 0);
//! assert_eq!(score.soft(), -100);
//! assert!(score.is_feasible());
//! ```

// Score types
pub use planforge_core::{HardSoftScore, ParseableScore, Score, ScoreLevel, ScoreParseError};

// Domain contracts
pub use planforge_core::{
    BasicVariable, ConstraintKind, IntRange, ListValueRange, PlanForgeError, PlanningEntity,
    PlanningSolution, PlanningValue, PlanningVariable, ValueOf, ValueRange, VariableOf,
    VariableRef,
};

// Constraints and score directors
pub use planforge_scoring::{
    AnyScoreDirector, Constraint, ConstraintMatch, ConstraintSet, FullScoreDirector,
    IncrementalScoreDirector, ScoreDirector, ScoreDirectorFactory,
};

// Configuration
pub use planforge_config::{
    AspirationCriterion, ConfigError, ConstructionHeuristicType, EnvironmentMode,
    LocalSearchConfig, LocalSearchType, MoveSelectorType, ScoreDirectorType, SolverConfig,
    TerminationConfig,
};

// Solver
pub use planforge_solver::{Solver, SolverHandle, SolverStats};

/// Search building blocks for custom phase setups.
pub mod search {
    pub use planforge_solver::builder;
    pub use planforge_solver::heuristic;
    pub use planforge_solver::phase;
    pub use planforge_solver::scope;
    pub use planforge_solver::stats;
    pub use planforge_solver::termination;
}

/// Receiving end of a best-solution stream opened with [`Solver::subscribe`].
pub type BestSolutionReceiver<S> =
    tokio::sync::mpsc::UnboundedReceiver<(S, <S as PlanningSolution>::Score)>;

#[cfg(feature = "console")]
pub mod console;

mod solver;
pub use solver::{run_solver, run_solver_with_config, SolveError, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        BasicVariable, Constraint, ConstraintSet, HardSoftScore, IntRange, ListValueRange,
        LocalSearchConfig, PlanningEntity, PlanningSolution, PlanningVariable, Score,
        SolverConfig, TerminationConfig, ValueRange,
    };
    pub use super::{run_solver, run_solver_with_config, Solver, SolverHandle};
}
