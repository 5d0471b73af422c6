//! Constraint evaluation and score directors for PlanForge
//!
//! - [`Constraint`] / [`ConstraintSet`]: named, weighted predicates over a solution
//! - [`ScoreDirector`]: the single mediator for variable mutation and scoring
//! - [`FullScoreDirector`]: recalculates every constraint on each call
//! - [`IncrementalScoreDirector`]: re-evaluates only constraints touched by a change

pub mod constraint;
pub mod director;

pub use constraint::{Constraint, ConstraintMatch, ConstraintSet};
pub use director::{
    AnyScoreDirector, FullScoreDirector, IncrementalScoreDirector, ScoreDirector,
    ScoreDirectorFactory,
};
