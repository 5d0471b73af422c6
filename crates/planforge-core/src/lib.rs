//! PlanForge Core - score algebra and domain contracts
//!
//! This crate provides the leaf abstractions the engine is built on:
//! - [`Score`] and [`HardSoftScore`] for ordered multi-level solution quality
//! - Domain contracts ([`PlanningSolution`], [`PlanningEntity`],
//!   [`PlanningVariable`], [`ValueRange`]) implemented by user models
//! - [`ConstraintKind`] for placing constraint weights on a score level
//! - [`PlanForgeError`], the engine-wide error type

pub mod constraint;
pub mod domain;
pub mod error;
pub mod score;

pub use constraint::ConstraintKind;
pub use domain::{
    BasicVariable, IntRange, ListValueRange, PlanningEntity, PlanningSolution, PlanningValue,
    PlanningVariable, ValueOf, ValueRange, VariableOf, VariableRef,
};
pub use error::{PlanForgeError, Result};
pub use score::{HardSoftScore, ParseableScore, Score, ScoreLevel, ScoreParseError};
