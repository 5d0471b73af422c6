//! Domain model contracts
//!
//! The engine is domain-agnostic. A user model implements:
//! - [`PlanningSolution`] - the working state, owning entities and problem facts
//! - [`PlanningEntity`] - a decision unit owning planning variables
//! - [`PlanningVariable`] - an assignable slot with a [`ValueRange`]
//!
//! Variables are addressed by [`VariableRef`] (entity index, variable index),
//! which doubles as the variable-to-entity lookup used for dirty tracking.

mod traits;
mod value_range;
mod variable;


pub use traits::{PlanningEntity, PlanningSolution, ValueOf, VariableOf};
pub use value_range::{IntRange, ListValueRange, ValueRange};
pub use variable::{BasicVariable, PlanningValue, PlanningVariable, VariableRef};
