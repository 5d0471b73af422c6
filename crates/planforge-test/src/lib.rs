//! Shared test fixtures for PlanForge crates.
//!
//! This crate provides data types and pure predicate functions for testing.
//! It does NOT depend on `planforge-scoring` to avoid circular dependencies;
//! each crate wraps the predicates in its own constraints.
//!
//! - [`slots`] - single-variable entities that must take distinct values
//! - [`roster`] - multi-variable shifts staffed from a pool of employees
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! planforge-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use planforge_test::slots::{slot_problem, has_duplicate_values};
//! ```

pub mod roster;
pub mod slots;

pub use roster::{Roster, Shift, Staff};
pub use slots::{Slot, SlotSolution};
