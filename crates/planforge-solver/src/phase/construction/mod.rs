//! Construction heuristic phase.
//!
//! Greedily assigns every unassigned variable of every non-pinned entity.
//!
//! - First fit: entities in order; each variable takes the first value that
//!   leaves the score feasible
//! - First fit decreasing: entities with more variables first; each variable
//!   takes the value with the strictly best score

mod phase;


pub use phase::{entity_order, ConstructionHeuristicPhase};
