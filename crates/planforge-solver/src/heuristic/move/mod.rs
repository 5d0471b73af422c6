//! Move system for modifying planning solutions.
//!
//! Moves are the reversible transitions the solver explores. Every move
//! writes through the score director so change hooks stay paired, and
//! `undo` after `execute` restores the exact previous assignment.
//!
//! - `ChangeMove<S>` - assigns a value to one variable
//! - `SwapMove` - exchanges the values of two variables
//! - `ChainMove<M>` - runs sub-moves in order, undoes them in reverse
//! - `EitherMove<S>` / `AnyMove<S>` - closed unions used by selectors
//!
//! [`ScopedMove`] wraps the speculative execute, evaluate, undo pattern.

mod any;
mod chain;
mod change;
mod scoped;
mod swap;
mod traits;

#[cfg(test)]
mod tests;

pub use any::{AnyMove, EitherMove};
pub use chain::ChainMove;
pub use change::ChangeMove;
pub use scoped::{evaluate_move, is_feasible_move, ScopedMove};
pub use swap::SwapMove;
pub use traits::Move;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stable hexadecimal digest used for tabu keys.
pub(crate) fn digest(value: &impl Hash) -> String {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
