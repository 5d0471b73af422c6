//! The `Move` trait.

use std::fmt::Debug;

use planforge_core::{PlanningSolution, Result};
use planforge_scoring::ScoreDirector;

/// A reversible transition over one or more planning variables.
///
/// Moves are transient: selectors create them per step and the solver
/// either keeps the result or undoes it. Tabu memory keeps only the
/// move's [`tabu_key`](Move::tabu_key), never the move itself.
pub trait Move<S: PlanningSolution>: Send + Debug {
    /// Returns true if this move may be executed in the current state.
    ///
    /// This is the veto hook for moves that would change nothing or that
    /// a domain rule forbids. Selectors skip vetoed moves.
    fn is_doable<D: ScoreDirector<S> + ?Sized>(&self, _director: &D) -> bool {
        true
    }

    /// Applies the move through the director's change hooks.
    fn execute<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D);

    /// Reverts the last `execute`.
    fn undo<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D);

    /// Returns a key identifying this move for tabu memory.
    ///
    /// Two moves with the same effect produce the same key.
    fn tabu_key(&self) -> Result<String>;
}
