//! Acceptors for local search move acceptance.
//!
//! An acceptor decides whether the move just executed is kept. The
//! local-search loop calls [`Acceptor::is_accepted`] with the score the move
//! produced; on acceptance it calls [`Acceptor::move_accepted`], otherwise
//! it undoes the move. [`Acceptor::step_ended`] runs after every step,
//! accepted or not.

mod any;
mod hill_climbing;
mod late_acceptance;
mod simulated_annealing;
mod tabu_list;
mod tabu_search;

use std::fmt::Debug;

use planforge_core::{PlanningSolution, Result};
use rand::rngs::StdRng;

use crate::heuristic::r#move::Move;

pub use any::AnyAcceptor;
pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;
pub use simulated_annealing::SimulatedAnnealingAcceptor;
pub use tabu_list::{TabuItem, TabuList};
pub use tabu_search::TabuSearchAcceptor;

/// Trait for accepting or rejecting moves in local search.
///
/// # Type Parameters
/// * `S` - The planning solution type
pub trait Acceptor<S: PlanningSolution>: Send + Debug {
    /// Returns true if the executed move should be kept.
    ///
    /// An error means the acceptor could not judge the move; the caller
    /// treats it as a rejection.
    fn is_accepted<M: Move<S>>(
        &mut self,
        mv: &M,
        last_step_score: &S::Score,
        move_score: &S::Score,
        rng: &mut StdRng,
    ) -> Result<bool>;

    /// Records a move the loop decided to keep.
    fn move_accepted<M: Move<S>>(&mut self, _mv: &M, _move_score: &S::Score) -> Result<()> {
        Ok(())
    }

    /// Called when a phase starts; clears state from any earlier solve.
    fn phase_started(&mut self, _initial_score: &S::Score) {}

    /// Called when a phase ends.
    fn phase_ended(&mut self) {}

    /// Called after every step with the score the step ended on.
    fn step_ended(&mut self, _step_score: &S::Score) {}
}
