//! Move selectors for the local-search loop.
//!
//! A selector proposes one move per step. Every candidate is checked with a
//! speculative execute, score, undo cycle, so the solution is unchanged when
//! `select_move` returns; the caller executes the returned move for real.
//!
//! - [`FirstFitMoveSelector`] - first feasible swap in scan order
//! - [`BestFitMoveSelector`] - best feasible swap over every pair
//! - [`RandomMoveSelector`] - bounded random sampling of swaps
//! - [`ChainedMoveSelector`] - one or two random swaps as a chain
//! - [`ChangeMoveSelector`] - first feasible value change in scan order

mod best_fit;
mod chained;
mod change;
mod first_fit;
mod random;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use planforge_config::MoveSelectorType;
use planforge_core::{PlanningEntity, PlanningSolution};
use planforge_scoring::ScoreDirector;
use rand::rngs::StdRng;

use crate::heuristic::r#move::AnyMove;

pub use best_fit::BestFitMoveSelector;
pub use chained::ChainedMoveSelector;
pub use change::ChangeMoveSelector;
pub use first_fit::FirstFitMoveSelector;
pub use random::RandomMoveSelector;

/// Proposes the next move for the local-search loop.
///
/// # Type Parameters
/// * `S` - The planning solution type
pub trait MoveSelector<S: PlanningSolution>: Send + Debug {
    /// Returns a move to try next, or `None` when no candidate qualifies.
    ///
    /// Implementations must leave the working solution as they found it.
    fn select_move<D: ScoreDirector<S>>(
        &mut self,
        director: &mut D,
        rng: &mut StdRng,
    ) -> Option<AnyMove<S>>;

    /// Clears any state kept between calls.
    fn reset(&mut self) {}
}

/// A move selector whose strategy is picked from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyMoveSelector {
    FirstFit(FirstFitMoveSelector),
    BestFit(BestFitMoveSelector),
    Random(RandomMoveSelector),
    Chained(ChainedMoveSelector),
    Change(ChangeMoveSelector),
}

impl AnyMoveSelector {
    pub fn from_type(selector_type: MoveSelectorType) -> Self {
        match selector_type {
            MoveSelectorType::FirstFit => Self::FirstFit(FirstFitMoveSelector::new()),
            MoveSelectorType::BestFit => Self::BestFit(BestFitMoveSelector::new()),
            MoveSelectorType::Random => Self::Random(RandomMoveSelector::new()),
            MoveSelectorType::Chained => Self::Chained(ChainedMoveSelector::new()),
            MoveSelectorType::Change => Self::Change(ChangeMoveSelector::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstFit(_) => "FirstFit",
            Self::BestFit(_) => "BestFit",
            Self::Random(_) => "Random",
            Self::Chained(_) => "Chained",
            Self::Change(_) => "Change",
        }
    }
}

impl<S: PlanningSolution> MoveSelector<S> for AnyMoveSelector {
    fn select_move<D: ScoreDirector<S>>(
        &mut self,
        director: &mut D,
        rng: &mut StdRng,
    ) -> Option<AnyMove<S>> {
        match self {
            Self::FirstFit(s) => MoveSelector::<S>::select_move(s, director, rng),
            Self::BestFit(s) => MoveSelector::<S>::select_move(s, director, rng),
            Self::Random(s) => MoveSelector::<S>::select_move(s, director, rng),
            Self::Chained(s) => MoveSelector::<S>::select_move(s, director, rng),
            Self::Change(s) => MoveSelector::<S>::select_move(s, director, rng),
        }
    }
}

/// Number of variables on an entity the solver may change; zero if pinned
/// or out of bounds.
pub(crate) fn movable_variable_count<S: PlanningSolution>(solution: &S, entity: usize) -> usize {
    solution
        .entities()
        .get(entity)
        .filter(|e| !e.is_pinned())
        .map_or(0, |e| e.variables().len())
}
