//! Chained random swap selection.

use planforge_core::PlanningSolution;
use planforge_scoring::ScoreDirector;
use rand::rngs::StdRng;
use rand::Rng;

use super::random::random_feasible_swap;
use super::MoveSelector;
use crate::heuristic::r#move::{AnyMove, ChainMove, EitherMove, ScopedMove};

/// Probability of appending a second swap to the chain.
pub const SECOND_MOVE_PROBABILITY: f64 = 0.5;

/// Chains one random feasible swap with, half of the time, a second swap
/// sampled from the state the first one leaves behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainedMoveSelector;

impl ChainedMoveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution> MoveSelector<S> for ChainedMoveSelector {
    fn select_move<D: ScoreDirector<S>>(
        &mut self,
        director: &mut D,
        rng: &mut StdRng,
    ) -> Option<AnyMove<S>> {
        let mut first = random_feasible_swap::<S, D>(director, rng)?;

        let second = if rng.random_bool(SECOND_MOVE_PROBABILITY) {
            let mut scope = ScopedMove::<S, D, _>::new(director, &mut first);
            random_feasible_swap::<S, D>(scope.director_mut(), rng)
        } else {
            None
        };

        let moves = std::iter::once(first)
            .chain(second)
            .map(EitherMove::Swap);
        Some(AnyMove::Chain(ChainMove::new(moves)))
    }
}
