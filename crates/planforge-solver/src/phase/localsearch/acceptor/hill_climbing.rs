//! Hill climbing acceptor.

use planforge_core::{PlanningSolution, Result, Score};
use rand::rngs::StdRng;

use super::Acceptor;
use crate::heuristic::r#move::Move;

/// Accepts only moves that produce a strictly better score.
///
/// Gets stuck in the first local optimum it reaches.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution> Acceptor<S> for HillClimbingAcceptor {
    fn is_accepted<M: Move<S>>(
        &mut self,
        _mv: &M,
        last_step_score: &S::Score,
        move_score: &S::Score,
        _rng: &mut StdRng,
    ) -> Result<bool> {
        Ok(move_score.is_better_than(last_step_score))
    }
}
