//! Late acceptance acceptor.

use planforge_core::{PlanningSolution, Result, Score};
use rand::rngs::StdRng;

use super::Acceptor;
use crate::heuristic::r#move::Move;

/// Accepts moves that improve on the last step or match a score from
/// `late_acceptance_size` steps ago.
///
/// # Example
///
/// ```
/// use planforge_core::HardSoftScore;
/// use planforge_solver::phase::localsearch::LateAcceptanceAcceptor;
///
/// let acceptor = LateAcceptanceAcceptor::<HardSoftScore>::new(400);
/// assert_eq!(acceptor.size(), 400);
/// ```
#[derive(Debug, Clone)]
pub struct LateAcceptanceAcceptor<Sc: Score> {
    history: Vec<Option<Sc>>,
    current_index: usize,
}

impl<Sc: Score> LateAcceptanceAcceptor<Sc> {
    /// Creates an acceptor remembering `late_acceptance_size` step scores,
    /// at least one.
    pub fn new(late_acceptance_size: usize) -> Self {
        Self {
            history: vec![None; late_acceptance_size.max(1)],
            current_index: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.history.len()
    }
}

impl<Sc: Score> Default for LateAcceptanceAcceptor<Sc> {
    fn default() -> Self {
        Self::new(400)
    }
}

impl<S: PlanningSolution> Acceptor<S> for LateAcceptanceAcceptor<S::Score> {
    fn is_accepted<M: Move<S>>(
        &mut self,
        _mv: &M,
        last_step_score: &S::Score,
        move_score: &S::Score,
        _rng: &mut StdRng,
    ) -> Result<bool> {
        if move_score.is_better_than(last_step_score) {
            return Ok(true);
        }
        Ok(match &self.history[self.current_index] {
            Some(late_score) => !move_score.is_worse_than(late_score),
            None => true,
        })
    }

    fn phase_started(&mut self, initial_score: &S::Score) {
        self.history.fill(Some(*initial_score));
        self.current_index = 0;
    }

    fn step_ended(&mut self, step_score: &S::Score) {
        self.history[self.current_index] = Some(*step_score);
        self.current_index = (self.current_index + 1) % self.history.len();
    }
}
