//! ChainMove - a sequence of moves applied as one.

use planforge_core::{PlanForgeError, PlanningSolution, Result};
use planforge_scoring::ScoreDirector;
use smallvec::SmallVec;

use super::{digest, Move};

/// Executes sub-moves in order and undoes them in reverse order.
///
/// Reverse undo restores a consistent state even when the sub-moves do not
/// commute. An empty chain does nothing and has no tabu key.
#[derive(Debug, Clone)]
pub struct ChainMove<M> {
    moves: SmallVec<[M; 2]>,
}

impl<M> ChainMove<M> {
    pub fn new(moves: impl IntoIterator<Item = M>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn moves(&self) -> &[M] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl<S, M> Move<S> for ChainMove<M>
where
    S: PlanningSolution,
    M: Move<S>,
{
    /// Only the first sub-move can be checked against the current state.
    fn is_doable<D: ScoreDirector<S> + ?Sized>(&self, director: &D) -> bool {
        self.moves
            .first()
            .is_some_and(|first| first.is_doable(director))
    }

    fn execute<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        for mv in self.moves.iter_mut() {
            mv.execute(director);
        }
    }

    fn undo<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        for mv in self.moves.iter_mut().rev() {
            mv.undo(director);
        }
    }

    fn tabu_key(&self) -> Result<String> {
        if self.moves.is_empty() {
            return Err(PlanForgeError::TabuHash(
                "chain move has no sub-moves".to_string(),
            ));
        }
        let keys = self
            .moves
            .iter()
            .map(|mv| mv.tabu_key())
            .collect::<Result<Vec<_>>>()?;
        Ok(digest(&("chain", keys)))
    }
}
