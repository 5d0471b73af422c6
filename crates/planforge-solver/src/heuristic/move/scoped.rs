//! Speculative move evaluation with guaranteed revert.

use std::marker::PhantomData;

use planforge_core::{PlanningSolution, Score};
use planforge_scoring::ScoreDirector;

use super::Move;

/// Executes a move on construction and undoes it on drop.
///
/// The director is only reachable through the guard while the move is
/// applied, so no other code can observe or mutate the speculative state.
/// Dropping the guard, including during unwinding, restores the solution
/// together with the score it carried before the move.
pub struct ScopedMove<'a, S, D, M>
where
    S: PlanningSolution,
    D: ScoreDirector<S> + ?Sized,
    M: Move<S>,
{
    director: &'a mut D,
    mv: &'a mut M,
    score_before: Option<S::Score>,
    _solution: PhantomData<fn() -> S>,
}

impl<'a, S, D, M> ScopedMove<'a, S, D, M>
where
    S: PlanningSolution,
    D: ScoreDirector<S> + ?Sized,
    M: Move<S>,
{
    pub fn new(director: &'a mut D, mv: &'a mut M) -> Self {
        let score_before = director.working_solution().score();
        mv.execute(director);
        Self {
            director,
            mv,
            score_before,
            _solution: PhantomData,
        }
    }

    pub fn director(&self) -> &D {
        &*self.director
    }

    /// Gives access to the director with the move still applied.
    ///
    /// Further speculative moves made through it must be undone before the
    /// guard drops.
    pub fn director_mut(&mut self) -> &mut D {
        &mut *self.director
    }

    /// Scores the solution with the move applied.
    pub fn score(&mut self) -> S::Score {
        (*self.director).calculate_score()
    }
}

impl<S, D, M> Drop for ScopedMove<'_, S, D, M>
where
    S: PlanningSolution,
    D: ScoreDirector<S> + ?Sized,
    M: Move<S>,
{
    fn drop(&mut self) {
        self.mv.undo(&mut *self.director);
        self.director.restore_working_score(self.score_before);
    }
}

/// Returns the score the move would produce, leaving the solution unchanged.
pub fn evaluate_move<S, D, M>(director: &mut D, mv: &mut M) -> S::Score
where
    S: PlanningSolution,
    D: ScoreDirector<S> + ?Sized,
    M: Move<S>,
{
    ScopedMove::new(director, mv).score()
}

/// Returns true if the move is doable and its resulting score is feasible.
pub fn is_feasible_move<S, D, M>(director: &mut D, mv: &mut M) -> bool
where
    S: PlanningSolution,
    D: ScoreDirector<S> + ?Sized,
    M: Move<S>,
{
    mv.is_doable(&*director) && evaluate_move(director, mv).is_feasible()
}
