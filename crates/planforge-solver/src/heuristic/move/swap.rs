//! SwapMove - exchanges the values of two variables.

use planforge_core::{PlanningSolution, Result, VariableRef};
use planforge_scoring::ScoreDirector;

use super::{digest, Move};

/// A move that exchanges the values of two variables.
///
/// Swapping is its own inverse, so `undo` executes the swap again.
///
/// # Example
///
/// ```
/// use planforge_core::VariableRef;
/// use planforge_solver::heuristic::{Move, SwapMove};
/// # use planforge_test::SlotSolution;
///
/// let a = VariableRef::new(0, 0);
/// let b = VariableRef::new(1, 0);
/// let forward = <SwapMove as Move<SlotSolution>>::tabu_key(&SwapMove::new(a, b)).unwrap();
/// let backward = <SwapMove as Move<SlotSolution>>::tabu_key(&SwapMove::new(b, a)).unwrap();
/// assert_eq!(forward, backward);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapMove {
    left: VariableRef,
    right: VariableRef,
}

impl SwapMove {
    pub fn new(left: VariableRef, right: VariableRef) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> VariableRef {
        self.left
    }

    pub fn right(&self) -> VariableRef {
        self.right
    }
}

impl<S: PlanningSolution> Move<S> for SwapMove {
    fn is_doable<D: ScoreDirector<S> + ?Sized>(&self, director: &D) -> bool {
        let solution = director.working_solution();
        self.left != self.right
            && solution.variable(self.left).is_some()
            && solution.variable(self.right).is_some()
            && solution.variable_value(self.left) != solution.variable_value(self.right)
    }

    fn execute<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        director.swap_variables(self.left, self.right);
    }

    fn undo<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        director.swap_variables(self.left, self.right);
    }

    fn tabu_key(&self) -> Result<String> {
        let (low, high) = if self.left <= self.right {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        };
        Ok(digest(&("swap", low, high)))
    }
}
