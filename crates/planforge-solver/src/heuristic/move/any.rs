//! Closed move unions produced by the selectors.

use std::fmt::{self, Debug};

use planforge_core::{PlanningSolution, Result};
use planforge_scoring::ScoreDirector;

use super::{ChainMove, ChangeMove, Move, SwapMove};

/// A single-step move: either a change or a swap.
pub enum EitherMove<S: PlanningSolution> {
    Change(ChangeMove<S>),
    Swap(SwapMove),
}

/// Any move a selector can return.
pub enum AnyMove<S: PlanningSolution> {
    Change(ChangeMove<S>),
    Swap(SwapMove),
    Chain(ChainMove<EitherMove<S>>),
}

macro_rules! dispatch {
    ($self:expr, $mv:ident => $body:expr, [$($variant:ident),+]) => {
        match $self {
            $(Self::$variant($mv) => $body,)+
        }
    };
}

impl<S: PlanningSolution> Move<S> for EitherMove<S> {
    fn is_doable<D: ScoreDirector<S> + ?Sized>(&self, director: &D) -> bool {
        dispatch!(self, mv => Move::<S>::is_doable(mv, director), [Change, Swap])
    }

    fn execute<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        dispatch!(self, mv => Move::<S>::execute(mv, director), [Change, Swap])
    }

    fn undo<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        dispatch!(self, mv => Move::<S>::undo(mv, director), [Change, Swap])
    }

    fn tabu_key(&self) -> Result<String> {
        dispatch!(self, mv => Move::<S>::tabu_key(mv), [Change, Swap])
    }
}

impl<S: PlanningSolution> Move<S> for AnyMove<S> {
    fn is_doable<D: ScoreDirector<S> + ?Sized>(&self, director: &D) -> bool {
        dispatch!(self, mv => Move::<S>::is_doable(mv, director), [Change, Swap, Chain])
    }

    fn execute<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        dispatch!(self, mv => Move::<S>::execute(mv, director), [Change, Swap, Chain])
    }

    fn undo<D: ScoreDirector<S> + ?Sized>(&mut self, director: &mut D) {
        dispatch!(self, mv => Move::<S>::undo(mv, director), [Change, Swap, Chain])
    }

    fn tabu_key(&self) -> Result<String> {
        dispatch!(self, mv => Move::<S>::tabu_key(mv), [Change, Swap, Chain])
    }
}

impl<S: PlanningSolution> From<ChangeMove<S>> for AnyMove<S> {
    fn from(mv: ChangeMove<S>) -> Self {
        Self::Change(mv)
    }
}

impl<S: PlanningSolution> From<SwapMove> for AnyMove<S> {
    fn from(mv: SwapMove) -> Self {
        Self::Swap(mv)
    }
}

impl<S: PlanningSolution> From<ChainMove<EitherMove<S>>> for AnyMove<S> {
    fn from(mv: ChainMove<EitherMove<S>>) -> Self {
        Self::Chain(mv)
    }
}

impl<S: PlanningSolution> Clone for EitherMove<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Change(mv) => Self::Change(mv.clone()),
            Self::Swap(mv) => Self::Swap(*mv),
        }
    }
}

impl<S: PlanningSolution> Clone for AnyMove<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Change(mv) => Self::Change(mv.clone()),
            Self::Swap(mv) => Self::Swap(*mv),
            Self::Chain(mv) => Self::Chain(mv.clone()),
        }
    }
}

impl<S: PlanningSolution> Debug for EitherMove<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Change(mv) => mv.fmt(f),
            Self::Swap(mv) => mv.fmt(f),
        }
    }
}

impl<S: PlanningSolution> Debug for AnyMove<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Change(mv) => mv.fmt(f),
            Self::Swap(mv) => mv.fmt(f),
            Self::Chain(mv) => mv.fmt(f),
        }
    }
}
