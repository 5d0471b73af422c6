//! Moves and the selectors that propose them.

pub mod r#move;
pub mod selector;

pub use r#move::{AnyMove, ChainMove, ChangeMove, EitherMove, Move, ScopedMove, SwapMove};
pub use selector::{
    AnyMoveSelector, BestFitMoveSelector, ChainedMoveSelector, ChangeMoveSelector,
    FirstFitMoveSelector, MoveSelector, RandomMoveSelector,
};
