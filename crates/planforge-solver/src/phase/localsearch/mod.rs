//! Local search phase.
//!
//! Each step asks the move selector for one move, executes it, and lets the
//! acceptor decide whether to keep it. Rejected moves are undone before the
//! next step starts.

pub mod acceptor;
mod phase;

#[cfg(test)]
mod tests;

pub use acceptor::{
    Acceptor, AnyAcceptor, HillClimbingAcceptor, LateAcceptanceAcceptor,
    SimulatedAnnealingAcceptor, TabuItem, TabuList, TabuSearchAcceptor,
};
pub use phase::LocalSearchPhase;
