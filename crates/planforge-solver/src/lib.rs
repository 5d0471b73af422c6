//! PlanForge Solver Engine
//!
//! This crate provides the search engine:
//! - Moves and move selectors
//! - Phases (construction heuristic, local search)
//! - Acceptors (simulated annealing, tabu search, late acceptance, hill climbing)
//! - Termination conditions
//! - Scopes and statistics
//! - Configuration wiring (builder module) and the [`Solver`] orchestrator

pub mod builder;
pub mod heuristic;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod termination;

#[cfg(test)]
mod test_utils;

pub use builder::{
    AcceptorBuilder, ConfiguredLocalSearch, ConfiguredTermination, PhaseBuilder,
    TerminationBuilder,
};
pub use heuristic::{
    AnyMove, AnyMoveSelector, BestFitMoveSelector, ChainMove, ChainedMoveSelector, ChangeMove,
    ChangeMoveSelector, EitherMove, FirstFitMoveSelector, Move, MoveSelector, RandomMoveSelector,
    ScopedMove, SwapMove,
};
pub use phase::{
    construction::{entity_order, ConstructionHeuristicPhase},
    localsearch::{
        Acceptor, AnyAcceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, LocalSearchPhase,
        SimulatedAnnealingAcceptor, TabuItem, TabuList, TabuSearchAcceptor,
    },
    Phase,
};
pub use scope::{BestSolutionSender, PhaseScope, SolverScope};
pub use solver::{Solver, SolverHandle};
pub use stats::{PhaseStats, SolverStats};
pub use termination::{
    BestScoreTermination, ExternalTermination, OrTermination, StepCountTermination, Termination,
    UnimprovedStepCountTermination,
};
