//! Acceptor chosen from configuration.

use planforge_config::{LocalSearchConfig, LocalSearchType};
use planforge_core::{PlanningSolution, Result, Score};
use rand::rngs::StdRng;
use tracing::warn;

use super::{
    Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, SimulatedAnnealingAcceptor,
    TabuSearchAcceptor,
};
use crate::heuristic::r#move::Move;

/// An acceptor whose strategy is picked at runtime.
#[derive(Debug, Clone)]
pub enum AnyAcceptor<Sc: Score> {
    SimulatedAnnealing(SimulatedAnnealingAcceptor),
    TabuSearch(TabuSearchAcceptor<Sc>),
    LateAcceptance(LateAcceptanceAcceptor<Sc>),
    HillClimbing(HillClimbingAcceptor),
}

impl<Sc: Score> AnyAcceptor<Sc> {
    /// Builds the acceptor named by `config.search_type`.
    ///
    /// Out-of-order tabu sizes are clamped with a warning.
    pub fn from_config(config: &LocalSearchConfig) -> Self {
        match config.search_type {
            LocalSearchType::SimulatedAnnealing => Self::SimulatedAnnealing(
                SimulatedAnnealingAcceptor::new(config.initial_temperature, config.cooling_rate),
            ),
            LocalSearchType::TabuSearch => {
                let (min_size, max_size) = config.normalized_tabu_sizes();
                if i64::try_from(min_size).ok() != Some(config.tabu_min_size)
                    || i64::try_from(max_size).ok() != Some(config.tabu_max_size)
                {
                    warn!(
                        event = "tabu_size_clamped",
                        configured_min = config.tabu_min_size,
                        configured_max = config.tabu_max_size,
                        min = min_size,
                        max = max_size,
                    );
                }
                Self::TabuSearch(
                    TabuSearchAcceptor::new(min_size, max_size, config.aspiration_criteria.clone())
                        .with_stagnation_steps(config.aspiration_stagnation_steps)
                        .with_max_frequency(config.aspiration_max_frequency),
                )
            }
            LocalSearchType::LateAcceptance => {
                Self::LateAcceptance(LateAcceptanceAcceptor::new(config.late_acceptance_size))
            }
            LocalSearchType::HillClimbing => Self::HillClimbing(HillClimbingAcceptor::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SimulatedAnnealing(_) => "SimulatedAnnealing",
            Self::TabuSearch(_) => "TabuSearch",
            Self::LateAcceptance(_) => "LateAcceptance",
            Self::HillClimbing(_) => "HillClimbing",
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $acceptor:ident => $body:expr) => {
        match $self {
            AnyAcceptor::SimulatedAnnealing($acceptor) => $body,
            AnyAcceptor::TabuSearch($acceptor) => $body,
            AnyAcceptor::LateAcceptance($acceptor) => $body,
            AnyAcceptor::HillClimbing($acceptor) => $body,
        }
    };
}

impl<S: PlanningSolution> Acceptor<S> for AnyAcceptor<S::Score> {
    fn is_accepted<M: Move<S>>(
        &mut self,
        mv: &M,
        last_step_score: &S::Score,
        move_score: &S::Score,
        rng: &mut StdRng,
    ) -> Result<bool> {
        dispatch!(self, a => Acceptor::<S>::is_accepted(a, mv, last_step_score, move_score, rng))
    }

    fn move_accepted<M: Move<S>>(&mut self, mv: &M, move_score: &S::Score) -> Result<()> {
        dispatch!(self, a => Acceptor::<S>::move_accepted(a, mv, move_score))
    }

    fn phase_started(&mut self, initial_score: &S::Score) {
        dispatch!(self, a => Acceptor::<S>::phase_started(a, initial_score))
    }

    fn phase_ended(&mut self) {
        dispatch!(self, a => Acceptor::<S>::phase_ended(a))
    }

    fn step_ended(&mut self, step_score: &S::Score) {
        dispatch!(self, a => Acceptor::<S>::step_ended(a, step_score))
    }
}
