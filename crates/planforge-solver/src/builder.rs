//! Builder module for constructing solver components from configuration
//!
//! This module provides the wiring between configuration types and
//! the phases, acceptors and terminations the solver runs.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use planforge_config::{EnvironmentMode, LocalSearchConfig, SolverConfig, TerminationConfig};
use planforge_core::PlanningSolution;
use planforge_scoring::ScoreDirector;

use crate::heuristic::selector::AnyMoveSelector;
use crate::phase::construction::ConstructionHeuristicPhase;
use crate::phase::localsearch::{AnyAcceptor, LocalSearchPhase};
use crate::termination::{
    BestScoreTermination, ExternalTermination, OrTermination, StepCountTermination, Termination,
    UnimprovedStepCountTermination,
};

/// Terminations assembled at runtime; fires when any child fires.
pub type ConfiguredTermination<S, D> = OrTermination<Vec<Box<dyn Termination<S, D>>>>;

/// The local-search phase a [`SolverConfig`] describes.
pub type ConfiguredLocalSearch<S, D> = LocalSearchPhase<
    AnyMoveSelector,
    AnyAcceptor<<S as PlanningSolution>::Score>,
    ConfiguredTermination<S, D>,
>;

/// Builder for constructing acceptors from configuration.
pub struct AcceptorBuilder;

impl AcceptorBuilder {
    /// Builds the acceptor named by `config.search_type`.
    pub fn build<S: PlanningSolution>(config: &LocalSearchConfig) -> AnyAcceptor<S::Score> {
        AnyAcceptor::from_config(config)
    }
}

/// Builder for constructing terminations from configuration.
pub struct TerminationBuilder;

impl TerminationBuilder {
    /// Builds the local-search termination.
    ///
    /// `best_score_limit` is the already-parsed `termination.best_score_limit`.
    /// The wall-clock limit is not part of the result; the solver scope
    /// enforces it through its deadline.
    pub fn build<S, D>(
        config: &TerminationConfig,
        best_score_limit: Option<S::Score>,
        stop_flag: Arc<AtomicBool>,
    ) -> ConfiguredTermination<S, D>
    where
        S: PlanningSolution,
        D: ScoreDirector<S> + 'static,
    {
        let mut terminations: Vec<Box<dyn Termination<S, D>>> =
            vec![Box::new(ExternalTermination::new(stop_flag))];
        if let Some(limit) = config.step_count_limit {
            terminations.push(Box::new(StepCountTermination::new(limit)));
        }
        if let Some(limit) = config.unimproved_step_count_limit {
            terminations.push(Box::new(UnimprovedStepCountTermination::new(limit)));
        }
        if let Some(target) = best_score_limit {
            terminations.push(Box::new(BestScoreTermination::new(target)));
        }
        OrTermination::new(terminations)
    }
}

/// Builder for the phases a solve runs.
pub struct PhaseBuilder;

impl PhaseBuilder {
    pub fn construction(config: &SolverConfig) -> ConstructionHeuristicPhase {
        ConstructionHeuristicPhase::new(config.construction_heuristic).with_phase_index(0)
    }

    /// Builds the local-search phase, or `None` when it is disabled.
    ///
    /// `full_assert` mode turns on per-step score assertions.
    pub fn local_search<S, D>(
        config: &SolverConfig,
        best_score_limit: Option<S::Score>,
        stop_flag: Arc<AtomicBool>,
    ) -> Option<ConfiguredLocalSearch<S, D>>
    where
        S: PlanningSolution,
        D: ScoreDirector<S> + 'static,
    {
        if !config.local_search.enabled {
            return None;
        }
        let phase = LocalSearchPhase::new(
            AnyMoveSelector::from_type(config.move_selector),
            AcceptorBuilder::build::<S>(&config.local_search),
            TerminationBuilder::build(&config.termination, best_score_limit, stop_flag),
        )
        .with_phase_index(1)
        .with_score_assertions(config.environment_mode == EnvironmentMode::FullAssert);
        Some(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planforge_config::{LocalSearchType, MoveSelectorType};
    use planforge_core::HardSoftScore;
    use planforge_scoring::FullScoreDirector;

    use crate::scope::SolverScope;
    use crate::test_utils::{full_director, slot_solution, SlotSolution};

    type Director = FullScoreDirector<SlotSolution>;

    fn scope() -> SolverScope<SlotSolution, Director> {
        let solution = slot_solution(&[Some(1), Some(2)], vec![1, 2, 3]);
        let mut scope = SolverScope::with_seed(full_director(solution, 3), 7);
        scope.start_solving();
        scope
    }

    #[test]
    fn test_acceptor_builder_picks_configured_type() {
        let config = LocalSearchConfig::of_type(LocalSearchType::TabuSearch);
        let acceptor = AcceptorBuilder::build::<SlotSolution>(&config);
        assert_eq!(acceptor.name(), "TabuSearch");

        let config = LocalSearchConfig::of_type(LocalSearchType::HillClimbing);
        let acceptor = AcceptorBuilder::build::<SlotSolution>(&config);
        assert_eq!(acceptor.name(), "HillClimbing");
    }

    #[test]
    fn test_acceptor_builder_clamps_tabu_sizes() {
        let config = LocalSearchConfig {
            tabu_min_size: 0,
            tabu_max_size: -3,
            ..LocalSearchConfig::of_type(LocalSearchType::TabuSearch)
        };
        match AcceptorBuilder::build::<SlotSolution>(&config) {
            AnyAcceptor::TabuSearch(tabu) => {
                assert_eq!(tabu.tabu_list().min_size(), 1);
                assert_eq!(tabu.tabu_list().max_size(), 1);
            }
            other => panic!("expected tabu search, got {:?}", other),
        }
    }

    #[test]
    fn test_termination_builder_step_limit() {
        let flag = Arc::new(AtomicBool::new(false));
        let config = TerminationConfig::none().with_step_count_limit(2);
        let termination: ConfiguredTermination<SlotSolution, Director> =
            TerminationBuilder::build(&config, None, flag);
        assert_eq!(termination.0.len(), 2);

        let mut scope = scope();
        assert!(!termination.is_terminated(&scope));
        scope.increment_step_count();
        scope.increment_step_count();
        assert!(termination.is_terminated(&scope));
    }

    #[test]
    fn test_termination_builder_observes_stop_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let termination: ConfiguredTermination<SlotSolution, Director> =
            TerminationBuilder::build(&TerminationConfig::none(), None, Arc::clone(&flag));
        let scope = scope();
        assert!(!termination.is_terminated(&scope));
        flag.store(true, std::sync::atomic::Ordering::SeqCst);
        assert!(termination.is_terminated(&scope));
    }

    #[test]
    fn test_termination_builder_best_score_limit() {
        let flag = Arc::new(AtomicBool::new(false));
        let termination: ConfiguredTermination<SlotSolution, Director> =
            TerminationBuilder::build(&TerminationConfig::none(), Some(HardSoftScore::ZERO), flag);
        let mut scope = scope();
        assert!(!termination.is_terminated(&scope));
        // [1, 2] has no conflicts and nothing above 3.
        scope.update_best_solution();
        assert!(termination.is_terminated(&scope));
    }

    #[test]
    fn test_phase_builder_respects_enabled_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let config = SolverConfig::default().with_local_search(LocalSearchConfig::disabled());
        let phase: Option<ConfiguredLocalSearch<SlotSolution, Director>> =
            PhaseBuilder::local_search(&config, None, flag);
        assert!(phase.is_none());
    }

    #[test]
    fn test_phase_builder_wires_selector_and_acceptor() {
        let flag = Arc::new(AtomicBool::new(false));
        let config = SolverConfig::default()
            .with_move_selector(MoveSelectorType::Random)
            .with_local_search(LocalSearchConfig::of_type(LocalSearchType::LateAcceptance));
        let phase: Option<ConfiguredLocalSearch<SlotSolution, Director>> =
            PhaseBuilder::local_search(&config, None, flag);
        let phase = phase.expect("local search is enabled by default");
        assert_eq!(phase.acceptor().name(), "LateAcceptance");

        let construction = PhaseBuilder::construction(&config);
        assert_eq!(construction.heuristic(), config.construction_heuristic);
    }
}
