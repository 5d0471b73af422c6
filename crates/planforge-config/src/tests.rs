//! Tests for solver configuration.

use planforge_core::HardSoftScore;

use super::*;

#[test]
fn test_defaults() {
    let config = SolverConfig::default();

    assert_eq!(config.time_limit_seconds, 60);
    assert_eq!(config.parallel_thread_count, 4);
    assert_eq!(config.score_director, ScoreDirectorType::Incremental);
    assert_eq!(config.move_selector, MoveSelectorType::BestFit);
    assert_eq!(
        config.construction_heuristic,
        ConstructionHeuristicType::FirstFitDecreasing
    );
    assert!(config.local_search.enabled);
    assert_eq!(
        config.local_search.search_type,
        LocalSearchType::SimulatedAnnealing
    );
    assert_eq!(config.local_search.initial_temperature, 1000.0);
    assert_eq!(config.local_search.cooling_rate, 0.99);
    assert_eq!(config.termination.unimproved_step_count_limit, Some(100));
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(SolverConfig::from_toml_str("").unwrap(), SolverConfig::default());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "reproducible"
        random_seed = 42
        score_director = "full"
        move_selector = "chained"
        construction_heuristic = "first_fit"

        [local_search]
        type = "tabu_search"
        tabu_min_size = 2
        tabu_max_size = 6
        aspiration_criteria = ["best_score", "frequency_based"]

        [termination]
        seconds_spent_limit = 30
        step_count_limit = 500
        best_score_limit = "0hard/0soft"
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.score_director, ScoreDirectorType::Full);
    assert_eq!(config.move_selector, MoveSelectorType::Chained);
    assert_eq!(config.local_search.normalized_tabu_sizes(), (2, 6));
    assert_eq!(
        config.local_search.aspiration_criteria,
        vec![
            AspirationCriterion::BestScore,
            AspirationCriterion::FrequencyBased
        ]
    );
    assert_eq!(config.termination.step_count_limit, Some(500));
    // Unset fields keep their defaults
    assert_eq!(config.termination.unimproved_step_count_limit, Some(100));
    assert_eq!(config.local_search.cooling_rate, 0.99);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        move_selector: change
        local_search:
          type: late_acceptance
          late_acceptance_size: 50
        termination:
          unimproved_step_count_limit: 20
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.move_selector, MoveSelectorType::Change);
    assert_eq!(
        config.local_search.search_type,
        LocalSearchType::LateAcceptance
    );
    assert_eq!(config.local_search.late_acceptance_size, 50);
    assert_eq!(config.termination.unimproved_step_count_limit, Some(20));
}

#[test]
fn test_unknown_variant_is_rejected() {
    let err = SolverConfig::from_toml_str(r#"move_selector = "worst_fit""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SolverConfig::load("/nonexistent/planforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_time_limit_seconds(5)
        .with_move_selector(MoveSelectorType::FirstFit)
        .with_local_search(LocalSearchConfig::of_type(LocalSearchType::HillClimbing))
        .with_termination(TerminationConfig::none().with_step_count_limit(10));

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
    assert_eq!(config.termination.step_count_limit, Some(10));
    assert_eq!(config.termination.unimproved_step_count_limit, None);
}

#[test]
fn test_seconds_spent_limit_overrides_time_limit() {
    let config = SolverConfig::new().with_termination(TerminationConfig {
        seconds_spent_limit: Some(3),
        ..TerminationConfig::none()
    });

    assert_eq!(config.time_limit(), Some(Duration::from_secs(3)));
}

#[test]
fn test_effective_seed() {
    assert_eq!(SolverConfig::new().effective_seed(), None);
    assert_eq!(SolverConfig::new().with_random_seed(9).effective_seed(), Some(9));
    assert_eq!(
        SolverConfig::new()
            .with_environment_mode(EnvironmentMode::FullAssert)
            .effective_seed(),
        Some(0)
    );
}

#[test]
fn test_tabu_size_clamping() {
    let inverted = LocalSearchConfig {
        tabu_min_size: 7,
        tabu_max_size: 3,
        ..LocalSearchConfig::default()
    };
    assert_eq!(inverted.normalized_tabu_sizes(), (7, 7));

    let negative = LocalSearchConfig {
        tabu_min_size: -1,
        tabu_max_size: 4,
        ..LocalSearchConfig::default()
    };
    assert_eq!(negative.normalized_tabu_sizes(), (1, 4));
}

#[test]
fn test_validate_rejects_bad_cooling_rate() {
    let config = SolverConfig::new().with_local_search(LocalSearchConfig {
        cooling_rate: 0.0,
        ..LocalSearchConfig::default()
    });
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_negative_temperature() {
    let config = SolverConfig::new().with_local_search(LocalSearchConfig {
        initial_temperature: -1.0,
        ..LocalSearchConfig::default()
    });
    assert!(config.validate().is_err());
}

#[test]
fn test_parse_best_score_limit() {
    let termination = TerminationConfig::none().with_best_score_limit("-1hard/0soft");
    assert_eq!(
        termination.parse_best_score_limit::<HardSoftScore>().unwrap(),
        Some(HardSoftScore::of(-1, 0))
    );

    let bad = TerminationConfig::none().with_best_score_limit("zero");
    assert!(bad.parse_best_score_limit::<HardSoftScore>().is_err());

    assert_eq!(
        TerminationConfig::none()
            .parse_best_score_limit::<HardSoftScore>()
            .unwrap(),
        None
    );
}

#[test]
fn test_serialize_round_trip_through_toml() {
    let config = SolverConfig::new()
        .with_random_seed(5)
        .with_move_selector(MoveSelectorType::Random);

    let text = toml::to_string(&config).unwrap();
    assert_eq!(SolverConfig::from_toml_str(&text).unwrap(), config);
}
