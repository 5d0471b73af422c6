//! Configuration system for PlanForge.
//!
//! Load solver configuration from TOML or YAML to pick the move selector,
//! construction heuristic, acceptor and termination without code changes.
//! Every field has a default, so an empty document is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use planforge_config::{LocalSearchType, MoveSelectorType, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!     move_selector = "random"
//!
//!     [local_search]
//!     type = "tabu_search"
//!     tabu_min_size = 3
//!     tabu_max_size = 8
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     step_count_limit = 1000
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.move_selector, MoveSelectorType::Random);
//! assert_eq!(config.local_search.search_type, LocalSearchType::TabuSearch);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use planforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! ```

use std::path::Path;
use std::time::Duration;

use planforge_core::ParseableScore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting reproducibility and assertions.
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    pub random_seed: Option<u64>,

    /// Wall-clock limit for a whole solve, in seconds.
    pub time_limit_seconds: u64,

    /// Worker count for a future multi-start mode. Currently unused.
    pub parallel_thread_count: usize,

    /// Score calculation mode.
    pub score_director: ScoreDirectorType,

    /// Local-search neighbourhood strategy.
    pub move_selector: MoveSelectorType,

    /// Construction heuristic building the initial assignment.
    pub construction_heuristic: ConstructionHeuristicType,

    /// Local-search phase configuration.
    pub local_search: LocalSearchConfig,

    /// Termination configuration.
    pub termination: TerminationConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            environment_mode: EnvironmentMode::default(),
            random_seed: None,
            time_limit_seconds: 60,
            parallel_thread_count: 4,
            score_director: ScoreDirectorType::default(),
            move_selector: MoveSelectorType::default(),
            construction_heuristic: ConstructionHeuristicType::default(),
            local_search: LocalSearchConfig::default(),
            termination: TerminationConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.time_limit_seconds = seconds;
        self
    }

    pub fn with_score_director(mut self, director: ScoreDirectorType) -> Self {
        self.score_director = director;
        self
    }

    pub fn with_move_selector(mut self, selector: MoveSelectorType) -> Self {
        self.move_selector = selector;
        self
    }

    pub fn with_construction_heuristic(mut self, heuristic: ConstructionHeuristicType) -> Self {
        self.construction_heuristic = heuristic;
        self
    }

    pub fn with_local_search(mut self, local_search: LocalSearchConfig) -> Self {
        self.local_search = local_search;
        self
    }

    pub fn with_termination(mut self, termination: TerminationConfig) -> Self {
        self.termination = termination;
        self
    }

    /// Returns the wall-clock limit for a solve.
    ///
    /// `termination.seconds_spent_limit` takes precedence over
    /// `time_limit_seconds`. Zero means no limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use planforge_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// assert_eq!(SolverConfig::default().time_limit(), Some(Duration::from_secs(60)));
    /// assert_eq!(SolverConfig::default().with_time_limit_seconds(0).time_limit(), None);
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds = self
            .termination
            .seconds_spent_limit
            .unwrap_or(self.time_limit_seconds);
        (seconds > 0).then(|| Duration::from_secs(seconds))
    }

    /// Returns the seed the solver's random generator starts from.
    ///
    /// Reproducible modes fall back to seed 0 when none is configured.
    pub fn effective_seed(&self) -> Option<u64> {
        match (self.random_seed, self.environment_mode) {
            (Some(seed), _) => Some(seed),
            (None, EnvironmentMode::NonReproducible) => None,
            (None, _) => Some(0),
        }
    }

    /// Checks values that cannot be corrected by clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ls = &self.local_search;
        if !(ls.initial_temperature.is_finite() && ls.initial_temperature >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "initial_temperature must be a finite non-negative number, got {}",
                ls.initial_temperature
            )));
        }
        if !(ls.cooling_rate > 0.0 && ls.cooling_rate <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "cooling_rate must be in (0, 1], got {}",
                ls.cooling_rate
            )));
        }
        if ls.search_type == LocalSearchType::LateAcceptance && ls.late_acceptance_size == 0 {
            return Err(ConfigError::Invalid(
                "late_acceptance_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Seeded from OS entropy unless a seed is given.
    #[default]
    NonReproducible,

    /// Deterministic: always seeded.
    Reproducible,

    /// Deterministic, and every step's score is checked against a full
    /// recalculation.
    FullAssert,
}

/// Score calculation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDirectorType {
    /// Recalculate every constraint on each call.
    Full,

    /// Re-evaluate only constraints touched by a change.
    #[default]
    Incremental,
}

/// Move selector strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveSelectorType {
    /// First feasible swap in scan order.
    FirstFit,

    /// Best-scoring feasible swap.
    #[default]
    BestFit,

    /// First feasible swap among a few random samples.
    Random,

    /// A random swap, sometimes followed by a second one.
    Chained,

    /// First feasible change to a different value.
    Change,
}

/// Construction heuristic types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionHeuristicType {
    /// First feasible value per variable.
    FirstFit,

    /// Best value per variable, entities with more variables first.
    #[default]
    FirstFitDecreasing,
}

/// Local search acceptor types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalSearchType {
    #[default]
    SimulatedAnnealing,
    TabuSearch,
    LateAcceptance,
    HillClimbing,
}

/// Conditions under which a tabu move is accepted anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspirationCriterion {
    /// The move reaches at least the best score seen.
    BestScore,

    /// The move does not worsen the current score.
    Improving,

    /// Enough steps have passed without improvement.
    TimeBased,

    /// Enough steps have passed without improvement, measured against the
    /// frequency threshold.
    FrequencyBased,
}

/// Local-search phase configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Run local search after construction.
    pub enabled: bool,

    #[serde(rename = "type")]
    pub search_type: LocalSearchType,

    /// Simulated annealing starting temperature.
    pub initial_temperature: f64,

    /// Factor applied to the temperature after every step.
    pub cooling_rate: f64,

    pub tabu_min_size: i64,

    pub tabu_max_size: i64,

    pub aspiration_criteria: Vec<AspirationCriterion>,

    /// Steps without improvement that satisfy `time_based` aspiration.
    pub aspiration_stagnation_steps: u64,

    /// Steps without improvement that satisfy `frequency_based` aspiration.
    pub aspiration_max_frequency: u64,

    pub late_acceptance_size: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            search_type: LocalSearchType::default(),
            initial_temperature: 1000.0,
            cooling_rate: 0.99,
            tabu_min_size: 5,
            tabu_max_size: 10,
            aspiration_criteria: vec![AspirationCriterion::BestScore],
            aspiration_stagnation_steps: 60,
            aspiration_max_frequency: 10,
            late_acceptance_size: 400,
        }
    }
}

impl LocalSearchConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn of_type(search_type: LocalSearchType) -> Self {
        Self {
            search_type,
            ..Self::default()
        }
    }

    /// Tabu bounds after clamping: `min < 1` becomes 1, `max < min` becomes `min`.
    ///
    /// # Examples
    ///
    /// ```
    /// use planforge_config::LocalSearchConfig;
    ///
    /// let config = LocalSearchConfig { tabu_min_size: -2, tabu_max_size: 0, ..Default::default() };
    /// assert_eq!(config.normalized_tabu_sizes(), (1, 1));
    /// ```
    pub fn normalized_tabu_sizes(&self) -> (usize, usize) {
        let min = usize::try_from(self.tabu_min_size).unwrap_or(0).max(1);
        let max = usize::try_from(self.tabu_max_size).unwrap_or(0).max(min);
        (min, max)
    }
}

/// Termination configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Overrides `time_limit_seconds` when set.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum number of local-search steps.
    pub step_count_limit: Option<u64>,

    /// Maximum local-search steps without a new best score.
    pub unimproved_step_count_limit: Option<u64>,

    /// Target best score (e.g. `"0hard/0soft"`).
    pub best_score_limit: Option<String>,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self {
            seconds_spent_limit: None,
            step_count_limit: None,
            unimproved_step_count_limit: Some(100),
            best_score_limit: None,
        }
    }
}

impl TerminationConfig {
    /// A configuration with every limit unset.
    pub fn none() -> Self {
        Self {
            unimproved_step_count_limit: None,
            ..Self::default()
        }
    }

    pub fn with_step_count_limit(mut self, steps: u64) -> Self {
        self.step_count_limit = Some(steps);
        self
    }

    pub fn with_unimproved_step_count_limit(mut self, steps: u64) -> Self {
        self.unimproved_step_count_limit = Some(steps);
        self
    }

    pub fn with_best_score_limit(mut self, score: impl Into<String>) -> Self {
        self.best_score_limit = Some(score.into());
        self
    }

    /// Parses the best score limit into a concrete score type.
    pub fn parse_best_score_limit<Sc: ParseableScore>(&self) -> Result<Option<Sc>, ConfigError> {
        self.best_score_limit
            .as_deref()
            .map(|limit| {
                Sc::parse(limit).map_err(|e| {
                    ConfigError::Invalid(format!("best_score_limit '{}': {}", limit, e))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests;
