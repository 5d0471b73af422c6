//! Error types for PlanForge

use thiserror::Error;

/// Main error type for PlanForge operations
#[derive(Debug, Error)]
pub enum PlanForgeError {
    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error in domain model definition
    #[error("Domain model error: {0}")]
    DomainModel(String),

    /// A move could not be reduced to a tabu key
    #[error("Cannot compute tabu key: {0}")]
    TabuHash(String),

    /// The director's cached score disagrees with a full recalculation
    #[error("Score corruption after {after}: cached {cached}, recalculated {recalculated}")]
    ScoreCorruption {
        after: String,
        cached: String,
        recalculated: String,
    },

    /// Invalid operation for current solver state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for PlanForge operations
pub type Result<T> = std::result::Result<T, PlanForgeError>;
