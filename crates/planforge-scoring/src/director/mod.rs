//! Score directors.
//!
//! A score director binds exactly one working solution, routes every
//! variable write through change hooks and owns the score caching policy.

mod factory;
mod full;
mod incremental;
mod traits;


pub use factory::{AnyScoreDirector, ScoreDirectorFactory};
pub use full::FullScoreDirector;
pub use incremental::IncrementalScoreDirector;
pub use traits::ScoreDirector;
