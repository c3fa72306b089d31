//! Error types for matcher construction.

use thiserror::Error;

/// Errors raised while building composed matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// A conjunction was assembled from an empty list of matchers.
    #[error("a conjunction needs at least one matcher")]
    EmptyConjunction,
}
