use thiserror::Error;

/// Error produced when a search cannot run to completion.
///
/// Failing to find a goal is not an error: searches report that
/// by returning `None` instead of a solution.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
