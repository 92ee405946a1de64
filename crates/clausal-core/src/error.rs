use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A caller-supplied boundary pattern failed to compile. Recoverable:
    /// callers warn and keep the previously active pattern.
    #[error("invalid boundary pattern: {0}")]
    InvalidBoundaryPattern(#[from] regex::Error),
}
