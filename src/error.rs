//! Error types for keep-alive policy evaluation.

use thiserror::Error;

/// Errors raised while evaluating a keep-alive policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeepAliveError {
    /// A required argument was absent. This is a caller bug, not a
    /// property of the response.
    #[error("precondition violated: {0} must not be absent")]
    PreconditionViolation(&'static str),

    /// A `timeout` parameter carried a value that is not a non-negative
    /// integer number of seconds representable in milliseconds.
    ///
    /// Only ever produced internally; the default strategy skips the
    /// offending element instead of surfacing this.
    #[error("malformed keep-alive timeout token: {token:?}")]
    MalformedDurationToken { token: String },
}
