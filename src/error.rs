//! Router error definitions.

use thiserror::Error;

/// Errors raised on malformed caller input.
///
/// All of these are synchronous validation failures: there is no I/O and no
/// retryable failure mode in the core, so every error propagates directly to
/// the immediate caller. None are caught internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// `config` called with empty options, or `on` given a malformed spec.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A supplied route map has no entries.
    #[error("route map is empty")]
    EmptyTarget,

    /// `dispatch` called with a malformed pattern/handler pair.
    #[error("bad arguments passed to dispatch: {0}")]
    BadArguments(&'static str),

    /// A route with the same pattern is already registered.
    #[error("route {0:?} already registered")]
    DuplicateRoute(String),

    /// A dynamic route-map value that is not a table.
    #[error("route map is not a table")]
    InvalidTarget,
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
