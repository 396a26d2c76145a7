//! Failure taxonomy for one remote classification attempt.

use std::fmt;

/// Why a remote call produced no usable verdict.
///
/// The orchestrator treats every variant the same way (fall back to the
/// local rules); the split exists for logs and tests.
#[derive(Debug)]
pub enum RemoteError {
    /// The request never completed: refused connection, DNS failure, timeout.
    Unavailable(curl::Error),
    /// The service answered with a status outside 2xx.
    Status(u32),
    /// The body was not the expected JSON shape (missing `result` or
    /// `probability`, or not JSON at all).
    Body(serde_json::Error),
}

impl RemoteError {
    /// True for contract violations from a reachable service (`Status` and
    /// `Body`), false when the service could not be reached at all.
    pub fn is_protocol(&self) -> bool {
        matches!(self, RemoteError::Status(_) | RemoteError::Body(_))
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Unavailable(err) => write!(f, "service unreachable: {}", err),
            RemoteError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            RemoteError::Body(err) => write!(f, "unusable response body: {}", err),
        }
    }
}

impl std::error::Error for RemoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RemoteError::Unavailable(err) => Some(err),
            RemoteError::Body(err) => Some(err),
            RemoteError::Status(_) => None,
        }
    }
}

impl From<curl::Error> for RemoteError {
    fn from(err: curl::Error) -> Self {
        RemoteError::Unavailable(err)
    }
}
