//! Error taxonomy shared by every primitive in the crate.
//!
//! All failures surfaced to callers belong to exactly one [`AdminError`]
//! variant, and the original failure (when there is one) is always retained
//! as the `source`, never discarded:
//!
//! - [`AdminError::Unexpected`] — unclassified failure, cause preserved.
//! - [`AdminError::AsyncFailure`] — failure surfaced from a background
//!   computation, cause preserved.
//! - [`AdminError::Timeout`] — deadline exceeded while polling.
//! - [`AdminError::InvalidArgument`] — precondition violation, raised
//!   synchronously and never retried.
//!
//! The type provides `as_label`/`as_message` helpers for logging and
//! metrics, mirroring the rest of the tooling's conventions.

use std::time::Duration;

use thiserror::Error;

/// Boxed error used at the seams where arbitrary failures enter the crate.
///
/// Units of work, poll suppliers, spawned computations and component
/// factories all report failures as `BoxError`; the normalization layer
/// converts them into [`AdminError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// # Errors produced by the administration primitives.
///
/// The taxonomy is closed: every failure a caller can observe is one of
/// these kinds. Causes are kept in the `source` chain for diagnostics.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AdminError {
    /// Unclassified failure. The underlying cause, if any, is preserved.
    #[error("unexpected failure: {message}")]
    Unexpected {
        /// Human-readable description of what failed.
        message: String,
        /// The original failure, when one exists.
        #[source]
        source: Option<BoxError>,
    },

    /// A background computation was awaited and had itself failed.
    ///
    /// The wrapper is unwrapped exactly one level so the substantive cause
    /// stays visible; `source` carries it.
    #[error("async computation failed: {source}")]
    AsyncFailure {
        /// The failure raised by the background computation.
        source: BoxError,
    },

    /// A polling deadline elapsed without the procedure producing a result.
    #[error("timed out after {timeout:?}: {message}")]
    Timeout {
        /// The timeout the caller requested.
        timeout: Duration,
        /// What was being waited for.
        message: String,
    },

    /// A precondition was violated (non-positive value, empty string,
    /// unparseable configuration entry, duplicate key).
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Which precondition failed.
        message: String,
    },
}

impl AdminError {
    /// Builds an [`AdminError::Unexpected`] without an underlying cause.
    pub fn unexpected(message: impl Into<String>) -> Self {
        AdminError::Unexpected {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an [`AdminError::Unexpected`] preserving the underlying cause.
    pub fn unexpected_with(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        AdminError::Unexpected {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Builds an [`AdminError::AsyncFailure`] around the given cause.
    pub fn async_failure(source: impl Into<BoxError>) -> Self {
        AdminError::AsyncFailure {
            source: source.into(),
        }
    }

    /// Builds an [`AdminError::Timeout`].
    pub fn timeout(timeout: Duration, message: impl Into<String>) -> Self {
        AdminError::Timeout {
            timeout,
            message: message.into(),
        }
    }

    /// Builds an [`AdminError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AdminError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use clusterkit::AdminError;
    ///
    /// let err = AdminError::timeout(Duration::from_secs(1), "cluster did not converge");
    /// assert_eq!(err.as_label(), "timeout");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            AdminError::Unexpected { .. } => "unexpected",
            AdminError::AsyncFailure { .. } => "async_failure",
            AdminError::Timeout { .. } => "timeout",
            AdminError::InvalidArgument { .. } => "invalid_argument",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            AdminError::Unexpected { message, source } => match source {
                Some(source) => format!("unexpected: {message} (caused by: {source})"),
                None => format!("unexpected: {message}"),
            },
            AdminError::AsyncFailure { source } => format!("async failure: {source}"),
            AdminError::Timeout { timeout, message } => {
                format!("timeout after {timeout:?}: {message}")
            }
            AdminError::InvalidArgument { message } => format!("invalid argument: {message}"),
        }
    }

    /// Returns `true` for [`AdminError::Timeout`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, AdminError::Timeout { .. })
    }

    /// Returns `true` for [`AdminError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AdminError::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(AdminError::unexpected("boom").as_label(), "unexpected");
        assert_eq!(
            AdminError::async_failure("boom".to_string()).as_label(),
            "async_failure"
        );
        assert_eq!(
            AdminError::timeout(Duration::from_secs(1), "x").as_label(),
            "timeout"
        );
        assert_eq!(
            AdminError::invalid_argument("x").as_label(),
            "invalid_argument"
        );
    }

    #[test]
    fn test_unexpected_preserves_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AdminError::unexpected_with("listing brokers", cause);
        let source = err.source().expect("cause must be retained");
        assert!(source.to_string().contains("denied"));
        assert!(err.as_message().contains("listing brokers"));
    }

    #[test]
    fn test_timeout_message_mentions_duration() {
        let err = AdminError::timeout(Duration::from_secs(3), "no result");
        assert!(err.to_string().contains("3s"), "got: {err}");
        assert!(err.is_timeout());
        assert!(!err.is_invalid_argument());
    }
}
