//! # Fault normalization for units of work.
//!
//! A *unit of work* is a zero-argument fallible operation, created at its
//! call site and discarded after execution. Whatever it raises is converted
//! into the crate's error taxonomy by a single discipline:
//!
//! - a failure that is already an [`AdminError`] propagates unchanged
//!   (no double-wrapping);
//! - a [`tokio::task::JoinError`] — the failure that means "a result was
//!   awaited from an async computation that itself failed" — is unwrapped
//!   one level and re-raised as [`AdminError::AsyncFailure`];
//! - anything else becomes [`AdminError::Unexpected`] with the cause kept.
//!
//! ## Rules
//! - [`run`] / [`run_unit`] apply the discipline and surface the result.
//! - [`swallow`] / [`swallow_async`] never surface a failure: it is logged
//!   at `warn` and discarded. This is the designated mechanism for
//!   operations whose failure must never interrupt control flow, such as
//!   releasing a resource during cleanup. Intentionally lossy.

use std::future::Future;

use tracing::warn;

use crate::error::{AdminError, BoxError};

/// Runs a unit of work, normalizing any failure into the error taxonomy.
///
/// The value produced by `work` is returned unchanged.
///
/// # Example
/// ```
/// use clusterkit::{run, AdminError, BoxError};
///
/// let port: u16 = run(|| "9092".parse().map_err(BoxError::from)).unwrap();
/// assert_eq!(port, 9092);
///
/// let err = run(|| "not-a-port".parse::<u16>().map_err(BoxError::from)).unwrap_err();
/// assert_eq!(err.as_label(), "unexpected");
/// ```
pub fn run<T>(work: impl FnOnce() -> Result<T, BoxError>) -> Result<T, AdminError> {
    work().map_err(normalize_failure)
}

/// Side-effect-only variant of [`run`]: the unit of work produces no value.
pub fn run_unit(work: impl FnOnce() -> Result<(), BoxError>) -> Result<(), AdminError> {
    run(work)
}

/// Runs a unit of work and swallows any failure it raises.
///
/// The failure is logged under `label` and never reaches the caller,
/// regardless of how often the operation fails. Side effects performed
/// before the failure are not rolled back.
pub fn swallow(label: &str, work: impl FnOnce() -> Result<(), BoxError>) {
    if let Err(error) = work() {
        warn!(label, %error, "swallowed failure from best-effort operation");
    }
}

/// Awaits a future and swallows any failure it resolves to.
///
/// Async counterpart of [`swallow`], for cleanup paths that must await.
pub async fn swallow_async<F>(label: &str, work: F)
where
    F: Future<Output = Result<(), BoxError>>,
{
    if let Err(error) = work.await {
        warn!(label, %error, "swallowed failure from best-effort operation");
    }
}

/// Converts an arbitrary failure into the taxonomy.
///
/// Shared by [`run`] and the poller, so a failure observed during polling
/// surfaces exactly as it would from a direct invocation.
pub(crate) fn normalize_failure(error: BoxError) -> AdminError {
    let error = match error.downcast::<AdminError>() {
        Ok(already_classified) => return *already_classified,
        Err(error) => error,
    };
    match error.downcast::<tokio::task::JoinError>() {
        Ok(join_error) => AdminError::AsyncFailure { source: join_error },
        Err(other) => {
            let message = other.to_string();
            AdminError::unexpected_with(message, other)
        }
    }
}
