//! # Bounded polling for eventually-consistent state.
//!
//! [`poll_some`] repeatedly invokes a supplier until it yields a value or a
//! deadline passes. It is the standard mechanism for waiting on external
//! state that converges over time — a cluster reaching a target
//! configuration, a broker registering itself — without busy-spinning and
//! without silently hanging forever.
//!
//! ## Rules
//! - The deadline is computed once, on entry; it never moves.
//! - A failure raised during an attempt is recorded as the last observed
//!   failure and does **not** abort the loop.
//! - A non-empty result returns immediately; the remaining wait is not
//!   consumed.
//! - Empty results and failed attempts both sleep for the policy interval
//!   before the next attempt (default 1 s, see [`PollPolicy`]).
//! - On deadline expiry, the last observed failure — normalized into the
//!   taxonomy — is surfaced in preference to a generic
//!   [`AdminError::Timeout`].
//!
//! Deadline expiry is the only cancellation mechanism: there is no external
//! cancel signal.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::error::{AdminError, BoxError};
use crate::exec::normalize::normalize_failure;
use crate::exec::policy::PollPolicy;

/// Polls `supplier` until it yields a value or `timeout` elapses.
///
/// Uses the default [`PollPolicy`] (fixed one-second interval).
pub async fn poll_some<T, F, Fut>(supplier: F, timeout: Duration) -> Result<T, AdminError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, BoxError>>,
{
    poll_some_with(PollPolicy::default(), supplier, timeout).await
}

/// Polls `supplier` with explicit pacing until it yields a value or
/// `timeout` elapses.
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use std::time::Duration;
/// use clusterkit::{poll_some_with, BoxError, PollPolicy};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let attempts = Cell::new(0u32);
///     let leader = poll_some_with(
///         PollPolicy::with_interval(Duration::from_millis(1)),
///         || {
///             let attempt = attempts.get() + 1;
///             attempts.set(attempt);
///             async move {
///                 if attempt < 3 {
///                     Ok::<_, BoxError>(None)
///                 } else {
///                     Ok(Some("broker-0"))
///                 }
///             }
///         },
///         Duration::from_secs(10),
///     )
///     .await?;
///     assert_eq!(leader, "broker-0");
///     Ok(())
/// }
/// ```
pub async fn poll_some_with<T, F, Fut>(
    policy: PollPolicy,
    mut supplier: F,
    timeout: Duration,
) -> Result<T, AdminError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, BoxError>>,
{
    let deadline = Instant::now() + timeout;
    let mut last_error: Option<BoxError> = None;

    while Instant::now() <= deadline {
        match supplier().await {
            Ok(Some(value)) => return Ok(value),
            Ok(None) => {}
            Err(error) => {
                debug!(%error, "poll attempt failed; retrying until deadline");
                last_error = Some(error);
            }
        }
        sleep(policy.next_delay()).await;
    }

    match last_error {
        Some(error) => Err(normalize_failure(error)),
        None => Err(AdminError::timeout(
            timeout,
            "the procedure never produced a result",
        )),
    }
}

/// Polls `predicate` until it returns `true` or `timeout` elapses.
///
/// Defined in terms of [`poll_some`]: `true` maps to a sentinel value,
/// `false` to an empty result.
pub async fn poll_true<F, Fut>(predicate: F, timeout: Duration) -> Result<(), AdminError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, BoxError>>,
{
    poll_true_with(PollPolicy::default(), predicate, timeout).await
}

/// Polls `predicate` with explicit pacing until it returns `true` or
/// `timeout` elapses.
pub async fn poll_true_with<F, Fut>(
    policy: PollPolicy,
    mut predicate: F,
    timeout: Duration,
) -> Result<(), AdminError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, BoxError>>,
{
    poll_some_with(
        policy,
        move || {
            let done = predicate();
            async move { Ok(done.await?.then_some(())) }
        },
        timeout,
    )
    .await
}

/// Returns `true` once `interval` has fully elapsed since `since`.
pub fn is_expired(since: Instant, interval: Duration) -> bool {
    since.elapsed() > interval
}
