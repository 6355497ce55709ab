//! # Aggregation of independently-running computations.
//!
//! [`await_all`] folds a collection of spawned computations into a single
//! future that completes once every input has completed, yielding results
//! in input order (not completion order).
//!
//! ## Rules
//! - Completion is driven by the inputs; the caller's task is suspended,
//!   not blocked, and the inputs keep running on their executor threads.
//! - If any input failed, the aggregate fails with the first failure in
//!   input order. A join failure (panic or abort) and a task-level error
//!   both surface as [`AdminError::AsyncFailure`] with the cause preserved;
//!   an inner [`AdminError`] propagates unchanged.
//! - Siblings of a failed input are **not** cancelled; callers needing
//!   cancellation must implement it themselves.
//! - There is no timeout of its own; compose with the poller or an external
//!   signal when deadline semantics are required.

use futures::future::join_all;
use tokio::task::JoinHandle;

use crate::error::{AdminError, BoxError};

/// Awaits every handle and returns their results in input order.
///
/// # Example
/// ```
/// use clusterkit::{await_all, BoxError};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handles: Vec<_> = (0..4)
///         .map(|broker| tokio::spawn(async move { Ok::<_, BoxError>(broker * 10) }))
///         .collect();
///     let loads = await_all(handles).await?;
///     assert_eq!(loads, vec![0, 10, 20, 30]);
///     Ok(())
/// }
/// ```
pub async fn await_all<T, E>(
    handles: impl IntoIterator<Item = JoinHandle<Result<T, E>>>,
) -> Result<Vec<T>, AdminError>
where
    E: Into<BoxError>,
{
    let outcomes = join_all(handles).await;
    let mut values = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(Ok(value)) => values.push(value),
            Ok(Err(error)) => return Err(unwrap_task_failure(error.into())),
            Err(join_error) => return Err(AdminError::async_failure(join_error)),
        }
    }
    Ok(values)
}

/// One unwrap step: the task's own error is the substantive cause.
fn unwrap_task_failure(error: BoxError) -> AdminError {
    match error.downcast::<AdminError>() {
        Ok(already_classified) => *already_classified,
        Err(other) => AdminError::async_failure(other),
    }
}
