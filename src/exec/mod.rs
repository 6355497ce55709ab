//! Resilient execution primitives.
//!
//! This module groups the fault-normalization discipline and the two
//! waiting primitives built on top of it.
//!
//! ## Contents
//! - [`run`], [`run_unit`], [`swallow`], [`swallow_async`] — normalize or
//!   deliberately discard failures from units of work
//! - [`poll_some`], [`poll_true`] (+ `_with` variants) — bounded polling
//!   with a deadline, paced by [`PollPolicy`] / [`Jitter`]
//! - [`await_all`] — one completion signal for many spawned computations
//! - [`is_expired`] — deadline arithmetic shared with callers
//!
//! ## Quick wiring
//! ```text
//! unit of work ──► run / run_unit ──► AdminError taxonomy
//!       supplier ──► poll_some ──► value | last failure | Timeout
//!   JoinHandles ──► await_all ──► ordered results | AsyncFailure
//! ```

mod aggregate;
mod normalize;
mod policy;
mod poll;

pub use aggregate::await_all;
pub use normalize::{run, run_unit, swallow, swallow_async};
pub use policy::{Jitter, PollPolicy};
pub use poll::{is_expired, poll_some, poll_some_with, poll_true, poll_true_with};
