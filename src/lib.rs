//! # clusterkit
//!
//! **Clusterkit** is a small resilient-execution and introspection library
//! for cluster administration tooling.
//!
//! Administering a cluster means issuing operations whose outcome shows up
//! *eventually* (a reassignment converging, a broker registering) and whose
//! failures arrive from every direction (I/O, background tasks, pluggable
//! components). This crate provides the primitives the rest of the tooling
//! builds on: one error taxonomy, one polling loop, one aggregation point,
//! one introspection seam and one construction policy.
//!
//! ## Architecture
//! ```text
//!   unit of work ──► run / run_unit ──────────┐
//!   cleanup path ──► swallow (never raises)   │
//!                                             ▼
//!   supplier ─────► poll_some / poll_true ─► AdminError taxonomy
//!                    (deadline + pacing)      ▲
//!   JoinHandles ──► await_all ────────────────┤
//!   Config ───────► construct / Registry ─────┘
//!
//!   inspected type ──► Inspect / StaticFields ──► read_field[_as]
//! ```
//!
//! ## Features
//! | Area              | Description                                                         | Key items                                  |
//! |-------------------|---------------------------------------------------------------------|--------------------------------------------|
//! | **Errors**        | Closed taxonomy; causes always preserved.                           | [`AdminError`], [`BoxError`]               |
//! | **Normalization** | Convert or deliberately discard failures from units of work.        | [`run`], [`run_unit`], [`swallow`]         |
//! | **Polling**       | Bounded retry loop for eventually-consistent state.                 | [`poll_some`], [`poll_true`], [`PollPolicy`] |
//! | **Aggregation**   | One completion signal for many spawned computations.                | [`await_all`]                              |
//! | **Introspection** | Read internal state across an explicit ancestor chain.              | [`Inspect`], [`StaticFields`]              |
//! | **Construction**  | Config-accepting factory preferred, no-argument fallback.           | [`FromConfig`], [`Registry`], [`construct`] |
//! | **Preconditions** | Fail-fast argument checks.                                          | [`require_positive`], [`require_non_empty`] |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use clusterkit::{poll_true_with, BoxError, PollPolicy};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut reports = 0u32;
//!     let target = 3u32;
//!
//!     // Wait until the (simulated) cluster reports the target replica count.
//!     poll_true_with(
//!         PollPolicy::with_interval(Duration::from_millis(1)),
//!         || {
//!             reports += 1;
//!             let converged = reports >= target;
//!             async move { Ok::<_, BoxError>(converged) }
//!         },
//!         Duration::from_secs(10),
//!     )
//!     .await?;
//!     Ok(())
//! }
//! ```

mod collect;
mod config;
mod error;
mod exec;
mod inspect;
mod os;
mod plugin;
mod validate;

// ---- Public re-exports ----

pub use collect::to_sorted_map;
pub use config::Config;
pub use error::{AdminError, BoxError};
pub use exec::{
    await_all, is_expired, poll_some, poll_some_with, poll_true, poll_true_with, run, run_unit,
    swallow, swallow_async, Jitter, PollPolicy,
};
pub use inspect::{
    read_field, read_field_as, read_static_field, read_static_field_as, Inspect, StaticFields,
};
pub use os::{available_port, create_temp_dir, remove_recursively, resolve_port};
pub use plugin::{construct, FromConfig, Registry};
pub use validate::{random_string, require_non_empty, require_positive};
