//! Structural introspection behind a single seam.
//!
//! ## Contents
//! - [`Inspect`] — the capability a type implements to expose internal
//!   fields and its ancestor chain
//! - [`read_field`] / [`read_field_as`] — instance attribute lookup
//! - [`StaticFields`], [`read_static_field`] / [`read_static_field_as`] —
//!   class-level attribute lookup
//!
//! Call sites depend on these functions only, never on how a particular
//! type exposes its state.

mod instance;
mod statics;

pub use instance::{read_field, read_field_as, Inspect};
pub use statics::{read_static_field, read_static_field_as, StaticFields};
