//! # Instance attribute lookup across an ancestor chain.
//!
//! Rust has no runtime reflection, so "reach into private state" is an
//! explicit capability: a type that wants to be inspectable implements
//! [`Inspect`], naming its internal fields and (optionally) the next type
//! in its delegation chain. Call sites go through [`read_field`] /
//! [`read_field_as`] and never depend on the mechanism.
//!
//! This deliberately pierces encapsulation and is brittle against
//! refactoring of the inspected type; it exists to extract internal state
//! from objects that expose no public accessor. Keep implementations at
//! the boundary to the inspected library.

use std::any::Any;

use crate::error::AdminError;

/// Structural introspection over a type's internal state.
///
/// # Example
/// ```
/// use std::any::Any;
/// use clusterkit::{read_field_as, Inspect};
///
/// struct Throttler {
///     tokens_per_sec: u64,
/// }
///
/// impl Inspect for Throttler {
///     fn type_label(&self) -> &'static str {
///         "Throttler"
///     }
///
///     fn field(&self, name: &str) -> Option<&dyn Any> {
///         match name {
///             "tokens_per_sec" => Some(&self.tokens_per_sec),
///             _ => None,
///         }
///     }
/// }
///
/// let throttler = Throttler { tokens_per_sec: 500 };
/// let rate = read_field_as::<u64>(&throttler, "tokens_per_sec").unwrap();
/// assert_eq!(*rate, 500);
/// ```
pub trait Inspect {
    /// Returns the inspected type's name, used in diagnostics.
    fn type_label(&self) -> &'static str;

    /// Looks up a field declared directly on this type (ancestors excluded).
    fn field(&self, name: &str) -> Option<&dyn Any>;

    /// Returns the next type in the ancestor (delegation) chain, if any.
    fn parent(&self) -> Option<&dyn Inspect> {
        None
    }
}

/// Reads the named attribute, searching the target and then each ancestor.
///
/// Each call re-walks the chain; nothing is cached. Exhausting the chain
/// without a match fails with [`AdminError::Unexpected`] naming both the
/// attribute and the originating type.
pub fn read_field<'a>(target: &'a dyn Inspect, name: &str) -> Result<&'a dyn Any, AdminError> {
    let mut current: Option<&dyn Inspect> = Some(target);
    while let Some(level) = current {
        if let Some(value) = level.field(name) {
            return Ok(value);
        }
        current = level.parent();
    }
    Err(AdminError::unexpected(format!(
        "field `{name}` is not declared by `{}` or any of its ancestors",
        target.type_label()
    )))
}

/// Reads the named attribute at a concrete type.
///
/// A located value that cannot be read as `T` fails with
/// [`AdminError::Unexpected`].
pub fn read_field_as<'a, T: 'static>(
    target: &'a dyn Inspect,
    name: &str,
) -> Result<&'a T, AdminError> {
    let value = read_field(target, name)?;
    value.downcast_ref::<T>().ok_or_else(|| {
        AdminError::unexpected(format!(
            "field `{name}` on `{}` cannot be read as `{}`",
            target.type_label(),
            std::any::type_name::<T>()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PoolState {
        high_watermark: u64,
    }

    impl Inspect for PoolState {
        fn type_label(&self) -> &'static str {
            "PoolState"
        }

        fn field(&self, name: &str) -> Option<&dyn Any> {
            match name {
                "high_watermark" => Some(&self.high_watermark),
                _ => None,
            }
        }
    }

    struct Pool {
        state: PoolState,
        capacity: usize,
    }

    impl Inspect for Pool {
        fn type_label(&self) -> &'static str {
            "Pool"
        }

        fn field(&self, name: &str) -> Option<&dyn Any> {
            match name {
                "capacity" => Some(&self.capacity),
                _ => None,
            }
        }

        fn parent(&self) -> Option<&dyn Inspect> {
            Some(&self.state)
        }
    }

    struct PooledClient {
        pool: Pool,
        client_id: String,
    }

    impl Inspect for PooledClient {
        fn type_label(&self) -> &'static str {
            "PooledClient"
        }

        fn field(&self, name: &str) -> Option<&dyn Any> {
            match name {
                "client_id" => Some(&self.client_id),
                _ => None,
            }
        }

        fn parent(&self) -> Option<&dyn Inspect> {
            Some(&self.pool)
        }
    }

    fn client() -> PooledClient {
        PooledClient {
            client_id: "admin-7".to_string(),
            pool: Pool {
                capacity: 16,
                state: PoolState { high_watermark: 42 },
            },
        }
    }

    #[test]
    fn test_reads_field_declared_on_the_type_itself() {
        let target = client();
        let id = read_field_as::<String>(&target, "client_id").unwrap();
        assert_eq!(id, "admin-7");
    }

    #[test]
    fn test_reads_field_declared_two_levels_up() {
        let target = client();
        let mark = read_field_as::<u64>(&target, "high_watermark").unwrap();
        assert_eq!(*mark, 42, "grandparent field must be reachable");
    }

    #[test]
    fn test_missing_field_names_attribute_and_type() {
        let target = client();
        let err = read_field(&target, "nope").unwrap_err();
        assert_eq!(err.as_label(), "unexpected");
        let message = err.to_string();
        assert!(message.contains("nope"), "got: {message}");
        assert!(message.contains("PooledClient"), "got: {message}");
    }

    #[test]
    fn test_located_field_with_wrong_type_fails() {
        let target = client();
        let err = read_field_as::<i32>(&target, "high_watermark").unwrap_err();
        assert_eq!(err.as_label(), "unexpected");
        assert!(err.to_string().contains("i32"));
    }
}
