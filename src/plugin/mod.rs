//! Policy-based construction of pluggable components.
//!
//! ## Contents
//! - [`FromConfig`] — the capability a component implements to accept
//!   configuration at construction time
//! - [`construct`] — direct construction for statically-known types
//! - [`Registry`] — name-keyed factories with the
//!   prefer-configuration-accepting, fall-back-to-no-argument policy
//!
//! The decision between "accepts configuration" and "default construction"
//! belongs to this module alone; callers supply a target (type or name)
//! and a [`Config`](crate::Config) value.

mod registry;

pub use registry::Registry;

use crate::config::Config;
use crate::error::{AdminError, BoxError};

/// Capability of components that are constructed from configuration.
///
/// # Example
/// ```
/// use clusterkit::{construct, BoxError, Config, FromConfig};
///
/// struct ReplicaScorer {
///     weight: i64,
/// }
///
/// impl FromConfig for ReplicaScorer {
///     fn from_config(config: &Config) -> Result<Self, BoxError> {
///         let weight = config.integer("replica.weight")?.unwrap_or(1);
///         Ok(Self { weight })
///     }
/// }
///
/// let config: Config = [("replica.weight", "4")].into_iter().collect();
/// let scorer: ReplicaScorer = construct(&config).unwrap();
/// assert_eq!(scorer.weight, 4);
/// ```
pub trait FromConfig: Sized {
    /// Builds the component from the given configuration.
    fn from_config(config: &Config) -> Result<Self, BoxError>;
}

/// Constructs a statically-known component from configuration.
///
/// A failing constructor surfaces as [`AdminError::Unexpected`] with the
/// cause preserved.
pub fn construct<T: FromConfig>(config: &Config) -> Result<T, AdminError> {
    T::from_config(config).map_err(|error| {
        AdminError::unexpected_with(
            format!("failed to construct `{}`", std::any::type_name::<T>()),
            error,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Throttle {
        limit: i64,
    }

    impl FromConfig for Throttle {
        fn from_config(config: &Config) -> Result<Self, BoxError> {
            let limit = config.require("throttle.limit")?.parse()?;
            Ok(Self { limit })
        }
    }

    #[test]
    fn test_construct_reads_configuration() {
        let config: Config = [("throttle.limit", "250")].into_iter().collect();
        let throttle: Throttle = construct(&config).unwrap();
        assert_eq!(throttle.limit, 250);
    }

    #[test]
    fn test_construct_failure_is_unexpected_with_cause() {
        use std::error::Error;

        let err = construct::<Throttle>(&Config::new()).unwrap_err();
        assert_eq!(err.as_label(), "unexpected");
        assert!(err.to_string().contains("Throttle"));
        let cause = err.source().expect("constructor failure must be preserved");
        assert!(cause.to_string().contains("throttle.limit"));
    }
}
