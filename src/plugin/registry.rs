//! # Factory registry for pluggable components.
//!
//! Constructor-signature probing does not exist in Rust, so the
//! construction policy is made explicit at registration time: a component
//! name maps to a configuration-accepting factory, a no-argument factory,
//! or both. [`Registry::construct`] owns the selection:
//!
//! 1. the configuration-accepting factory, when registered;
//! 2. otherwise the no-argument factory;
//! 3. otherwise — or when the chosen factory fails — the construction
//!    fails with [`AdminError::Unexpected`], cause preserved.
//!
//! This lets components opt into configuration-awareness without forcing
//! every implementation to accept configuration.
//!
//! A registry is built up front and then shared immutably; it holds no
//! interior mutability.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::{AdminError, BoxError};

type ConfigFactory<P> = Box<dyn Fn(&Config) -> Result<Box<P>, BoxError> + Send + Sync>;
type DefaultFactory<P> = Box<dyn Fn() -> Result<Box<P>, BoxError> + Send + Sync>;

struct Entry<P: ?Sized> {
    with_config: Option<ConfigFactory<P>>,
    no_config: Option<DefaultFactory<P>>,
}

impl<P: ?Sized> Entry<P> {
    fn empty() -> Self {
        Self {
            with_config: None,
            no_config: None,
        }
    }
}

/// Name-keyed factories producing boxed components of capability `P`.
///
/// # Example
/// ```
/// use clusterkit::{Config, Registry};
///
/// trait Scorer: Send + Sync {
///     fn name(&self) -> &str;
/// }
///
/// struct Uniform;
/// impl Scorer for Uniform {
///     fn name(&self) -> &str {
///         "uniform"
///     }
/// }
///
/// let mut registry: Registry<dyn Scorer> = Registry::new();
/// registry.register_default("uniform", || Ok(Box::new(Uniform)));
///
/// let scorer = registry.construct("uniform", &Config::new()).unwrap();
/// assert_eq!(scorer.name(), "uniform");
/// ```
pub struct Registry<P: ?Sized> {
    entries: HashMap<String, Entry<P>>,
}

impl<P: ?Sized> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> Registry<P> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers the configuration-accepting factory for `name`.
    ///
    /// Replaces a previously registered configuration-accepting factory
    /// under the same name; the no-argument factory, if any, is kept.
    pub fn register_with_config(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&Config) -> Result<Box<P>, BoxError> + Send + Sync + 'static,
    ) {
        self.entries
            .entry(name.into())
            .or_insert_with(Entry::empty)
            .with_config = Some(Box::new(factory));
    }

    /// Registers the no-argument factory for `name`.
    pub fn register_default(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Result<Box<P>, BoxError> + Send + Sync + 'static,
    ) {
        self.entries
            .entry(name.into())
            .or_insert_with(Entry::empty)
            .no_config = Some(Box::new(factory));
    }

    /// Whether any factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered component names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Constructs the component registered under `name`.
    ///
    /// The configuration-accepting factory is preferred; the no-argument
    /// factory is the fallback. An unknown name or a failing factory
    /// surfaces as [`AdminError::Unexpected`] with the cause preserved.
    pub fn construct(&self, name: &str, config: &Config) -> Result<Box<P>, AdminError> {
        let entry = self.entries.get(name).ok_or_else(|| {
            AdminError::unexpected(format!("no component is registered under `{name}`"))
        })?;
        let produced = match (&entry.with_config, &entry.no_config) {
            (Some(factory), _) => factory(config),
            (None, Some(factory)) => factory(),
            (None, None) => {
                return Err(AdminError::unexpected(format!(
                    "no factory is registered under `{name}`"
                )))
            }
        };
        produced.map_err(|error| {
            AdminError::unexpected_with(format!("failed to construct component `{name}`"), error)
        })
    }
}
