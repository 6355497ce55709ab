//! # Class-level (static) attribute lookup.
//!
//! Static state is not attached to an instance, so the chain is described
//! by [`StaticFields`] descriptors: one per type, each pointing at its
//! ancestor. Descriptors are plain `static` values; a lookup walks the
//! chain the same way instance lookup does.

use std::any::Any;

use crate::error::AdminError;

/// Descriptor of one type's class-level attributes.
///
/// # Example
/// ```
/// use std::any::Any;
/// use clusterkit::{read_static_field_as, StaticFields};
///
/// static DEFAULT_QUOTA: u64 = 10_000;
///
/// static LIMITER: StaticFields = StaticFields {
///     label: "Limiter",
///     lookup: |name| match name {
///         "DEFAULT_QUOTA" => Some(&DEFAULT_QUOTA),
///         _ => None,
///     },
///     parent: None,
/// };
///
/// let quota = read_static_field_as::<u64>(&LIMITER, "DEFAULT_QUOTA").unwrap();
/// assert_eq!(*quota, 10_000);
/// ```
pub struct StaticFields {
    /// The described type's name, used in diagnostics.
    pub label: &'static str,
    /// Looks up an attribute declared directly on the described type.
    pub lookup: fn(&str) -> Option<&'static dyn Any>,
    /// The ancestor descriptor, if the type has one.
    pub parent: Option<&'static StaticFields>,
}

/// Reads a class-level attribute, searching the descriptor and then each
/// ancestor descriptor.
pub fn read_static_field(
    ty: &'static StaticFields,
    name: &str,
) -> Result<&'static dyn Any, AdminError> {
    let mut current = Some(ty);
    while let Some(level) = current {
        if let Some(value) = (level.lookup)(name) {
            return Ok(value);
        }
        current = level.parent;
    }
    Err(AdminError::unexpected(format!(
        "static field `{name}` is not declared by `{}` or any of its ancestors",
        ty.label
    )))
}

/// Reads a class-level attribute at a concrete type.
pub fn read_static_field_as<T: 'static>(
    ty: &'static StaticFields,
    name: &str,
) -> Result<&'static T, AdminError> {
    let value = read_static_field(ty, name)?;
    value.downcast_ref::<T>().ok_or_else(|| {
        AdminError::unexpected(format!(
            "static field `{name}` on `{}` cannot be read as `{}`",
            ty.label,
            std::any::type_name::<T>()
        ))
    })
}
