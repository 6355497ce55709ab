//! # Duplicate-rejecting collection into a sorted map.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::AdminError;

/// Collects key/value pairs into an ordered map, rejecting duplicates.
///
/// `BTreeMap` collection silently keeps the last value for a repeated
/// key; admin listings (partitions by id, brokers by host) treat a
/// repeated key as corrupt input instead, so the duplicate fails with
/// [`AdminError::InvalidArgument`].
///
/// # Example
/// ```
/// use clusterkit::to_sorted_map;
///
/// let by_id = to_sorted_map([(2, "broker-2"), (0, "broker-0")]).unwrap();
/// assert_eq!(by_id.keys().copied().collect::<Vec<_>>(), vec![0, 2]);
///
/// assert!(to_sorted_map([(1, "a"), (1, "b")]).is_err());
/// ```
pub fn to_sorted_map<K, V>(
    pairs: impl IntoIterator<Item = (K, V)>,
) -> Result<BTreeMap<K, V>, AdminError>
where
    K: Ord + Display,
{
    let mut map = BTreeMap::new();
    for (key, value) in pairs {
        match map.entry(key) {
            Entry::Occupied(occupied) => {
                return Err(AdminError::invalid_argument(format!(
                    "duplicate key `{}`",
                    occupied.key()
                )));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(value);
            }
        }
    }
    Ok(map)
}
