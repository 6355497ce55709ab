//! # Precondition checks and transient-resource identifiers.
//!
//! Precondition violations fail immediately and synchronously with
//! [`AdminError::InvalidArgument`]; they are never retried.

use rand::Rng;

use crate::error::AdminError;

const IDENT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Returns `value` unchanged when it is positive.
///
/// # Example
/// ```
/// use clusterkit::require_positive;
///
/// assert_eq!(require_positive(3).unwrap(), 3);
/// assert!(require_positive(0).is_err());
/// assert!(require_positive(-7).is_err());
/// ```
pub fn require_positive(value: i64) -> Result<i64, AdminError> {
    if value <= 0 {
        return Err(AdminError::invalid_argument(format!(
            "the value {value} must be bigger than zero"
        )));
    }
    Ok(value)
}

/// Returns `value` unchanged when it is non-empty.
pub fn require_non_empty(value: &str) -> Result<&str, AdminError> {
    if value.is_empty() {
        return Err(AdminError::invalid_argument("the value can't be empty"));
    }
    Ok(value)
}

/// Random lowercase-alphanumeric identifier of the given length.
///
/// Used to name transient resources (temp directories, scratch topics)
/// without coordination.
pub fn random_string(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| IDENT_CHARS[rng.random_range(0..IDENT_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_is_identity_for_positive_values() {
        for value in [1, 2, 7, i64::MAX] {
            assert_eq!(require_positive(value).unwrap(), value);
        }
    }

    #[test]
    fn test_require_positive_rejects_zero_and_negatives() {
        for value in [0, -1, i64::MIN] {
            let err = require_positive(value).unwrap_err();
            assert!(err.is_invalid_argument(), "value {value} must be rejected");
        }
    }

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty("broker-0").unwrap(), "broker-0");
        let err = require_non_empty("").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_random_string_length_and_charset() {
        for len in [0, 1, 16, 64] {
            let ident = random_string(len);
            assert_eq!(ident.len(), len);
            assert!(ident
                .bytes()
                .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit()));
        }
    }

    #[test]
    fn test_random_strings_differ() {
        assert_ne!(random_string(32), random_string(32));
    }
}
