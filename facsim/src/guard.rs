//! Guard functions checking values at the point of use.
//!
//! Each guard returns the checked value on success, so it can be chained with `?`, and
//! [`Error::InvalidArgument`](crate::Error::InvalidArgument) naming the checked value otherwise.

use crate::{Error, Result};

/// Returns the contained value, or an error if `value` is `None`.
///
/// # Example
///
/// ```
/// # use facsim::guard::require_some;
/// assert_eq!(require_some("seed", Some(7)).unwrap(), 7);
/// assert!(require_some::<u64>("seed", None).is_err());
/// ```
pub fn require_some<T>(name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::invalid_argument(name, "a value is required"))
}

/// Returns `value` if `predicate` accepts it; otherwise fails with `reason`.
///
/// The reason is computed lazily, and only when the check fails.
pub fn require_valid<T, P, R>(name: &str, value: T, predicate: P, reason: R) -> Result<T>
where
    P: FnOnce(&T) -> bool,
    R: FnOnce(&T) -> String,
{
    if predicate(&value) {
        Ok(value)
    } else {
        let reason = reason(&value);
        Err(Error::invalid_argument(name, reason))
    }
}
