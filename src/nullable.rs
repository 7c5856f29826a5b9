//! The same vocabulary directly over `std::option::Option`
//!
//! [`NullableExt`] is for call sites that already hold a native `Option` and
//! don't want to convert into [`Optional`]. `Option::map` already has the right
//! meaning, so the trait adds `bind` and the checked reductions
//! `try_reduce`/`try_reduce_with` with exactly `Optional`'s failure policy.
//!
//! # Limitation
//!
//! The adapter works on the native primitive as is, so it only ever sees the
//! outer layer. A payload that is itself an `Option` is opaque: `Some(None)` is
//! "present", and reducing it hands back `None` without complaint. Chains that
//! bind through nested native options are therefore not guaranteed to
//! reassociate to the same result as the flattened chain. Convert to
//! [`Optional`] and use [`Optional::flatten`] when nesting matters.
//!
//! ```
//! use sluice::nullable::NullableExt;
//!
//! let count = Some("12345").map(str::to_uppercase).map(|s| s.len());
//! assert_eq!(count.try_reduce(Some(0)), Ok(5));
//!
//! let missing: Option<&str> = None;
//! assert_eq!(missing.map(str::len).try_reduce(Some(0)), Ok(0));
//! ```

use crate::{ContractViolation, Optional};

/// `bind` and checked reductions for native options.
pub trait NullableExt<T>: Sized {
    /// Chain a computation that may produce nothing.
    fn bind<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;

    /// Unwrap with a default. The default is only consulted for `None`, and a
    /// `None` default then fails with [`ContractViolation::AbsentDefault`].
    fn try_reduce(self, default: Option<T>) -> Result<T, ContractViolation>;

    /// Unwrap with a lazy fallback; a `None` from the fallback is
    /// [`ContractViolation::FallbackYieldedAbsent`].
    fn try_reduce_with<F>(self, fallback: F) -> Result<T, ContractViolation>
    where
        F: FnOnce() -> Option<T>;

    /// Convert into an [`Optional`].
    fn into_optional(self) -> Optional<T>;
}

impl<T> NullableExt<T> for Option<T> {
    #[inline]
    fn bind<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.into_optional().bind(|value| Optional::of(f(value))).into_option()
    }

    fn try_reduce(self, default: Option<T>) -> Result<T, ContractViolation> {
        self.into_optional().try_reduce(default)
    }

    fn try_reduce_with<F>(self, fallback: F) -> Result<T, ContractViolation>
    where
        F: FnOnce() -> Option<T>,
    {
        self.into_optional().try_reduce_with(fallback)
    }

    #[inline]
    fn into_optional(self) -> Optional<T> {
        Optional::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict_upper(s: &str) -> Option<String> {
        if s.chars().all(char::is_alphabetic) {
            Some(s.to_uppercase())
        } else {
            None
        }
    }

    #[test]
    fn test_map_handles_none() {
        let value: Option<&str> = None;
        let count = value.map(str::to_uppercase).map(|s| s.len());
        assert_eq!(count.try_reduce(Some(0)), Ok(0));
    }

    #[test]
    fn test_bind_on_none() {
        let value: Option<&str> = None;
        assert_eq!(value.bind(strict_upper), None);
    }

    #[test]
    fn test_bind_some_returning_none() {
        assert_eq!(Some("1234").bind(strict_upper), None);
    }

    #[test]
    fn test_bind_some_returning_some() {
        assert_eq!(Some("qwerty").bind(strict_upper), Some("QWERTY".to_string()));
    }

    #[test]
    fn test_reduce_policy_matches_optional() {
        for (value, default) in [(Some(1), Some(2)), (None, Some(2)), (None, None), (Some(1), None)] {
            assert_eq!(
                value.try_reduce(default),
                Optional::of(value).try_reduce(default)
            );
        }
        assert_eq!(None::<i32>.try_reduce(None), Err(ContractViolation::AbsentDefault));
    }

    #[test]
    fn test_present_value_ignores_missing_default() {
        assert_eq!(Some(1).try_reduce(None), Ok(1));
        assert_eq!(Some("kept").try_reduce(None), Ok("kept"));
    }

    #[test]
    fn test_reduce_with_fallback_violation() {
        assert_eq!(
            None::<i32>.try_reduce_with(|| None),
            Err(ContractViolation::FallbackYieldedAbsent)
        );
        assert_eq!(None::<i32>.try_reduce_with(|| Some(4)), Ok(4));
    }

    #[test]
    fn test_nested_payload_is_opaque() {
        let nested: Option<Option<i32>> = Some(None);
        assert_eq!(nested.try_reduce(Some(Some(1))), Ok(None));
        assert_eq!(nested.into_optional().bind(Optional::of), Optional::Absent);
    }
}
