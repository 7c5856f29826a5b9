//! Optional values: present or absent
//!
//! [`Optional<T>`] models a value that may or may not be there. Callers build
//! one at a boundary (a lookup, a parse), keep composing with [`map`] and
//! [`bind`] without unwrapping, and eliminate it once at the end with
//! [`reduce`] or [`match_with`].
//!
//! It is a closed two-variant type of its own, not an alias of
//! `std::option::Option`. Construction from a native `Option` and reduction
//! with a possibly-absent default are checked contracts here.
//!
//! # Examples
//!
//! ```
//! use sluice::Optional;
//!
//! let len = Optional::present("12345".to_string())
//!     .map(|s| s.to_uppercase())
//!     .map(|s| s.len());
//! assert_eq!(len, Optional::Present(5));
//!
//! let len = Optional::<String>::absent()
//!     .map(|s| s.to_uppercase())
//!     .map(|s| s.len())
//!     .reduce(0);
//! assert_eq!(len, 0);
//! ```
//!
//! [`map`]: Optional::map
//! [`bind`]: Optional::bind
//! [`reduce`]: Optional::reduce
//! [`match_with`]: Optional::match_with

use crate::ContractViolation;

/// A value of type `T` that is either present or absent.
///
/// Equality is structural: two `Absent`s are equal, and two `Present`s are
/// equal when their payloads are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// A value that is there.
    Present(T),
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> Optional<T> {
    /// Wrap a value that is known to be there.
    #[inline]
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// The absent value.
    #[inline]
    pub fn absent() -> Self {
        Optional::Absent
    }

    /// Lift a native `Option`, mapping `None` to `Absent`.
    ///
    /// ```
    /// use sluice::Optional;
    ///
    /// assert_eq!(Optional::of(Some(1)), Optional::Present(1));
    /// assert_eq!(Optional::<i32>::of(None), Optional::of(None));
    /// ```
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }

    /// Build a `Present` from a payload that must not be absent.
    ///
    /// Unlike [`Optional::of`], a `None` payload is a contract violation and
    /// fails right here rather than turning into `Absent`.
    ///
    /// ```
    /// use sluice::{ContractViolation, Optional};
    ///
    /// assert_eq!(Optional::try_present(Some(3)), Ok(Optional::Present(3)));
    /// assert_eq!(
    ///     Optional::<i32>::try_present(None),
    ///     Err(ContractViolation::AbsentPayload)
    /// );
    /// ```
    pub fn try_present(value: Option<T>) -> Result<Self, ContractViolation> {
        match value {
            Some(value) => Ok(Optional::Present(value)),
            None => Err(ContractViolation::AbsentPayload.raise()),
        }
    }

    /// `true` for `Present`.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// `true` for `Absent`.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Borrow the payload.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Convert back to a native `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    /// Transform the payload if present.
    ///
    /// `f` is never called on `Absent`. A function that may itself produce
    /// nothing belongs in [`bind`](Optional::bind).
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Chain a computation that may itself be absent.
    ///
    /// The result is flattened: `f`'s `Optional` is returned as is.
    ///
    /// ```
    /// use sluice::Optional;
    ///
    /// fn strict_upper(s: String) -> Optional<String> {
    ///     if s.chars().all(char::is_alphabetic) {
    ///         Optional::present(s.to_uppercase())
    ///     } else {
    ///         Optional::absent()
    ///     }
    /// }
    ///
    /// assert_eq!(
    ///     Optional::present("qwerty".to_string()).bind(strict_upper),
    ///     Optional::present("QWERTY".to_string())
    /// );
    /// assert!(Optional::present("1234".to_string()).bind(strict_upper).is_absent());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Bind, then combine the original payload with the bound one.
    ///
    /// Equivalent to `self.bind(|t| f(&t).map(|b| project(t, b)))`; it exists
    /// so a two-step lookup reads as one expression.
    ///
    /// ```
    /// use sluice::Optional;
    ///
    /// let user = Optional::present("ada");
    /// let greeting = user.bind_map(
    ///     |name| if name.is_empty() { Optional::absent() } else { Optional::present(name.len()) },
    ///     |name, len| format!("{name}:{len}"),
    /// );
    /// assert_eq!(greeting, Optional::present("ada:3".to_string()));
    /// ```
    pub fn bind_map<B, R, F, P>(self, f: F, project: P) -> Optional<R>
    where
        F: FnOnce(&T) -> Optional<B>,
        P: FnOnce(T, B) -> R,
    {
        self.bind(|value| f(&value).map(|bound| project(value, bound)))
    }

    /// Total elimination: exactly one of the branches runs.
    #[inline]
    pub fn match_with<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Optional::Present(value) => on_present(value),
            Optional::Absent => on_absent(),
        }
    }

    /// Unwrap with a default for the absent case.
    #[inline]
    pub fn reduce(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    /// Unwrap, computing the default lazily.
    #[inline]
    pub fn reduce_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => fallback(),
        }
    }

    /// Unwrap with a default that arrives as a native `Option`.
    ///
    /// A present payload is returned as is and the default is ignored. When
    /// `self` is absent the default must be there: a `None` default fails
    /// with [`ContractViolation::AbsentDefault`].
    ///
    /// ```
    /// use sluice::{ContractViolation, Optional};
    ///
    /// assert_eq!(Optional::<i32>::absent().try_reduce(Some(7)), Ok(7));
    /// assert_eq!(Optional::present(1).try_reduce(None), Ok(1));
    /// assert_eq!(
    ///     Optional::<i32>::absent().try_reduce(None),
    ///     Err(ContractViolation::AbsentDefault)
    /// );
    /// ```
    pub fn try_reduce(self, default: Option<T>) -> Result<T, ContractViolation> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => default.ok_or_else(|| ContractViolation::AbsentDefault.raise()),
        }
    }

    /// Unwrap with a fallback that may itself come back empty.
    ///
    /// The fallback runs only for `Absent`; if it yields `None` the call fails
    /// with [`ContractViolation::FallbackYieldedAbsent`].
    pub fn try_reduce_with<F>(self, fallback: F) -> Result<T, ContractViolation>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => {
                fallback().ok_or_else(|| ContractViolation::FallbackYieldedAbsent.raise())
            }
        }
    }

    /// Iterate over the payload: one item if present, none otherwise.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Optional<Optional<T>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Optional<T> {
        self.bind(|inner| inner)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
