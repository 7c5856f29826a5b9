//! Associative combination of error sequences
//!
//! [`Validation::combine`] merges the errors of two independent checks
//! through this trait. The crate implements it for [`NonEmptyVec`], where
//! combining appends the right-hand elements after the left.
//!
//! ```
//! use sluice::{NonEmptyVec, Semigroup};
//!
//! let errors = NonEmptyVec::singleton("e1").combine(NonEmptyVec::new("e2", vec!["e3"]));
//! assert_eq!(errors.as_slice(), &["e1", "e2", "e3"]);
//! ```
//!
//! [`Validation::combine`]: crate::Validation::combine
//! [`NonEmptyVec`]: crate::NonEmptyVec

/// A type with an associative binary operation.
///
/// Implementations must satisfy
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup: Sized {
    /// Combine with `other`, `self` first.
    fn combine(self, other: Self) -> Self;
}
