//! Testing utilities for code built on `Optional` and `Validation`
//!
//! Assertion macros with readable failure messages, plus `proptest`
//! strategies behind the `proptest` feature. The law checks themselves live in
//! [`laws`](crate::laws).
//!
//! # Examples
//!
//! ```rust
//! use sluice::{assert_absent, assert_errors, assert_present, assert_valid};
//! use sluice::{Optional, Validation};
//!
//! assert_present!(Optional::present(1));
//! assert_absent!(Optional::<i32>::absent());
//! assert_valid!(Validation::<_, &str>::valid(42));
//! assert_errors!(Validation::<i32, _>::invalid("e1"), ["e1"]);
//! ```

/// Assert that an `Optional` is present.
#[macro_export]
macro_rules! assert_present {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Present(_) => {}
            $crate::Optional::Absent => {
                panic!("Expected Present, got Absent");
            }
        }
    };
}

/// Assert that an `Optional` is absent.
#[macro_export]
macro_rules! assert_absent {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Absent => {}
            $crate::Optional::Present(v) => {
                panic!("Expected Absent, got Present: {:?}", v);
            }
        }
    };
}

/// Assert that a validation is valid.
///
/// ```rust
/// use sluice::{Validation, assert_valid};
///
/// assert_valid!(Validation::<_, String>::valid(42));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Valid(_) => {}
            $crate::Validation::Invalid(e) => {
                panic!("Expected Valid, got Invalid: {:?}", e);
            }
        }
    };
}

/// Assert that a validation is invalid.
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Invalid(_) => {}
            $crate::Validation::Valid(v) => {
                panic!("Expected Invalid, got Valid: {:?}", v);
            }
        }
    };
}

/// Assert that a validation is invalid with exactly these errors, in order.
///
/// The expected errors can be anything that compares equal to a slice of
/// the error type (an array, a `Vec`, a slice).
///
/// ```rust
/// use sluice::{Validation, assert_errors};
///
/// let v = Validation::<i32, _>::invalid("e1").and(Validation::<i32, _>::invalid("e2"));
/// assert_errors!(v, ["e1", "e2"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Invalid(errors) => {
                assert_eq!(errors.as_slice(), &$expected[..]);
            }
            $crate::Validation::Valid(v) => {
                panic!(
                    "Expected Invalid with errors {:?}, got Valid: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
use crate::{NonEmptyVec, Optional, Validation};

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Optional<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => LazyJust::new(|| Optional::Absent),
            3 => any_with::<T>(args).prop_map(Optional::Present),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for NonEmptyVec<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(any_with::<T>(args), 1..8)
            .prop_map(NonEmptyVec::from_vec_unchecked)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Validation<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Validation::Valid),
            any_with::<NonEmptyVec<E>>(e_params).prop_map(Validation::Invalid),
        ]
        .boxed()
    }
}
