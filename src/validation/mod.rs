//! Validation type for accumulating errors
//!
//! [`Validation<T, E>`] is either `Valid(T)` or `Invalid` with a non-empty,
//! ordered list of errors. It has two ways of combining:
//!
//! - [`bind`](Validation::bind) is monadic and sequential. It stops at the
//!   first invalid step, so later checks never run and report nothing.
//! - [`combine`](Validation::combine) is applicative. Both sides are already
//!   evaluated, and when both are invalid the errors are concatenated, left
//!   first.
//!
//! # Examples
//!
//! ## Accumulating errors
//!
//! ```
//! use sluice::{Validation, ValidationError};
//!
//! let name = Validation::<String>::invalid(ValidationError::new("name is empty"));
//! let age = Validation::<u8>::invalid(ValidationError::new("age is missing"));
//!
//! let user = name.combine(age, |name, age| (name, age));
//! let messages: Vec<_> = user.errors().unwrap().iter().map(|e| e.message()).collect();
//! assert_eq!(messages, vec!["name is empty", "age is missing"]);
//! ```
//!
//! ## Running many validators at once
//!
//! ```
//! use sluice::validation::{validate, Validator};
//! use sluice::{Validation, ValidationError};
//!
//! let validators: Vec<Validator<String>> = vec![
//!     Box::new(|s: &String| {
//!         if s.len() < 8 { vec![ValidationError::new("too short")] } else { vec![] }
//!     }),
//!     Box::new(|s: &String| {
//!         if s.chars().any(|c| c.is_ascii_digit()) { vec![] } else { vec![ValidationError::new("no digit")] }
//!     }),
//! ];
//! let check = validate(validators);
//!
//! assert!(check("hunter22".to_string()).is_valid());
//! assert_eq!(check("abc".to_string()).errors().map(|e| e.len()), Some(2));
//! ```

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{validate, Validator};

use crate::{ContractViolation, NonEmptyVec, Semigroup};

/// A value that is either valid or carries at least one error.
///
/// # Type Parameters
///
/// * `T` - The type of the valid value
/// * `E` - The type of a single error (defaults to [`ValidationError`])
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E = ValidationError> {
    /// The value passed validation.
    Valid(T),
    /// The value failed; errors are in the order they were produced.
    Invalid(NonEmptyVec<E>),
}

impl<T, E> Validation<T, E> {
    /// Create a valid value.
    #[inline]
    pub fn valid(value: T) -> Self {
        Validation::Valid(value)
    }

    /// Create an invalid value from a single error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Validation::Invalid(NonEmptyVec::singleton(error))
    }

    /// Create an invalid value from several errors.
    #[inline]
    pub fn invalid_many(errors: NonEmptyVec<E>) -> Self {
        Validation::Invalid(errors)
    }

    /// Build a `Valid` from a payload that must not be absent.
    ///
    /// ```
    /// use sluice::{ContractViolation, Validation};
    ///
    /// assert_eq!(Validation::<i32>::try_valid(Some(1)), Ok(Validation::Valid(1)));
    /// assert_eq!(
    ///     Validation::<i32>::try_valid(None),
    ///     Err(ContractViolation::AbsentPayload)
    /// );
    /// ```
    pub fn try_valid(value: Option<T>) -> Result<Self, ContractViolation> {
        match value {
            Some(value) => Ok(Validation::Valid(value)),
            None => Err(ContractViolation::AbsentPayload.raise()),
        }
    }

    /// Build an `Invalid` from a plain vector of errors.
    ///
    /// An empty vector is a contract violation: an invalid value with nothing
    /// wrong with it cannot exist.
    ///
    /// ```
    /// use sluice::{ContractViolation, Validation};
    ///
    /// let result = Validation::<i32, &str>::try_invalid(vec![]);
    /// assert_eq!(result, Err(ContractViolation::EmptyErrors));
    /// ```
    pub fn try_invalid(errors: Vec<E>) -> Result<Self, ContractViolation> {
        NonEmptyVec::try_from(errors).map(Validation::Invalid)
    }

    /// `true` for `Valid`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// `true` for `Invalid`.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validation::Invalid(_))
    }

    /// The accumulated errors, if invalid.
    pub fn errors(&self) -> Option<&NonEmptyVec<E>> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }

    /// Create a validation from a `Result`.
    #[inline]
    pub fn from_result(result: Result<T, NonEmptyVec<E>>) -> Self {
        match result {
            Ok(value) => Validation::Valid(value),
            Err(errors) => Validation::Invalid(errors),
        }
    }

    /// Convert this validation to a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, NonEmptyVec<E>> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(errors) => Err(errors),
        }
    }

    /// Transform the valid value; errors pass through untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(f(value)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Transform each error, keeping order.
    pub fn map_errors<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(value),
            Validation::Invalid(errors) => Validation::Invalid(errors.map(f)),
        }
    }

    /// Chain a dependent validation.
    ///
    /// Short-circuits: on `Invalid`, `f` is not called and the existing errors
    /// are carried forward unchanged. Use [`combine`](Validation::combine) to
    /// report errors from independent checks together.
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let first = Validation::<i32, &str>::invalid("first");
    /// let result = first.bind(|_| Validation::<i32, &str>::invalid("second"));
    /// assert_eq!(result.errors().map(|e| e.as_slice()), Some(&["first"][..]));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Valid(value) => f(value),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Bind, then combine the original value with the bound one.
    ///
    /// Same as `self.bind(|t| f(&t).map(|b| project(t, b)))`.
    pub fn bind_map<B, R, F, P>(self, f: F, project: P) -> Validation<R, E>
    where
        F: FnOnce(&T) -> Validation<B, E>,
        P: FnOnce(T, B) -> R,
    {
        self.bind(|value| f(&value).map(|bound| project(value, bound)))
    }

    /// Total elimination: exactly one of the branches runs.
    #[inline]
    pub fn match_with<R, V, I>(self, on_valid: V, on_invalid: I) -> R
    where
        V: FnOnce(T) -> R,
        I: FnOnce(NonEmptyVec<E>) -> R,
    {
        match self {
            Validation::Valid(value) => on_valid(value),
            Validation::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Applicative combination of two independent validations.
    ///
    /// - both valid: `Valid(f(t, u))`
    /// - one invalid: that side's errors
    /// - both invalid: left errors followed by right errors
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let a = Validation::<i32, &str>::invalid("e1");
    /// let b = Validation::<i32, &str>::invalid("e2");
    /// let sum = a.combine(b, |x, y| x + y);
    /// assert_eq!(sum.errors().map(|e| e.as_slice()), Some(&["e1", "e2"][..]));
    /// ```
    pub fn combine<U, R, F>(self, other: Validation<U, E>, f: F) -> Validation<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid(f(a, b)),
            (Validation::Invalid(e1), Validation::Invalid(e2)) => {
                Validation::Invalid(e1.combine(e2))
            }
            (Validation::Invalid(errors), _) | (_, Validation::Invalid(errors)) => {
                Validation::Invalid(errors)
            }
        }
    }

    /// [`combine`](Validation::combine) into a tuple.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        self.combine(other, |a, b| (a, b))
    }

    /// Combine any number of independent validations, accumulating every
    /// error in iteration order.
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let all = Validation::sequence(vec![
    ///     Validation::<i32, &str>::valid(1),
    ///     Validation::invalid("e1"),
    ///     Validation::valid(3),
    ///     Validation::invalid("e2"),
    /// ]);
    /// assert_eq!(all.errors().map(|e| e.as_slice()), Some(&["e1", "e2"][..]));
    /// ```
    pub fn sequence<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        validations
            .into_iter()
            .fold(Validation::Valid(Vec::new()), |acc, next| {
                acc.combine(next, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}

impl<T, E> From<Validation<T, E>> for Result<T, NonEmptyVec<E>> {
    fn from(validation: Validation<T, E>) -> Self {
        validation.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(message: &'static str) -> ValidationError {
        ValidationError::new(message)
    }

    fn parse(s: &str) -> Validation<i32> {
        s.parse::<i32>()
            .map(Validation::valid)
            .unwrap_or_else(|_| Validation::invalid(err("not an integer")))
    }

    fn sqrt(i: i32) -> Validation<f64> {
        if i >= 0 {
            Validation::valid(f64::from(i).sqrt())
        } else {
            Validation::invalid(err("negative"))
        }
    }

    fn reciprocal(d: f64) -> Validation<f64> {
        if d == 0.0 {
            Validation::invalid(err("division by zero"))
        } else {
            Validation::valid(1.0 / d)
        }
    }

    fn messages<T>(v: &Validation<T>) -> Vec<&str> {
        v.errors()
            .map(|errors| errors.iter().map(ValidationError::message).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_constructors() {
        assert!(Validation::<_, &str>::valid(1).is_valid());
        assert!(Validation::<i32, _>::invalid("e").is_invalid());
        assert_eq!(
            Validation::<i32, _>::invalid_many(NonEmptyVec::new("a", vec!["b"]))
                .errors()
                .map(|e| e.len()),
            Some(2)
        );
    }

    #[test]
    fn test_try_invalid() {
        assert_eq!(
            Validation::<i32, &str>::try_invalid(vec!["a"]),
            Ok(Validation::invalid("a"))
        );
        assert_eq!(
            Validation::<i32, &str>::try_invalid(vec![]),
            Err(ContractViolation::EmptyErrors)
        );
    }

    #[test]
    fn test_try_valid() {
        assert_eq!(
            Validation::<String>::try_valid(None),
            Err(ContractViolation::AbsentPayload)
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(Validation::<_, &str>::valid(1), Validation::valid(1));
        assert_eq!(
            Validation::<i32, _>::invalid("e"),
            Validation::<i32, _>::invalid("e")
        );
        assert_ne!(Validation::<i32, _>::invalid("e"), Validation::valid(1));
    }

    #[test]
    fn test_map_carries_errors_forward() {
        let v = Validation::<i32, _>::invalid("e").map(|x| x * 2);
        assert_eq!(v, Validation::invalid("e"));
        assert_eq!(Validation::<_, &str>::valid(5).map(|x| x * 2), Validation::valid(10));
    }

    #[test]
    fn test_map_errors() {
        let v = Validation::<i32, _>::invalid_many(NonEmptyVec::new("a", vec!["bc"]))
            .map_errors(str::len);
        assert_eq!(v, Validation::invalid_many(NonEmptyVec::new(1, vec![2])));
    }

    #[test]
    fn test_bind_short_circuits_pipeline() {
        let result = parse("-1").bind(sqrt).bind(reciprocal);
        assert_eq!(messages(&result), vec!["negative"]);

        let result = parse("x").bind(sqrt).bind(reciprocal);
        assert_eq!(messages(&result), vec!["not an integer"]);

        let result = parse("0").bind(sqrt).bind(reciprocal);
        assert_eq!(messages(&result), vec!["division by zero"]);

        assert_eq!(parse("4").bind(sqrt).bind(reciprocal), Validation::valid(0.5));
    }

    #[test]
    fn test_combine_accumulates_independent_errors() {
        // Same failing inputs, checked independently rather than chained.
        let result = sqrt(-1)
            .combine(reciprocal(0.0), |a, b| a + b)
            .combine(parse("x"), |sum, i| sum + f64::from(i));
        assert_eq!(
            messages(&result),
            vec!["negative", "division by zero", "not an integer"]
        );
    }

    #[test]
    fn test_combine_one_side_invalid() {
        let left = Validation::<i32, &str>::invalid("left").and(Validation::valid(2));
        let right = Validation::<_, &str>::valid(1).and(Validation::<i32, _>::invalid("right"));
        assert_eq!(left, Validation::invalid("left"));
        assert_eq!(right, Validation::invalid("right"));
    }

    #[test]
    fn test_and_both_valid() {
        let v = Validation::<_, &str>::valid(1).and(Validation::valid("a"));
        assert_eq!(v, Validation::valid((1, "a")));
    }

    #[test]
    fn test_sequence() {
        let empty: Vec<Validation<i32, &str>> = vec![];
        assert_eq!(Validation::sequence(empty), Validation::valid(vec![]));

        let all_valid = Validation::sequence(vec![
            Validation::<_, &str>::valid(1),
            Validation::valid(2),
        ]);
        assert_eq!(all_valid, Validation::valid(vec![1, 2]));
    }

    #[test]
    fn test_bind_map_matches_nested_bind() {
        for input in ["4", "-1", "x"] {
            let sugar = parse(input).bind_map(|i| sqrt(*i), |i, root| (i, root));
            let nested = parse(input).bind(|i| sqrt(i).map(|root| (i, root)));
            assert_eq!(sugar, nested);
        }
    }

    #[test]
    fn test_match_with() {
        let ok = Validation::<_, &str>::valid(2).match_with(|v| v, |e| e.len() as i32);
        let bad = Validation::<i32, _>::invalid_many(NonEmptyVec::new("a", vec!["b"]))
            .match_with(|v| v, |e| -(e.len() as i32));
        assert_eq!((ok, bad), (2, -2));
    }

    #[test]
    fn test_result_round_trip() {
        let v = Validation::<i32, &str>::from_result(Err(NonEmptyVec::singleton("e")));
        let r: Result<i32, NonEmptyVec<&str>> = v.into();
        assert_eq!(r, Err(NonEmptyVec::singleton("e")));
        assert_eq!(Validation::<_, &str>::valid(3).into_result(), Ok(3));
    }
}
