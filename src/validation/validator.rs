//! Running a fixed set of validators against one candidate

use super::{Validation, ValidationError};
use crate::NonEmptyVec;

/// A single check: returns every problem it finds, or nothing.
pub type Validator<T, E = ValidationError> = Box<dyn Fn(&T) -> Vec<E> + Send + Sync>;

/// Build a function that runs every validator against a candidate.
///
/// All validators run, with no short-circuit, so a single pass reports
/// everything that is wrong. Errors are concatenated in validator order, then
/// in the order each validator returned them. The candidate comes back as
/// `Valid` only when no validator reported anything.
///
/// ```
/// use sluice::validation::{validate, Validator};
///
/// let validators: Vec<Validator<i32, &str>> = vec![
///     Box::new(|n: &i32| if *n < 0 { vec!["negative"] } else { vec![] }),
///     Box::new(|n: &i32| if n % 2 != 0 { vec!["odd"] } else { vec![] }),
/// ];
/// let check = validate(validators);
///
/// assert!(check(4).is_valid());
/// assert_eq!(check(-3).errors().map(|e| e.as_slice()), Some(&["negative", "odd"][..]));
/// ```
pub fn validate<T, E>(validators: Vec<Validator<T, E>>) -> impl Fn(T) -> Validation<T, E> {
    move |candidate| {
        let errors: Vec<E> = validators
            .iter()
            .flat_map(|validator| validator(&candidate))
            .collect();
        match NonEmptyVec::from_vec(errors) {
            None => Validation::Valid(candidate),
            Some(errors) => Validation::Invalid(errors),
        }
    }
}
