//! Non-empty ordered sequence
//!
//! [`NonEmptyVec<T>`] is the payload of [`Validation::Invalid`]: an invalid
//! value always carries at least one error, and the type makes an empty error
//! list unrepresentable instead of checking for it at every use site.
//!
//! # Examples
//!
//! ```
//! use sluice::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("too short", vec!["missing digit"]);
//! assert_eq!(errors.first(), &"too short");
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.as_slice(), &["too short", "missing digit"]);
//! ```
//!
//! [`Validation::Invalid`]: crate::Validation::Invalid

use std::ops::Deref;

use crate::{ContractViolation, Semigroup};

/// A vector guaranteed to contain at least one element.
///
/// Order is preserved by every operation, including [`Semigroup::combine`],
/// which appends the right-hand side after the left.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    items: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a first element and the rest.
    pub fn new(first: T, rest: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(rest.len() + 1);
        items.push(first);
        items.extend(rest);
        Self { items }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// ```
    /// use sluice::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton(42);
    /// assert_eq!(nev.len(), 1);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self { items: vec![value] }
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// ```
    /// use sluice::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Create a non-empty vector from a `Vec` without checking.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    ///
    /// ```should_panic
    /// use sluice::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::from_vec_unchecked(Vec::<i32>::new()); // panics
    /// ```
    pub fn from_vec_unchecked(items: Vec<T>) -> Self {
        Self::from_vec(items).expect("NonEmptyVec::from_vec_unchecked called on empty Vec")
    }

    /// The first element. Always present.
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// The last element. Always present.
    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Number of elements, always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present to satisfy `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Map a function over all elements, keeping order.
    ///
    /// ```
    /// use sluice::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]).map(|x| x * 2);
    /// assert_eq!(nev.into_vec(), vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(self, f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Convert to a regular `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for NonEmptyVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = ContractViolation;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(items).ok_or_else(|| ContractViolation::EmptyErrors.raise())
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.items
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
