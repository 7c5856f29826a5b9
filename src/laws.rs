//! Functor and monad laws as executable checks
//!
//! [`Monad`] is the minimal interface the law checks need: `unit`, `fmap` and
//! `flat_map`. [`Optional`] and [`Validation`] implement it, and each check
//! returns `true` when the law holds for the given inputs, which makes them
//! easy to drive from `proptest` or from plain example tests.
//!
//! ```
//! use sluice::laws;
//! use sluice::Optional;
//!
//! assert!(laws::functor_identity(Optional::present(3)));
//! assert!(laws::right_identity(Optional::<i32>::absent()));
//! assert!(laws::left_identity::<Optional<i32>, _, _>(4, |x| Optional::present(x * 2)));
//! ```

use crate::{Optional, Validation};

/// A type constructor with `unit`, `fmap` and `flat_map`.
pub trait Monad: Sized {
    /// The wrapped value type.
    type Value;

    /// The same constructor applied to another value type.
    type With<U>: Monad<Value = U>;

    /// Wrap a value (`pure`/`return`).
    fn unit(value: Self::Value) -> Self;

    /// Functor map.
    fn fmap<U, F>(self, f: F) -> Self::With<U>
    where
        F: FnOnce(Self::Value) -> U;

    /// Monadic bind.
    fn flat_map<U, F>(self, f: F) -> Self::With<U>
    where
        F: FnOnce(Self::Value) -> Self::With<U>;
}

impl<T> Monad for Optional<T> {
    type Value = T;
    type With<U> = Optional<U>;

    fn unit(value: T) -> Self {
        Optional::Present(value)
    }

    fn fmap<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.bind(f)
    }
}

impl<T, E> Monad for Validation<T, E> {
    type Value = T;
    type With<U> = Validation<U, E>;

    fn unit(value: T) -> Self {
        Validation::Valid(value)
    }

    fn fmap<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    fn flat_map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        self.bind(f)
    }
}

/// `m.fmap(id) == m`
pub fn functor_identity<M>(m: M) -> bool
where
    M: Monad + Clone,
    M::With<M::Value>: PartialEq<M>,
{
    m.clone().fmap(|value| value) == m
}

/// `m.fmap(g).fmap(f) == m.fmap(|v| f(g(v)))`
pub fn functor_composition<M, B, C, G, F>(m: M, g: G, f: F) -> bool
where
    M: Monad + Clone,
    M::With<B>: Monad<Value = B, With<C> = M::With<C>>,
    M::With<C>: PartialEq,
    G: Fn(M::Value) -> B,
    F: Fn(B) -> C,
{
    let stepwise = m.clone().fmap(&g).fmap(&f);
    let composed = m.fmap(|value| f(g(value)));
    stepwise == composed
}

/// `unit(a).flat_map(f) == f(a)`
pub fn left_identity<M, U, F>(value: M::Value, f: F) -> bool
where
    M: Monad,
    M::Value: Clone,
    M::With<U>: PartialEq,
    F: Fn(M::Value) -> M::With<U>,
{
    M::unit(value.clone()).flat_map::<U, _>(&f) == f(value)
}

/// `m.flat_map(unit) == m`
pub fn right_identity<M>(m: M) -> bool
where
    M: Monad + Clone,
    M::With<M::Value>: PartialEq<M>,
{
    m.clone()
        .flat_map(|value| <M::With<M::Value> as Monad>::unit(value))
        == m
}

/// `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub fn associativity<M, B, C, F, G>(m: M, f: F, g: G) -> bool
where
    M: Monad + Clone,
    M::With<B>: Monad<Value = B, With<C> = M::With<C>>,
    M::With<C>: PartialEq,
    F: Fn(M::Value) -> M::With<B>,
    G: Fn(B) -> M::With<C>,
{
    let left = m.clone().flat_map::<B, _>(&f).flat_map::<C, _>(&g);
    let right = m.flat_map::<C, _>(|value| f(value).flat_map::<C, _>(&g));
    left == right
}
