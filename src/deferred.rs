//! Combinators over fallible futures
//!
//! A deferred computation here is any [`TryFuture`], that is any
//! `Future<Output = Result<T, E>>` produced and driven by the host's executor.
//! [`DeferredExt`] adds `map`, `bind`, `bind_map`, `apply` and `apply_first`
//! to all of them.
//! Nothing in this module spawns, polls on its own, cancels, or retries: each
//! combinator awaits its predecessor and passes failures through untouched.
//!
//! # Examples
//!
//! ## Sequential chain
//!
//! ```
//! use sluice::deferred::{pure, DeferredExt};
//!
//! # tokio_test::block_on(async {
//! let total = pure::<_, String>(20)
//!     .bind(|x| pure(x + 1))
//!     .map(|x| x * 2);
//! assert_eq!(total.await, Ok(42));
//! # });
//! ```
//!
//! ## N-ary composition with `apply`
//!
//! ```
//! use sluice::deferred::{pure, DeferredExt};
//! use sluice::func::curry;
//!
//! async fn foo() -> Result<String, String> { Ok("foo".into()) }
//! async fn bar() -> Result<String, String> { Ok("bar".into()) }
//!
//! # tokio_test::block_on(async {
//! let joined = pure(curry(|a: String, b: String| a + &b))
//!     .apply(foo())
//!     .apply(bar());
//! assert_eq!(joined.await, Ok("foobar".to_string()));
//! # });
//! ```
//!
//! A plain two-argument function can skip `curry` by starting the chain with
//! [`apply_first`](DeferredExt::apply_first).
//!
//! `DeferredExt::map` has the same name as `futures::FutureExt::map`; import
//! only one of the two traits in a given scope.

use std::future::Future;

use futures::future::{self, Ready, TryFuture, TryFutureExt};

/// An already-resolved successful deferred value.
pub fn pure<T, E>(value: T) -> Ready<Result<T, E>> {
    future::ready(Ok(value))
}

/// An already-resolved failed deferred value.
pub fn fail<T, E>(error: E) -> Ready<Result<T, E>> {
    future::ready(Err(error))
}

/// Map, bind and apply over any fallible future.
///
/// Implemented for every [`TryFuture`]; you never implement it yourself.
/// The returned futures are lazy like any other future: nothing runs until
/// they are awaited.
pub trait DeferredExt: TryFuture + Sized {
    /// Transform the eventual value.
    ///
    /// If `self` fails, the error is returned as is and `f` is never called.
    fn map<U, F>(self, f: F) -> impl Future<Output = Result<U, Self::Error>>
    where
        F: FnOnce(Self::Ok) -> U;

    /// Sequential composition.
    ///
    /// `f` runs only after `self` resolves successfully, and the result is
    /// whatever `f`'s future resolves to. A failure at either stage stops the
    /// chain.
    fn bind<Fut, F>(self, f: F) -> impl Future<Output = Result<Fut::Ok, Self::Error>>
    where
        F: FnOnce(Self::Ok) -> Fut,
        Fut: TryFuture<Error = Self::Error>;

    /// Bind, then combine both values.
    ///
    /// Observably the same as
    /// `self.bind(|t| f(t.clone()).map(|b| project(t, b)))`: the same awaits
    /// in the same order, with no extra work.
    fn bind_map<Fut, F, P, R>(self, f: F, project: P) -> impl Future<Output = Result<R, Self::Error>>
    where
        Self::Ok: Clone,
        F: FnOnce(Self::Ok) -> Fut,
        Fut: TryFuture<Error = Self::Error>,
        P: FnOnce(Self::Ok, Fut::Ok) -> R;

    /// Apply a deferred function to a deferred argument.
    ///
    /// Waits for the function first, then for the argument. Chaining `apply`
    /// over a curried function is the way to combine more than two deferred
    /// values; every step waits for the one before it.
    fn apply<A, U>(self, arg: A) -> impl Future<Output = Result<U, Self::Error>>
    where
        Self::Ok: FnOnce(A::Ok) -> U,
        A: TryFuture<Error = Self::Error>;

    /// Apply a deferred two-argument function to its first argument.
    ///
    /// Curries on the fly, so a plain binary function can start an `apply`
    /// chain without going through [`curry`](crate::func::curry) first. The
    /// result is a deferred one-argument function ready for
    /// [`apply`](DeferredExt::apply).
    ///
    /// ```
    /// use sluice::deferred::{pure, DeferredExt};
    ///
    /// # tokio_test::block_on(async {
    /// let joined = pure::<_, ()>(|a: &str, b: &str| format!("{a}{b}"))
    ///     .apply_first(pure("foo"))
    ///     .apply(pure("bar"));
    /// assert_eq!(joined.await, Ok("foobar".to_string()));
    /// # });
    /// ```
    #[allow(clippy::type_complexity)]
    fn apply_first<A, B, R>(
        self,
        arg: A,
    ) -> impl Future<Output = Result<Box<dyn FnOnce(B) -> R + Send>, Self::Error>>
    where
        Self::Ok: FnOnce(A::Ok, B) -> R + Send + 'static,
        A: TryFuture<Error = Self::Error>,
        A::Ok: Send + 'static,
        B: 'static,
        R: 'static;
}

impl<D> DeferredExt for D
where
    D: TryFuture + Sized,
{
    fn map<U, F>(self, f: F) -> impl Future<Output = Result<U, Self::Error>>
    where
        F: FnOnce(Self::Ok) -> U,
    {
        async move {
            let value = TryFutureExt::into_future(self).await?;
            Ok(f(value))
        }
    }

    fn bind<Fut, F>(self, f: F) -> impl Future<Output = Result<Fut::Ok, Self::Error>>
    where
        F: FnOnce(Self::Ok) -> Fut,
        Fut: TryFuture<Error = Self::Error>,
    {
        async move {
            let value = TryFutureExt::into_future(self).await?;
            TryFutureExt::into_future(f(value)).await
        }
    }

    fn bind_map<Fut, F, P, R>(self, f: F, project: P) -> impl Future<Output = Result<R, Self::Error>>
    where
        Self::Ok: Clone,
        F: FnOnce(Self::Ok) -> Fut,
        Fut: TryFuture<Error = Self::Error>,
        P: FnOnce(Self::Ok, Fut::Ok) -> R,
    {
        async move {
            let value = TryFutureExt::into_future(self).await?;
            let bound = TryFutureExt::into_future(f(value.clone())).await?;
            Ok(project(value, bound))
        }
    }

    fn apply<A, U>(self, arg: A) -> impl Future<Output = Result<U, Self::Error>>
    where
        Self::Ok: FnOnce(A::Ok) -> U,
        A: TryFuture<Error = Self::Error>,
    {
        async move {
            let f = TryFutureExt::into_future(self).await?;
            let value = TryFutureExt::into_future(arg).await?;
            Ok(f(value))
        }
    }

    fn apply_first<A, B, R>(
        self,
        arg: A,
    ) -> impl Future<Output = Result<Box<dyn FnOnce(B) -> R + Send>, Self::Error>>
    where
        Self::Ok: FnOnce(A::Ok, B) -> R + Send + 'static,
        A: TryFuture<Error = Self::Error>,
        A::Ok: Send + 'static,
        B: 'static,
        R: 'static,
    {
        async move {
            let f = TryFutureExt::into_future(self).await?;
            let first = TryFutureExt::into_future(arg).await?;
            let partial: Box<dyn FnOnce(B) -> R + Send> = Box::new(move |second| f(first, second));
            Ok(partial)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::{curry, curry3};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_pure_and_fail() {
        assert_eq!(pure::<_, String>(1).await, Ok(1));
        assert_eq!(fail::<i32, _>("boom").await, Err("boom"));
    }

    #[tokio::test]
    async fn test_map_transforms_value() {
        let result = pure::<_, String>(21).map(|x| x * 2).await;
        assert_eq!(result, Ok(42));
    }

    #[tokio::test]
    async fn test_map_on_failure_doesnt_execute() {
        let called = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&called);
        let result = fail::<i32, _>("error")
            .map(move |x| {
                *flag.lock().unwrap() = true;
                x * 2
            })
            .await;
        assert_eq!(result, Err("error"));
        assert!(!*called.lock().unwrap());
    }

    #[tokio::test]
    async fn test_bind_chains() {
        let result = pure::<_, String>(5).bind(|x| pure(x + 1)).await;
        assert_eq!(result, Ok(6));
    }

    #[tokio::test]
    async fn test_bind_failure_at_second_stage() {
        let result = pure::<i32, _>(5).bind(|_| fail::<i32, _>("second")).await;
        assert_eq!(result, Err("second"));
    }

    #[tokio::test]
    async fn test_bind_failure_skips_later_steps() {
        let result = fail::<i32, _>("first")
            .bind(|_| -> Ready<Result<i32, &str>> { panic!("must not run") })
            .await;
        assert_eq!(result, Err("first"));
    }

    #[tokio::test]
    async fn test_bind_map_matches_nested() {
        let sugar = pure::<_, String>(2)
            .bind_map(|x| pure(x * 10), |x, y| x + y)
            .await;
        let nested = pure::<_, String>(2)
            .bind(|x| pure(x * 10).map(move |y| x + y))
            .await;
        assert_eq!(sugar, nested);
        assert_eq!(sugar, Ok(22));
    }

    #[tokio::test]
    async fn test_apply_binary() {
        let result = pure(curry(|a: i32, b: i32| a - b))
            .apply(pure::<_, String>(10))
            .apply(pure(3))
            .await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_apply_ternary() {
        let result = pure(curry3(|a: &str, b: &str, c: &str| format!("{a}{b}{c}")))
            .apply(pure::<_, ()>("x"))
            .apply(pure("y"))
            .apply(pure("z"))
            .await;
        assert_eq!(result, Ok("xyz".to_string()));
    }

    #[tokio::test]
    async fn test_apply_first_curries_binary_function() {
        let result = pure::<_, String>(|a: i32, b: i32| a - b)
            .apply_first(pure(10))
            .apply(pure(3))
            .await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_apply_first_matches_curried_apply() {
        let direct = pure::<_, ()>(|a: String, b: String| a + &b)
            .apply_first(pure("foo".to_string()))
            .apply(pure("bar".to_string()))
            .await;
        let curried = pure::<_, ()>(curry(|a: String, b: String| a + &b))
            .apply(pure("foo".to_string()))
            .apply(pure("bar".to_string()))
            .await;
        assert_eq!(direct, curried);
    }

    #[tokio::test]
    async fn test_apply_first_propagates_failure() {
        let result = pure(|a: i32, b: i32| a + b)
            .apply_first(fail::<i32, _>("first"))
            .apply(pure(1))
            .await;
        assert_eq!(result, Err("first"));
    }

    #[tokio::test]
    async fn test_apply_propagates_argument_failure() {
        let result = pure(|x: i32| x + 1).apply(fail::<i32, _>("arg")).await;
        assert_eq!(result, Err("arg"));
    }

    #[tokio::test]
    async fn test_apply_function_failure_skips_argument() {
        let polled = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&polled);
        let arg = async move {
            *flag.lock().unwrap() = true;
            Ok::<i32, &str>(1)
        };
        let result = fail::<fn(i32) -> i32, _>("func").apply(arg).await;
        assert_eq!(result, Err("func"));
        assert!(!*polled.lock().unwrap());
    }

    #[tokio::test]
    async fn test_apply_awaits_function_before_argument() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let (o1, o2) = (Arc::clone(&order), Arc::clone(&order));
        let func = async move {
            o1.lock().unwrap().push("func");
            Ok::<_, ()>(|x: i32| x)
        };
        let arg = async move {
            o2.lock().unwrap().push("arg");
            Ok::<_, ()>(1)
        };
        assert_eq!(func.apply(arg).await, Ok(1));
        assert_eq!(*order.lock().unwrap(), vec!["func", "arg"]);
    }
}
