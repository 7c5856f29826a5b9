//! Currying helpers for building N-ary `apply` chains
//!
//! [`DeferredExt::apply`](crate::deferred::DeferredExt::apply) takes one
//! argument at a time. Currying a multi-argument function turns it into a
//! chain of single-argument ones so it can be fed by successive `apply` calls.
//!
//! ```
//! use sluice::func::curry;
//!
//! let add = curry(|a: i32, b: i32| a + b);
//! assert_eq!(add(1)(2), 3);
//! ```

/// Curry a two-argument function.
pub fn curry<A, B, R, F>(f: F) -> impl FnOnce(A) -> Box<dyn FnOnce(B) -> R + Send> + Send
where
    F: FnOnce(A, B) -> R + Send + 'static,
    A: Send + 'static,
    B: 'static,
    R: 'static,
{
    move |a: A| -> Box<dyn FnOnce(B) -> R + Send> { Box::new(move |b: B| f(a, b)) }
}

/// Curry a three-argument function.
#[allow(clippy::type_complexity)]
pub fn curry3<A, B, C, R, F>(
    f: F,
) -> impl FnOnce(A) -> Box<dyn FnOnce(B) -> Box<dyn FnOnce(C) -> R + Send> + Send> + Send
where
    F: FnOnce(A, B, C) -> R + Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    C: 'static,
    R: 'static,
{
    move |a: A| -> Box<dyn FnOnce(B) -> Box<dyn FnOnce(C) -> R + Send> + Send> {
        Box::new(move |b: B| -> Box<dyn FnOnce(C) -> R + Send> {
            Box::new(move |c: C| f(a, b, c))
        })
    }
}
