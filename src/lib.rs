//! # Sluice
//!
//! Explicit optional values, error-accumulating validation, and composition
//! over fallible futures.
//!
//! - [`Optional<T>`] is a value that is either `Present` or `Absent`, with
//!   `map`/`bind` pipelines that short-circuit on absence.
//! - [`Validation<T, E>`] is either `Valid` or `Invalid` with a non-empty list
//!   of errors. `bind` stops at the first failure; `combine` reports every
//!   failure of independent checks together.
//! - [`DeferredExt`] adds `map`, `bind`, `bind_map` and `apply` to any
//!   `Future<Output = Result<T, E>>`.
//!
//! ## Quick Example
//!
//! ```rust
//! use sluice::{Optional, Validation};
//!
//! fn parse(s: &str) -> Optional<i32> {
//!     Optional::of(s.parse().ok())
//! }
//!
//! fn sqrt(i: i32) -> Optional<f64> {
//!     if i >= 0 { Optional::present(f64::from(i).sqrt()) } else { Optional::absent() }
//! }
//!
//! assert_eq!(parse("16").bind(sqrt), Optional::present(4.0));
//! assert_eq!(parse("-4").bind(sqrt), Optional::absent());
//! assert_eq!(parse("nope").bind(sqrt).reduce(0.0), 0.0);
//!
//! // Independent checks report all of their errors.
//! let email = Validation::<String, &str>::invalid("email must contain @");
//! let age = Validation::<u8, &str>::invalid("must be 18 or older");
//! match email.and(age) {
//!     Validation::Valid(_) => unreachable!(),
//!     Validation::Invalid(errors) => assert_eq!(errors.len(), 2),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: log contract violations as `warn` events
//! - `serde`: `Serialize`/`Deserialize` for the public types
//! - `proptest`: `Arbitrary` implementations for property tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod deferred;
pub mod error;
pub mod func;
pub mod iter;
pub mod laws;
pub mod nonempty;
pub mod nullable;
pub mod optional;
pub mod semigroup;
pub mod testing;
pub mod validation;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use deferred::DeferredExt;
pub use error::ContractViolation;
pub use nonempty::NonEmptyVec;
pub use optional::Optional;
pub use semigroup::Semigroup;
pub use validation::{Validation, ValidationError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::deferred::{fail, pure, DeferredExt};
    pub use crate::error::ContractViolation;
    pub use crate::func::{curry, curry3};
    pub use crate::iter::PresentExt;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::nullable::NullableExt;
    pub use crate::optional::Optional;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::{validate, Validation, ValidationError, Validator};
}
