//! Contract violations raised by the fallible constructors and reducers
//!
//! [`Optional`](crate::Optional) and [`Validation`](crate::Validation) are
//! total over their declared domain. The only ways to misuse them are to hand
//! an absent marker to something that promises presence, or to build an
//! `Invalid` with no errors. Those calls return a [`ContractViolation`]
//! instead of silently coercing.
//!
//! # Examples
//!
//! ```
//! use sluice::{ContractViolation, Optional};
//!
//! let err = Optional::<i32>::absent().try_reduce(None).unwrap_err();
//! assert_eq!(err, ContractViolation::AbsentDefault);
//! assert_eq!(err.kind(), "absent_default");
//! ```

use thiserror::Error;

/// A broken construction or reduction contract.
///
/// Each variant is a distinct kind so callers (and tests) can tell a bad
/// literal default apart from a fallback that produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ContractViolation {
    /// A present/valid value was constructed from an absent payload.
    #[error("cannot construct a present value from an absent payload")]
    AbsentPayload,

    /// An invalid value was constructed with no errors.
    #[error("cannot construct an invalid value from an empty error sequence")]
    EmptyErrors,

    /// `reduce` was given a literal default that is itself absent.
    #[error("reduce default must not be absent")]
    AbsentDefault,

    /// `reduce_with` was given a fallback whose result is absent.
    #[error("reduce fallback yielded an absent value")]
    FallbackYieldedAbsent,
}

impl ContractViolation {
    /// Stable machine-readable name of the violation.
    pub fn kind(&self) -> &'static str {
        match self {
            ContractViolation::AbsentPayload => "absent_payload",
            ContractViolation::EmptyErrors => "empty_errors",
            ContractViolation::AbsentDefault => "absent_default",
            ContractViolation::FallbackYieldedAbsent => "fallback_yielded_absent",
        }
    }

    /// Record the violation and hand it back, so call sites can write
    /// `Err(ContractViolation::X.raise())`.
    pub(crate) fn raise(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::warn!(kind = self.kind(), "contract violation: {}", self);
        self
    }
}
