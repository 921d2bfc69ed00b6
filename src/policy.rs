// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The build-time error policy.
//!
//! Every precondition check in the crate goes through [`report`], which is the
//! only place that knows whether the `recoverable-errors` feature is enabled:
//!
//! - feature off (default): the violation panics with the error's `Display`
//!   text, before the container is touched;
//! - feature on: the error is handed back to the caller as `Err`.

// Crate imports
use crate::error::Error;

/// `true` when precondition violations fail fast (panic) instead of returning
/// `Err`. Controlled by the `recoverable-errors` Cargo feature.
pub const FAIL_FAST: bool = !cfg!(feature = "recoverable-errors");

/// Routes a violated precondition through the active policy.
///
/// Returns `err` unchanged under the recoverable policy; never returns under
/// the fail-fast policy.
#[inline]
#[track_caller]
pub(crate) fn report(err: Error) -> Error {
    if FAIL_FAST {
        fail_fast(err);
    }
    err
}

/// Checks `cond`, reporting `err` through the policy when it does not hold.
#[inline]
#[track_caller]
pub(crate) fn ensure(cond: bool, err: Error) -> Result<(), Error> {
    if cond {
        Ok(())
    } else {
        Err(report(err))
    }
}

/// Panics with the error text. Used directly by entry points whose signature
/// cannot carry an error (`Extend`, `FromIterator`).
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail_fast(err: Error) -> ! {
    panic!("{}", err)
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{ensure, FAIL_FAST};
    use crate::{test_util::signals, Error};

    #[test]
    fn test_ensure_passes_when_condition_holds() {
        assert_eq!(ensure(true, Error::Full), Ok(()));
    }

    #[test]
    fn test_ensure_routes_through_policy() {
        signals(Error::Empty, || ensure(false, Error::Empty));
    }

    #[test]
    fn test_fail_fast_matches_feature() {
        assert_eq!(FAIL_FAST, !cfg!(feature = "recoverable-errors"));
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_fail_fast_panics_with_error_text() {
        super::fail_fast(Error::Full);
    }
}
