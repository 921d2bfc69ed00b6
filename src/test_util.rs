// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for unit tests.

// Crate imports
use crate::error::Error;

// Std imports
use std::{
    cell::Cell,
    panic::{self, AssertUnwindSafe},
    string::{String, ToString},
    vec::Vec,
};

/// Asserts that `op` reports `expected` through the active error policy.
///
/// Under the fail-fast policy the operation must panic with the error text;
/// under the recoverable policy it must return `Err(expected)`.
#[track_caller]
pub(crate) fn signals<R>(expected: Error, op: impl FnOnce() -> Result<R, Error>) {
    if crate::FAIL_FAST {
        let payload = match panic::catch_unwind(AssertUnwindSafe(|| {
            let _ = op();
        })) {
            Ok(()) => panic!("expected a fail-fast panic for {expected:?}"),
            Err(payload) => payload,
        };
        let msg = payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_default();
        assert_eq!(msg, expected.to_string());
    } else {
        match op() {
            Ok(_) => panic!("expected Err({expected:?})"),
            Err(e) => assert_eq!(e, expected),
        }
    }
}

std::thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

/// Element type that counts live instances on the current thread.
///
/// The fields are private so every instance goes through a constructor or
/// `clone`.
#[derive(Debug)]
pub(crate) struct Tracked {
    value: u32,
    fuse: Fuse,
}

#[derive(Debug)]
enum Fuse {
    Inert,
    /// Cloning panics once the remaining budget is used up.
    Clone(Cell<u32>),
    /// Dropping panics (after the instance is uncounted).
    Drop,
}

impl Tracked {
    pub(crate) fn new(v: u32) -> Self {
        Self::with_fuse(v, Fuse::Inert)
    }

    /// A value that can be cloned `clones` times; the next clone panics.
    pub(crate) fn panics_after_clones(v: u32, clones: u32) -> Self {
        Self::with_fuse(v, Fuse::Clone(Cell::new(clones)))
    }

    /// A value whose `Drop` panics.
    pub(crate) fn panics_on_drop(v: u32) -> Self {
        Self::with_fuse(v, Fuse::Drop)
    }

    fn with_fuse(value: u32, fuse: Fuse) -> Self {
        LIVE.with(|c| c.set(c.get() + 1));
        Self { value, fuse }
    }

    pub(crate) fn value(&self) -> u32 {
        self.value
    }

    /// Number of `Tracked` values currently alive on this thread.
    pub(crate) fn live() -> isize {
        LIVE.with(Cell::get)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Fuse::Clone(left) = &self.fuse {
            match left.get() {
                0 => panic!("clone of {} failed", self.value),
                n => left.set(n - 1),
            }
        }
        Self::new(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|c| c.set(c.get() - 1));
        if matches!(self.fuse, Fuse::Drop) && !std::thread::panicking() {
            panic!("drop of {} failed", self.value);
        }
    }
}

/// Runs `op` and asserts that it panics.
#[track_caller]
pub(crate) fn panics(op: impl FnOnce()) {
    assert!(
        panic::catch_unwind(AssertUnwindSafe(op)).is_err(),
        "expected a panic"
    );
}

/// Payloads of `items`, in order.
pub(crate) fn values(items: &[Tracked]) -> Vec<u32> {
    items.iter().map(Tracked::value).collect()
}
