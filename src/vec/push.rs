// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::ensure, vec::InplaceVec};

impl<T, const N: usize> InplaceVec<T, N> {
    /// Appends `value` and returns a reference to it.
    ///
    /// Reports [`Error::Full`] through the error policy when the vector is full;
    /// `value` is dropped in that case.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, value: T) -> Result<&mut T, Error> {
        ensure(self.len < N, Error::Full)?;
        // SAFETY: checked above.
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Constructs an element from `f` directly at the end of the vector.
    ///
    /// `f` is only called once the capacity check has passed.
    #[inline]
    #[track_caller]
    pub fn push_with<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T, Error> {
        ensure(self.len < N, Error::Full)?;
        // SAFETY: checked above.
        Ok(unsafe { self.push_unchecked(f()) })
    }

    /// Appends `value` if there is room, otherwise hands it back as `Err(value)`.
    ///
    /// Never consults the error policy.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<&mut T, T> {
        if self.len == N {
            return Err(value);
        }
        // SAFETY: `len < N`.
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Constructs an element from `f` at the end if there is room.
    ///
    /// Returns `None` without calling `f` when the vector is full.
    #[inline]
    pub fn try_push_with<F: FnOnce() -> T>(&mut self, f: F) -> Option<&mut T> {
        if self.len == N {
            return None;
        }
        // SAFETY: `len < N`.
        Some(unsafe { self.push_unchecked(f()) })
    }

    /// Appends `value` without checking capacity.
    ///
    /// # Safety
    ///
    /// The vector must not be full (`len < N`).
    #[inline]
    pub unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < N, "push_unchecked on a full InplaceVec");
        let slot = self.storage.slot_mut(self.len);
        // SAFETY: the caller guarantees `len < N`, so `slot` is an in-bounds,
        // uninitialized slot. `len` is bumped only after the write succeeds.
        unsafe {
            slot.write(value);
            self.len += 1;
            &mut *slot
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::test_util::{signals, values, Tracked};
    use crate::{Error, InplaceVec};

    #[test]
    fn test_push_returns_reference_to_new_element() {
        let mut v: InplaceVec<i32, 2> = InplaceVec::new();
        *v.push(1).unwrap() += 10;
        assert_eq!(v, [11]);
    }

    #[test]
    fn test_push_on_full_is_reported_and_drops_value() {
        let mut v: InplaceVec<Tracked, 1> = InplaceVec::new();
        v.push(Tracked::new(1)).unwrap();
        let base = Tracked::live();
        signals(Error::Full, || v.push(Tracked::new(2)).map(|_| ()));
        assert_eq!(Tracked::live(), base);
        assert_eq!(values(&v), [1]);
    }

    #[test]
    fn test_push_with_skips_closure_when_full() {
        let mut v: InplaceVec<i32, 1> = InplaceVec::new();
        v.push_with(|| 1).unwrap();
        let mut called = false;
        signals(Error::Full, || {
            v.push_with(|| {
                called = true;
                2
            })
            .map(|_| ())
        });
        assert!(!called);
    }

    #[test]
    fn test_try_push_hands_value_back() {
        let mut v: InplaceVec<String, 1> = InplaceVec::new();
        assert!(v.try_push(String::from("a")).is_ok());
        assert_eq!(v.try_push(String::from("b")), Err(String::from("b")));
        assert_eq!(v, ["a"]);
    }

    #[test]
    fn test_try_push_with_returns_none_when_full() {
        let mut v: InplaceVec<u8, 1> = InplaceVec::new();
        assert_eq!(v.try_push_with(|| 1).copied(), Some(1));
        assert!(v.try_push_with(|| unreachable!()).is_none());
    }

    #[test]
    fn test_push_unchecked_within_capacity() {
        let mut v: InplaceVec<u8, 3> = InplaceVec::new();
        // SAFETY: two pushes into capacity 3.
        unsafe {
            v.push_unchecked(1);
            v.push_unchecked(2);
        }
        assert_eq!(v, [1, 2]);
    }
}
