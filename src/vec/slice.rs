// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InplaceVec;

impl<T, const N: usize> InplaceVec<T, N> {
    /// Returns the live prefix `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, slots `[0, len)` are initialized and `len <= N`,
        // so this is a valid shared slice of initialized `T`.
        unsafe { core::slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// Returns the live prefix `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, slots `[0, len)` are initialized and `len <= N`.
        // `&mut self` guarantees exclusive access.
        unsafe { core::slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to slot 0 of the backing storage.
    ///
    /// Never checked: the pointer is valid (and aligned) even when the vector
    /// is empty, but only the first `len` slots hold values. See
    /// [`data`](InplaceVec::data) for the checked variant.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns a mutable raw pointer to slot 0 of the backing storage.
    ///
    /// Writing past `len` through this pointer does **not** update `len`; see
    /// [`set_len`](InplaceVec::set_len).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::InplaceVec;

    #[test]
    fn test_as_ptr_and_as_mut_ptr() {
        let mut v: InplaceVec<u16, 4> = InplaceVec::try_from(&[10, 20][..]).unwrap();
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
        let p_mut = v.as_mut_ptr();
        assert_eq!(p_mut, v.as_mut_slice().as_mut_ptr());
        v.as_mut_slice()[1] = 21;
        assert_eq!(v.as_slice(), &[10, 21]);
    }

    #[test]
    fn test_empty_slice_views() {
        let mut v: InplaceVec<String, 3> = InplaceVec::new();
        assert!(v.as_slice().is_empty());
        assert!(v.as_mut_slice().is_empty());
    }
}
