// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Rollback guard for a run of values being constructed into raw storage.

use core::mem;
use core::ptr;

/// Tracks the values written so far into `start..start + initialized`.
///
/// If construction panics before [`PartialInit::finish`], dropping the guard
/// destroys exactly the values this run wrote and nothing else.
pub(crate) struct PartialInit<T> {
    start: *mut T,
    initialized: usize,
}

impl<T> PartialInit<T> {
    /// # Safety
    ///
    /// `start` must be valid for writes of as many values as will be pushed,
    /// and those slots must not hold live values.
    pub(crate) unsafe fn new(start: *mut T) -> Self {
        Self {
            start,
            initialized: 0,
        }
    }

    /// # Safety
    ///
    /// The slot after the last written one must be inside the region given to `new`.
    #[inline]
    pub(crate) unsafe fn push(&mut self, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees the slot is in bounds and vacant
        unsafe { ptr::write(self.start.add(self.initialized), value) };
        self.initialized += 1;
    }

    /// Commits the run and returns how many values were written.
    pub(crate) fn finish(self) -> usize {
        let initialized = self.initialized;
        mem::forget(self);
        initialized
    }
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): exactly `initialized` values were written from `start`
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized));
        }
    }
}
