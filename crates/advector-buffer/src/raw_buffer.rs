// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuffer - Uninitialized storage for `capacity` values of `T`.
//!
//! Owns the memory, never the values. Whoever writes into a slot is
//! responsible for dropping it before the buffer goes away.

use alloc::alloc::{Layout, alloc, dealloc};
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;

use crate::error::RawBufferError;

/// Exclusive owner of an uninitialized heap region sized for `capacity` values of `T`.
///
/// The buffer is inert: it never constructs, reads or drops the values placed
/// in its slots. It is movable (`take()` leaves an empty buffer behind) but
/// deliberately not `Clone`, since a region has exactly one owner.
pub struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// Safety: RawBuffer owns its region exclusively, like Box<[MaybeUninit<T>]>
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty buffer without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for `capacity` values, aborting on allocation failure.
    ///
    /// # Panics
    ///
    /// Panics with `capacity overflow` if the byte size exceeds `isize::MAX`.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(buffer) => buffer,
            Err(error) => error.raise(),
        }
    }

    /// Allocates room for `capacity` values.
    ///
    /// A capacity of zero (or a zero-sized `T`) does not touch the allocator.
    ///
    /// # Errors
    ///
    /// - [`RawBufferError::CapacityOverflow`] if the region would exceed `isize::MAX` bytes.
    /// - [`RawBufferError::AllocFailed`] if the global allocator returns null.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, RawBufferError> {
        let layout = Self::layout_for(capacity)?;

        if capacity == 0 || Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY (PRECONDITIONS ARE MET): layout has non-zero size (capacity > 0 and T is not a ZST)
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(RawBufferError::AllocFailed {
            size: layout.size(),
            align: layout.align(),
        })?;

        log::trace!(
            target: "advector_buffer",
            "allocated {} slots ({} bytes) at {:p}",
            capacity,
            layout.size(),
            ptr
        );

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Computes the layout of a region holding `capacity` values of `T`.
    pub fn layout_for(capacity: usize) -> Result<Layout, RawBufferError> {
        Layout::array::<T>(capacity).map_err(|_| RawBufferError::CapacityOverflow { capacity })
    }

    /// Number of slots in the region.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the buffer has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Start of the region, or `None` when the buffer has no slots.
    #[inline]
    pub fn address(&self) -> Option<NonNull<T>> {
        if self.capacity == 0 {
            None
        } else {
            Some(self.ptr)
        }
    }

    /// Raw pointer to slot 0. Dangling (but aligned) when empty.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable raw pointer to slot 0. Dangling (but aligned) when empty.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of the slot at `offset`.
    ///
    /// `offset == capacity` is allowed and yields the one-past-the-end address.
    ///
    /// # Panics
    ///
    /// Panics if `offset > capacity`.
    #[inline]
    pub fn ptr_at(&mut self, offset: usize) -> *mut T {
        assert!(
            offset <= self.capacity,
            "offset {offset} out of bounds for buffer of capacity {}",
            self.capacity
        );

        // SAFETY (PRECONDITIONS ARE MET): offset <= capacity stays within (or one past) the region
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// The storage cell at `index`. Says nothing about whether it holds a value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    #[inline]
    pub fn slot(&self, index: usize) -> &MaybeUninit<T> {
        assert!(
            index < self.capacity,
            "slot {index} out of bounds for buffer of capacity {}",
            self.capacity
        );

        // SAFETY (PRECONDITIONS ARE MET): index < capacity, MaybeUninit<T> has the layout of T
        unsafe { &*self.ptr.as_ptr().add(index).cast::<MaybeUninit<T>>() }
    }

    /// Mutable access to the storage cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        assert!(
            index < self.capacity,
            "slot {index} out of bounds for buffer of capacity {}",
            self.capacity
        );

        // SAFETY (PRECONDITIONS ARE MET): index < capacity, &mut self guarantees exclusivity
        unsafe { &mut *self.ptr.as_ptr().add(index).cast::<MaybeUninit<T>>() }
    }

    /// Exchanges the regions owned by `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the region out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.capacity == 0 || Self::IS_ZST {
            return;
        }

        // Layout was validated when the region was allocated.
        if let Ok(layout) = Self::layout_for(self.capacity) {
            log::trace!(
                target: "advector_buffer",
                "releasing {} slots ({} bytes) at {:p}",
                self.capacity,
                layout.size(),
                self.ptr
            );

            // SAFETY (PRECONDITIONS ARE MET): ptr was returned by alloc() with this exact layout
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

impl<T> core::fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("address", &self.address())
            .field("capacity", &self.capacity)
            .finish()
    }
}
