// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::{fmt, ptr, slice};

use advector_buffer::RawBuffer;

use crate::error::GrowableArrayError;
use crate::guard::PartialInit;
use crate::into_iter::IntoIter;

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::GrowableArrayBehaviour;
#[cfg(any(test, feature = "test_utils"))]
use advector_buffer::RawBufferError;

/// A growable contiguous array built on a [`RawBuffer`].
///
/// Slots `[0, len)` of the buffer hold live values; slots `[len, capacity)`
/// are uninitialized. Every mutating operation either completes or leaves the
/// array exactly as it was before the call.
///
/// # Growth
///
/// Inserting into a full array reallocates to `max(1, 2 * capacity)`:
/// 1. Allocates the new buffer
/// 2. Constructs the new value directly in its final slot of the new buffer
/// 3. Moves the existing values around it
/// 4. Swaps buffers; the old region is released without touching values
///
/// A failure in steps 1 or 2 leaves the old buffer as the array's state.
/// Moves in Rust are bitwise and cannot fail, so step 3 never needs to fall
/// back to cloning.
///
/// # Example
///
/// ```rust
/// use advector_alloc::GrowableArray;
///
/// let mut array = GrowableArray::new();
/// array.push(1);
/// array.push(2);
/// array.push(3);
///
/// array.insert(1, 9);
/// assert_eq!(array.as_slice(), &[1, 9, 2, 3]);
///
/// array.erase(0);
/// array.pop_back();
/// assert_eq!(array.as_slice(), &[9, 2]);
/// ```
pub struct GrowableArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: GrowableArrayBehaviour,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: GrowableArrayBehaviour::None,
        }
    }

    /// Creates an empty array with room for exactly `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::with_capacity(capacity),
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: GrowableArrayBehaviour::None,
        }
    }

    /// Creates an array of `len` default values. Capacity is exactly `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut array = Self::new();
        array.resize(len);
        array
    }

    /// Changes the failure-injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: GrowableArrayBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of live values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the current buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a raw pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns the live values as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): slots [0, len) are initialized; ptr is aligned even when len == 0
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns the live values as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): slots [0, len) are initialized and exclusively borrowed
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    fn allocate(&self, capacity: usize) -> Result<RawBuffer<T>, GrowableArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, GrowableArrayBehaviour::FailAtAlloc) {
            let layout = RawBuffer::<T>::layout_for(capacity)?;
            return Err(RawBufferError::AllocFailed {
                size: layout.size(),
                align: layout.align(),
            }
            .into());
        }

        RawBuffer::try_with_capacity(capacity).map_err(|error| {
            log::debug!(
                target: "advector_alloc",
                "could not acquire {} slots: {}",
                capacity,
                error
            );
            GrowableArrayError::from(error)
        })
    }

    /// Capacity after one implicit growth step: `max(1, 2 * capacity)`.
    fn grown_capacity(&self) -> Result<usize, GrowableArrayError> {
        self.capacity()
            .checked_mul(2)
            .map(|doubled| doubled.max(1))
            .ok_or(GrowableArrayError::CapacityOverflow)
    }

    /// Makes room for `additional` more values, growing at least geometrically.
    fn reserve_for_push(&mut self, additional: usize) -> Result<(), GrowableArrayError> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(GrowableArrayError::CapacityOverflow)?;

        if needed <= self.capacity() {
            return Ok(());
        }

        let capacity = self
            .grown_capacity()
            .map_or(needed, |grown| grown.max(needed));

        self.relocate(capacity)
    }

    /// Takes ownership of `new_buf`, whose slots `[0, len)` already hold every live value.
    ///
    /// The values in the old buffer were moved out bitwise, so releasing it
    /// must not drop anything.
    fn adopt(&mut self, mut new_buf: RawBuffer<T>) {
        log::trace!(
            target: "advector_alloc",
            "reallocated {} -> {} slots ({} live)",
            self.buf.capacity(),
            new_buf.capacity(),
            self.len
        );

        self.buf.swap(&mut new_buf);
    }

    /// Moves every live value to a new buffer of exactly `capacity` slots.
    fn relocate(&mut self, capacity: usize) -> Result<(), GrowableArrayError> {
        let mut new_buf = self.allocate(capacity)?;

        // SAFETY (PRECONDITIONS ARE MET): capacity >= len, buffers are distinct allocations
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }

        self.adopt(new_buf);
        Ok(())
    }

    /// Ensures room for at least `capacity` values in total.
    ///
    /// Does nothing if `capacity <= self.capacity()`; no value is moved and no
    /// pointer is invalidated. Otherwise reallocates to exactly `capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowableArrayError::Buffer`] if the allocation fails. The
    /// array is left untouched.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), GrowableArrayError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.relocate(capacity)
    }

    /// Infallible [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(error) = self.try_reserve(capacity) {
            error.raise();
        }
    }

    /// Reallocates so that capacity equals length.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() == self.len {
            return;
        }

        if let Err(error) = self.relocate(self.len) {
            error.raise();
        }
    }

    /// Resizes to `new_len`, filling new slots with values produced by `f`.
    ///
    /// - Growing past capacity builds the new values in a fresh buffer of
    ///   exactly `new_len` slots before moving the old ones over.
    /// - Growing within capacity builds the new values in place.
    /// - Shrinking drops the excess values; capacity is unchanged.
    ///
    /// If `f` panics, the values it produced are dropped and the array is
    /// exactly as before the call, capacity included.
    ///
    /// # Errors
    ///
    /// Returns [`GrowableArrayError::Buffer`] if the allocation fails.
    pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), GrowableArrayError>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        let extra = new_len - self.len;

        if new_len > self.capacity() {
            let mut new_buf = self.allocate(new_len)?;

            // SAFETY (PRECONDITIONS ARE MET): slots [len, new_len) of new_buf are vacant and in bounds
            let mut tail = unsafe { PartialInit::new(new_buf.ptr_at(self.len)) };
            for _ in 0..extra {
                // SAFETY (PRECONDITIONS ARE MET): at most `extra` values land in [len, new_len)
                unsafe { tail.push(f()) };
            }
            tail.finish();

            // SAFETY (PRECONDITIONS ARE MET): slots [0, len) of new_buf are vacant
            unsafe {
                ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
            }

            self.adopt(new_buf);
        } else {
            // SAFETY (PRECONDITIONS ARE MET): slots [len, new_len) are vacant and within capacity
            let mut tail = unsafe { PartialInit::new(self.buf.ptr_at(self.len)) };
            for _ in 0..extra {
                // SAFETY (PRECONDITIONS ARE MET): at most `extra` values land in [len, new_len)
                unsafe { tail.push(f()) };
            }
            tail.finish();
        }

        self.len = new_len;
        Ok(())
    }

    /// Infallible [`try_resize_with`](Self::try_resize_with).
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        if let Err(error) = self.try_resize_with(new_len, f) {
            error.raise();
        }
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Drops every value past `len`. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let excess = self.len - len;
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = len;

        // SAFETY (PRECONDITIONS ARE MET): slots [len, len + excess) were live and are no longer tracked
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(len),
                excess,
            ));
        }
    }

    /// Drops every value. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Constructs a value at `index` with `make`, shifting later values right.
    ///
    /// `make` runs before any value is moved: when it returns `Err`, the
    /// array is exactly as before. Returns a reference to the stored value.
    ///
    /// # Errors
    ///
    /// - The error returned by `make`.
    /// - [`GrowableArrayError`] (converted into `E`) if growth fails.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn try_emplace_with<E, F>(&mut self, index: usize, make: F) -> Result<&mut T, E>
    where
        E: From<GrowableArrayError>,
        F: FnOnce() -> Result<T, E>,
    {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );

        if len == self.capacity() {
            let mut new_buf = self.allocate(self.grown_capacity()?)?;
            new_buf.slot_mut(index).write(make()?);

            // Each range lands in vacant slots on its own side of `index`.
            // SAFETY (PRECONDITIONS ARE MET): new capacity >= len + 1, buffers are distinct
            unsafe {
                let src = self.buf.as_ptr();
                ptr::copy_nonoverlapping(src, new_buf.as_mut_ptr(), index);
                ptr::copy_nonoverlapping(src.add(index), new_buf.ptr_at(index + 1), len - index);
            }

            self.adopt(new_buf);
        } else {
            let value = make()?;

            // SAFETY (PRECONDITIONS ARE MET): len < capacity, so slot len is vacant
            unsafe {
                let base = self.buf.as_mut_ptr();
                if index < len {
                    ptr::copy(base.add(index), base.add(index + 1), len - index);
                }
                ptr::write(base.add(index), value);
            }
        }

        self.len = len + 1;

        // SAFETY (PRECONDITIONS ARE MET): slot index was just initialized
        Ok(unsafe { &mut *self.buf.as_mut_ptr().add(index) })
    }

    /// Constructs a value at `index` with `make`, shifting later values right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or on capacity overflow.
    pub fn emplace_with<F>(&mut self, index: usize, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_with(index, || Ok::<T, GrowableArrayError>(make())) {
            Ok(value) => value,
            Err(error) => error.raise(),
        }
    }

    /// Inserts `value` at `index`, shifting later values right.
    ///
    /// # Errors
    ///
    /// Returns [`GrowableArrayError`] if growth fails; `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, GrowableArrayError> {
        self.try_emplace_with(index, || Ok(value))
    }

    /// Inserts `value` at `index`, shifting later values right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace_with(index, || value)
    }

    /// Constructs a value at the end with `make`.
    pub fn try_emplace_back_with<E, F>(&mut self, make: F) -> Result<&mut T, E>
    where
        E: From<GrowableArrayError>,
        F: FnOnce() -> Result<T, E>,
    {
        self.try_emplace_with(self.len, make)
    }

    /// Constructs a value at the end with `make`.
    pub fn emplace_back_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.emplace_with(self.len, make)
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowableArrayError`] if growth fails; `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, GrowableArrayError> {
        self.try_emplace_with(self.len, || Ok(value))
    }

    /// Appends `value` and returns a reference to it.
    pub fn push(&mut self, value: T) -> &mut T {
        self.emplace_with(self.len, || value)
    }

    /// Removes the last value and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        // SAFETY (PRECONDITIONS ARE MET): slot len was live and is no longer tracked
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Drops the last value.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "pop_back on an empty GrowableArray");

        drop(self.pop());
    }

    /// Removes the value at `index`, shifting later values left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );

        // SAFETY (PRECONDITIONS ARE MET): index < len; the hole is closed before len shrinks
        unsafe {
            let base = self.buf.as_mut_ptr();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drops the value at `index`, shifting later values left.
    ///
    /// Returns `index`, which now addresses the former successor (or the new end).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Exchanges contents with `other` without moving any value.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        core::mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): slots [0, len) are live; the buffer releases memory afterwards
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    /// Copies into a buffer of exactly `len` slots.
    ///
    /// If a clone panics, the copies made so far are dropped and `self` is untouched.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);

        // SAFETY (PRECONDITIONS ARE MET): the new buffer has len vacant slots
        let mut run = unsafe { PartialInit::new(copy.buf.as_mut_ptr()) };
        for value in self.iter() {
            // SAFETY (PRECONDITIONS ARE MET): one push per source value, never past len
            unsafe { run.push(value.clone()) };
        }
        copy.len = run.finish();

        copy
    }

    /// Copy-and-swap: `self` is replaced only once the copy is complete.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut this = ManuallyDrop::new(self);
        let len = this.len;
        let buf = this.buf.take();

        // SAFETY (PRECONDITIONS ARE MET): buf slots [0, len) are live and now owned by the iterator
        unsafe { IntoIter::new(buf, len) }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(error) = self.reserve_for_push(lower) {
            error.raise();
        }

        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}
