// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Typed, uninitialized heap storage.
//!
//! [`RawBuffer<T>`] acquires and releases a region sized for `capacity`
//! values of `T` through the global allocator. It is pure storage: it never
//! constructs, reads or drops the values written into its slots. Lifetime
//! management belongs to the container built on top of it.
//!
//! # Guarantees
//!
//! - **Single owner**: `RawBuffer` is not `Clone`. Moving it (or calling
//!   [`RawBuffer::take`]) transfers the region and leaves an empty buffer.
//! - **No hidden allocation**: capacity `0` and zero-sized `T` never call
//!   the allocator. [`RawBuffer::address`] is `None` iff capacity is `0`.
//! - **Inert drop**: dropping the buffer frees the region without running
//!   any element destructor.
//!
//! # Example
//!
//! ```rust
//! use advector_buffer::{RawBuffer, RawBufferError};
//!
//! fn example() -> Result<(), RawBufferError> {
//!     let mut buffer = RawBuffer::<u32>::try_with_capacity(4)?;
//!     assert_eq!(buffer.capacity(), 4);
//!
//!     buffer.slot_mut(0).write(42);
//!     // SAFETY: slot 0 was just written
//!     assert_eq!(unsafe { buffer.slot(0).assume_init_read() }, 42);
//!
//!     let moved = buffer.take();
//!     assert_eq!(buffer.capacity(), 0);
//!     assert!(buffer.address().is_none());
//!     assert_eq!(moved.capacity(), 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod raw_buffer;

pub use error::RawBufferError;
pub use raw_buffer::RawBuffer;
