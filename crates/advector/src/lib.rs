// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>A growable contiguous array over manually managed raw storage.</em></p>
//!
//! ---
//!
//! Advector is a from-scratch dynamic array. It splits the problem in two:
//!
//! - [`buffer::RawBuffer`] acquires and releases uninitialized storage and
//!   never touches the values inside it.
//! - [`alloc::GrowableArray`] owns a `RawBuffer` plus a live length, and is
//!   the only place where values are constructed, moved and dropped.
//!
//! # Features
//!
//! - **Strong failure guarantee**: allocation failures, erroring constructors
//!   and panicking constructors leave the array exactly as before the call
//! - **Exact destruction**: every value is dropped exactly once
//! - **Amortized O(1) append**: capacity doubles on implicit growth
//! - **Fallible twins**: every growing operation has a `try_*` variant
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! advector = "0.1.0-rc.4"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use advector::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! array.push(1);
//! array.push(2);
//! array.push(3);
//! assert_eq!(array.as_slice(), &[1, 2, 3]);
//!
//! array.insert(1, 9);
//! assert_eq!(array.as_slice(), &[1, 9, 2, 3]);
//!
//! array.erase(0);
//! assert_eq!(array.as_slice(), &[9, 2, 3]);
//!
//! array.pop_back();
//! assert_eq!(array.as_slice(), &[9, 2]);
//! ```
//!
//! # Fallible Growth
//!
//! ```rust
//! use advector::{GrowableArray, GrowableArrayError};
//!
//! fn example() -> Result<(), GrowableArrayError> {
//!     let mut array = GrowableArray::new();
//!     array.try_reserve(16)?;
//!
//!     for i in 0..16u32 {
//!         array.try_push(i)?;
//!     }
//!
//!     assert_eq!(array.capacity(), 16);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Invalidation
//!
//! Any operation that reallocates (implicit growth, `reserve` past the
//! current capacity, `shrink_to_fit`) invalidates raw pointers obtained
//! from `as_ptr()`. The borrow checker already rules out holding references
//! across those calls.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use advector_alloc as alloc;
pub use advector_buffer as buffer;

pub use advector_alloc::{GrowableArray, GrowableArrayError, IntoIter};
pub use advector_buffer::{RawBuffer, RawBufferError};
