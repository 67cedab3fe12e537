// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array over a manually managed raw buffer.
//!
//! `GrowableArray<T>` owns a [`RawBuffer<T>`](advector_buffer::RawBuffer) and
//! a live length. The buffer only provides storage; this crate is the only
//! place where values are constructed, moved and dropped.
//!
//! # Core Guarantees
//!
//! - **Strong failure guarantee**: a mutating call that fails (allocation
//!   failure, a panicking or erroring constructor) leaves the array exactly
//!   as it was before the call.
//! - **Exact destruction**: every live value is dropped exactly once, also
//!   when a constructor panics halfway through a bulk operation.
//! - **Amortized growth**: implicit growth doubles capacity (`max(1, 2 * capacity)`).
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use advector_alloc::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! for i in 1..=3 {
//!     array.push(i);
//! }
//!
//! assert_eq!(array.len(), 3);
//! assert!(array.capacity() >= 3);
//! assert_eq!(array[2], 3);
//! ```
//!
//! # Example: Fallible Construction
//!
//! ```rust
//! use advector_alloc::{GrowableArray, GrowableArrayError};
//!
//! #[derive(Debug)]
//! enum ParseError {
//!     Invalid,
//!     Array(GrowableArrayError),
//! }
//!
//! impl From<GrowableArrayError> for ParseError {
//!     fn from(error: GrowableArrayError) -> Self {
//!         Self::Array(error)
//!     }
//! }
//!
//! let mut array = GrowableArray::<u8>::new();
//! array.push(1);
//!
//! let result = array.try_emplace_with(0, || "x".parse::<u8>().map_err(|_| ParseError::Invalid));
//! assert!(matches!(result, Err(ParseError::Invalid)));
//!
//! // The array is untouched
//! assert_eq!(array.as_slice(), &[1]);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! advector-alloc = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`GrowableArrayBehaviour`] to exercise error paths.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;
mod error;
mod growable_array;
mod guard;
mod into_iter;

#[cfg(test)]
mod tests;

pub use error::GrowableArrayError;
pub use growable_array::GrowableArray;
pub use into_iter::IntoIter;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::GrowableArrayBehaviour;
