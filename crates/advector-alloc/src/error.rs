// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for advector-alloc.
use advector_buffer::RawBufferError;
use thiserror::Error;

/// Errors reported by the fallible (`try_*`) operations of `GrowableArray`.
///
/// A failed call leaves the array exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GrowableArrayError {
    /// The requested capacity does not fit in `usize`.
    #[error("capacity overflow: requested length exceeds usize::MAX")]
    CapacityOverflow,

    /// The raw buffer could not be acquired.
    #[error("BufferError: {0}")]
    Buffer(#[from] RawBufferError),
}

impl GrowableArrayError {
    /// Reports the error the way the standard collections do.
    #[cold]
    pub fn raise(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::Buffer(error) => error.raise(),
        }
    }
}
