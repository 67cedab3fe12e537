// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for advector-buffer.
use alloc::alloc::{Layout, handle_alloc_error};

use thiserror::Error;

/// Errors that can occur when acquiring raw storage.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RawBufferError {
    /// The byte size of the requested region does not fit in `isize::MAX`.
    #[error("capacity overflow: {capacity} elements do not fit in a single allocation")]
    CapacityOverflow {
        /// Number of elements that was requested.
        capacity: usize,
    },

    /// The global allocator could not satisfy the request.
    #[error("allocation of {size} bytes (align {align}) failed")]
    AllocFailed {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
}

impl RawBufferError {
    /// Reports the error the way the standard collections do.
    ///
    /// Capacity overflow panics; allocation failure goes through
    /// [`handle_alloc_error`], which aborts by default.
    #[cold]
    pub fn raise(self) -> ! {
        match self {
            Self::CapacityOverflow { .. } => panic!("capacity overflow"),
            Self::AllocFailed { size, align } => match Layout::from_size_align(size, align) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("capacity overflow"),
            },
        }
    }
}
