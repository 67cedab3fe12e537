// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::RawBufferError;

#[test]
fn test_capacity_overflow_display() {
    let error = RawBufferError::CapacityOverflow { capacity: 7 };

    assert_eq!(
        error.to_string(),
        "capacity overflow: 7 elements do not fit in a single allocation"
    );
}

#[test]
fn test_alloc_failed_display() {
    let error = RawBufferError::AllocFailed {
        size: 64,
        align: 8,
    };

    assert_eq!(error.to_string(), "allocation of 64 bytes (align 8) failed");
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_raise_capacity_overflow_panics() {
    RawBufferError::CapacityOverflow { capacity: 1 }.raise();
}
