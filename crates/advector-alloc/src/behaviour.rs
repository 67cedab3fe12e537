// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting failures in `GrowableArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use advector_alloc::{GrowableArray, GrowableArrayBehaviour};
///
/// let mut array = GrowableArray::<u8>::new();
/// array.change_behaviour(GrowableArrayBehaviour::FailAtAlloc);
///
/// // Growth reports an allocation failure; the array is untouched
/// assert!(array.try_push(1).is_err());
/// assert_eq!(array.capacity(), 0);
///
/// array.change_behaviour(GrowableArrayBehaviour::None);
/// assert!(array.try_push(1).is_ok());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GrowableArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every reallocation reports `AllocFailed` without calling the allocator.
    FailAtAlloc,
}
