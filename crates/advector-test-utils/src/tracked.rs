// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::ledger;
use crate::panics::PANIC_MESSAGE;

/// An `i32` that reports its lifetime to the thread-local ledger.
#[derive(Debug, PartialEq, Eq)]
pub struct Tracked {
    value: i32,
}

impl Tracked {
    /// Creates a tracked value.
    pub fn new(value: i32) -> Self {
        ledger::record_created();
        Self { value }
    }

    /// The wrapped value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Replaces the wrapped value.
    pub fn set(&mut self, value: i32) {
        self.value = value;
    }
}

impl Default for Tracked {
    fn default() -> Self {
        if !ledger::try_record_defaulted() {
            panic!("{}", PANIC_MESSAGE);
        }
        Self { value: 0 }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if !ledger::try_record_cloned() {
            panic!("{}", PANIC_MESSAGE);
        }
        Self { value: self.value }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        ledger::record_dropped();
    }
}
