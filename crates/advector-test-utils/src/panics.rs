// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::panic::{AssertUnwindSafe, catch_unwind};

/// Message carried by panics injected through the ledger.
pub const PANIC_MESSAGE: &str = "injected Tracked failure";

/// Runs `f`, asserting that it panics with the injected failure.
pub fn expect_panic<R>(f: impl FnOnce() -> R) {
    let result = catch_unwind(AssertUnwindSafe(f));

    let payload = match result {
        Ok(_) => panic!("expected an injected panic, but the operation completed"),
        Err(payload) => payload,
    };

    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str));

    assert_eq!(message, Some(PANIC_MESSAGE));
}
