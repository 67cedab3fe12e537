// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Advector crates.
//!
//! [`Tracked`] is an element type that reports every construction, clone and
//! drop to a thread-local [`ledger`], and can be armed to panic on the n-th
//! `Clone` or `Default` call. Each libtest test runs on its own thread, so
//! tests never observe each other's ledger.
//!
//! ## License
//!
//! GPL-3.0-only

pub mod ledger;
mod panics;
mod tracked;

pub use ledger::LedgerSnapshot;
pub use panics::{PANIC_MESSAGE, expect_panic};
pub use tracked::Tracked;
