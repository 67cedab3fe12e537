// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Thread-local bookkeeping for [`Tracked`](crate::Tracked) values.

use std::cell::RefCell;

/// Counters observed at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    /// Values created through `Tracked::new`.
    pub created: usize,
    /// Values created through `Default`.
    pub defaulted: usize,
    /// Values created through `Clone`.
    pub cloned: usize,
    /// Values dropped.
    pub dropped: usize,
}

impl LedgerSnapshot {
    /// Total number of values ever constructed.
    pub fn constructed(&self) -> usize {
        self.created + self.defaulted + self.cloned
    }

    /// Values constructed and not yet dropped.
    pub fn live(&self) -> isize {
        self.constructed() as isize - self.dropped as isize
    }
}

#[derive(Default)]
struct Ledger {
    counts: LedgerSnapshot,
    clone_budget: Option<usize>,
    default_budget: Option<usize>,
}

thread_local! {
    static LEDGER: RefCell<Ledger> = RefCell::new(Ledger::default());
}

/// Clears all counters and disarms every injected failure.
pub fn reset() {
    LEDGER.with(|ledger| *ledger.borrow_mut() = Ledger::default());
}

/// Current counters.
pub fn snapshot() -> LedgerSnapshot {
    LEDGER.with(|ledger| ledger.borrow().counts)
}

/// Values constructed and not yet dropped.
pub fn live() -> isize {
    snapshot().live()
}

/// Lets `successes` more clones through, then panics on the next one.
pub fn fail_clone_after(successes: usize) {
    LEDGER.with(|ledger| ledger.borrow_mut().clone_budget = Some(successes));
}

/// Lets `successes` more default constructions through, then panics on the next one.
pub fn fail_default_after(successes: usize) {
    LEDGER.with(|ledger| ledger.borrow_mut().default_budget = Some(successes));
}

/// Disarms injected failures, keeping the counters.
pub fn disarm() {
    LEDGER.with(|ledger| {
        let mut ledger = ledger.borrow_mut();
        ledger.clone_budget = None;
        ledger.default_budget = None;
    });
}

pub(crate) fn record_created() {
    LEDGER.with(|ledger| ledger.borrow_mut().counts.created += 1);
}

pub(crate) fn record_dropped() {
    LEDGER.with(|ledger| ledger.borrow_mut().counts.dropped += 1);
}

/// Returns `false` when the armed clone budget is exhausted.
pub(crate) fn try_record_cloned() -> bool {
    LEDGER.with(|ledger| {
        let mut ledger = ledger.borrow_mut();
        if !consume(&mut ledger.clone_budget) {
            return false;
        }
        ledger.counts.cloned += 1;
        true
    })
}

/// Returns `false` when the armed default budget is exhausted.
pub(crate) fn try_record_defaulted() -> bool {
    LEDGER.with(|ledger| {
        let mut ledger = ledger.borrow_mut();
        if !consume(&mut ledger.default_budget) {
            return false;
        }
        ledger.counts.defaulted += 1;
        true
    })
}

fn consume(budget: &mut Option<usize>) -> bool {
    match budget {
        None => true,
        Some(0) => {
            // Fire once; the unwinding path may clone or default again.
            *budget = None;
            false
        }
        Some(remaining) => {
            *remaining -= 1;
            true
        }
    }
}
