// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use advector_test_utils::{Tracked, ledger};

use crate::GrowableArray;

fn values(array: &GrowableArray<Tracked>) -> Vec<i32> {
    array.iter().map(Tracked::value).collect()
}

// =============================================================================
// new() / default()
// =============================================================================

#[test]
fn test_new() {
    let array: GrowableArray<u8> = GrowableArray::new();

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
    assert!(array.is_empty());
}

#[test]
fn test_default() {
    let array: GrowableArray<String> = GrowableArray::default();

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
}

// =============================================================================
// with_capacity()
// =============================================================================

#[test]
fn test_with_capacity() {
    let array: GrowableArray<u8> = GrowableArray::with_capacity(10);

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 10);
}

// =============================================================================
// with_len()
// =============================================================================

#[test]
fn test_with_len_default_constructs() {
    ledger::reset();

    let array = GrowableArray::<Tracked>::with_len(4);

    assert_eq!(array.len(), 4);
    assert_eq!(array.capacity(), 4);
    assert_eq!(values(&array), vec![0, 0, 0, 0]);
    assert_eq!(ledger::snapshot().defaulted, 4);

    drop(array);
    assert_eq!(ledger::live(), 0);
}

#[test]
fn test_with_len_zero() {
    let array = GrowableArray::<u64>::with_len(0);

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
}

// =============================================================================
// push() / pop() / pop_back()
// =============================================================================

#[test]
fn test_push_returns_stored_value() {
    let mut array = GrowableArray::new();

    let stored = array.push(41);
    *stored += 1;

    assert_eq!(array.as_slice(), &[42]);
}

#[test]
fn test_push_doubles_capacity() {
    let mut array = GrowableArray::new();
    let mut capacities = Vec::new();

    for i in 0..9 {
        array.push(i);
        capacities.push(array.capacity());
    }

    assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_pop() {
    let mut array = GrowableArray::from([1, 2]);

    assert_eq!(array.pop(), Some(2));
    assert_eq!(array.pop(), Some(1));
    assert_eq!(array.pop(), None);
    assert_eq!(array.capacity(), 2);
}

#[test]
fn test_pop_back_drops_last() {
    ledger::reset();

    let mut array = GrowableArray::new();
    array.push(Tracked::new(1));
    array.push(Tracked::new(2));

    array.pop_back();

    assert_eq!(values(&array), vec![1]);
    assert_eq!(ledger::snapshot().dropped, 1);
}

#[test]
#[should_panic(expected = "pop_back on an empty GrowableArray")]
fn test_pop_back_on_empty_panics() {
    let mut array = GrowableArray::<u8>::new();
    array.pop_back();
}

#[test]
fn test_emplace_back_with() {
    let mut array = GrowableArray::new();

    array.emplace_back_with(|| String::from("a"));
    let last = array.emplace_back_with(|| String::from("b"));
    last.push('c');

    assert_eq!(array.as_slice(), &["a", "bc"]);
}

// =============================================================================
// reserve() / try_reserve()
// =============================================================================

#[test]
fn test_reserve_grows_to_exact_capacity() {
    let mut array = GrowableArray::from([1, 2, 3]);

    array.reserve(10);

    assert_eq!(array.capacity(), 10);
    assert_eq!(array.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_reserve_within_capacity_is_noop() {
    ledger::reset();

    let mut array = GrowableArray::with_capacity(8);
    array.push(Tracked::new(1));
    array.push(Tracked::new(2));
    let address = array.as_ptr();

    array.reserve(8);
    array.reserve(3);
    array.reserve(0);

    assert_eq!(array.capacity(), 8);
    assert_eq!(array.as_ptr(), address);
    assert_eq!(ledger::snapshot().cloned, 0);
    assert_eq!(ledger::snapshot().dropped, 0);
}

#[test]
fn test_reserve_moves_without_cloning_or_dropping() {
    ledger::reset();

    let mut array = GrowableArray::new();
    for i in 0..5 {
        array.push(Tracked::new(i));
    }
    let before = ledger::snapshot();

    array.reserve(100);

    assert_eq!(ledger::snapshot(), before);
    assert_eq!(values(&array), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_try_reserve_overflow() {
    let mut array = GrowableArray::<u64>::new();

    assert!(array.try_reserve(usize::MAX).is_err());
    assert_eq!(array.capacity(), 0);
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_reserve_overflow_panics() {
    let mut array = GrowableArray::<u64>::new();
    array.reserve(usize::MAX);
}

// =============================================================================
// resize() / resize_with()
// =============================================================================

#[test]
fn test_resize_grow_then_shrink() {
    ledger::reset();

    let mut array = GrowableArray::new();
    array.push(Tracked::new(7));
    array.push(Tracked::new(8));

    array.resize(5);

    assert_eq!(array.len(), 5);
    assert_eq!(values(&array), vec![7, 8, 0, 0, 0]);
    assert_eq!(ledger::snapshot().defaulted, 3);

    array.resize(1);

    assert_eq!(array.len(), 1);
    assert_eq!(values(&array), vec![7]);
    assert_eq!(ledger::snapshot().dropped, 4);
    assert_eq!(array.capacity(), 5);
}

#[test]
fn test_resize_within_capacity() {
    let mut array = GrowableArray::with_capacity(6);
    array.push(1u32);

    array.resize(4);

    assert_eq!(array.as_slice(), &[1, 0, 0, 0]);
    assert_eq!(array.capacity(), 6);
}

#[test]
fn test_resize_beyond_capacity_is_exact() {
    let mut array = GrowableArray::from([1u8, 2]);

    array.resize(7);

    assert_eq!(array.capacity(), 7);
}

#[test]
fn test_resize_with_counter() {
    let mut array = GrowableArray::new();
    let mut next = 0;

    array.resize_with(4, || {
        next += 10;
        next
    });

    assert_eq!(array.as_slice(), &[10, 20, 30, 40]);
}

#[test]
fn test_resize_same_len_is_noop() {
    let mut array = GrowableArray::from([1, 2, 3]);

    array.resize(3);

    assert_eq!(array.as_slice(), &[1, 2, 3]);
    assert_eq!(array.capacity(), 3);
}

// =============================================================================
// truncate() / clear() / shrink_to_fit()
// =============================================================================

#[test]
fn test_truncate_keeps_capacity() {
    let mut array = GrowableArray::from([1, 2, 3, 4]);

    array.truncate(2);
    array.truncate(10);

    assert_eq!(array.as_slice(), &[1, 2]);
    assert_eq!(array.capacity(), 4);
}

#[test]
fn test_clear_drops_everything() {
    ledger::reset();

    let mut array: GrowableArray<Tracked> = (0..3).map(Tracked::new).collect();
    array.clear();

    assert!(array.is_empty());
    assert_eq!(ledger::live(), 0);
}

#[test]
fn test_shrink_to_fit() {
    let mut array = GrowableArray::with_capacity(10);
    array.push(1);
    array.push(2);

    array.shrink_to_fit();

    assert_eq!(array.capacity(), 2);
    assert_eq!(array.as_slice(), &[1, 2]);

    array.clear();
    array.shrink_to_fit();

    assert_eq!(array.capacity(), 0);
}

// =============================================================================
// Index / get()
// =============================================================================

#[test]
fn test_index_and_index_mut() {
    let mut array = GrowableArray::from([1, 2, 3]);

    array[1] = 20;

    assert_eq!(array[0], 1);
    assert_eq!(array[1], 20);
    assert_eq!(array.get(3), None);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_index_out_of_bounds() {
    let array = GrowableArray::from([1, 2, 3]);
    let _value = array[3];
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_index_past_len_within_capacity() {
    let mut array = GrowableArray::with_capacity(4);
    array.push(1);
    let _value = array[1];
}

// =============================================================================
// clone() / clone_from()
// =============================================================================

#[test]
fn test_clone_is_equal_and_independent() {
    let mut original = GrowableArray::from([String::from("a"), String::from("b")]);
    let mut copy = original.clone();

    assert_eq!(copy, original);
    assert_eq!(copy.capacity(), 2);

    copy[0].push('!');
    copy.push(String::from("c"));

    assert_eq!(original.as_slice(), &["a", "b"]);
    assert_eq!(copy.as_slice(), &["a!", "b", "c"]);

    original.clear();
    assert_eq!(copy.len(), 3);
}

#[test]
fn test_clone_counts() {
    ledger::reset();

    let original: GrowableArray<Tracked> = (0..4).map(Tracked::new).collect();
    let copy = original.clone();

    assert_eq!(ledger::snapshot().cloned, 4);
    assert_eq!(values(&copy), vec![0, 1, 2, 3]);

    drop(original);
    drop(copy);
    assert_eq!(ledger::live(), 0);
}

#[test]
fn test_clone_from_replaces_contents() {
    ledger::reset();

    let source: GrowableArray<Tracked> = (0..2).map(Tracked::new).collect();
    let mut target: GrowableArray<Tracked> = (10..15).map(Tracked::new).collect();

    target.clone_from(&source);

    assert_eq!(values(&target), vec![0, 1]);
    assert_eq!(ledger::snapshot().dropped, 5);
}

// =============================================================================
// move / swap_with()
// =============================================================================

#[test]
fn test_take_leaves_source_empty() {
    let mut source = GrowableArray::from([1, 2, 3]);

    let target = core::mem::take(&mut source);

    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
    assert_eq!(target.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_move_keeps_address() {
    let source = GrowableArray::from([1, 2, 3]);
    let address = source.as_ptr();

    let target = source;

    assert_eq!(target.as_ptr(), address);
}

#[test]
fn test_swap_with() {
    let mut a = GrowableArray::from([1, 2, 3]);
    let mut b = GrowableArray::with_capacity(9);
    b.push(4);

    a.swap_with(&mut b);

    assert_eq!(a.as_slice(), &[4]);
    assert_eq!(a.capacity(), 9);
    assert_eq!(b.as_slice(), &[1, 2, 3]);
    assert_eq!(b.capacity(), 3);
}

// =============================================================================
// drop()
// =============================================================================

#[test]
fn test_drop_destroys_each_value_once() {
    ledger::reset();

    {
        let mut array = GrowableArray::new();
        for i in 0..17 {
            array.push(Tracked::new(i));
        }
        array.insert(3, Tracked::new(-1));
        array.erase(0);
    }

    let snapshot = ledger::snapshot();
    assert_eq!(snapshot.created, 18);
    assert_eq!(snapshot.dropped, 18);
}

// =============================================================================
// iteration / conversions
// =============================================================================

#[test]
fn test_iter_and_iter_mut() {
    let mut array = GrowableArray::from([1, 2, 3]);

    for value in &mut array {
        *value *= 2;
    }

    let collected: Vec<i32> = (&array).into_iter().copied().collect();
    assert_eq!(collected, vec![2, 4, 6]);
}

#[test]
fn test_extend() {
    let mut array = GrowableArray::from([1]);

    array.extend(2..=4);

    assert_eq!(array.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(array.capacity(), 4);
}

#[test]
fn test_extend_one_at_a_time_grows_geometrically() {
    let mut array = GrowableArray::new();
    let mut reallocations = 0;

    for i in 0..1000 {
        let capacity = array.capacity();
        array.extend(core::iter::once(i));
        if array.capacity() != capacity {
            reallocations += 1;
        }
    }

    assert_eq!(reallocations, 11);
    assert_eq!(array.capacity(), 1024);
    assert_eq!(array.len(), 1000);
    assert_eq!(array[999], 999);
}

#[test]
fn test_extend_larger_than_doubling_reserves_exactly() {
    let mut array = GrowableArray::from([0u8; 4]);

    array.extend([1u8; 10]);

    assert_eq!(array.capacity(), 14);
    assert_eq!(array.len(), 14);
}

#[test]
fn test_from_slice_clones() {
    let source = [String::from("x"), String::from("y")];

    let array = GrowableArray::from(&source[..]);

    assert_eq!(array.as_slice(), &source);
}

#[test]
fn test_debug() {
    let array = GrowableArray::from([1, 2]);

    assert_eq!(format!("{:?}", array), "[1, 2]");
}

#[test]
fn test_zero_sized_values() {
    let mut array = GrowableArray::new();

    for _ in 0..100 {
        array.push(());
    }
    array.insert(50, ());
    array.erase(0);

    assert_eq!(array.len(), 100);
    assert_eq!(array.pop(), Some(()));
}

// =============================================================================
// scenarios
// =============================================================================

#[test]
fn test_push_insert_erase_pop_scenario() {
    let mut array = GrowableArray::new();
    array.push(1);
    array.push(2);
    array.push(3);

    assert_eq!(array.as_slice(), &[1, 2, 3]);
    assert_eq!(array.len(), 3);
    assert!(array.capacity() >= 3);

    array.insert(1, 9);
    assert_eq!(array.as_slice(), &[1, 9, 2, 3]);
    assert_eq!(array.len(), 4);

    array.erase(0);
    assert_eq!(array.as_slice(), &[9, 2, 3]);
    assert_eq!(array.len(), 3);

    array.pop_back();
    assert_eq!(array.as_slice(), &[9, 2]);
    assert_eq!(array.len(), 2);
}

#[test]
fn test_resize_scenario() {
    ledger::reset();

    let mut array = GrowableArray::new();
    array.push(Tracked::new(5));
    array.push(Tracked::new(6));

    array.resize(5);
    assert_eq!(array.len(), 5);
    assert_eq!(ledger::snapshot().defaulted, 3);

    array.resize(1);
    assert_eq!(array.len(), 1);
    assert_eq!(ledger::snapshot().dropped, 4);
    assert_eq!(array[0].value(), 5);
}
