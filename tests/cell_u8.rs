#![cfg(not(loom))]

use atomic_cells::{AtomicU8Cell, CasOrdering};

#[test]
fn stores_are_visible_to_later_loads() {
    let flag = AtomicU8Cell::new(0);
    for value in [1, 255, 0, 128] {
        flag.store_relaxed(value);
        assert_eq!(flag.load_relaxed(), value);
        assert_eq!(flag.load_acquire(), value);
        flag.store_release(value ^ 0xff);
        assert_eq!(flag.load_acquire(), value ^ 0xff);
    }
}

#[test]
fn strong_cas_never_fails_when_expected_matches() {
    let flag = AtomicU8Cell::new(0);
    for _ in 0..10_000 {
        let current = flag.load_relaxed();
        let mut expected = current;
        assert!(flag.cmpxchg_strong_acquire(&mut expected, current.wrapping_add(1)));
        assert_eq!(expected, current);
    }
    assert_eq!(flag.load_relaxed(), (10_000 % 256) as u8);
}

#[test]
fn strong_cas_mismatch_reports_current_value() {
    let flag = AtomicU8Cell::new(2);
    let mut expected = 1;
    assert!(!flag.cmpxchg_strong_acquire(&mut expected, 3));
    assert_eq!(expected, 2);
    assert_eq!(flag.load_relaxed(), 2);

    assert!(flag.cmpxchg_strong_acquire(&mut expected, 3));
    assert_eq!(flag.load_acquire(), 3);
}

#[test]
fn byte_cell_wraps_like_u8() {
    let flag = AtomicU8Cell::new(u8::MAX);
    assert_eq!(flag.fetch_add(1), u8::MAX);
    assert_eq!(flag.load_relaxed(), 0);
    assert_eq!(flag.fetch_sub(1), 0);
    assert_eq!(flag.load_relaxed(), u8::MAX);
}

#[test]
fn generic_strong_cas_agrees_with_named_variant() {
    let flag = AtomicU8Cell::new(4);
    let mut expected = 4;
    assert!(flag.cmpxchg_strong(&mut expected, 5, CasOrdering::Acquire));
    let mut stale = 4;
    assert!(!flag.cmpxchg_strong(&mut stale, 6, CasOrdering::Acquire));
    assert_eq!(stale, 5);
}
