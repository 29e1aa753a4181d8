#![cfg(not(loom))]

use atomic_cells::{AtomicU64Cell, AtomicU8Cell};

fn assert_send<T: Send>() {}
fn assert_sync<T: Sync>() {}

#[test]
fn cells_are_send_and_sync() {
    assert_send::<AtomicU64Cell>();
    assert_sync::<AtomicU64Cell>();
    assert_send::<AtomicU8Cell>();
    assert_sync::<AtomicU8Cell>();
}

#[test]
fn cells_have_integer_layout() {
    use core::mem;

    assert_eq!(mem::size_of::<AtomicU64Cell>(), 8);
    assert_eq!(mem::align_of::<AtomicU64Cell>(), 8);
    assert_eq!(mem::size_of::<AtomicU8Cell>(), 1);
    assert_eq!(mem::align_of::<AtomicU8Cell>(), 1);

    // Embedded by value, no hidden metadata.
    #[repr(C)]
    struct Node {
        state: AtomicU8Cell,
        seq: AtomicU64Cell,
    }
    assert_eq!(mem::size_of::<Node>(), 16);
    let node = Node {
        state: AtomicU8Cell::new(1),
        seq: AtomicU64Cell::new(2),
    };
    assert_eq!(node.state.load_relaxed(), 1);
    assert_eq!(node.seq.load_relaxed(), 2);
}
