#![cfg(not(loom))]

use atomic_cells::{AtomicCell, CasOrdering, CellValue, LoadOrdering, StoreOrdering};
use num_traits::{WrappingAdd, WrappingSub};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation<T> {
    Store(T, StoreOrdering),
    Load(LoadOrdering),
    FetchAdd(T),
    FetchSub(T),
    CasStrong(T, T, CasOrdering),
    CasWeak(T, T, CasOrdering),
}

fn load_ordering() -> impl Strategy<Value = LoadOrdering> {
    prop_oneof![
        Just(LoadOrdering::Relaxed),
        Just(LoadOrdering::Acquire),
        Just(LoadOrdering::SeqCst),
    ]
}

fn store_ordering() -> impl Strategy<Value = StoreOrdering> {
    prop_oneof![Just(StoreOrdering::Relaxed), Just(StoreOrdering::Release)]
}

fn cas_ordering() -> impl Strategy<Value = CasOrdering> {
    prop_oneof![
        Just(CasOrdering::Relaxed),
        Just(CasOrdering::Acquire),
        Just(CasOrdering::AcqRel),
        Just(CasOrdering::SeqCst),
    ]
}

fn operation<T>(value: impl Strategy<Value = T> + Clone) -> impl Strategy<Value = Operation<T>>
where
    T: Copy + std::fmt::Debug + 'static,
{
    prop_oneof![
        (value.clone(), store_ordering()).prop_map(|(v, o)| Operation::Store(v, o)),
        load_ordering().prop_map(Operation::Load),
        value.clone().prop_map(Operation::FetchAdd),
        value.clone().prop_map(Operation::FetchSub),
        (value.clone(), value.clone(), cas_ordering())
            .prop_map(|(e, n, o)| Operation::CasStrong(e, n, o)),
        (value.clone(), value, cas_ordering()).prop_map(|(e, n, o)| Operation::CasWeak(e, n, o)),
    ]
}

/// Replays `ops` against a cell and a plain integer and checks they agree.
fn check_against_model<T: CellValue>(initial: T, ops: Vec<Operation<T>>) {
    let cell = AtomicCell::with_value(initial);
    let mut model = initial;

    for op in ops {
        match op {
            Operation::Store(v, order) => {
                cell.store(v, order);
                model = v;
            }
            Operation::Load(order) => {
                assert_eq!(cell.load(order), model);
            }
            Operation::FetchAdd(v) => {
                assert_eq!(cell.fetch_add(v), model);
                model = model.wrapping_add(&v);
            }
            Operation::FetchSub(v) => {
                assert_eq!(cell.fetch_sub(v), model);
                model = model.wrapping_sub(&v);
            }
            Operation::CasStrong(expected, new, order) => {
                let mut inout = expected;
                let swapped = cell.cmpxchg_strong(&mut inout, new, order);
                assert_eq!(swapped, expected == model, "strong CAS outcome");
                if swapped {
                    model = new;
                } else {
                    assert_eq!(inout, model);
                }
            }
            Operation::CasWeak(expected, new, order) => {
                let mut inout = expected;
                let swapped = cell.cmpxchg_weak(&mut inout, new, order);
                if swapped {
                    assert_eq!(expected, model, "weak CAS swapped on mismatch");
                    model = new;
                } else {
                    // Either a real mismatch or a spurious failure; both
                    // report the current value and leave the cell alone.
                    assert_eq!(inout, model);
                }
            }
        }
        assert_eq!(cell.load(LoadOrdering::Relaxed), model);
    }
}

proptest! {
    #[test]
    fn u64_cell_matches_plain_integer(
        initial in any::<u64>(),
        ops in proptest::collection::vec(
            operation(prop_oneof![any::<u64>(), 0..4u64, (u64::MAX - 3)..=u64::MAX]),
            1..100,
        ),
    ) {
        check_against_model(initial, ops);
    }

    #[test]
    fn u8_cell_matches_plain_integer(
        initial in any::<u8>(),
        ops in proptest::collection::vec(operation(any::<u8>()), 1..100),
    ) {
        check_against_model(initial, ops);
    }
}
