// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

use arbitrary::Arbitrary;
use greedy_graph::{GraphError, PairHeap};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum HeapOp {
    Insert(i32, u16),
    Extract,
    Update { index: u8, key: i32 },
    Delete { index: u8 },
}

fuzz_target!(|ops: Vec<HeapOp>| {
    let mut heap: PairHeap<i32, u16> = PairHeap::new();
    let mut expected_len = 0_usize;

    for op in ops.into_iter().take(512) {
        match op {
            HeapOp::Insert(key, payload) => {
                heap.insert(key, payload);
                expected_len += 1;
            }
            HeapOp::Extract => match heap.extract_min() {
                Ok((key, _)) => {
                    expected_len -= 1;
                    // Nothing left may be smaller than what came out
                    assert!(heap.entries().iter().all(|(k, _)| *k >= key));
                }
                Err(e) => {
                    assert_eq!(e, GraphError::EmptyStructure);
                    assert_eq!(expected_len, 0);
                }
            },
            HeapOp::Update { index, key } => {
                let index = usize::from(index);
                let result = heap.update_at(index, key);
                assert_eq!(result.is_ok(), index < expected_len);
            }
            HeapOp::Delete { index } => {
                let index = usize::from(index);
                if heap.delete_at(index).is_ok() {
                    expected_len -= 1;
                } else {
                    assert!(index >= expected_len);
                }
            }
        }
        assert_eq!(heap.len(), expected_len);
        assert!(heap.is_heap_ordered());
    }
});
