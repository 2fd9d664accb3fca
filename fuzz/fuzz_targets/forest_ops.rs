// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

use arbitrary::Arbitrary;
use greedy_graph::DisjointSetForest;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ForestInput {
    // Limit element count to keep runs short
    size: u8,
    compressed: bool,
    unions: Vec<(u8, u8)>,
}

fuzz_target!(|input: ForestInput| {
    let n = usize::from(input.size).clamp(1, 64);
    let mut forest: DisjointSetForest<usize> =
        DisjointSetForest::from_elements_with_compression(0..n, input.compressed).unwrap();
    let mut merges = 0_usize;

    for (a, b) in input.unions.into_iter().take(256) {
        let (a, b) = (usize::from(a), usize::from(b));
        match forest.union(&a, &b) {
            Ok(merged) => {
                assert!(a < n && b < n);
                if merged {
                    merges += 1;
                }
                assert_eq!(forest.find(&a).unwrap(), forest.find(&b).unwrap());
            }
            Err(_) => assert!(a >= n || b >= n),
        }
    }

    // Every successful merge removes exactly one set
    assert_eq!(forest.set_count(), n - merges);

    let total: usize = (0..n)
        .filter(|&x| forest.find(&x).unwrap() == x)
        .map(|leader| forest.set_size(&leader).unwrap())
        .sum();
    assert_eq!(total, n);
});
