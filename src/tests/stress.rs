use super::assert_matches;
use crate::workload::{Op, RandomWorkload, SequentialOrder, SequentialWorkload};
use crate::{RbTree, TreeError};
use std::collections::BTreeMap;

/// Apply `op` to both the tree and the reference map and check they agree on the outcome
fn apply(tree: &mut RbTree, oracle: &mut BTreeMap<u64, String>, op: &Op) {
    match op {
        Op::Insert { key, value } => {
            tree.insert(*key, value).unwrap();
            oracle.insert(*key, value.clone());
        }
        Op::Remove { key } => match oracle.remove(key) {
            Some(expected) => assert_eq!(tree.remove(*key).unwrap(), expected.as_str()),
            None => assert_eq!(tree.remove(*key), Err(TreeError::KeyNotFound(*key))),
        },
    }
}

#[test]
fn random_against_btree_map() {
    for seed in 0..20 {
        let mut tree = RbTree::new();
        let mut oracle = BTreeMap::new();
        for op in RandomWorkload::new(2_000, 300, seed) {
            apply(&mut tree, &mut oracle, &op);
            assert_matches(&tree, &oracle);
        }
    }
}

#[test]
fn random_heavy_removal() {
    let mut tree = RbTree::new();
    let mut oracle = BTreeMap::new();
    let inserts = RandomWorkload::new(5_000, 1_000, 7).with_remove_ratio(0.);
    let removes = RandomWorkload::new(5_000, 1_000, 8).with_remove_ratio(0.9);
    for op in inserts.chain(removes) {
        apply(&mut tree, &mut oracle, &op);
    }
    assert_matches(&tree, &oracle);
}

#[test]
fn sequential_fill_and_drain() {
    for &order in &[SequentialOrder::Ascending, SequentialOrder::Descending] {
        let mut tree = RbTree::new();
        let mut oracle = BTreeMap::new();
        for op in SequentialWorkload::new(1_000, order) {
            apply(&mut tree, &mut oracle, &op);
        }
        assert_matches(&tree, &oracle);

        // A red-black tree of n nodes is at most 2 * log2(n + 1) deep
        let depth = tree.structure().map(|view| view.depth + 1).max().unwrap();
        assert!(depth <= 2 * 10, "depth {} for 1000 nodes", depth);

        // Drain from the middle outwards
        let mut keys: Vec<u64> = oracle.keys().cloned().collect();
        keys.sort_by_key(|&k| (k as i64 - 500).abs());
        for key in keys {
            apply(&mut tree, &mut oracle, &Op::Remove { key });
            if key % 50 == 0 {
                assert_matches(&tree, &oracle);
            }
        }
        assert!(tree.is_empty());
        assert_eq!(tree.check_invariants(), Ok(0));
    }
}
