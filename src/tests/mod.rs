mod stress;

use crate::RbTree;
use std::collections::BTreeMap;

/// Assert that `tree` is a valid red-black tree holding exactly the entries of `oracle`
fn assert_matches(tree: &RbTree, oracle: &BTreeMap<u64, String>) {
    if let Err(err) = tree.check_invariants() {
        panic!("{}\n{}", err, tree.render());
    }
    assert_eq!(tree.len(), oracle.len());

    let mut in_tree: Vec<(u64, &str)> = tree.structure().map(|view| (view.key, view.value)).collect();
    in_tree.sort();
    let expected: Vec<(u64, &str)> = oracle.iter().map(|(k, v)| (*k, v.as_str())).collect();
    assert_eq!(in_tree, expected);

    assert_eq!(tree.min_key(), oracle.keys().next().cloned());
    assert_eq!(tree.max_key(), oracle.keys().next_back().cloned());
}
