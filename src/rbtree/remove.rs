use super::node::NodeId;
use super::tree::RbTree;
use super::{Color, Direction};
use crate::error::{TreeError, TreeResult};
use crate::value::Value;
use log::trace;

impl RbTree {
    /// Remove `key` from the tree and return the value it held.
    /// An absent key returns `KeyNotFound` and leaves the tree untouched.
    /// Removal never allocates
    pub fn remove(&mut self, key: u64) -> TreeResult<Value> {
        let node = self.find(key);
        if node.is_nil() {
            return Err(TreeError::KeyNotFound(key));
        }
        let removed = self.store[node].value;

        // With two children, take over the in-order successor's entry and
        // remove the successor instead. It has no left child
        let left = self.store[node].child(Direction::Left);
        let right = self.store[node].child(Direction::Right);
        let target = if !left.is_nil() && !right.is_nil() {
            let successor = self.extreme(right, Direction::Left);
            let (successor_key, successor_value) =
                (self.store[successor].key, self.store[successor].value);
            self.store[node].key = successor_key;
            self.store[node].value = successor_value;
            successor
        } else {
            node
        };

        // Splice out `target`, which has at most one child
        let (child, parent, color) = {
            let target = &self.store[target];
            let left = target.child(Direction::Left);
            let child = if left.is_nil() {
                target.child(Direction::Right)
            } else {
                left
            };
            (child, target.parent, target.color)
        };
        let side = if parent.is_nil() {
            Direction::Left
        } else {
            self.store[parent].side_of(target)
        };
        self.replace_child(target, child);
        self.store.free(target);

        if color == Color::Black {
            self.remove_fixup(child, parent, side);
        }
        Ok(removed)
    }

    /// Restore equal black heights after a black node was spliced out. `node`
    /// (possibly `NIL`) is the `side` child of `parent` and carries one black too few
    fn remove_fixup(&mut self, mut node: NodeId, mut parent: NodeId, mut side: Direction) {
        loop {
            if self.store.is_red(node) {
                // A red node absorbs the missing black
                self.store[node].color = Color::Black;
                break;
            }
            if parent.is_nil() {
                // The deficit reached the root, where every path shares it
                break;
            }

            let mut sibling = self.store[parent].child(!side);
            debug_assert!(!sibling.is_nil(), "black-height deficit with no sibling");

            if self.store.is_red(sibling) {
                trace!("remove: red sibling {}", self.store[sibling].key);
                self.store[sibling].color = Color::Black;
                self.store[parent].color = Color::Red;
                self.rotate(parent, side);
                sibling = self.store[parent].child(!side);
            }

            let near = self.store[sibling].child(side);
            let far = self.store[sibling].child(!side);
            if !self.store.is_red(near) && !self.store.is_red(far) {
                trace!("remove: black nephews under {}", self.store[sibling].key);
                self.store[sibling].color = Color::Red;
                node = parent;
                parent = self.store[node].parent;
                if !parent.is_nil() {
                    side = self.store[parent].side_of(node);
                }
                continue;
            }

            if !self.store.is_red(far) {
                trace!("remove: red near nephew {}", self.store[near].key);
                self.store[near].color = Color::Black;
                self.store[sibling].color = Color::Red;
                self.rotate(sibling, !side);
                sibling = self.store[parent].child(!side);
            }

            trace!("remove: red far nephew under {}", self.store[sibling].key);
            let far = self.store[sibling].child(!side);
            self.store[sibling].color = self.store[parent].color;
            self.store[parent].color = Color::Black;
            self.store[far].color = Color::Black;
            self.rotate(parent, side);
            break;
        }

        let root = self.root;
        if !root.is_nil() {
            self.store[root].color = Color::Black;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn build<I: IntoIterator<Item = u64>>(keys: I) -> RbTree {
        let mut tree = RbTree::new();
        for key in keys {
            tree.insert(key, &format!("v{}", key)).unwrap();
        }
        tree
    }

    #[test]
    fn remove_only_node() {
        let mut tree = build(vec![10]);
        assert_eq!(tree.remove(10).unwrap(), "v10");
        assert!(tree.is_empty());
        assert!(tree.root.is_nil());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.check_invariants(), Ok(0));
    }

    #[test]
    fn remove_red_leaf() {
        let mut tree = build(vec![10, 5]);
        assert_eq!(tree.remove(5).unwrap(), "v5");
        assert!(!tree.contains(5));
        assert!(tree.contains(10));
        assert_eq!(tree.check_invariants(), Ok(1));
    }

    #[test]
    fn remove_with_two_children_uses_successor() {
        let mut tree = build(1..=3);
        let root = tree.root;
        assert_eq!(tree.remove(2).unwrap(), "v2");

        // The root slot now holds the successor's entry
        assert_eq!(tree.root, root);
        assert_eq!(tree.store[root].key, 3);
        assert_eq!(tree.get(3), Some("v3"));
        assert_eq!(tree.get(1), Some("v1"));
        assert_eq!(tree.len(), 2);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn remove_absent_key() {
        let mut tree = build(1..=10);
        let before = tree.render();
        assert_eq!(tree.remove(42), Err(TreeError::KeyNotFound(42)));
        assert_eq!(tree.remove(42), Err(TreeError::KeyNotFound(42)));
        assert_eq!(tree.render(), before);
        assert_eq!(tree.len(), 10);

        let mut empty = RbTree::new();
        assert_eq!(empty.remove(0), Err(TreeError::KeyNotFound(0)));
    }

    #[test]
    fn black_leaf_with_red_sibling() {
        // 1..=6 ascending gives 2 at the root with black leaf 1 and red 4.
        // Removing 1 rotates 4 up, then recolors 3 through the black-nephews case
        let mut tree = build(1..=6);
        tree.check_invariants().unwrap();
        tree.remove(1).unwrap();
        tree.check_invariants().unwrap();
        assert_eq!(tree.len(), 5);
        for key in 2..=6 {
            assert!(tree.contains(key));
        }
    }

    /// Remove every single key from trees of many sizes and shapes
    #[test]
    fn remove_each_key() {
        for n in 1..=40u64 {
            let shapes: Vec<Vec<u64>> = vec![
                (1..=n).collect(),
                (1..=n).rev().collect(),
                (1..=n).map(|k| (k * 7919) % (n + 1)).collect(),
            ];
            for keys in shapes {
                for &victim in &keys {
                    let mut tree = build(keys.iter().cloned());
                    let len = tree.len();
                    tree.remove(victim).unwrap();
                    tree.check_invariants().unwrap_or_else(|err| {
                        panic!("n={} victim={}: {}\n{}", n, victim, err, tree.render())
                    });
                    assert_eq!(tree.len(), len - 1);
                    assert!(!tree.contains(victim));
                    for &other in keys.iter().filter(|&&k| k != victim) {
                        assert_eq!(tree.get(other), Some(format!("v{}", other).as_str()));
                    }
                }
            }
        }
    }

    #[test]
    fn drain_in_every_order() {
        for n in 1..=32u64 {
            let mut ascending = build(1..=n);
            let mut descending = build(1..=n);
            let mut middle_out = build(1..=n);
            for key in 1..=n {
                ascending.remove(key).unwrap();
                ascending.check_invariants().unwrap();
                descending.remove(n + 1 - key).unwrap();
                descending.check_invariants().unwrap();
            }
            while let Some(root_key) = middle_out.search_root_key() {
                middle_out.remove(root_key).unwrap();
                middle_out.check_invariants().unwrap();
            }
            assert!(ascending.is_empty());
            assert!(descending.is_empty());
            assert!(middle_out.is_empty());
        }
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut tree = build(1..=8);
        let slots = tree.store.slots();
        tree.remove(3).unwrap();
        tree.remove(6).unwrap();
        tree.insert(30, "thirty").unwrap();
        tree.insert(60, "sixty").unwrap();
        assert_eq!(tree.store.slots(), slots);
        tree.check_invariants().unwrap();
    }

    impl RbTree {
        fn search_root_key(&self) -> Option<u64> {
            if self.root.is_nil() {
                None
            } else {
                Some(self.store[self.root].key)
            }
        }
    }
}
