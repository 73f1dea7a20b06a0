use super::node::NodeId;
use super::tree::RbTree;
use super::{Color, Direction, InsertOutcome};
use crate::error::TreeResult;
use crate::value::Value;
use log::trace;
use std::cmp::Ordering;

impl RbTree {
    /// Insert `value` under `key`. If the key is already present its value is
    /// overwritten in place and the shape of the tree does not change.
    ///
    /// Fails with `ValueTooLong` or `AllocationFailure` before touching the tree,
    /// so a failed insertion leaves it exactly as it was
    pub fn insert(&mut self, key: u64, value: &str) -> TreeResult<InsertOutcome> {
        let value = Value::new(value)?;

        // Find the attachment point
        let mut parent = NodeId::NIL;
        let mut side = Direction::Left;
        let mut current = self.root;
        while !current.is_nil() {
            let node = &mut self.store[current];
            side = match key.cmp(&node.key) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => {
                    node.value = value;
                    return Ok(InsertOutcome::Updated);
                }
            };
            parent = current;
            current = node.child(side);
        }

        let node = self.store.alloc(key, value)?;
        self.store[node].parent = parent;
        if parent.is_nil() {
            self.root = node;
        } else {
            self.store[parent].set_child(side, node);
        }

        self.insert_fixup(node);
        Ok(InsertOutcome::Inserted)
    }

    /// Restore the red-black properties after `node` was attached as a red leaf.
    /// The only property that can be broken is "no red node has a red child",
    /// between `node` and its parent
    fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            let parent = self.store[node].parent;
            if parent.is_nil() || self.store.color(parent) == Color::Black {
                break;
            }

            // A red parent is never the root once fixup finishes, but it can be
            // while climbing. Painting it black below is enough
            let grandparent = self.store[parent].parent;
            if grandparent.is_nil() {
                break;
            }

            let parent_side = self.store[grandparent].side_of(parent);
            let uncle = self.store[grandparent].child(!parent_side);

            if self.store.is_red(uncle) {
                trace!("insert {}: red uncle, recolor", self.store[node].key);
                self.store[parent].color = Color::Black;
                self.store[uncle].color = Color::Black;
                self.store[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.store[parent].child(!parent_side) == node {
                // Inner grandchild: turn the zig-zag into a straight line
                trace!("insert {}: inner grandchild", self.store[node].key);
                self.rotate(parent, parent_side);
                parent = node;
            }

            trace!("insert {}: outer grandchild", self.store[node].key);
            self.store[parent].color = Color::Black;
            self.store[grandparent].color = Color::Red;
            self.rotate(grandparent, !parent_side);
            break;
        }

        let root = self.root;
        self.store[root].color = Color::Black;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::TreeError;
    use crate::value::VALUE_CAPACITY;

    fn key_color(tree: &RbTree, id: NodeId) -> (u64, Color) {
        (tree.store[id].key, tree.store[id].color)
    }

    #[test]
    fn first_insert_is_black_root() {
        let mut tree = RbTree::new();
        assert_eq!(tree.insert(1, "One"), Ok(InsertOutcome::Inserted));
        assert_eq!(key_color(&tree, tree.root), (1, Color::Black));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn ascending_three_rotates() {
        let mut tree = RbTree::new();
        for (key, value) in &[(1, "One"), (2, "Two"), (3, "Three")] {
            tree.insert(*key, value).unwrap();
        }

        let root = tree.root;
        assert_eq!(key_color(&tree, root), (2, Color::Black));
        let left = tree.store[root].child(Direction::Left);
        let right = tree.store[root].child(Direction::Right);
        assert_eq!(key_color(&tree, left), (1, Color::Red));
        assert_eq!(key_color(&tree, right), (3, Color::Red));
    }

    #[test]
    fn zig_zag_rotates_twice() {
        // 3, 1, 2: 2 is the inner grandchild of 3
        let mut tree = RbTree::new();
        for key in &[3, 1, 2] {
            tree.insert(*key, "v").unwrap();
        }
        let root = tree.root;
        assert_eq!(key_color(&tree, root), (2, Color::Black));
        assert_eq!(
            key_color(&tree, tree.store[root].child(Direction::Left)),
            (1, Color::Red)
        );
        assert_eq!(
            key_color(&tree, tree.store[root].child(Direction::Right)),
            (3, Color::Red)
        );

        // Mirror: 1, 3, 2
        let mut tree = RbTree::new();
        for key in &[1, 3, 2] {
            tree.insert(*key, "v").unwrap();
        }
        assert_eq!(key_color(&tree, tree.root), (2, Color::Black));
    }

    #[test]
    fn red_uncle_recolors() {
        let mut tree = RbTree::new();
        for key in &[2, 1, 3, 4] {
            tree.insert(*key, "v").unwrap();
        }
        // 1 and 3 turned black, 2 went red and was painted back as root
        let root = tree.root;
        assert_eq!(key_color(&tree, root), (2, Color::Black));
        let one = tree.find(1);
        let three = tree.find(3);
        let four = tree.find(4);
        assert_eq!(tree.store[one].color, Color::Black);
        assert_eq!(tree.store[three].color, Color::Black);
        assert_eq!(tree.store[four].color, Color::Red);
        assert_eq!(tree.store[four].parent, three);
    }

    #[test]
    fn duplicate_key_overwrites() {
        let mut tree = RbTree::new();
        for key in 1..=5 {
            tree.insert(key, "first").unwrap();
        }
        let before = tree.render();

        assert_eq!(tree.insert(3, "second"), Ok(InsertOutcome::Updated));
        assert_eq!(tree.get(3), Some("second"));
        assert_eq!(tree.len(), 5);
        // Only the value changed
        assert_eq!(before.replace("[3] first", "[3] second"), tree.render());
    }

    #[test]
    fn failed_insert_changes_nothing() {
        let mut tree = RbTree::new();
        for key in 1..=6 {
            tree.insert(key, "v").unwrap();
        }
        let before = tree.render();

        let too_long = "x".repeat(VALUE_CAPACITY + 1);
        assert_eq!(
            tree.insert(10, &too_long),
            Err(TreeError::ValueTooLong {
                len: VALUE_CAPACITY + 1,
                max: VALUE_CAPACITY
            })
        );
        assert_eq!(
            tree.insert(3, &too_long),
            Err(TreeError::ValueTooLong {
                len: VALUE_CAPACITY + 1,
                max: VALUE_CAPACITY
            })
        );
        assert_eq!(tree.render(), before);
        assert_eq!(tree.len(), 6);
        assert!(!tree.contains(10));
    }
}
