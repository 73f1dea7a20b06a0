use super::node::{NodeId, NodeStore};
use super::tree_iter::StructureIter;
use super::{Color, Direction};
use crate::error::{TreeError, TreeResult};
use crate::value::Value;
use log::trace;
use std::cmp::Ordering;

/// An ordered map from `u64` keys to short text values, kept balanced by
/// red-black coloring. All nodes live in one arena owned by the tree; dropping
/// the tree releases them all
#[derive(Debug, Clone)]
pub struct RbTree {
    pub(super) store: NodeStore,
    pub(super) root: NodeId,
}

/// Read-only view of a stored node, as returned by `RbTree::search`
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a RbTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn key(&self) -> u64 {
        self.tree.store[self.id].key
    }

    pub fn value(&self) -> &'a str {
        self.tree.store[self.id].value.as_str()
    }

    pub fn color(&self) -> Color {
        self.tree.store[self.id].color
    }

    /// Key of the parent node, `None` for the root
    pub fn parent_key(&self) -> Option<u64> {
        let parent = self.tree.store[self.id].parent;
        if parent.is_nil() {
            None
        } else {
            Some(self.tree.store[parent].key)
        }
    }
}

impl RbTree {
    /// Create an empty tree. Nothing is allocated until the first insertion
    pub fn new() -> Self {
        RbTree {
            store: NodeStore::new(),
            root: NodeId::NIL,
        }
    }

    /// Create an empty tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> TreeResult<Self> {
        Ok(RbTree {
            store: NodeStore::with_capacity(capacity)?,
            root: NodeId::NIL,
        })
    }

    /// Return the number of keys in the tree
    pub fn len(&self) -> usize {
        self.store.live()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// Release every node. The tree stays usable
    pub fn clear(&mut self) {
        self.store.clear();
        self.root = NodeId::NIL;
    }

    /// Find the node holding `key`
    pub fn search(&self, key: u64) -> Option<NodeRef<'_>> {
        let id = self.find(key);
        if id.is_nil() {
            None
        } else {
            Some(NodeRef { tree: self, id })
        }
    }

    pub fn contains(&self, key: u64) -> bool {
        !self.find(key).is_nil()
    }

    /// Borrow the value stored for `key`
    pub fn get(&self, key: u64) -> Option<&str> {
        self.search(key).map(|node| node.value())
    }

    /// Copy the value stored for `key` into `buf`, returning the number of bytes written.
    /// If `buf` is shorter than the value, nothing is written and `BufferTooSmall` is returned
    pub fn get_into(&self, key: u64, buf: &mut [u8]) -> TreeResult<usize> {
        let id = self.find(key);
        if id.is_nil() {
            return Err(TreeError::KeyNotFound(key));
        }
        self.store[id].value.copy_to(buf)
    }

    /// Smallest key in the tree
    pub fn min_key(&self) -> Option<u64> {
        self.key_of(self.extreme(self.root, Direction::Left))
    }

    /// Largest key in the tree
    pub fn max_key(&self) -> Option<u64> {
        self.key_of(self.extreme(self.root, Direction::Right))
    }

    /// Pre-order walk over every node, with its depth and position
    pub fn structure(&self) -> StructureIter<'_> {
        StructureIter::new(self)
    }

    /// Value stored for `key`, as an owned copy
    pub fn get_value(&self, key: u64) -> TreeResult<Value> {
        let id = self.find(key);
        if id.is_nil() {
            Err(TreeError::KeyNotFound(key))
        } else {
            Ok(self.store[id].value)
        }
    }

    pub(super) fn find(&self, key: u64) -> NodeId {
        let mut current = self.root;
        while !current.is_nil() {
            let node = &self.store[current];
            current = match key.cmp(&node.key) {
                Ordering::Less => node.child(Direction::Left),
                Ordering::Greater => node.child(Direction::Right),
                Ordering::Equal => return current,
            };
        }
        NodeId::NIL
    }

    /// Walk from `from` as far as possible in direction `dir`. `NIL` stays `NIL`
    pub(super) fn extreme(&self, from: NodeId, dir: Direction) -> NodeId {
        let mut current = from;
        while !current.is_nil() {
            let next = self.store[current].child(dir);
            if next.is_nil() {
                break;
            }
            current = next;
        }
        current
    }

    fn key_of(&self, id: NodeId) -> Option<u64> {
        if id.is_nil() {
            None
        } else {
            Some(self.store[id].key)
        }
    }

    /// Make `new` take the place of `old` under `old`'s parent (or as root).
    /// `old`'s own links are left as they are
    pub(super) fn replace_child(&mut self, old: NodeId, new: NodeId) {
        let parent = self.store[old].parent;
        if parent.is_nil() {
            self.root = new;
        } else {
            let side = self.store[parent].side_of(old);
            self.store[parent].set_child(side, new);
        }
        if !new.is_nil() {
            self.store[new].parent = parent;
        }
    }

    /// Rotate the subtree rooted at `node` towards `dir`: its child on the opposite
    /// side rises to take its place and `node` becomes that child's `dir` child.
    /// `rotate(x, Left)` is the classic left rotation.
    ///
    /// ```text
    ///       x                    p
    ///      / \    rotate(x,L)   / \
    ///     a   p   --------->   x   c
    ///        / \              / \
    ///       b   c            a   b
    /// ```
    pub(super) fn rotate(&mut self, node: NodeId, dir: Direction) {
        let pivot = self.store[node].child(!dir);
        debug_assert!(!pivot.is_nil(), "rotation needs a pivot");
        trace!(
            "rotate {:?} at {} (pivot {})",
            dir,
            self.store[node].key,
            self.store[pivot].key
        );

        // Inner grandchild changes sides
        let inner = self.store[pivot].child(dir);
        self.store[node].set_child(!dir, inner);
        if !inner.is_nil() {
            self.store[inner].parent = node;
        }

        self.replace_child(node, pivot);
        self.store[pivot].set_child(dir, node);
        self.store[node].parent = pivot;
    }
}

impl Default for RbTree {
    fn default() -> Self {
        RbTree::new()
    }
}
