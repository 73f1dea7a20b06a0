use super::node::NodeId;
use super::tree::RbTree;
use super::{Color, Direction};
use std::iter::FusedIterator;

/// Position of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Root,
    Left,
    Right,
}

/// One node as seen by a structural walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView<'a> {
    pub key: u64,
    pub value: &'a str,
    pub color: Color,
    /// Distance from the root, which has depth 0
    pub depth: usize,
    pub side: Side,
    /// Key of the parent node, `None` for the root
    pub parent: Option<u64>,
}

#[derive(Clone, Copy)]
struct Pending {
    id: NodeId,
    depth: usize,
    side: Side,
}

/// Pre-order walk (node, left subtree, right subtree) over a tree.
/// Uses an explicit stack, so its depth never depends on the call stack
pub struct StructureIter<'a> {
    tree: &'a RbTree,
    /// Nodes still to visit, the next one on top
    pending: Vec<Pending>,
    len: usize,
}

impl<'a> StructureIter<'a> {
    pub(super) fn new(tree: &'a RbTree) -> Self {
        let mut pending = Vec::new();
        if !tree.root.is_nil() {
            pending.push(Pending {
                id: tree.root,
                depth: 0,
                side: Side::Root,
            });
        }
        StructureIter {
            tree,
            pending,
            len: tree.len(),
        }
    }
}

impl<'a> Iterator for StructureIter<'a> {
    type Item = NodeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let Pending { id, depth, side } = self.pending.pop()?;
        let tree = self.tree;
        let store = &tree.store;
        let node = &store[id];

        // Right goes first so that left comes out first
        for &(dir, child_side) in &[(Direction::Right, Side::Right), (Direction::Left, Side::Left)] {
            let child = node.child(dir);
            if !child.is_nil() {
                self.pending.push(Pending {
                    id: child,
                    depth: depth + 1,
                    side: child_side,
                });
            }
        }

        let parent = if node.parent.is_nil() {
            None
        } else {
            Some(store[node.parent].key)
        };
        self.len -= 1;
        Some(NodeView {
            key: node.key,
            value: node.value.as_str(),
            color: node.color,
            depth,
            side,
            parent,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> ExactSizeIterator for StructureIter<'a> {}
impl<'a> FusedIterator for StructureIter<'a> {}
