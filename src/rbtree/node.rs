use super::{Color, Direction};
use crate::error::{TreeError, TreeResult};
use crate::value::Value;
use log::debug;
use std::ops::{Index, IndexMut};

/// Index of a node inside its `NodeStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct NodeId(u32);

impl NodeId {
    /// The absent child. Never handed out by the store and always read as black
    pub(super) const NIL: NodeId = NodeId(u32::MAX);

    pub(super) fn is_nil(self) -> bool {
        self == NodeId::NIL
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) key: u64,
    pub(super) value: Value,
    pub(super) color: Color,
    /// Non-owning back link, `NIL` for the root
    pub(super) parent: NodeId,
    children: [NodeId; 2],
}

impl Node {
    pub(super) fn child(&self, dir: Direction) -> NodeId {
        self.children[dir as usize]
    }

    pub(super) fn set_child(&mut self, dir: Direction, child: NodeId) {
        self.children[dir as usize] = child;
    }

    /// Side on which `child` hangs. `child` must be one of this node's children
    pub(super) fn side_of(&self, child: NodeId) -> Direction {
        debug_assert!(self.children.contains(&child));
        if self.children[Direction::Left as usize] == child {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

/// Arena owning every node of one tree. Child links are indices into it.
/// Freed slots form a list threaded through their right link, so releasing a
/// node never allocates and the next insertion reuses the slot
#[derive(Debug, Clone)]
pub(super) struct NodeStore {
    nodes: Vec<Node>,
    free_head: NodeId,
    live: usize,
}

impl NodeStore {
    pub(super) fn new() -> Self {
        NodeStore {
            nodes: Vec::new(),
            free_head: NodeId::NIL,
            live: 0,
        }
    }

    pub(super) fn with_capacity(capacity: usize) -> TreeResult<Self> {
        let mut store = NodeStore::new();
        store.reserve(capacity)?;
        Ok(store)
    }

    /// Create a detached red node holding `key` and `value`.
    /// On failure the store is unchanged
    pub(super) fn alloc(&mut self, key: u64, value: Value) -> TreeResult<NodeId> {
        let node = Node {
            key,
            value,
            color: Color::Red,
            parent: NodeId::NIL,
            children: [NodeId::NIL; 2],
        };

        if !self.free_head.is_nil() {
            let id = self.free_head;
            self.free_head = self[id].child(Direction::Right);
            self[id] = node;
            self.live += 1;
            return Ok(id);
        }

        if self.nodes.len() == self.nodes.capacity() {
            // Double the arena, starting from a few slots
            self.reserve(self.nodes.len().max(4))?;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.live += 1;
        Ok(id)
    }

    /// Release a node that is no longer linked from the tree and hand back its value
    pub(super) fn free(&mut self, id: NodeId) -> Value {
        let free_head = self.free_head;
        let node = &mut self[id];
        node.parent = NodeId::NIL;
        node.set_child(Direction::Left, NodeId::NIL);
        node.set_child(Direction::Right, free_head);
        let value = node.value;
        self.free_head = id;
        self.live -= 1;
        value
    }

    /// Drop every node at once
    pub(super) fn clear(&mut self) {
        self.nodes.clear();
        self.free_head = NodeId::NIL;
        self.live = 0;
    }

    /// Color of `id`, with `NIL` counted as black
    pub(super) fn color(&self, id: NodeId) -> Color {
        if id.is_nil() {
            Color::Black
        } else {
            self[id].color
        }
    }

    pub(super) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    /// Number of nodes currently allocated
    pub(super) fn live(&self) -> usize {
        self.live
    }

    /// Number of slots ever used, live or free
    #[cfg(test)]
    pub(super) fn slots(&self) -> usize {
        self.nodes.len()
    }

    fn reserve(&mut self, additional: usize) -> TreeResult<()> {
        // The last index is reserved for NIL
        let max_slots = NodeId::NIL.index();
        if self.nodes.len().saturating_add(additional) > max_slots {
            debug!("node store is full at {} slots", self.nodes.len());
            return Err(TreeError::AllocationFailure);
        }
        self.nodes.try_reserve(additional).map_err(|err| {
            debug!("cannot grow node store by {} slots: {}", additional, err);
            TreeError::AllocationFailure
        })?;
        debug!("node store capacity is now {}", self.nodes.capacity());
        Ok(())
    }
}

impl Index<NodeId> for NodeStore {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        debug_assert!(!id.is_nil(), "NIL has no node");
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodeStore {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        debug_assert!(!id.is_nil(), "NIL has no node");
        &mut self.nodes[id.index()]
    }
}
