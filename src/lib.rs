//! An ordered map from `u64` keys to short text values, balanced as a red-black tree.
//!
//! Nodes live in an arena owned by the tree and refer to each other by index, so the
//! parent back links needed by rotations never create ownership cycles. Search,
//! insertion and removal are O(log n).
//!
//! ```
//! use rbtree_arena::{Color, RbTree};
//!
//! let mut tree = RbTree::new();
//! tree.insert(1, "One").unwrap();
//! tree.insert(2, "Two").unwrap();
//! tree.insert(3, "Three").unwrap();
//!
//! let root = tree.search(2).unwrap();
//! assert_eq!(root.color(), Color::Black);
//! assert_eq!(tree.get(3), Some("Three"));
//!
//! assert_eq!(tree.remove(2).unwrap(), "Two");
//! assert!(!tree.contains(2));
//! ```

#[macro_use]
mod macros;

#[cfg(test)]
mod tests;

pub mod error;
pub mod ffi;
pub mod rbtree;
pub mod value;

#[cfg(any(test, feature = "workload"))]
pub mod workload;

pub use error::{InvariantViolation, TreeError, TreeResult};
pub use rbtree::{
    Color, InsertOutcome, NodeRef, NodeView, RbTree, RenderOptions, Side, StructureIter,
};
pub use value::{Value, VALUE_CAPACITY};
