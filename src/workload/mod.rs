//! Reproducible operation sequences, for tests and benchmarks
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;

use crate::error::TreeResult;
use crate::rbtree::RbTree;

/// One step of a workload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Insert { key: u64, value: String },
    Remove { key: u64 },
}

impl Op {
    pub fn key(&self) -> u64 {
        match self {
            Op::Insert { key, .. } | Op::Remove { key } => *key,
        }
    }

    /// Run this step against `tree`
    pub fn apply(&self, tree: &mut RbTree) -> TreeResult<()> {
        match self {
            Op::Insert { key, value } => tree.insert(*key, value).map(|_| ()),
            Op::Remove { key } => tree.remove(*key).map(|_| ()),
        }
    }
}
