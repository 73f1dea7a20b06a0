use thiserror::Error;

/// Convenience alias for `Result<T, TreeError>`.
pub type TreeResult<T> = Result<T, TreeError>;

/// Failures returned by tree operations. None of them leave the tree modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A node slot could not be allocated
    #[error("could not allocate a tree node")]
    AllocationFailure,

    #[error("key {0} not found")]
    KeyNotFound(u64),

    /// The destination buffer cannot hold the whole value. Nothing was written
    #[error("buffer of {capacity} bytes cannot hold a value of {needed} bytes")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("value of {len} bytes exceeds the limit of {max} bytes")]
    ValueTooLong { len: usize, max: usize },
}

/// A broken red-black or bookkeeping property, as found by `RbTree::check_invariants`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root {0} is red")]
    RedRoot(u64),

    #[error("red node {parent} has red child {child}")]
    RedRedEdge { parent: u64, child: u64 },

    #[error("key {key} is out of order below {ancestor}")]
    OutOfOrder { key: u64, ancestor: u64 },

    #[error("path ending below {key} has {found} black nodes, expected {expected}")]
    BlackHeightMismatch {
        key: u64,
        expected: usize,
        found: usize,
    },

    #[error("node {0} does not point back to its parent")]
    BrokenParentLink(u64),

    #[error("tree reports {reported} nodes but {counted} are reachable")]
    LenMismatch { reported: usize, counted: usize },
}
