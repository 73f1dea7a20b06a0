mod insert;
mod node;
mod remove;
mod render;
mod tree;
mod tree_iter;
mod validate;

pub use render::RenderOptions;
pub use tree::{NodeRef, RbTree};
pub use tree_iter::{NodeView, Side, StructureIter};

use std::fmt;
use std::ops::Not;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "R"),
            Color::Black => write!(f, "B"),
        }
    }
}

/// Result of a successful insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node was created
    Inserted,
    /// The key was already present and its value was overwritten in place
    Updated,
}

/// Which child link to follow. Every fixup case is written once, for a side `dir`,
/// and its mirror image is obtained by running it with `!dir`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left = 0,
    Right = 1,
}

impl Not for Direction {
    type Output = Direction;

    fn not(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
