use super::node::NodeId;
use super::tree::RbTree;
use super::{Color, Direction};
use crate::error::InvariantViolation;

struct Frame {
    id: NodeId,
    /// Closest ancestor the key must be greater than
    lower: Option<u64>,
    /// Closest ancestor the key must be less than
    upper: Option<u64>,
    /// Black nodes from the root down to the parent
    blacks: usize,
}

impl RbTree {
    /// Walk the whole tree and verify the search order, the coloring rules,
    /// the parent links and the node count. Returns the black height of the
    /// tree (black nodes on every root-to-leaf path)
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        let reported = self.len();
        if self.root.is_nil() {
            return if reported == 0 {
                Ok(0)
            } else {
                Err(InvariantViolation::LenMismatch {
                    reported,
                    counted: 0,
                })
            };
        }

        let root = &self.store[self.root];
        if root.color == Color::Red {
            return Err(InvariantViolation::RedRoot(root.key));
        }
        if !root.parent.is_nil() {
            return Err(InvariantViolation::BrokenParentLink(root.key));
        }

        let mut black_height = None;
        let mut counted = 0;
        let mut stack = vec![Frame {
            id: self.root,
            lower: None,
            upper: None,
            blacks: 0,
        }];
        while let Some(frame) = stack.pop() {
            counted += 1;
            if counted > reported {
                // Also stops a walk that would loop on a corrupt link
                return Err(InvariantViolation::LenMismatch { reported, counted });
            }

            let node = &self.store[frame.id];
            if let Some(bound) = frame.lower.filter(|&bound| node.key <= bound) {
                return Err(InvariantViolation::OutOfOrder {
                    key: node.key,
                    ancestor: bound,
                });
            }
            if let Some(bound) = frame.upper.filter(|&bound| node.key >= bound) {
                return Err(InvariantViolation::OutOfOrder {
                    key: node.key,
                    ancestor: bound,
                });
            }

            let blacks = frame.blacks + (node.color == Color::Black) as usize;
            for &dir in &[Direction::Left, Direction::Right] {
                let child = node.child(dir);
                if child.is_nil() {
                    match black_height {
                        None => black_height = Some(blacks),
                        Some(expected) if expected != blacks => {
                            return Err(InvariantViolation::BlackHeightMismatch {
                                key: node.key,
                                expected,
                                found: blacks,
                            })
                        }
                        Some(_) => {}
                    }
                    continue;
                }

                let child_node = &self.store[child];
                if child_node.parent != frame.id {
                    return Err(InvariantViolation::BrokenParentLink(child_node.key));
                }
                if node.color == Color::Red && child_node.color == Color::Red {
                    return Err(InvariantViolation::RedRedEdge {
                        parent: node.key,
                        child: child_node.key,
                    });
                }
                let (lower, upper) = match dir {
                    Direction::Left => (frame.lower, Some(node.key)),
                    Direction::Right => (Some(node.key), frame.upper),
                };
                stack.push(Frame {
                    id: child,
                    lower,
                    upper,
                    blacks,
                });
            }
        }

        if counted != reported {
            return Err(InvariantViolation::LenMismatch { reported, counted });
        }
        Ok(black_height.unwrap_or(0))
    }
}
