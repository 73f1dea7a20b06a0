use super::Op;
use std::iter::{ExactSizeIterator, FusedIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

/// An iterator that inserts the keys `1..=num` in the given order,
/// each with its decimal representation as value
pub struct SequentialWorkload {
    position: u64,
    num: u64,
    order: SequentialOrder,
}

impl SequentialWorkload {
    pub fn new(num: u64, order: SequentialOrder) -> SequentialWorkload {
        SequentialWorkload {
            position: 0,
            num,
            order,
        }
    }
}

impl Iterator for SequentialWorkload {
    type Item = Op;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            return None;
        }
        let key = match self.order {
            SequentialOrder::Ascending => self.position + 1,
            SequentialOrder::Descending => self.num - self.position,
        };
        self.position += 1;
        Some(Op::Insert {
            key,
            value: key.to_string(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = (self.num - self.position) as usize;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialWorkload {}

impl ExactSizeIterator for SequentialWorkload {}
