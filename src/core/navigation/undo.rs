use crate::core::data::region::Region;
use std::collections::VecDeque;

/// Regions recorded before discrete view changes, newest last.
///
/// Depth is capped; pushing onto a full stack forgets the oldest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoStack {
    entries: VecDeque<Region>,
    max_depth: usize,
}

impl UndoStack {
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_depth.min(64)),
            max_depth,
        }
    }

    pub fn push(&mut self, region: Region) {
        if self.max_depth == 0 {
            return;
        }

        if self.entries.len() == self.max_depth {
            self.entries.pop_front();
        }

        self.entries.push_back(region);
    }

    pub fn pop(&mut self) -> Option<Region> {
        self.entries.pop_back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
