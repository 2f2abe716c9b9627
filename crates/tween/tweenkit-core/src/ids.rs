//! Run identifiers and their allocator.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RunId(pub u32);

/// Monotonic allocator for RunId. IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_run: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_run(&mut self) -> RunId {
        let id = RunId(self.next_run);
        self.next_run = self.next_run.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_monotonic_ids() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.alloc_run(), RunId(0));
        assert_eq!(ids.alloc_run(), RunId(1));
        assert_eq!(ids.alloc_run(), RunId(2));
    }
}
