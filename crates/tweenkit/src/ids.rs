//! Opaque tween handles and their allocator.

use serde::{Deserialize, Serialize};

/// Handle to a tween or sequence owned by a [`TweenContext`](crate::TweenContext).
///
/// Ids are never reused: a recycled pool slot gets a fresh id, so operations
/// on a handle whose tween was killed are silent no-ops.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u32);

/// Monotonic allocator for TweenId.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> TweenId {
        let id = TweenId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc(), TweenId(0));
        assert_eq!(alloc.alloc(), TweenId(1));
        assert_eq!(alloc.alloc(), TweenId(2));
    }
}
