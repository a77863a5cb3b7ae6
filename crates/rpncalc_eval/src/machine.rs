//! Machine state shared by every operation.

use rpncalc_foundation::{Heap, Stack, StackId};

/// The mutable state operations execute against: the primary stack, the
/// secondary stack, and the heap.
///
/// Owned by the [`Evaluator`](crate::Evaluator) for its entire lifetime;
/// state persists across `eval` calls.
#[derive(Debug, Clone)]
pub struct Machine {
    /// The working stack all arithmetic targets.
    pub stack: Stack,
    /// Scratch stack reachable only via explicit transfer operations.
    pub secondary: Stack,
    /// Addressable scratch memory.
    pub heap: Heap,
}

impl Machine {
    /// Creates a machine with empty stacks and heap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Stack::new(StackId::Primary),
            secondary: Stack::new(StackId::Secondary),
            heap: Heap::new(),
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
