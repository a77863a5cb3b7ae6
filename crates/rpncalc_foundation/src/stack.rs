//! Fail-fast operand stack.

use crate::{Error, Result, StackId, Value};

/// A LIFO stack of [`Value`]s tagged with its identity.
///
/// Unlike a plain `Vec`, popping an empty stack is an immediate,
/// deterministic error naming the stack that faulted, never a default
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    id: StackId,
    items: Vec<Value>,
}

impl Stack {
    /// Creates an empty stack with the given identity.
    #[must_use]
    pub const fn new(id: StackId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    /// Returns which stack this is.
    #[must_use]
    pub const fn id(&self) -> StackId {
        self.id
    }

    /// Pushes a value, returning `self` so pushes can be chained.
    pub fn push(&mut self, value: Value) -> &mut Self {
        self.items.push(value);
        self
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Fails with a stack underflow naming this stack if it is empty.
    pub fn pop(&mut self) -> Result<Value> {
        self.items.pop().ok_or_else(|| Error::underflow(self.id))
    }

    /// Returns the number of values on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the values bottom-to-top.
    #[must_use]
    pub fn contents(&self) -> &[Value] {
        &self.items
    }

    /// Iterates the values bottom-to-top.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Swaps the entire contents of two stacks as a single atomic
    /// operation, leaving each stack's identity in place.
    pub fn swap_items(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.items, &mut other.items);
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
