//! Bounded sparse scratch memory.

use std::collections::HashMap;

use num_traits::ToPrimitive;

use crate::{Error, Result, Value};

/// Number of addressable heap slots.
pub const HEAP_SIZE: u32 = 65536;

/// Sparse mapping from heap address to [`Value`].
///
/// Unset addresses read as integer zero; reads never fail for a valid
/// address. Writes overwrite unconditionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Heap {
    slots: HashMap<u32, Value>,
}

impl Heap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the value at the address held by `addr`.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-range error if `addr` is not an integer in
    /// `[0, HEAP_SIZE)`.
    pub fn load(&self, addr: &Value) -> Result<Value> {
        let a = Self::check_address(addr)?;
        Ok(self.read_slot(a))
    }

    /// Writes `value` at the address held by `addr`.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-range error if `addr` is not an integer in
    /// `[0, HEAP_SIZE)`.
    pub fn store(&mut self, addr: &Value, value: Value) -> Result<()> {
        let a = Self::check_address(addr)?;
        self.slots.insert(a, value);
        Ok(())
    }

    /// Reads a fixed slot directly, bypassing address validation.
    #[must_use]
    pub fn read_slot(&self, addr: u32) -> Value {
        self.slots
            .get(&addr)
            .cloned()
            .unwrap_or_else(|| Value::from(0))
    }

    /// Writes a fixed slot directly, bypassing address validation.
    pub fn write_slot(&mut self, addr: u32, value: Value) {
        self.slots.insert(addr, value);
    }

    /// Returns the number of addresses that have been written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no address has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Validates a heap address operand: it must be an integer in range.
    fn check_address(addr: &Value) -> Result<u32> {
        let Value::Int(n) = addr else {
            return Err(bad_address());
        };
        match n.to_u32() {
            Some(a) if a < HEAP_SIZE => Ok(a),
            _ => Err(bad_address()),
        }
    }
}

fn bad_address() -> Error {
    Error::out_of_range(format!(
        "bad heap address (must be an integer, 0 <= x < {HEAP_SIZE})"
    ))
}
