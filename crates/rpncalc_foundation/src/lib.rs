//! Core types for the Rpncalc evaluator.
//!
//! This crate provides:
//! - [`Value`] - The tagged numeric type (arbitrary-width integer or real)
//! - [`Stack`] - A fail-fast operand stack
//! - [`Heap`] - Bounded sparse scratch memory
//! - [`Error`] - Error types with positional context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod heap;
mod stack;
mod value;

pub use error::{Error, ErrorContext, ErrorKind, StackId};
pub use heap::{HEAP_SIZE, Heap};
pub use stack::Stack;
pub use value::Value;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
