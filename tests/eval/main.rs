//! Integration tests for the evaluator
//!
//! Tests the full token-in, stack-out behavior: dispatch, operations,
//! alias definitions, output, and fault reporting.

mod aliases;
mod arithmetic;
mod shuffle;
mod transfer;
