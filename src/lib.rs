//! Rpncalc - Stack-based (RPN) expression evaluator
//!
//! This crate re-exports all layers of the Rpncalc system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: rpncalc_runtime    — REPL, CLI, help subsystem
//! Layer 1: rpncalc_eval       — Tokens, builtin catalog, aliases, evaluator
//! Layer 0: rpncalc_foundation — Core types (Value, Stack, Heap, Error)
//! ```

pub use rpncalc_eval as eval;
pub use rpncalc_foundation as foundation;
pub use rpncalc_runtime as runtime;
