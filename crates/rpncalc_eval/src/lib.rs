//! Token cursor, builtin catalog, alias compiler, and evaluator for Rpncalc.
//!
//! This crate provides:
//! - [`Token`] / [`Cursor`] - Positional iteration over a token sequence
//! - [`Machine`] - The stacks and heap builtins execute against
//! - [`Registry`] / [`Operation`] - Name-to-operation dispatch
//! - [`Evaluator`] - The main evaluation loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod alias;
mod builtin;
mod cursor;
mod evaluator;
mod machine;
mod registry;
mod token;

pub use alias::AliasDef;
pub use builtin::Builtin;
pub use cursor::Cursor;
pub use evaluator::Evaluator;
pub use machine::Machine;
pub use registry::{Operation, Registry};
pub use token::Token;

use rpncalc_foundation::{Result, Value};

/// Evaluates a source string on a fresh evaluator, discarding output.
///
/// Convenience for tests and embedding; returns the final primary stack.
///
/// # Errors
///
/// Returns any fault raised during evaluation.
pub fn eval(source: &str) -> Result<Vec<Value>> {
    Evaluator::new().eval(source, &mut |_| {})
}

/// Evaluates a source string on a fresh evaluator, collecting output.
///
/// Returns the final primary stack and everything the output operations
/// emitted, in emission order.
///
/// # Errors
///
/// Returns any fault raised during evaluation.
pub fn eval_with_output(source: &str) -> Result<(Vec<Value>, Vec<String>)> {
    let mut output = Vec::new();
    let stack = Evaluator::new().eval(source, &mut |s| output.push(s))?;
    Ok((stack, output))
}
