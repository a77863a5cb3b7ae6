//! REPL, help, and CLI for Rpncalc.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`HelpCatalog`] - The operator help catalog and `help` verbs
//! - [`LineEditor`] / [`RustylineEditor`] - Line editing abstraction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod editor;
mod help;
mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use help::{HelpCatalog, HelpEntry};
pub use repl::{Repl, strip_comment};
