//! Error types for the Rpncalc system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error as ThisError;

/// Identifies which of the evaluator's two operand stacks faulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackId {
    /// The working stack all arithmetic targets.
    Primary,
    /// The scratch stack reachable via explicit transfer operations.
    Secondary,
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "stack"),
            Self::Secondary => write!(f, "secondary stack"),
        }
    }
}

/// The main error type for Rpncalc operations.
#[derive(Debug)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about which token triggered the error.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse(message.into()))
    }

    /// Creates a stack underflow error for the given stack.
    #[must_use]
    pub fn underflow(stack: StackId) -> Self {
        Self::new(ErrorKind::StackUnderflow(stack))
    }

    /// Creates an operand-out-of-range error.
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfRange(message.into()))
    }

    /// Creates an input/output error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Annotates this error with the position and raw text of the token
    /// being evaluated, replacing any context set deeper in the call.
    #[must_use]
    pub fn at(mut self, position: usize, token: impl Into<String>) -> Self {
        self.context = Some(ErrorContext {
            position,
            token: token.into(),
        });
        self
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    /// Malformed numeric literal or malformed alias definition.
    #[error("{0}")]
    Parse(String),

    /// Pop attempted on an empty stack.
    #[error("{0} underflow")]
    StackUnderflow(StackId),

    /// Heap address out of bounds, or an operand outside an operation's
    /// domain.
    #[error("{0}")]
    OutOfRange(String),

    /// Failure in the surrounding runtime: terminal or input sources.
    #[error("{0}")]
    Io(String),
}

/// The 1-based position and raw text of the token an error occurred at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// 1-based position in the token sequence.
    pub position: usize,
    /// The raw token text.
    pub token: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ctx) = &self.context {
            write!(f, " at argument {} (\"{}\")", ctx.position, ctx.token)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
