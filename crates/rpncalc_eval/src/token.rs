//! Input tokens for the evaluator.

use std::fmt;

use rpncalc_foundation::Value;

/// One element of an input sequence.
///
/// Callers may feed raw words (to be resolved against the registry or
/// parsed as literals) or values that are already parsed, which pass
/// straight through to the stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An unresolved word from the input.
    Word(String),
    /// A pre-parsed numeric value.
    Literal(Value),
}

impl Token {
    /// The raw text of this token, as it should appear in diagnostics.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Word(w) => w.clone(),
            Self::Literal(v) => v.to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => write!(f, "{w}"),
            Self::Literal(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::Word(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::Word(s)
    }
}

impl From<Value> for Token {
    fn from(v: Value) -> Self {
        Self::Literal(v)
    }
}
