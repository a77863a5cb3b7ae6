//! Positional cursor over a token sequence.

use crate::token::Token;

/// A forward-only cursor over a token sequence with 1-based positions.
///
/// The main evaluation loop and alias-body capture advance the *same*
/// cursor instance, so positions reported in diagnostics stay globally
/// consistent even when definition parsing is nested inside dispatch.
#[derive(Debug)]
pub struct Cursor {
    tokens: Vec<Token>,
    /// Number of tokens consumed so far; also the 1-based position of the
    /// current token.
    consumed: usize,
}

impl Cursor {
    /// Creates a cursor over an already-split token sequence.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            consumed: 0,
        }
    }

    /// Consumes and returns the next token, if any.
    pub fn advance(&mut self) -> Option<&Token> {
        if self.consumed < self.tokens.len() {
            self.consumed += 1;
            self.tokens.get(self.consumed - 1)
        } else {
            None
        }
    }

    /// The most recently consumed token.
    #[must_use]
    pub fn current(&self) -> Option<&Token> {
        if self.consumed == 0 {
            None
        } else {
            self.tokens.get(self.consumed - 1)
        }
    }

    /// 1-based position of the most recently consumed token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.consumed
    }

    /// Returns true if any tokens remain.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.consumed < self.tokens.len()
    }

    /// Total number of tokens in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the sequence holds no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for Cursor {
    /// Splits a source string on whitespace.
    fn from(source: &str) -> Self {
        Self::new(source.split_whitespace().map(Token::from).collect())
    }
}

impl From<Vec<Token>> for Cursor {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
