//! User-defined operations.
//!
//! A definition reads `def name body... end` (or `: name body... ;`,
//! Forth-style). Bodies are resolved against the registry at definition
//! time: each word becomes either a pre-parsed literal or a handle to the
//! operation it named when the definition was read. Later definitions can
//! therefore build on earlier ones, but can never change what an existing
//! alias does.

use rpncalc_foundation::{Error, Result, Value};

use crate::cursor::Cursor;
use crate::machine::Machine;
use crate::registry::{Operation, Registry};
use crate::token::Token;

/// Returns true for a token that opens a definition.
pub(crate) fn is_definition_start(word: &str) -> bool {
    word == ":" || word == "def"
}

/// Returns true for a token that closes a definition.
pub(crate) fn is_definition_end(word: &str) -> bool {
    word == ";" || word == "end"
}

/// One pre-resolved step of an alias body.
#[derive(Debug, Clone)]
enum AliasItem {
    /// Push a literal value.
    Literal(Value),
    /// Invoke an operation resolved at definition time.
    Invoke(Operation),
}

/// A user-defined operation compiled from a definition.
#[derive(Debug)]
pub struct AliasDef {
    name: String,
    body: Vec<AliasItem>,
}

impl AliasDef {
    /// The alias's invocation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of pre-resolved steps in the body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: empty definitions are rejected at compile time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Compiles a definition whose opening `def` has just been consumed
    /// from `cursor`, leaving the cursor past the closing `end`.
    ///
    /// # Errors
    ///
    /// Fails with a parse error when the name collides with a registered
    /// operation, when a definition marker appears inside the body, when
    /// the body is empty, when a body word neither resolves nor parses,
    /// or when input runs out before the closing marker.
    pub(crate) fn compile(cursor: &mut Cursor, registry: &Registry) -> Result<Self> {
        let start = cursor.position();
        let Some(name_token) = cursor.advance().cloned() else {
            return Err(unterminated(start));
        };
        let name = name_token.text().trim().to_lowercase();
        if is_definition_start(&name) {
            return Err(nested(cursor.position()));
        }
        if is_definition_end(&name) {
            return Err(Error::parse(format!("empty definition at argument {start}")));
        }
        if registry.contains(&name) {
            return Err(Error::parse(format!(
                "attempted to redefine operation \"{name}\" in definition starting at argument {start}"
            )));
        }

        let mut body = Vec::new();
        loop {
            let Some(token) = cursor.advance().cloned() else {
                return Err(unterminated(start));
            };
            let position = cursor.position();
            match token {
                Token::Literal(value) => body.push(AliasItem::Literal(value)),
                Token::Word(word) => {
                    let lowered = word.trim().to_lowercase();
                    if is_definition_end(&lowered) {
                        break;
                    }
                    if is_definition_start(&lowered) {
                        return Err(nested(position));
                    }
                    if let Some(operation) = registry.lookup(&lowered) {
                        body.push(AliasItem::Invoke(operation));
                    } else {
                        let value = word.parse::<Value>().map_err(|_| {
                            Error::parse(format!("argument {position} (\"{word}\") unparseable"))
                        })?;
                        body.push(AliasItem::Literal(value));
                    }
                }
            }
        }
        if body.is_empty() {
            return Err(Error::parse(format!("empty definition at argument {start}")));
        }
        Ok(Self { name, body })
    }

    /// Runs the body against the machine, step by step.
    pub(crate) fn perform(
        &self,
        machine: &mut Machine,
        out: &mut dyn FnMut(String),
    ) -> Result<()> {
        for item in &self.body {
            match item {
                AliasItem::Literal(value) => {
                    machine.stack.push(value.clone());
                }
                AliasItem::Invoke(operation) => operation.perform(machine, out)?,
            }
        }
        Ok(())
    }
}

fn unterminated(start: usize) -> Error {
    Error::parse(format!(
        "definition starting at argument {start} unterminated"
    ))
}

fn nested(position: usize) -> Error {
    Error::parse(format!("nested definition at argument {position}"))
}
