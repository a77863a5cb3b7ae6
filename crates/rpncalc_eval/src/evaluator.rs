//! The main evaluation loop.

use rpncalc_foundation::{Error, ErrorKind, Heap, Result, Stack, Value};

use crate::alias::{self, AliasDef};
use crate::cursor::Cursor;
use crate::machine::Machine;
use crate::registry::Registry;
use crate::token::Token;

/// Evaluates token sequences against persistent machine state.
///
/// Stacks, heap, and alias definitions all survive across `eval` calls, so
/// one evaluator can back an entire interactive session. Evaluation is
/// fail-fast: the first fault aborts the sequence, and every state change
/// made before the fault remains visible.
#[derive(Debug, Default)]
pub struct Evaluator {
    machine: Machine,
    registry: Registry,
}

impl Evaluator {
    /// Creates an evaluator with empty state and the builtin catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            machine: Machine::new(),
            registry: Registry::new(),
        }
    }

    /// Evaluates a whitespace-separated source string, sending emitted
    /// lines to `out`.
    ///
    /// Returns a snapshot of the primary stack, bottom to top.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised by any token; remaining tokens are
    /// not evaluated.
    pub fn eval(&mut self, source: &str, out: &mut dyn FnMut(String)) -> Result<Vec<Value>> {
        self.run(Cursor::from(source), out)
    }

    /// Evaluates a pre-tokenized sequence.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised by any token.
    pub fn eval_tokens(
        &mut self,
        tokens: Vec<Token>,
        out: &mut dyn FnMut(String),
    ) -> Result<Vec<Value>> {
        self.run(Cursor::new(tokens), out)
    }

    fn run(&mut self, mut cursor: Cursor, out: &mut dyn FnMut(String)) -> Result<Vec<Value>> {
        while let Some(token) = cursor.advance().cloned() {
            let position = cursor.position();
            self.step(&token, &mut cursor, out)
                .map_err(|fault| annotate(fault, position, &token))?;
        }
        Ok(self.machine.stack.contents().to_vec())
    }

    /// Dispatches one token: definition start, registered operation, or
    /// numeric literal, in that order.
    fn step(
        &mut self,
        token: &Token,
        cursor: &mut Cursor,
        out: &mut dyn FnMut(String),
    ) -> Result<()> {
        match token {
            Token::Literal(value) => {
                self.machine.stack.push(value.clone());
                Ok(())
            }
            Token::Word(word) => {
                // operation names are case-insensitive and trimmed; literals are not
                let name = word.trim().to_lowercase();
                if alias::is_definition_start(&name) {
                    let definition = AliasDef::compile(cursor, &self.registry)?;
                    self.registry.define(definition);
                    Ok(())
                } else if let Some(operation) = self.registry.lookup(&name) {
                    operation.perform(&mut self.machine, out)
                } else {
                    let position = cursor.position();
                    let value = word.parse::<Value>().map_err(|_| {
                        Error::parse(format!("argument {position} (\"{word}\") unparseable"))
                    })?;
                    self.machine.stack.push(value);
                    Ok(())
                }
            }
        }
    }

    /// The primary stack.
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.machine.stack
    }

    /// The secondary stack.
    #[must_use]
    pub fn secondary_stack(&self) -> &Stack {
        &self.machine.secondary
    }

    /// The heap.
    #[must_use]
    pub fn heap(&self) -> &Heap {
        &self.machine.heap
    }

    /// Canonical names of every registered operation, builtins first.
    #[must_use]
    pub fn operation_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Every invocation name, synonyms included.
    #[must_use]
    pub fn all_operation_names(&self) -> Vec<String> {
        self.registry.all_names()
    }

    /// The synonym set for any invocation name.
    #[must_use]
    pub fn synonyms(&self, name: &str) -> Vec<String> {
        self.registry.synonyms(name)
    }
}

/// Re-contextualizes an operation fault with the position and text of the
/// token being evaluated. Parse faults already carry their position in the
/// message and pass through untouched.
fn annotate(fault: Error, position: usize, token: &Token) -> Error {
    match fault.kind {
        ErrorKind::Parse(_) => fault,
        _ => fault.at(position, token.text()),
    }
}
