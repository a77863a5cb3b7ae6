//! The interactive read-eval-print loop.

use rpncalc_eval::Evaluator;
use rpncalc_foundation::Result;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::help::HelpCatalog;

/// Returns the line with any `#` comment removed.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    line.find('#').map_or(line, |i| &line[..i])
}

/// The interactive REPL.
///
/// One evaluator backs the whole session, so stacks, heap, and alias
/// definitions persist from line to line. Evaluation faults are printed
/// and the session continues.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state: stacks, heap, and alias definitions.
    evaluator: Evaluator,

    /// The operator help catalog.
    help: HelpCatalog,

    /// Input prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E) -> Self {
        let evaluator = Evaluator::new();
        editor.set_keywords(evaluator.all_operation_names());
        Self {
            editor,
            evaluator,
            help: HelpCatalog::new(),
            prompt: "rpn> ".to_string(),
        }
    }

    /// Returns a reference to the session evaluator.
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Returns a mutable reference to the session evaluator.
    pub fn evaluator_mut(&mut self) -> &mut Evaluator {
        &mut self.evaluator
    }

    /// Runs the REPL loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Evaluation
    /// faults are printed to stderr and do not end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(trimmed);
                    for output in self.eval_line(&line) {
                        println!("{output}");
                    }
                }
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Eof => break,
            }
        }
        Ok(())
    }

    /// Evaluates one input line and returns the lines to print.
    ///
    /// Help queries are answered without touching the evaluator. For
    /// everything else, emitted values are joined space-separated onto a
    /// single line; faults are printed to stderr.
    pub fn eval_line(&mut self, line: &str) -> Vec<String> {
        let source = strip_comment(line);
        let words: Vec<&str> = source.split_whitespace().collect();
        if let Some(response) = self.help.respond(&self.evaluator, &words) {
            return response;
        }

        let mut emitted = Vec::new();
        if let Err(fault) = self.evaluator.eval(source, &mut |s| emitted.push(s)) {
            eprintln!("{fault}");
        }
        if emitted.is_empty() {
            Vec::new()
        } else {
            vec![emitted.join(" ")]
        }
    }
}
