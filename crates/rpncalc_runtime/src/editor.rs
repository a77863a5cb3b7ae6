//! Line editor abstraction for the REPL.
//!
//! A trait-based abstraction over line editing libraries, allowing the
//! REPL to use rustyline while remaining swappable (and mockable in
//! tests).

use std::borrow::Cow;

use rpncalc_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions for operation names.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Helper for rustyline that provides completion, hints, and prompt
/// highlighting.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct RpnHelper {
    #[rustyline(Completer)]
    completer: RpnCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: LineValidator,
}

impl Highlighter for RpnHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Completer over operation names.
struct RpnCompleter {
    keywords: Vec<String>,
}

impl Completer for RpnCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // tokens are whitespace-delimited, so the current word starts
        // after the last whitespace
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];

        let candidates: Vec<Pair> = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Input is line-oriented, so every line is complete as-is.
#[derive(Default)]
struct LineValidator;

impl Validator for LineValidator {}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<RpnHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::io(e.to_string()))?
            .build();

        let helper = RpnHelper {
            completer: RpnCompleter {
                keywords: Vec::new(),
            },
            hinter: HistoryHinter::new(),
            validator: LineValidator,
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::io(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::io(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}
