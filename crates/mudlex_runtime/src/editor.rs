//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`] so tests can drive it with scripted
//! input; [`RustylineEditor`] is the interactive implementation.

use std::borrow::Cow;

use mudlex_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

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

    /// Replace the words offered for completion.
    fn set_completions(&mut self, words: Vec<String>);
}

/// Helper for rustyline that provides completion, hints and prompt colors.
#[derive(Helper, Completer, Hinter, Validator)]
struct MudlexHelper {
    #[rustyline(Completer)]
    completer: AliasCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for MudlexHelper {
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

/// Completes verb and noun aliases, plus the REPL's meta commands.
struct AliasCompleter {
    words: Vec<String>,
}

/// Meta commands understood by the REPL.
pub const META_COMMANDS: [&str; 7] = [":admin", ":edit", ":scope", ":save", ":load", ":help", ":quit"];

impl AliasCompleter {
    fn new() -> Self {
        Self {
            words: META_COMMANDS.iter().map(ToString::to_string).collect(),
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = line[start..pos].to_lowercase();

        let pairs = self
            .words
            .iter()
            .filter(|w| w.starts_with(&word) && !w.contains(' '))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();
        (start, pairs)
    }
}

impl Completer for AliasCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<MudlexHelper, DefaultHistory>,
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
            .map_err(|e| Error::editor(e.to_string()))?
            .build();

        let helper = MudlexHelper {
            completer: AliasCompleter::new(),
            hinter: HistoryHinter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::editor(e.to_string()))?;
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
            Err(e) => Err(Error::editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words = META_COMMANDS
                .iter()
                .map(ToString::to_string)
                .chain(words)
                .collect();
        }
    }
}
