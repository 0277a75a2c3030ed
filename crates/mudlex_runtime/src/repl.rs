//! The main REPL implementation.
//!
//! Each line is either a meta command (starting with `:`) or a player
//! command that is parsed against the session's world and printed.

use std::io::{self, BufRead, Write};
use std::path::Path;

use mudlex_foundation::{Error, ErrorContext, Result};
use tracing::warn;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What a meta command asks the loop to do next.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (world, access).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
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
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        self.editor.set_completions(self.session.completion_words());

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    match self.eval(&line) {
                        Ok((output, flow)) => {
                            if !output.is_empty() {
                                println!("{output}");
                            }
                            if flow == Flow::Quit {
                                break;
                            }
                        }
                        Err(e) => print_error(&e),
                    }
                    self.editor.set_completions(self.session.completion_words());
                }
                ReadResult::Interrupted => println!(),
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates lines from a reader without a prompt, one outcome per line.
    ///
    /// Errors from meta commands are reported with the line number and do not
    /// stop the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run_batch<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line.map_err(|e| Error::io(e.to_string()))?;
            match self.eval(&line) {
                Ok((text, flow)) => {
                    if !text.is_empty() {
                        writeln!(output, "{text}").map_err(|e| Error::io(e.to_string()))?;
                    }
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    let e = e.with_context(ErrorContext::new().with_line(index + 1));
                    warn!(line = index + 1, error = %e, "batch line failed");
                    print_error(&e);
                }
            }
        }
        output.flush().map_err(|e| Error::io(e.to_string()))
    }

    /// Evaluates one line and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns an error if a meta command is malformed or fails.
    pub fn eval_line(&mut self, line: &str) -> Result<String> {
        self.eval(line).map(|(text, _)| text)
    }

    fn eval(&mut self, line: &str) -> Result<(String, Flow)> {
        let trimmed = line.trim();
        if let Some(meta) = trimmed.strip_prefix(':') {
            return self.eval_meta(meta);
        }
        if trimmed.is_empty() {
            return Ok((String::new(), Flow::Continue));
        }
        let outcome = self.session.parse(trimmed);
        Ok((self.session.describe(&outcome), Flow::Continue))
    }

    fn eval_meta(&mut self, meta: &str) -> Result<(String, Flow)> {
        let mut parts = meta.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.next();

        let output = match command {
            "admin" => {
                let on = parse_switch("admin", argument)?;
                self.session.set_admin(on);
                format!("admin {}", if on { "on" } else { "off" })
            }
            "edit" => {
                let on = parse_switch("edit", argument)?;
                self.session.set_edit_mode(on);
                if on && !self.session.access().is_admin {
                    "edit mode on (has no effect without :admin on)".to_string()
                } else {
                    format!("edit mode {}", if on { "on" } else { "off" })
                }
            }
            "scope" => self.session.visible_aliases().join(", "),
            "save" => {
                let path = require_path("save", argument)?;
                self.session.save(Path::new(path))?;
                format!("saved {path}")
            }
            "load" => {
                let path = require_path("load", argument)?;
                self.session.load(Path::new(path))?;
                format!("loaded {path}")
            }
            "help" => HELP.to_string(),
            "quit" | "q" => return Ok((String::new(), Flow::Quit)),
            other => {
                return Err(Error::invalid_argument(format!(
                    "unknown command :{other} (try :help)"
                )));
            }
        };

        Ok((output, Flow::Continue))
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mmudlex\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type a command to see how it parses. :help lists meta commands.\n");
        let _ = io::stdout().flush();
    }
}

const HELP: &str = "\
:admin on|off   toggle builder verbs
:edit on|off    toggle edit-mode verbs (admins only)
:scope          list aliases in scope
:save PATH      write the world snapshot
:load PATH      read a world snapshot
:help           show this text
:quit           leave";

fn parse_switch(command: &str, argument: Option<&str>) -> Result<bool> {
    match argument {
        Some("on") => Ok(true),
        Some("off") => Ok(false),
        _ => Err(Error::invalid_argument(format!(":{command} expects on or off"))),
    }
}

fn require_path<'a>(command: &str, argument: Option<&'a str>) -> Result<&'a str> {
    argument.ok_or_else(|| Error::invalid_argument(format!(":{command} expects a path")))
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    match &error.context {
        Some(context) => eprintln!("\x1b[31mError: {error} ({context})\x1b[0m"),
        None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
    }
}
