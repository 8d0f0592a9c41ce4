//! Line input for the REPL.
//!
//! Interactive sessions get a rustyline editor with tab completion over the
//! command vocabulary and history persisted under the user data directory.
//! Piped input reads plain lines from stdin instead.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// The fixed command vocabulary, offered as tab completion.
const COMMAND_TERMS: &[&str] = &["drop", "exit", "go", "quit", "take", "use"];

/// Completes the first word of the line against [`COMMAND_TERMS`].
/// Arguments are map data the editor knows nothing about, so once the line
/// contains whitespace no candidates are offered.
struct CommandCompleter;

impl Helper for CommandCompleter {}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = line[..pos].trim_start();
        let start = pos - typed.len();
        if typed.is_empty() || typed.contains(char::is_whitespace) {
            return Ok((start, Vec::new()));
        }
        let candidates = COMMAND_TERMS
            .iter()
            .filter(|term| term.starts_with(typed))
            .map(|term| Pair {
                display: (*term).to_string(),
                replacement: (*term).to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

/// Reads player input, preferring an interactive line editor and degrading
/// to plain stdin reads when the terminal or the editor is unavailable.
pub struct InputManager {
    editor: Option<LineEditor>,
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a TTY; reading plain lines");
            return Self { editor: None };
        }
        match LineEditor::open() {
            Ok(editor) => {
                info!("interactive line editor ready");
                Self { editor: Some(editor) }
            },
            Err(err) => {
                warn!("line editor unavailable ({err}); reading plain lines");
                Self { editor: None }
            },
        }
    }

    /// Read one line. An editor failure demotes the session to plain stdin
    /// for the rest of the run.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        if let Some(editor) = self.editor.as_mut() {
            match editor.read_line(prompt) {
                Ok(event) => return Ok(event),
                Err(err) => {
                    warn!("line editor failed ({err}); dropping to plain stdin");
                    self.editor = None;
                },
            }
        }
        read_stdin_line(prompt)
    }
}

struct LineEditor {
    inner: rustyline::Editor<CommandCompleter, DefaultHistory>,
    history: Option<PathBuf>,
}

impl LineEditor {
    fn open() -> rustyline::Result<Self> {
        let mut inner = rustyline::Editor::new()?;
        inner.set_helper(Some(CommandCompleter));

        let history = history_path();
        if let Some(path) = history.as_deref() {
            if let Some(dir) = path.parent() {
                if let Err(err) = fs::create_dir_all(dir) {
                    warn!("could not create history directory {}: {err}", dir.display());
                }
            }
            if path.exists() {
                if let Err(err) = inner.load_history(path) {
                    warn!("could not load history from {}: {err}", path.display());
                }
            }
        }

        Ok(Self { inner, history })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.inner.readline(prompt) {
            Ok(line) => {
                self.record(&line);
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(ReadlineError::Io(err)) => Err(err),
            Err(other) => Err(io::Error::other(other)),
        }
    }

    /// Append a non-blank line to the in-memory history and the history file.
    fn record(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(err) = self.inner.add_history_entry(line) {
            warn!("could not add history entry: {err}");
            return;
        }
        if let Some(path) = self.history.clone() {
            if let Err(err) = self.inner.append_history(&path) {
                warn!("could not append history to {}: {err}", path.display());
            }
        }
    }
}

fn read_stdin_line(prompt: &str) -> io::Result<InputEvent> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(InputEvent::Eof);
    }
    while buffer.ends_with(['\n', '\r']) {
        buffer.pop();
    }
    Ok(InputEvent::Line(buffer))
}

fn history_path() -> Option<PathBuf> {
    let mut path = dirs::data_dir().or_else(dirs::data_local_dir)?;
    path.push("scurry");
    path.push("history.txt");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_a_unique_command_prefix() {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = CommandCompleter.complete("  ta", 4, &ctx).unwrap();
        assert_eq!(start, 2);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "take");
    }

    #[test]
    fn does_not_complete_past_the_first_word() {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (_, pairs) = CommandCompleter.complete("go no", 5, &ctx).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn command_terms_cover_the_full_surface() {
        for term in ["go", "take", "drop", "use", "quit", "exit"] {
            assert!(COMMAND_TERMS.contains(&term));
        }
    }

    #[test]
    fn history_lives_under_the_scurry_data_dir() {
        if let Some(path) = history_path() {
            assert!(path.ends_with("scurry/history.txt"));
        }
    }
}
