//! Interactive prompts.
//!
//! [`TerminalPrompter`] edits values in place on a real terminal, the way a
//! readline prompt with pre-inserted text behaves. [`LinePrompter`] reads
//! plain lines and is used when stdin is piped, and in tests.

use dialoguer::console::Term;
use dialoguer::Input;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::trace;

pub const NAME_PROMPT: &str = "Enter new movie name";
pub const YEAR_PROMPT: &str = "Enter year of the movie";
pub const SUFFIX_PROMPT: &str = "Enter movie suffix";
pub const CONTINUE_PROMPT: &str = "Continue[enter] or quit[q]? ";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read user input: {0}")]
    Io(#[from] io::Error),

    #[error("Terminal prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),
}

pub trait Prompter {
    /// Ask for a value, starting from `default`. Returns what the user
    /// submitted; no validation is applied.
    fn prompt_with_default(&mut self, prompt: &str, default: &str) -> Result<String, PromptError>;

    /// Ask whether to go on with the next file. `false` means quit.
    fn ask_continue(&mut self) -> Result<bool, PromptError>;
}

/// Answers of `q` or `Q` stop the run, anything else continues
pub fn is_quit_answer(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("q")
}

/// Prompter for an interactive terminal with editable pre-filled text
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn prompt_with_default(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(default)
            .allow_empty(true)
            .interact_text_on(&self.term)?;

        trace!(prompt, value = %value, "Terminal input");
        Ok(value)
    }

    fn ask_continue(&mut self) -> Result<bool, PromptError> {
        self.term.write_str(CONTINUE_PROMPT)?;
        let answer = self.term.read_line()?;
        Ok(!is_quit_answer(&answer))
    }
}

/// Line-oriented prompter.
///
/// Shows the current value in brackets; an empty line or end of input keeps
/// it. End of input at the continue question quits.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read one line without its line ending. `None` at end of input.
    fn read_answer(&mut self) -> Result<Option<String>, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        let answer = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        Ok(Some(answer))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt_with_default(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        write!(self.writer, "{} [{}]: ", prompt, default)?;
        self.writer.flush()?;

        let value = match self.read_answer()? {
            Some(answer) if !answer.is_empty() => answer,
            _ => default.to_string(),
        };

        trace!(prompt, value = %value, "Line input");
        Ok(value)
    }

    fn ask_continue(&mut self) -> Result<bool, PromptError> {
        write!(self.writer, "{}", CONTINUE_PROMPT)?;
        self.writer.flush()?;

        Ok(match self.read_answer()? {
            Some(answer) => !is_quit_answer(&answer),
            None => false,
        })
    }
}
