//! Token source and line lexer
//!
//! An Input Unit is one command line split into tokens. Position 0 is the
//! command or action name. The dispatch loop pulls units from a
//! `TokenSource`; the batch runner takes them pre-lexed.

use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind, Write};

use crate::errors::{AlmagError, Result};

/// One tokenized command line
pub type InputUnit = Vec<String>;

/// Index of the command or action name within an Input Unit
pub const COMMAND_OR_ACTION_NAME: usize = 0;

/// Source of Input Units for the interactive loop
pub trait TokenSource {
    /// Read and tokenize the next unit of input
    ///
    /// Returns `None` once the source is exhausted.
    fn receive_and_lex(&mut self) -> Option<InputUnit>;
}

/// Split one line into tokens with POSIX shell quoting rules
///
/// Single quotes, double quotes and backslash escapes behave as in `sh`.
/// Returns `None` when the line ends inside a quote or after a trailing
/// backslash.
pub fn lex_line(line: &str) -> Option<InputUnit> {
    shlex::split(line)
}

/// True for lines that carry no command (blank or `#` comment)
fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Lex a whole script, one Input Unit per non-blank, non-comment line
///
/// A line that cannot be split yields an empty unit, so the batch runner
/// counts it as a failed entry instead of dropping it.
pub fn lex_script(script: &str) -> Vec<InputUnit> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_skippable(line))
        .map(|(index, line)| {
            lex_line(line).unwrap_or_else(|| {
                tracing::warn!(
                    line = index + 1,
                    "Unterminated quote or escape in script line"
                );
                InputUnit::new()
            })
        })
        .collect()
}

/// Read and lex a script file
///
/// # Errors
///
/// Returns `AlmagError::Io` if the file cannot be read.
pub fn lex_script_file(path: &std::path::Path) -> Result<Vec<InputUnit>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| AlmagError::io("read_script", e))?;
    Ok(lex_script(&content))
}

/// Line-oriented lexer over any buffered reader
///
/// Writes the prompt (if any) before each read. Blank and comment lines,
/// lines with unbalanced quoting and lines that are not valid UTF-8 are
/// skipped without returning to the caller, so the interactive loop only
/// ever sees non-empty units from this source. Any other read error ends
/// the input.
pub struct LineLexer<R, W> {
    reader: R,
    prompt_out: W,
    prompt: Option<String>,
}

impl<R: BufRead, W: Write> LineLexer<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self {
            reader,
            prompt_out,
            prompt: None,
        }
    }

    /// Set the prompt printed before each line is read
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    fn write_prompt(&mut self) {
        if let Some(prompt) = &self.prompt {
            // A closed prompt sink must not stop input processing.
            let _ = write!(self.prompt_out, "{}", prompt);
            let _ = self.prompt_out.flush();
        }
    }
}

impl<R: BufRead, W: Write> TokenSource for LineLexer<R, W> {
    fn receive_and_lex(&mut self) -> Option<InputUnit> {
        loop {
            self.write_prompt();
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) if is_skippable(&line) => continue,
                Ok(_) => match lex_line(&line) {
                    Some(unit) => return Some(unit),
                    None => {
                        tracing::warn!(
                            line = line.trim_end(),
                            "Unterminated quote or escape, line ignored"
                        );
                        continue;
                    }
                },
                // read_line has already consumed the offending bytes.
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    tracing::warn!(error = %err, "Input line is not valid UTF-8, line ignored");
                    continue;
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to read input line");
                    return None;
                }
            }
        }
    }
}

/// Replays a fixed list of Input Units
///
/// Units are returned as given, including empty ones.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTokenSource {
    units: VecDeque<InputUnit>,
    reads: usize,
}

impl ScriptedTokenSource {
    pub fn new(units: Vec<InputUnit>) -> Self {
        Self {
            units: units.into(),
            reads: 0,
        }
    }

    /// Number of units handed out so far
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Units not yet read
    pub fn remaining(&self) -> usize {
        self.units.len()
    }
}

impl TokenSource for ScriptedTokenSource {
    fn receive_and_lex(&mut self) -> Option<InputUnit> {
        let unit = self.units.pop_front()?;
        self.reads += 1;
        Some(unit)
    }
}
