//! Input handling for the menus
//!
//! `InputHandler` is the interactive source backed by rustyline. Menus only
//! see the `LineSource` trait, so a `ScriptedInput` can stand in for the
//! keyboard.

use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::collections::VecDeque;

use crate::errors::{RecordError, Result};

/// Anything that can answer a prompt with one line of text
pub trait LineSource {
    /// Ask `prompt` and return the answer as typed.
    ///
    /// Returns:
    /// - Ok(Some(line)) for normal input (possibly empty)
    /// - Ok(None) once input is exhausted
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Ask for a required field; end of input yields `InputClosed`
pub fn ask_field(input: &mut dyn LineSource, prompt: &str) -> Result<String> {
    input.ask(prompt)?.ok_or(RecordError::InputClosed)
}

/// Input handler managing the readline interface
///
/// Features:
/// - Command line editing (Emacs-style by default)
/// - In-session history of answers
/// - Graceful interrupt handling
pub struct InputHandler {
    editor: DefaultEditor,
}

impl InputHandler {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| RecordError::Input(format!("Failed to initialise terminal: {}", e)))?;

        Ok(InputHandler { editor })
    }

    /// Number of remembered answers
    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}

impl LineSource for InputHandler {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl-C and Ctrl-D both end the session
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(RecordError::Input(format!("Readline error: {}", err))),
        }
    }
}

/// Pre-recorded answers, handed out in order
///
/// A `None` entry behaves like Ctrl-D at that prompt.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<Option<String>>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(|line| Some(line.into())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Close input at the next unanswered prompt, then continue with `lines`
    pub fn then_close<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.push_back(None);
        self.lines.extend(lines.into_iter().map(|line| Some(line.into())));
        self
    }

    /// Prompts that were asked so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().flatten())
    }
}
