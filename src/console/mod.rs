//! Console abstraction for the exercises
//!
//! Every exercise runs against the [`Console`] trait, so the same code drives
//! a real terminal ([`StdConsole`]) and a scripted test harness
//! ([`MockConsole`]). The mock records the full session transcript, which the
//! integration tests assert against line by line.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::ExerciseError;

/// Line-oriented console used by all exercises.
///
/// `print` writes without a newline (prompts), `println` appends one,
/// `read_line` blocks for one line of input with its terminator stripped.
pub trait Console {
    /// Write `text` without a trailing newline.
    fn print(&mut self, text: &str) -> Result<(), ExerciseError>;

    /// Read one line of input, without the line terminator.
    ///
    /// Returns [`ExerciseError::EndOfInput`] if the stream is exhausted.
    fn read_line(&mut self) -> Result<String, ExerciseError>;

    /// Write `text` followed by a newline.
    fn println(&mut self, text: &str) -> Result<(), ExerciseError> {
        self.print(text)?;
        self.print("\n")
    }
}

/// Real console: locked stdin, stdout flushed after every write so prompts
/// appear before the blocking read.
pub struct StdConsole {
    stdin: io::Stdin,
}

impl StdConsole {
    pub fn new() -> Self {
        StdConsole { stdin: io::stdin() }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn print(&mut self, text: &str) -> Result<(), ExerciseError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ExerciseError> {
        let mut line = String::new();
        let read = self.stdin.lock().read_line(&mut line)?;
        if read == 0 {
            return Err(ExerciseError::EndOfInput);
        }
        trim_newline(&mut line);
        Ok(line)
    }
}

/// Mock console for capturing exercise output
///
/// Input lines are scripted up front. Each consumed line is echoed into the
/// transcript, so the captured output reads like a terminal session:
///
/// ```text
/// Enter first number: 3
/// Enter second number: 4
/// Result: 7.0
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockConsole {
    inputs: VecDeque<String>,
    transcript: String,
}

impl MockConsole {
    pub fn new() -> Self {
        MockConsole::default()
    }

    /// Create a mock with a fixed input script, one entry per line.
    pub fn with_input(lines: &[&str]) -> Self {
        MockConsole {
            inputs: lines.iter().map(|s| s.to_string()).collect(),
            transcript: String::new(),
        }
    }

    /// Queue one more input line.
    pub fn push_input(&mut self, line: &str) {
        self.inputs.push_back(line.to_string());
    }

    /// Raw transcript text, exactly as written.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Transcript split into lines.
    pub fn output(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.transcript.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if the transcript ended with a newline
        if lines.last().is_some_and(|s| s.is_empty()) {
            lines.pop();
        }
        lines
    }
}

impl Console for MockConsole {
    fn print(&mut self, text: &str) -> Result<(), ExerciseError> {
        self.transcript.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ExerciseError> {
        let line = self.inputs.pop_front().ok_or(ExerciseError::EndOfInput)?;
        // Echo what the user "typed" so prompt lines are complete
        self.transcript.push_str(&line);
        self.transcript.push('\n');
        Ok(line)
    }
}

/// Print `prompt` (no newline) and read the reply.
pub fn prompt_line(console: &mut dyn Console, prompt: &str) -> Result<String, ExerciseError> {
    console.print(prompt)?;
    console.read_line()
}

/// Prompt for one line and parse it as an integer.
///
/// Surrounding whitespace is ignored; anything else that fails to parse is a
/// fatal [`ExerciseError::ParseInt`].
pub fn prompt_int(console: &mut dyn Console, prompt: &str) -> Result<i64, ExerciseError> {
    let line = prompt_line(console, prompt)?;
    let text = line.trim();
    text.parse().map_err(|source| ExerciseError::ParseInt {
        input: text.to_string(),
        source,
    })
}

/// Prompt for one line and parse it as a float.
pub fn prompt_float(console: &mut dyn Console, prompt: &str) -> Result<f64, ExerciseError> {
    let line = prompt_line(console, prompt)?;
    let text = line.trim();
    text.parse().map_err(|source| ExerciseError::ParseFloat {
        input: text.to_string(),
        source,
    })
}

fn trim_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
