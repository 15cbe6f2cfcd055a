//! Error types for the console exercises
//!
//! This module defines [`ExerciseError`], which represents all errors that can
//! occur while an exercise is running (console I/O failures and bad input).
//!
//! All exercise errors are fatal - they propagate out of the exercise and
//! terminate the run. Bad numeric input in particular is deliberately not
//! recovered: the exercises crash on it rather than re-prompting.

use std::fmt;
use std::io;
use std::num::{ParseFloatError, ParseIntError};

/// Errors that can occur while running an exercise
#[derive(Debug)]
pub enum ExerciseError {
    /// Console read or write failed
    Io(io::Error),

    /// Input stream was exhausted while a line was expected
    EndOfInput,

    /// A line that should have been an integer was not
    ParseInt {
        input: String,
        source: ParseIntError,
    },

    /// A line that should have been a float was not
    ParseFloat {
        input: String,
        source: ParseFloatError,
    },
}

impl fmt::Display for ExerciseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseError::Io(err) => {
                write!(f, "Console I/O error: {}", err)
            }
            ExerciseError::EndOfInput => {
                write!(f, "End of input while reading a line")
            }
            ExerciseError::ParseInt { input, .. } => {
                write!(f, "Could not read '{}' as an integer", input)
            }
            ExerciseError::ParseFloat { input, .. } => {
                write!(f, "Could not read '{}' as a number", input)
            }
        }
    }
}

impl std::error::Error for ExerciseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExerciseError::Io(err) => Some(err),
            ExerciseError::EndOfInput => None,
            ExerciseError::ParseInt { source, .. } => Some(source),
            ExerciseError::ParseFloat { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for ExerciseError {
    fn from(err: io::Error) -> Self {
        ExerciseError::Io(err)
    }
}
