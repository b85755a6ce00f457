//! Shell error taxonomy.
//!
//! Errors crossing the terminal I/O boundary. A process count below one
//! is deliberately NOT an error: it is the documented friendly
//! termination path and exits cleanly. Any other input failure aborts
//! the whole run — this is single-pass batch computation with no retries
//! or partial-failure recovery.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the interactive shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading or writing the terminal failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// A prompt received a token that does not parse as an integer.
    #[error("invalid input at \"{prompt}\": expected an integer, got \"{token}\"")]
    Malformed {
        /// The prompt that was being answered.
        prompt: String,
        /// The offending token.
        token: String,
    },

    /// Input ended before all prompts were answered.
    #[error("input ended before \"{prompt}\" was answered")]
    UnexpectedEof {
        /// The prompt left unanswered.
        prompt: String,
    },

    /// The process set failed structural validation.
    #[error("invalid process set: {}", format_violations(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
