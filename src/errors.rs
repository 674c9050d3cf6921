//! Error types for the exercises and the binary
//!
//! [`PromptError`] covers reading values from the input stream, [`ExerciseError`]
//! covers everything an exercise can fail on, and [`AppError`] is what `main`
//! reports before exiting.

use thiserror::Error;

/// Errors raised while prompting for and parsing a value
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream closed before a value was read
    #[error("unexpected end of input")]
    EndOfInput,

    /// The token read could not be parsed as the requested type
    #[error("expected {expected}, got '{input}'")]
    Parse {
        input: String,
        expected: &'static str,
    },
}

/// Errors raised by an exercise
#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A raw value or name outside the four compass directions
    #[error("illegal direction value: {0}")]
    IllegalDirection(String),

    /// Percentage of a region with no area
    #[error("region area is zero")]
    ZeroArea,

    #[error("region name '{name}' is longer than {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("empty range: low {low} is greater than high {high}")]
    EmptyRange { low: i64, high: i64 },

    #[error("integer overflow while accumulating")]
    Overflow,
}

/// Errors surfaced by the `primer` binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("logger error: {0}")]
    Logger(String),

    #[error(transparent)]
    Exercise(#[from] ExerciseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
