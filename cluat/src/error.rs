//! Error handling for the `cluat` CLI.

use thiserror::Error;

/// Errors surfaced at the CLI's boundary: reading input, and the one
/// contractual failure mode (an empty input line).
#[derive(Error, Debug)]
pub enum CluatError {
    #[error("failed to read source file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read a line from standard input: {0}")]
    ReadStdin(#[source] std::io::Error),

    #[error("no input provided")]
    EmptyInput,

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CluatError>;
