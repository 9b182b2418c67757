//! `cluat` - a thin driver over `cluac-lex`, used for end-to-end testing of
//! the lexer's token stream.
//!
//! Two input modes:
//! - `--file <path>`: tokenizes the whole file.
//! - no flag: reads one line from standard input and tokenizes it; an empty
//!   line is a contractual failure (exit code 1).
//!
//! Either way, every token is printed as `Token Type: <kind_id> <spelling>`;
//! a token of kind `Error` is preceded by a two-line preface naming the
//! error code.

mod error;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cluac_lex::{Lexer, Span, TokenKind};
use error::{CluatError, Result};

/// `cluat` - tokenize CLua source and print its token stream.
#[derive(Parser, Debug)]
#[command(name = "cluat")]
#[command(author = "CLua Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenizes CLua source and prints its token stream")]
struct Cli {
    /// Read source from this file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, env = "CLUAT_VERBOSE")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let source = read_source(cli.file.as_deref()).context("reading tokenizer input")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_tokens(&source, &mut out);

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false).with_thread_names(false))
        .try_init()
        .map_err(|e| CluatError::Logging(e.to_string()))?;

    Ok(())
}

fn read_source(file: Option<&std::path::Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path)
            .map_err(|source| CluatError::ReadFile { path: path.display().to_string(), source }),
        None => read_stdin_line(),
    }
}

fn read_stdin_line() -> Result<Vec<u8>> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).map_err(CluatError::ReadStdin)?;

    let trimmed = line.trim_end_matches(['\n', '\r']);
    if trimmed.is_empty() {
        return Err(CluatError::EmptyInput);
    }
    Ok(trimmed.as_bytes().to_vec())
}

/// Prints one line per token, with the error preface for `Error`-kind
/// tokens. Never fails: a write error to stdout is not part of the lexer's
/// contract and would only happen if the output pipe is already gone.
fn print_tokens(source: &[u8], out: &mut impl Write) {
    let mut lexer = Lexer::new(source);
    while let Some(token) = lexer.process_next_token() {
        let span = Span::from_offset_len(token.offset, token.length);
        if token.kind == TokenKind::Error {
            let _ = writeln!(out, "error encountered while interpreting the file");
            if let Some(code) = lexer.last_error() {
                let _ = writeln!(out, "error code: {}", code.code_id());
            }
            tracing::debug!(start = span.start, end = span.end, code = ?lexer.last_error(), "lexical error");
        }
        let spelling = String::from_utf8_lossy(token.spelling(source));
        tracing::debug!(start = span.start, end = span.end, kind = ?token.kind, "token");
        let _ = writeln!(out, "Token Type: {} {}", token.kind.kind_id(), spelling);
    }
}
