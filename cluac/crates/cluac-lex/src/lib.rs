//! cluac-lex - byte-driven, multi-mode lexer for CLua source text.
//!
//! CLua source is tokenized in one of three mutually exclusive modes:
//!
//! - `CLua`: the host C/C++-like language, the mode every buffer starts in.
//! - `LuaUCapture`: a transient prologue entered on `@Ident`, which tracks
//!   `[`/`]` balance until it closes.
//! - `LuaU`: the embedded block entered once the capture prologue's brackets
//!   balance, which scans byte-for-byte (respecting inner strings, inner
//!   comments, and long brackets) until its own braces rebalance to zero,
//!   then emits the whole span as a single opaque [`token::TokenKind::LuaBlock`]
//!   token and returns to `CLua`.
//!
//! [`lexer::Lexer`] is the public entry point: a one-token-lookahead
//! tokenizer over a borrowed byte buffer. It never allocates a decoded
//! value for a token; callers re-slice the buffer with [`token::Token::spelling`].
//! Side information that doesn't fit the flat `Token` record -- which error
//! occurred, which base/type a number had, which concrete symbol or keyword
//! an identifier-shaped or punctuation-shaped token resolved to -- is
//! exposed through a per-token hint channel on the lexer (`last_error`,
//! `last_number`, `last_symbol`, `last_keyword`), each valid only for the
//! token most recently returned.

mod char_class;
mod consume;
mod context;
mod cursor;
mod keyword;
mod lexer;
mod mode;
mod symbol;
mod token;

pub use context::ConsumerMode;
pub use keyword::Keyword;
pub use lexer::Lexer;
pub use symbol::SymbolKind;
pub use token::{NumberBase, NumberHint, NumberType, Token, TokenKind};

pub use cluac_util::{ErrorCode, Span};
