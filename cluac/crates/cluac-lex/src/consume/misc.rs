//! End-of-file and fallback error consumption.

use cluac_util::ErrorCode;

use crate::char_class::{classify_host_byte, CharClass};
use crate::context::LexerContext;

/// Consumes the sentinel once, giving the final `EndOfFile` token a
/// `length` of 1 without reading past the real buffer.
pub fn consume_eof_token(ctx: &mut LexerContext) {
    debug_assert_eq!(classify_host_byte(ctx.cursor.current()), CharClass::EndOfFile);
    ctx.cursor.consume_sentinel();
}

/// Fallback for a byte that matched no recognized class: records
/// `UnexpectedCharacter` and advances one byte, preserving the lexer's
/// progress guarantee.
pub fn consume_error_token(ctx: &mut LexerContext) {
    ctx.emit_error(ErrorCode::UnexpectedCharacter);
    ctx.cursor.consume(1);
}
