//! Whitespace and newline consumption.

use crate::char_class::{classify_host_byte, CharClass};
use crate::context::LexerContext;

/// A run of `' ' | '\t' | '\r'`. `'\n'` is its own class and does not fold
/// into a whitespace run.
pub fn consume_whitespace_token(ctx: &mut LexerContext) {
    debug_assert_eq!(classify_host_byte(ctx.cursor.current()), CharClass::Whitespace);
    while classify_host_byte(ctx.cursor.current()) == CharClass::Whitespace {
        ctx.cursor.consume(1);
    }
}

/// Exactly one `'\n'`.
pub fn consume_new_line_token(ctx: &mut LexerContext) {
    debug_assert_eq!(classify_host_byte(ctx.cursor.current()), CharClass::NewLine);
    ctx.cursor.consume(1);
}
