//! Quoted string and character literal consumption.
//!
//! Structural only: escape sequences are validated for closure (an escaped
//! byte must exist), never decoded into a value.

use cluac_util::ErrorCode;

use crate::char_class::{classify_host_byte, CharClass};
use crate::context::LexerContext;

/// Opens with `"`. `\\` escapes exactly one following byte.
pub fn consume_string_token(ctx: &mut LexerContext) {
    debug_assert_eq!(ctx.cursor.current(), b'"');

    loop {
        ctx.cursor.consume(1);
        let current = ctx.cursor.current();

        if classify_host_byte(current) == CharClass::EndOfFile {
            ctx.emit_error(ErrorCode::UnclosedString);
            return;
        }
        if current == b'\\' {
            ctx.cursor.consume(1);
            if classify_host_byte(ctx.cursor.current()) == CharClass::EndOfFile {
                ctx.emit_error(ErrorCode::UnclosedString);
                return;
            }
            continue;
        }
        if current == b'"' {
            ctx.cursor.consume(1);
            return;
        }
    }
}

/// Opens with `'`. Exactly one structural byte between the quotes is legal.
pub fn consume_char_token(ctx: &mut LexerContext) {
    debug_assert_eq!(ctx.cursor.current(), b'\'');
    ctx.cursor.consume(1);

    let mut count = 0usize;
    loop {
        let current = ctx.cursor.current();
        if current == b'\'' {
            break;
        }
        if current == b'\0' {
            ctx.emit_error(ErrorCode::UnclosedChar);
            return;
        }
        if current == b'\\' {
            ctx.cursor.consume(1);
            if ctx.cursor.current() == b'\0' {
                ctx.emit_error(ErrorCode::UnclosedChar);
                return;
            }
        }
        ctx.cursor.consume(1);
        count += 1;
    }
    ctx.cursor.consume(1);

    match count {
        0 => ctx.emit_error(ErrorCode::InvalidCharCode),
        1 => {}
        _ => ctx.emit_error(ErrorCode::TooLongChar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_string(src: &[u8]) -> (usize, Option<ErrorCode>) {
        let mut ctx = LexerContext::new(src);
        ctx.begin_token();
        consume_string_token(&mut ctx);
        (ctx.cursor.index(), ctx.last_error())
    }

    fn run_char(src: &[u8]) -> (usize, Option<ErrorCode>) {
        let mut ctx = LexerContext::new(src);
        ctx.begin_token();
        consume_char_token(&mut ctx);
        (ctx.cursor.index(), ctx.last_error())
    }

    #[test]
    fn closed_string_with_escape() {
        let (len, err) = run_string(b"\"hello\\nworld\"");
        assert_eq!(len, 14);
        assert_eq!(err, None);
    }

    #[test]
    fn unclosed_string_at_eof() {
        let (_, err) = run_string(b"\"dangling");
        assert_eq!(err, Some(ErrorCode::UnclosedString));
    }

    #[test]
    fn dangling_backslash_at_eof_is_unclosed() {
        let (_, err) = run_string(b"\"abc\\");
        assert_eq!(err, Some(ErrorCode::UnclosedString));
    }

    #[test]
    fn single_char_is_legal() {
        let (len, err) = run_char(b"'a'");
        assert_eq!(len, 3);
        assert_eq!(err, None);
    }

    #[test]
    fn empty_char_is_invalid() {
        let (_, err) = run_char(b"''");
        assert_eq!(err, Some(ErrorCode::InvalidCharCode));
    }

    #[test]
    fn multi_byte_char_is_too_long() {
        let (_, err) = run_char(b"'ab'");
        assert_eq!(err, Some(ErrorCode::TooLongChar));
    }

    #[test]
    fn escaped_char_counts_as_one() {
        let (len, err) = run_char(b"'\\n'");
        assert_eq!(len, 4);
        assert_eq!(err, None);
    }

    #[test]
    fn unterminated_char_at_eof() {
        let (_, err) = run_char(b"'a");
        assert_eq!(err, Some(ErrorCode::UnclosedChar));
    }
}
