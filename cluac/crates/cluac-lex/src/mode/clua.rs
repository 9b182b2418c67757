//! Host (`CLua`) mode: the outer C/C++-like tokenization driver.

use crate::char_class::{classify_host_byte, CharClass};
use crate::consume::{comment, identifier, misc, number, string, symbol, whitespace};
use crate::context::{ConsumerMode, LexerContext};
use crate::token::TokenKind;

/// Classifies the current byte into a guessed token kind. Shared verbatim by
/// `LuaUCapture` (still a host-syntax dialect) and by the `LuaU` outer-level
/// guesser for every class it falls through to.
pub fn guess_token_type(ctx: &LexerContext) -> TokenKind {
    let current = ctx.cursor.current();

    match classify_host_byte(current) {
        CharClass::Error => TokenKind::Error,
        CharClass::Letter => TokenKind::Identifier,
        CharClass::Numeric => TokenKind::Numeric,
        CharClass::Symbol => {
            let next = ctx.cursor.peek(1);
            if current == b'/' && (next == b'/' || next == b'*') {
                TokenKind::Comment
            } else if current == b'"' {
                TokenKind::String
            } else if current == b'\'' {
                TokenKind::Char
            } else if current == b'.' && classify_host_byte(next) == CharClass::Numeric {
                TokenKind::Numeric
            } else {
                TokenKind::Symbol
            }
        }
        CharClass::Whitespace => TokenKind::Whitespace,
        CharClass::NewLine => TokenKind::NewLine,
        CharClass::EndOfFile => TokenKind::EndOfFile,
        CharClass::Unicode => TokenKind::Error,
        CharClass::LBracket | CharClass::RBracket => TokenKind::Symbol,
    }
}

/// Dispatches a guessed kind to its consumer.
///
/// `'@'` starting a `Symbol` token switches the mode to `LuaUCapture`
/// *before* the symbol itself is consumed, so the `@` is the last host
/// token produced strictly in `CLua` mode.
pub fn get_next_token(ctx: &mut LexerContext, kind: TokenKind) {
    match kind {
        TokenKind::Identifier => identifier::consume_identifier_token(ctx),
        TokenKind::Numeric => number::consume_numeric_token(ctx),
        TokenKind::Symbol => {
            if ctx.cursor.current() == b'@' {
                ctx.switch_mode(ConsumerMode::LuaUCapture);
            }
            symbol::consume_symbol_token(ctx);
        }
        TokenKind::Whitespace => whitespace::consume_whitespace_token(ctx),
        TokenKind::Comment => comment::consume_comment_token(ctx),
        TokenKind::String => string::consume_string_token(ctx),
        TokenKind::Char => string::consume_char_token(ctx),
        TokenKind::NewLine => whitespace::consume_new_line_token(ctx),
        TokenKind::EndOfFile => misc::consume_eof_token(ctx),
        TokenKind::Error => misc::consume_error_token(ctx),
        TokenKind::LuaBlock | TokenKind::None => {
            unreachable!("host mode never guesses {:?}", kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_identifier_numeric_symbol() {
        let ctx = LexerContext::new(b"foo");
        assert_eq!(guess_token_type(&ctx), TokenKind::Identifier);
        let ctx = LexerContext::new(b"42");
        assert_eq!(guess_token_type(&ctx), TokenKind::Numeric);
        let ctx = LexerContext::new(b"+");
        assert_eq!(guess_token_type(&ctx), TokenKind::Symbol);
    }

    #[test]
    fn dot_before_digit_guesses_numeric() {
        let ctx = LexerContext::new(b".5");
        assert_eq!(guess_token_type(&ctx), TokenKind::Numeric);
        let ctx = LexerContext::new(b"..");
        assert_eq!(guess_token_type(&ctx), TokenKind::Symbol);
    }

    #[test]
    fn at_sign_switches_mode_before_consuming() {
        let mut ctx = LexerContext::new(b"@Lua");
        ctx.begin_token();
        get_next_token(&mut ctx, TokenKind::Symbol);
        assert_eq!(ctx.mode, ConsumerMode::LuaUCapture);
        assert_eq!(ctx.cursor.index(), 1);
    }

    #[test]
    fn string_and_char_openers() {
        let ctx = LexerContext::new(b"\"x\"");
        assert_eq!(guess_token_type(&ctx), TokenKind::String);
        let ctx = LexerContext::new(b"'x'");
        assert_eq!(guess_token_type(&ctx), TokenKind::Char);
    }
}
