//! The public façade: a one-token lookahead tokenizer over a borrowed
//! buffer.
//!
//! `process_next_token` and `peek_next_token` are the only entry points.
//! Internally each call runs `begin_token`, dispatches to whichever mode is
//! active, then computes the token's *final* kind: if any consumer recorded
//! an error while producing this token, the kind is promoted to `Error`
//! regardless of what the mode driver originally guessed or consumed as.

use crate::context::{ConsumerMode, LexerContext};
use crate::keyword::Keyword;
use crate::mode::{capture, clua, luau};
use crate::symbol::SymbolKind;
use crate::token::{NumberHint, Token, TokenKind};
use cluac_util::ErrorCode;

/// Tokenizes a byte buffer, one token at a time, with a single slot of
/// lookahead.
pub struct Lexer<'a> {
    buffer: &'a [u8],
    ctx: LexerContext<'a>,
    peeked: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Lexer { buffer, ctx: LexerContext::new(buffer), peeked: None }
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Returns the next token, consuming it. If a token was previously
    /// peeked, returns it without re-running the lexer.
    pub fn process_next_token(&mut self) -> Option<Token> {
        if let Some(tok) = self.peeked.take() {
            return Some(tok);
        }
        self.produce_next_token()
    }

    /// Returns the next token without consuming it. Calling this twice in a
    /// row without an intervening `process_next_token` returns the same
    /// cached token; it is a contract violation to expect two *different*
    /// tokens from consecutive peeks.
    pub fn peek_next_token(&mut self) -> Option<Token> {
        if self.peeked.is_none() {
            self.peeked = self.produce_next_token();
        }
        self.peeked
    }

    pub fn last_error(&self) -> Option<ErrorCode> {
        self.ctx.last_error()
    }

    pub fn last_number(&self) -> Option<NumberHint> {
        self.ctx.last_number()
    }

    pub fn last_symbol(&self) -> Option<SymbolKind> {
        self.ctx.last_symbol()
    }

    pub fn last_keyword(&self) -> Option<Keyword> {
        self.ctx.last_keyword()
    }

    fn produce_next_token(&mut self) -> Option<Token> {
        // The cursor can step one byte past `len` exactly once, to consume
        // the synthetic sentinel and give the final `EndOfFile` token a
        // `length` of 1 (see `SourceCursor::consume_sentinel`). Once it has,
        // the stream is over.
        if self.ctx.cursor.index() > self.ctx.cursor.len() {
            return None;
        }

        let start = self.ctx.cursor.index();
        self.ctx.begin_token();

        let guessed = match self.ctx.mode {
            ConsumerMode::CLua => {
                let kind = clua::guess_token_type(&self.ctx);
                clua::get_next_token(&mut self.ctx, kind);
                kind
            }
            ConsumerMode::LuaUCapture => {
                let kind = capture::guess_token_type(&self.ctx);
                capture::get_next_token(&mut self.ctx, kind);
                kind
            }
            ConsumerMode::LuaU => luau::process_next_token(&mut self.ctx),
        };

        let end = self.ctx.cursor.index();
        debug_assert!(end > start, "a token must advance the cursor by at least one byte");

        let kind = if self.ctx.emitted_error_this_token() { TokenKind::Error } else { guessed };

        Some(Token::new(kind, start, end - start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(src: &[u8]) -> Vec<Token> {
        let mut lexer = Lexer::new(src);
        let mut out = Vec::new();
        while let Some(tok) = lexer.process_next_token() {
            out.push(tok);
        }
        out
    }

    #[test]
    fn empty_buffer_yields_a_single_end_of_file_token() {
        let toks = collect(b"");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0], Token::new(TokenKind::EndOfFile, 0, 1));
    }

    #[test]
    fn peek_then_process_returns_same_token() {
        let mut lexer = Lexer::new(b"foo");
        let peeked = lexer.peek_next_token().unwrap();
        let processed = lexer.process_next_token().unwrap();
        assert_eq!(peeked, processed);
    }

    #[test]
    fn double_peek_is_stable() {
        let mut lexer = Lexer::new(b"foo bar");
        let first = lexer.peek_next_token().unwrap();
        let second = lexer.peek_next_token().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn range_splits_correctly() {
        let toks = collect(b"1..2");
        assert_eq!(toks.len(), 4);
        assert_eq!(toks[0].kind, TokenKind::Numeric);
        assert_eq!(toks[0].spelling(b"1..2"), b"1");
        assert_eq!(toks[1].kind, TokenKind::Symbol);
        assert_eq!(toks[1].spelling(b"1..2"), b"..");
        assert_eq!(toks[2].kind, TokenKind::Numeric);
        assert_eq!(toks[3].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn error_promotes_final_kind_even_when_guessed_as_symbol() {
        let mut lexer = Lexer::new(b"\x01");
        let tok = lexer.process_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Error);
        assert_eq!(lexer.last_error(), Some(ErrorCode::UnexpectedCharacter));
    }

    #[test]
    fn malformed_number_is_reported_as_error_kind() {
        let mut lexer = Lexer::new(b"0x");
        let tok = lexer.process_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Error);
        assert_eq!(lexer.last_error(), Some(ErrorCode::MalformedNumber));
    }

    #[test]
    fn full_lua_embed_round_trips_through_all_three_modes() {
        let src = b"@Lua []{print(\"x\")}";
        let toks = collect(src);
        let kinds: Vec<TokenKind> = toks.iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&TokenKind::LuaBlock));
        let lua_block = toks.iter().find(|t| t.kind == TokenKind::LuaBlock).unwrap();
        assert_eq!(lua_block.spelling(src), b"{print(\"x\")}");
    }

    #[test]
    fn offsets_are_monotonic_and_end_in_eof() {
        let src = b"int x = 1 + 2;\n";
        let toks = collect(src);
        let mut cursor = 0usize;
        for tok in &toks {
            assert_eq!(tok.offset, cursor);
            assert!(tok.length >= 1);
            cursor += tok.length;
        }
        assert_eq!(cursor, src.len() + 1);
        let last = toks.last().unwrap();
        assert_eq!(last.kind, TokenKind::EndOfFile);
        assert_eq!(last.offset, src.len());
        assert_eq!(last.length, 1);
    }

    #[test]
    fn unclosed_string_is_reported() {
        let mut lexer = Lexer::new(b"\"abc");
        let tok = lexer.process_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Error);
        assert_eq!(lexer.last_error(), Some(ErrorCode::UnclosedString));
    }

    #[test]
    fn identifier_keyword_hint_is_set() {
        let mut lexer = Lexer::new(b"while");
        let tok = lexer.process_next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(lexer.last_keyword(), Some(Keyword::While));
    }

    // ------------------------------------------------------------------
    // property-based invariants, exercised over arbitrary byte buffers
    // ------------------------------------------------------------------

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn offsets_are_contiguous_and_monotonic_for_any_input(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let toks = collect(&bytes);
            let mut cursor = 0usize;
            for tok in &toks {
                prop_assert_eq!(tok.offset, cursor);
                prop_assert!(tok.length >= 1);
                cursor += tok.length;
            }
            prop_assert_eq!(cursor, bytes.len() + 1);
        }

        #[test]
        fn stream_always_ends_with_a_length_one_end_of_file_token(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let toks = collect(&bytes);
            let last = toks.last().unwrap();
            prop_assert_eq!(last.kind, TokenKind::EndOfFile);
            prop_assert_eq!(last.offset, bytes.len());
            prop_assert_eq!(last.length, 1);
        }

        #[test]
        fn spellings_concatenate_back_to_the_input(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let toks = collect(&bytes);
            let mut rebuilt = Vec::new();
            for tok in &toks {
                rebuilt.extend_from_slice(tok.spelling(&bytes));
            }
            prop_assert_eq!(rebuilt, bytes);
        }

        #[test]
        fn peeking_never_advances_past_what_processing_would(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let mut lexer = Lexer::new(&bytes);
            let peeked = lexer.peek_next_token();
            let peeked_again = lexer.peek_next_token();
            prop_assert_eq!(peeked, peeked_again);
            let processed = lexer.process_next_token();
            prop_assert_eq!(peeked, processed);
        }

        #[test]
        fn error_kind_always_carries_an_error_code(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let mut lexer = Lexer::new(&bytes);
            while let Some(tok) = lexer.process_next_token() {
                if tok.kind == TokenKind::Error {
                    prop_assert!(lexer.last_error().is_some());
                }
            }
        }

        #[test]
        fn numeric_kind_always_carries_a_number_hint(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let mut lexer = Lexer::new(&bytes);
            while let Some(tok) = lexer.process_next_token() {
                if tok.kind == TokenKind::Numeric {
                    prop_assert!(lexer.last_number().is_some());
                }
            }
        }
    }
}
