//! Mutable lexer state: cursor, mode, sub-state, and the side-hint channel.

use cluac_util::ErrorCode;

use crate::cursor::SourceCursor;
use crate::keyword::Keyword;
use crate::symbol::SymbolKind;
use crate::token::NumberHint;

/// The active sub-lexer. Switching mode resets both sub-states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumerMode {
    CLua,
    LuaUCapture,
    LuaU,
}

/// Tracks `[`/`]` balance during the `@Ident [...]` capture prologue.
#[derive(Clone, Copy, Debug, Default)]
pub struct LuaUCaptureState {
    pub brace_balance: i32,
    pub met_first_brace: bool,
}

/// Tracks `{`/`}` balance during the embedded `LuaU` body.
#[derive(Clone, Copy, Debug, Default)]
pub struct LuaUCodeState {
    pub brace_balance: i32,
    pub met_first_brace: bool,
}

/// The mutable state threaded through every consumer and mode driver.
///
/// Owns the cursor, the current mode and its sub-state, and the side-hint
/// fields. Side-hints are overwritten per token; `on_emit` traps a second
/// emission within the same token as a programmer error, since the data
/// model guarantees at most one hint per token.
pub struct LexerContext<'a> {
    pub cursor: SourceCursor<'a>,
    pub mode: ConsumerMode,
    pub capture_state: LuaUCaptureState,
    pub code_state: LuaUCodeState,

    last_error: Option<ErrorCode>,
    last_number: Option<NumberHint>,
    last_symbol: Option<SymbolKind>,
    last_keyword: Option<Keyword>,
    has_emitted_hint: bool,
    error_this_token: bool,
}

impl<'a> LexerContext<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        LexerContext {
            cursor: SourceCursor::new(buffer),
            mode: ConsumerMode::CLua,
            capture_state: LuaUCaptureState::default(),
            code_state: LuaUCodeState::default(),
            last_error: None,
            last_number: None,
            last_symbol: None,
            last_keyword: None,
            has_emitted_hint: false,
            error_this_token: false,
        }
    }

    /// Resets the per-token emission guard. Called by the façade before
    /// producing each token.
    pub fn begin_token(&mut self) {
        self.has_emitted_hint = false;
        self.error_this_token = false;
    }

    fn on_emit(&mut self) {
        assert!(!self.has_emitted_hint, "more than one side-hint emitted for a single token");
        self.has_emitted_hint = true;
    }

    pub fn emit_error(&mut self, code: ErrorCode) {
        self.on_emit();
        self.last_error = Some(code);
        self.error_this_token = true;
    }

    /// True if the token currently being produced has already called
    /// `emit_error`: an error always promotes the token's final kind to
    /// `Error`, regardless of what the mode driver originally guessed.
    pub fn emitted_error_this_token(&self) -> bool {
        self.error_this_token
    }

    pub fn emit_number(&mut self, hint: NumberHint) {
        self.on_emit();
        self.last_number = Some(hint);
    }

    pub fn emit_symbol(&mut self, kind: SymbolKind) {
        self.on_emit();
        self.last_symbol = Some(kind);
    }

    pub fn emit_keyword(&mut self, kw: Keyword) {
        self.on_emit();
        self.last_keyword = Some(kw);
    }

    pub fn last_error(&self) -> Option<ErrorCode> {
        self.last_error
    }

    pub fn last_number(&self) -> Option<NumberHint> {
        self.last_number
    }

    pub fn last_symbol(&self) -> Option<SymbolKind> {
        self.last_symbol
    }

    pub fn last_keyword(&self) -> Option<Keyword> {
        self.last_keyword
    }

    /// Switches mode, resetting both sub-states per the invariant that a
    /// mode switch always starts a sub-state fresh.
    pub fn switch_mode(&mut self, mode: ConsumerMode) {
        self.mode = mode;
        self.capture_state = LuaUCaptureState::default();
        self.code_state = LuaUCodeState::default();
    }
}
