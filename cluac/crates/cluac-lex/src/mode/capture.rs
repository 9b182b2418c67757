//! `LuaUCapture` mode: the transient `@Ident [...]` prologue.
//!
//! Tokenizes exactly like host mode, but tracks `[`/`]` balance on every
//! `Symbol` token so the driver can tell when the capture prologue has
//! closed and the embedded block is about to start.

use crate::consume::symbol;
use crate::context::{ConsumerMode, LexerContext};
use crate::mode::clua;
use crate::token::TokenKind;

pub use clua::guess_token_type;

pub fn get_next_token(ctx: &mut LexerContext, kind: TokenKind) {
    match kind {
        TokenKind::Symbol => {
            let current = ctx.cursor.current();
            if current == b'[' {
                ctx.capture_state.met_first_brace = true;
                ctx.capture_state.brace_balance += 1;
            } else if current == b']' {
                ctx.capture_state.met_first_brace = true;
                ctx.capture_state.brace_balance -= 1;
            }
            symbol::consume_symbol_token(ctx);
        }
        _ => clua::get_next_token(ctx, kind),
    }

    if ctx.capture_state.met_first_brace && ctx.capture_state.brace_balance == 0 {
        ctx.switch_mode(ConsumerMode::LuaU);
    }
}
