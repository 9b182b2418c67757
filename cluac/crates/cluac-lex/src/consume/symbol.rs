//! Symbol (operator/punctuation) consumption by maximal munch.

use cluac_util::ErrorCode;

use crate::char_class::{classify_host_byte, CharClass};
use crate::context::LexerContext;
use crate::symbol::{self, SymbolKind};

/// Greedily extends the candidate slice while a longer prefix still
/// resolves to a known `SymbolKind`, then commits to the longest match.
pub fn consume_symbol_token(ctx: &mut LexerContext) {
    debug_assert_eq!(classify_host_byte(ctx.cursor.current()), CharClass::Symbol);

    let start = ctx.cursor.index();
    let mut best = SymbolKind::Unknown;

    while classify_host_byte(ctx.cursor.current()) == CharClass::Symbol {
        let candidate_len = ctx.cursor.index() - start + 1;
        let candidate = ctx.cursor.slice(start, candidate_len);
        let kind = symbol::lookup_symbol(candidate);

        if kind == SymbolKind::Unknown {
            break;
        }
        best = kind;
        ctx.cursor.consume(1);
    }

    if best == SymbolKind::Unknown {
        ctx.emit_error(ErrorCode::UnknownSymbol);
    } else {
        ctx.emit_symbol(best);
    }
}
