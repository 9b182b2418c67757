//! Symbol (operator/punctuation) classification.
//!
//! The lexer resolves multi-byte symbols by maximal munch: starting at the
//! current byte, it extends the candidate slice one byte at a time while a
//! longer match still exists in the table, then commits to the longest
//! spelling that resolved to a known `SymbolKind`.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Plus,
    DoublePlus,
    PlusEqual,
    Minus,
    DoubleMinus,
    MinusEqual,
    Star,
    StarEqual,
    Slash,
    SlashEqual,
    Percent,
    PercentEqual,
    Equal,
    EqualEqual,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    LogicalAnd,
    LogicalOr,
    Bang,
    Dot,
    Range,
    Comma,
    Semicolon,
    Colon,
    Arrow,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    BitLShift,
    BitRShift,
    BitAndEqual,
    BitOrEqual,
    BitXorEqual,
    BitLShiftEqual,
    BitRShiftEqual,
    Question,
    TernaryAssign,
    AtSign,
    Unknown,
}

/// The maximum spelling length in the table; bounds the maximal-munch probe.
pub const MAX_SYMBOL_LEN: usize = 3;

fn build_table() -> FxHashMap<&'static [u8], SymbolKind> {
    use SymbolKind::*;
    let mut map = FxHashMap::default();
    map.insert(&b"++"[..], DoublePlus);
    map.insert(&b"+="[..], PlusEqual);
    map.insert(&b"--"[..], DoubleMinus);
    map.insert(&b"-="[..], MinusEqual);
    map.insert(&b"*="[..], StarEqual);
    map.insert(&b"/="[..], SlashEqual);
    map.insert(&b"%="[..], PercentEqual);
    map.insert(&b"=="[..], EqualEqual);
    map.insert(&b"!="[..], NotEqual);
    map.insert(&b"<="[..], LessEqual);
    map.insert(&b">="[..], GreaterEqual);
    map.insert(&b"&&"[..], LogicalAnd);
    map.insert(&b"||"[..], LogicalOr);
    map.insert(&b"->"[..], Arrow);
    // deliberate addition: the original declares `RANGE` but never maps ".."
    // to it anywhere in `symbol_classifier.hpp` or `lexer.cpp`.
    map.insert(&b".."[..], Range);

    map.insert(&b"&"[..], BitAnd);
    map.insert(&b"|"[..], BitOr);
    map.insert(&b"^"[..], BitXor);
    map.insert(&b"~"[..], BitNot);
    map.insert(&b"<<"[..], BitLShift);
    map.insert(&b">>"[..], BitRShift);

    map.insert(&b"&="[..], BitAndEqual);
    map.insert(&b"|="[..], BitOrEqual);
    map.insert(&b"^="[..], BitXorEqual);
    map.insert(&b"<<="[..], BitLShiftEqual);
    map.insert(&b">>="[..], BitRShiftEqual);

    map.insert(&b"+"[..], Plus);
    map.insert(&b"-"[..], Minus);
    map.insert(&b"*"[..], Star);
    map.insert(&b"/"[..], Slash);
    map.insert(&b"%"[..], Percent);
    map.insert(&b"="[..], Equal);
    map.insert(&b"<"[..], Less);
    map.insert(&b">"[..], Greater);
    map.insert(&b"!"[..], Bang);
    map.insert(&b"."[..], Dot);
    map.insert(&b","[..], Comma);
    map.insert(&b";"[..], Semicolon);
    map.insert(&b":"[..], Colon);
    map.insert(&b"("[..], LParen);
    map.insert(&b")"[..], RParen);
    map.insert(&b"{"[..], LBrace);
    map.insert(&b"}"[..], RBrace);
    map.insert(&b"["[..], LBracket);
    map.insert(&b"]"[..], RBracket);
    map.insert(&b"?"[..], Question);
    map.insert(&b"?="[..], TernaryAssign);
    map.insert(&b"@"[..], AtSign);
    map
}

static SYMBOL_TABLE: OnceLock<FxHashMap<&'static [u8], SymbolKind>> = OnceLock::new();

fn symbol_table() -> &'static FxHashMap<&'static [u8], SymbolKind> {
    SYMBOL_TABLE.get_or_init(build_table)
}

/// Looks up an exact byte-sequence spelling. Returns `Unknown` for no match,
/// never for malformed input (there is no malformed input at this level).
pub fn lookup_symbol(fragment: &[u8]) -> SymbolKind {
    if fragment.is_empty() {
        return SymbolKind::Unknown;
    }
    *symbol_table().get(fragment).unwrap_or(&SymbolKind::Unknown)
}
