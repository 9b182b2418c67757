//! Keyword classification.
//!
//! An identifier's spelling is looked up against this table after a full
//! identifier run has been consumed; anything not present is `Unknown`
//! (an ordinary user identifier, not an error).

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Return,
    Const,
    Static,
    Template,
    Class,
    Struct,
    Enum,
    Union,
    Public,
    Private,
    Protected,
    Virtual,
    Inline,
    Using,
    Namespace,
    Volatile,
    Mutable,
    Extern,
    Friend,
    New,
    Delete,
    True,
    False,
    Nil,
    Typedef,
    Auto,
    Decltype,
    Constexpr,
    Consteval,
    StaticAssert,
    Sizeof,
    Lua,
    Unknown,
}

fn build_table() -> FxHashMap<&'static str, Keyword> {
    use Keyword::*;
    let mut map = FxHashMap::default();
    map.insert("if", If);
    map.insert("else", Else);
    map.insert("for", For);
    map.insert("while", While);
    map.insert("do", Do);
    map.insert("switch", Switch);
    map.insert("case", Case);
    map.insert("default", Default);
    map.insert("break", Break);
    map.insert("continue", Continue);
    map.insert("return", Return);
    map.insert("const", Const);
    map.insert("static", Static);
    map.insert("template", Template);
    map.insert("class", Class);
    // "Struct", not "struct" -- the original table's literal spelling.
    map.insert("Struct", Struct);
    map.insert("enum", Enum);
    map.insert("union", Union);
    map.insert("public", Public);
    map.insert("private", Private);
    map.insert("protected", Protected);
    map.insert("virtual", Virtual);
    map.insert("inline", Inline);
    map.insert("using", Using);
    map.insert("namespace", Namespace);
    map.insert("volatile", Volatile);
    map.insert("mutable", Mutable);
    map.insert("extern", Extern);
    map.insert("friend", Friend);
    map.insert("new", New);
    map.insert("delete", Delete);
    map.insert("true", True);
    map.insert("false", False);
    map.insert("nullptr", Nil);
    map.insert("typedef", Typedef);
    map.insert("auto", Auto);
    map.insert("decltype", Decltype);
    map.insert("constexpr", Constexpr);
    map.insert("consteval", Consteval);
    map.insert("static_assert", StaticAssert);
    map.insert("sizeof", Sizeof);
    map.insert("Lua", Lua);
    map
}

static KEYWORD_TABLE: OnceLock<FxHashMap<&'static str, Keyword>> = OnceLock::new();

fn keyword_table() -> &'static FxHashMap<&'static str, Keyword> {
    KEYWORD_TABLE.get_or_init(build_table)
}

pub fn lookup_keyword(spelling: &str) -> Keyword {
    if spelling.is_empty() {
        return Keyword::Unknown;
    }
    *keyword_table().get(spelling).unwrap_or(&Keyword::Unknown)
}
