//! The closed set of lexical error codes a token can carry.

/// The closed set of lexical error kinds a `Token::Error` can carry.
///
/// This is a plain, `Copy` tag rather than a `std::error::Error` impl: the
/// lexer never throws it, it records one in `LexerContext::last_error` as a
/// side-hint alongside an `Error` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnknownSymbol,
    UnexpectedCharacter,
    UnexpectedTokenType,
    InvalidByte,
    TruncatedUnicodeSequence,
    TruncatedNumberSequence,
    MalformedNumber,
    UnclosedComment,
    UnclosedString,
    UnclosedChar,
    InvalidCharCode,
    TooLongChar,
    UnclosedLuaBlock,
}

impl ErrorCode {
    /// Stable numeric id, used by the CLI's `error code: <id>` line.
    pub fn code_id(self) -> u8 {
        match self {
            ErrorCode::UnknownSymbol => 0,
            ErrorCode::UnexpectedCharacter => 1,
            ErrorCode::UnexpectedTokenType => 2,
            ErrorCode::InvalidByte => 3,
            ErrorCode::TruncatedUnicodeSequence => 4,
            ErrorCode::TruncatedNumberSequence => 5,
            ErrorCode::MalformedNumber => 6,
            ErrorCode::UnclosedComment => 7,
            ErrorCode::UnclosedString => 8,
            ErrorCode::UnclosedChar => 9,
            ErrorCode::InvalidCharCode => 10,
            ErrorCode::TooLongChar => 11,
            ErrorCode::UnclosedLuaBlock => 12,
        }
    }
}
