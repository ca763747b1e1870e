use thiserror::Error;

/// Syntactic and resource-bound errors the JSON parser can raise.
///
/// These correspond 1:1 to the matcher-level failures described by the
/// parser's grammar: each matcher reports exactly one of these when it
/// cannot continue, and the parser latches the first one it sees.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("unrecognized token")]
    UnrecognizedToken,
    #[error("expected token")]
    ExpectedToken,
    #[error("expected array member")]
    ExpectedArrayMember,
    #[error("expected object member")]
    ExpectedObjectMember,
    #[error("expected object key")]
    ExpectedObjectKey,
    #[error("expected colon")]
    ExpectedColon,
    #[error("expected digits")]
    ExpectedDigits,
    #[error("expected close quote")]
    ExpectedCloseQuote,
    #[error("invalid escape character")]
    InvalidEscapeChar,
    #[error("invalid hex character")]
    InvalidHexChar,
    #[error("bad unicode code point")]
    BadUnicodeCodePoint,
    #[error("number out of range")]
    NumberOutOfRange,
    #[error("string too long")]
    StringTooLong,
    #[error("nesting too deep")]
    NestingTooDeep,
    #[error("unexpected extra input")]
    UnexpectedExtraInput,
}

/// The parser's sticky error slot: either a syntax/resource-bound error
/// raised by a matcher, or a status propagated from the backend.
///
/// Mirrors `peejay::parser::set_error`, which stores whichever of these two
/// kinds of failure is reported first and then discards all further input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseError<E> {
    Syntax(JsonError),
    Backend(E),
}

impl<E: std::fmt::Display> std::fmt::Display for ParseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Syntax(e) => write!(f, "{e}"),
            ParseError::Backend(e) => write!(f, "{e}"),
        }
    }
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for ParseError<E> {}

/// RFC 3492 Bootstring / Punycode failures.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PunycodeError {
    #[error("bad punycode input")]
    BadInput,
    #[error("punycode value overflow")]
    Overflow,
}
