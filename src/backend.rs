//! The consumer/backend contract.
//!
//! A [`Parser`](crate::parser::Parser) is generic over a `Backend`
//! implementation the same way `peejay::parser<Backend>` is generic over a
//! backend type meeting its `backend` concept (see
//! `original_source/include/peejay/concepts.hpp`): there is no runtime
//! polymorphism on this edge, only monomorphization, matching the design
//! note in spec.md §9 ("Generic consumer").
//!
//! This crate does not ship a DOM or null backend — both are named as
//! out-of-scope external collaborators in spec.md §1. A minimal recording
//! backend used purely for tests lives under `tests/` and `#[cfg(test)]`.

/// Receives events as the parser recognizes tokens in the input.
///
/// Every method returns `Result<(), Self::Error>`; a non-`Ok` return
/// becomes the parser's sticky error and all further input is discarded
/// (spec.md §5, "Cancellation").
pub trait Backend {
    /// The error type a backend may report from any callback. Propagated
    /// as [`crate::error::ParseError::Backend`].
    type Error: std::fmt::Debug;

    /// The type returned by [`Backend::result`], called once from
    /// `Parser::eof()`.
    type Output;

    /// Whether this backend accepts floating-point values at all. When
    /// `false`, any number requiring a fractional part or exponent becomes
    /// `JsonError::NumberOutOfRange` instead of reaching [`Backend::float_value`],
    /// matching the `float_type = none` policy in spec.md §6.
    const FLOAT_ENABLED: bool = true;

    fn string_value(&mut self, value: &str) -> Result<(), Self::Error>;
    fn key(&mut self, value: &str) -> Result<(), Self::Error>;
    fn integer_value(&mut self, value: i64) -> Result<(), Self::Error>;

    /// Called for a number with a non-zero fractional part, or one the
    /// integer near-equality check (spec.md §4.2, "end-of-number") could
    /// not round to an integer. Never called when `FLOAT_ENABLED` is
    /// `false`.
    fn float_value(&mut self, value: f64) -> Result<(), Self::Error>;

    fn boolean_value(&mut self, value: bool) -> Result<(), Self::Error>;
    fn null_value(&mut self) -> Result<(), Self::Error>;

    fn begin_array(&mut self) -> Result<(), Self::Error>;
    fn end_array(&mut self) -> Result<(), Self::Error>;

    fn begin_object(&mut self) -> Result<(), Self::Error>;
    fn end_object(&mut self) -> Result<(), Self::Error>;

    /// Called once from `Parser::eof()`. Its return value becomes the
    /// parser's own return value, regardless of whether an error was
    /// latched during the parse (spec.md §7, item 1).
    fn result(&mut self) -> Self::Output;
}
