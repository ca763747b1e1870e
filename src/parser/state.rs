//! Shared vocabulary the matchers in `parser::matchers` use to talk to the
//! driving loop in `parser::mod`.
//!
//! Each matcher offers one code point at a time and reports a [`Transition`];
//! the driver in `Parser::feed` interprets it, maintaining the stack. This
//! plays the role `peejay::parser::process` plays for its `std::variant` of
//! matcher objects, adapted so matchers never call the backend directly —
//! since `Matcher` is a plain (non-generic) enum shared by every
//! `Parser<B>`, backend calls are made once, centrally, in the driver.

use super::matchers::{
    array::ArrayMatcher, eof::EofMatcher, number::NumberMatcher, object::ObjectMatcher,
    root::RootMatcher, string::StringMatcher, token::TokenMatcher, whitespace::WhitespaceMatcher,
};
use crate::error::JsonError;

/// An event a matcher reports when it completes; applied to the backend by
/// the driver and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    BeginArray,
    EndArray,
    BeginObject,
    EndObject,
    Key(String),
    StringValue(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

/// The outcome of offering one code point to the matcher on top of the stack.
pub(crate) enum Transition {
    /// The code point was consumed. `pop` indicates the matcher is now done.
    Consumed { pop: bool, action: Option<Action> },
    /// The code point was not consumed. Pop this matcher, optionally
    /// emitting `action`, and offer the same code point again to whatever is
    /// now on top of the stack.
    Reject { action: Option<Action> },
    /// The code point was not consumed. Pop this matcher, push `next`, and
    /// offer the same code point to `next`.
    Replace(Matcher),
    /// The code point was not consumed. Push `next` without popping this
    /// matcher, and offer the same code point to `next`.
    Push(Matcher),
    /// A syntactic or resource-bound error. Latched by the driver.
    Error(JsonError),
}

impl Transition {
    pub(crate) fn consumed() -> Self {
        Transition::Consumed { pop: false, action: None }
    }

    pub(crate) fn done(action: Action) -> Self {
        Transition::Consumed { pop: true, action: Some(action) }
    }

    pub(crate) fn reject() -> Self {
        Transition::Reject { action: None }
    }
}

/// One stack frame. Every group named in spec.md's state table is
/// represented by exactly one variant here; frames with no per-instance
/// state beyond a handful of fields are stored inline rather than behind an
/// extra indirection, since (unlike `peejay`'s `std::variant`) a Rust enum
/// is already exactly as large as its largest variant.
pub(crate) enum Matcher {
    Whitespace(WhitespaceMatcher),
    Root(RootMatcher),
    Token(TokenMatcher),
    Str(StringMatcher),
    Number(NumberMatcher),
    Array(ArrayMatcher),
    Object(ObjectMatcher),
    Eof(EofMatcher),
}

/// Resource bounds and policy a matcher needs while running: the decoded
/// string length cap and whether the backend accepts floats at all.
#[derive(Clone, Copy)]
pub(crate) struct MatcherContext {
    pub(crate) max_length: usize,
    pub(crate) float_enabled: bool,
    pub(crate) streaming: bool,
}

impl Matcher {
    pub(crate) fn offer(&mut self, cp: Option<u32>, ctx: MatcherContext) -> Transition {
        match self {
            Matcher::Whitespace(m) => m.offer(cp),
            Matcher::Root(m) => m.offer(cp),
            Matcher::Token(m) => m.offer(cp),
            Matcher::Str(m) => m.offer(cp, ctx),
            Matcher::Number(m) => m.offer(cp, ctx),
            Matcher::Array(m) => m.offer(cp),
            Matcher::Object(m) => m.offer(cp),
            Matcher::Eof(m) => m.offer(cp, ctx.streaming),
        }
    }
}

pub(crate) fn is_json_whitespace(cp: u32) -> bool {
    matches!(cp, 0x20 | 0x09 | 0x0A | 0x0D)
}
