use crate::error::JsonError;
use crate::parser::matchers::root::RootMatcher;
use crate::parser::matchers::string::StringMatcher;
use crate::parser::matchers::whitespace::WhitespaceMatcher;
use crate::parser::state::{is_json_whitespace, Action, Matcher, Transition};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Just pushed; consumes the opening `{`.
    Start,
    /// Expecting either `}` or the first key.
    FirstKey,
    /// Expecting a key (after a comma); `}` is not allowed here.
    Key,
    /// Expecting `:` after a key.
    Colon,
    /// Expecting a member value.
    Value,
    /// Expecting `,` or `}` after a member.
    Comma,
}

/// Matches a JSON object, per spec.md §4.2's "Object" description. Property
/// keys are parsed by a [`StringMatcher`] in `object_key` mode so the
/// backend receives them via `Action::Key` rather than `Action::StringValue`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ObjectMatcher {
    phase: Phase,
}

impl ObjectMatcher {
    pub(crate) fn new() -> Self {
        Self { phase: Phase::Start }
    }

    pub(crate) fn offer(&mut self, cp: Option<u32>) -> Transition {
        match self.phase {
            Phase::Start => {
                debug_assert_eq!(cp, Some('{' as u32));
                self.phase = Phase::FirstKey;
                Transition::Consumed { pop: false, action: Some(Action::BeginObject) }
            }
            Phase::FirstKey => match cp {
                Some(c) if is_json_whitespace(c) => Transition::Push(Matcher::Whitespace(WhitespaceMatcher)),
                Some(c) if c == '}' as u32 => {
                    Transition::Consumed { pop: true, action: Some(Action::EndObject) }
                }
                Some(c) if c == '"' as u32 => {
                    self.phase = Phase::Colon;
                    Transition::Push(Matcher::Str(StringMatcher::new(true)))
                }
                _ => Transition::Error(JsonError::ExpectedObjectKey),
            },
            Phase::Key => match cp {
                Some(c) if is_json_whitespace(c) => Transition::Push(Matcher::Whitespace(WhitespaceMatcher)),
                Some(c) if c == '"' as u32 => {
                    self.phase = Phase::Colon;
                    Transition::Push(Matcher::Str(StringMatcher::new(true)))
                }
                _ => Transition::Error(JsonError::ExpectedObjectKey),
            },
            Phase::Colon => match cp {
                Some(c) if is_json_whitespace(c) => Transition::Push(Matcher::Whitespace(WhitespaceMatcher)),
                Some(c) if c == ':' as u32 => {
                    self.phase = Phase::Value;
                    Transition::consumed()
                }
                _ => Transition::Error(JsonError::ExpectedColon),
            },
            Phase::Value => match cp {
                Some(c) if is_json_whitespace(c) => Transition::Push(Matcher::Whitespace(WhitespaceMatcher)),
                Some(_) => {
                    self.phase = Phase::Comma;
                    Transition::Push(Matcher::Root(RootMatcher::default()))
                }
                None => Transition::Error(JsonError::ExpectedObjectMember),
            },
            Phase::Comma => match cp {
                Some(c) if is_json_whitespace(c) => Transition::Push(Matcher::Whitespace(WhitespaceMatcher)),
                Some(c) if c == ',' as u32 => {
                    self.phase = Phase::Key;
                    Transition::consumed()
                }
                Some(c) if c == '}' as u32 => {
                    Transition::Consumed { pop: true, action: Some(Action::EndObject) }
                }
                _ => Transition::Error(JsonError::ExpectedObjectMember),
            },
        }
    }
}
