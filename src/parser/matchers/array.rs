use crate::error::JsonError;
use crate::parser::matchers::root::RootMatcher;
use crate::parser::matchers::whitespace::WhitespaceMatcher;
use crate::parser::state::{is_json_whitespace, Action, Matcher, Transition};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Just pushed; consumes the opening `[`.
    Start,
    /// Expecting either `]` or the first element.
    FirstElement,
    /// Expecting either `,` or `]` after an element.
    Comma,
    /// Consumed `,`; expecting the next element.
    Element,
}

/// Matches a JSON array, per spec.md §4.2's "Array" description.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArrayMatcher {
    phase: Phase,
}

impl ArrayMatcher {
    pub(crate) fn new() -> Self {
        Self { phase: Phase::Start }
    }

    pub(crate) fn offer(&mut self, cp: Option<u32>) -> Transition {
        match self.phase {
            Phase::Start => {
                debug_assert_eq!(cp, Some('[' as u32));
                self.phase = Phase::FirstElement;
                Transition::Consumed { pop: false, action: Some(Action::BeginArray) }
            }
            Phase::FirstElement => match cp {
                Some(c) if is_json_whitespace(c) => Transition::Push(Matcher::Whitespace(WhitespaceMatcher)),
                Some(c) if c == ']' as u32 => {
                    Transition::Consumed { pop: true, action: Some(Action::EndArray) }
                }
                Some(_) => {
                    self.phase = Phase::Comma;
                    Transition::Push(Matcher::Root(RootMatcher::default()))
                }
                None => Transition::Error(JsonError::ExpectedArrayMember),
            },
            Phase::Comma => match cp {
                Some(c) if is_json_whitespace(c) => Transition::Push(Matcher::Whitespace(WhitespaceMatcher)),
                Some(c) if c == ',' as u32 => {
                    self.phase = Phase::Element;
                    Transition::consumed()
                }
                Some(c) if c == ']' as u32 => {
                    Transition::Consumed { pop: true, action: Some(Action::EndArray) }
                }
                _ => Transition::Error(JsonError::ExpectedArrayMember),
            },
            Phase::Element => match cp {
                Some(c) if is_json_whitespace(c) => Transition::Push(Matcher::Whitespace(WhitespaceMatcher)),
                Some(_) => {
                    self.phase = Phase::Comma;
                    Transition::Push(Matcher::Root(RootMatcher::default()))
                }
                None => Transition::Error(JsonError::ExpectedArrayMember),
            },
        }
    }
}
