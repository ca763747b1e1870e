use crate::error::JsonError;
use crate::parser::state::{is_json_whitespace, Matcher, Transition};
use crate::parser::matchers::root::RootMatcher;

/// Sits at the bottom of the stack, beneath the top-level value matcher.
/// Accepts trailing whitespace unconditionally; what happens at the first
/// non-whitespace trailing code point depends on `streaming` (spec.md §4.2,
/// "Eof" / §9 "Streaming mode"): re-arm for another top-level value, or
/// raise `unexpected_extra_input`.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct EofMatcher;

impl EofMatcher {
    pub(crate) fn offer(&mut self, cp: Option<u32>, streaming: bool) -> Transition {
        match cp {
            None => Transition::Consumed { pop: true, action: None },
            Some(c) if is_json_whitespace(c) => Transition::consumed(),
            Some(_) if streaming => Transition::Push(Matcher::Root(RootMatcher::default())),
            Some(_) => Transition::Error(JsonError::UnexpectedExtraInput),
        }
    }
}
