use crate::parser::state::{is_json_whitespace, Transition};

/// Consumes runs of JSON insignificant whitespace (space, tab, LF, CR).
/// Pushed ahead of any matcher that needs to skip leading whitespace before
/// its real token; pops itself, without consuming, at the first
/// non-whitespace code point.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct WhitespaceMatcher;

impl WhitespaceMatcher {
    pub(crate) fn offer(&mut self, cp: Option<u32>) -> Transition {
        match cp {
            Some(c) if is_json_whitespace(c) => Transition::consumed(),
            _ => Transition::reject(),
        }
    }
}
