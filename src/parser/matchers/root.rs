use crate::error::JsonError;
use crate::parser::matchers::array::ArrayMatcher;
use crate::parser::matchers::number::NumberMatcher;
use crate::parser::matchers::object::ObjectMatcher;
use crate::parser::matchers::string::StringMatcher;
use crate::parser::matchers::token::{TokenMatcher, FALSE, NULL, TRUE};
use crate::parser::matchers::whitespace::WhitespaceMatcher;
use crate::parser::state::{Action, Matcher, Transition};

/// Dispatches on the first non-whitespace code point to decide which value
/// matcher parses it, per spec.md §4.2's "Root" description. Pushed wherever
/// a single JSON value is expected: at the top level, and by the array and
/// object matchers for each element or member value.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RootMatcher {
    skipped_whitespace: bool,
}

impl RootMatcher {
    pub(crate) fn offer(&mut self, cp: Option<u32>) -> Transition {
        if !self.skipped_whitespace {
            self.skipped_whitespace = true;
            return Transition::Push(Matcher::Whitespace(WhitespaceMatcher));
        }
        let Some(c) = cp else {
            return Transition::Error(JsonError::ExpectedToken);
        };
        let next = match c {
            c if c == '-' as u32 || c.is_ascii_digit_cp() => Matcher::Number(NumberMatcher::new()),
            c if c == '"' as u32 => Matcher::Str(StringMatcher::new(false)),
            c if c == 't' as u32 => Matcher::Token(TokenMatcher::new(TRUE, Action::Boolean(true))),
            c if c == 'f' as u32 => Matcher::Token(TokenMatcher::new(FALSE, Action::Boolean(false))),
            c if c == 'n' as u32 => Matcher::Token(TokenMatcher::new(NULL, Action::Null)),
            c if c == '[' as u32 => Matcher::Array(ArrayMatcher::new()),
            c if c == '{' as u32 => Matcher::Object(ObjectMatcher::new()),
            _ => return Transition::Error(JsonError::ExpectedToken),
        };
        Transition::Replace(next)
    }
}

trait AsciiDigit {
    fn is_ascii_digit_cp(&self) -> bool;
}

impl AsciiDigit for u32 {
    fn is_ascii_digit_cp(&self) -> bool {
        (b'0' as u32..=b'9' as u32).contains(self)
    }
}
