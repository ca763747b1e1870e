use crate::error::JsonError;
use crate::parser::state::{Action, MatcherContext, Transition};
use crate::transcode::{Sink, Utf16ToUtf8, Utf32ToUtf8};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    NormalChar,
    Escape,
    Hex1,
    Hex2,
    Hex3,
    Hex4,
}

/// Matches a JSON string literal, from the opening `"` (already consumed by
/// whoever pushed this matcher) to the closing `"`, accumulating decoded
/// UTF-8 bytes into `buf`.
///
/// `object_key` selects whether the completed buffer is delivered to the
/// backend via [`Action::Key`] or [`Action::StringValue`] (spec.md §4.2,
/// "Property keys are strings in object_key mode").
#[derive(Debug, Clone)]
pub(crate) struct StringMatcher {
    phase: Phase,
    object_key: bool,
    buf: Vec<u8>,
    hex_value: u16,
    /// Persists across `\uXXXX` escapes so a high surrogate in one escape
    /// can combine with a low surrogate in the next (spec.md §4.2).
    utf16: Utf16ToUtf8,
    utf32: Utf32ToUtf8,
}

struct BufSink<'a> {
    buf: &'a mut Vec<u8>,
    max_length: usize,
    overflowed: bool,
}

impl Sink<u8> for BufSink<'_> {
    fn push(&mut self, unit: u8) {
        if self.buf.len() >= self.max_length {
            self.overflowed = true;
            return;
        }
        self.buf.push(unit);
    }
}

impl StringMatcher {
    pub(crate) fn new(object_key: bool) -> Self {
        Self {
            phase: Phase::NormalChar,
            object_key,
            buf: Vec::new(),
            hex_value: 0,
            utf16: Utf16ToUtf8::new(),
            utf32: Utf32ToUtf8::new(),
        }
    }

    /// A `\uXXXX` escape decoded a high surrogate with no low surrogate yet
    /// to pair it with; any other input is ill-formed at this point
    /// (spec.md §4.2, "mid-sequence ... followed by a non-\u character").
    fn mid_surrogate(&self) -> bool {
        self.utf16.partial()
    }

    pub(crate) fn offer(&mut self, cp: Option<u32>, ctx: MatcherContext) -> Transition {
        let Some(c) = cp else {
            return Transition::Error(JsonError::ExpectedCloseQuote);
        };
        match self.phase {
            Phase::NormalChar => self.normal_char(c, ctx),
            Phase::Escape => self.escape(c, ctx),
            Phase::Hex1 | Phase::Hex2 | Phase::Hex3 | Phase::Hex4 => self.hex_digit(c, ctx),
        }
    }

    fn finish(&mut self) -> Action {
        let text = String::from_utf8(std::mem::take(&mut self.buf))
            .expect("transcoders only ever emit well-formed UTF-8");
        if self.object_key {
            Action::Key(text)
        } else {
            Action::StringValue(text)
        }
    }

    fn normal_char(&mut self, c: u32, ctx: MatcherContext) -> Transition {
        if c == '"' as u32 {
            if self.mid_surrogate() {
                return Transition::Error(JsonError::BadUnicodeCodePoint);
            }
            return Transition::done(self.finish());
        }
        if c == '\\' as u32 {
            if self.mid_surrogate() {
                return Transition::Error(JsonError::BadUnicodeCodePoint);
            }
            self.phase = Phase::Escape;
            return Transition::consumed();
        }
        if c <= 0x1F {
            return Transition::Error(JsonError::BadUnicodeCodePoint);
        }
        if self.mid_surrogate() {
            return Transition::Error(JsonError::BadUnicodeCodePoint);
        }
        let mut sink = BufSink { buf: &mut self.buf, max_length: ctx.max_length, overflowed: false };
        self.utf32.consume(c, &mut sink);
        if sink.overflowed {
            return Transition::Error(JsonError::StringTooLong);
        }
        Transition::consumed()
    }

    fn escape(&mut self, c: u32, ctx: MatcherContext) -> Transition {
        let literal = match c {
            c if c == '"' as u32 => Some(b'"'),
            c if c == '\\' as u32 => Some(b'\\'),
            c if c == '/' as u32 => Some(b'/'),
            c if c == 'b' as u32 => Some(0x08),
            c if c == 'f' as u32 => Some(0x0C),
            c if c == 'n' as u32 => Some(b'\n'),
            c if c == 'r' as u32 => Some(b'\r'),
            c if c == 't' as u32 => Some(b'\t'),
            _ => None,
        };
        if let Some(byte) = literal {
            if self.mid_surrogate() {
                return Transition::Error(JsonError::BadUnicodeCodePoint);
            }
            let mut sink = BufSink { buf: &mut self.buf, max_length: ctx.max_length, overflowed: false };
            sink.push(byte);
            if sink.overflowed {
                return Transition::Error(JsonError::StringTooLong);
            }
            self.phase = Phase::NormalChar;
            return Transition::consumed();
        }
        if c == 'u' as u32 {
            self.hex_value = 0;
            self.phase = Phase::Hex1;
            return Transition::consumed();
        }
        Transition::Error(JsonError::InvalidEscapeChar)
    }

    fn hex_digit(&mut self, c: u32, ctx: MatcherContext) -> Transition {
        let Some(digit) = (u8::try_from(c).ok()).and_then(|b| (b as char).to_digit(16)) else {
            return Transition::Error(JsonError::InvalidHexChar);
        };
        self.hex_value = (self.hex_value << 4) | (digit as u16);
        self.phase = match self.phase {
            Phase::Hex1 => Phase::Hex2,
            Phase::Hex2 => Phase::Hex3,
            Phase::Hex3 => Phase::Hex4,
            Phase::Hex4 => {
                let unit = self.hex_value;
                let mut sink =
                    BufSink { buf: &mut self.buf, max_length: ctx.max_length, overflowed: false };
                self.utf16.consume(unit, &mut sink);
                if sink.overflowed {
                    return Transition::Error(JsonError::StringTooLong);
                }
                Phase::NormalChar
            }
            _ => unreachable!(),
        };
        Transition::consumed()
    }
}
