//! A streaming, push-driven JSON parser built around a stack of [`Matcher`]
//! frames, one per nested array/object/value, the same structural idea as
//! `peejay::parser`'s `std::variant`-based matcher stack. Unlike the
//! teacher's flat state-transition table in `parser.rs`, frames here are
//! pushed and popped explicitly; see `state.rs` for why.
//!
//! Bytes are fed with [`Parser::feed_bytes`] the way the teacher's
//! [`JsonFeeder`](https://docs.rs/actson) is fed, except there is no separate
//! feeder object or backpressure: a [`Parser`] decodes UTF-8 and drives its
//! [`Backend`] in the same call.

mod matchers;
mod state;

use crate::backend::Backend;
use crate::coord::Coord;
use crate::error::{JsonError, ParseError};
use crate::options::ParserOptions;
use crate::transcode::Utf8ToUtf32;
use arrayvec::ArrayVec;
use matchers::eof::EofMatcher;
use matchers::root::RootMatcher;
use state::{Action, Matcher, MatcherContext, Transition};

/// Drives a [`Backend`] from a stream of JSON-encoded UTF-8 bytes.
///
/// `Parser` is generic over its backend; there is no object-safety concern
/// here since nothing about the matcher stack is generic (see `state.rs`).
pub struct Parser<B: Backend> {
    backend: B,
    stack: Vec<Matcher>,
    /// One entry per `stack` frame: the cursor position as it stood the
    /// moment that frame was pushed, i.e. the start of whatever token that
    /// frame is matching. Kept in lockstep with `stack` (same length,
    /// updated on every push/pop), mirroring `matcher_pos_` in
    /// `original_source/include/peejay/parser.hpp`, which is set to the
    /// cursor position on every matcher push and pop.
    token_coords: Vec<Coord>,
    options: ParserOptions,
    decoder: Utf8ToUtf32,
    coord: Coord,
    pending_cr: bool,
    error: Option<ParseError<B::Error>>,
}

impl<B: Backend> Parser<B> {
    /// Creates a parser with default [`ParserOptions`].
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, ParserOptions::default())
    }

    /// Creates a parser with explicit [`ParserOptions`].
    pub fn with_options(backend: B, options: ParserOptions) -> Self {
        Self {
            backend,
            stack: vec![Matcher::Eof(EofMatcher), Matcher::Root(RootMatcher::default())],
            token_coords: vec![Coord::START, Coord::START],
            options,
            decoder: Utf8ToUtf32::new(),
            coord: Coord::START,
            pending_cr: false,
            error: None,
        }
    }

    /// The current cursor `(line, column)` position, updated as input is
    /// consumed. Pinned at `(1, 1)` when [`ParserOptions::pos_tracking`] is
    /// disabled. Matches `parser::input_pos()` in
    /// `original_source/include/peejay/parser.hpp`.
    pub fn input_pos(&self) -> Coord {
        self.coord
    }

    /// The position at which the matcher currently on top of the stack
    /// started — the start of the token still being matched, not the
    /// cursor. Matches `parser::pos()` in
    /// `original_source/include/peejay/parser.hpp`: an error raised partway
    /// through a multi-character token (e.g. several characters into an
    /// unrecognized keyword, or deep into an out-of-range number) reports
    /// where that token began, not wherever the cursor had advanced to.
    pub fn pos(&self) -> Coord {
        self.token_coords.last().copied().unwrap_or(self.coord)
    }

    /// The first error raised during parsing, if any. Once set, further
    /// input is silently discarded (spec.md §5, "Cancellation").
    pub fn last_error(&self) -> Option<&ParseError<B::Error>> {
        self.error.as_ref()
    }

    /// Feeds a chunk of UTF-8 bytes. Ill-formed byte sequences are replaced
    /// with U+FFFD by the underlying transcoder rather than rejected, the
    /// same "malformed in, replacement out" recovery used throughout the
    /// rest of this crate's transcoders.
    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if self.error.is_some() {
                return;
            }
            let mut stage: ArrayVec<u32, 1> = ArrayVec::new();
            self.decoder.consume(byte, &mut stage);
            for cp in stage.drain(..) {
                self.feed_code_point(Some(cp));
            }
        }
    }

    /// Signals the end of input, flushes any pending decoder state, drains
    /// the matcher stack, and returns [`Backend::result`]. The backend's
    /// result is always returned, even if an error was latched during the
    /// parse (spec.md §7, item 1) — callers should check [`Parser::last_error`]
    /// first if that distinction matters.
    pub fn eof(&mut self) -> B::Output {
        if self.error.is_none() {
            let mut stage: ArrayVec<u32, 1> = ArrayVec::new();
            self.decoder.finish(&mut stage);
            for cp in stage.drain(..) {
                self.feed_code_point(Some(cp));
            }
        }
        if self.error.is_none() {
            self.feed_code_point(None);
        }
        self.backend.result()
    }

    /// Offers one code point (or `None` for end-of-input) to the stack,
    /// following `Transition::Reject`/`Replace`/`Push` until some matcher
    /// truly consumes it or the parse fails.
    fn feed_code_point(&mut self, cp: Option<u32>) {
        if self.error.is_some() {
            return;
        }
        let ctx = MatcherContext {
            max_length: self.options.max_length(),
            float_enabled: B::FLOAT_ENABLED,
            streaming: self.options.streaming(),
        };
        loop {
            let Some(top) = self.stack.last_mut() else {
                return;
            };
            let transition = top.offer(cp, ctx);
            match transition {
                Transition::Consumed { pop, action } => {
                    if let Some(action) = action {
                        if let Err(e) = self.apply(action) {
                            self.error = Some(ParseError::Backend(e));
                            return;
                        }
                    }
                    if pop {
                        self.stack.pop();
                        self.token_coords.pop();
                    }
                    if let Some(c) = cp {
                        self.advance_coord(c);
                    }
                    return;
                }
                Transition::Reject { action } => {
                    if let Some(action) = action {
                        if let Err(e) = self.apply(action) {
                            self.error = Some(ParseError::Backend(e));
                            return;
                        }
                    }
                    self.stack.pop();
                    self.token_coords.pop();
                }
                Transition::Replace(next) => {
                    self.stack.pop();
                    self.token_coords.pop();
                    self.stack.push(next);
                    self.token_coords.push(self.coord);
                }
                Transition::Push(next) => {
                    if self.stack.len() >= self.options.max_stack_depth() {
                        self.error = Some(ParseError::Syntax(JsonError::NestingTooDeep));
                        return;
                    }
                    self.stack.push(next);
                    self.token_coords.push(self.coord);
                }
                Transition::Error(e) => {
                    self.error = Some(ParseError::Syntax(e));
                    return;
                }
            }
        }
    }

    fn apply(&mut self, action: Action) -> Result<(), B::Error> {
        match action {
            Action::BeginArray => self.backend.begin_array(),
            Action::EndArray => self.backend.end_array(),
            Action::BeginObject => self.backend.begin_object(),
            Action::EndObject => self.backend.end_object(),
            Action::Key(s) => self.backend.key(&s),
            Action::StringValue(s) => self.backend.string_value(&s),
            Action::Integer(v) => self.backend.integer_value(v),
            Action::Float(v) => self.backend.float_value(v),
            Action::Boolean(v) => self.backend.boolean_value(v),
            Action::Null => self.backend.null_value(),
        }
    }

    /// Centralizes line/column bookkeeping (and CRLF merging via
    /// `pending_cr`) here rather than in `WhitespaceMatcher`, since position
    /// tracking is cross-cutting: every matcher consumes code points, not
    /// just whitespace.
    fn advance_coord(&mut self, cp: u32) {
        if !self.options.pos_tracking() {
            return;
        }
        match cp {
            c if c == '\n' as u32 => {
                if self.pending_cr {
                    self.pending_cr = false;
                } else {
                    self.coord.line += 1;
                    self.coord.column = 1;
                }
            }
            c if c == '\r' as u32 => {
                self.coord.line += 1;
                self.coord.column = 1;
                self.pending_cr = true;
            }
            _ => {
                self.pending_cr = false;
                self.coord.column += 1;
            }
        }
    }
}
