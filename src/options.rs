/// Runtime-configurable resource bounds for [`Parser`](crate::parser::Parser).
///
/// Bounds that affect the *type* of values the parser emits (the integer and
/// float types, and whether floats are accepted at all) are not here: they
/// are expressed as associated types on [`Backend`](crate::backend::Backend),
/// the same way the teacher's generic number handling is expressed through
/// `num_traits` bounds rather than a runtime switch. Everything else that
/// spec.md's policy record lists is a plain field below, built with
/// [`ParserOptionsBuilder`] the way [`actson`'s `JsonParserOptionsBuilder`]
/// builds `JsonParserOptions`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    pub(crate) max_length: usize,
    pub(crate) max_stack_depth: usize,
    pub(crate) pos_tracking: bool,
    pub(crate) streaming: bool,
}

impl Default for ParserOptions {
    /// Returns default parser options: 64-character strings, a stack depth
    /// of 8, position tracking on, and a single top-level value per parse.
    fn default() -> Self {
        Self {
            max_length: 64,
            max_stack_depth: 8,
            pos_tracking: true,
            streaming: false,
        }
    }
}

impl ParserOptions {
    /// The maximum number of decoded characters a string value or key may
    /// contain before `string_too_long` is raised.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// The maximum depth of the parse stack before `nesting_too_deep` is
    /// raised.
    pub fn max_stack_depth(&self) -> usize {
        self.max_stack_depth
    }

    /// `true` if the parser tracks `(line, column)` positions.
    pub fn pos_tracking(&self) -> bool {
        self.pos_tracking
    }

    /// `true` if the parser accepts a stream of multiple top-level JSON
    /// values rather than exactly one.
    pub fn streaming(&self) -> bool {
        self.streaming
    }
}

/// A builder for [`ParserOptions`].
///
/// ```rust
/// use corejay::options::ParserOptionsBuilder;
///
/// let options = ParserOptionsBuilder::default()
///     .with_max_stack_depth(16)
///     .with_streaming(true)
///     .build();
/// assert_eq!(options.max_stack_depth(), 16);
/// assert!(options.streaming());
/// ```
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserOptionsBuilder {
    options: ParserOptions,
}

impl ParserOptionsBuilder {
    /// Set the maximum decoded string length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.options.max_length = max_length;
        self
    }

    /// Set the maximum parse stack depth. Must be at least 2 (one slot for
    /// the `eof` matcher, one for the top-level value).
    pub fn with_max_stack_depth(mut self, max_stack_depth: usize) -> Self {
        self.options.max_stack_depth = max_stack_depth;
        self
    }

    /// Enable or disable `(line, column)` position tracking.
    pub fn with_pos_tracking(mut self, pos_tracking: bool) -> Self {
        self.options.pos_tracking = pos_tracking;
        self
    }

    /// Enable streaming mode: after a complete top-level value, the parser
    /// re-arms to accept another one instead of only trailing whitespace.
    /// Values must be self-delimiting (arrays, objects, strings) or
    /// separated by whitespace, the same rule the teacher's own streaming
    /// mode documents.
    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.options.streaming = streaming;
        self
    }

    /// Build the final [`ParserOptions`].
    pub fn build(self) -> ParserOptions {
        self.options
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.max_length(), 64);
        assert_eq!(options.max_stack_depth(), 8);
        assert!(options.pos_tracking());
        assert!(!options.streaming());
    }

    #[test]
    fn builder_overrides() {
        let options = ParserOptionsBuilder::default()
            .with_max_length(16)
            .with_max_stack_depth(4)
            .with_pos_tracking(false)
            .with_streaming(true)
            .build();
        assert_eq!(options.max_length(), 16);
        assert_eq!(options.max_stack_depth(), 4);
        assert!(!options.pos_tracking());
        assert!(options.streaming());
    }
}
