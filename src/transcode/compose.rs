use arrayvec::ArrayVec;

use super::utf16::{Utf16ToUtf32, Utf32ToUtf16};
use super::utf8::{Utf32ToUtf8, Utf8ToUtf32};
use super::Sink;

impl<const N: usize> Sink<u32> for ArrayVec<u32, N> {
    fn push(&mut self, unit: u32) {
        // The bound on N below guarantees a pending sequence never produces
        // more code points than the buffer can hold (see each macro
        // invocation's capacity argument).
        let _ = ArrayVec::try_push(self, unit);
    }
}

/// Composes a source→UTF-32 transcoder and a UTF-32→destination transcoder
/// through a small internal buffer, the way `icubaby::transcoder` chains two
/// specializations via its `triangulator` alias in
/// `original_source/include/peejay/json/icubaby.hpp`.
macro_rules! triangulating {
    ($name:ident, $src_half:ty, $dest_half:ty, $src_unit:ty, $dest_unit:ty, $buf_cap:literal) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name {
            to32: $src_half,
            from32: $dest_half,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    to32: <$src_half>::new(),
                    from32: <$dest_half>::new(),
                }
            }

            pub fn consume(&mut self, unit: $src_unit, sink: &mut impl Sink<$dest_unit>) {
                let mut stage: ArrayVec<u32, $buf_cap> = ArrayVec::new();
                self.to32.consume(unit, &mut stage);
                for cp in stage.drain(..) {
                    self.from32.consume(cp, sink);
                }
            }

            pub fn finish(&mut self, sink: &mut impl Sink<$dest_unit>) {
                let mut stage: ArrayVec<u32, $buf_cap> = ArrayVec::new();
                self.to32.finish(&mut stage);
                for cp in stage.drain(..) {
                    self.from32.consume(cp, sink);
                }
                self.from32.finish(sink);
            }

            /// The conjunction of both halves' well-formedness.
            pub fn well_formed(&self) -> bool {
                self.to32.well_formed() && self.from32.well_formed()
            }

            /// Whether the source half has a pending partial sequence.
            pub fn partial(&self) -> bool {
                self.to32.partial()
            }
        }
    };
}

// Buffer capacity is 1 for a UTF-8 source (at most one code point per
// `consume`) and 2 for a UTF-16 source (a lone high surrogate followed by a
// non-surrogate yields a replacement plus the passed-through unit).
triangulating!(Utf8ToUtf16, Utf8ToUtf32, Utf32ToUtf16, u8, u16, 1);
triangulating!(Utf16ToUtf8, Utf16ToUtf32, Utf32ToUtf8, u16, u8, 2);
triangulating!(Utf8ToUtf8, Utf8ToUtf32, Utf32ToUtf8, u8, u8, 1);
triangulating!(Utf16ToUtf16, Utf16ToUtf32, Utf32ToUtf16, u16, u16, 2);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn utf8_to_utf16_round_trip() {
        let mut coder = Utf8ToUtf16::new();
        let mut units = Vec::new();
        for b in "héllo".as_bytes() {
            coder.consume(*b, &mut units);
        }
        coder.finish(&mut units);
        let expected: Vec<u16> = "héllo".encode_utf16().collect();
        assert_eq!(units, expected);
        assert!(coder.well_formed());
    }

    #[test]
    fn utf16_to_utf8_round_trip() {
        let mut coder = Utf16ToUtf8::new();
        let mut bytes = Vec::new();
        for u in "😀".encode_utf16() {
            coder.consume(u, &mut bytes);
        }
        coder.finish(&mut bytes);
        assert_eq!(bytes, "😀".as_bytes());
        assert!(coder.well_formed());
    }

    #[test]
    fn utf8_to_utf8_passes_through() {
        let mut coder = Utf8ToUtf8::new();
        let mut bytes = Vec::new();
        for b in "abc".as_bytes() {
            coder.consume(*b, &mut bytes);
        }
        coder.finish(&mut bytes);
        assert_eq!(bytes, b"abc");
    }

    #[test]
    fn utf16_to_utf16_detects_ill_formed() {
        let mut coder = Utf16ToUtf16::new();
        let mut out = Vec::new();
        coder.consume(0xDE00, &mut out);
        coder.finish(&mut out);
        assert!(!coder.well_formed());
    }
}
