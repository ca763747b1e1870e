use super::compose::Utf16ToUtf8;
use super::utf8::{Utf32ToUtf8, Utf8ToUtf32};
use super::Sink;

/// The encoding a [`ByteTranscoder`] has settled on, or `Unknown` while still
/// inspecting a possible byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Unknown,
    Utf8,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    /// Saw `EF`, waiting for `BB`.
    Utf8Bom1,
    /// Saw `EF BB`, waiting for `BF`.
    Utf8Bom2,
    /// Saw `FE`, waiting for `FF` (UTF-16 BE BOM).
Utf16BeBom1,
    /// Saw `FF`, waiting to decide between UTF-16 LE and UTF-32 LE.
    FfSeen,
    /// Saw `FF FE`, waiting for `00` (first byte of a possible UTF-32 LE BOM).
    Utf32Or16LeBom2,
    /// Saw `FF FE 00`, waiting for a second `00`.
    Utf32LeBom3,
    /// Saw `00`, waiting for `00` (UTF-32 BE BOM byte 2).
    Utf32BeBom1,
    /// Saw `00 00`, waiting for `FE`.
    Utf32BeBom2,
    /// Saw `00 00 FE`, waiting for `FF`.
    Utf32BeBom3,
    /// Committed to UTF-8; bytes are fed straight to the UTF-8 transcoder.
    RunUtf8,
    /// Committed to UTF-16 BE; `hi` holds a buffered high byte, if any.
    Run16Be { hi: Option<u8> },
    /// Committed to UTF-16 LE; `lo` holds a buffered low byte, if any.
    Run16Le { lo: Option<u8> },
    /// Committed to UTF-32 BE; `buf` holds the bytes seen so far this unit.
    Run32Be { buf: [u8; 4], len: u8 },
    /// Committed to UTF-32 LE; `buf` holds the bytes seen so far this unit.
    Run32Le { buf: [u8; 4], len: u8 },
}

/// Detects a leading UTF-8/16/32 byte-order mark (or its absence) and
/// transcodes the remaining bytes to UTF-8, the way
/// `transcoder<std::byte, ToEncoding>` does in
/// `original_source/include/peejay/json/icubaby.hpp`, specialised here to a
/// UTF-8 destination since that is the only encoding this crate's JSON
/// parser consumes.
#[derive(Debug, Clone)]
pub struct ByteTranscoder {
    state: State,
    encoding: Encoding,
    utf8_decode: Utf8ToUtf32,
    utf8_encode: Utf32ToUtf8,
    from16: Utf16ToUtf8,
    well_formed: bool,
}

impl Default for ByteTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteTranscoder {
    pub fn new() -> Self {
        Self {
            state: State::Start,
            encoding: Encoding::Unknown,
            utf8_decode: Utf8ToUtf32::new(),
            utf8_encode: Utf32ToUtf8::new(),
            from16: Utf16ToUtf8::new(),
            well_formed: true,
        }
    }

    pub fn selected_encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn well_formed(&self) -> bool {
        self.well_formed && self.utf8_decode.well_formed() && self.from16.well_formed()
    }

    /// Accepts one input byte, pushing any resulting UTF-8 bytes to `sink`.
    pub fn consume(&mut self, byte: u8, sink: &mut impl Sink<u8>) {
        match self.state {
            State::Start => self.on_start(byte, sink),
            State::Utf8Bom1 => {
                if byte == 0xBB {
                    self.state = State::Utf8Bom2;
                } else {
                    self.commit_utf8(&[0xEF, byte], sink);
                }
            }
            State::Utf8Bom2 => {
                if byte == 0xBF {
                    self.encoding = Encoding::Utf8;
                    self.state = State::RunUtf8;
                } else {
                    self.commit_utf8(&[0xEF, 0xBB, byte], sink);
                }
            }
            State::Utf16BeBom1 => {
                if byte == 0xFF {
                    self.encoding = Encoding::Utf16Be;
                    self.state = State::Run16Be { hi: None };
                } else {
                    self.commit_utf8(&[0xFE], sink);
                    self.run_utf8_byte(byte, sink);
                }
            }
            State::FfSeen => {
                if byte == 0xFE {
                    self.state = State::Utf32Or16LeBom2;
                } else {
                    self.commit_utf8(&[0xFF], sink);
                    self.run_utf8_byte(byte, sink);
                }
            }
            State::Utf32Or16LeBom2 => {
                if byte == 0x00 {
                    self.state = State::Utf32LeBom3;
                } else {
                    // Not a UTF-32 LE BOM: commit to UTF-16 LE, treating the
                    // buffered `FF FE` as its BOM, and feed this byte as the
                    // low byte of the first real code unit.
                    self.encoding = Encoding::Utf16Le;
                    self.state = State::Run16Le { lo: None };
                    self.run16_le_byte(byte, sink);
                }
            }
            State::Utf32LeBom3 => {
                if byte == 0x00 {
                    self.encoding = Encoding::Utf32Le;
                    self.state = State::Run32Le { buf: [0; 4], len: 0 };
                } else {
                    // `FF FE 00` followed by something other than `00`: this
                    // was UTF-16 LE all along (BOM `FF FE`, then a code unit
                    // whose low byte was `00`).
                    self.encoding = Encoding::Utf16Le;
                    self.state = State::Run16Le { lo: None };
                    self.run16_le_byte(0x00, sink);
                    self.run16_le_byte(byte, sink);
                }
            }
            State::Utf32BeBom1 => {
                if byte == 0x00 {
                    self.state = State::Utf32BeBom2;
                } else {
                    self.commit_utf8(&[0x00], sink);
                    self.run_utf8_byte(byte, sink);
                }
            }
            State::Utf32BeBom2 => {
                if byte == 0xFE {
                    self.state = State::Utf32BeBom3;
                } else {
                    self.commit_utf8(&[0x00, 0x00], sink);
                    self.run_utf8_byte(byte, sink);
                }
            }
            State::Utf32BeBom3 => {
                if byte == 0xFF {
                    self.encoding = Encoding::Utf32Be;
                    self.state = State::Run32Be { buf: [0; 4], len: 0 };
                } else {
                    self.commit_utf8(&[0x00, 0x00, 0xFE], sink);
                    self.run_utf8_byte(byte, sink);
                }
            }
            State::RunUtf8 => self.run_utf8_byte(byte, sink),
            State::Run16Be { .. } => self.run16_be_byte(byte, sink),
            State::Run16Le { .. } => self.run16_le_byte(byte, sink),
            State::Run32Be { .. } => self.run32_be_byte(byte, sink),
            State::Run32Le { .. } => self.run32_le_byte(byte, sink),
        }
    }

    /// Call once after the final byte.
    pub fn finish(&mut self, sink: &mut impl Sink<u8>) {
        match self.state {
            State::Start => {}
            State::Utf8Bom1 => self.commit_utf8(&[0xEF], sink),
            State::Utf8Bom2 => self.commit_utf8(&[0xEF, 0xBB], sink),
            State::Utf16BeBom1 => self.commit_utf8(&[0xFE], sink),
            State::FfSeen => self.commit_utf8(&[0xFF], sink),
            State::Utf32Or16LeBom2 => {
                // Input ended immediately after a complete `FF FE` BOM: a
                // zero-length UTF-16 LE stream. Nothing buffered to flush.
                self.encoding = Encoding::Utf16Le;
                let _ = sink;
            }
            State::Utf32LeBom3 => {
                // Input ended as `FF FE 00`: a UTF-16 LE stream (BOM `FF FE`)
                // whose final code unit supplied only its low byte (`00`).
                self.encoding = Encoding::Utf16Le;
                self.well_formed = false;
                let _ = sink;
            }
            State::Utf32BeBom1 => self.commit_utf8(&[0x00], sink),
            State::Utf32BeBom2 => self.commit_utf8(&[0x00, 0x00], sink),
            State::Utf32BeBom3 => self.commit_utf8(&[0x00, 0x00, 0xFE], sink),
            State::RunUtf8 => self.utf8_finish(sink),
            State::Run16Be { hi } => {
                if hi.is_some() {
                    self.well_formed = false;
                }
                self.from16.finish(sink);
            }
            State::Run16Le { lo } => {
                if lo.is_some() {
                    self.well_formed = false;
                }
                self.from16.finish(sink);
            }
            State::Run32Be { len, .. } | State::Run32Le { len, .. } => {
                if len != 0 {
                    self.well_formed = false;
                }
            }
        }
    }

    fn on_start(&mut self, byte: u8, sink: &mut impl Sink<u8>) {
        match byte {
            0xEF => self.state = State::Utf8Bom1,
            0xFE => self.state = State::Utf16BeBom1,
            0xFF => self.state = State::FfSeen,
            0x00 => self.state = State::Utf32BeBom1,
            _ => self.commit_utf8(&[byte], sink),
        }
    }

    /// Commits to plain UTF-8 (no BOM, or a failed BOM candidate), replaying
    /// any buffered bytes and switching the state machine to `RunUtf8`.
    fn commit_utf8(&mut self, buffered: &[u8], sink: &mut impl Sink<u8>) {
        self.encoding = Encoding::Utf8;
        self.state = State::RunUtf8;
        for &b in buffered {
            self.run_utf8_byte(b, sink);
        }
    }

    fn run_utf8_byte(&mut self, byte: u8, sink: &mut impl Sink<u8>) {
        // Route through the UTF-8→UTF-32→UTF-8 pipeline so malformed
        // sequences become a replacement character instead of passing
        // raw invalid bytes through.
        let mut code_points: arrayvec::ArrayVec<u32, 1> = arrayvec::ArrayVec::new();
        self.utf8_decode.consume(byte, &mut code_points);
        for cp in code_points {
            self.utf8_encode.consume(cp, sink);
        }
    }

    fn utf8_finish(&mut self, sink: &mut impl Sink<u8>) {
        let mut code_points: arrayvec::ArrayVec<u32, 1> = arrayvec::ArrayVec::new();
        self.utf8_decode.finish(&mut code_points);
        for cp in code_points {
            self.utf8_encode.consume(cp, sink);
        }
    }

    fn run16_be_byte(&mut self, byte: u8, sink: &mut impl Sink<u8>) {
        if let State::Run16Be { hi } = self.state {
            match hi {
                None => self.state = State::Run16Be { hi: Some(byte) },
                Some(h) => {
                    let unit = u16::from_be_bytes([h, byte]);
                    self.from16.consume(unit, sink);
                    self.state = State::Run16Be { hi: None };
                }
            }
        }
    }

    fn run16_le_byte(&mut self, byte: u8, sink: &mut impl Sink<u8>) {
        if let State::Run16Le { lo } = self.state {
            match lo {
                None => self.state = State::Run16Le { lo: Some(byte) },
                Some(l) => {
                    let unit = u16::from_le_bytes([l, byte]);
                    self.from16.consume(unit, sink);
                    self.state = State::Run16Le { lo: None };
                }
            }
        }
    }

    fn run32_be_byte(&mut self, byte: u8, sink: &mut impl Sink<u8>) {
        if let State::Run32Be { mut buf, mut len } = self.state {
            buf[len as usize] = byte;
            len += 1;
            if len == 4 {
                let code_point = u32::from_be_bytes(buf);
                let mut to8 = super::utf8::Utf32ToUtf8::new();
                to8.consume(code_point, sink);
                self.state = State::Run32Be { buf: [0; 4], len: 0 };
            } else {
                self.state = State::Run32Be { buf, len };
            }
        }
    }

    fn run32_le_byte(&mut self, byte: u8, sink: &mut impl Sink<u8>) {
        if let State::Run32Le { mut buf, mut len } = self.state {
            buf[len as usize] = byte;
            len += 1;
            if len == 4 {
                let code_point = u32::from_le_bytes(buf);
                let mut to8 = super::utf8::Utf32ToUtf8::new();
                to8.consume(code_point, sink);
                self.state = State::Run32Le { buf: [0; 4], len: 0 };
            } else {
                self.state = State::Run32Le { buf, len };
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(bytes: &[u8]) -> (Vec<u8>, Encoding) {
        let mut coder = ByteTranscoder::new();
        let mut out = Vec::new();
        for &b in bytes {
            coder.consume(b, &mut out);
        }
        coder.finish(&mut out);
        (out, coder.selected_encoding())
    }

    #[test]
    fn no_bom_defaults_to_utf8() {
        let (out, encoding) = run(b"hello");
        assert_eq!(out, b"hello");
        assert_eq!(encoding, Encoding::Utf8);
    }

    #[test]
    fn utf8_bom_is_dropped() {
        let mut input = vec![0xEF, 0xBB, 0xBF];
        input.extend_from_slice(b"hi");
        let (out, encoding) = run(&input);
        assert_eq!(out, b"hi");
        assert_eq!(encoding, Encoding::Utf8);
    }

    #[test]
    fn utf16_be_bom_is_transcoded() {
        let mut input = vec![0xFE, 0xFF];
        input.extend_from_slice(&0x0041u16.to_be_bytes());
        let (out, encoding) = run(&input);
        assert_eq!(out, b"A");
        assert_eq!(encoding, Encoding::Utf16Be);
    }

    #[test]
    fn utf16_le_bom_is_transcoded() {
        let mut input = vec![0xFF, 0xFE];
        input.extend_from_slice(&0x0041u16.to_le_bytes());
        let (out, encoding) = run(&input);
        assert_eq!(out, b"A");
        assert_eq!(encoding, Encoding::Utf16Le);
    }

    #[test]
    fn utf32_le_bom_is_transcoded() {
        let mut input = vec![0xFF, 0xFE, 0x00, 0x00];
        input.extend_from_slice(&0x41u32.to_le_bytes());
        let (out, encoding) = run(&input);
        assert_eq!(out, b"A");
        assert_eq!(encoding, Encoding::Utf32Le);
    }

    #[test]
    fn utf32_be_bom_is_transcoded() {
        let mut input = vec![0x00, 0x00, 0xFE, 0xFF];
        input.extend_from_slice(&0x41u32.to_be_bytes());
        let (out, encoding) = run(&input);
        assert_eq!(out, b"A");
        assert_eq!(encoding, Encoding::Utf32Be);
    }

    #[test]
    fn ff_fe_ambiguity_prefers_utf16_le_without_following_00_00() {
        // FF FE followed by a non-zero byte: UTF-16 LE stream, not UTF-32 LE.
        let input = vec![0xFF, 0xFE, 0x41, 0x00];
        let (out, encoding) = run(&input);
        assert_eq!(out, b"A");
        assert_eq!(encoding, Encoding::Utf16Le);
    }
}
