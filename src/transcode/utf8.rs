use super::{is_surrogate, Sink, MAX_CODE_POINT, REPLACEMENT_CHAR};

/// Takes a sequence of UTF-32 code points and converts them to UTF-8.
///
/// Grounded directly on `transcoder<char32_t, char8>` in
/// `original_source/include/peejay/json/icubaby.hpp`.
#[derive(Debug, Clone, Copy)]
pub struct Utf32ToUtf8 {
    well_formed: bool,
}

impl Default for Utf32ToUtf8 {
    fn default() -> Self {
        Self::new()
    }
}

const BYTE_1_OF_2: u8 = 0b1100_0000;
const BYTE_1_OF_3: u8 = 0b1110_0000;
const BYTE_1_OF_4: u8 = 0b1111_0000;
const CONTINUATION: u8 = 0b1000_0000;
const UTF8_SHIFT: u32 = 6;
const UTF8_MASK: u32 = (1 << UTF8_SHIFT) - 1;

impl Utf32ToUtf8 {
    pub fn new() -> Self {
        Self { well_formed: true }
    }

    /// Accepts a single UTF-32 code point, pushing the resulting UTF-8 bytes
    /// to `sink`.
    pub fn consume(&mut self, code_point: u32, sink: &mut impl Sink<u8>) {
        if code_point < 0x80 {
            sink.push(code_point as u8);
        } else if code_point < 0x800 {
            self.write2(code_point, sink);
        } else if is_surrogate(code_point) {
            self.not_well_formed(sink);
        } else if code_point < 0x10000 {
            self.write3(code_point, sink);
        } else if code_point <= MAX_CODE_POINT {
            self.write4(code_point, sink);
        } else {
            self.not_well_formed(sink);
        }
    }

    /// UTF-32→UTF-8 never buffers a partial code point, so this is a no-op.
    pub fn finish(&mut self, _sink: &mut impl Sink<u8>) {}

    pub fn well_formed(&self) -> bool {
        self.well_formed
    }

    pub fn partial(&self) -> bool {
        false
    }

    fn write_continuation(number: u8, code_point: u32, sink: &mut impl Sink<u8>) {
        if number == 0 {
            return;
        }
        let shift = UTF8_SHIFT * u32::from(number - 1);
        let byte = (((code_point >> shift) & UTF8_MASK) as u8) | CONTINUATION;
        sink.push(byte);
        Self::write_continuation(number - 1, code_point, sink);
    }

    fn write2(&mut self, code_point: u32, sink: &mut impl Sink<u8>) {
        sink.push(((code_point >> UTF8_SHIFT) as u8) | BYTE_1_OF_2);
        Self::write_continuation(1, code_point, sink);
    }

    fn write3(&mut self, code_point: u32, sink: &mut impl Sink<u8>) {
        sink.push(((code_point >> (UTF8_SHIFT * 2)) as u8) | BYTE_1_OF_3);
        Self::write_continuation(2, code_point, sink);
    }

    fn write4(&mut self, code_point: u32, sink: &mut impl Sink<u8>) {
        sink.push(((code_point >> (UTF8_SHIFT * 3)) as u8) | BYTE_1_OF_4);
        Self::write_continuation(3, code_point, sink);
    }

    fn not_well_formed(&mut self, sink: &mut impl Sink<u8>) {
        self.well_formed = false;
        debug_assert!(!is_surrogate(REPLACEMENT_CHAR));
        self.consume(REPLACEMENT_CHAR, sink);
    }
}

const ACCEPT: u8 = 0;
const REJECT: u8 = 12;

/// The Hoehrmann UTF-8 DFA: 256 byte→class entries followed by 108
/// `(state, class) → state` transition entries. Reproduced byte-for-byte
/// from `icubaby`'s `utf8d_` table.
#[rustfmt::skip]
static UTF8D: [u8; 364] = [
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,  9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,
    7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,  7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,
    8,8,2,2,2,2,2,2,2,2,2,2,2,2,2,2,  2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,
    10,3,3,3,3,3,3,3,3,3,3,3,3,4,3,3, 11,6,6,6,5,8,8,8,8,8,8,8,8,8,8,8,

    0,12,24,36,60,96,84,12,12,12,48,72, 12,12,12,12,12,12,12,12,12,12,12,12,
    12, 0,12,12,12,12,12, 0,12, 0,12,12, 12,24,12,12,12,12,12,24,12,24,12,12,
    12,12,12,12,12,12,12,24,12,12,12,12, 12,24,12,12,12,12,12,12,12,24,12,12,
    12,12,12,12,12,12,12,36,12,36,12,12, 12,36,12,12,12,12,12,36,12,36,12,12,
    12,36,12,12,12,12,12,12,12,12,12,12,
];

/// Takes a sequence of UTF-8 bytes and converts them to UTF-32.
///
/// Grounded directly on `transcoder<char8, char32_t>` in
/// `original_source/include/peejay/json/icubaby.hpp`.
#[derive(Debug, Clone, Copy)]
pub struct Utf8ToUtf32 {
    code_point: u32,
    well_formed: bool,
    state: u8,
}

impl Default for Utf8ToUtf32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Utf8ToUtf32 {
    pub fn new() -> Self {
        Self {
            code_point: 0,
            well_formed: true,
            state: ACCEPT,
        }
    }

    /// Accepts a single UTF-8 byte, pushing a UTF-32 code point to `sink`
    /// whenever one completes.
    pub fn consume(&mut self, byte: u8, sink: &mut impl Sink<u32>) {
        let class = UTF8D[byte as usize];
        self.code_point = if self.state != ACCEPT {
            (u32::from(byte) & 0x3F) | (self.code_point << 6)
        } else {
            (0xFFu32 >> class) & u32::from(byte)
        };
        let idx = 256 + self.state as usize + class as usize;
        self.state = UTF8D[idx];
        match self.state {
            ACCEPT => sink.push(self.code_point),
            REJECT => {
                self.well_formed = false;
                self.state = ACCEPT;
                sink.push(REPLACEMENT_CHAR);
            }
            _ => {}
        }
    }

    /// Call once after the final byte. Flushes a pending partial sequence as
    /// a replacement character.
    pub fn finish(&mut self, sink: &mut impl Sink<u32>) {
        if self.state != ACCEPT {
            self.state = REJECT;
            sink.push(REPLACEMENT_CHAR);
            self.well_formed = false;
        }
    }

    pub fn well_formed(&self) -> bool {
        self.well_formed
    }

    pub fn partial(&self) -> bool {
        self.state != ACCEPT
    }
}
