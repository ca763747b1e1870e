//! RFC 3986 URI parsing, composition, reference resolution, and the
//! percent-encoding / Punycode codecs that sit alongside it
//! (spec.md §4.4, "URI").

mod codec;
mod dotseg;
mod grammar;
mod idna;
mod parts;
mod pctencode;
mod punycode;
mod resolve;

pub use codec::{decode_parts, encode_parts};
pub use dotseg::remove_dot_segments;
pub use grammar::{compose, split, split_reference};
pub use idna::{decode_host, encode_host};
pub use parts::{Authority, Parts, Path};
pub use pctencode::{needs_pctdecode, needs_pctencode, pctdecode, pctencode, str_needs_pctencode, EncodeSet, PctDecode};
pub use punycode::{decode as punycode_decode, encode as punycode_encode};
pub use resolve::{join, join_strs};
