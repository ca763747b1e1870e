//! A streaming, push-driven JSON parser, a set of Unicode transcoders, and a
//! URI parser/composer, grounded on `peejay`
//! (<https://github.com/paulhuggett/peejay>) and written in the idiom of
//! `actson` (<https://github.com/michel-kraemer/actson-rs>), this crate's
//! structural template.
//!
//! # JSON parsing
//!
//! [`parser::Parser`] drives an application-supplied [`backend::Backend`] as
//! it recognizes tokens in a byte stream, the same push-consumer shape
//! `actson::JsonParser` offers through [`JsonEvent`](https://docs.rs/actson)
//! pulls, inverted: here the parser calls you.
//!
//! ```
//! use corejay::backend::Backend;
//! use corejay::parser::Parser;
//!
//! #[derive(Default)]
//! struct SumBackend {
//!     sum: i64,
//! }
//!
//! impl Backend for SumBackend {
//!     type Error = std::convert::Infallible;
//!     type Output = i64;
//!
//!     fn string_value(&mut self, _value: &str) -> Result<(), Self::Error> { Ok(()) }
//!     fn key(&mut self, _value: &str) -> Result<(), Self::Error> { Ok(()) }
//!     fn integer_value(&mut self, value: i64) -> Result<(), Self::Error> {
//!         self.sum += value;
//!         Ok(())
//!     }
//!     fn float_value(&mut self, _value: f64) -> Result<(), Self::Error> { Ok(()) }
//!     fn boolean_value(&mut self, _value: bool) -> Result<(), Self::Error> { Ok(()) }
//!     fn null_value(&mut self) -> Result<(), Self::Error> { Ok(()) }
//!     fn begin_array(&mut self) -> Result<(), Self::Error> { Ok(()) }
//!     fn end_array(&mut self) -> Result<(), Self::Error> { Ok(()) }
//!     fn begin_object(&mut self) -> Result<(), Self::Error> { Ok(()) }
//!     fn end_object(&mut self) -> Result<(), Self::Error> { Ok(()) }
//!     fn result(&mut self) -> Self::Output { self.sum }
//! }
//!
//! let mut parser = Parser::new(SumBackend::default());
//! parser.feed_bytes(b"[1, 2, 39]");
//! assert_eq!(parser.eof(), 42);
//! ```
//!
//! # Unicode transcoding
//!
//! [`transcode`] provides UTF-8/16/32 transcoders composed from the same
//! small set of primitives, plus [`transcode::ByteTranscoder`] for
//! BOM-sniffed byte streams of unknown encoding.
//!
//! # URIs
//!
//! [`uri`] parses and composes RFC 3986 URIs and URI references, with
//! percent-encoding and Punycode/IDNA host codecs.

pub mod backend;
pub mod coord;
pub mod error;
pub mod options;
pub mod parser;
pub mod transcode;
pub mod uri;
