//! End-to-end tests driving `Parser` with a small recording backend, the
//! same way `unit_tests/callbacks.hpp` exercises `peejay::parser` in the
//! original and the teacher's own `tests/test.rs` exercises `JsonParser`.

use corejay::backend::Backend;
use corejay::error::{JsonError, ParseError};
use corejay::options::ParserOptionsBuilder;
use corejay::parser::Parser;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    String(String),
    Key(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
    BeginArray,
    EndArray,
    BeginObject,
    EndObject,
}

#[derive(Default)]
struct RecordingBackend {
    events: Vec<Event>,
}

impl Backend for RecordingBackend {
    type Error = std::convert::Infallible;
    type Output = Vec<Event>;

    fn string_value(&mut self, value: &str) -> Result<(), Self::Error> {
        self.events.push(Event::String(value.to_string()));
        Ok(())
    }

    fn key(&mut self, value: &str) -> Result<(), Self::Error> {
        self.events.push(Event::Key(value.to_string()));
        Ok(())
    }

    fn integer_value(&mut self, value: i64) -> Result<(), Self::Error> {
        self.events.push(Event::Integer(value));
        Ok(())
    }

    fn float_value(&mut self, value: f64) -> Result<(), Self::Error> {
        self.events.push(Event::Float(value));
        Ok(())
    }

    fn boolean_value(&mut self, value: bool) -> Result<(), Self::Error> {
        self.events.push(Event::Boolean(value));
        Ok(())
    }

    fn null_value(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Null);
        Ok(())
    }

    fn begin_array(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::BeginArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::EndArray);
        Ok(())
    }

    fn begin_object(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::BeginObject);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::EndObject);
        Ok(())
    }

    fn result(&mut self) -> Self::Output {
        std::mem::take(&mut self.events)
    }
}

fn parse(input: &str) -> (Vec<Event>, Option<ParseError<std::convert::Infallible>>) {
    let mut parser = Parser::new(RecordingBackend::default());
    parser.feed_bytes(input.as_bytes());
    let events = parser.eof();
    (events, parser.last_error().copied())
}

#[test]
fn parses_a_nested_document() {
    let (events, error) = parse(r#"{"a": [1, -2.5, true, false, null, "x\n"], "b": {}}"#);
    assert_eq!(error, None);
    assert_eq!(
        events,
        vec![
            Event::BeginObject,
            Event::Key("a".to_string()),
            Event::BeginArray,
            Event::Integer(1),
            Event::Float(-2.5),
            Event::Boolean(true),
            Event::Boolean(false),
            Event::Null,
            Event::String("x\n".to_string()),
            Event::EndArray,
            Event::Key("b".to_string()),
            Event::BeginObject,
            Event::EndObject,
            Event::EndObject,
        ]
    );
}

#[test]
fn literal_non_ascii_character_round_trips() {
    let (events, error) = parse(r#""😀""#);
    assert_eq!(error, None);
    assert_eq!(events, vec![Event::String("😀".to_string())]);
}

#[test]
fn uxxxx_surrogate_pair_escape_decodes_to_one_character() {
    let (events, error) = parse("\"\\uD83D\\uDE00\"");
    assert_eq!(error, None);
    assert_eq!(events, vec![Event::String("😀".to_string())]);
}

#[test]
fn trailing_comma_in_array_is_an_error() {
    let (_, error) = parse("[1,]");
    assert!(matches!(error, Some(ParseError::Syntax(JsonError::ExpectedToken))));
}

#[test]
fn unterminated_string_is_an_error() {
    let (_, error) = parse("\"abc");
    assert!(matches!(error, Some(ParseError::Syntax(JsonError::ExpectedCloseQuote))));
}

#[test]
fn deeply_nested_array_past_the_configured_depth_is_rejected() {
    let mut parser = Parser::with_options(
        RecordingBackend::default(),
        ParserOptionsBuilder::default().with_max_stack_depth(4).build(),
    );
    parser.feed_bytes(b"[[[[1]]]]");
    parser.eof();
    assert!(matches!(parser.last_error(), Some(ParseError::Syntax(JsonError::NestingTooDeep))));
}

#[test]
fn streaming_mode_accepts_a_sequence_of_values() {
    let mut parser = Parser::with_options(
        RecordingBackend::default(),
        ParserOptionsBuilder::default().with_streaming(true).build(),
    );
    parser.feed_bytes(b"1 2 3");
    let events = parser.eof();
    assert_eq!(events, vec![Event::Integer(1), Event::Integer(2), Event::Integer(3)]);
    assert_eq!(parser.last_error(), None);
}

#[test]
fn non_streaming_mode_rejects_a_second_top_level_value() {
    let (_, error) = parse("1 2");
    assert!(matches!(error, Some(ParseError::Syntax(JsonError::UnexpectedExtraInput))));
}

#[test]
fn string_longer_than_max_length_is_an_error() {
    let mut parser = Parser::with_options(
        RecordingBackend::default(),
        ParserOptionsBuilder::default().with_max_length(4).build(),
    );
    parser.feed_bytes(b"\"abcdef\"");
    parser.eof();
    assert!(matches!(parser.last_error(), Some(ParseError::Syntax(JsonError::StringTooLong))));
}

#[test]
fn escaped_chars_longer_than_max_length_is_an_error() {
    let mut parser = Parser::with_options(
        RecordingBackend::default(),
        ParserOptionsBuilder::default().with_max_length(4).build(),
    );
    parser.feed_bytes(b"\"\\n\\n\\n\\n\\n\"");
    parser.eof();
    assert!(matches!(parser.last_error(), Some(ParseError::Syntax(JsonError::StringTooLong))));
}

#[test]
fn crlf_line_endings_advance_the_line_counter_once() {
    let mut parser = Parser::new(RecordingBackend::default());
    parser.feed_bytes(b"[\r\n1\r\n]");
    parser.eof();
    assert_eq!(parser.input_pos().line, 3);
}
