use corejay::transcode::{ByteTranscoder, Encoding, Utf16ToUtf32, Utf32ToUtf16, Utf32ToUtf8, Utf8ToUtf32};

#[test]
fn utf8_to_utf32_to_utf8_round_trips_a_mixed_script_string() {
    let text = "héllo, 世界, 😀";
    let mut to32 = Utf8ToUtf32::new();
    let mut code_points = Vec::new();
    for b in text.as_bytes() {
        to32.consume(*b, &mut code_points);
    }
    to32.finish(&mut code_points);
    assert_eq!(code_points, text.chars().map(|c| c as u32).collect::<Vec<_>>());

    let mut to8 = Utf32ToUtf8::new();
    let mut bytes = Vec::new();
    for cp in &code_points {
        to8.consume(*cp, &mut bytes);
    }
    to8.finish(&mut bytes);
    assert_eq!(bytes, text.as_bytes());
}

#[test]
fn utf32_to_utf16_to_utf32_round_trips_a_character_outside_the_bmp() {
    let cp = '😀' as u32;
    let mut to16 = Utf32ToUtf16::new();
    let mut units = Vec::new();
    to16.consume(cp, &mut units);
    to16.finish(&mut units);
    assert_eq!(units.len(), 2);

    let mut to32 = Utf16ToUtf32::new();
    let mut code_points = Vec::new();
    for u in units {
        to32.consume(u, &mut code_points);
    }
    to32.finish(&mut code_points);
    assert_eq!(code_points, vec![cp]);
}

#[test]
fn byte_transcoder_detects_a_utf16_be_bom() {
    let mut input = vec![0xFE, 0xFF];
    input.extend("hi".encode_utf16().flat_map(|u| u.to_be_bytes()));
    let mut transcoder = ByteTranscoder::new();
    let mut out = Vec::new();
    for b in &input {
        transcoder.consume(*b, &mut out);
    }
    transcoder.finish(&mut out);
    assert_eq!(transcoder.selected_encoding(), Encoding::Utf16Be);
    assert_eq!(out, b"hi");
    assert!(transcoder.well_formed());
}

#[test]
fn byte_transcoder_assumes_utf8_without_a_bom() {
    let mut transcoder = ByteTranscoder::new();
    let mut out = Vec::new();
    for b in "plain".as_bytes() {
        transcoder.consume(*b, &mut out);
    }
    transcoder.finish(&mut out);
    assert_eq!(transcoder.selected_encoding(), Encoding::Utf8);
    assert_eq!(out, b"plain");
}
