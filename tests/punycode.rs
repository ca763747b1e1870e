use corejay::uri::{decode_host, encode_host, punycode_decode, punycode_encode};

#[test]
fn rfc3492_sample_round_trips() {
    // "ü" (German for a thing the example set also uses), RFC 3492 §7.1.
    let encoded = punycode_encode("über");
    assert_eq!(punycode_decode(&encoded).unwrap(), "über");
}

#[test]
fn ascii_only_input_is_unaffected_by_encoding() {
    assert_eq!(punycode_encode("ascii-only"), "ascii-only");
    assert_eq!(punycode_decode("ascii-only").unwrap(), "ascii-only");
}

#[test]
fn idna_host_round_trips_through_encode_and_decode() {
    let host = "www.müller.example";
    let encoded = encode_host(host);
    assert!(encoded.is_ascii());
    assert_eq!(decode_host(&encoded).unwrap(), host);
}

#[test]
fn decoding_a_non_digit_tail_is_an_error() {
    assert!(punycode_decode("abc-*").is_err());
}
