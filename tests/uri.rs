use corejay::uri::{compose, decode_parts, encode_parts, join_strs, split, split_reference};

#[test]
fn splits_and_recomposes_a_full_uri() {
    let text = "https://user@example.com:8080/a/b?q=1#frag";
    let parts = split(text).unwrap();
    assert_eq!(compose(&parts), text);
}

#[test]
fn relative_reference_resolves_against_a_base() {
    let resolved = join_strs("http://example.com/a/b/c", "../g", true).unwrap();
    assert_eq!(resolved.to_string(), "http://example.com/a/g");
}

#[test]
fn reference_with_its_own_authority_replaces_the_base_entirely() {
    let resolved = join_strs("http://example.com/a/b", "//other.example/x", true).unwrap();
    assert_eq!(resolved.to_string(), "http://other.example/x");
}

#[test]
fn encoding_a_non_ascii_host_and_path_makes_it_ascii_safe() {
    let parts = split_reference("https://bücher.example/a b/c?x=y z").unwrap();
    let encoded = encode_parts(&parts);
    let authority = encoded.authority.as_ref().unwrap();
    assert_eq!(authority.host, "xn--bcher-kva.example");
    assert_eq!(encoded.path.segments, vec!["a%20b", "c"]);
    assert_eq!(encoded.query.as_deref(), Some("x=y%20z"));
}

#[test]
fn decoding_reverses_encoding() {
    let parts = split_reference("https://bücher.example/a b").unwrap();
    let encoded = encode_parts(&parts);
    let decoded = decode_parts(&encoded).unwrap();
    assert_eq!(decoded, parts);
}

#[test]
fn malformed_uri_without_a_scheme_is_rejected_as_a_uri() {
    assert!(split("//example.com/a").is_none());
    assert!(split_reference("//example.com/a").is_some());
}
