use crate::error::PunycodeError;

use super::idna;
use super::parts::Parts;
use super::pctencode::{pctdecode, pctencode, EncodeSet};

/// Percent-encodes and IDNA-encodes every field of `parts` so that the
/// result is safe to compose and transmit: `userinfo` under
/// [`EncodeSet::Userinfo`], each path segment under [`EncodeSet::Path`],
/// `query` and `fragment` under [`EncodeSet::Query`], and `host` via
/// [`idna::encode_host`] rather than percent-encoding (spec.md §4.4,
/// "Encode"/"Decode", grounded on `uri::encode` in the original).
pub fn encode_parts(parts: &Parts) -> Parts {
    let mut out = parts.clone();
    if let Some(authority) = &mut out.authority {
        if let Some(userinfo) = &authority.userinfo {
            authority.userinfo = Some(pctencode(userinfo.as_bytes(), EncodeSet::Userinfo));
        }
        authority.host = idna::encode_host(&authority.host);
    }
    for segment in &mut out.path.segments {
        *segment = pctencode(segment.as_bytes(), EncodeSet::Path);
    }
    if let Some(query) = &out.query {
        out.query = Some(pctencode(query.as_bytes(), EncodeSet::Query));
    }
    if let Some(fragment) = &out.fragment {
        out.fragment = Some(pctencode(fragment.as_bytes(), EncodeSet::Query));
    }
    out
}

/// Reverses [`encode_parts`]: percent-decodes every field and undoes IDNA
/// host encoding. Returns an error if any host label is not valid
/// Punycode.
pub fn decode_parts(parts: &Parts) -> Result<Parts, PunycodeError> {
    let mut out = parts.clone();
    if let Some(authority) = &mut out.authority {
        if let Some(userinfo) = &authority.userinfo {
            authority.userinfo = Some(pctdecode_to_string(userinfo));
        }
        authority.host = idna::decode_host(&authority.host)?;
    }
    for segment in &mut out.path.segments {
        *segment = pctdecode_to_string(segment);
    }
    if let Some(query) = &out.query {
        out.query = Some(pctdecode_to_string(query));
    }
    if let Some(fragment) = &out.fragment {
        out.fragment = Some(pctdecode_to_string(fragment));
    }
    Ok(out)
}

fn pctdecode_to_string(s: &str) -> String {
    String::from_utf8_lossy(&pctdecode(s.as_bytes())).into_owned()
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::grammar::split;

    #[test]
    fn encodes_non_ascii_host_and_path() {
        let parts = split_reference_with_host("https://bücher.example/a b");
        let encoded = encode_parts(&parts);
        assert_eq!(encoded.authority.unwrap().host, "xn--bcher-kva.example");
        assert_eq!(encoded.path.segments, vec!["a%20b"]);
    }

    #[test]
    fn decode_reverses_encode() {
        let parts = split("https://example.com/a%20b?x%20y").unwrap();
        let decoded = decode_parts(&parts).unwrap();
        assert_eq!(decoded.path.segments, vec!["a b"]);
        assert_eq!(decoded.query.as_deref(), Some("x y"));
    }

    fn split_reference_with_host(s: &str) -> Parts {
        super::super::grammar::split_reference(s).unwrap()
    }
}
