use crate::error::PunycodeError;

use super::punycode;

const ACE_PREFIX: &str = "xn--";

/// Applies IDNA's ToASCII step to a host: each dot-separated label that
/// contains non-ASCII code points is Punycode-encoded and prefixed with
/// `xn--`; labels that are already ASCII pass through unchanged
/// (spec.md §4.4, "IDNA host encoding").
pub fn encode_host(host: &str) -> String {
    host.split('.')
        .map(|label| {
            if label.is_ascii() {
                label.to_string()
            } else {
                format!("{ACE_PREFIX}{}", punycode::encode(label))
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Reverses [`encode_host`]: each label beginning `xn--` has that prefix
/// stripped and is Punycode-decoded; other labels pass through unchanged.
pub fn decode_host(host: &str) -> Result<String, PunycodeError> {
    host.split('.')
        .map(|label| match label.strip_prefix(ACE_PREFIX) {
            Some(rest) => punycode::decode(rest),
            None => Ok(label.to_string()),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|labels| labels.join("."))
}
