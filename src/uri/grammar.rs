use std::fmt;

use super::parts::{Authority, Parts, Path};

/// Parses `input` as an RFC 3986 `URI` (a scheme is required).
pub fn split(input: &str) -> Option<Parts> {
    parse(input, true)
}

/// Parses `input` as an RFC 3986 `URI-reference` (a scheme is optional).
pub fn split_reference(input: &str) -> Option<Parts> {
    parse(input, false)
}

/// Splits `input` into scheme/authority/path/query/fragment the way RFC
/// 3986 Appendix B's well-known regex does, but as straightforward
/// left-to-right scanning rather than a combinator chain: the grammar this
/// crate's matchers express as explicit push/pop transitions (see
/// `parser::state`) is here expressed as a handful of `find`/`split_at`
/// calls, since nothing about splitting a URI into its five components
/// needs backtracking.
fn parse(input: &str, require_scheme: bool) -> Option<Parts> {
    let mut rest = input;

    let scheme = match split_scheme(rest) {
        Some((scheme, after)) => {
            rest = after;
            Some(scheme.to_string())
        }
        None if require_scheme => return None,
        None => None,
    };

    let (fragment, rest_before_fragment) = match rest.find('#') {
        Some(idx) => (Some(rest[idx + 1..].to_string()), &rest[..idx]),
        None => (None, rest),
    };
    let (query, rest_before_query) = match rest_before_fragment.find('?') {
        Some(idx) => (Some(rest_before_fragment[idx + 1..].to_string()), &rest_before_fragment[..idx]),
        None => (None, rest_before_fragment),
    };
    rest = rest_before_query;

    let authority = if let Some(after_slashes) = rest.strip_prefix("//") {
        let authority_end = after_slashes.find(['/', '?', '#']).unwrap_or(after_slashes.len());
        let (authority_str, after_authority) = after_slashes.split_at(authority_end);
        rest = after_authority;
        Some(split_authority(authority_str))
    } else {
        None
    };

    let path = split_path(rest);

    Some(Parts { scheme, authority, path, query, fragment })
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`. Returns the scheme
/// and the remainder of the string after its `:`, or `None` if `s` does not
/// begin with a valid scheme followed by `:`.
fn split_scheme(s: &str) -> Option<(&str, &str)> {
    let colon = s.find(':')?;
    let candidate = &s[..colon];
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((candidate, &s[colon + 1..]))
}

fn split_authority(s: &str) -> Authority {
    let (userinfo, hostport) = match s.rfind('@') {
        Some(idx) => (Some(s[..idx].to_string()), &s[idx + 1..]),
        None => (None, s),
    };
    let (host, port) = if let Some(rest) = hostport.strip_prefix('[') {
        match rest.find(']') {
            Some(idx) => {
                let host = format!("[{}]", &rest[..idx]);
                let after = &rest[idx + 1..];
                let port = after.strip_prefix(':').map(|p| p.to_string());
                (host, port)
            }
            None => (hostport.to_string(), None),
        }
    } else {
        match hostport.rfind(':') {
            Some(idx) if hostport[idx + 1..].bytes().all(|b| b.is_ascii_digit()) => {
                (hostport[..idx].to_string(), Some(hostport[idx + 1..].to_string()))
            }
            _ => (hostport.to_string(), None),
        }
    };
    Authority { userinfo, host, port }
}

/// A leading `/` sets `absolute = true` and is not itself a segment; a
/// trailing `/` produces a final empty segment (spec.md §4.4,
/// "Path decomposition").
fn split_path(path_str: &str) -> Path {
    if path_str.is_empty() {
        return Path::default();
    }
    let (absolute, rest) = match path_str.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, path_str),
    };
    let segments = rest.split('/').map(|s| s.to_string()).collect();
    Path { absolute, segments }
}

/// Serialises `parts` back to a string (spec.md §4.4, "Compose"):
/// `scheme ":"`, `"//" authority` if present, path, `"?" query` if present,
/// `"#" fragment` if present.
pub fn compose(parts: &Parts) -> String {
    parts.to_string()
}

impl fmt::Display for Parts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
            if !self.path.is_empty() && !self.path.absolute {
                write!(f, "/")?;
            }
        }
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_a_full_uri() {
        let parts = split("https://user@example.com:8080/a/b?q=1#frag").unwrap();
        assert_eq!(parts.scheme.as_deref(), Some("https"));
        let authority = parts.authority.unwrap();
        assert_eq!(authority.userinfo.as_deref(), Some("user"));
        assert_eq!(authority.host, "example.com");
        assert_eq!(authority.port.as_deref(), Some("8080"));
        assert_eq!(parts.path.segments, vec!["a", "b"]);
        assert_eq!(parts.query.as_deref(), Some("q=1"));
        assert_eq!(parts.fragment.as_deref(), Some("frag"));
    }

    #[test]
    fn rejects_missing_scheme_for_uri() {
        assert!(split("//example.com/a").is_none());
    }

    #[test]
    fn accepts_missing_scheme_for_reference() {
        let parts = split_reference("//example.com/a").unwrap();
        assert!(parts.scheme.is_none());
        assert_eq!(parts.authority.unwrap().host, "example.com");
    }

    #[test]
    fn path_only_reference_round_trips() {
        let parts = split_reference("/a/b/").unwrap();
        assert!(parts.path.absolute);
        assert_eq!(parts.path.segments, vec!["a", "b", ""]);
        assert_eq!(compose(&parts), "/a/b/");
    }

    #[test]
    fn ipv6_host_is_recognised() {
        let parts = split("ws://[::1]:9000/").unwrap();
        let authority = parts.authority.unwrap();
        assert_eq!(authority.host, "[::1]");
        assert_eq!(authority.port.as_deref(), Some("9000"));
    }

    #[test]
    fn compose_round_trips_split() {
        let original = "mailto:foo@example.com";
        let parts = split(original).unwrap();
        assert_eq!(compose(&parts), original);
    }
}
