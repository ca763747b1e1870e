use super::dotseg::remove_dot_segments;
use super::grammar::{split, split_reference};
use super::parts::{Parts, Path};

/// Resolves reference `r` against base `b`, per RFC 3986 §5.2.2
/// (spec.md §4.4, "Reference resolution"). `strict` controls whether a
/// same-scheme reference is still treated as carrying its own scheme (the
/// "backwards compatibility" escape hatch RFC 3986 §5.2.2 itself names).
pub fn join(b: &Parts, r: &Parts, strict: bool) -> Parts {
    let mut t = Parts::default();
    if r.scheme.is_some() && (strict || r.scheme != b.scheme) {
        t.scheme = r.scheme.clone();
        t.authority = r.authority.clone();
        t.path = remove_dot_segments(&r.path);
        t.query = r.query.clone();
    } else if r.authority.is_some() {
        t.scheme = b.scheme.clone();
        t.authority = r.authority.clone();
        t.path = remove_dot_segments(&r.path);
        t.query = r.query.clone();
    } else if r.path.is_empty() {
        t.scheme = b.scheme.clone();
        t.authority = b.authority.clone();
        t.path = b.path.clone();
        t.query = if r.query.is_some() { r.query.clone() } else { b.query.clone() };
    } else {
        t.scheme = b.scheme.clone();
        t.authority = b.authority.clone();
        t.path = remove_dot_segments(&(if r.path.absolute { r.path.clone() } else { merge(b, r) }));
        t.query = r.query.clone();
    }
    t.fragment = r.fragment.clone();
    t
}

/// If `b` has an authority and an empty path, the merged path is `/` +
/// `r.path`; otherwise it is the concatenation of all-but-the-last segment
/// of `b.path` and `r.path` (RFC 3986 §5.3).
fn merge(b: &Parts, r: &Parts) -> Path {
    if b.authority.is_some() && b.path.is_empty() {
        return Path { absolute: true, segments: r.path.segments.clone() };
    }
    let mut segments = b.path.segments.clone();
    segments.pop();
    segments.extend(r.path.segments.iter().cloned());
    Path { absolute: b.path.absolute, segments }
}

/// Parses `base` as a `URI` and `r` as a `URI-reference`, then resolves
/// `r` against it. Returns `None` if either fails to parse.
pub fn join_strs(base: &str, r: &str, strict: bool) -> Option<Parts> {
    let b = split(base)?;
    let r = split_reference(r)?;
    Some(join(&b, &r, strict))
}

#[cfg(test)]
mod test {
    use super::*;

    fn p(s: &str) -> Parts {
        split_reference(s).unwrap()
    }

    #[test]
    fn relative_path_merges_with_base() {
        let base = split("http://example.com/a/b/c").unwrap();
        let target = join(&base, &p("d"), true);
        assert_eq!(target.to_string(), "http://example.com/a/b/d");
    }

    #[test]
    fn dot_dot_climbs_out_of_base() {
        let base = split("http://example.com/a/b/c").unwrap();
        let target = join(&base, &p("../d"), true);
        assert_eq!(target.to_string(), "http://example.com/a/d");
    }

    #[test]
    fn absolute_path_replaces_base_path() {
        let base = split("http://example.com/a/b/c").unwrap();
        let target = join(&base, &p("/x/y"), true);
        assert_eq!(target.to_string(), "http://example.com/x/y");
    }

    #[test]
    fn authority_reference_keeps_base_scheme_only() {
        let base = split("http://example.com/a").unwrap();
        let target = join(&base, &p("//other.example/z"), true);
        assert_eq!(target.to_string(), "http://other.example/z");
    }

    #[test]
    fn empty_reference_path_keeps_base_path_and_query() {
        let base = split("http://example.com/a?x=1").unwrap();
        let target = join(&base, &p(""), true);
        assert_eq!(target.to_string(), "http://example.com/a?x=1");
    }

    #[test]
    fn fragment_only_reference_keeps_everything_else() {
        let base = split("http://example.com/a?x=1").unwrap();
        let target = join(&base, &p("#frag"), true);
        assert_eq!(target.to_string(), "http://example.com/a?x=1#frag");
    }

    #[test]
    fn join_strs_parses_both_sides() {
        let target = join_strs("http://example.com/a/b/", "../c", true).unwrap();
        assert_eq!(target.to_string(), "http://example.com/a/c");
    }
}
