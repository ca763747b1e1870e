use super::parts::Path;

/// Removes `.` and `..` segments from `path`, per RFC 3986 §5.2.4
/// (spec.md §4.4, "Remove-dot-segments"). Idempotent: applying this to an
/// already-normalized path returns it unchanged.
pub fn remove_dot_segments(path: &Path) -> Path {
    let mut output: Vec<String> = Vec::with_capacity(path.segments.len());
    let mut directory = false;
    for segment in &path.segments {
        match segment.as_str() {
            "." => directory = true,
            ".." => {
                output.pop();
                directory = true;
            }
            "" => {
                output.push(String::new());
                directory = true;
            }
            other => {
                output.push(other.to_string());
                directory = false;
            }
        }
    }
    if directory && output.last().map_or(true, |last| !last.is_empty()) {
        output.push(String::new());
    }
    Path { absolute: path.absolute, segments: output }
}

#[cfg(test)]
mod test {
    use super::*;

    fn path(absolute: bool, segments: &[&str]) -> Path {
        Path { absolute, segments: segments.iter().map(|s| s.to_string()).collect() }
    }

    #[test]
    fn dot_segments_are_dropped() {
        let input = path(true, &["a", ".", "b"]);
        assert_eq!(remove_dot_segments(&input), path(true, &["a", "b"]));
    }

    #[test]
    fn dot_dot_pops_preceding_segment() {
        let input = path(true, &["a", "b", "..", "c"]);
        assert_eq!(remove_dot_segments(&input), path(true, &["a", "c"]));
    }

    #[test]
    fn dot_dot_with_nothing_to_pop_is_absorbed() {
        let input = path(true, &["..", "a"]);
        assert_eq!(remove_dot_segments(&input), path(true, &["a"]));
    }

    #[test]
    fn trailing_dot_leaves_trailing_empty_segment() {
        let input = path(true, &["a", "b", "."]);
        assert_eq!(remove_dot_segments(&input), path(true, &["a", "b", ""]));
    }

    #[test]
    fn is_idempotent() {
        let input = path(true, &["a", "..", "b", ".", "c"]);
        let once = remove_dot_segments(&input);
        let twice = remove_dot_segments(&once);
        assert_eq!(once, twice);
    }
}
