//! Path matching rules shared by the route table and the navigation bar.
//!
//! Comparisons ignore ASCII case, so `/About` and `/about` are the same route.

/// `path` is `pattern`, ignoring ASCII case.
pub fn matches_exact(path: &str, pattern: &str) -> bool {
    path.eq_ignore_ascii_case(pattern)
}

/// `path` is `pattern` itself or lies in its subtree (`pattern` followed by `/`).
///
/// A trailing `/` on the pattern is ignored, so `/about/` and `/about` behave
/// the same. The root pattern only matches `/` itself.
pub fn matches_prefix(path: &str, pattern: &str) -> bool {
    let base = pattern.trim_end_matches('/');
    if base.is_empty() {
        return path == "/";
    }

    // `get` fails on a non-char boundary, which can never equal an ASCII pattern
    let (Some(head), Some(rest)) = (path.get(..base.len()), path.get(base.len()..)) else {
        return false;
    };

    head.eq_ignore_ascii_case(base) && (rest.is_empty() || rest.starts_with('/'))
}
