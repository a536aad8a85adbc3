//! Path component helpers
//!
//! These work on path-like strings, not on the filesystem. The separator is
//! supplied by the caller so the same helpers handle `/`, `\`, `.` or any
//! other delimiter convention.

use tracing::trace;

/// Separator produced by [`normalize_separators`]
pub const CANONICAL_SEPARATOR: char = '/';

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Collapse every run of `/` and `\` (in any mix) into a single `/`.
///
/// # Example
/// ```
/// assert_eq!(strutil::normalize_separators("a//b\\\\c"), "a/b/c");
/// ```
pub fn normalize_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut in_run = false;

    for c in path.chars() {
        if is_separator(c) {
            if !in_run {
                out.push(CANONICAL_SEPARATOR);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }

    if out.len() != path.len() {
        trace!(from = path, to = %out, "collapsed path separators");
    }
    out
}

/// The path one level up: everything before the last `separator`.
///
/// Trailing separators are skipped first, so `"/a/b/"` has parent `"/a"`.
/// Returns `""` when there is no separator left to split on.
pub fn parent_path(path: &str, separator: char) -> &str {
    let trimmed = path.trim_end_matches(separator);
    match trimmed.rfind(separator) {
        Some(pos) => trimmed[..pos].trim_end_matches(separator),
        None => "",
    }
}

/// The final component: everything after the last `separator`.
///
/// Trailing separators are skipped as in [`parent_path`]. If `separator`
/// does not occur in `path` at all, the whole input is the last level.
pub fn last_level(path: &str, separator: char) -> &str {
    if !path.contains(separator) {
        return path;
    }

    let trimmed = path.trim_end_matches(separator);
    match trimmed.rfind(separator) {
        Some(pos) => &trimmed[pos + separator.len_utf8()..],
        None => trimmed,
    }
}
