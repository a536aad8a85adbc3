//! Literal substring replacement
//!
//! Matching is exact byte-sequence matching, never pattern matching.

use tracing::debug;

/// Replace the first occurrence of `search` in `target` with `replacement`.
///
/// Returns `true` if a replacement was made. An empty `search` or a missing
/// match leaves `target` untouched.
pub fn replace_first(target: &mut String, search: &str, replacement: &str) -> bool {
    if search.is_empty() {
        return false;
    }

    match target.find(search) {
        Some(start) => {
            target.replace_range(start..start + search.len(), replacement);
            true
        }
        None => false,
    }
}

/// Replace every non-overlapping occurrence of `search`, scanning left to right.
///
/// Text inserted by a replacement is never rescanned, so a `replacement` that
/// itself contains `search` cannot loop. Returns the number of replacements.
///
/// # Example
/// ```
/// let mut s = String::from("aaa");
/// assert_eq!(strutil::replace_all(&mut s, "a", "bb"), 3);
/// assert_eq!(s, "bbbbbb");
/// ```
pub fn replace_all(target: &mut String, search: &str, replacement: &str) -> usize {
    if search.is_empty() {
        return 0;
    }

    let mut out = String::new();
    let mut last = 0;
    let mut count = 0;

    for (start, _) in target.match_indices(search) {
        if count == 0 {
            out.reserve(target.len());
        }
        out.push_str(&target[last..start]);
        out.push_str(replacement);
        last = start + search.len();
        count += 1;
    }

    if count > 0 {
        out.push_str(&target[last..]);
        *target = out;
        debug!(count, search, "replaced all occurrences");
    }

    count
}
