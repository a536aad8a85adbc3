//! Whitespace trimming and line terminator stripping
//!
//! Whitespace here is the ASCII set from [`is_space`]: space, tab, newline,
//! vertical tab, form feed and carriage return. Unicode spaces are left alone.

use super::internal::ascii::{is_space, is_space_char};

/// Remove leading whitespace
pub fn left_trim(s: &str) -> String {
    s.trim_start_matches(is_space_char).to_string()
}

/// Remove trailing whitespace
pub fn right_trim(s: &str) -> String {
    s.trim_end_matches(is_space_char).to_string()
}

/// Remove whitespace from both ends
pub fn trim(s: &str) -> String {
    s.trim_matches(is_space_char).to_string()
}

/// Trim a raw, possibly NUL-terminated byte buffer without allocating.
///
/// The content is everything up to the first NUL byte (or the whole slice if
/// there is none). Trailing whitespace inside the content is overwritten with
/// NUL, and a view of the trimmed content is returned. `None` yields `None`.
///
/// # Example
/// ```
/// let mut buf = *b"  ab  \0";
/// let trimmed = strutil::trim_in_place(Some(&mut buf[..])).unwrap();
/// assert_eq!(trimmed, b"ab");
/// ```
pub fn trim_in_place(buf: Option<&mut [u8]>) -> Option<&mut [u8]> {
    let buf = buf?;

    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let start = buf[..len]
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(len);

    let mut end = len;
    while end > start && is_space(buf[end - 1]) {
        end -= 1;
        buf[end] = 0;
    }

    Some(&mut buf[start..end])
}

/// Remove every whitespace character, wherever it occurs
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|&c| !is_space_char(c)).collect()
}

/// Remove the trailing run of `\r` and `\n` characters, in place.
///
/// Interior line breaks are kept.
pub fn strip_crlf(s: &mut String) {
    let keep = s.trim_end_matches(['\r', '\n']).len();
    s.truncate(keep);
}
