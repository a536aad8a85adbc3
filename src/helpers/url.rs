//! Percent-encoding and decoding
//!
//! The unreserved set is ASCII letters, digits, `-`, `_`, `.`, `~` and `/`.
//! The slash passes through so path-like inputs stay readable. Every other
//! byte of the UTF-8 encoding becomes `%XX` with uppercase hex digits, so a
//! space is always `%20` and never `+`.
//!
//! Decoding comes in three flavours:
//!
//! - [`url_decode`]: lenient, malformed sequences pass through literally
//! - [`url_decode_bytes`]: lenient, returns raw bytes
//! - [`try_url_decode`]: strict, malformed input is a [`DecodeError`]

use super::internal::ascii::{hex_digits, hex_pair};
use crate::error::DecodeError;
use tracing::debug;

/// Bytes written as-is by [`url_encode`]
pub fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~' | b'/')
}

/// Percent-encode every byte outside the unreserved set.
///
/// # Example
/// ```
/// assert_eq!(strutil::url_encode("a b/c"), "a%20b/c");
/// ```
pub fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &byte in s.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            let [high, low] = hex_digits(byte);
            out.push('%');
            out.push(high as char);
            out.push(low as char);
        }
    }
    out
}

/// Decode `%XX` triplets into bytes, passing anything else through.
///
/// A `%` that is not followed by two hex digits, including one truncated by
/// the end of the input, is copied literally along with whatever follows it.
/// `+` is not treated as a space.
pub fn url_decode_bytes(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            match percent_byte(s, i) {
                Ok(byte) => {
                    out.push(byte);
                    i += 3;
                    continue;
                }
                Err(e) => debug!(error = %e, "passing malformed percent sequence through"),
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    out
}

/// Lenient decode to a `String`.
///
/// Decoded bytes that do not form valid UTF-8 are replaced with U+FFFD. For
/// any `x`, `url_decode(&url_encode(x)) == x`.
pub fn url_decode(s: &str) -> String {
    match String::from_utf8(url_decode_bytes(s)) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!("decoded bytes are not UTF-8, substituting replacement characters");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Strict decode: malformed percent sequences and non-UTF-8 output are errors.
pub fn try_url_decode(s: &str) -> Result<String, DecodeError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            out.push(percent_byte(s, i)?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    Ok(String::from_utf8(out)?)
}

/// Decode the triplet starting at `offset`, which must point at a `%`.
///
/// The `%` is ASCII, so `offset` is always a char boundary; the reported
/// sequence is the `%` and the two chars after it, never a split character.
fn percent_byte(s: &str, offset: usize) -> Result<u8, DecodeError> {
    match s.as_bytes().get(offset + 1..offset + 3) {
        Some(&[high, low]) => hex_pair(high, low).ok_or_else(|| DecodeError::InvalidHex {
            offset,
            sequence: s[offset..].chars().take(3).collect(),
        }),
        _ => Err(DecodeError::Truncated { offset }),
    }
}
