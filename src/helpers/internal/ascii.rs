//! ASCII character classes shared by the trim and URL helpers
//!
//! Only ASCII is classified here. Multi-byte UTF-8 sequences never contain
//! bytes below 0x80, so slicing a `&str` at positions found with these
//! predicates always lands on a char boundary.

/// Uppercase hex digits used when percent-encoding
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// ASCII whitespace as C `isspace` sees it: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Note that `u8::is_ascii_whitespace` leaves out vertical tab (0x0B).
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Char form of [`is_space`], for use with `str` pattern APIs
pub fn is_space_char(c: char) -> bool {
    c.is_ascii() && is_space(c as u8)
}

/// Value of a single hex digit (either case)
pub fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Decode a pair of hex digits into one byte
pub fn hex_pair(high: u8, low: u8) -> Option<u8> {
    Some((hex_value(high)? << 4) | hex_value(low)?)
}

/// Uppercase hex digits for one byte, high nibble first
pub fn hex_digits(byte: u8) -> [u8; 2] {
    [
        HEX_UPPER[(byte >> 4) as usize],
        HEX_UPPER[(byte & 0x0F) as usize],
    ]
}
