//! Quote escaping for embedding text inside double-quoted literals

/// Prefix every unescaped `"` with a backslash, in place.
///
/// A quote preceded by an odd number of backslashes is already escaped and
/// is left alone. An even run (`\\"`) means the backslashes escape each other
/// and the quote still needs one. Running this twice is the same as once.
///
/// # Example
/// ```
/// let mut s = String::from(r#"say "hi""#);
/// strutil::escape_quotes(&mut s);
/// assert_eq!(s, r#"say \"hi\""#);
/// ```
pub fn escape_quotes(s: &mut String) {
    if !s.contains('"') {
        return;
    }

    let mut out = String::with_capacity(s.len() + 8);
    let mut backslashes = 0usize;

    for c in s.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                if backslashes % 2 == 0 {
                    out.push('\\');
                }
                backslashes = 0;
            }
            _ => backslashes = 0,
        }
        out.push(c);
    }

    *s = out;
}
