//! Test fixtures - sample inputs and expected outputs.

#![allow(dead_code)]

/// (path, separator, parent, last level)
pub const PATH_CASES: &[(&str, char, &str, &str)] = &[
    ("/etc/fledge/data", '/', "/etc/fledge", "data"),
    ("/etc/fledge/data/", '/', "/etc/fledge", "data"),
    ("/etc/fledge/data//", '/', "/etc/fledge", "data"),
    ("noseparator", '/', "", "noseparator"),
    ("relative/file.txt", '/', "relative", "file.txt"),
    ("C:\\Program Files\\fledge", '\\', "C:\\Program Files", "fledge"),
    ("north.sinusoid.reading", '.', "north.sinusoid", "reading"),
    ("/", '/', "", ""),
    ("", '/', "", ""),
];

/// (plain, percent-encoded)
pub const URL_CASES: &[(&str, &str)] = &[
    ("a b/c", "a%20b/c"),
    ("", ""),
    ("unreserved-_.~/only", "unreserved-_.~/only"),
    ("key=value&x=1", "key%3Dvalue%26x%3D1"),
    ("100% sure", "100%25%20sure"),
    ("tab\there", "tab%09here"),
    ("a+b", "a%2Bb"),
    ("café", "caf%C3%A9"),
    ("{\"json\": true}", "%7B%22json%22%3A%20true%7D"),
];

/// Inputs that exercise whitespace handling
pub const WHITESPACE_SAMPLES: &[&str] = &[
    "",
    " ",
    "   ",
    "plain",
    "  leading",
    "trailing  ",
    " \t both \r\n",
    "inner  spaces kept",
    "\x0bvertical tab\x0c",
];
