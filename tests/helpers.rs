//! Integration tests for the public helper functions
//!
//! Exercises each helper family through the crate root re-exports.

mod common;

use common::{PATH_CASES, URL_CASES, WHITESPACE_SAMPLES};
use strutil::{
    escape_quotes, last_level, left_trim, normalize_separators, parent_path, replace_all,
    replace_first, right_trim, strip_crlf, strip_whitespace, trim, trim_in_place,
    try_url_decode, url_decode, url_encode, DecodeError,
};

// =============================================================================
// Replace
// =============================================================================

#[test]
fn test_replace_all_grows_without_looping() {
    let mut s = String::from("aaa");
    replace_all(&mut s, "a", "bb");
    assert_eq!(s, "bbbbbb");
}

#[test]
fn test_replace_all_empty_search_is_noop() {
    let mut s = String::from("xx");
    replace_all(&mut s, "", "y");
    assert_eq!(s, "xx");
}

#[test]
fn test_replace_first_then_all() {
    let mut s = String::from("/usr/local/fledge/local");
    assert!(replace_first(&mut s, "local", "opt"));
    assert_eq!(s, "/usr/opt/fledge/local");
    assert_eq!(replace_all(&mut s, "/", "\\"), 4);
    assert_eq!(s, "\\usr\\opt\\fledge\\local");
}

// =============================================================================
// Trim / Strip
// =============================================================================

#[test]
fn test_trim_blank_and_empty() {
    assert_eq!(trim("   "), "");
    assert_eq!(trim(""), "");
}

#[test]
fn test_trim_is_idempotent() {
    for s in WHITESPACE_SAMPLES {
        let once = trim(s);
        assert_eq!(trim(&once), once, "sample {:?}", s);
    }
}

#[test]
fn test_left_right_compose_to_trim() {
    for s in WHITESPACE_SAMPLES {
        assert_eq!(left_trim(&right_trim(s)), trim(s), "sample {:?}", s);
        assert_eq!(right_trim(&left_trim(s)), trim(s), "sample {:?}", s);
    }
}

#[test]
fn test_strip_crlf_then_trim_restores_input() {
    for s in WHITESPACE_SAMPLES {
        let mut line = format!("{}\r\n", s);
        strip_crlf(&mut line);
        assert_eq!(trim(&line), trim(s), "sample {:?}", s);
    }
}

#[test]
fn test_strip_whitespace_removes_everything() {
    for s in WHITESPACE_SAMPLES {
        let stripped = strip_whitespace(s);
        assert!(!stripped.contains([' ', '\t', '\r', '\n', '\x0b', '\x0c']));
    }
    assert_eq!(strip_whitespace("inner  spaces kept"), "innerspaceskept");
}

#[test]
fn test_trim_in_place_matches_trim() {
    for s in WHITESPACE_SAMPLES {
        let mut buf = s.as_bytes().to_vec();
        buf.push(0);
        let trimmed = trim_in_place(Some(buf.as_mut_slice())).unwrap();
        assert_eq!(trimmed, trim(s).as_bytes(), "sample {:?}", s);
    }
}

// =============================================================================
// URL codec
// =============================================================================

#[test]
fn test_url_encode_table() {
    for (plain, encoded) in URL_CASES {
        assert_eq!(url_encode(plain), *encoded, "encoding {:?}", plain);
    }
}

#[test]
fn test_url_decode_table() {
    for (plain, encoded) in URL_CASES {
        assert_eq!(url_decode(encoded), *plain, "decoding {:?}", encoded);
        assert_eq!(try_url_decode(encoded).unwrap(), *plain);
    }
}

#[test]
fn test_url_decode_lowercase_hex() {
    assert_eq!(url_decode("caf%c3%a9"), "café");
}

#[test]
fn test_strict_decode_reports_offset() {
    assert_eq!(
        try_url_decode("ok%2"),
        Err(DecodeError::Truncated { offset: 2 })
    );
    let err = try_url_decode("x%zz").unwrap_err();
    assert_eq!(err.to_string(), "invalid percent sequence \"%zz\" at offset 1");
}

// =============================================================================
// Paths
// =============================================================================

#[test]
fn test_path_table() {
    for (path, sep, parent, last) in PATH_CASES {
        assert_eq!(parent_path(path, *sep), *parent, "parent of {:?}", path);
        assert_eq!(last_level(path, *sep), *last, "last level of {:?}", path);
    }
}

#[test]
fn test_normalize_separators_is_idempotent() {
    for (path, _, _, _) in PATH_CASES {
        let once = normalize_separators(path);
        assert_eq!(normalize_separators(&once), once);
    }
}

#[test]
fn test_normalize_then_split() {
    let path = normalize_separators("/etc//fledge\\data\\");
    assert_eq!(path, "/etc/fledge/data/");
    assert_eq!(parent_path(&path, '/'), "/etc/fledge");
    assert_eq!(last_level(&path, '/'), "data");
}

// =============================================================================
// Escape
// =============================================================================

#[test]
fn test_escape_quotes() {
    let mut s = String::from("say \"hi\"");
    escape_quotes(&mut s);
    assert_eq!(s, "say \\\"hi\\\"");
}

#[test]
fn test_escape_quotes_for_json_embedding() {
    let mut s = String::from(r#"{"asset": "sinusoid"}"#);
    escape_quotes(&mut s);
    assert_eq!(s, r#"{\"asset\": \"sinusoid\"}"#);
}
