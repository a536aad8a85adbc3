//! Small text toolkit: literal replacement, trimming, percent-encoding,
//! quote escaping and path component helpers
//!
//! Every helper is a standalone function over in-memory text. Nothing here
//! keeps state, reads configuration or performs I/O, so all of them are safe
//! to call from any number of threads at once.
//!
//! # Example
//!
//! ```
//! use strutil::{last_level, parent_path, replace_all, url_decode, url_encode};
//!
//! let mut s = String::from("aaa");
//! replace_all(&mut s, "a", "bb");
//! assert_eq!(s, "bbbbbb");
//!
//! assert_eq!(url_encode("a b/c"), "a%20b/c");
//! assert_eq!(url_decode("a%20b/c"), "a b/c");
//!
//! assert_eq!(parent_path("/etc/fledge/data/", '/'), "/etc/fledge");
//! assert_eq!(last_level("/etc/fledge/data", '/'), "data");
//! ```
//!
//! # Helper Families
//!
//! ## Replace
//! - `replace_first(target, search, replacement)` - first literal match
//! - `replace_all(target, search, replacement)` - every non-overlapping match
//!
//! ## Trim / Strip
//! - `left_trim`, `right_trim`, `trim` - ASCII whitespace at the ends
//! - `trim_in_place(buf)` - raw NUL-terminated buffer, no allocation
//! - `strip_whitespace` - all whitespace anywhere
//! - `strip_crlf` - trailing `\r` / `\n` only
//!
//! ## URL codec
//! - `url_encode` - `%XX` everything outside letters, digits and `-_.~/`
//! - `url_decode` / `url_decode_bytes` - lenient, malformed input passes through
//! - `try_url_decode` - strict, returns [`DecodeError`]
//!
//! ## Paths
//! - `normalize_separators` - collapse `/` and `\` runs into one `/`
//! - `parent_path(path, sep)` / `last_level(path, sep)`
//!
//! ## Escape
//! - `escape_quotes` - backslash unescaped `"`
//!
//! # Features
//!
//! - `rhai` (default): [`helpers::register_all`] registers every helper
//!   with a `rhai::Engine`.

pub mod config;
pub mod error;
pub mod helpers;
pub mod output;

pub use error::DecodeError;
pub use helpers::*;
