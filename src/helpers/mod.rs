//! String helper functions
//!
//! Every helper is a plain function over in-memory text. None of them keep
//! state between calls, read configuration, or touch the filesystem.
//!
//! ## Categories
//!
//! - **replace**: replace_first, replace_all
//! - **trim**: left_trim, right_trim, trim, trim_in_place, strip_whitespace, strip_crlf
//! - **url**: url_encode, url_decode, url_decode_bytes, try_url_decode
//! - **paths**: normalize_separators, parent_path, last_level
//! - **escape**: escape_quotes
//!
//! With the `rhai` feature, [`register_all`] exposes the same set to scripts.

// Internal utility modules (used by other helpers)
pub(crate) mod internal;

pub mod escape;
pub mod paths;
pub mod replace;
pub mod trim;
pub mod url;

pub use escape::escape_quotes;
pub use paths::{last_level, normalize_separators, parent_path, CANONICAL_SEPARATOR};
pub use replace::{replace_all, replace_first};
pub use trim::{left_trim, right_trim, strip_crlf, strip_whitespace, trim, trim_in_place};
pub use url::{is_unreserved, try_url_decode, url_decode, url_decode_bytes, url_encode};

/// Register all helper functions with a Rhai engine.
///
/// In-place helpers are exposed as value-returning functions: the script
/// passes a string in and gets the modified copy back.
#[cfg(feature = "rhai")]
pub fn register_all(engine: &mut rhai::Engine) {
    // Replace
    engine.register_fn("replace_first", |s: &str, search: &str, replacement: &str| {
        let mut s = s.to_string();
        replace_first(&mut s, search, replacement);
        s
    });
    engine.register_fn("replace_all", |s: &str, search: &str, replacement: &str| {
        let mut s = s.to_string();
        replace_all(&mut s, search, replacement);
        s
    });

    // Trim / strip
    engine.register_fn("left_trim", left_trim);
    engine.register_fn("right_trim", right_trim);
    engine.register_fn("trim", trim);
    engine.register_fn("strip_whitespace", strip_whitespace);
    engine.register_fn("strip_crlf", |s: &str| {
        let mut s = s.to_string();
        strip_crlf(&mut s);
        s
    });

    // URL codec
    engine.register_fn("url_encode", url_encode);
    engine.register_fn("url_decode", url_decode);

    // Escape
    engine.register_fn("escape_quotes", |s: &str| {
        let mut s = s.to_string();
        escape_quotes(&mut s);
        s
    });

    // Paths
    engine.register_fn("normalize_separators", normalize_separators);
    engine.register_fn("parent_path", |path: &str, separator: char| {
        parent_path(path, separator).to_string()
    });
    engine.register_fn("last_level", |path: &str, separator: char| {
        last_level(path, separator).to_string()
    });
}
