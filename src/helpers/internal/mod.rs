//! Internal utility modules (not part of the public API)
//!
//! Shared tables and predicates used by the public helper modules.

pub mod ascii;
