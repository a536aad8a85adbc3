//! Common test utilities shared by the integration tests.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
