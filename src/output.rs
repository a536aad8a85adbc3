//! Colored status lines for the strutil CLI
//!
//! Results go to stdout untouched; everything here goes to stderr so piped
//! output stays clean.

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR: AtomicBool = AtomicBool::new(true);

/// Turn colored status lines on or off
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Color only when configured, stderr is a terminal and `NO_COLOR` is unset
pub fn should_color(configured: bool) -> bool {
    configured && std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

fn color() -> bool {
    COLOR.load(Ordering::Relaxed)
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    if color() {
        eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
    } else {
        eprintln!("warning: {}", message);
    }
}

/// Print an error message (red)
pub fn error(message: &str) {
    if color() {
        eprintln!("{} {}", "error:".red().bold(), message.red());
    } else {
        eprintln!("error: {}", message);
    }
}
