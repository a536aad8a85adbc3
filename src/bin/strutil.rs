//! strutil CLI - string helpers from the command line
//!
//! Usage:
//!   strutil replace <search> <replacement> [input] [--all]
//!   strutil trim [input] [--left | --right]
//!   strutil strip-ws [input]
//!   strutil strip-crlf [input]
//!   strutil encode [input]
//!   strutil decode [input] [--strict | --lenient]
//!   strutil escape [input]
//!   strutil normalize [input]
//!   strutil parent [input] [-s <sep>]
//!   strutil last [input] [-s <sep>]
//!
//! When `input` is omitted it is read from stdin.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use strutil::config::Config;
use strutil::output;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strutil")]
#[command(about = "Literal replace, trim, percent-encoding, quote escaping and path helpers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace a literal substring
    Replace {
        /// Text to search for
        search: String,

        /// Text to put in its place
        replacement: String,

        /// Input text (stdin if omitted)
        input: Option<String>,

        /// Replace every occurrence instead of only the first
        #[arg(short, long)]
        all: bool,
    },

    /// Trim ASCII whitespace from the ends
    Trim {
        /// Input text (stdin if omitted)
        input: Option<String>,

        /// Only trim the start
        #[arg(long, conflicts_with = "right")]
        left: bool,

        /// Only trim the end
        #[arg(long)]
        right: bool,
    },

    /// Remove all whitespace
    StripWs {
        /// Input text (stdin if omitted)
        input: Option<String>,
    },

    /// Remove trailing CR/LF characters
    StripCrlf {
        /// Input text (stdin if omitted, read as-is)
        input: Option<String>,
    },

    /// Percent-encode text
    Encode {
        /// Input text (stdin if omitted)
        input: Option<String>,
    },

    /// Decode percent-encoded text
    Decode {
        /// Input text (stdin if omitted)
        input: Option<String>,

        /// Fail on malformed sequences instead of passing them through
        #[arg(long, conflicts_with = "lenient")]
        strict: bool,

        /// Pass malformed sequences through, even if the config asks for strict
        #[arg(long)]
        lenient: bool,
    },

    /// Backslash-escape double quotes
    Escape {
        /// Input text (stdin if omitted)
        input: Option<String>,
    },

    /// Collapse runs of path separators into a single '/'
    Normalize {
        /// Input path (stdin if omitted)
        input: Option<String>,
    },

    /// Print the parent of a path
    Parent {
        /// Input path (stdin if omitted)
        input: Option<String>,

        /// Path separator
        #[arg(short, long)]
        separator: Option<char>,
    },

    /// Print the last component of a path
    Last {
        /// Input path (stdin if omitted)
        input: Option<String>,

        /// Path separator
        #[arg(short, long)]
        separator: Option<char>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Argument if given, otherwise stdin. With `keep_terminator` false, a single
/// trailing line terminator is dropped so `echo foo | strutil ...` works.
fn read_input(input: Option<String>, keep_terminator: bool) -> Result<String> {
    if let Some(input) = input {
        return Ok(input);
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read input from stdin")?;

    if !keep_terminator {
        if buf.ends_with('\n') {
            buf.pop();
        }
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    output::set_color(output::should_color(config.color));

    let result = match cli.command {
        Commands::Replace {
            search,
            replacement,
            input,
            all,
        } => {
            let mut text = read_input(input, false)?;
            if search.is_empty() {
                output::warning("empty search string, nothing replaced");
            } else if all {
                strutil::replace_all(&mut text, &search, &replacement);
            } else {
                strutil::replace_first(&mut text, &search, &replacement);
            }
            text
        }

        Commands::Trim { input, left, right } => {
            let text = read_input(input, false)?;
            if left {
                strutil::left_trim(&text)
            } else if right {
                strutil::right_trim(&text)
            } else {
                strutil::trim(&text)
            }
        }

        Commands::StripWs { input } => strutil::strip_whitespace(&read_input(input, false)?),

        Commands::StripCrlf { input } => {
            let mut text = read_input(input, true)?;
            strutil::strip_crlf(&mut text);
            text
        }

        Commands::Encode { input } => strutil::url_encode(&read_input(input, false)?),

        Commands::Decode {
            input,
            strict,
            lenient,
        } => {
            let text = read_input(input, false)?;
            let strict = strict
                .then_some(true)
                .or(lenient.then_some(false))
                .unwrap_or(config.strict_decode);
            if strict {
                strutil::try_url_decode(&text)?
            } else {
                strutil::url_decode(&text)
            }
        }

        Commands::Escape { input } => {
            let mut text = read_input(input, false)?;
            strutil::escape_quotes(&mut text);
            text
        }

        Commands::Normalize { input } => strutil::normalize_separators(&read_input(input, false)?),

        Commands::Parent { input, separator } => {
            let text = read_input(input, false)?;
            strutil::parent_path(&text, separator.unwrap_or(config.separator)).to_string()
        }

        Commands::Last { input, separator } => {
            let text = read_input(input, false)?;
            strutil::last_level(&text, separator.unwrap_or(config.separator)).to_string()
        }
    };

    println!("{}", result);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    output::set_color(output::should_color(true));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
