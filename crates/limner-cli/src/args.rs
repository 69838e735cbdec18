//! Command-line argument definitions for the Limner CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the script to render, where the text
//! goes, the output format, the configuration file and logging verbosity.

use clap::Parser;

use limner::export::Format;

/// Command-line arguments for the Limner diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram script (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; the diagram text goes to stdout without one
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format, overriding the configured one
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
