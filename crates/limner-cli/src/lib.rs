//! CLI logic for the Limner diagram tool.
//!
//! This module contains the core CLI logic: it loads the configuration,
//! renders one diagram script and writes the resulting text.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use limner::{Limner, LimnerError};

/// Run the Limner CLI application
///
/// This function replays the input script through the diagram builders and
/// writes the rendered text to the output file, or to stdout without one.
///
/// # Errors
///
/// Returns `LimnerError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Script errors
/// - Charting errors raised while replaying the script
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), LimnerError> {
    info!(input_path = args.input; "Processing diagram script");

    let app_config = config::load_config(args.config.as_ref())?;

    let mut limner = Limner::new(app_config);
    if let Some(format) = args.format {
        limner = limner.with_format(format);
    }

    let source = fs::read_to_string(&args.input)?;
    let rendered = limner.render_script(&source)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path, format:% = limner.format(); "Diagram exported successfully");
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
