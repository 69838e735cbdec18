//! Error types for Limner operations.
//!
//! [`LimnerError`] wraps everything that can go wrong between reading a
//! diagram script and producing rendered text.

use std::{io, ops::Range};

use thiserror::Error;

use limner_core::{error::ChartingError, render::RenderError};

/// The main error type for Limner operations.
///
/// # Diagnostic Variants
///
/// The `Script` variant keeps the script source and, when known, the byte
/// range of the offending value, for rich error reporting.
#[derive(Debug, Error)]
pub enum LimnerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Charting error: {0}")]
    Charting(#[from] ChartingError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("{message}")]
    Script {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LimnerError {
    /// Create a new `Script` error with the associated source code.
    pub fn new_script_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Script {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
