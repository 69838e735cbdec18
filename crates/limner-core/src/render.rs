//! The contract between a finished diagram model and its textual output.
//!
//! A [`Renderer`] is a pure function of the model. It has one entry point per
//! diagram kind. A renderer that cannot express a kind keeps the default
//! implementation, which fails with [`RenderError::Unsupported`] instead of
//! producing partial output.
//!
//! Implementations must be deterministic: output order follows the insertion
//! order of participants and nodes and the recorded step sequence.

use std::fmt;

use thiserror::Error;

use crate::{graph::GraphModel, sequence::SequenceModel};

/// The kinds of diagram a renderer may be asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Sequence,
    Graph,
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence => write!(f, "sequence"),
            Self::Graph => write!(f, "graph"),
        }
    }
}

/// Errors raised while rendering.
///
/// Kept apart from [`crate::error::ChartingError`]: a render failure signals
/// a capability mismatch, not a misuse of the model.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("renderer `{renderer}` does not support {kind} diagrams")]
    Unsupported {
        renderer: &'static str,
        kind: DiagramKind,
    },

    #[error("failed to write diagram text: {0}")]
    Format(#[from] fmt::Error),
}

/// Turns a finished model into diagram text.
pub trait Renderer: fmt::Debug {
    /// Short, stable name of the target language, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Renders a sequence diagram.
    ///
    /// # Errors
    ///
    /// The default implementation returns [`RenderError::Unsupported`].
    fn render_sequence(&self, model: &SequenceModel) -> Result<String, RenderError> {
        let _ = model;
        Err(RenderError::Unsupported {
            renderer: self.name(),
            kind: DiagramKind::Sequence,
        })
    }

    /// Renders a graph diagram.
    ///
    /// # Errors
    ///
    /// The default implementation returns [`RenderError::Unsupported`].
    fn render_graph(&self, model: &GraphModel) -> Result<String, RenderError> {
        let _ = model;
        Err(RenderError::Unsupported {
            renderer: self.name(),
            kind: DiagramKind::Graph,
        })
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn render_sequence(&self, model: &SequenceModel) -> Result<String, RenderError> {
        (**self).render_sequence(model)
    }

    fn render_graph(&self, model: &GraphModel) -> Result<String, RenderError> {
        (**self).render_graph(model)
    }
}
