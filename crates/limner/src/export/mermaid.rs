//! Mermaid output: `sequenceDiagram` and `stateDiagram-v2`.

mod graph;
mod sequence;

use limner_core::{
    graph::GraphModel,
    render::{RenderError, Renderer},
    sequence::SequenceModel,
};

/// Renders both diagram kinds as Mermaid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mermaid;

impl Renderer for Mermaid {
    fn name(&self) -> &'static str {
        "mermaid"
    }

    fn render_sequence(&self, model: &SequenceModel) -> Result<String, RenderError> {
        sequence::render(model)
    }

    fn render_graph(&self, model: &GraphModel) -> Result<String, RenderError> {
        graph::render(model)
    }
}

/// Mermaid accepts `<br/>` in labels.
fn line_break(text: &str) -> String {
    text.replace('\n', "<br/>")
}
