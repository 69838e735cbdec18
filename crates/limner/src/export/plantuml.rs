//! PlantUML output for sequence and state diagrams.

mod graph;
mod sequence;

use limner_core::{
    color::Color,
    graph::GraphModel,
    render::{RenderError, Renderer},
    sequence::SequenceModel,
};

/// Renders both diagram kinds as PlantUML.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUml;

impl Renderer for PlantUml {
    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn render_sequence(&self, model: &SequenceModel) -> Result<String, RenderError> {
        sequence::render(model)
    }

    fn render_graph(&self, model: &GraphModel) -> Result<String, RenderError> {
        graph::render(model)
    }
}

/// PlantUML reads a literal `\n` as a line break.
fn line_break(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// ` #RRGGBB`, or nothing without a color.
fn color_suffix(color: Option<&Color>) -> String {
    color
        .map(|color| format!(" {}", color.as_hex()))
        .unwrap_or_default()
}
