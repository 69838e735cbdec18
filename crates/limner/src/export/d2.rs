//! D2 output for sequence diagrams.
//!
//! D2 has no activation controls. Lifeline spans are child shapes of a
//! participant (`p1.0`, `p1.0.3`, ...), so an open activation extends the
//! participant's alias and a close trims it again.

use std::fmt::Write;

use limner_core::{
    color::Color,
    render::{RenderError, Renderer},
    sequence::{ParticipantKind, SequenceModel, Step},
};

use super::{NoteAnchor, participant_aliases};

const LOOP_FILL: &str = "#ffdfbf";
const CONDITION_FILL: &str = "#ffdfbf";
const CASE_FILL: &str = "#f6c5c2";

/// Renders sequence diagrams as D2 `sequence_diagram` shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct D2;

impl Renderer for D2 {
    fn name(&self) -> &'static str {
        "d2"
    }

    fn render_sequence(&self, model: &SequenceModel) -> Result<String, RenderError> {
        render(model)
    }
}

/// D2 labels take `\n` for line breaks and must not be empty.
fn label(text: &str) -> String {
    if text.is_empty() {
        "''".to_string()
    } else {
        text.replace('\n', "\\n")
    }
}

fn fill(color: Option<&Color>, default: &str) -> String {
    color.map_or_else(|| default.to_string(), Color::as_hex)
}

/// D2 opens a span before the message that triggers it: an activation right
/// after a forward to the same participant moves in front of the forward.
fn reorder_spans(steps: &[Step]) -> Vec<&Step> {
    let mut ordered: Vec<&Step> = steps.iter().collect();
    for index in 1..ordered.len() {
        if let (Step::Forward(message), Step::Activation(activation)) =
            (ordered[index - 1], ordered[index])
        {
            if activation.is_active() && activation.participant() == message.to() {
                ordered.swap(index - 1, index);
            }
        }
    }
    ordered
}

fn render(model: &SequenceModel) -> Result<String, RenderError> {
    let mut aliases = participant_aliases(model);
    let mut anchor = NoteAnchor::new(model);
    let mut spans = 0usize;
    let mut conditions = 0usize;

    let mut out = String::new();
    writeln!(out, "title: {} {{", label(model.title()))?;
    writeln!(out, "shape: sequence_diagram")?;

    // Participant groups have no counterpart inside a D2 sequence diagram.
    for (id, alias) in &aliases {
        let participant = model.participant(*id);
        let mut attributes = Vec::new();
        if participant.kind() == ParticipantKind::Actor {
            attributes.push("shape: person".to_string());
        }
        if let Some(color) = participant.color() {
            attributes.push(format!("style.fill: \"{}\"", color.as_hex()));
        }
        let attributes = if attributes.is_empty() {
            String::new()
        } else {
            format!("{{{}}}", attributes.join("; "))
        };
        writeln!(out, "{alias}: {} {attributes}", label(participant.title()))?;
    }

    for step in reorder_spans(model.steps()) {
        anchor.follow(step);
        match step {
            Step::Activation(activation) => {
                let Some(alias) = aliases.get_mut(&activation.participant()) else {
                    continue;
                };
                if activation.is_active() {
                    write!(alias, ".{spans}")?;
                    spans += 1;
                } else if let Some(dot) = alias.rfind('.') {
                    alias.truncate(dot);
                }
            }
            Step::Forward(message) => writeln!(
                out,
                "{} -> {}: {}",
                aliases[&message.from()],
                aliases[&message.to()],
                label(message.text())
            )?,
            Step::Return(message) => writeln!(
                out,
                "{} -> {}: {} {{style.stroke-dash: 3}}",
                aliases[&message.from()],
                aliases[&message.to()],
                label(message.text())
            )?,
            Step::Group(control) if control.is_active() => {
                writeln!(out, "{}: {{", label(control.label()))?;
                if let Some(color) = control.color() {
                    writeln!(out, "style: {{\nfill: \"{}\"\n}}", color.as_hex())?;
                }
            }
            Step::Loop(control) if control.is_active() => writeln!(
                out,
                "LOOP {}: {{\nstyle: {{\nborder-radius: 50\nfill: \"{}\"\n}}",
                label(control.label()),
                fill(control.color(), LOOP_FILL)
            )?,
            Step::Condition(control) if control.is_active() => {
                conditions += 1;
                writeln!(
                    out,
                    "alt{conditions}: ALT {{\nstyle: {{\nfill: \"{}\"\n}}",
                    fill(control.color(), CONDITION_FILL)
                )?;
            }
            Step::Case(control) if control.is_active() => writeln!(
                out,
                "CASE {}: {{\nstyle: {{\nfill: \"{}\"\n}}",
                label(control.label()),
                fill(control.color(), CASE_FILL)
            )?,
            Step::Group(_) | Step::Loop(_) | Step::Condition(_) | Step::Case(_) => {
                writeln!(out, "}}")?;
            }
            Step::Note(note) => {
                if let Some(id) = anchor.get() {
                    write!(out, "{}.\"{}\"", aliases[&id], label(note.text()))?;
                    match note.color() {
                        Some(color) => writeln!(out, ": {{style.fill: \"{}\"}}", color.as_hex())?,
                        None => writeln!(out)?,
                    }
                }
            }
            _ => {}
        }
    }

    writeln!(out, "}}")?;
    Ok(out)
}
