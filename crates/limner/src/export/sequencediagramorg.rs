//! Output for the sequencediagram.org editor.

use std::fmt::Write;

use limner_core::{
    color::Color,
    render::{RenderError, Renderer},
    sequence::{SequenceModel, Step},
};

use super::{NoteAnchor, participant_aliases, participant_keyword};

/// Renders sequence diagrams for sequencediagram.org.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceDiagramOrg;

impl Renderer for SequenceDiagramOrg {
    fn name(&self) -> &'static str {
        "sequencediagramorg"
    }

    fn render_sequence(&self, model: &SequenceModel) -> Result<String, RenderError> {
        render(model)
    }
}

fn line_break(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// Scope labels must stay on a single line.
fn single_line(text: &str) -> String {
    text.replace('\n', " ")
}

fn color_suffix(color: Option<&Color>) -> String {
    color
        .map(|color| format!(" {}", color.as_hex()))
        .unwrap_or_default()
}

fn render(model: &SequenceModel) -> Result<String, RenderError> {
    let aliases = participant_aliases(model);
    let mut anchor = NoteAnchor::new(model);
    let mut first_case = false;

    let mut out = String::new();
    writeln!(out, "title {}", line_break(model.title()))?;

    for group in model.participant_groups() {
        if let Some(title) = group.title() {
            writeln!(
                out,
                "participantgroup{} **{}**",
                color_suffix(group.color()),
                single_line(title)
            )?;
        }
        for id in group.members() {
            let participant = model.participant(*id);
            writeln!(
                out,
                "{} \"{}\" as {}{}",
                participant_keyword(participant.kind()),
                line_break(participant.title()),
                aliases[id],
                color_suffix(participant.color())
            )?;
        }
        if group.title().is_some() {
            writeln!(out, "end")?;
        }
    }

    for step in model.steps() {
        anchor.follow(step);
        match step {
            Step::Activation(activation) if activation.is_active() => writeln!(
                out,
                "activate {}{}",
                aliases[&activation.participant()],
                color_suffix(activation.color())
            )?,
            Step::Activation(activation) => {
                writeln!(out, "deactivate {}", aliases[&activation.participant()])?;
            }
            Step::Forward(message) => writeln!(
                out,
                "{}->{}: {}",
                aliases[&message.from()],
                aliases[&message.to()],
                line_break(message.text())
            )?,
            Step::Return(message) => writeln!(
                out,
                "{}-->{}: {}",
                aliases[&message.from()],
                aliases[&message.to()],
                line_break(message.text())
            )?,
            Step::Group(control) if control.is_active() => writeln!(
                out,
                "group{} [{}]",
                color_suffix(control.color()),
                single_line(control.label())
            )?,
            Step::Loop(control) if control.is_active() => writeln!(
                out,
                "loop{} {}",
                color_suffix(control.color()),
                single_line(control.label())
            )?,
            Step::Condition(control) if control.is_active() => first_case = true,
            Step::Condition(_) => {
                first_case = false;
                writeln!(out, "end")?;
            }
            Step::Group(_) | Step::Loop(_) => writeln!(out, "end")?,
            Step::Case(control) if control.is_active() => {
                let keyword = if first_case { "alt" } else { "else" };
                first_case = false;
                writeln!(
                    out,
                    "{keyword}{} {}",
                    color_suffix(control.color()),
                    single_line(control.label())
                )?;
            }
            Step::Note(note) => {
                if let Some(id) = anchor.get() {
                    writeln!(
                        out,
                        "note right of {}{}: {}",
                        aliases[&id],
                        color_suffix(note.color()),
                        line_break(note.text())
                    )?;
                }
            }
            _ => {}
        }
    }

    Ok(out)
}
