use std::fmt::Write;

use limner_core::{
    color::Color,
    render::RenderError,
    sequence::{ParticipantId, SequenceModel, Step},
};

use super::{color_suffix, line_break};
use crate::export::{NoteAnchor, participant_aliases, participant_keyword};

pub(super) fn render(model: &SequenceModel) -> Result<String, RenderError> {
    let aliases = participant_aliases(model);
    let mut anchor = NoteAnchor::new(model);
    let mut first_case = false;
    let mut condition_colors: Vec<Option<&Color>> = Vec::new();
    // PlantUML refuses to re-activate a lifeline right after deactivating it.
    let mut just_deactivated: Option<ParticipantId> = None;

    let mut out = String::new();
    writeln!(out, "@startuml")?;
    writeln!(out, "title: {}", line_break(model.title()))?;

    for group in model.participant_groups() {
        if let Some(title) = group.title() {
            writeln!(out, "box \"{}\"{}", line_break(title), color_suffix(group.color()))?;
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
            writeln!(out, "end box")?;
        }
    }

    for step in model.steps() {
        anchor.follow(step);
        match step {
            Step::Activation(activation) if activation.is_active() => {
                let alias = &aliases[&activation.participant()];
                if just_deactivated == Some(activation.participant()) {
                    writeln!(out, "{alias} -[hidden]-> {alias}")?;
                }
                writeln!(out, "activate {alias}{}", color_suffix(activation.color()))?;
                just_deactivated = None;
            }
            Step::Activation(activation) => {
                writeln!(out, "deactivate {}", aliases[&activation.participant()])?;
                just_deactivated = Some(activation.participant());
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
                "group{} {}",
                color_suffix(control.color()),
                line_break(control.label())
            )?,
            Step::Loop(control) if control.is_active() => writeln!(
                out,
                "loop{} {}",
                color_suffix(control.color()),
                line_break(control.label())
            )?,
            Step::Condition(control) if control.is_active() => {
                condition_colors.push(control.color());
                first_case = true;
            }
            Step::Condition(_) => {
                condition_colors.pop();
                first_case = false;
                writeln!(out, "end")?;
            }
            Step::Group(_) | Step::Loop(_) => writeln!(out, "end")?,
            Step::Case(control) if control.is_active() => {
                let (keyword, color) = if first_case {
                    let inherited = condition_colors.last().copied().flatten();
                    ("alt", control.color().or(inherited))
                } else {
                    ("else", control.color())
                };
                first_case = false;
                writeln!(out, "{keyword}{} {}", color_suffix(color), line_break(control.label()))?;
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

    writeln!(out, "@enduml")?;
    Ok(out)
}
