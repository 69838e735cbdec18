use std::fmt::Write;

use limner_core::{
    render::RenderError,
    sequence::{ParticipantKind, SequenceModel, Step},
};

use super::line_break;
use crate::export::{NoteAnchor, participant_aliases};

/// Background colors cycled through by uncolored groups, so nested groups
/// stay distinguishable.
const GROUP_COLORS: [&str; 6] = [
    "rgb(121, 210, 166)",
    "rgb(51, 153, 102)",
    "rgb(153, 221, 255)",
    "rgb(51, 187, 255)",
    "rgb(0, 179, 179)",
    "rgb(184, 184, 148)",
];

fn keyword(kind: ParticipantKind) -> &'static str {
    match kind {
        ParticipantKind::Actor => "actor",
        _ => "participant",
    }
}

pub(super) fn render(model: &SequenceModel) -> Result<String, RenderError> {
    let aliases = participant_aliases(model);
    let mut anchor = NoteAnchor::new(model);
    let mut group_colors = GROUP_COLORS.iter().cycle();
    let mut first_case = false;
    // One entry per open loop or condition: whether it sits inside a colored `rect`.
    let mut wrapped: Vec<bool> = Vec::new();

    let mut out = String::new();
    writeln!(out, "sequenceDiagram")?;
    writeln!(out, "Title: {}", model.title().replace('\n', " "))?;

    for group in model.participant_groups() {
        if let Some(title) = group.title() {
            let title = title.replace('\n', " ");
            match group.color() {
                Some(color) => writeln!(out, "box {} {title}", color.as_rgb())?,
                None => writeln!(out, "box {title}")?,
            }
        }
        for id in group.members() {
            let participant = model.participant(*id);
            writeln!(
                out,
                "{} {} as {}",
                keyword(participant.kind()),
                aliases[id],
                line_break(participant.title())
            )?;
        }
        if group.title().is_some() {
            writeln!(out, "end")?;
        }
    }

    for step in model.steps() {
        anchor.follow(step);
        match step {
            Step::Activation(activation) => {
                let verb = if activation.is_active() { "activate" } else { "deactivate" };
                writeln!(out, "{verb} {}", aliases[&activation.participant()])?;
            }
            Step::Forward(message) => writeln!(
                out,
                "{}->>{}: {}",
                aliases[&message.from()],
                aliases[&message.to()],
                line_break(message.text())
            )?,
            Step::Return(message) => writeln!(
                out,
                "{}-->>{}: {}",
                aliases[&message.from()],
                aliases[&message.to()],
                line_break(message.text())
            )?,
            Step::Group(control) if control.is_active() => {
                // Mermaid has no native group: a background rectangle plus a note.
                match control.color() {
                    Some(color) => writeln!(out, "rect {}", color.as_rgb())?,
                    None => {
                        if let Some(color) = group_colors.next() {
                            writeln!(out, "rect {color}")?;
                        }
                    }
                }
                if let Some(id) = anchor.get() {
                    writeln!(
                        out,
                        "note right of {}: {}",
                        aliases[&id],
                        line_break(control.label())
                    )?;
                }
            }
            Step::Loop(control) | Step::Condition(control) if control.is_active() => {
                if let Some(color) = control.color() {
                    writeln!(out, "rect {}", color.as_rgb())?;
                }
                wrapped.push(control.color().is_some());
                if let Step::Loop(_) = step {
                    writeln!(out, "loop {}", line_break(control.label()))?;
                } else {
                    first_case = true;
                }
            }
            Step::Loop(_) | Step::Condition(_) => {
                writeln!(out, "end")?;
                if wrapped.pop() == Some(true) {
                    writeln!(out, "end")?;
                }
                if let Step::Condition(_) = step {
                    first_case = false;
                }
            }
            Step::Group(_) => writeln!(out, "end")?,
            Step::Case(control) if control.is_active() => {
                let keyword = if first_case { "alt" } else { "else" };
                first_case = false;
                writeln!(out, "{keyword} {}", line_break(control.label()))?;
            }
            Step::Note(note) => {
                if let Some(id) = anchor.get() {
                    writeln!(out, "note right of {}: {}", aliases[&id], line_break(note.text()))?;
                }
            }
            _ => {}
        }
    }

    Ok(out)
}
