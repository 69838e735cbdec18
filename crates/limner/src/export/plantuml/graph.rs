use std::{collections::HashMap, fmt::Write};

use limner_core::{
    graph::{EntityId, EntityKind, GraphModel},
    render::RenderError,
};

use super::{color_suffix, line_break};

pub(super) fn render(model: &GraphModel) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, "@startuml")?;
    writeln!(out, "title {}", line_break(model.title()))?;
    writeln!(out, "hide empty description")?;

    let mut aliases = HashMap::new();
    write_level(&mut out, model, model.root(), 0, &mut aliases)?;

    writeln!(out, "@enduml")?;
    Ok(out)
}

fn write_level(
    out: &mut String,
    model: &GraphModel,
    owner: EntityId,
    depth: usize,
    aliases: &mut HashMap<EntityId, String>,
) -> Result<(), RenderError> {
    let ident = " ".repeat(depth);
    let (arrow, note_side) = if model.is_vertical() {
        ("-->", "right")
    } else {
        ("->", "bottom")
    };
    let level = model.entity(owner);

    for (id, _) in level.inner() {
        let entity = model.entity(id);
        let alias = match entity.kind() {
            EntityKind::Start | EntityKind::Finish => "[*]".to_string(),
            _ => format!("n{}", aliases.len()),
        };
        aliases.insert(id, alias.clone());

        match entity.kind() {
            EntityKind::Condition => writeln!(out, "{ident}state {alias} <<choice>>")?,
            EntityKind::Join => writeln!(out, "{ident}state {alias} <<join>>")?,
            EntityKind::Fork => writeln!(out, "{ident}state {alias} <<fork>>")?,
            EntityKind::Node => {
                write!(
                    out,
                    "{ident}state \"{}\" as {alias}{}",
                    line_break(entity.title()),
                    color_suffix(entity.color())
                )?;
                if entity.is_group() {
                    writeln!(out, " {{")?;
                    write_level(out, model, id, depth + 2, aliases)?;
                    writeln!(out, "{ident}}}")?;
                } else {
                    writeln!(out)?;
                }
                for note in entity.notes() {
                    writeln!(out, "{ident}note {note_side} of {alias} : {}", line_break(note))?;
                }
            }
            EntityKind::Start | EntityKind::Finish => {}
        }
    }

    for (id, routes) in level.inner() {
        for route in routes {
            write!(out, "{ident}{} {arrow} {}", aliases[&id], aliases[&route.to()])?;
            if route.text().is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, " : {}", line_break(route.text()))?;
            }
        }
    }
    Ok(())
}
