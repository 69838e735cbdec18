use std::{collections::HashMap, fmt::Write};

use limner_core::{
    graph::{EntityId, EntityKind, GraphModel},
    render::RenderError,
};

use super::line_break;

/// Edge labels and the title allow neither line breaks nor colons.
fn flatten(text: &str) -> String {
    text.replace('\n', " ").replace(':', "")
}

pub(super) fn render(model: &GraphModel) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, "---\ntitle: {}\n---\nstateDiagram-v2", flatten(model.title()))?;
    if !model.is_vertical() {
        writeln!(out, "direction LR")?;
    }

    let mut aliases = HashMap::new();
    write_level(&mut out, model, model.root(), 0, &mut aliases)?;
    Ok(out)
}

/// Writes the inner graph of `owner`: states first, then the transitions
/// between them.
fn write_level(
    out: &mut String,
    model: &GraphModel,
    owner: EntityId,
    depth: usize,
    aliases: &mut HashMap<EntityId, String>,
) -> Result<(), RenderError> {
    let ident = " ".repeat(depth);
    let top_level = owner == model.root();
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
                let title = line_break(entity.title());
                if entity.is_group() {
                    writeln!(out, "{ident}state \"{title}\" as {alias} {{")?;
                    write_level(out, model, id, depth + 2, aliases)?;
                    writeln!(out, "{ident}}}")?;
                } else {
                    writeln!(out, "{ident}state \"{title}\" as {alias}")?;
                }
                // Mermaid cannot style states nested in a composite state.
                if let Some(color) = entity.color().filter(|_| top_level) {
                    writeln!(out, "{ident}classDef cd_{alias} fill:{}", color.as_hex())?;
                    writeln!(out, "{ident}class {alias} cd_{alias}")?;
                }
                for note in entity.notes() {
                    writeln!(out, "{ident}note right of {alias}\n{note}\n{ident}end note")?;
                }
            }
            EntityKind::Start | EntityKind::Finish => {}
        }
    }

    for (id, routes) in level.inner() {
        for route in routes {
            writeln!(
                out,
                "{ident}{} --> {} : {}",
                aliases[&id],
                aliases[&route.to()],
                flatten(route.text())
            )?;
        }
    }
    Ok(())
}
