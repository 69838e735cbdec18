//! Graphviz DOT output for graph diagrams.
//!
//! Composite states become `cluster_` subgraphs. DOT cannot lay those out
//! with a direction, so a diagram with any top-level group switches to the
//! `fdp` engine and ignores its orientation.

use std::{collections::HashMap, fmt::Write};

use limner_core::{
    graph::{EntityId, EntityKind, GraphModel},
    render::{RenderError, Renderer},
};

/// Renders graph diagrams as a Graphviz `digraph`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Graphviz;

impl Renderer for Graphviz {
    fn name(&self) -> &'static str {
        "graphviz"
    }

    fn render_graph(&self, model: &GraphModel) -> Result<String, RenderError> {
        render(model)
    }
}

fn label(text: &str) -> String {
    if text.is_empty() {
        "''".to_string()
    } else {
        text.replace('\n', "\\n")
    }
}

fn render(model: &GraphModel) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, "digraph limner_graph {{")?;
    // The doubled break keeps the title clear of the graph.
    writeln!(out, "    label = \"{}\\n\\n\"", label(model.title()))?;
    writeln!(out, "    labelloc = t")?;

    let composite = model
        .entity(model.root())
        .inner()
        .any(|(id, _)| model.entity(id).is_group());
    if composite {
        writeln!(out, "    layout=fdp\n    sep=1\n    K=2\n    overlap=scalexy")?;
    } else {
        writeln!(out, "    layout=dot")?;
        if !model.is_vertical() {
            writeln!(out, "    rankdir=LR")?;
        }
    }

    let mut aliases = HashMap::new();
    write_level(&mut out, model, model.root(), 0, &mut aliases)?;

    writeln!(out, "}}")?;
    Ok(out)
}

fn write_level(
    out: &mut String,
    model: &GraphModel,
    owner: EntityId,
    depth: usize,
    aliases: &mut HashMap<EntityId, String>,
) -> Result<(), RenderError> {
    let ident = "    ".repeat(depth + 1);
    let level = model.entity(owner);
    // A finish is only drawn once something in this level leads to it.
    let finish_used = level.inner().any(|(_, routes)| {
        routes
            .iter()
            .any(|route| model.entity(route.to()).kind() == EntityKind::Finish)
    });
    let bar = if model.is_vertical() { "height" } else { "width" };

    for (id, routes) in level.inner() {
        let entity = model.entity(id);
        let alias = format!("n{}", aliases.len());
        aliases.insert(id, alias.clone());

        match entity.kind() {
            EntityKind::Start if !routes.is_empty() => writeln!(
                out,
                "{ident}{alias} [shape = \"circle\", style = \"filled\", fillcolor = \"black\", \
                 label = \"\", fixedsize = true, height = 0.2]"
            )?,
            EntityKind::Finish if finish_used => writeln!(
                out,
                "{ident}{alias} [shape = \"doublecircle\", style = \"filled\", fillcolor = \"black\", \
                 label = \"\", fixedsize = true, height = 0.2]"
            )?,
            EntityKind::Join | EntityKind::Fork => writeln!(
                out,
                "{ident}{alias} [style = \"filled\", fillcolor = \"black\", shape = \"box\", \
                 label = \"\", {bar} = 0.1]"
            )?,
            EntityKind::Condition => {
                let fill = entity
                    .color()
                    .map_or_else(|| "white".to_string(), |color| color.as_hex());
                writeln!(
                    out,
                    "{ident}{alias} [style = \"filled\", fillcolor = \"{fill}\", shape = \"diamond\", \
                     label = \"\", height = 0.2, width = 0.2]"
                )?;
            }
            EntityKind::Node if entity.is_group() => {
                let cluster = format!("cluster_{alias}");
                writeln!(out, "{ident}subgraph {cluster} {{")?;
                if !entity.title().is_empty() {
                    writeln!(out, "{ident}    label = \"{}\"", label(entity.title()))?;
                }
                if let Some(color) = entity.color() {
                    writeln!(out, "{ident}    style = \"filled\"")?;
                    writeln!(out, "{ident}    fillcolor = \"{}\"", color.as_hex())?;
                }
                aliases.insert(id, cluster);
                write_level(out, model, id, depth + 1, aliases)?;
                writeln!(out, "{ident}}}")?;
            }
            EntityKind::Node => {
                let fill = entity
                    .color()
                    .map_or_else(|| "lightgrey".to_string(), |color| color.as_hex());
                writeln!(
                    out,
                    "{ident}{alias} [style = \"rounded,filled\", shape = \"box\", label = \"{}\", \
                     fillcolor = \"{fill}\"]",
                    label(entity.title())
                )?;
            }
            EntityKind::Start | EntityKind::Finish => {}
        }
    }

    for (id, routes) in level.inner() {
        let from = &aliases[&id];
        for route in routes {
            write!(out, "{ident}{from} -> {}", aliases[&route.to()])?;
            if route.text().is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, " [label = \"{}\"]", label(route.text()))?;
            }
        }

        // DOT has no notes: each one is a note-shaped node with a dotted edge.
        for (index, note) in model.entity(id).notes().iter().enumerate() {
            let note_alias = format!("note{index}_for_{from}");
            writeln!(
                out,
                "{ident}{note_alias} [shape = \"note\", style=\"filled\", fillcolor=\"lightyellow\", \
                 label=\"{}\"]",
                label(note)
            )?;
            writeln!(out, "{ident}{from} -> {note_alias} [style = \"dotted\"]")?;
        }
    }
    Ok(())
}
