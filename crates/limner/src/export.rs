//! Renderers for the supported diagram languages.
//!
//! Every renderer is a unit struct implementing
//! [`Renderer`](limner_core::render::Renderer). [`Format`] names them so a
//! configuration file or command line can pick one.
//!
//! | format                 | sequence | graph |
//! |------------------------|----------|-------|
//! | [`Mermaid`]            | yes      | yes   |
//! | [`PlantUml`]           | yes      | yes   |
//! | [`D2`]                 | yes      | no    |
//! | [`SequenceDiagramOrg`] | yes      | no    |
//! | [`Graphviz`]           | no       | yes   |

mod d2;
#[cfg(feature = "graphviz")]
mod graphviz;
mod mermaid;
mod plantuml;
mod sequencediagramorg;

pub use d2::D2;
#[cfg(feature = "graphviz")]
pub use graphviz::Graphviz;
pub use mermaid::Mermaid;
pub use plantuml::PlantUml;
pub use sequencediagramorg::SequenceDiagramOrg;

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use limner_core::{
    render::Renderer,
    sequence::{ParticipantId, ParticipantKind, SequenceModel, Step},
};

/// The selectable output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Mermaid,
    #[serde(rename = "plantuml")]
    PlantUml,
    D2,
    #[serde(rename = "sequencediagramorg")]
    SequenceDiagramOrg,
    #[cfg(feature = "graphviz")]
    Graphviz,
}

impl Format {
    /// Every format compiled into this build.
    pub const ALL: &'static [Format] = &[
        Format::Mermaid,
        Format::PlantUml,
        Format::D2,
        Format::SequenceDiagramOrg,
        #[cfg(feature = "graphviz")]
        Format::Graphviz,
    ];

    /// Creates the renderer for this format.
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Mermaid => Box::new(Mermaid),
            Self::PlantUml => Box::new(PlantUml),
            Self::D2 => Box::new(D2),
            Self::SequenceDiagramOrg => Box::new(SequenceDiagramOrg),
            #[cfg(feature = "graphviz")]
            Self::Graphviz => Box::new(Graphviz),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mermaid => "mermaid",
            Self::PlantUml => "plantuml",
            Self::D2 => "d2",
            Self::SequenceDiagramOrg => "sequencediagramorg",
            #[cfg(feature = "graphviz")]
            Self::Graphviz => "graphviz",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|format| format.as_str()).collect();
                format!("unknown format `{s}`, expected one of: {}", known.join(", "))
            })
    }
}

/// Participant aliases `p1..pN`, keyed in declaration order.
fn participant_aliases(model: &SequenceModel) -> IndexMap<ParticipantId, String> {
    model
        .declaration_order()
        .enumerate()
        .map(|(index, id)| (id, format!("p{}", index + 1)))
        .collect()
}

/// Declaration keyword for languages that know every participant kind.
fn participant_keyword(kind: ParticipantKind) -> &'static str {
    match kind {
        ParticipantKind::Default => "participant",
        kind => kind.as_str(),
    }
}

/// The participant notes attach to: the target of the latest message, or
/// the first created participant before any message. Grouping reorders
/// display, not creation.
struct NoteAnchor(Option<ParticipantId>);

impl NoteAnchor {
    fn new(model: &SequenceModel) -> Self {
        Self(model.declaration_order().min())
    }

    fn follow(&mut self, step: &Step) {
        if let Step::Forward(message) | Step::Return(message) = step {
            self.0 = Some(message.to());
        }
    }

    fn get(&self) -> Option<ParticipantId> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use limner_core::sequence::SequenceDiagram;

    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("mermaid".parse::<Format>(), Ok(Format::Mermaid));
        assert_eq!("PlantUML".parse::<Format>(), Ok(Format::PlantUml));
        assert_eq!(
            "sequencediagramorg".parse::<Format>(),
            Ok(Format::SequenceDiagramOrg)
        );
        assert!("svg".parse::<Format>().is_err());
    }

    #[test]
    fn test_format_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>(), Ok(*format));
            assert_eq!(format.renderer().name(), format.as_str());
        }
    }

    #[test]
    fn test_aliases_follow_groups() {
        let sd = SequenceDiagram::new("Aliases", Mermaid);
        let a = sd.participant("A", None).unwrap();
        let b = sd.participant("B", None).unwrap();
        sd.group_participants("Box", &[a], None).unwrap();

        let model = sd.model();
        let aliases = participant_aliases(&model);
        assert_eq!(aliases[&b.id()], "p1");
        assert_eq!(aliases[&a.id()], "p2");
    }

    #[test]
    fn test_note_anchor_starts_at_first_created_participant() {
        let sd = SequenceDiagram::new("Anchor", Mermaid);
        let a = sd.participant("A", None).unwrap();
        let b = sd.participant("B", None).unwrap();
        sd.group_participants("G", &[a], None).unwrap();

        let model = sd.model();
        assert_eq!(model.declaration_order().next(), Some(b.id()));
        assert_eq!(NoteAnchor::new(&model).get(), Some(a.id()));
    }

    #[test]
    fn test_note_anchor_without_participants() {
        let sd = SequenceDiagram::new("Empty", Mermaid);
        assert_eq!(NoteAnchor::new(&sd.model()).get(), None);
    }
}
