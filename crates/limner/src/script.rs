//! Diagram scripts.
//!
//! A script is a TOML document describing one diagram. It is replayed through
//! the same builder API a Rust caller would use, so every rule the builders
//! enforce applies to scripts too.
//!
//! ```toml
//! kind = "sequence"
//! title = "Checkout"
//!
//! [[participants]]
//! title = "User"
//! kind = "actor"
//!
//! [[participants]]
//! title = "Shop"
//!
//! [[steps]]
//! op = "go_to"
//! from = "User"
//! to = "Shop"
//! text = "buy"
//!
//! [[steps]]
//! op = "return"
//! text = "receipt"
//! ```
//!
//! Graph scripts list `nodes` and `edges` per level instead. Edges name
//! entities by their `id`; `start` and `finish` name the level's own
//! pseudo-nodes.

use std::{collections::HashMap, ops::Range};

use log::{debug, info};
use serde::Deserialize;
use toml::Spanned;

use limner_core::{
    error::ChartingError,
    graph::{Condition, EntityId, Finish, Fork, GraphDiagram, GraphEntity, Join, Node, Start},
    sequence::{Participant, SequenceDiagram},
};

use crate::{Limner, error::LimnerError};

/// The kind of diagram a script describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    Sequence,
    Graph,
}

/// A parsed diagram script.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    kind: ScriptKind,
    title: String,
    auto_activation: Option<bool>,
    vertical: Option<bool>,
    #[serde(default)]
    participants: Vec<ParticipantSpec>,
    #[serde(default)]
    participant_groups: Vec<GroupSpec>,
    #[serde(default)]
    steps: Vec<StepSpec>,
    #[serde(default)]
    nodes: Vec<NodeSpec>,
    #[serde(default)]
    edges: Vec<EdgeSpec>,
    #[serde(skip)]
    source: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ParticipantKindSpec {
    #[default]
    Default,
    Actor,
    Boundary,
    Control,
    Entity,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParticipantSpec {
    title: Spanned<String>,
    #[serde(default)]
    kind: ParticipantKindSpec,
    color: Option<Spanned<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupSpec {
    title: Spanned<String>,
    members: Vec<Spanned<String>>,
    color: Option<Spanned<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum StepSpec {
    GoTo {
        from: String,
        to: String,
        #[serde(default)]
        text: String,
    },
    ReturnTo {
        from: String,
        to: String,
        #[serde(default)]
        text: String,
    },
    Return {
        #[serde(default)]
        text: String,
    },
    Note {
        text: String,
        color: Option<String>,
    },
    Loop {
        #[serde(default)]
        label: String,
        color: Option<String>,
        #[serde(default)]
        steps: Vec<StepSpec>,
    },
    Group {
        #[serde(default)]
        label: String,
        color: Option<String>,
        #[serde(default)]
        steps: Vec<StepSpec>,
    },
    Condition {
        color: Option<String>,
        #[serde(default)]
        cases: Vec<CaseSpec>,
    },
    Activate {
        participant: String,
        color: Option<String>,
        #[serde(default)]
        steps: Vec<StepSpec>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseSpec {
    #[serde(default)]
    label: String,
    color: Option<String>,
    #[serde(default)]
    steps: Vec<StepSpec>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NodeKindSpec {
    #[default]
    Node,
    Fork,
    Join,
    Condition,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSpec {
    id: Spanned<String>,
    #[serde(default)]
    kind: NodeKindSpec,
    /// Defaults to the id.
    title: Option<String>,
    color: Option<Spanned<String>>,
    #[serde(default)]
    notes: Vec<String>,
    #[serde(default)]
    nodes: Vec<NodeSpec>,
    #[serde(default)]
    edges: Vec<EdgeSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeSpec {
    from: Spanned<String>,
    to: Spanned<String>,
    #[serde(default)]
    text: String,
}

/// Any graph entity a script edge can name.
#[derive(Debug, Clone, Copy)]
enum Placed<'d> {
    Node(Node<'d>),
    Fork(Fork<'d>),
    Join(Join<'d>),
    Condition(Condition<'d>),
    Start(Start<'d>),
    Finish(Finish<'d>),
}

impl<'d> GraphEntity<'d> for Placed<'d> {
    fn diagram(&self) -> &'d GraphDiagram {
        match self {
            Self::Node(entity) => entity.diagram(),
            Self::Fork(entity) => entity.diagram(),
            Self::Join(entity) => entity.diagram(),
            Self::Condition(entity) => entity.diagram(),
            Self::Start(entity) => entity.diagram(),
            Self::Finish(entity) => entity.diagram(),
        }
    }

    fn id(&self) -> EntityId {
        match self {
            Self::Node(entity) => entity.id(),
            Self::Fork(entity) => entity.id(),
            Self::Join(entity) => entity.id(),
            Self::Condition(entity) => entity.id(),
            Self::Start(entity) => entity.id(),
            Self::Finish(entity) => entity.id(),
        }
    }
}

/// The owner of one graph level: the diagram itself or a node.
#[derive(Clone, Copy)]
enum Level<'d> {
    Top(&'d GraphDiagram),
    Inside(Node<'d>),
}

impl<'d> Level<'d> {
    fn node(self, title: &str, color: Option<&str>) -> Result<Node<'d>, ChartingError> {
        match self {
            Self::Top(diagram) => diagram.node(title, color),
            Self::Inside(node) => node.node(title, color),
        }
    }

    fn fork(self) -> Result<Fork<'d>, ChartingError> {
        match self {
            Self::Top(diagram) => diagram.fork(),
            Self::Inside(node) => node.fork(),
        }
    }

    fn join(self) -> Result<Join<'d>, ChartingError> {
        match self {
            Self::Top(diagram) => diagram.join(),
            Self::Inside(node) => node.join(),
        }
    }

    fn condition(self, color: Option<&str>) -> Result<Condition<'d>, ChartingError> {
        match self {
            Self::Top(diagram) => diagram.condition(color),
            Self::Inside(node) => node.condition(color),
        }
    }

    fn start(self) -> Start<'d> {
        match self {
            Self::Top(diagram) => diagram.start(),
            Self::Inside(node) => node.start(),
        }
    }

    fn finish(self) -> Finish<'d> {
        match self {
            Self::Top(diagram) => diagram.finish(),
            Self::Inside(node) => node.finish(),
        }
    }
}

type Participants<'a, 'd> = HashMap<&'a str, Participant<'d>>;

impl Script {
    /// Parses a script.
    ///
    /// # Errors
    ///
    /// Returns [`LimnerError::Script`] with the location of the problem when
    /// the source is not valid TOML or does not match the script schema.
    pub fn parse(source: &str) -> Result<Self, LimnerError> {
        let mut script: Self = toml::from_str(source).map_err(|err| {
            LimnerError::new_script_error(err.message(), err.span(), source)
        })?;
        script.source = source.to_string();
        debug!(kind:? = script.kind, title = script.title.as_str(); "Script parsed");
        Ok(script)
    }

    pub fn kind(&self) -> ScriptKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Builds the diagram with `limner`'s defaults and renders it.
    ///
    /// # Errors
    ///
    /// Fails when the script references unknown participants or entities,
    /// breaks a builder rule, or asks for a diagram kind the configured
    /// format cannot render.
    pub fn render(&self, limner: &Limner) -> Result<String, LimnerError> {
        info!(kind:? = self.kind, format:% = limner.format(); "Replaying script");
        match self.kind {
            ScriptKind::Sequence => self.render_sequence(limner),
            ScriptKind::Graph => self.render_graph(limner),
        }
    }

    fn render_sequence(&self, limner: &Limner) -> Result<String, LimnerError> {
        if !self.nodes.is_empty() || !self.edges.is_empty() {
            return Err(self.error("sequence scripts take `steps`, not `nodes` or `edges`", None));
        }

        let mut sd = limner.sequence_diagram(&self.title);
        if let Some(enabled) = self.auto_activation {
            sd = sd.with_auto_activation(enabled);
        }

        let mut participants = Participants::new();
        for spec in &self.participants {
            let color = spec.color.as_ref().map(|color| color.get_ref().as_str());
            let blame = |err: ChartingError| self.blame(err, &spec.title, spec.color.as_ref());

            let participant = sd.participant(spec.title.get_ref(), color).map_err(blame)?;
            let participant = match spec.kind {
                ParticipantKindSpec::Default => Ok(participant),
                ParticipantKindSpec::Actor => participant.as_actor(),
                ParticipantKindSpec::Boundary => participant.as_boundary(),
                ParticipantKindSpec::Control => participant.as_control(),
                ParticipantKindSpec::Entity => participant.as_entity(),
            }
            .map_err(blame)?;
            participants.insert(spec.title.get_ref().as_str(), participant);
        }

        for group in &self.participant_groups {
            let members = group
                .members
                .iter()
                .map(|member| {
                    participants.get(member.get_ref().as_str()).copied().ok_or_else(|| {
                        self.error(
                            format!("unknown participant `{}`", member.get_ref()),
                            Some(member.span()),
                        )
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let color = group.color.as_ref().map(|color| color.get_ref().as_str());
            sd.group_participants(group.title.get_ref(), &members, color)
                .map_err(|err| self.blame(err, &group.title, group.color.as_ref()))?;
        }

        self.replay_steps(&sd, &participants, &self.steps)?;
        Ok(sd.render()?)
    }

    fn replay_steps<'d>(
        &self,
        sd: &'d SequenceDiagram,
        participants: &Participants<'_, 'd>,
        steps: &[StepSpec],
    ) -> Result<(), LimnerError> {
        for step in steps {
            match step {
                StepSpec::GoTo { from, to, text } => {
                    let to = self.participant(participants, to)?;
                    self.participant(participants, from)?.go_to(to, text)?;
                }
                StepSpec::ReturnTo { from, to, text } => {
                    let to = self.participant(participants, to)?;
                    self.participant(participants, from)?.return_to(to, text)?;
                }
                StepSpec::Return { text } => sd.return_(text)?,
                StepSpec::Note { text, color } => sd.note(text, color.as_deref())?,
                StepSpec::Loop {
                    label,
                    color,
                    steps,
                } => sd.loop_(label, color.as_deref(), || {
                    self.replay_steps(sd, participants, steps)
                })?,
                StepSpec::Group {
                    label,
                    color,
                    steps,
                } => sd.group(label, color.as_deref(), || {
                    self.replay_steps(sd, participants, steps)
                })?,
                StepSpec::Condition { color, cases } => {
                    sd.condition(color.as_deref(), || -> Result<(), LimnerError> {
                        for case in cases {
                            sd.case(&case.label, case.color.as_deref(), || {
                                self.replay_steps(sd, participants, &case.steps)
                            })?;
                        }
                        Ok(())
                    })?
                }
                StepSpec::Activate {
                    participant,
                    color,
                    steps,
                } => self
                    .participant(participants, participant)?
                    .activate(color.as_deref(), || {
                        self.replay_steps(sd, participants, steps)
                    })?,
            }
        }
        Ok(())
    }

    fn participant<'d>(
        &self,
        participants: &Participants<'_, 'd>,
        title: &str,
    ) -> Result<Participant<'d>, LimnerError> {
        participants
            .get(title)
            .copied()
            .ok_or_else(|| self.error(format!("unknown participant `{title}`"), None))
    }

    fn render_graph(&self, limner: &Limner) -> Result<String, LimnerError> {
        if !self.participants.is_empty()
            || !self.participant_groups.is_empty()
            || !self.steps.is_empty()
        {
            return Err(self.error(
                "graph scripts take `nodes` and `edges`, not `participants` or `steps`",
                None,
            ));
        }

        let mut gd = limner.graph_diagram(&self.title);
        if let Some(vertical) = self.vertical {
            gd = gd.with_vertical(vertical);
        }

        self.replay_level(Level::Top(&gd), &self.nodes, &self.edges)?;
        Ok(gd.render()?)
    }

    fn replay_level<'d>(
        &self,
        level: Level<'d>,
        nodes: &[NodeSpec],
        edges: &[EdgeSpec],
    ) -> Result<(), LimnerError> {
        let mut placed: HashMap<&str, Placed<'d>> = HashMap::new();
        placed.insert("start", Placed::Start(level.start()));
        placed.insert("finish", Placed::Finish(level.finish()));

        for spec in nodes {
            let id = spec.id.get_ref().as_str();
            if placed.contains_key(id) {
                return Err(self.error(
                    format!("id `{id}` is already used on this level"),
                    Some(spec.id.span()),
                ));
            }
            if spec.kind != NodeKindSpec::Node
                && (spec.title.is_some()
                    || !spec.notes.is_empty()
                    || !spec.nodes.is_empty()
                    || !spec.edges.is_empty())
            {
                return Err(self.error(
                    format!("only nodes take a title, notes or nested nodes, `{id}` does not"),
                    Some(spec.id.span()),
                ));
            }

            let color = spec.color.as_ref().map(|color| color.get_ref().as_str());
            let blame = |err: ChartingError| self.blame(err, &spec.id, spec.color.as_ref());
            let entity = match spec.kind {
                NodeKindSpec::Node => {
                    let title = spec.title.as_deref().unwrap_or(id);
                    let node = level.node(title, color).map_err(blame)?;
                    for note in &spec.notes {
                        node.note(note);
                    }
                    self.replay_level(Level::Inside(node), &spec.nodes, &spec.edges)?;
                    Placed::Node(node)
                }
                NodeKindSpec::Fork => Placed::Fork(level.fork().map_err(blame)?),
                NodeKindSpec::Join => Placed::Join(level.join().map_err(blame)?),
                NodeKindSpec::Condition => Placed::Condition(level.condition(color).map_err(blame)?),
            };
            placed.insert(id, entity);
        }

        for edge in edges {
            let lookup = |name: &Spanned<String>| {
                placed.get(name.get_ref().as_str()).copied().ok_or_else(|| {
                    self.error(
                        format!("unknown entity `{}` on this level", name.get_ref()),
                        Some(name.span()),
                    )
                })
            };
            let (from, to) = (lookup(&edge.from)?, lookup(&edge.to)?);
            from.go_to(to, &edge.text)
                .map_err(|err| self.error(err.to_string(), Some(covering(&edge.from, &edge.to))))?;
        }
        Ok(())
    }

    fn error(&self, message: impl Into<String>, span: Option<Range<usize>>) -> LimnerError {
        LimnerError::new_script_error(message, span, self.source.as_str())
    }

    /// Points a builder error at the color when the color was rejected, at
    /// `subject` otherwise.
    fn blame(
        &self,
        err: ChartingError,
        subject: &Spanned<String>,
        color: Option<&Spanned<String>>,
    ) -> LimnerError {
        let span = match (&err, color) {
            (ChartingError::InvalidColor(_), Some(color)) => color.span(),
            _ => subject.span(),
        };
        self.error(err.to_string(), Some(span))
    }
}

/// The smallest range covering both values.
fn covering(a: &Spanned<String>, b: &Spanned<String>) -> Range<usize> {
    let (a, b) = (a.span(), b.span());
    a.start.min(b.start)..a.end.max(b.end)
}
