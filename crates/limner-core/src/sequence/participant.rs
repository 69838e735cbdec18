//! Participants, their types and the groups that box them.

use std::{fmt, ptr};

use crate::{
    color::Color,
    error::ChartingError,
    sequence::{SequenceDiagram, step::Message},
};

/// Stable identifier of a participant within one diagram.
///
/// Identifiers index the diagram's participant list in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(usize);

impl ParticipantId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Creation index of the participant.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The Entity-Control-Boundary type tag of a participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParticipantKind {
    #[default]
    Default,
    Actor,
    Boundary,
    Control,
    Entity,
}

impl ParticipantKind {
    /// Lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Actor => "actor",
            Self::Boundary => "boundary",
            Self::Control => "control",
            Self::Entity => "entity",
        }
    }

    /// Checks whether two kinds may exchange messages.
    ///
    /// The relation is symmetric. `Default` interacts with everything, which
    /// lets typed and untyped participants mix.
    ///
    /// # Examples
    ///
    /// ```
    /// use limner_core::sequence::ParticipantKind;
    ///
    /// assert!(ParticipantKind::Actor.can_interact_with(ParticipantKind::Boundary));
    /// assert!(ParticipantKind::Entity.can_interact_with(ParticipantKind::Control));
    /// assert!(!ParticipantKind::Actor.can_interact_with(ParticipantKind::Entity));
    /// ```
    pub fn can_interact_with(self, other: Self) -> bool {
        use ParticipantKind::*;

        matches!(
            (self, other),
            (Default, _)
                | (_, Default)
                | (Actor, Boundary)
                | (Boundary, Actor)
                | (Boundary, Control)
                | (Control, Boundary)
                | (Control, Control)
                | (Control, Entity)
                | (Entity, Control)
                | (Entity, Entity)
        )
    }
}

impl fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The stored description of a participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRecord {
    title: String,
    color: Option<Color>,
    kind: ParticipantKind,
}

impl ParticipantRecord {
    pub(crate) fn new(title: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            title: title.into(),
            color,
            kind: ParticipantKind::Default,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn kind(&self) -> ParticipantKind {
        self.kind
    }

    /// Sets the type tag. Only a default-typed participant may be retyped.
    pub(crate) fn set_kind(&mut self, kind: ParticipantKind) -> Result<(), ChartingError> {
        if self.kind != ParticipantKind::Default {
            return Err(ChartingError::ParticipantTypeAlreadySet {
                title: self.title.clone(),
                kind: self.kind.to_string(),
            });
        }
        self.kind = kind;
        Ok(())
    }
}

/// A visual box around participants.
///
/// The default group has no title and collects every participant that was not
/// moved into a named group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantGroup {
    title: Option<String>,
    color: Option<Color>,
    members: Vec<ParticipantId>,
}

impl ParticipantGroup {
    pub(crate) fn default_group() -> Self {
        Self {
            title: None,
            color: None,
            members: Vec::new(),
        }
    }

    pub(crate) fn named(
        title: impl Into<String>,
        color: Option<Color>,
        members: Vec<ParticipantId>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            color,
            members,
        }
    }

    /// Title of the group, `None` for the default group.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn members(&self) -> &[ParticipantId] {
        &self.members
    }

    pub fn is_default(&self) -> bool {
        self.title.is_none()
    }

    pub(crate) fn push(&mut self, id: ParticipantId) {
        self.members.push(id);
    }

    pub(crate) fn contains(&self, id: ParticipantId) -> bool {
        self.members.contains(&id)
    }

    pub(crate) fn remove(&mut self, id: ParticipantId) {
        self.members.retain(|member| *member != id);
    }
}

/// A handle to a participant of a [`SequenceDiagram`].
///
/// Handles are cheap to copy and borrow the diagram they belong to. Every
/// message method returns the target participant so interactions chain:
///
/// ```
/// # use limner_core::{render::Renderer, sequence::SequenceDiagram};
/// # #[derive(Debug)] struct Nothing;
/// # impl Renderer for Nothing { fn name(&self) -> &'static str { "nothing" } }
/// let sd = SequenceDiagram::new("Chain", Nothing);
/// let a = sd.participant("A", None)?;
/// let b = sd.participant("B", None)?;
/// let c = sd.participant("C", None)?;
/// a.go_to(b, "1")?.go_to(c, "2")?.return_to(b, "3")?.return_to(a, "4")?;
/// # Ok::<(), limner_core::error::ChartingError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Participant<'d> {
    diagram: &'d SequenceDiagram,
    id: ParticipantId,
}

impl<'d> Participant<'d> {
    pub(crate) fn new(diagram: &'d SequenceDiagram, id: ParticipantId) -> Self {
        Self { diagram, id }
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn title(&self) -> String {
        self.diagram.with_record(self.id, |record| record.title().to_string())
    }

    pub fn kind(&self) -> ParticipantKind {
        self.diagram.with_record(self.id, ParticipantRecord::kind)
    }

    pub fn color(&self) -> Option<Color> {
        self.diagram
            .with_record(self.id, |record| record.color().cloned())
    }

    /// Sends a message to `to` and returns `to`.
    ///
    /// # Errors
    ///
    /// Fails if `to` belongs to another diagram, if the two participant types
    /// cannot interact, or if the message would be the first step of a
    /// condition.
    pub fn go_to(self, to: Participant<'d>, text: &str) -> Result<Participant<'d>, ChartingError> {
        self.check_interaction(to)?;
        self.diagram
            .record_forward(Message::new(text, self.id, to.id))?;
        Ok(to)
    }

    /// Sends a return message to `to` and returns `to`.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Participant::go_to`].
    pub fn return_to(
        self,
        to: Participant<'d>,
        text: &str,
    ) -> Result<Participant<'d>, ChartingError> {
        self.check_interaction(to)?;
        self.diagram
            .record_return(Message::new(text, self.id, to.id))?;
        Ok(to)
    }

    /// Opens an activation on this participant around `body`.
    ///
    /// The closing control is recorded whether or not `body` succeeds, and
    /// independently of the diagram's auto-activation setting.
    ///
    /// # Errors
    ///
    /// Fails on an invalid color, on misplaced scopes, or with whatever
    /// `body` returns.
    pub fn activate<T, E, F>(self, color: Option<&str>, body: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<ChartingError>,
    {
        self.diagram.activation_scope(self.id, color, body)
    }

    pub fn as_actor(self) -> Result<Self, ChartingError> {
        self.retype(ParticipantKind::Actor)
    }

    pub fn as_boundary(self) -> Result<Self, ChartingError> {
        self.retype(ParticipantKind::Boundary)
    }

    pub fn as_control(self) -> Result<Self, ChartingError> {
        self.retype(ParticipantKind::Control)
    }

    pub fn as_entity(self) -> Result<Self, ChartingError> {
        self.retype(ParticipantKind::Entity)
    }

    /// Returns `true` if this handle was issued by `diagram`.
    pub(crate) fn belongs_to(&self, diagram: &SequenceDiagram) -> bool {
        ptr::eq(self.diagram, diagram)
    }

    fn retype(self, kind: ParticipantKind) -> Result<Self, ChartingError> {
        self.diagram.set_kind(self.id, kind)?;
        Ok(self)
    }

    fn check_interaction(&self, to: Participant<'d>) -> Result<(), ChartingError> {
        if !to.belongs_to(self.diagram) {
            return Err(ChartingError::ForeignEntity(format!(
                "participant `{}`",
                to.title()
            )));
        }
        let (from_kind, to_kind) = (self.kind(), to.kind());
        if !from_kind.can_interact_with(to_kind) {
            return Err(ChartingError::IncompatibleParticipants {
                from: from_kind.to_string(),
                to: to_kind.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Participant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("title", &self.title())
            .finish()
    }
}

impl PartialEq for Participant<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.diagram, other.diagram) && self.id == other.id
    }
}

impl Eq for Participant<'_> {}
