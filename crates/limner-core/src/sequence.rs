//! Sequence diagrams.
//!
//! A [`SequenceDiagram`] owns the participants and a flat, ordered list of
//! [`Step`]s. Participants are addressed through copyable [`Participant`]
//! handles that borrow the diagram. Scoped constructs (loops, groups,
//! conditions, cases and manual activations) take a closure: the opening
//! control is recorded, the closure runs, and the closing control is
//! recorded on every exit path.
//!
//! # Auto-activation
//!
//! With auto-activation on (the default), forward and return messages are
//! read as calls and returns, and activation controls are emitted for them.
//! See [`SequenceDiagram::return_`] for returning from the innermost call
//! without naming its caller.
//!
//! # Example
//!
//! ```
//! use limner_core::{render::Renderer, sequence::SequenceDiagram};
//! # #[derive(Debug)] struct Nothing;
//! # impl Renderer for Nothing { fn name(&self) -> &'static str { "nothing" } }
//!
//! let sd = SequenceDiagram::new("Checkout", Nothing);
//! let user = sd.participant("User", None)?.as_actor()?;
//! let shop = sd.participant("Shop", None)?.as_boundary()?;
//!
//! sd.condition(None, || {
//!     sd.case("in stock", None, || {
//!         user.go_to(shop, "buy")?;
//!         sd.return_("receipt")
//!     })?;
//!     sd.case("sold out", None, || {
//!         user.go_to(shop, "buy")?;
//!         sd.return_("sorry")
//!     })
//! })?;
//! # Ok::<(), limner_core::error::ChartingError>(())
//! ```

mod activation;
mod participant;
mod step;

use std::cell::{Ref, RefCell};

use log::{debug, info, trace};

pub use participant::{
    Participant, ParticipantGroup, ParticipantId, ParticipantKind, ParticipantRecord,
};
pub use step::{Activation, Control, Message, Note, Step};

use crate::{
    color::Color,
    error::ChartingError,
    render::{RenderError, Renderer},
};
use activation::ActivationStack;

/// The finished content of a sequence diagram, as read by renderers.
#[derive(Debug, Clone)]
pub struct SequenceModel {
    title: String,
    auto_activation: bool,
    participants: Vec<ParticipantRecord>,
    groups: Vec<ParticipantGroup>,
    steps: Vec<Step>,
}

impl SequenceModel {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            auto_activation: true,
            participants: Vec::new(),
            groups: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn auto_activation(&self) -> bool {
        self.auto_activation
    }

    /// All participants in creation order.
    pub fn participants(&self) -> &[ParticipantRecord] {
        &self.participants
    }

    pub fn participant(&self, id: ParticipantId) -> &ParticipantRecord {
        &self.participants[id.index()]
    }

    /// Participant groups in display order, the default group included while
    /// it has members.
    pub fn participant_groups(&self) -> &[ParticipantGroup] {
        &self.groups
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Participants in the order renderers declare them: group by group,
    /// members in the order they joined.
    pub fn declaration_order(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.members().iter().copied())
    }

    fn find_participant(&self, title: &str) -> Option<ParticipantId> {
        self.participants
            .iter()
            .position(|record| record.title() == title)
            .map(ParticipantId::new)
    }

    fn default_group_mut(&mut self) -> Option<&mut ParticipantGroup> {
        self.groups.iter_mut().find(|group| group.is_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Loop,
    Group,
    Condition,
    Case,
    Activation,
}

/// Mutable builder state behind the diagram's `RefCell`.
#[derive(Debug)]
struct Builder {
    model: SequenceModel,
    activations: ActivationStack,
    scopes: Vec<Scope>,
}

impl Builder {
    /// Validates the ordering rules for conditions and cases.
    fn check_next(&self, step: &Step) -> Result<(), ChartingError> {
        if step.opens_case() && self.scopes.last() != Some(&Scope::Condition) {
            return Err(ChartingError::ScopeMisuse(
                "a case can only be opened directly inside a condition".to_string(),
            ));
        }
        if self.model.steps.last().is_some_and(Step::opens_condition) && !step.opens_case() {
            return Err(ChartingError::ScopeMisuse(format!(
                "the first step inside a condition must open a case, not a {}",
                step.kind_name()
            )));
        }
        Ok(())
    }

    fn push(&mut self, step: Step) {
        trace!(kind = step.kind_name(), index = self.model.steps.len(); "Recording step");

        let auto = self.model.auto_activation;
        let steps = &mut self.model.steps;
        match step {
            Step::Forward(message) if auto => self.activations.forward(message, steps),
            Step::Return(message) if auto => self.activations.backward(message, steps),
            step => steps.push(step),
        }
    }

    fn record(&mut self, step: Step) -> Result<(), ChartingError> {
        self.check_next(&step)?;
        self.push(step);
        Ok(())
    }

    fn open(&mut self, step: Step, scope: Scope) -> Result<(), ChartingError> {
        self.check_next(&step)?;
        self.push(step);
        self.scopes.push(scope);
        Ok(())
    }

    /// Records a closing control unconditionally so opens and closes stay
    /// paired, then reports any ordering violation it caused.
    fn close(&mut self, step: Step, scope: Scope) -> Result<(), ChartingError> {
        let checked = self.check_next(&step);
        self.push(step);
        let closed = self.scopes.pop();
        debug_assert_eq!(closed, Some(scope));
        checked
    }
}

/// A sequence diagram under construction.
#[derive(Debug)]
pub struct SequenceDiagram {
    builder: RefCell<Builder>,
    renderer: Box<dyn Renderer>,
}

impl SequenceDiagram {
    /// Creates an empty diagram with auto-activation enabled.
    pub fn new(title: impl Into<String>, renderer: impl Renderer + 'static) -> Self {
        let title = title.into();
        debug!(title = title.as_str(), renderer = renderer.name(); "Creating sequence diagram");
        Self {
            builder: RefCell::new(Builder {
                model: SequenceModel::new(title),
                activations: ActivationStack::default(),
                scopes: Vec::new(),
            }),
            renderer: Box::new(renderer),
        }
    }

    /// Turns auto-activation on or off. Meant to be chained onto [`SequenceDiagram::new`].
    pub fn with_auto_activation(self, enabled: bool) -> Self {
        self.builder.borrow_mut().model.auto_activation = enabled;
        self
    }

    /// Read access to the model built so far.
    ///
    /// # Panics
    ///
    /// Every builder method panics while the returned guard is alive. Drop it
    /// before recording more of the diagram.
    pub fn model(&self) -> Ref<'_, SequenceModel> {
        Ref::map(self.builder.borrow(), |builder| &builder.model)
    }

    /// Declares a participant.
    ///
    /// New participants join the default group, which is recreated at the end
    /// of the group list if every earlier participant was moved into a named
    /// group.
    ///
    /// # Errors
    ///
    /// Fails on an invalid color, or if any participant of this diagram
    /// already has the same title, whatever group it is in.
    pub fn participant(
        &self,
        title: &str,
        color: Option<&str>,
    ) -> Result<Participant<'_>, ChartingError> {
        let color = Color::parse_optional(color)?;
        let mut builder = self.builder.borrow_mut();
        let model = &mut builder.model;

        if model.find_participant(title).is_some() {
            return Err(ChartingError::DuplicateParticipant(title.to_string()));
        }

        let id = ParticipantId::new(model.participants.len());
        model.participants.push(ParticipantRecord::new(title, color));
        match model.default_group_mut() {
            Some(group) => group.push(id),
            None => {
                let mut group = ParticipantGroup::default_group();
                group.push(id);
                model.groups.push(group);
            }
        }

        debug!(title, id = id.index(); "Participant declared");
        Ok(Participant::new(self, id))
    }

    /// Moves ungrouped participants into a new named group.
    ///
    /// The group is appended after the existing groups. The default group is
    /// dropped once it has no members left. Grouping is one way: a participant
    /// in a named group can never move again.
    ///
    /// # Errors
    ///
    /// Fails if the title is empty or already used by another group, if no
    /// participants are given, if a participant is listed twice, belongs to
    /// another diagram or is already in a named group.
    pub fn group_participants(
        &self,
        title: &str,
        participants: &[Participant<'_>],
        color: Option<&str>,
    ) -> Result<ParticipantGroup, ChartingError> {
        let color = Color::parse_optional(color)?;
        let invalid = |reason: String| Err(ChartingError::InvalidParticipantGroup(reason));

        if title.is_empty() {
            return invalid("group title must not be empty".to_string());
        }
        if participants.is_empty() {
            return invalid(format!("group `{title}` has no participants"));
        }
        if let Some(foreign) = participants.iter().find(|p| !p.belongs_to(self)) {
            return Err(ChartingError::ForeignEntity(format!(
                "participant `{}`",
                foreign.title()
            )));
        }

        let mut builder = self.builder.borrow_mut();
        let model = &mut builder.model;

        if model.groups.iter().any(|group| group.title() == Some(title)) {
            return invalid(format!("group `{title}` already exists"));
        }

        let mut members: Vec<ParticipantId> = Vec::with_capacity(participants.len());
        for participant in participants {
            let id = participant.id();
            let record_title = model.participant(id).title();
            if members.contains(&id) {
                return invalid(format!("participant `{record_title}` is listed twice"));
            }
            let ungrouped = model
                .groups
                .iter()
                .any(|group| group.is_default() && group.contains(id));
            if !ungrouped {
                return invalid(format!("participant `{record_title}` is already grouped"));
            }
            members.push(id);
        }

        if let Some(default) = model.default_group_mut() {
            for id in &members {
                default.remove(*id);
            }
        }
        model
            .groups
            .retain(|group| !(group.is_default() && group.members().is_empty()));

        let group = ParticipantGroup::named(title, color, members);
        model.groups.push(group.clone());

        debug!(title, members = group.members().len(); "Participant group created");
        Ok(group)
    }

    /// Adds a note. Renderers attach it to the participant that last received
    /// a message, or to the first created participant before any message.
    ///
    /// # Errors
    ///
    /// Fails if the diagram has no participants, on an invalid color, or if
    /// the note would be the first step of a condition.
    pub fn note(&self, text: &str, color: Option<&str>) -> Result<(), ChartingError> {
        let color = Color::parse_optional(color)?;
        let mut builder = self.builder.borrow_mut();
        if builder.model.participants.is_empty() {
            return Err(ChartingError::NoParticipants);
        }
        builder.record(Step::Note(Note::new(text, color)))
    }

    /// Returns from the innermost active call to its caller.
    ///
    /// # Errors
    ///
    /// Fails if auto-activation is off, or if no call is active. A lone entry
    /// activation, left behind by a participant calling itself, has no caller
    /// and cannot be returned from.
    ///
    /// # Examples
    ///
    /// ```
    /// # use limner_core::{render::Renderer, sequence::SequenceDiagram};
    /// # #[derive(Debug)] struct Nothing;
    /// # impl Renderer for Nothing { fn name(&self) -> &'static str { "nothing" } }
    /// let sd = SequenceDiagram::new("Return", Nothing);
    /// let a = sd.participant("A", None)?;
    /// let b = sd.participant("B", None)?;
    ///
    /// a.go_to(b, "ask")?;
    /// sd.return_("answer")?;
    ///
    /// assert!(sd.return_("again").is_err());
    /// # Ok::<(), limner_core::error::ChartingError>(())
    /// ```
    pub fn return_(&self, text: &str) -> Result<(), ChartingError> {
        let mut builder = self.builder.borrow_mut();
        if !builder.model.auto_activation {
            return Err(ChartingError::AutoActivationDisabled);
        }
        let (callee, caller) = builder
            .activations
            .pending_return()
            .ok_or(ChartingError::NothingToReturnTo)?;
        builder.record(Step::Return(Message::new(text, callee, caller)))
    }

    /// Wraps the steps recorded by `body` in a loop.
    ///
    /// # Errors
    ///
    /// Fails on an invalid color, on misplaced scopes, or with whatever
    /// `body` returns.
    pub fn loop_<T, E, F>(&self, label: &str, color: Option<&str>, body: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<ChartingError>,
    {
        let color = Color::parse_optional(color)?;
        self.scoped(
            Step::Loop(Control::open(Some(label.to_string()), color)),
            Step::Loop(Control::close()),
            Scope::Loop,
            body,
        )
    }

    /// Wraps the steps recorded by `body` in a labeled group.
    ///
    /// # Errors
    ///
    /// Same as [`SequenceDiagram::loop_`].
    pub fn group<T, E, F>(&self, label: &str, color: Option<&str>, body: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<ChartingError>,
    {
        let color = Color::parse_optional(color)?;
        self.scoped(
            Step::Group(Control::open(Some(label.to_string()), color)),
            Step::Group(Control::close()),
            Scope::Group,
            body,
        )
    }

    /// Opens a condition. The first thing `body` records must be a
    /// [`SequenceDiagram::case`].
    ///
    /// # Errors
    ///
    /// Fails if the condition is empty or its first step is not a case, plus
    /// everything [`SequenceDiagram::loop_`] fails on.
    pub fn condition<T, E, F>(&self, color: Option<&str>, body: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<ChartingError>,
    {
        let color = Color::parse_optional(color)?;
        self.scoped(
            Step::Condition(Control::open(None, color)),
            Step::Condition(Control::close()),
            Scope::Condition,
            body,
        )
    }

    /// Opens one branch of the enclosing condition.
    ///
    /// # Errors
    ///
    /// Fails unless the innermost open scope is a condition, plus everything
    /// [`SequenceDiagram::loop_`] fails on. A loop, group or activation opened
    /// between the condition and the case makes the case illegal.
    pub fn case<T, E, F>(&self, label: &str, color: Option<&str>, body: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<ChartingError>,
    {
        let color = Color::parse_optional(color)?;
        self.scoped(
            Step::Case(Control::open(Some(label.to_string()), color)),
            Step::Case(Control::close()),
            Scope::Case,
            body,
        )
    }

    /// Renders the diagram with the renderer it was created with.
    ///
    /// # Errors
    ///
    /// Fails if the renderer does not support sequence diagrams.
    pub fn render(&self) -> Result<String, RenderError> {
        let builder = self.builder.borrow();
        info!(
            renderer = self.renderer.name(),
            title = builder.model.title(),
            steps = builder.model.steps.len();
            "Rendering sequence diagram"
        );
        self.renderer.render_sequence(&builder.model)
    }

    pub(crate) fn with_record<R>(
        &self,
        id: ParticipantId,
        f: impl FnOnce(&ParticipantRecord) -> R,
    ) -> R {
        f(self.builder.borrow().model.participant(id))
    }

    pub(crate) fn set_kind(
        &self,
        id: ParticipantId,
        kind: ParticipantKind,
    ) -> Result<(), ChartingError> {
        let mut builder = self.builder.borrow_mut();
        builder.model.participants[id.index()].set_kind(kind)?;
        debug!(id = id.index(), kind = kind.as_str(); "Participant retyped");
        Ok(())
    }

    pub(crate) fn record_forward(&self, message: Message) -> Result<(), ChartingError> {
        self.builder.borrow_mut().record(Step::Forward(message))
    }

    pub(crate) fn record_return(&self, message: Message) -> Result<(), ChartingError> {
        self.builder.borrow_mut().record(Step::Return(message))
    }

    pub(crate) fn activation_scope<T, E, F>(
        &self,
        participant: ParticipantId,
        color: Option<&str>,
        body: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<ChartingError>,
    {
        let color = Color::parse_optional(color)?;
        self.scoped(
            Step::Activation(Activation::open(participant, color)),
            Step::Activation(Activation::close(participant)),
            Scope::Activation,
            body,
        )
    }

    fn scoped<T, E, F>(&self, open: Step, close: Step, scope: Scope, body: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<ChartingError>,
    {
        self.builder.borrow_mut().open(open, scope)?;
        let result = body();
        let closed = self.builder.borrow_mut().close(close, scope);
        let value = result?;
        closed?;
        Ok(value)
    }
}
