//! The flat event stream of a sequence diagram.
//!
//! Scopes are not a tree: a loop, group, condition, case or activation is an
//! open [`Control`] followed later by a matching close control of the same
//! kind. The builder guarantees the pairing.

use crate::{color::Color, sequence::ParticipantId};

/// A message between two participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    from: ParticipantId,
    to: ParticipantId,
}

impl Message {
    pub(crate) fn new(text: impl Into<String>, from: ParticipantId, to: ParticipantId) -> Self {
        Self {
            text: text.into(),
            from,
            to,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn from(&self) -> ParticipantId {
        self.from
    }

    pub fn to(&self) -> ParticipantId {
        self.to
    }
}

/// A free-standing annotation.
///
/// Notes carry no subject. Renderers attach them to the participant that was
/// most recently the target of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    text: String,
    color: Option<Color>,
}

impl Note {
    pub(crate) fn new(text: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

/// An open or close marker for a loop, group, condition or case.
///
/// Close markers carry neither label nor color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    is_active: bool,
    label: Option<String>,
    color: Option<Color>,
}

impl Control {
    pub(crate) fn open(label: Option<String>, color: Option<Color>) -> Self {
        Self {
            is_active: true,
            label,
            color,
        }
    }

    pub(crate) fn close() -> Self {
        Self {
            is_active: false,
            label: None,
            color: None,
        }
    }

    /// `true` for a scope opening, `false` for a scope closing.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

/// An activation opening or closing on one participant's lifeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    is_active: bool,
    participant: ParticipantId,
    color: Option<Color>,
}

impl Activation {
    pub(crate) fn open(participant: ParticipantId, color: Option<Color>) -> Self {
        Self {
            is_active: true,
            participant,
            color,
        }
    }

    pub(crate) fn close(participant: ParticipantId) -> Self {
        Self {
            is_active: false,
            participant,
            color: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn participant(&self) -> ParticipantId {
        self.participant
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

/// One event of a sequence diagram.
///
/// Marked non-exhaustive: renderers must ignore kinds they do not know.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Step {
    Forward(Message),
    Return(Message),
    Note(Note),
    Loop(Control),
    Group(Control),
    Condition(Control),
    Case(Control),
    Activation(Activation),
}

impl Step {
    /// Returns `true` if this step opens a condition scope.
    pub(crate) fn opens_condition(&self) -> bool {
        matches!(self, Self::Condition(control) if control.is_active())
    }

    /// Returns `true` if this step opens a case scope.
    pub(crate) fn opens_case(&self) -> bool {
        matches!(self, Self::Case(control) if control.is_active())
    }

    /// Short name of the step kind, used in log records.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Forward(_) => "forward",
            Self::Return(_) => "return",
            Self::Note(_) => "note",
            Self::Loop(_) => "loop",
            Self::Group(_) => "group",
            Self::Condition(_) => "condition",
            Self::Case(_) => "case",
            Self::Activation(_) => "activation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_close_has_no_label() {
        let close = Control::close();
        assert!(!close.is_active());
        assert_eq!(close.label(), "");
        assert!(close.color().is_none());
    }

    #[test]
    fn test_opens_condition_and_case() {
        assert!(Step::Condition(Control::open(None, None)).opens_condition());
        assert!(!Step::Condition(Control::close()).opens_condition());
        assert!(Step::Case(Control::open(Some("x".into()), None)).opens_case());
        assert!(!Step::Loop(Control::open(None, None)).opens_case());
    }
}
