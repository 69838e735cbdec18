//! Error types raised while building a diagram.
//!
//! Every failure caused by misusing the builder API is a [`ChartingError`].
//! They are raised synchronously at the offending call. Callers are expected
//! to fix the calling code rather than branch on the variant, so `Display`
//! carries everything worth knowing.

use thiserror::Error;

/// The charting error family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartingError {
    #[error("invalid color `{0}`: expected six hexadecimal digits with a value above zero")]
    InvalidColor(String),

    #[error("participant `{0}` already exists in this diagram")]
    DuplicateParticipant(String),

    #[error("node `{0}` already exists in this group")]
    DuplicateNode(String),

    #[error("participants of type `{from}` and `{to}` cannot interact")]
    IncompatibleParticipants { from: String, to: String },

    #[error("illegal graph edge: {0}")]
    IllegalTopology(String),

    #[error("scope misuse: {0}")]
    ScopeMisuse(String),

    #[error("there is no active call to return from")]
    NothingToReturnTo,

    #[error("return without a target requires auto-activation to be enabled")]
    AutoActivationDisabled,

    #[error("participant `{title}` already has type `{kind}`")]
    ParticipantTypeAlreadySet { title: String, kind: String },

    #[error("invalid participant group: {0}")]
    InvalidParticipantGroup(String),

    #[error("{0} belongs to another diagram")]
    ForeignEntity(String),

    #[error("diagram has no participants to attach a note to")]
    NoParticipants,
}
