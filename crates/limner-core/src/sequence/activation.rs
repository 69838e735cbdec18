//! Automatic activation bookkeeping.
//!
//! The stack holds `(caller, callee)` frames. The bottom frame has no caller:
//! it marks the participant where control entered the diagram. Forward and
//! return messages are interpreted like calls and returns, and activation
//! controls are emitted around them so the caller never has to mark
//! activations by hand.

use log::trace;

use crate::sequence::{
    ParticipantId,
    step::{Activation, Message, Step},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    caller: Option<ParticipantId>,
    callee: ParticipantId,
}

/// The call stack driving auto-activation.
#[derive(Debug, Default)]
pub(crate) struct ActivationStack {
    frames: Vec<Frame>,
}

impl ActivationStack {
    /// Records a forward message, activating the entry participant on first
    /// use and the target whenever control moves to it.
    pub fn forward(&mut self, message: Message, steps: &mut Vec<Step>) {
        let (from, to) = (message.from(), message.to());

        if self.frames.is_empty() {
            self.frames.push(Frame {
                caller: None,
                callee: from,
            });
            steps.push(Step::Activation(Activation::open(from, None)));
        }

        steps.push(Step::Forward(message));

        if self.top_callee() != Some(to) {
            self.frames.push(Frame {
                caller: Some(from),
                callee: to,
            });
            steps.push(Step::Activation(Activation::open(to, None)));
        }

        trace!(depth = self.frames.len(); "Activation stack after forward");
    }

    /// Records a return message, unwinding the frame it answers and the entry
    /// frame once control is back where it started.
    pub fn backward(&mut self, message: Message, steps: &mut Vec<Step>) {
        let (from, to) = (message.from(), message.to());

        steps.push(Step::Return(message));

        let answered = Frame {
            caller: Some(to),
            callee: from,
        };
        if self.frames.last() == Some(&answered) {
            self.frames.pop();
            steps.push(Step::Activation(Activation::close(from)));
        }

        let entry = Frame {
            caller: None,
            callee: to,
        };
        if self.frames.as_slice() == [entry] {
            self.frames.pop();
            steps.push(Step::Activation(Activation::close(to)));
        }

        trace!(depth = self.frames.len(); "Activation stack after return");
    }

    /// The `(callee, caller)` pair an untargeted return would use.
    ///
    /// Returns `None` when the stack is empty or only the entry frame is left,
    /// since the entry participant has no caller to return to.
    pub fn pending_return(&self) -> Option<(ParticipantId, ParticipantId)> {
        let frame = self.frames.last()?;
        frame.caller.map(|caller| (frame.callee, caller))
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    fn top_callee(&self) -> Option<ParticipantId> {
        self.frames.last().map(|frame| frame.callee)
    }
}
