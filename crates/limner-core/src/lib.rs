//! Limner Core Types and Definitions
//!
//! This crate provides the in-memory diagram model behind Limner. Callers
//! build a model through an imperative API, and a [`render::Renderer`] turns
//! the finished model into the text of some diagram description language.
//!
//! - **Colors**: Validated 6-digit hex colors ([`color::Color`])
//! - **Errors**: The charting error family ([`error::ChartingError`])
//! - **Sequence**: Participants, steps and the auto-activation builder ([`sequence`] module)
//! - **Graph**: Nested state/graph diagrams with pseudo-nodes ([`graph`] module)
//! - **Render**: The contract every output format implements ([`render`] module)
//!
//! # Example
//!
//! ```
//! use limner_core::{
//!     render::{RenderError, Renderer},
//!     sequence::{SequenceDiagram, SequenceModel, Step},
//! };
//!
//! #[derive(Debug)]
//! struct StepCounter;
//!
//! impl Renderer for StepCounter {
//!     fn name(&self) -> &'static str {
//!         "step-counter"
//!     }
//!
//!     fn render_sequence(&self, model: &SequenceModel) -> Result<String, RenderError> {
//!         Ok(model.steps().len().to_string())
//!     }
//! }
//!
//! let sd = SequenceDiagram::new("Greeting", StepCounter);
//! let alice = sd.participant("Alice", None)?;
//! let bob = sd.participant("Bob", None)?;
//! alice.go_to(bob, "hi")?.return_to(alice, "bye")?;
//!
//! // two messages plus two activations and two deactivations
//! assert_eq!(sd.render().unwrap(), "6");
//! # Ok::<(), limner_core::error::ChartingError>(())
//! ```

pub mod color;
pub mod error;
pub mod graph;
pub mod render;
pub mod sequence;
