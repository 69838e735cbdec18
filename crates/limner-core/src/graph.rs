//! Graph (state) diagrams.
//!
//! A [`GraphDiagram`] is a tree of nodes. Every node owns an inner graph made
//! of its children and its own [`Start`] and [`Finish`] pseudo-nodes. Edges
//! connect entities of the same inner graph only, so a composite state is
//! entered through its start and left through its finish.
//!
//! # Example
//!
//! ```
//! use limner_core::{
//!     graph::{GraphDiagram, GraphEntity},
//!     render::Renderer,
//! };
//! # #[derive(Debug)] struct Nothing;
//! # impl Renderer for Nothing { fn name(&self) -> &'static str { "nothing" } }
//!
//! let gd = GraphDiagram::new("Order", Nothing);
//! let placed = gd.node("Placed", None)?;
//! let shipping = gd.node("Shipping", Some("769D8F"))?;
//! let packed = shipping.node("Packed", None)?;
//!
//! gd.start().go_to(placed, "")?.go_to(shipping, "pay")?.go_to(gd.finish(), "deliver")?;
//! shipping.start().go_to(packed, "")?.go_to(shipping.finish(), "")?;
//!
//! assert!(shipping.is_group());
//! assert!(placed.go_to(packed, "skip").is_err());
//! # Ok::<(), limner_core::error::ChartingError>(())
//! ```

mod handle;
mod model;

use std::cell::{Ref, RefCell};

use log::{debug, info};

pub use handle::{Condition, Finish, Fork, GraphEntity, Join, Node, Start};
pub use model::{Entity, EntityId, EntityKind, GraphModel, Route};

use crate::{
    color::Color,
    error::ChartingError,
    render::{RenderError, Renderer},
};

/// A graph diagram under construction.
#[derive(Debug)]
pub struct GraphDiagram {
    model: RefCell<GraphModel>,
    renderer: Box<dyn Renderer>,
}

impl GraphDiagram {
    /// Creates an empty, top-to-bottom diagram.
    pub fn new(title: impl Into<String>, renderer: impl Renderer + 'static) -> Self {
        let title = title.into();
        debug!(title = title.as_str(), renderer = renderer.name(); "Creating graph diagram");
        Self {
            model: RefCell::new(GraphModel::new(title)),
            renderer: Box::new(renderer),
        }
    }

    /// Chooses top-to-bottom (`true`) or left-to-right (`false`) layout.
    pub fn with_vertical(self, vertical: bool) -> Self {
        self.model.borrow_mut().set_vertical(vertical);
        self
    }

    /// Read access to the model built so far.
    ///
    /// # Panics
    ///
    /// Every builder method panics while the returned guard is alive. Drop it
    /// before adding more entities.
    pub fn model(&self) -> Ref<'_, GraphModel> {
        self.model.borrow()
    }

    /// Adds a top-level node.
    ///
    /// # Errors
    ///
    /// Fails on an invalid color or if a top-level node already has `title`.
    pub fn node(&self, title: &str, color: Option<&str>) -> Result<Node<'_>, ChartingError> {
        self.root().node(title, color)
    }

    pub fn fork(&self) -> Result<Fork<'_>, ChartingError> {
        self.root().fork()
    }

    pub fn join(&self) -> Result<Join<'_>, ChartingError> {
        self.root().join()
    }

    pub fn condition(&self, color: Option<&str>) -> Result<Condition<'_>, ChartingError> {
        self.root().condition(color)
    }

    /// The entry of the top level.
    pub fn start(&self) -> Start<'_> {
        self.root().start()
    }

    /// The exit of the top level.
    pub fn finish(&self) -> Finish<'_> {
        self.root().finish()
    }

    /// Renders the diagram with the renderer it was created with.
    ///
    /// # Errors
    ///
    /// Fails if the renderer does not support graph diagrams.
    pub fn render(&self) -> Result<String, RenderError> {
        let model = self.model.borrow();
        info!(renderer = self.renderer.name(), title = model.title(); "Rendering graph diagram");
        self.renderer.render_graph(&model)
    }

    fn root(&self) -> Node<'_> {
        let root = self.model.borrow().root();
        Node::new(self, root)
    }

    pub(crate) fn with_model<R>(&self, f: impl FnOnce(&GraphModel) -> R) -> R {
        f(&self.model.borrow())
    }

    pub(crate) fn add_child(
        &self,
        owner: EntityId,
        kind: EntityKind,
        title: &str,
        color: Option<Color>,
    ) -> Result<EntityId, ChartingError> {
        self.model
            .borrow_mut()
            .add_child(owner, kind, title, color)
    }

    pub(crate) fn add_note(&self, node: EntityId, text: &str) {
        self.model.borrow_mut().add_note(node, text);
    }

    pub(crate) fn pseudo_nodes(&self, node: EntityId) -> (EntityId, EntityId) {
        self.model.borrow().pseudo_nodes(node)
    }

    pub(crate) fn link(&self, from: EntityId, to: EntityId, text: &str) -> Result<(), ChartingError> {
        self.model.borrow_mut().link(from, to, text)
    }
}
