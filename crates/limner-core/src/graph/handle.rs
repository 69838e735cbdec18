//! Typed handles to graph entities.
//!
//! Each handle borrows its [`GraphDiagram`] and is cheap to copy. All of them
//! implement [`GraphEntity`], which provides [`GraphEntity::go_to`]. Only
//! [`Node`] can hold children.

use std::{fmt, ptr};

use crate::{
    color::Color,
    error::ChartingError,
    graph::{EntityId, EntityKind, GraphDiagram},
};

/// Behavior shared by every graph entity handle.
pub trait GraphEntity<'d>: Copy {
    /// The diagram the entity belongs to.
    fn diagram(&self) -> &'d GraphDiagram;

    fn id(&self) -> EntityId;

    /// Adds an edge from this entity to `to` and returns `to`.
    ///
    /// # Errors
    ///
    /// Fails if `to` belongs to another diagram or another level of this
    /// diagram, if the edge already exists, or if it would violate the
    /// start and finish rules.
    fn go_to<T: GraphEntity<'d>>(self, to: T, text: &str) -> Result<T, ChartingError> {
        if !ptr::eq(self.diagram(), to.diagram()) {
            return Err(ChartingError::ForeignEntity(format!(
                "graph entity #{}",
                to.id().index()
            )));
        }
        self.diagram().link(self.id(), to.id(), text)?;
        Ok(to)
    }
}

macro_rules! entity_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $name<'d> {
            diagram: &'d GraphDiagram,
            id: EntityId,
        }

        impl<'d> $name<'d> {
            pub(crate) fn new(diagram: &'d GraphDiagram, id: EntityId) -> Self {
                Self { diagram, id }
            }
        }

        impl<'d> GraphEntity<'d> for $name<'d> {
            fn diagram(&self) -> &'d GraphDiagram {
                self.diagram
            }

            fn id(&self) -> EntityId {
                self.id
            }
        }

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.id).finish()
            }
        }
    };
}

entity_handle!(
    /// A state, or a composite state once it has children.
    Node
);
entity_handle!(
    /// A parallel split.
    Fork
);
entity_handle!(
    /// A parallel merge.
    Join
);
entity_handle!(
    /// A choice point.
    Condition
);
entity_handle!(
    /// The entry of a node's inner graph. Only ever a source.
    Start
);
entity_handle!(
    /// The exit of a node's inner graph. Only ever a destination.
    Finish
);

impl<'d> Node<'d> {
    pub fn title(&self) -> String {
        self.diagram
            .with_model(|model| model.entity(self.id).title().to_string())
    }

    pub fn is_group(&self) -> bool {
        self.diagram
            .with_model(|model| model.entity(self.id).is_group())
    }

    /// Adds a child node, turning this node into a group.
    ///
    /// # Errors
    ///
    /// Fails on an invalid color or if a sibling node already has `title`.
    pub fn node(&self, title: &str, color: Option<&str>) -> Result<Node<'d>, ChartingError> {
        let color = Color::parse_optional(color)?;
        let id = self
            .diagram
            .add_child(self.id, EntityKind::Node, title, color)?;
        Ok(Node::new(self.diagram, id))
    }

    pub fn fork(&self) -> Result<Fork<'d>, ChartingError> {
        let id = self
            .diagram
            .add_child(self.id, EntityKind::Fork, "", None)?;
        Ok(Fork::new(self.diagram, id))
    }

    pub fn join(&self) -> Result<Join<'d>, ChartingError> {
        let id = self
            .diagram
            .add_child(self.id, EntityKind::Join, "", None)?;
        Ok(Join::new(self.diagram, id))
    }

    /// Adds a choice point.
    ///
    /// # Errors
    ///
    /// Fails on an invalid color.
    pub fn condition(&self, color: Option<&str>) -> Result<Condition<'d>, ChartingError> {
        let color = Color::parse_optional(color)?;
        let id = self
            .diagram
            .add_child(self.id, EntityKind::Condition, "", color)?;
        Ok(Condition::new(self.diagram, id))
    }

    /// The entry pseudo-node of this node's inner graph.
    pub fn start(&self) -> Start<'d> {
        let (start, _) = self.diagram.pseudo_nodes(self.id);
        Start::new(self.diagram, start)
    }

    /// The exit pseudo-node of this node's inner graph.
    pub fn finish(&self) -> Finish<'d> {
        let (_, finish) = self.diagram.pseudo_nodes(self.id);
        Finish::new(self.diagram, finish)
    }

    /// Attaches a free-text note to this node.
    pub fn note(self, text: &str) -> Self {
        self.diagram.add_note(self.id, text);
        self
    }
}
