//! Arena storage for graph entities and the topology rules for edges.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::{color::Color, error::ChartingError};

/// Index of an entity in a graph diagram's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(usize);

impl EntityId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The closed set of graph entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A state. A node with children of its own is a composite state.
    Node,
    Fork,
    Join,
    Condition,
    /// Entry pseudo-node, synthesized for every node.
    Start,
    /// Exit pseudo-node, synthesized for every node.
    Finish,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Fork => "fork",
            Self::Join => "join",
            Self::Condition => "condition",
            Self::Start => "start",
            Self::Finish => "finish",
        }
    }
}

/// A labeled edge to another entity of the same level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    to: EntityId,
    text: String,
}

impl Route {
    pub fn to(&self) -> EntityId {
        self.to
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One entity of a graph diagram.
///
/// Only nodes carry an inner map. It lists the node's children in creation
/// order, its own start and finish first, each with its outgoing routes.
#[derive(Debug, Clone)]
pub struct Entity {
    kind: EntityKind,
    owner: Option<EntityId>,
    title: String,
    color: Option<Color>,
    notes: Vec<String>,
    inner: IndexMap<EntityId, Vec<Route>>,
}

impl Entity {
    fn new(kind: EntityKind, owner: Option<EntityId>) -> Self {
        Self {
            kind,
            owner,
            title: String::new(),
            color: None,
            notes: Vec::new(),
            inner: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The node this entity belongs to, `None` for the root.
    pub fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    /// Title of a node, empty for every other kind.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Children with their outgoing routes, in creation order.
    pub fn inner(&self) -> impl Iterator<Item = (EntityId, &[Route])> {
        self.inner.iter().map(|(id, routes)| (*id, routes.as_slice()))
    }

    /// A node is a group once it holds more than its own start and finish.
    pub fn is_group(&self) -> bool {
        self.kind == EntityKind::Node && self.inner.len() > 2
    }
}

/// The finished content of a graph diagram, as read by renderers.
///
/// Rendering walks top-down from [`GraphModel::root`], whose inner map holds
/// the top-level entities.
#[derive(Debug, Clone)]
pub struct GraphModel {
    title: String,
    vertical: bool,
    entities: Vec<Entity>,
}

impl GraphModel {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        let mut model = Self {
            title: title.into(),
            vertical: true,
            entities: Vec::new(),
        };
        model.push_node(None, String::new(), None);
        model
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// `true` for top-to-bottom layouts, `false` for left-to-right.
    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    pub(crate) fn set_vertical(&mut self, vertical: bool) {
        self.vertical = vertical;
    }

    /// The invisible node holding the top level of the diagram.
    pub fn root(&self) -> EntityId {
        EntityId(0)
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    /// The start and finish pseudo-nodes of `node`.
    ///
    /// A node's start and finish always occupy the two arena slots right
    /// after it.
    pub(crate) fn pseudo_nodes(&self, node: EntityId) -> (EntityId, EntityId) {
        debug_assert_eq!(self.entity(node).kind, EntityKind::Node);
        (EntityId(node.0 + 1), EntityId(node.0 + 2))
    }

    /// Adds a child entity to `owner`.
    ///
    /// Nodes get their own start and finish. Node titles must be unique among
    /// the node's siblings.
    pub(crate) fn add_child(
        &mut self,
        owner: EntityId,
        kind: EntityKind,
        title: &str,
        color: Option<Color>,
    ) -> Result<EntityId, ChartingError> {
        let id = match kind {
            EntityKind::Node => {
                let duplicate = self.entity(owner).inner.keys().any(|sibling| {
                    let sibling = self.entity(*sibling);
                    sibling.kind == EntityKind::Node && sibling.title == title
                });
                if duplicate {
                    return Err(ChartingError::DuplicateNode(title.to_string()));
                }
                self.push_node(Some(owner), title.to_string(), color)
            }
            _ => {
                let mut entity = Entity::new(kind, Some(owner));
                entity.color = color;
                self.push(entity)
            }
        };

        self.entities[owner.0].inner.insert(id, Vec::new());
        debug!(kind = kind.as_str(), title, id = id.0, owner = owner.0; "Graph entity added");
        Ok(id)
    }

    pub(crate) fn add_note(&mut self, node: EntityId, text: &str) {
        self.entities[node.0].notes.push(text.to_string());
    }

    /// Adds an edge, enforcing the topology rules.
    ///
    /// Edges connect siblings only. Start is never a destination, finish is
    /// never a source, start never links straight to finish, and at most one
    /// edge exists per source and destination pair.
    pub(crate) fn link(
        &mut self,
        from: EntityId,
        to: EntityId,
        text: &str,
    ) -> Result<(), ChartingError> {
        let illegal = |reason: String| Err(ChartingError::IllegalTopology(reason));
        let (source, target) = (self.entity(from), self.entity(to));

        if source.kind == EntityKind::Finish {
            return illegal("a finish cannot be the source of an edge".to_string());
        }
        if target.kind == EntityKind::Start {
            return illegal("a start cannot be the destination of an edge".to_string());
        }
        if source.kind == EntityKind::Start && target.kind == EntityKind::Finish {
            return illegal("a start cannot lead straight to a finish".to_string());
        }

        let owner = match source.owner {
            Some(owner) if target.owner == Some(owner) => owner,
            _ => {
                return illegal(format!(
                    "{} and {} are not in the same group",
                    self.describe(from),
                    self.describe(to)
                ));
            }
        };

        if self.entity(owner).inner[&from]
            .iter()
            .any(|route| route.to == to)
        {
            return illegal(format!(
                "there is already an edge from {} to {}",
                self.describe(from),
                self.describe(to)
            ));
        }

        trace!(from = from.0, to = to.0, text; "Graph edge added");
        if let Some(routes) = self.entities[owner.0].inner.get_mut(&from) {
            routes.push(Route {
                to,
                text: text.to_string(),
            });
        }
        Ok(())
    }

    fn describe(&self, id: EntityId) -> String {
        let entity = self.entity(id);
        match entity.kind {
            EntityKind::Node => format!("node `{}`", entity.title),
            kind => kind.as_str().to_string(),
        }
    }

    fn push(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    fn push_node(&mut self, owner: Option<EntityId>, title: String, color: Option<Color>) -> EntityId {
        let mut node = Entity::new(EntityKind::Node, owner);
        node.title = title;
        node.color = color;
        let id = self.push(node);

        let start = self.push(Entity::new(EntityKind::Start, Some(id)));
        let finish = self.push(Entity::new(EntityKind::Finish, Some(id)));
        let inner = &mut self.entities[id.0].inner;
        inner.insert(start, Vec::new());
        inner.insert(finish, Vec::new());
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_pseudo_nodes() {
        let model = GraphModel::new("T");
        let root = model.entity(model.root());
        assert_eq!(root.owner(), None);
        assert!(!root.is_group());

        let (start, finish) = model.pseudo_nodes(model.root());
        assert_eq!(model.entity(start).kind(), EntityKind::Start);
        assert_eq!(model.entity(finish).kind(), EntityKind::Finish);
    }

    #[test]
    fn test_group_is_derived_from_children() {
        let mut model = GraphModel::new("T");
        let root = model.root();
        let node = model.add_child(root, EntityKind::Node, "A", None).unwrap();
        assert!(!model.entity(node).is_group());

        model.add_child(node, EntityKind::Fork, "", None).unwrap();
        assert!(model.entity(node).is_group());
        assert!(model.entity(root).is_group());
    }

    #[test]
    fn test_duplicate_node_title_is_per_level() {
        let mut model = GraphModel::new("T");
        let root = model.root();
        let outer = model.add_child(root, EntityKind::Node, "Title", None).unwrap();
        assert_eq!(
            model.add_child(root, EntityKind::Node, "Title", None),
            Err(ChartingError::DuplicateNode("Title".to_string()))
        );
        // The same title one level down is fine.
        model.add_child(outer, EntityKind::Node, "Title", None).unwrap();
    }

    #[test]
    fn test_routes_keep_insertion_order() {
        let mut model = GraphModel::new("T");
        let root = model.root();
        let a = model.add_child(root, EntityKind::Node, "A", None).unwrap();
        let b = model.add_child(root, EntityKind::Node, "B", None).unwrap();
        let c = model.add_child(root, EntityKind::Node, "C", None).unwrap();
        model.link(a, c, "first").unwrap();
        model.link(a, b, "second").unwrap();

        let routes: Vec<_> = model
            .entity(root)
            .inner()
            .find(|(id, _)| *id == a)
            .map(|(_, routes)| routes.iter().map(Route::text).collect())
            .unwrap();
        assert_eq!(routes, ["first", "second"]);
    }

    #[test]
    fn test_topology_rules() {
        let mut model = GraphModel::new("T");
        let root = model.root();
        let (start, finish) = model.pseudo_nodes(root);
        let a = model.add_child(root, EntityKind::Node, "A", None).unwrap();
        let group = model.add_child(root, EntityKind::Node, "G", None).unwrap();
        let nested = model.add_child(group, EntityKind::Node, "N", None).unwrap();

        let rejected = |r: Result<(), ChartingError>| matches!(r, Err(ChartingError::IllegalTopology(_)));

        assert!(rejected(model.link(a, start, "")));
        assert!(rejected(model.link(finish, a, "")));
        assert!(rejected(model.link(start, finish, "")));
        assert!(rejected(model.link(a, nested, "")));
        assert!(rejected(model.link(root, a, "")));

        model.link(a, group, "").unwrap();
        assert!(rejected(model.link(a, group, "again")));
        model.link(group, a, "back").unwrap();
    }
}
