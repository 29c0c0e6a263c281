//! Arena form of the parser's entity tree.
//!
//! The nested [`Entity`] list is flattened once into nodes with stable
//! [`EntityId`]s (document pre-order), each node knowing its parent. The
//! arena is immutable after construction; generation only reads it.

use capi_types::{Declaration, Entity, Visibility};
use serde_derive::Serialize;

/// Identity of an entity within one [`EntityTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(usize);

impl EntityId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNode {
    pub id: EntityId,
    pub name: String,
    pub decl: Declaration,
    pub access: Visibility,
    pub parent: Option<EntityId>,
    pub children: Vec<EntityId>,
}

impl EntityNode {
    /* Scopes and any node carrying children are reported as containers */
    pub fn is_container(&self) -> bool {
        self.decl.is_scope() || !self.children.is_empty()
    }
}

/// Event reported for each node during [`EntityTree::visit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitEvent {
    ContainerEnter,
    ContainerExit,
    Leaf,
}

#[derive(Debug, Clone, Default)]
pub struct EntityTree {
    nodes: Vec<EntityNode>,
    roots: Vec<EntityId>,
}

impl EntityTree {
    pub fn from_entities(entities: &[Entity]) -> Self {
        let mut tree = Self::default();
        for entity in entities {
            let id = tree.insert(entity, None);
            tree.roots.push(id);
        }
        tree
    }

    fn insert(&mut self, entity: &Entity, parent: Option<EntityId>) -> EntityId {
        let id = EntityId(self.nodes.len());
        self.nodes.push(EntityNode {
            id,
            name: entity.name.clone(),
            decl: entity.decl.clone(),
            access: entity.access,
            parent,
            children: Vec::with_capacity(entity.children.len()),
        });

        for child in &entity.children {
            let child_id = self.insert(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[EntityId] {
        &self.roots
    }

    /* Ids are only minted by this tree, so lookups cannot miss */
    pub fn node(&self, id: EntityId) -> &EntityNode {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &EntityNode> {
        self.nodes.iter()
    }

    pub fn parent(&self, id: EntityId) -> Option<&EntityNode> {
        self.node(id).parent.map(|parent| self.node(parent))
    }

    /// Fully qualified native name, e.g. `Urho3D::Node::GetName`.
    ///
    /// Only namespaces and classes contribute scope segments; anonymous scopes
    /// are skipped.
    pub fn qualified_name(&self, id: EntityId) -> String {
        let mut segments = vec![self.node(id).name.as_str()];
        let mut cursor = self.node(id).parent;
        while let Some(parent_id) = cursor {
            let parent = self.node(parent_id);
            if parent.decl.is_scope() && !parent.name.is_empty() {
                segments.push(parent.name.as_str());
            }
            cursor = parent.parent;
        }
        segments.reverse();
        segments.join("::")
    }

    /// Walks every node once in document order.
    ///
    /// Containers are reported on entry and again on exit; the callback can
    /// stop the walk by returning an error.
    pub fn visit<'t, E, F>(&'t self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&'t EntityNode, VisitEvent) -> Result<(), E>,
    {
        for root in &self.roots {
            self.walk(*root, &mut f)?;
        }
        Ok(())
    }

    fn walk<'t, E, F>(&'t self, id: EntityId, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&'t EntityNode, VisitEvent) -> Result<(), E>,
    {
        let node = self.node(id);
        if !node.is_container() {
            return f(node, VisitEvent::Leaf);
        }

        f(node, VisitEvent::ContainerEnter)?;
        for child in &node.children {
            self.walk(*child, f)?;
        }
        f(node, VisitEvent::ContainerExit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capi_types::{ClassDecl, FunctionDecl, MethodDecl, VariableDecl, NativeType};

    fn sample_entities() -> Vec<Entity> {
        vec![
            Entity::new("Urho3D", Declaration::Namespace).with_children(vec![
                Entity::new("Node", Declaration::Class(ClassDecl::default())).with_children(vec![
                    Entity::new("GetName", Declaration::MemberFunction(MethodDecl::default())),
                    Entity::new(
                        "id",
                        Declaration::MemberVariable(VariableDecl { ty: NativeType::new("int") }),
                    ),
                ]),
                Entity::new("Init", Declaration::FreeFunction(FunctionDecl::default())),
            ]),
            Entity::new("", Declaration::Namespace).with_children(vec![Entity::new(
                "Helper",
                Declaration::FreeFunction(FunctionDecl::default()),
            )]),
        ]
    }

    #[test]
    fn test_ids_follow_document_order() {
        let tree = EntityTree::from_entities(&sample_entities());
        let names: Vec<&str> = tree.nodes().map(|node| node.name.as_str()).collect();
        assert_eq!(names, vec!["Urho3D", "Node", "GetName", "id", "Init", "", "Helper"]);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.roots().len(), 2);
    }

    #[test]
    fn test_parent_links() {
        let tree = EntityTree::from_entities(&sample_entities());
        let get_name = tree.nodes().find(|node| node.name == "GetName").unwrap();
        assert_eq!(tree.parent(get_name.id).map(|p| p.name.as_str()), Some("Node"));
        assert!(tree.parent(tree.roots()[0]).is_none());
    }

    #[test]
    fn test_qualified_names_skip_anonymous_scopes() {
        let tree = EntityTree::from_entities(&sample_entities());
        let by_name = |name: &str| tree.nodes().find(|node| node.name == name).unwrap().id;

        assert_eq!(tree.qualified_name(by_name("GetName")), "Urho3D::Node::GetName");
        assert_eq!(tree.qualified_name(by_name("Init")), "Urho3D::Init");
        assert_eq!(tree.qualified_name(by_name("Helper")), "Helper");
    }

    #[test]
    fn test_visit_reports_enter_exit_and_leaves() {
        let tree = EntityTree::from_entities(&sample_entities());
        let mut events = Vec::new();
        tree.visit(|node, event| {
            events.push((node.name.clone(), event));
            Ok::<(), ()>(())
        })
        .unwrap();

        use VisitEvent::*;
        let expected: Vec<(String, VisitEvent)> = vec![
            ("Urho3D", ContainerEnter),
            ("Node", ContainerEnter),
            ("GetName", Leaf),
            ("id", Leaf),
            ("Node", ContainerExit),
            ("Init", Leaf),
            ("Urho3D", ContainerExit),
            ("", ContainerEnter),
            ("Helper", Leaf),
            ("", ContainerExit),
        ]
        .into_iter()
        .map(|(name, event)| (name.to_string(), event))
        .collect();
        assert_eq!(events, expected);
    }

    #[test]
    fn test_visit_stops_on_error() {
        let tree = EntityTree::from_entities(&sample_entities());
        let mut seen = 0;
        let result = tree.visit(|node, _| {
            seen += 1;
            if node.name == "GetName" { Err(node.id) } else { Ok(()) }
        });
        assert_eq!(result.unwrap_err().index(), 2);
        assert_eq!(seen, 3);
    }
}
