use super::tree::{EntityId, EntityNode};
use capi_types::Declaration;
use serde_derive::Serialize;
use std::collections::BTreeMap;

/// Per-entity record produced by a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratedMetadata {
    /* External symbol assigned to the entity, once emitted */
    pub c_function_name: Option<String>,
    /* Classes only: a wrapper subclass exists and replaces the class in signatures */
    pub has_wrapper_class: bool,
}

/// Side table from entity identity to generated metadata, owned by the pass.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MetadataTable {
    entries: BTreeMap<EntityId, GeneratedMetadata>,
}

impl MetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /* Created on first request, seeded from the declaration */
    pub fn get_or_create(&mut self, node: &EntityNode) -> &mut GeneratedMetadata {
        self.entries.entry(node.id).or_insert_with(|| GeneratedMetadata {
            c_function_name: None,
            has_wrapper_class: matches!(&node.decl, Declaration::Class(class) if class.wrapper),
        })
    }

    pub fn get(&self, id: EntityId) -> Option<&GeneratedMetadata> {
        self.entries.get(&id)
    }

    pub fn function_name(&self, id: EntityId) -> Option<&str> {
        self.get(id).and_then(|data| data.c_function_name.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &GeneratedMetadata)> {
        self.entries.iter().map(|(id, data)| (*id, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tree::EntityTree;
    use capi_types::{ClassDecl, Entity};

    #[test]
    fn test_metadata_is_created_once_and_seeded_from_class() {
        let tree = EntityTree::from_entities(&[
            Entity::new("Plain", Declaration::Class(ClassDecl { wrapper: false })),
            Entity::new("Wrapped", Declaration::Class(ClassDecl { wrapper: true })),
        ]);
        let plain = tree.node(tree.roots()[0]);
        let wrapped = tree.node(tree.roots()[1]);

        let mut table = MetadataTable::new();
        assert!(!table.get_or_create(plain).has_wrapper_class);
        assert!(table.get_or_create(wrapped).has_wrapper_class);

        table.get_or_create(plain).c_function_name = Some("Plain_x".to_string());
        assert_eq!(table.get_or_create(plain).c_function_name.as_deref(), Some("Plain_x"));
        assert_eq!(table.function_name(plain.id), Some("Plain_x"));
        assert_eq!(table.len(), 2);
    }
}
