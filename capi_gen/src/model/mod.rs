pub mod metadata;
pub mod tree;

pub use metadata::{GeneratedMetadata, MetadataTable};
pub use tree::{EntityId, EntityNode, EntityTree, VisitEvent};
