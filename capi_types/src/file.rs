use crate::entity::{Entity, NativeType};
use serde_derive::{Deserialize, Serialize};

/* ============================================================================
   Entity File
   ============================================================================ */

/* Header describing the translation unit the entities were parsed from */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct UnitMetadata {
    /* Source file or module the parser read (e.g., "Urho3D/Scene/Node.h") */
    pub source: String,

    /* Optional free-form description */
    #[serde(default)]
    pub description: Option<String>,
}

/* Complete parser output for one translation unit */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct EntityFile {
    pub unit: UnitMetadata,

    /* Root entities in document order */
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl EntityFile {
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(content)
    }
}

/* ============================================================================
   Type Map File
   ============================================================================ */

/* One native type and the C spelling used for it at the flat boundary */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TypeMapEntry {
    pub native: NativeType,
    pub c_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct TypeMapFile {
    #[serde(default)]
    pub types: Vec<TypeMapEntry>,
}

impl TypeMapFile {
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(content)
    }
}
