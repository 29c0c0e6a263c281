/* Loading of parser output, type maps and generator options from disk */

use crate::error::{GenError, GenResult};
use crate::model::EntityTree;
use capi_types::{EntityFile, TypeMapFile};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> GenResult<T> {
    let content = fs::read_to_string(path).map_err(|source| GenError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yml::from_str(&content).map_err(|source| GenError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_entity_file(path: &Path) -> GenResult<(EntityFile, EntityTree)> {
    let file: EntityFile = read_yaml(path)?;
    let tree = EntityTree::from_entities(&file.entities);
    debug!(
        path = %path.display(),
        source = %file.unit.source,
        entities = tree.len(),
        "loaded entity file"
    );
    Ok((file, tree))
}

pub fn load_type_map_file(path: &Path) -> GenResult<TypeMapFile> {
    let file: TypeMapFile = read_yaml(path)?;
    debug!(path = %path.display(), entries = file.types.len(), "loaded type map");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_entity_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
unit:
  source: "Math.h"
entities:
  - name: Add
    kind: free-function
    returns: int
    params:
      - {{ name: a, type: int }}
"#
        )
        .unwrap();

        let (entity_file, tree) = load_entity_file(file.path()).unwrap();
        assert_eq!(entity_file.unit.source, "Math.h");
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_type_map_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, GenError::Load { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "types: [{{ native: int }}]").unwrap();
        let err = load_type_map_file(file.path()).unwrap_err();
        assert!(matches!(err, GenError::Parse { .. }));
    }
}
