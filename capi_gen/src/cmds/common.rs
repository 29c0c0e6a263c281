/* Input loading shared between analyze and codegen commands */

use anyhow::Context;
use capi_gen::input::{load_entity_file, load_type_map_file};
use capi_gen::{EntityTree, GeneratorOptions, TypeMapTable};
use capi_types::UnitMetadata;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct Inputs {
    pub unit: UnitMetadata,
    pub tree: EntityTree,
    pub type_map: TypeMapTable,
    pub options: GeneratorOptions,
}

pub fn load_inputs(
    entities: &Path,
    type_map: Option<&PathBuf>,
    config: Option<&PathBuf>,
) -> anyhow::Result<Inputs> {
    let (file, tree) = load_entity_file(entities)
        .with_context(|| format!("loading entities from {}", entities.display()))?;
    info!(
        source = %file.unit.source,
        entities = tree.len(),
        "loaded entity tree"
    );

    /* Without a type map only the builtin C spellings resolve */
    let type_map = match type_map {
        Some(path) => {
            let file = load_type_map_file(path)
                .with_context(|| format!("loading type map from {}", path.display()))?;
            TypeMapTable::from_file(&file)
        }
        None => TypeMapTable::with_builtins(),
    };

    let options = match config {
        Some(path) => GeneratorOptions::load(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => GeneratorOptions::default(),
    };

    Ok(Inputs {
        unit: file.unit,
        tree,
        type_map,
        options,
    })
}
