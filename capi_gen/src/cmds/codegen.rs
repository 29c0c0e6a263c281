/* Codegen command - write the flat C API for one entity file */

use super::common::load_inputs;
use anyhow::Context;
use capi_gen::CApiGenerator;
use std::path::PathBuf;
use tracing::{debug, info};

pub fn run(
    entities: PathBuf,
    type_map: Option<PathBuf>,
    config: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    output_file: Option<String>,
) -> anyhow::Result<()> {
    let mut inputs = load_inputs(&entities, type_map.as_ref(), config.as_ref())?;

    if let Some(dir) = output_dir {
        inputs.options.output_dir = dir;
    }
    if let Some(name) = output_file {
        inputs.options.output_file = name;
    }
    debug!(options = ?inputs.options, "generator options");

    std::fs::create_dir_all(&inputs.options.output_dir).with_context(|| {
        format!(
            "creating output directory {}",
            inputs.options.output_dir.display()
        )
    })?;

    let generator = CApiGenerator::new(&inputs.tree, &inputs.type_map, inputs.options.clone());
    let output = generator
        .run()
        .with_context(|| format!("generating C API for {}", inputs.unit.source))?;

    info!(
        path = %output.artifact_path.display(),
        entities = output.symbols.len(),
        wrappers = output.wrapper_count(),
        "code generation complete"
    );
    Ok(())
}
