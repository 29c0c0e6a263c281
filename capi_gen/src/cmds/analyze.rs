/* Analyze command - run the pass in memory and print the symbol manifest */

use super::common::load_inputs;
use anyhow::Context;
use capi_gen::{CApiGenerator, GenerationOutput};
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ManifestFormat {
    Text,
    Json,
}

pub fn run(
    entities: PathBuf,
    type_map: Option<PathBuf>,
    config: Option<PathBuf>,
    format: ManifestFormat,
) -> anyhow::Result<()> {
    let inputs = load_inputs(&entities, type_map.as_ref(), config.as_ref())?;
    let generator = CApiGenerator::new(&inputs.tree, &inputs.type_map, inputs.options.clone());
    let output = generator
        .generate()
        .with_context(|| format!("analyzing {}", inputs.unit.source))?;

    match format {
        ManifestFormat::Text => print!("{}", render_text(&output)),
        ManifestFormat::Json => println!("{}", output.manifest_json()?),
    }
    Ok(())
}

fn render_text(output: &GenerationOutput) -> String {
    let mut text = String::new();
    for export in &output.symbols {
        text.push_str(&format!("{:<24} {}\n", export.kind.to_string(), export.entity));
        for symbol in &export.symbols {
            text.push_str(&format!("    -> {}\n", symbol));
        }
    }
    text.push_str(&format!(
        "{} entities, {} wrappers -> {}\n",
        output.symbols.len(),
        output.wrapper_count(),
        output.artifact_path.display()
    ));
    text
}
