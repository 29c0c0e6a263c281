//! Generator options

use crate::error::GenResult;
use crate::input::read_yaml;
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the virtual override setter stores the foreign function pointer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OverrideStyle {
    /// `cls-><table>["<slot>"] = fn;`, one entry per overridable method
    #[default]
    Table,
    /// `cls->fn<Name> = (decltype(cls->fn<Name>))fn;`, a raw member per method
    Slot,
}

/// Everything that shapes the generated artifact beyond the entity tree itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorOptions {
    pub output_dir: PathBuf,
    pub output_file: String,
    /* Lines written before the extern "C" block */
    pub preamble: Vec<String>,
    pub export_macro: Option<String>,
    pub to_foreign: String,
    pub from_foreign: String,
    pub wrapper_suffix: String,
    pub getter_prefix: String,
    pub setter_prefix: String,
    pub override_style: OverrideStyle,
    pub override_table: String,
    pub indent: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated"),
            output_file: "CApi.cpp".to_string(),
            preamble: Vec::new(),
            export_macro: None,
            to_foreign: "ToForeign".to_string(),
            from_foreign: "FromForeign".to_string(),
            wrapper_suffix: "Ex".to_string(),
            getter_prefix: "__get_".to_string(),
            setter_prefix: "__set_".to_string(),
            override_style: OverrideStyle::Table,
            override_table: "__overrides".to_string(),
            indent: "    ".to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn load(path: &Path) -> GenResult<Self> {
        read_yaml(path)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(content)
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    pub fn export_macro(&self) -> Option<&str> {
        self.export_macro.as_deref()
    }
}
