//! Error types for flat C API generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation pass
#[derive(Error, Debug)]
pub enum GenError {
    /// A parameter, return or field type has no C spelling in the type map
    #[error("no C type mapping for '{ty}' (used by '{entity}')")]
    UnmappedType { ty: String, entity: String },

    /// A member declaration that does not sit directly inside a class
    #[error("member '{entity}' has no enclosing class")]
    MissingParentClass { entity: String },

    /// An input file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not valid YAML for the expected shape
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    /// The generated artifact could not be written
    #[error("failed saving {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GenResult<T> = Result<T, GenError>;
