pub mod capi;
pub mod capi_gen;

pub use capi::{CApiGenerator, CApiPass, ExportKind, ExportedSymbol, GenerationOutput};
