//! Flat C API generation.
//!
//! Walks a parsed native entity tree once and emits an `extern "C"` wrapper
//! for every free function, instance method and field, so a foreign runtime
//! can call native code without knowing its object model.

pub mod codegen;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod type_map;

pub use codegen::{CApiGenerator, CApiPass, ExportKind, ExportedSymbol, GenerationOutput};
pub use config::{GeneratorOptions, OverrideStyle};
pub use error::{GenError, GenResult};
pub use model::{EntityId, EntityTree};
pub use type_map::{TypeMap, TypeMapTable, TypeMapper};
