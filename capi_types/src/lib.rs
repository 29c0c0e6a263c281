//! Native Entity Definitions
//!
//! This crate contains the data model produced by the native-source parser
//! and consumed by the flat C API generator: declarations, visibility,
//! parameters, type spellings and the type-map table format. It provides pure
//! data structures without any file I/O or code generation logic.

pub mod entity;
pub mod file;

// Re-export commonly used types at the crate root
pub use entity::*;
pub use file::*;
