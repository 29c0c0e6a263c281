pub mod function;
pub mod helpers;
pub mod method;
pub mod names;
pub mod printer;
pub mod variable;
pub mod wrapper;

// Re-export main public functions
pub use function::emit_free_function;
pub use helpers::EmitContext;
pub use method::emit_member_function;
pub use names::{NameRegistry, sanitize_symbol};
pub use printer::CodePrinter;
pub use variable::emit_member_variable;
pub use wrapper::{CParam, WrapperFn};
