//! Template store adapters.

mod builtin;

pub use builtin::{BUILTIN_FILES, BuiltinTemplateStore};
