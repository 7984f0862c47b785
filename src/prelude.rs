//! Convenience re-exports for common use.

pub use crate::error::{MuralError, Result};
pub use crate::source::resolve::ResolveStrategy;
pub use crate::source::{Provider, RegistryBuilder, SourceTag};
