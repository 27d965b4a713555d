//! Infrastructure adapters for Stitch.
//!
//! This crate implements the ports defined in `stitch-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod project_meta;
pub mod renderer;
pub mod template_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
pub use template_source::{DirectoryTemplates, EmbeddedTemplates, InMemoryTemplates};
