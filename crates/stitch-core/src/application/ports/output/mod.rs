//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stitch-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{RenderContext, VirtualFile};
use crate::error::StitchResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stitch_adapters::filesystem::LocalFilesystem` (production)
/// - `stitch_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as text.
    fn read_file(&self, path: &Path) -> StitchResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &[u8]) -> StitchResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StitchResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the template expression language.
///
/// Implemented by:
/// - `stitch_adapters::renderer::MiniJinjaRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` against `context`.
    ///
    /// `name` identifies the template in error messages. Identical input must
    /// produce identical output, and the output must not contain unresolved
    /// expressions.
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> StitchResult<String>;
}

/// Port for the tree of template files a generator materializes.
///
/// Implemented by:
/// - `stitch_adapters::template_source::EmbeddedTemplates` (compiled in)
/// - `stitch_adapters::template_source::DirectoryTemplates` (on disk)
/// - `stitch_adapters::template_source::InMemoryTemplates` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Every file of the tree, in a stable order.
    fn files(&self) -> StitchResult<Vec<VirtualFile>>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}
