//! Templates read from a directory on disk.
//!
//! The directory has the same layout as the embedded tree, so a user can copy
//! the bundled templates out, edit them and point `--templates` at the copy.

use std::{
    fs,
    path::{Path, PathBuf},
};

use stitch_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::VirtualFile,
    error::StitchResult,
};
use tracing::{debug, instrument};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    /// The directory does not need to exist yet; [`TemplateSource::files`]
    /// fails if it is missing when called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirectoryTemplates {
    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn files(&self) -> StitchResult<Vec<VirtualFile>> {
        if !self.root.is_dir() {
            return Err(source_error(format!(
                "templates directory not found: {}",
                self.root.display()
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(|e| source_error(format!("directory walk error: {e}")))?;
            if !entry.file_type().is_file() {
                continue; // Skip directories and symlinks.
            }

            let rel = entry.path().strip_prefix(&self.root).map_err(|_| {
                source_error(format!(
                    "failed to relativise '{}' against '{}'",
                    entry.path().display(),
                    self.root.display()
                ))
            })?;
            let content = fs::read(entry.path()).map_err(|e| ApplicationError::FilesystemError {
                path: entry.path().to_path_buf(),
                reason: format!("Failed to read template: {e}"),
            })?;

            files.push(VirtualFile::new(rel, content)?);
        }

        super::sort_by_path(&mut files);
        debug!(count = files.len(), "finished loading templates");
        Ok(files)
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }
}

fn source_error(reason: String) -> stitch_core::error::StitchError {
    ApplicationError::TemplateSource { reason }.into()
}
