//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stitch_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StitchError, StitchResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> StitchResult<String> {
        trace!(path = %path.display(), "read");
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> StitchResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> StitchResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StitchError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("actions");
        let file = dir.join("auth.go");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, b"package actions\n").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(fs.read_file(&file).unwrap(), "package actions\n");
    }

    #[test]
    fn write_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("app.go");

        fs.write_file(&file, b"old").unwrap();
        fs.write_file(&file, b"new").unwrap();
        assert_eq!(fs.read_file(&file).unwrap(), "new");
    }

    #[test]
    fn missing_file_is_a_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_file(&temp.path().join("nope.go"))
            .unwrap_err();
        assert!(matches!(
            err,
            StitchError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert!(err.to_string().contains("Failed to read file"));
    }
}
