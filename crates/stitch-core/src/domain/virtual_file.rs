use std::fmt;
use std::path::{Path, PathBuf};

use super::DomainError;

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() || path.has_root() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Forward-slash form, independent of the host separator.
    pub fn to_slash(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|n| n.to_str())
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_slash())
    }
}

/// An in-memory file flowing through the transformer pipeline.
///
/// Transformers never mutate a file; `with_path` and `with_content` return a
/// new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    path: RelativePath,
    content: Vec<u8>,
}

impl VirtualFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            content: content.into(),
        })
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as UTF-8, or `None` for binary files.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// True if the slash-separated path ends with `suffix`.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.path.to_slash().ends_with(suffix)
    }

    /// True if the slash-separated path equals `path`.
    pub fn is_at(&self, path: &str) -> bool {
        self.path.to_slash() == path.trim_start_matches("./")
    }

    pub fn with_path(&self, path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        Self::new(path, self.content.clone())
    }

    pub fn with_content(&self, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: self.path.clone(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_absolute_paths() {
        assert!(matches!(
            VirtualFile::new("/etc/passwd", ""),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn with_content_leaves_original_untouched() {
        let original = VirtualFile::new("a/b.txt", "one").unwrap();
        let changed = original.with_content("two");
        assert_eq!(original.text(), Some("one"));
        assert_eq!(changed.text(), Some("two"));
        assert_eq!(changed.path(), original.path());
    }

    #[test]
    fn suffix_and_exact_path_matching() {
        let file = VirtualFile::new("templates/users/new.html", "").unwrap();
        assert!(file.has_suffix(".html"));
        assert!(!file.has_suffix(".plush.html"));
        assert!(file.is_at("templates/users/new.html"));
        assert!(!file.is_at("templates/auth/new.html"));
    }

    #[test]
    fn binary_content_has_no_text() {
        let file = VirtualFile::new("logo.png", vec![0xff, 0xfe, 0x00]).unwrap();
        assert!(file.text().is_none());
        assert_eq!(file.size(), 3);
    }
}
