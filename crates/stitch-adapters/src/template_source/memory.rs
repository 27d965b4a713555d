//! In-memory template source for testing.

use stitch_core::{
    application::ports::TemplateSource, domain::VirtualFile, error::StitchResult,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    files: Vec<VirtualFile>,
}

impl InMemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; panics on an absolute path, which is a test bug.
    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.files.push(
            VirtualFile::new(path, content).unwrap_or_else(|e| panic!("bad template path: {e}")),
        );
        self
    }
}

impl From<Vec<VirtualFile>> for InMemoryTemplates {
    fn from(files: Vec<VirtualFile>) -> Self {
        Self { files }
    }
}

impl TemplateSource for InMemoryTemplates {
    fn files(&self) -> StitchResult<Vec<VirtualFile>> {
        let mut files = self.files.clone();
        super::sort_by_path(&mut files);
        Ok(files)
    }

    fn describe(&self) -> String {
        format!("memory:{} files", self.files.len())
    }
}
