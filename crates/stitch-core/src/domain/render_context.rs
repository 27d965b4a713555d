use std::path::PathBuf;

use serde::Serialize;

use crate::domain::attribute::AttributeSet;

/// Metadata of the project being generated into, exposed to templates as
/// `app`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMeta {
    /// Directory name of the project.
    pub name: String,
    /// Import path of the project's root package (`module` in `go.mod`).
    pub module_path: String,
    pub root: PathBuf,
}

impl ProjectMeta {
    pub fn new(name: impl Into<String>, module_path: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            module_path: module_path.into(),
            root: root.into(),
        }
    }

    /// Use the directory name as both name and module path.
    ///
    /// Relative roots such as `.` have no name; callers pass an absolute root.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app")
            .to_string();
        Self {
            module_path: name.clone(),
            name,
            root,
        }
    }
}

/// Everything a template can see.
///
/// Built once per run and shared read-only by the substitution stage. The
/// renderer exposes it as `app`, `attrs` and the `option` helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project: ProjectMeta,
    attributes: AttributeSet,
}

impl RenderContext {
    pub fn new(project: ProjectMeta, attributes: AttributeSet) -> Self {
        Self {
            project,
            attributes,
        }
    }

    pub fn project(&self) -> &ProjectMeta {
        &self.project
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_from_root_uses_directory_name() {
        let meta = ProjectMeta::from_root("/work/my-shop");
        assert_eq!(meta.name, "my-shop");
        assert_eq!(meta.module_path, "my-shop");
    }
}
