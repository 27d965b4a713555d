use crate::{
    application::pipeline::Transformer,
    domain::VirtualFile,
    error::StitchResult,
};

/// Rewrites a path suffix, e.g. `.html` → `.plush.html`. Content is untouched.
#[derive(Debug, Clone)]
pub struct ExtensionRename {
    from: String,
    to: String,
}

impl ExtensionRename {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Transformer for ExtensionRename {
    fn name(&self) -> &'static str {
        "extension-rename"
    }

    fn transform(&self, file: &VirtualFile) -> StitchResult<VirtualFile> {
        if self.from.is_empty() || !file.has_suffix(&self.from) {
            return Ok(file.clone());
        }
        let path = file.path().to_slash();
        let stem = &path[..path.len() - self.from.len()];
        Ok(file.with_path(format!("{stem}{}", self.to))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_matching_suffix() {
        let stage = ExtensionRename::new(".html", ".plush.html");
        let file = VirtualFile::new("templates/auth/new.html", "<h1>Sign in</h1>").unwrap();
        let out = stage.transform(&file).unwrap();
        assert_eq!(out.path().to_slash(), "templates/auth/new.plush.html");
        assert_eq!(out.content(), file.content());
    }

    #[test]
    fn other_files_pass_through() {
        let stage = ExtensionRename::new(".html", ".plush.html");
        let file = VirtualFile::new("actions/auth.go", "package actions").unwrap();
        assert_eq!(stage.transform(&file).unwrap(), file);
    }
}
