//! The auth template tree, compiled into the binary.

use include_dir::{Dir, include_dir};
use stitch_core::{
    application::ports::TemplateSource, domain::VirtualFile, error::StitchResult,
};
use tracing::instrument;

static AUTH_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates/auth");

/// Templates shipped inside the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTemplates {
    name: &'static str,
    dir: &'static Dir<'static>,
}

impl EmbeddedTemplates {
    /// Templates of the auth generator.
    pub fn auth() -> Self {
        Self {
            name: "auth",
            dir: &AUTH_DIR,
        }
    }
}

impl TemplateSource for EmbeddedTemplates {
    #[instrument(skip(self), fields(tree = self.name))]
    fn files(&self) -> StitchResult<Vec<VirtualFile>> {
        let mut files = Vec::new();
        collect(self.dir, &mut files)?;
        super::sort_by_path(&mut files);
        Ok(files)
    }

    fn describe(&self) -> String {
        format!("embedded:{}", self.name)
    }
}

fn collect(dir: &Dir<'_>, out: &mut Vec<VirtualFile>) -> StitchResult<()> {
    for file in dir.files() {
        out.push(VirtualFile::new(file.path(), file.contents())?);
    }
    for sub in dir.dirs() {
        collect(sub, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Vec<String> {
        EmbeddedTemplates::auth()
            .files()
            .unwrap()
            .iter()
            .map(|f| f.path().to_slash())
            .collect()
    }

    #[test]
    fn auth_tree_is_complete_and_sorted() {
        let paths = paths();
        for expected in [
            "actions/auth.go",
            "actions/recovery.go",
            "actions/users.go",
            "migrations/create_users.fizz",
            "models/user.go",
            "templates/auth/new.html",
            "templates/users/new.html",
        ] {
            assert!(paths.contains(&expected.to_string()), "missing {expected}");
        }
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn registration_form_carries_the_injection_marker() {
        let files = EmbeddedTemplates::auth().files().unwrap();
        let form = files
            .iter()
            .find(|f| f.is_at("templates/users/new.html"))
            .unwrap();
        assert!(
            form.text()
                .unwrap()
                .contains(r#"<%= f.InputTag("PasswordConfirmation""#)
        );
    }
}
