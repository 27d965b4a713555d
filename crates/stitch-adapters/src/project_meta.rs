//! Project metadata discovery.
//!
//! The import path of the generated Go code comes from the `module`
//! directive in `go.mod`; without one, the directory name is used.

use std::path::Path;

use stitch_core::{application::ports::Filesystem, domain::ProjectMeta, error::StitchResult};
use tracing::{debug, instrument};

/// Build [`ProjectMeta`] for the project rooted at `root`.
#[instrument(skip(fs), fields(root = %root.display()))]
pub fn discover(fs: &dyn Filesystem, root: &Path) -> StitchResult<ProjectMeta> {
    let fallback = ProjectMeta::from_root(root);
    let go_mod = root.join("go.mod");
    if !fs.exists(&go_mod) {
        debug!("no go.mod, using directory name");
        return Ok(fallback);
    }

    let content = fs.read_file(&go_mod)?;
    match module_path(&content) {
        Some(module) => {
            debug!(module, "module path read from go.mod");
            Ok(ProjectMeta::new(fallback.name, module, fallback.root))
        }
        None => Ok(fallback),
    }
}

/// The argument of the first `module` directive.
fn module_path(go_mod: &str) -> Option<&str> {
    go_mod.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let module = rest.split("//").next()?.trim().trim_matches('"');
        (!module.is_empty()).then_some(module)
    })
}
