//! Template source adapters.
//!
//! Every source yields the same thing: the files of one generator's template
//! tree, with paths relative to the tree root, sorted by path.

mod directory;
mod embedded;
mod memory;

pub use directory::DirectoryTemplates;
pub use embedded::EmbeddedTemplates;
pub use memory::InMemoryTemplates;

use stitch_core::domain::VirtualFile;

fn sort_by_path(files: &mut [VirtualFile]) {
    files.sort_by(|a, b| a.path().cmp(b.path()));
}
