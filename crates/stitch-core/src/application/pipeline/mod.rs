//! The ordered chain of file transformers.
//!
//! ```text
//! VirtualFile ─► Substitution ─► FieldInjection ─► ExtensionRename ─► Relocation ─► VirtualFile
//! ```
//!
//! Every stage maps one [`VirtualFile`] to a new one and passes through files
//! it does not match. Stages receive their configuration (context, attribute
//! rows, the run timestamp) through their constructors; nothing is shared
//! through global state.

pub mod inject;
pub mod relocate;
pub mod rename;
pub mod substitution;

pub use inject::FieldInjection;
pub use relocate::Relocation;
pub use rename::ExtensionRename;
pub use substitution::Substitution;

use tracing::trace;

use crate::{domain::VirtualFile, error::StitchResult};

/// One step of the pipeline.
pub trait Transformer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produce the transformed file, or a copy of `file` if it does not apply.
    fn transform(&self, file: &VirtualFile) -> StitchResult<VirtualFile>;
}

/// Transformers applied in registration order.
#[derive(Default)]
pub struct Pipeline<'a> {
    stages: Vec<Box<dyn Transformer + 'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Register a stage after every stage registered so far.
    pub fn with(mut self, stage: impl Transformer + 'a) -> Self {
        self.push(stage);
        self
    }

    pub fn push(&mut self, stage: impl Transformer + 'a) {
        self.stages.push(Box::new(stage));
    }

    /// Run `file` through every stage. Stops at the first error.
    pub fn apply(&self, file: &VirtualFile) -> StitchResult<VirtualFile> {
        let mut current = file.clone();
        for stage in &self.stages {
            let next = stage.transform(&current)?;
            if next.path() != current.path() {
                trace!(stage = stage.name(), from = %current.path(), to = %next.path(), "path rewritten");
            }
            current = next;
        }
        Ok(current)
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}
