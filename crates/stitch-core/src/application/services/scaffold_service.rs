//! Scaffold Service - the runner.
//!
//! This service coordinates one generator run:
//! 1. Sample the run timestamp and build the recipe's pipeline
//! 2. Pull every template file through the pipeline (in memory)
//! 3. Read the setup file and compute the patch (in memory)
//! 4. Write the generated files, then the patched setup file
//!
//! Nothing is written until every transform and the patch have succeeded.
//! A write failure halfway through leaves earlier files on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
        recipe::Recipe,
    },
    domain::{
        AttributeSet, CompatibilityWarning, ProjectMeta, RenderContext, RunTimestamp, VirtualFile,
        anchor,
    },
    error::StitchResult,
};

/// Input of one run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Project root; every output path is relative to it.
    pub root: PathBuf,
    pub project: ProjectMeta,
    pub attributes: AttributeSet,
    /// Compute everything but write nothing.
    pub dry_run: bool,
}

/// What a run did (or would do, for a dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub recipe: &'static str,
    pub timestamp: String,
    /// Project-relative paths of generated files, in write order.
    pub written: Vec<String>,
    /// Project-relative path of the patched setup file.
    pub patched: String,
    /// The anchor the payload was inserted after.
    pub anchor: String,
    pub warnings: Vec<CompatibilityWarning>,
    pub dry_run: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    source: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        source: Box<dyn TemplateSource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            source,
            renderer,
            filesystem,
        }
    }

    /// Run `recipe`, sampling the clock once for the whole run.
    pub fn run(&self, recipe: &Recipe, request: &RunRequest) -> StitchResult<RunReport> {
        self.run_at(recipe, request, RunTimestamp::now())
    }

    /// Run `recipe` with an explicit run timestamp.
    #[instrument(
        skip_all,
        fields(
            recipe = recipe.name,
            root = %request.root.display(),
            timestamp = %timestamp,
            dry_run = request.dry_run,
        )
    )]
    pub fn run_at(
        &self,
        recipe: &Recipe,
        request: &RunRequest,
        timestamp: RunTimestamp,
    ) -> StitchResult<RunReport> {
        let run_id = Uuid::new_v4();
        info!(%run_id, attributes = ?request.attributes.names(), "Generator run started");

        // 1. Pipeline
        let context = RenderContext::new(request.project.clone(), request.attributes.clone());
        let pipeline = recipe.pipeline(self.renderer.as_ref(), &context, &timestamp);
        debug!(stages = ?pipeline.stage_names(), "Pipeline built");

        // 2. Transform every template file
        let templates = self.source.files()?;
        debug!(source = %self.source.describe(), files = templates.len(), "Templates loaded");

        let outputs = templates
            .iter()
            .map(|file| pipeline.apply(file))
            .collect::<StitchResult<Vec<_>>>()?;

        // 3. Compute the patch
        let target = request.root.join(recipe.patch.target());
        if !self.filesystem.exists(&target) {
            return Err(ApplicationError::TargetNotFound { path: target }.into());
        }
        let original = self.filesystem.read_file(&target)?;
        let outcome = anchor::apply(&original, &recipe.patch)?;
        let anchor = recipe.patch.anchors()[outcome.anchor_index].marker.clone();
        debug!(anchor = %anchor, line = outcome.line + 1, "Setup anchor located");

        let warnings: Vec<CompatibilityWarning> = outcome.warning.into_iter().collect();
        for warning in &warnings {
            warn!(path = %warning.path, anchor = %warning.anchor, "{warning}");
        }

        // 4. Write
        let written = outputs.iter().map(|f| f.path().to_slash()).collect();
        if request.dry_run {
            info!("Dry run, nothing written");
        } else {
            for file in &outputs {
                self.write(&request.root, file)?;
            }
            self.filesystem
                .write_file(&target, outcome.content.as_bytes())?;
            info!(path = %recipe.patch.target(), "Setup file patched");
        }

        info!(%run_id, "Generator run completed");
        Ok(RunReport {
            run_id,
            recipe: recipe.name,
            timestamp: timestamp.to_string(),
            written,
            patched: recipe.patch.target().to_string(),
            anchor,
            warnings,
            dry_run: request.dry_run,
        })
    }

    fn write(&self, root: &Path, file: &VirtualFile) -> StitchResult<()> {
        let path = root.join(file.path());
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, file.content())?;
        info!(path = %file.path(), bytes = file.size(), "File written");
        Ok(())
    }
}
