//! `stitch auth`: add login, registration and password recovery to an app.

use std::path::{Path, PathBuf};

use stitch_adapters::{
    DirectoryTemplates, EmbeddedTemplates, LocalFilesystem, MiniJinjaRenderer, project_meta,
};
use stitch_core::{
    application::{RunRequest, ScaffoldService, ports::TemplateSource, recipe},
    domain::AttributeSet,
    error::StitchError,
};
use tracing::{debug, instrument};

use crate::{
    cli::AuthArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `stitch auth`.
#[instrument(skip_all, fields(attributes = args.attributes.len(), dry_run = args.dry_run))]
pub fn execute(args: AuthArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.root.as_deref(), &config)?;

    let migrations_dir = args
        .migrations_dir
        .unwrap_or_else(|| config.generator.migrations_dir.clone());
    validate_migrations_dir(&migrations_dir)?;

    let attributes =
        AttributeSet::from_args(args.attributes.as_slice()).map_err(StitchError::from)?;

    let filesystem = LocalFilesystem::new();
    let project = project_meta::discover(&filesystem, &root)?;
    debug!(name = %project.name, module = %project.module_path, "Project discovered");

    let source = template_source(args.templates.or(config.generator.templates_dir));
    output.info(&format!(
        "Generating auth into {} from {}",
        root.display(),
        source.describe()
    ))?;

    let service = ScaffoldService::new(
        source,
        Box::new(MiniJinjaRenderer::new()),
        Box::new(filesystem),
    );
    let request = RunRequest {
        root,
        project,
        attributes,
        dry_run: args.dry_run,
    };
    let report = service.run(&recipe::auth(&migrations_dir), &request)?;

    output.report(&report)?;
    Ok(())
}

/// Flag, then config, then the working directory.
///
/// The result is canonical, so `.` still yields the directory's own name.
fn resolve_root(flag: Option<&Path>, config: &AppConfig) -> CliResult<PathBuf> {
    let root = match flag {
        Some(path) => path.to_path_buf(),
        None => config.root_or(&std::env::current_dir()?),
    };
    match root.canonicalize() {
        Ok(canonical) if canonical.is_dir() => Ok(canonical),
        _ => Err(CliError::RootNotFound { path: root }),
    }
}

fn validate_migrations_dir(dir: &str) -> CliResult<()> {
    if dir.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "migrations directory must not be empty".into(),
            source: None,
        });
    }
    if Path::new(dir).is_absolute() {
        return Err(CliError::InvalidInput {
            message: format!("migrations directory must be relative to the root: {dir}"),
            source: None,
        });
    }
    Ok(())
}

fn template_source(dir: Option<PathBuf>) -> Box<dyn TemplateSource> {
    match dir {
        Some(dir) => Box::new(DirectoryTemplates::new(dir)),
        None => Box::new(EmbeddedTemplates::auth()),
    }
}
