//! Application layer for Stitch.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Pipeline**: The per-file transformers and their composition
//! - **Recipes**: Per-generator settings (which stages, which patch)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Text rules (attribute grammar, anchors, line insertion) live in
//! `crate::domain`.

pub mod error;
pub mod pipeline;
pub mod ports;
pub mod recipe;
pub mod services;

pub use services::{RunReport, RunRequest, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateSource};

pub use error::ApplicationError;
pub use pipeline::{Pipeline, Transformer};
pub use recipe::Recipe;
