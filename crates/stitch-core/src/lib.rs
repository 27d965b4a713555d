//! Stitch Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Stitch, a
//! generator that adds features (login, registration, password recovery) to
//! an existing web application. It follows hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stitch-cli (CLI)              │
//! │     (Parses arguments, prints report)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, Recipe, Pipeline)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (TemplateSource, Renderer, Filesystem)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      stitch-adapters (Infrastructure)   │
//! │ (EmbeddedTemplates, MiniJinja, LocalFs) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Attribute, VirtualFile, Anchor, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stitch_core::prelude::*;
//! use stitch_core::application::recipe;
//!
//! let attributes = AttributeSet::from_args(&["nickname:string", "age:int"])?;
//! let request = RunRequest {
//!     root: "./shop".into(),
//!     project: ProjectMeta::from_root("./shop"),
//!     attributes,
//!     dry_run: false,
//! };
//!
//! // Adapters come from stitch-adapters
//! let service = ScaffoldService::new(source, renderer, filesystem);
//! let report = service.run(&recipe::auth("migrations"), &request)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Recipe, RunReport, RunRequest, ScaffoldService,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{
        Attribute, AttributeSet, CompatibilityWarning, ProjectMeta, RenderContext, RunTimestamp,
        VirtualFile,
    };
    pub use crate::error::{StitchError, StitchResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
