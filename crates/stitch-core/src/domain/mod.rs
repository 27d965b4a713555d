// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stitch.
//!
//! This module contains pure logic with no I/O. Rendering and file access
//! are handled via ports (traits) defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: every transformation returns a new value
//! - **Text, not syntax**: target files are handled as lines, never parsed
//!
pub mod anchor;
pub mod attribute;
pub mod error;
pub mod lines;
pub mod render_context;
pub mod timestamp;
pub mod virtual_file;

pub use anchor::{Anchor, CompatibilityWarning, PatchOutcome, PatchRequest, Placement};
pub use attribute::{Attribute, AttributeSet, RESERVED_NAMES};
pub use error::{DomainError, ErrorCategory};
pub use render_context::{ProjectMeta, RenderContext};
pub use timestamp::RunTimestamp;
pub use virtual_file::{RelativePath, VirtualFile};
