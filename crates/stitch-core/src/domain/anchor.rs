//! Anchor-based patching of hand-edited files.
//!
//! The target file is never parsed. An [`Anchor`] is a literal piece of text;
//! the patcher looks for each candidate of a [`PatchRequest`] in priority
//! order and inserts the payload after the line holding the first one found.
//!
//! ```text
//! anchors:  [primary, legacy_1, legacy_2]
//!              │ found? ──yes──► insert after its line, done
//!              no
//!              ▼
//!           legacy_1 found? ──yes──► insert + CompatibilityWarning
//!              ...
//!           none found ──► AnchorNotFound (content untouched)
//! ```
//!
//! Applying the same request twice inserts the payload twice.

use std::fmt;

use serde::Serialize;

use crate::domain::{error::DomainError, lines};

/// Where the payload goes relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    #[default]
    AfterLine,
}

/// A literal marker locating an insertion point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub marker: String,
    pub placement: Placement,
    /// Shown when this anchor is used as a fallback.
    pub note: Option<String>,
}

impl Anchor {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            placement: Placement::AfterLine,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Insert `payload` into `target` at the first matching anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRequest {
    target: String,
    anchors: Vec<Anchor>,
    payload: Vec<String>,
    indent: String,
}

impl PatchRequest {
    /// `target` is the project-relative path of the file to patch, used in
    /// errors and warnings.
    pub fn new(target: impl Into<String>, primary: Anchor) -> Self {
        Self {
            target: target.into(),
            anchors: vec![primary],
            payload: Vec::new(),
            indent: "\t".to_string(),
        }
    }

    /// Add a legacy anchor, tried after every anchor added before it.
    pub fn fallback(mut self, anchor: Anchor) -> Self {
        self.anchors.push(anchor);
        self
    }

    pub fn payload<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payload = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Added on top of the anchor line's own indentation.
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }
}

/// Emitted when a legacy anchor was used. Never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityWarning {
    pub path: String,
    pub anchor: String,
    pub note: Option<String>,
}

impl fmt::Display for CompatibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} was patched at legacy anchor {:?}; the project may have been scaffolded by an older version",
            self.path, self.anchor
        )?;
        if let Some(note) = &self.note {
            write!(f, " ({note})")?;
        }
        Ok(())
    }
}

/// Result of a successful patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub content: String,
    /// Index into [`PatchRequest::anchors`] of the anchor that matched.
    pub anchor_index: usize,
    /// Zero-based line of the matched anchor.
    pub line: usize,
    pub warning: Option<CompatibilityWarning>,
}

/// Apply `request` to `content`.
///
/// On error nothing is produced, so the caller's copy of the file stays as it
/// was.
pub fn apply(content: &str, request: &PatchRequest) -> Result<PatchOutcome, DomainError> {
    let found = request
        .anchors
        .iter()
        .enumerate()
        .find_map(|(i, anchor)| lines::find_line(content, &anchor.marker).map(|line| (i, line)));

    let Some((anchor_index, line)) = found else {
        return Err(DomainError::AnchorNotFound {
            path: request.target.clone(),
            attempted: request.anchors.iter().map(|a| a.marker.clone()).collect(),
        });
    };

    let anchor = &request.anchors[anchor_index];
    let base = lines::line_at(content, line)
        .map(lines::indentation)
        .unwrap_or_default();
    let rows: Vec<String> = request
        .payload
        .iter()
        .map(|row| {
            if row.trim().is_empty() {
                String::new()
            } else {
                format!("{base}{}{row}", request.indent)
            }
        })
        .collect();

    let content = match anchor.placement {
        Placement::AfterLine => lines::insert_after(content, line, &rows),
    };

    let warning = (anchor_index > 0).then(|| CompatibilityWarning {
        path: request.target.clone(),
        anchor: anchor.marker.clone(),
        note: anchor.note.clone(),
    });

    Ok(PatchOutcome {
        content,
        anchor_index,
        line,
        warning,
    })
}
