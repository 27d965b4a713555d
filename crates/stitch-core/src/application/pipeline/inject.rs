use crate::{
    application::pipeline::Transformer,
    domain::{Attribute, AttributeSet, DomainError, VirtualFile, lines},
    error::StitchResult,
};

/// Inserts one generated row per attribute after a marker line in one file.
///
/// Only the file at `target` is touched. A missing marker in that file is an
/// error, never a silent no-op.
#[derive(Debug, Clone)]
pub struct FieldInjection {
    target: String,
    marker: String,
    rows: Vec<String>,
}

impl FieldInjection {
    /// Rows are rendered up front from `attributes`, in set order.
    pub fn new(
        target: impl Into<String>,
        marker: impl Into<String>,
        attributes: &AttributeSet,
        row: impl Fn(&Attribute) -> String,
    ) -> Self {
        Self {
            target: target.into(),
            marker: marker.into(),
            rows: attributes.iter().map(row).collect(),
        }
    }
}

impl Transformer for FieldInjection {
    fn name(&self) -> &'static str {
        "field-injection"
    }

    fn transform(&self, file: &VirtualFile) -> StitchResult<VirtualFile> {
        if !file.is_at(&self.target) {
            return Ok(file.clone());
        }

        let marker_not_found = || DomainError::MarkerNotFound {
            path: file.path().to_slash(),
            marker: self.marker.clone(),
        };
        let text = file.text().ok_or_else(marker_not_found)?;
        let line = lines::find_line(text, &self.marker).ok_or_else(marker_not_found)?;

        Ok(file.with_content(lines::insert_after(text, line, &self.rows)))
    }
}
