//! Status of the content tree against the last generated metadata

use serde::Serialize;

use crate::domain::ports::{ArtifactRepository, DocumentRepository};
use crate::domain::services::{compare, has_pending_changes, ChangeKind, LessonChange};
use crate::error::LessonResult;

use super::generate::{GenerateOptions, GenerateUseCase};

/// What `generate` would change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Whether a previous metadata file was found
    pub has_metadata: bool,
    pub changes: Vec<LessonChange>,
}

impl StatusReport {
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }

    pub fn is_up_to_date(&self) -> bool {
        self.has_metadata && !has_pending_changes(&self.changes)
    }
}

impl<DR, AR> GenerateUseCase<DR, AR>
where
    DR: DocumentRepository,
    AR: ArtifactRepository,
{
    /// Compare fresh fingerprints with the metadata file; writes nothing
    pub fn status(&self, options: &GenerateOptions) -> LessonResult<StatusReport> {
        let lessons = self.collect(&options.content_dir)?;
        let previous = self
            .artifacts()
            .load_metadata_if_present(&options.metadata_path)?;

        Ok(StatusReport {
            has_metadata: previous.is_some(),
            changes: compare(&lessons, previous.as_ref()),
        })
    }
}
