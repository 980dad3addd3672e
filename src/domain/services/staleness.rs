//! Staleness Domain Service
//!
//! Compares the lessons currently on disk with a previously generated
//! metadata file, so `status` can say what the next deploy would change.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{DeploymentMetadataFile, Lesson};
use crate::domain::value_objects::{ContentHash, Slug};

/// How one lesson differs from the last generated metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Changed,
    Removed,
    Unchanged,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Changed => "changed",
            ChangeKind::Removed => "removed",
            ChangeKind::Unchanged => "unchanged",
        }
    }
}

/// A lesson and its change since the last generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonChange {
    pub slug: Slug,
    pub kind: ChangeKind,
    /// Fingerprint on disk now; `None` for removed lessons
    pub current: Option<ContentHash>,
    /// Fingerprint in the metadata file; `None` for added lessons
    pub previous: Option<ContentHash>,
}

/// Changes for every lesson on either side, in slug order
pub fn compare(lessons: &[Lesson], previous: Option<&DeploymentMetadataFile>) -> Vec<LessonChange> {
    let mut old: BTreeMap<&Slug, &ContentHash> = previous
        .map(|file| {
            file.lessons
                .iter()
                .map(|record| (&record.slug, &record.content_hash))
                .collect()
        })
        .unwrap_or_default();

    let mut changes: Vec<LessonChange> = lessons
        .iter()
        .map(|lesson| {
            let previous = old.remove(lesson.slug()).cloned();
            let kind = match &previous {
                None => ChangeKind::Added,
                Some(hash) if hash == lesson.hash() => ChangeKind::Unchanged,
                Some(_) => ChangeKind::Changed,
            };
            LessonChange {
                slug: lesson.slug().clone(),
                kind,
                current: Some(lesson.hash().clone()),
                previous,
            }
        })
        .collect();

    changes.extend(old.into_iter().map(|(slug, hash)| LessonChange {
        slug: slug.clone(),
        kind: ChangeKind::Removed,
        current: None,
        previous: Some(hash.clone()),
    }));

    changes.sort_by(|a, b| a.slug.cmp(&b.slug));
    changes
}

/// Whether any change would alter the remote store
pub fn has_pending_changes(changes: &[LessonChange]) -> bool {
    changes.iter().any(|c| c.kind != ChangeKind::Unchanged)
}
