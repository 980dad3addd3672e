//! Integrity Check Domain Service
//!
//! Confirms a freshly generated registry still describes the content tree:
//! every referenced document exists and every fingerprint is a well-formed
//! SHA-256 hex digest. All issues are collected before failing.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::entities::ContentRegistry;
use crate::domain::ports::DocumentRepository;
use crate::error::{LessonError, LessonResult};

/// One problem found by the integrity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// The registry points at a document that is gone
    MissingFile { slug: String, path: PathBuf },
    /// The stored fingerprint is not 64 lowercase hex characters
    InvalidHash { slug: String, hash: String },
}

impl IntegrityIssue {
    pub fn slug(&self) -> &str {
        match self {
            IntegrityIssue::MissingFile { slug, .. } | IntegrityIssue::InvalidHash { slug, .. } => {
                slug
            }
        }
    }
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::MissingFile { slug, path } => {
                write!(f, "missing file {} for lesson '{}'", path.display(), slug)
            }
            IntegrityIssue::InvalidHash { slug, hash } => {
                write!(f, "invalid hash format for lesson '{}': {}", slug, hash)
            }
        }
    }
}

/// Collect every integrity issue in slug order
pub fn find_integrity_issues(
    registry: &ContentRegistry,
    content_dir: &Path,
    documents: &dyn DocumentRepository,
) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for (slug, entry) in registry.entries() {
        let relative = Path::new(&entry.path);
        if !documents.exists(content_dir, relative) {
            issues.push(IntegrityIssue::MissingFile {
                slug: slug.to_string(),
                path: content_dir.join(relative),
            });
        }
        if !entry.hash.is_well_formed() {
            issues.push(IntegrityIssue::InvalidHash {
                slug: slug.to_string(),
                hash: entry.hash.to_string(),
            });
        }
    }

    issues
}

/// Fail with [`LessonError::Integrity`] if any issue is found
pub fn validate_integrity(
    registry: &ContentRegistry,
    content_dir: &Path,
    documents: &dyn DocumentRepository,
) -> LessonResult<()> {
    let issues = find_integrity_issues(registry, content_dir, documents);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(LessonError::Integrity { issues })
    }
}
