//! Error types for lessonpack
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RemoteCallError;
use crate::domain::services::IntegrityIssue;

/// Result type alias for lessonpack operations
pub type LessonResult<T> = Result<T, LessonError>;

/// Main error type for lessonpack operations
#[derive(Error, Debug)]
pub enum LessonError {
    /// The document has no `---` delimited header, or it is never closed
    #[error("missing front matter in {file}: {reason}")]
    MissingFrontMatter { file: PathBuf, reason: String },

    /// Front matter was found but the strict parser rejected it
    #[error("invalid front matter in {file}: {message}")]
    InvalidFrontMatter { file: PathBuf, message: String },

    /// Two documents resolve to the same slug
    #[error("duplicate lesson slug '{slug}': {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A document's file name has no usable UTF-8 stem
    #[error("lesson file name is not valid UTF-8: {path}")]
    InvalidFileName { path: PathBuf },

    /// Content directory not found
    #[error("content directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Post-generation validation failed
    #[error("content validation failed with {} issue(s):\n{}", issues.len(), format_issues(issues))]
    Integrity { issues: Vec<IntegrityIssue> },

    /// A remote store call failed or reported an error
    #[error("{}", format_remote(method, slug.as_deref(), *attempts, source))]
    RemoteCall {
        method: String,
        slug: Option<String>,
        attempts: u32,
        #[source]
        source: RemoteCallError,
    },

    /// The store answered lookups without the expected content hash
    #[error("deployment verification failed for: {}", slugs.join(", "))]
    Verification { slugs: Vec<String> },

    /// The deployment metadata file could not be read or parsed
    #[error("invalid metadata file {path}: {message}")]
    MetadataFile { path: PathBuf, message: String },

    /// A `.lessonignore` file could not be loaded
    #[error("invalid ignore file {path}: {message}")]
    IgnoreFile { path: PathBuf, message: String },

    /// Configuration could not be loaded
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LessonError {
    /// File associated with this error, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            LessonError::MissingFrontMatter { file, .. }
            | LessonError::InvalidFrontMatter { file, .. }
            | LessonError::Config { file, .. } => Some(file),
            LessonError::DuplicateSlug { second, .. } => Some(second),
            LessonError::DirectoryNotFound { path }
            | LessonError::InvalidFileName { path }
            | LessonError::MetadataFile { path, .. }
            | LessonError::IgnoreFile { path, .. } => Some(path),
            _ => None,
        }
    }
}

fn format_issues(issues: &[IntegrityIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_remote(
    method: &str,
    slug: Option<&str>,
    attempts: u32,
    source: &RemoteCallError,
) -> String {
    let target = match slug {
        Some(slug) => format!(" for lesson '{}'", slug),
        None => String::new(),
    };
    format!(
        "remote call '{}'{} failed after {} attempt(s): {}",
        method, target, attempts, source
    )
}
