//! LessonStore port - the remote record store
//!
//! The store owns its wire format: it renders records into argument text
//! and executes named calls. The deployer only decides which call to make
//! and how often to try it.

use thiserror::Error;

use crate::domain::entities::LessonMetadataRecord;
use crate::domain::value_objects::Slug;

/// Error reported by a single remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteCallError {
    /// The agent binary could not be started
    #[error("could not launch '{program}': {message}")]
    Launch { program: String, message: String },

    /// The agent ran but exited unsuccessfully
    #[error("exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    /// The call completed but the store answered with an error value
    #[error("store returned an error: {response}")]
    Rejected { response: String },
}

impl RemoteCallError {
    /// Whether trying the same call again could succeed
    ///
    /// A missing binary or an explicit rejection will not change on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RemoteCallError::Failed { .. })
    }
}

/// Records to upsert in one call
#[derive(Debug, Clone, Copy)]
pub enum UpsertRequest<'a> {
    /// Every record in one call
    Bulk(&'a [LessonMetadataRecord]),
    /// One record, keyed by its slug
    Single(&'a LessonMetadataRecord),
}

impl UpsertRequest<'_> {
    /// Slug of the record, for single upserts
    pub fn slug(&self) -> Option<&Slug> {
        match self {
            UpsertRequest::Bulk(_) => None,
            UpsertRequest::Single(record) => Some(&record.slug),
        }
    }

    pub fn record_count(&self) -> usize {
        match self {
            UpsertRequest::Bulk(records) => records.len(),
            UpsertRequest::Single(_) => 1,
        }
    }
}

/// Remote record store keyed by slug
pub trait LessonStore {
    /// Human readable name, e.g. `learning_manager@local`
    fn display_name(&self) -> String;

    /// Render an upsert request as call arguments
    fn encode_upsert(&self, request: UpsertRequest<'_>) -> String;

    /// Render a slug lookup as call arguments
    fn encode_slug(&self, slug: &Slug) -> String;

    /// Execute a named method; returns the raw response text
    fn call(&self, method: &str, args: &str) -> Result<String, RemoteCallError>;
}

impl<T: LessonStore + ?Sized> LessonStore for &T {
    fn display_name(&self) -> String {
        (**self).display_name()
    }

    fn encode_upsert(&self, request: UpsertRequest<'_>) -> String {
        (**self).encode_upsert(request)
    }

    fn encode_slug(&self, slug: &Slug) -> String {
        (**self).encode_slug(slug)
    }

    fn call(&self, method: &str, args: &str) -> Result<String, RemoteCallError> {
        (**self).call(method, args)
    }
}
