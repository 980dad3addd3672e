//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_repository;
pub mod document_repository;
pub mod lesson_store;

pub use artifact_repository::{ArtifactRepository, GeneratedArtifacts};
pub use document_repository::DocumentRepository;
pub use lesson_store::{LessonStore, RemoteCallError, UpsertRequest};
