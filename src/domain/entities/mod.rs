//! Domain Entities
//!
//! - `Lesson` - A scanned lesson document
//! - `ContentRegistry` - Slug to fingerprint map for the front-end
//! - `DeploymentMetadataFile` - Records pushed to the remote store

mod lesson;
mod metadata;
mod registry;

pub use lesson::{Lesson, DEFAULT_DIFFICULTY, DEFAULT_ESTIMATED_TIME, DEFAULT_VERSION};
pub use metadata::{iso8601, DeploymentMetadataFile, LessonMetadataRecord};
pub use registry::{ContentRegistry, ContentRegistryEntry};
