//! ArtifactRepository port - persistence of the two generated artifacts
//!
//! The generator saves the content registry and the deployment metadata
//! file together; the deployer and the status check only load metadata.

use std::path::Path;

use crate::domain::entities::{ContentRegistry, DeploymentMetadataFile};
use crate::error::LessonResult;

/// Everything one generation run writes
#[derive(Debug, Clone, Copy)]
pub struct GeneratedArtifacts<'a> {
    pub registry_path: &'a Path,
    pub registry: &'a ContentRegistry,
    pub metadata_path: &'a Path,
    pub metadata: &'a DeploymentMetadataFile,
}

/// Storage for generated artifacts
pub trait ArtifactRepository {
    /// Write both artifacts, or neither
    fn save(&self, artifacts: GeneratedArtifacts<'_>) -> LessonResult<()>;

    /// Load a deployment metadata file
    fn load_metadata(&self, path: &Path) -> LessonResult<DeploymentMetadataFile>;

    /// Load a metadata file if one exists; a missing file is `Ok(None)`
    fn load_metadata_if_present(&self, path: &Path) -> LessonResult<Option<DeploymentMetadataFile>>;
}
