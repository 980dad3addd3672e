//! Generate Result

use std::path::PathBuf;

use crate::domain::entities::{ContentRegistry, DeploymentMetadataFile};

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub registry: ContentRegistry,
    pub metadata: DeploymentMetadataFile,
    pub registry_path: PathBuf,
    pub metadata_path: PathBuf,
    /// Records whose timestamps came from the previous metadata file
    pub carried_over: usize,
}

impl GenerateResult {
    pub fn lesson_count(&self) -> usize {
        self.registry.len()
    }
}
