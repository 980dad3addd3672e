//! Generate Options

use std::path::PathBuf;

/// Where lesson documents live by default
pub const DEFAULT_CONTENT_DIR: &str = "src/content/lessons";
/// Default TypeScript registry output
pub const DEFAULT_REGISTRY_PATH: &str = "src/generated/content-registry.ts";
/// Default deployment metadata output
pub const DEFAULT_METADATA_PATH: &str = "deployment/lesson-metadata.json";

/// Options for the generate use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Root of the lesson tree
    pub content_dir: PathBuf,
    /// TypeScript module written for the front-end
    pub registry_path: PathBuf,
    /// JSON file handed to the deployer
    pub metadata_path: PathBuf,
    /// Keep `createdAt`/`updatedAt` from the previous metadata file
    pub carry_over_timestamps: bool,
}

impl GenerateOptions {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = path.into();
        self
    }

    pub fn with_metadata_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata_path = path.into();
        self
    }

    pub fn with_carry_over_timestamps(mut self, enabled: bool) -> Self {
        self.carry_over_timestamps = enabled;
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            registry_path: PathBuf::from(DEFAULT_REGISTRY_PATH),
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            carry_over_timestamps: false,
        }
    }
}
