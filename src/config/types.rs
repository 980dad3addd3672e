//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::application::deploy::{
    DeployOptions, DeployStrategy, RetryPolicy, DEFAULT_BULK_METHOD, DEFAULT_UPSERT_METHOD,
    DEFAULT_VERIFY_METHOD,
};
use crate::application::generate::{
    GenerateOptions, DEFAULT_CONTENT_DIR, DEFAULT_METADATA_PATH, DEFAULT_REGISTRY_PATH,
};
use crate::domain::value_objects::Network;
use crate::infrastructure::dfx::{DEFAULT_CANISTER, DEFAULT_DFX};
use crate::parser::ParserKind;

use super::loader;

/// `[deploy]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Canister holding lesson metadata
    pub canister: String,
    /// Agent binary, looked up in `PATH` unless a path is given
    pub dfx: PathBuf,
    pub strategy: DeployStrategy,
    pub bulk_method: String,
    pub upsert_method: String,
    pub verify_method: String,
    /// Read records back after `run`
    pub verify: bool,
    pub retry: RetryPolicy,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            canister: DEFAULT_CANISTER.to_string(),
            dfx: PathBuf::from(DEFAULT_DFX),
            strategy: DeployStrategy::default(),
            bulk_method: DEFAULT_BULK_METHOD.to_string(),
            upsert_method: DEFAULT_UPSERT_METHOD.to_string(),
            verify_method: DEFAULT_VERIFY_METHOD.to_string(),
            verify: true,
            retry: RetryPolicy::default(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    /// Document extension, without the dot
    pub extension: String,
    pub output_registry_path: PathBuf,
    pub output_metadata_path: PathBuf,
    pub network: Network,
    pub front_matter: ParserKind,
    pub carry_over_timestamps: bool,
    pub deploy: DeployConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            extension: "md".to_string(),
            output_registry_path: PathBuf::from(DEFAULT_REGISTRY_PATH),
            output_metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            network: Network::default(),
            front_matter: ParserKind::default(),
            carry_over_timestamps: false,
            deploy: DeployConfig::default(),
        }
    }
}

impl Config {
    /// Apply `DFX_NETWORK` and `LESSONPACK_*` overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |name| std::env::var(name).ok())
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions::new(&self.content_dir)
            .with_registry_path(&self.output_registry_path)
            .with_metadata_path(&self.output_metadata_path)
            .with_carry_over_timestamps(self.carry_over_timestamps)
    }

    pub fn deploy_options(&self) -> DeployOptions {
        DeployOptions {
            strategy: self.deploy.strategy,
            bulk_method: self.deploy.bulk_method.clone(),
            upsert_method: self.deploy.upsert_method.clone(),
            verify_method: self.deploy.verify_method.clone(),
            retry: self.deploy.retry.clone(),
            dry_run: false,
        }
    }
}
