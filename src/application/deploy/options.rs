//! Deploy Options
//!
//! Configuration types for metadata deployment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::retry::RetryPolicy;

/// Default bulk upsert method
pub const DEFAULT_BULK_METHOD: &str = "bulkUpdateOrCreateLessonMetadata";
/// Default single-record upsert method
pub const DEFAULT_UPSERT_METHOD: &str = "updateOrCreateLessonMetadata";
/// Default read-back method used for verification
pub const DEFAULT_VERIFY_METHOD: &str = "getLessonMetadata";

/// How records are pushed to the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployStrategy {
    /// Every record in one call
    #[default]
    Bulk,
    /// One call per record, in list order
    Individual,
}

impl DeployStrategy {
    pub const VALID_VALUES: &'static [&'static str] = &["bulk", "individual"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStrategy::Bulk => "bulk",
            DeployStrategy::Individual => "individual",
        }
    }
}

impl fmt::Display for DeployStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeployStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bulk" => Ok(DeployStrategy::Bulk),
            "individual" => Ok(DeployStrategy::Individual),
            other => Err(format!(
                "unknown strategy '{}', expected one of: {}",
                other,
                Self::VALID_VALUES.join(", ")
            )),
        }
    }
}

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq)]
pub struct DeployOptions {
    pub strategy: DeployStrategy,
    pub bulk_method: String,
    pub upsert_method: String,
    pub verify_method: String,
    pub retry: RetryPolicy,
    /// Render calls without executing them
    pub dry_run: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            strategy: DeployStrategy::default(),
            bulk_method: DEFAULT_BULK_METHOD.to_string(),
            upsert_method: DEFAULT_UPSERT_METHOD.to_string(),
            verify_method: DEFAULT_VERIFY_METHOD.to_string(),
            retry: RetryPolicy::default(),
            dry_run: false,
        }
    }
}

impl DeployOptions {
    pub fn with_strategy(mut self, strategy: DeployStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
