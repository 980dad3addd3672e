//! Deploy Result
//!
//! Result types for deploy and verification runs.

use serde::Serialize;

use crate::domain::value_objects::Slug;

use super::options::DeployStrategy;

/// One remote call made (or rendered, in a dry run)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteCall {
    pub method: String,
    pub args: String,
    /// Set for single-record calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    pub records: usize,
    /// Raw store response; `None` in a dry run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    pub attempts: u32,
}

/// Result of a deploy run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployResult {
    pub strategy: DeployStrategy,
    pub store: String,
    pub calls: Vec<RemoteCall>,
    pub dry_run: bool,
}

impl DeployResult {
    pub fn new(strategy: DeployStrategy, store: String, dry_run: bool) -> Self {
        Self {
            strategy,
            store,
            calls: Vec::new(),
            dry_run,
        }
    }

    /// Records covered by all calls
    pub fn record_count(&self) -> usize {
        self.calls.iter().map(|c| c.records).sum()
    }

    /// Retries made beyond the first attempt of each call
    pub fn retries(&self) -> u32 {
        self.calls.iter().map(|c| c.attempts.saturating_sub(1)).sum()
    }
}

/// Outcome of reading records back from the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub verified: Vec<Slug>,
    /// Slugs whose response did not mention the expected content hash
    pub mismatched: Vec<Slug>,
}

impl VerifyReport {
    pub fn is_success(&self) -> bool {
        self.mismatched.is_empty()
    }
}
