//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Fingerprint lessons, write registry and metadata, validate, status
//! - `DeployUseCase` - Push metadata to the remote store, invoke methods, verify
//! - `run_pipeline` - generate, validate, deploy and verify in one go

pub mod deploy;
pub mod generate;
pub mod pipeline;
pub mod status;

pub use deploy::{
    Backoff, DeployOptions, DeployResult, DeployStrategy, DeployUseCase, RemoteCall, RetryPolicy,
    VerifyReport,
};
pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use pipeline::{run_pipeline, PipelineOptions, PipelineReport};
pub use status::StatusReport;
