//! lessonpack - content fingerprinting and metadata deployment for lesson sites
//!
//! Scans a tree of Markdown lessons, fingerprints every document, writes a
//! TypeScript content registry plus a deployment metadata file, and pushes
//! the metadata to a canister through the `dfx` agent.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod parser;

// Re-exports for convenience
pub use application::{
    run_pipeline, DeployOptions, DeployResult, DeployStrategy, DeployUseCase, GenerateOptions,
    GenerateResult, GenerateUseCase, PipelineOptions, PipelineReport, RetryPolicy, StatusReport,
    VerifyReport,
};
pub use config::Config;
pub use domain::entities::{ContentRegistry, DeploymentMetadataFile, Lesson, LessonMetadataRecord};
pub use domain::value_objects::{ContentHash, Network, Slug};
pub use error::{LessonError, LessonResult};
pub use parser::{extract_front_matter, FrontMatter, FrontMatterParser, ParserKind};
