//! Full build-and-deploy pipeline
//!
//! generate -> validate -> deploy -> verify, strictly in that order. Any
//! failure stops the pipeline; nothing is deployed after a failed
//! validation.

use crate::domain::ports::{ArtifactRepository, DocumentRepository, LessonStore};
use crate::error::{LessonError, LessonResult};

use super::deploy::{DeployResult, DeployUseCase, VerifyReport};
use super::generate::{GenerateOptions, GenerateResult, GenerateUseCase};

/// Options for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub generate: GenerateOptions,
    /// Read records back after deploying
    pub verify: bool,
}

/// Everything a pipeline run produced
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub generated: GenerateResult,
    pub deployed: DeployResult,
    /// `None` when verification is off or the deploy was a dry run
    pub verification: Option<VerifyReport>,
}

/// Run the whole pipeline
pub fn run_pipeline<DR, AR, AR2, S>(
    generate: &GenerateUseCase<DR, AR>,
    deploy: &DeployUseCase<AR2, S>,
    options: &PipelineOptions,
) -> LessonResult<PipelineReport>
where
    DR: DocumentRepository,
    AR: ArtifactRepository,
    AR2: ArtifactRepository,
    S: LessonStore,
{
    let generated = generate.execute(&options.generate)?;
    generate.validate(&generated.registry, &options.generate.content_dir)?;

    let deployed = deploy.deploy_file(&generated.metadata_path)?;

    let verification = if options.verify && !deployed.dry_run {
        let report = deploy.verify_deployment(&generated.metadata.lessons)?;
        if !report.is_success() {
            return Err(LessonError::Verification {
                slugs: report.mismatched.iter().map(|s| s.to_string()).collect(),
            });
        }
        Some(report)
    } else {
        None
    };

    Ok(PipelineReport {
        generated,
        deployed,
        verification,
    })
}
