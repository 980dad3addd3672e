//! Deploy Use Case
//!
//! Pushes lesson metadata records to the remote store:
//! - `deploy_bulk` makes one upsert call carrying every record
//! - `deploy_individual` makes one upsert call per record, in order
//!
//! Both go through the same retried upsert primitive.

use std::path::Path;

use crate::domain::entities::{DeploymentMetadataFile, LessonMetadataRecord};
use crate::domain::ports::{ArtifactRepository, LessonStore, UpsertRequest};
use crate::error::{LessonError, LessonResult};

use super::options::{DeployOptions, DeployStrategy};
use super::result::{DeployResult, RemoteCall, VerifyReport};

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<AR, S>
where
    AR: ArtifactRepository,
    S: LessonStore,
{
    artifacts: AR,
    store: S,
    options: DeployOptions,
}

impl<AR, S> DeployUseCase<AR, S>
where
    AR: ArtifactRepository,
    S: LessonStore,
{
    pub fn new(artifacts: AR, store: S, options: DeployOptions) -> Self {
        Self {
            artifacts,
            store,
            options,
        }
    }

    pub fn options(&self) -> &DeployOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load a metadata file and deploy it with the configured strategy
    pub fn deploy_file(&self, metadata_path: &Path) -> LessonResult<DeployResult> {
        let metadata = self.artifacts.load_metadata(metadata_path)?;
        tracing::debug!(
            path = %metadata_path.display(),
            lessons = metadata.lessons.len(),
            "loaded deployment metadata"
        );
        self.deploy(&metadata)
    }

    /// Deploy a metadata file with the configured strategy
    pub fn deploy(&self, metadata: &DeploymentMetadataFile) -> LessonResult<DeployResult> {
        match self.options.strategy {
            DeployStrategy::Bulk => self.deploy_bulk(&metadata.lessons),
            DeployStrategy::Individual => self.deploy_individual(&metadata.lessons),
        }
    }

    /// One upsert call carrying every record
    pub fn deploy_bulk(&self, records: &[LessonMetadataRecord]) -> LessonResult<DeployResult> {
        let mut result = self.new_result(DeployStrategy::Bulk);
        if records.is_empty() {
            tracing::warn!("no lesson records to deploy");
            return Ok(result);
        }

        tracing::info!(
            store = %result.store,
            lessons = records.len(),
            "bulk deploying lesson metadata"
        );
        let call = self.upsert(&self.options.bulk_method, UpsertRequest::Bulk(records))?;
        result.calls.push(call);
        Ok(result)
    }

    /// One upsert call per record; stops at the first failure
    pub fn deploy_individual(
        &self,
        records: &[LessonMetadataRecord],
    ) -> LessonResult<DeployResult> {
        let mut result = self.new_result(DeployStrategy::Individual);
        if records.is_empty() {
            tracing::warn!("no lesson records to deploy");
            return Ok(result);
        }

        for record in records {
            tracing::info!(store = %result.store, slug = %record.slug, "deploying lesson metadata");
            let call = self.upsert(&self.options.upsert_method, UpsertRequest::Single(record))?;
            result.calls.push(call);
        }
        Ok(result)
    }

    /// Call an arbitrary method; the raw output is kept untouched
    pub fn invoke_remote(&self, method: &str, args: &str) -> LessonResult<RemoteCall> {
        let (response, attempts) = self
            .options
            .retry
            .run(method, |_| self.store.call(method, args))
            .map_err(|(source, attempts)| LessonError::RemoteCall {
                method: method.to_string(),
                slug: None,
                attempts,
                source,
            })?;
        Ok(RemoteCall {
            method: method.to_string(),
            args: args.to_string(),
            slug: None,
            records: 0,
            response: Some(response),
            attempts,
        })
    }

    /// Read every record back and check its content hash is reported
    pub fn verify_deployment(&self, records: &[LessonMetadataRecord]) -> LessonResult<VerifyReport> {
        let mut report = VerifyReport::default();
        let method = &self.options.verify_method;

        for record in records {
            let args = self.store.encode_slug(&record.slug);
            let (response, _) = self
                .options
                .retry
                .run(method, |_| self.store.call(method, &args))
                .map_err(|(source, attempts)| LessonError::RemoteCall {
                    method: method.clone(),
                    slug: Some(record.slug.to_string()),
                    attempts,
                    source,
                })?;

            if response.contains(record.content_hash.as_str()) {
                report.verified.push(record.slug.clone());
            } else {
                tracing::warn!(slug = %record.slug, "store does not report the deployed content hash");
                report.mismatched.push(record.slug.clone());
            }
        }

        tracing::info!(
            verified = report.verified.len(),
            mismatched = report.mismatched.len(),
            "deployment verification finished"
        );
        Ok(report)
    }

    fn new_result(&self, strategy: DeployStrategy) -> DeployResult {
        DeployResult::new(strategy, self.store.display_name(), self.options.dry_run)
    }

    /// The retried upsert primitive shared by both strategies
    fn upsert(&self, method: &str, request: UpsertRequest<'_>) -> LessonResult<RemoteCall> {
        let args = self.store.encode_upsert(request);
        let slug = request.slug().cloned();
        let records = request.record_count();

        if self.options.dry_run {
            tracing::info!(method, records, "dry run, skipping remote call");
            return Ok(RemoteCall {
                method: method.to_string(),
                args,
                slug,
                records,
                response: None,
                attempts: 0,
            });
        }

        let (response, attempts) = self
            .options
            .retry
            .run(method, |_| self.store.call(method, &args))
            .map_err(|(source, attempts)| LessonError::RemoteCall {
                method: method.to_string(),
                slug: slug.as_ref().map(|s| s.to_string()),
                attempts,
                source,
            })?;

        Ok(RemoteCall {
            method: method.to_string(),
            args,
            slug,
            records,
            response: Some(response),
            attempts,
        })
    }
}
