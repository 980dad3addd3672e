//! Deploy Use Case Tests

use super::*;
use crate::domain::entities::{DeploymentMetadataFile, LessonMetadataRecord};
use crate::domain::ports::{
    ArtifactRepository, GeneratedArtifacts, LessonStore, RemoteCallError, UpsertRequest,
};
use crate::domain::value_objects::{ContentHash, Slug};
use crate::error::{LessonError, LessonResult};
use chrono::{TimeZone, Utc};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

// Mock implementations for testing

struct MockStore {
    calls: RefCell<Vec<(String, String)>>,
    replies: RefCell<VecDeque<Result<String, RemoteCallError>>>,
}

impl MockStore {
    fn ok() -> Self {
        Self::with_replies(Vec::new())
    }

    fn with_replies(replies: Vec<Result<String, RemoteCallError>>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            replies: RefCell::new(replies.into()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl LessonStore for MockStore {
    fn display_name(&self) -> String {
        "mock@local".to_string()
    }

    fn encode_upsert(&self, request: UpsertRequest<'_>) -> String {
        match request {
            UpsertRequest::Bulk(records) => records
                .iter()
                .map(|r| r.slug.to_string())
                .collect::<Vec<_>>()
                .join(","),
            UpsertRequest::Single(record) => record.slug.to_string(),
        }
    }

    fn encode_slug(&self, slug: &Slug) -> String {
        format!("lookup:{slug}")
    }

    fn call(&self, method: &str, args: &str) -> Result<String, RemoteCallError> {
        self.calls
            .borrow_mut()
            .push((method.to_string(), args.to_string()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("(variant { ok })".to_string()))
    }
}

struct MockArtifacts {
    metadata: DeploymentMetadataFile,
}

impl ArtifactRepository for MockArtifacts {
    fn save(&self, _artifacts: GeneratedArtifacts<'_>) -> LessonResult<()> {
        Ok(())
    }

    fn load_metadata(&self, _path: &Path) -> LessonResult<DeploymentMetadataFile> {
        Ok(self.metadata.clone())
    }

    fn load_metadata_if_present(&self, _path: &Path) -> LessonResult<Option<DeploymentMetadataFile>> {
        Ok(Some(self.metadata.clone()))
    }
}

fn record(slug: &str, premium: bool) -> LessonMetadataRecord {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    LessonMetadataRecord {
        slug: Slug::new(slug),
        title: slug.to_string(),
        description: String::new(),
        code: slug.to_string(),
        content_hash: ContentHash::from_bytes(slug.as_bytes()),
        version: "1".to_string(),
        is_premium: premium,
        created_at: now,
        updated_at: now,
    }
}

fn metadata() -> DeploymentMetadataFile {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    DeploymentMetadataFile::new(vec![record("for_loops", false), record("functions", true)], now)
}

fn use_case(store: &MockStore, options: DeployOptions) -> DeployUseCase<MockArtifacts, &MockStore> {
    DeployUseCase::new(
        MockArtifacts {
            metadata: metadata(),
        },
        store,
        options,
    )
}

fn failed() -> RemoteCallError {
    RemoteCallError::Failed {
        status: "exit status: 255".to_string(),
        stderr: "replica unavailable".to_string(),
    }
}

fn quick_retry(attempts: u32) -> RetryPolicy {
    RetryPolicy::new(attempts, Backoff::Fixed { delay_ms: 0 })
}

#[test]
fn bulk_deploy_makes_one_call_with_all_records_in_order() {
    let store = MockStore::ok();

    let result = use_case(&store, DeployOptions::default())
        .deploy_file(Path::new("deployment/lesson-metadata.json"))
        .unwrap();

    assert_eq!(
        store.calls(),
        vec![(
            "bulkUpdateOrCreateLessonMetadata".to_string(),
            "for_loops,functions".to_string()
        )]
    );
    assert_eq!(result.strategy, DeployStrategy::Bulk);
    assert_eq!(result.record_count(), 2);
    assert_eq!(result.store, "mock@local");
}

#[test]
fn individual_deploy_makes_one_call_per_record() {
    let store = MockStore::ok();
    let options = DeployOptions::default().with_strategy(DeployStrategy::Individual);

    let result = use_case(&store, options).deploy(&metadata()).unwrap();

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], ("updateOrCreateLessonMetadata".to_string(), "for_loops".to_string()));
    assert_eq!(calls[1].1, "functions");
    assert_eq!(result.calls[1].slug, Some(Slug::new("functions")));
}

#[test]
fn individual_deploy_stops_at_first_failure_and_names_slug() {
    let store = MockStore::with_replies(vec![
        Ok("(variant { ok })".to_string()),
        Err(RemoteCallError::Rejected {
            response: "(variant { err = \"denied\" })".to_string(),
        }),
    ]);
    let records = vec![record("a", false), record("b", false), record("c", false)];

    let err = use_case(&store, DeployOptions::default())
        .deploy_individual(&records)
        .unwrap_err();

    assert_eq!(store.calls().len(), 2);
    match err {
        LessonError::RemoteCall { method, slug, attempts, .. } => {
            assert_eq!(method, "updateOrCreateLessonMetadata");
            assert_eq!(slug.as_deref(), Some("b"));
            assert_eq!(attempts, 1);
        }
        other => panic!("expected remote call error, got {other:?}"),
    }
}

#[test]
fn bulk_failure_is_the_deploy_outcome() {
    let store = MockStore::with_replies(vec![Err(failed())]);

    let err = use_case(&store, DeployOptions::default())
        .deploy(&metadata())
        .unwrap_err();

    assert!(matches!(err, LessonError::RemoteCall { slug: None, .. }));
    assert_eq!(store.calls().len(), 1);
}

#[test]
fn retry_policy_wraps_each_upsert() {
    let store = MockStore::with_replies(vec![Err(failed()), Err(failed()), Ok("ok".to_string())]);
    let options = DeployOptions::default().with_retry(quick_retry(3));

    let result = use_case(&store, options).deploy(&metadata()).unwrap();

    assert_eq!(store.calls().len(), 3);
    assert_eq!(result.calls[0].attempts, 3);
    assert_eq!(result.retries(), 2);
}

#[test]
fn retries_exhausted_reports_attempts() {
    let store = MockStore::with_replies(vec![Err(failed()), Err(failed())]);
    let options = DeployOptions::default()
        .with_strategy(DeployStrategy::Individual)
        .with_retry(quick_retry(2));

    let err = use_case(&store, options).deploy(&metadata()).unwrap_err();

    match err {
        LessonError::RemoteCall { slug, attempts, .. } => {
            assert_eq!(slug.as_deref(), Some("for_loops"));
            assert_eq!(attempts, 2);
        }
        other => panic!("expected remote call error, got {other:?}"),
    }
}

#[test]
fn dry_run_renders_without_calling() {
    let store = MockStore::ok();
    let options = DeployOptions::default()
        .with_strategy(DeployStrategy::Individual)
        .with_dry_run(true);

    let result = use_case(&store, options).deploy(&metadata()).unwrap();

    assert!(store.calls().is_empty());
    assert!(result.dry_run);
    assert_eq!(result.calls.len(), 2);
    assert_eq!(result.calls[0].args, "for_loops");
    assert!(result.calls[0].response.is_none());
}

#[test]
fn empty_record_list_makes_no_call() {
    let store = MockStore::ok();

    let result = use_case(&store, DeployOptions::default())
        .deploy_bulk(&[])
        .unwrap();

    assert!(store.calls().is_empty());
    assert_eq!(result.record_count(), 0);
}

#[test]
fn invoke_remote_returns_raw_output() {
    let store = MockStore::with_replies(vec![Ok("(42 : nat)".to_string())]);

    let call = use_case(&store, DeployOptions::default())
        .invoke_remote("getLessonCount", "()")
        .unwrap();

    assert_eq!(call.response.as_deref(), Some("(42 : nat)"));
    assert_eq!(call.attempts, 1);
    assert_eq!(store.calls(), vec![("getLessonCount".to_string(), "()".to_string())]);
}

#[test]
fn invoke_remote_reports_attempts_made() {
    let store = MockStore::with_replies(vec![Err(failed()), Ok("(7 : nat)".to_string())]);

    let call = use_case(&store, DeployOptions::default().with_retry(quick_retry(3)))
        .invoke_remote("getLessonCount", "()")
        .unwrap();

    assert_eq!(call.attempts, 2);
    assert_eq!(call.response.as_deref(), Some("(7 : nat)"));
    assert_eq!(store.calls().len(), 2);
}

#[test]
fn invoke_remote_surfaces_failure() {
    let store = MockStore::with_replies(vec![Err(failed())]);

    let err = use_case(&store, DeployOptions::default())
        .invoke_remote("getLessonCount", "()")
        .unwrap_err();

    assert!(err.to_string().contains("'getLessonCount'"));
}

#[test]
fn verify_checks_each_content_hash() {
    let records = vec![record("a", false), record("b", false)];
    let good = format!("(opt record {{ contentHash = \"{}\" }})", records[0].content_hash);
    let store = MockStore::with_replies(vec![Ok(good), Ok("(null)".to_string())]);

    let report = use_case(&store, DeployOptions::default())
        .verify_deployment(&records)
        .unwrap();

    assert_eq!(report.verified, vec![Slug::new("a")]);
    assert_eq!(report.mismatched, vec![Slug::new("b")]);
    assert!(!report.is_success());
    assert_eq!(store.calls()[0], ("getLessonMetadata".to_string(), "lookup:a".to_string()));
}
