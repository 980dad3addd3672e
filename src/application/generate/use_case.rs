//! Generate Use Case
//!
//! Orchestrates content fingerprinting:
//! 1. Scan the content directory
//! 2. Fingerprint and parse every document
//! 3. Build the registry and the metadata records
//! 4. Write both artifacts in one batch
//!
//! Nothing is written unless every document was processed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    ContentRegistry, ContentRegistryEntry, DeploymentMetadataFile, Lesson, LessonMetadataRecord,
};
use crate::domain::ports::{ArtifactRepository, DocumentRepository, GeneratedArtifacts};
use crate::domain::services::validate_integrity;
use crate::domain::value_objects::{ContentHash, Slug};
use crate::error::{LessonError, LessonResult};
use crate::parser::FrontMatterParser;

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case, parameterized by its ports
pub struct GenerateUseCase<DR, AR>
where
    DR: DocumentRepository,
    AR: ArtifactRepository,
{
    documents: DR,
    artifacts: AR,
    parser: Box<dyn FrontMatterParser>,
}

impl<DR, AR> GenerateUseCase<DR, AR>
where
    DR: DocumentRepository,
    AR: ArtifactRepository,
{
    pub fn new(documents: DR, artifacts: AR, parser: Box<dyn FrontMatterParser>) -> Self {
        Self {
            documents,
            artifacts,
            parser,
        }
    }

    pub fn documents(&self) -> &DR {
        &self.documents
    }

    pub fn artifacts(&self) -> &AR {
        &self.artifacts
    }

    /// Scan, fingerprint and parse every lesson without writing anything
    pub fn collect(&self, content_dir: &Path) -> LessonResult<Vec<Lesson>> {
        let paths = self.documents.scan(content_dir)?;
        let mut seen: BTreeMap<Slug, PathBuf> = BTreeMap::new();
        let mut lessons = Vec::with_capacity(paths.len());

        for relative in paths {
            let Some(slug) = Slug::from_path(&relative) else {
                return Err(LessonError::InvalidFileName {
                    path: content_dir.join(&relative),
                });
            };
            if let Some(first) = seen.get(&slug) {
                return Err(LessonError::DuplicateSlug {
                    slug: slug.to_string(),
                    first: content_dir.join(first),
                    second: content_dir.join(&relative),
                });
            }

            let lesson = self.load_lesson(content_dir, &relative, slug.clone())?;
            tracing::info!(
                slug = %lesson.slug(),
                hash = %lesson.hash().short(8),
                size = lesson.size(),
                "fingerprinted lesson"
            );
            seen.insert(slug, relative);
            lessons.push(lesson);
        }

        Ok(lessons)
    }

    fn load_lesson(&self, content_dir: &Path, relative: &Path, slug: Slug) -> LessonResult<Lesson> {
        let bytes = self.documents.read(content_dir, relative)?;
        let hash = ContentHash::from_bytes(&bytes);
        let text = String::from_utf8_lossy(&bytes);
        let front_matter = self.parser.parse(&text, &content_dir.join(relative))?;

        Ok(Lesson::new(
            slug,
            relative,
            hash,
            bytes.len() as u64,
            front_matter,
        ))
    }

    /// Build the registry and metadata for already collected lessons
    ///
    /// With `previous`, timestamps are carried over per slug. Returns the
    /// number of records that reused a previous timestamp.
    pub fn build(
        &self,
        lessons: &[Lesson],
        previous: Option<&DeploymentMetadataFile>,
        now: DateTime<Utc>,
    ) -> (ContentRegistry, DeploymentMetadataFile, usize) {
        let mut registry = ContentRegistry::new();
        let mut records = Vec::with_capacity(lessons.len());
        let mut carried_over = 0;

        for lesson in lessons {
            registry.insert(lesson.slug().clone(), ContentRegistryEntry::from(lesson));

            let mut record = LessonMetadataRecord::from_lesson(lesson, now);
            if let Some(old) = previous.and_then(|file| file.find(lesson.slug())) {
                record.carry_over_from(old);
                carried_over += 1;
            }
            records.push(record);
        }

        (registry, DeploymentMetadataFile::new(records, now), carried_over)
    }

    /// Run generation and write both artifacts
    pub fn execute(&self, options: &GenerateOptions) -> LessonResult<GenerateResult> {
        self.execute_at(options, Utc::now())
    }

    /// Same as [`execute`](Self::execute) with a fixed clock
    pub fn execute_at(
        &self,
        options: &GenerateOptions,
        now: DateTime<Utc>,
    ) -> LessonResult<GenerateResult> {
        tracing::debug!(content_dir = %options.content_dir.display(), "generating content registry");

        let lessons = self.collect(&options.content_dir)?;
        let previous = if options.carry_over_timestamps {
            self.artifacts.load_metadata_if_present(&options.metadata_path)?
        } else {
            None
        };

        let (registry, metadata, carried_over) = self.build(&lessons, previous.as_ref(), now);

        self.artifacts.save(GeneratedArtifacts {
            registry_path: &options.registry_path,
            registry: &registry,
            metadata_path: &options.metadata_path,
            metadata: &metadata,
        })?;
        tracing::info!(
            lessons = registry.len(),
            registry = %options.registry_path.display(),
            metadata = %options.metadata_path.display(),
            "wrote content registry and metadata"
        );

        Ok(GenerateResult {
            registry,
            metadata,
            registry_path: options.registry_path.clone(),
            metadata_path: options.metadata_path.clone(),
            carried_over,
        })
    }

    /// Check that every registry entry still matches the content tree
    pub fn validate(&self, registry: &ContentRegistry, content_dir: &Path) -> LessonResult<()> {
        validate_integrity(registry, content_dir, &self.documents)?;
        tracing::info!(lessons = registry.len(), "content validation passed");
        Ok(())
    }
}
