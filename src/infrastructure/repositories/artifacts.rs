//! File System Artifact Repository
//!
//! Renders the content registry as a TypeScript module, the deployment
//! metadata as pretty JSON, and writes both in one atomic batch.

use std::io::ErrorKind;
use std::path::Path;

use crate::domain::entities::{ContentRegistry, DeploymentMetadataFile};
use crate::domain::ports::{ArtifactRepository, GeneratedArtifacts};
use crate::error::{LessonError, LessonResult};
use crate::infrastructure::fs::LocalFs;

/// Header written at the top of the generated TypeScript module
pub const GENERATED_HEADER: &str = "// Auto-generated by lessonpack\n// Do not edit manually\n";

/// Artifact repository writing to the local file system
#[derive(Debug, Clone, Default)]
pub struct FsArtifactRepository {
    fs: LocalFs,
}

impl FsArtifactRepository {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl ArtifactRepository for FsArtifactRepository {
    fn save(&self, artifacts: GeneratedArtifacts<'_>) -> LessonResult<()> {
        let registry = render_registry_module(artifacts.registry)?;
        let metadata = render_metadata_json(artifacts.metadata)?;

        self.fs.write_batch(&[
            (artifacts.registry_path.to_path_buf(), registry.into_bytes()),
            (artifacts.metadata_path.to_path_buf(), metadata.into_bytes()),
        ])
    }

    fn load_metadata(&self, path: &Path) -> LessonResult<DeploymentMetadataFile> {
        let content = std::fs::read_to_string(path).map_err(|e| LessonError::MetadataFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        parse_metadata_json(path, &content)
    }

    fn load_metadata_if_present(&self, path: &Path) -> LessonResult<Option<DeploymentMetadataFile>> {
        match std::fs::read_to_string(path) {
            Ok(content) => parse_metadata_json(path, &content).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LessonError::MetadataFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }
}

fn parse_metadata_json(path: &Path, content: &str) -> LessonResult<DeploymentMetadataFile> {
    serde_json::from_str(content).map_err(|e| LessonError::MetadataFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Render the registry as a TypeScript module
///
/// Exports `ContentRegistryEntry`, `CONTENT_REGISTRY` and `CONTENT_HASHES`.
pub fn render_registry_module(registry: &ContentRegistry) -> LessonResult<String> {
    let mut out = String::from(GENERATED_HEADER);
    out.push('\n');
    out.push_str("export interface ContentRegistryEntry {\n");
    out.push_str("  path: string;\n");
    out.push_str("  hash: string;\n");
    out.push_str("  version: string;\n");
    out.push_str("  size: number;\n");
    out.push_str("  premium: boolean;\n");
    out.push_str("}\n\n");

    out.push_str("export const CONTENT_REGISTRY: Record<string, ContentRegistryEntry> = ");
    out.push_str(&serde_json::to_string_pretty(registry)?);
    out.push_str(";\n\n");

    out.push_str("export const CONTENT_HASHES = {\n");
    let lines = registry
        .entries()
        .map(|(slug, entry)| {
            Ok(format!(
                "  {}: {}",
                serde_json::to_string(slug.as_str())?,
                serde_json::to_string(entry.hash.as_str())?
            ))
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;
    out.push_str(&lines.join(",\n"));
    if !lines.is_empty() {
        out.push('\n');
    }
    out.push_str("} as const;\n");

    Ok(out)
}

/// Render the metadata file as pretty JSON with a trailing newline
pub fn render_metadata_json(metadata: &DeploymentMetadataFile) -> LessonResult<String> {
    let mut json = serde_json::to_string_pretty(metadata)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ContentRegistryEntry, LessonMetadataRecord};
    use crate::domain::value_objects::{ContentHash, Slug};
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn registry() -> ContentRegistry {
        let mut registry = ContentRegistry::new();
        for slug in ["functions", "for_loops"] {
            registry.insert(
                Slug::new(slug),
                ContentRegistryEntry {
                    path: format!("{slug}.md"),
                    hash: ContentHash::from_bytes(slug.as_bytes()),
                    version: "1".to_string(),
                    size: slug.len() as u64,
                    premium: slug == "functions",
                },
            );
        }
        registry
    }

    fn metadata() -> DeploymentMetadataFile {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let record = LessonMetadataRecord {
            slug: Slug::new("for_loops"),
            title: "For Loops".to_string(),
            description: String::new(),
            code: "for_loops".to_string(),
            content_hash: ContentHash::from_bytes(b"for_loops"),
            version: "1".to_string(),
            is_premium: false,
            created_at: now,
            updated_at: now,
        };
        DeploymentMetadataFile::new(vec![record], now)
    }

    #[test]
    fn registry_module_exports_all_three_symbols() {
        let ts = render_registry_module(&registry()).unwrap();

        assert!(ts.starts_with(GENERATED_HEADER));
        assert!(ts.contains("export interface ContentRegistryEntry {"));
        assert!(ts.contains("export const CONTENT_REGISTRY: Record<string, ContentRegistryEntry> = {"));
        assert!(ts.contains("export const CONTENT_HASHES = {"));
        assert!(ts.trim_end().ends_with("} as const;"));
    }

    #[test]
    fn registry_module_lists_hashes_in_slug_order() {
        let ts = render_registry_module(&registry()).unwrap();
        let hashes = ts.split("CONTENT_HASHES").nth(1).unwrap();

        let for_loops = hashes.find("\"for_loops\"").unwrap();
        let functions = hashes.find("\"functions\"").unwrap();
        assert!(for_loops < functions);
        assert!(hashes.contains(ContentHash::from_bytes(b"functions").as_str()));
    }

    #[test]
    fn empty_registry_still_renders_valid_module() {
        let ts = render_registry_module(&ContentRegistry::new()).unwrap();
        assert!(ts.contains("CONTENT_REGISTRY: Record<string, ContentRegistryEntry> = {};"));
        assert!(ts.contains("export const CONTENT_HASHES = {\n} as const;"));
    }

    #[test]
    fn save_then_load_metadata() {
        let dir = tempdir().unwrap();
        let registry_path = dir.path().join("src/generated/content-registry.ts");
        let metadata_path = dir.path().join("deployment/lesson-metadata.json");
        let repo = FsArtifactRepository::new();
        let registry = registry();
        let metadata = metadata();

        repo.save(GeneratedArtifacts {
            registry_path: &registry_path,
            registry: &registry,
            metadata_path: &metadata_path,
            metadata: &metadata,
        })
        .unwrap();

        assert!(registry_path.exists());
        let raw = std::fs::read_to_string(&metadata_path).unwrap();
        assert!(raw.contains("\"generatedAt\": \"2024-05-01T08:00:00.000Z\""));
        assert!(raw.contains("\"totalLessons\": 1"));
        assert_eq!(repo.load_metadata(&metadata_path).unwrap(), metadata);
    }

    #[test]
    fn load_metadata_reports_path_on_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lesson-metadata.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FsArtifactRepository::new().load_metadata(&path).unwrap_err();
        match err {
            LessonError::MetadataFile { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected metadata error, got {other:?}"),
        }
    }

    #[test]
    fn load_metadata_if_present_tolerates_missing_file() {
        let dir = tempdir().unwrap();
        let repo = FsArtifactRepository::new();

        assert!(repo
            .load_metadata_if_present(&dir.path().join("missing.json"))
            .unwrap()
            .is_none());
        assert!(matches!(
            repo.load_metadata(&dir.path().join("missing.json")),
            Err(LessonError::MetadataFile { .. })
        ));
    }
}
