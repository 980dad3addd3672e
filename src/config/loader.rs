//! Configuration loading
//!
//! Layers are merged table by table, so a project file only needs the keys
//! it changes. Environment overrides are applied after all files.

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::application::deploy::DeployStrategy;
use crate::domain::value_objects::Network;
use crate::error::{LessonError, LessonResult};
use crate::infrastructure::fs::user_config_path;
use crate::parser::ParserKind;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::Config;

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "lessonpack.toml";

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration after layering, with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// Files that contributed, lowest priority first
    pub sources: Vec<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys)
pub fn load_with_warnings(path: &Path) -> LessonResult<(Config, Vec<ConfigWarning>)> {
    let content = read_config(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| config_error(path, e))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config files to merge, lowest priority first
///
/// The user config is always considered. An explicit `--config` path
/// replaces the project file and must exist.
pub fn discover_layers(explicit: Option<&Path>, project_dir: &Path) -> LessonResult<Vec<PathBuf>> {
    let mut layers = Vec::new();

    if let Some(user) = user_config_path().filter(|p| p.is_file()) {
        layers.push(user);
    }

    match explicit {
        Some(path) if !path.is_file() => {
            return Err(LessonError::Config {
                file: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }
        Some(path) => layers.push(path.to_path_buf()),
        None => {
            let project = project_dir.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                layers.push(project);
            }
        }
    }

    Ok(layers)
}

/// Merge the given files over the defaults
pub fn load_layers(layers: &[PathBuf]) -> LessonResult<LoadedConfig> {
    let mut merged = Table::new();
    let mut warnings = Vec::new();

    for path in layers {
        // Validates types and collects unknown keys for this file alone
        let (_, file_warnings) = load_with_warnings(path)?;
        warnings.extend(file_warnings);

        let table: Table = read_config(path)?
            .parse()
            .map_err(|e: toml::de::Error| config_error(path, e))?;
        merge_tables(&mut merged, table);
        tracing::debug!(path = %path.display(), "loaded config layer");
    }

    let config = match layers.last() {
        Some(last) => Value::Table(merged)
            .try_into::<Config>()
            .map_err(|e| config_error(last, e))?,
        None => Config::default(),
    };

    Ok(LoadedConfig {
        config,
        warnings,
        sources: layers.to_vec(),
    })
}

/// Discover, merge and apply environment overrides
pub fn load(explicit: Option<&Path>, project_dir: &Path) -> LessonResult<LoadedConfig> {
    let layers = discover_layers(explicit, project_dir)?;
    let mut loaded = load_layers(&layers)?;
    loaded.config = loaded.config.with_env_overrides();
    Ok(loaded)
}

/// Apply environment overrides read through `lookup`
///
/// `DFX_NETWORK` is honored for compatibility with `dfx` itself;
/// `LESSONPACK_NETWORK` wins when both are set.
pub fn with_env_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    for var in ["DFX_NETWORK", "LESSONPACK_NETWORK"] {
        if let Some(value) = lookup(var) {
            config.network = EnvVarValidator::new(var, Network::VALID_VALUES).parse(
                &value,
                Network::parse,
                config.network,
            );
        }
    }

    if let Some(value) = lookup("LESSONPACK_CONTENT_DIR") {
        config.content_dir = PathBuf::from(value);
    }
    if let Some(value) = lookup("LESSONPACK_REGISTRY_PATH") {
        config.output_registry_path = PathBuf::from(value);
    }
    if let Some(value) = lookup("LESSONPACK_METADATA_PATH") {
        config.output_metadata_path = PathBuf::from(value);
    }

    if let Some(value) = lookup("LESSONPACK_FRONT_MATTER") {
        config.front_matter = EnvVarValidator::new("LESSONPACK_FRONT_MATTER", &["lines", "yaml"])
            .parse(
                &value,
                |s| match s.trim().to_lowercase().as_str() {
                    "lines" => Some(ParserKind::Lines),
                    "yaml" => Some(ParserKind::Yaml),
                    _ => None,
                },
                config.front_matter,
            );
    }

    if let Some(value) = lookup("LESSONPACK_CANISTER") {
        config.deploy.canister = value;
    }
    if let Some(value) = lookup("LESSONPACK_DFX") {
        config.deploy.dfx = PathBuf::from(value);
    }
    if let Some(value) = lookup("LESSONPACK_STRATEGY") {
        config.deploy.strategy = EnvVarValidator::new(
            "LESSONPACK_STRATEGY",
            DeployStrategy::VALID_VALUES,
        )
        .parse(&value, |s| s.parse().ok(), config.deploy.strategy);
    }
    if let Some(value) = lookup("LESSONPACK_RETRY_ATTEMPTS") {
        config.deploy.retry.max_attempts = EnvVarValidator::new(
            "LESSONPACK_RETRY_ATTEMPTS",
            &["a positive integer"],
        )
        .parse(
            &value,
            |s| s.trim().parse::<u32>().ok().filter(|n| *n > 0),
            config.deploy.retry.max_attempts,
        );
    }

    config
}

fn read_config(path: &Path) -> LessonResult<String> {
    fs::read_to_string(path).map_err(|e| config_error(path, e))
}

fn config_error(path: &Path, err: impl std::fmt::Display) -> LessonError {
    LessonError::Config {
        file: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn merge_tables(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(incoming)) => merge_tables(existing, incoming),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "content_dir",
        "extension",
        "output_registry_path",
        "output_metadata_path",
        "network",
        "front_matter",
        "carry_over_timestamps",
        "deploy",
        "canister",
        "dfx",
        "strategy",
        "bulk_method",
        "upsert_method",
        "verify_method",
        "verify",
        "retry",
        "max_attempts",
        "backoff",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
