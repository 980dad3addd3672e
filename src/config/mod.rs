//! Configuration module
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (`LESSONPACK_*`, `DFX_NETWORK`)
//! 3. Project config (`lessonpack.toml`, or the file given with `--config`)
//! 4. User config (`~/.config/lessonpack/config.toml`)
//! 5. Built-in defaults

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    discover_layers, load, load_layers, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, DeployConfig};
