//! Home directory resolution
//!
//! `LESSONPACK_TEST_HOME` overrides `dirs::home_dir()` so tests never read
//! the developer's real user config.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory
pub const TEST_HOME_VAR: &str = "LESSONPACK_TEST_HOME";

/// Home directory used for lessonpack's own files
pub fn lessonpack_home_dir() -> Option<PathBuf> {
    std::env::var(TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// `~/.config/lessonpack/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    lessonpack_home_dir().map(|home| home.join(".config").join("lessonpack").join("config.toml"))
}
