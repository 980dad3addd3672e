//! Isolated environment for driving the `lessonpack` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::CONTENT_DIR;

/// Fake `dfx`: logs each call, stores upserted args, and answers lookups
/// with everything stored so far.
///
/// `FAKE_DFX_MODE=fail` exits non-zero; `FAKE_DFX_MODE=reject` answers
/// with an `err` variant.
const FAKE_DFX: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
printf '%s\n' "$*" >> "$dir/dfx-calls.log"
case "$FAKE_DFX_MODE" in
  fail) echo "could not connect to replica" >&2; exit 255 ;;
  reject) echo '(variant { err = "unauthorized caller" })'; exit 0 ;;
esac
case "$6" in
  getLessonMetadata) cat "$dir/dfx-state" 2>/dev/null || echo "(null)" ;;
  *) printf '%s\n' "$7" >> "$dir/dfx-state"; echo "(variant { ok })" ;;
esac
"#;

/// Result of running a lessonpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON: {l}: {e}")))
            .collect()
    }
}

/// Isolated project and home directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("project dir"),
            home_dir: TempDir::new().expect("home dir"),
            bin_dir: TempDir::new().expect("bin dir"),
        }
    }

    /// Project with the given lessons under the default content directory
    pub fn with_lessons(lessons: &[(&str, &str)]) -> Self {
        let env = Self::new();
        for (name, content) in lessons {
            env.write_project_file(&format!("{CONTENT_DIR}/{name}"), content);
        }
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        write_file(&self.project_path(relative), content);
    }

    pub fn write_home_file(&self, relative: &str, content: &str) {
        write_file(&self.home_dir.path().join(relative), content);
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    /// Install the fake `dfx` and return its path
    #[cfg(unix)]
    pub fn install_fake_dfx(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.path().join("dfx");
        std::fs::write(&path, FAKE_DFX).expect("write fake dfx");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake dfx");
        path
    }

    /// One line per `dfx` invocation, in order
    pub fn dfx_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.bin_dir.path().join("dfx-calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lessonpack"));
        cmd.current_dir(cwd)
            .args(args)
            .env("LESSONPACK_TEST_HOME", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("DFX_NETWORK")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute lessonpack");
        to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create directories");
    }
    std::fs::write(path, content).expect("write file");
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
