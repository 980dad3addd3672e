//! `dfx` Lesson Store
//!
//! Reaches the learning-manager canister by shelling out to
//! `dfx canister call --network <net> <canister> <method> <args>`.

pub mod candid;

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{LessonStore, RemoteCallError, UpsertRequest};
use crate::domain::value_objects::{Network, Slug};

/// Default canister name
pub const DEFAULT_CANISTER: &str = "learning_manager";

/// Default agent binary, resolved through `PATH`
pub const DEFAULT_DFX: &str = "dfx";

/// Lesson store backed by the `dfx` command-line agent
#[derive(Debug, Clone)]
pub struct DfxStore {
    program: PathBuf,
    network: Network,
    canister: String,
}

impl DfxStore {
    pub fn new(network: Network) -> Self {
        Self {
            program: PathBuf::from(DEFAULT_DFX),
            network,
            canister: DEFAULT_CANISTER.to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_canister(mut self, canister: impl Into<String>) -> Self {
        self.canister = canister.into();
        self
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn canister(&self) -> &str {
        &self.canister
    }

    /// Arguments passed to the agent, without the program itself
    pub fn command_args(&self, method: &str, args: &str) -> Vec<String> {
        vec![
            "canister".to_string(),
            "call".to_string(),
            "--network".to_string(),
            self.network.dfx_name().to_string(),
            self.canister.clone(),
            method.to_string(),
            args.to_string(),
        ]
    }

    /// Full command line for logs and dry runs
    pub fn command_line(&self, method: &str, args: &str) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.command_args(method, args).into_iter().map(|a| {
            if a.contains(char::is_whitespace) || a.contains('"') {
                format!("'{}'", a.replace('\'', "'\\''"))
            } else {
                a
            }
        }));
        parts.join(" ")
    }
}

impl LessonStore for DfxStore {
    fn display_name(&self) -> String {
        format!("{}@{}", self.canister, self.network)
    }

    fn encode_upsert(&self, request: UpsertRequest<'_>) -> String {
        match request {
            UpsertRequest::Bulk(records) => candid::bulk_args(records),
            UpsertRequest::Single(record) => candid::single_args(record),
        }
    }

    fn encode_slug(&self, slug: &Slug) -> String {
        candid::slug_args(slug)
    }

    fn call(&self, method: &str, args: &str) -> Result<String, RemoteCallError> {
        tracing::debug!(command = %self.command_line(method, args), "invoking dfx");

        let output = Command::new(&self.program)
            .args(self.command_args(method, args))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RemoteCallError::Launch {
                program: self.program.display().to_string(),
                message: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() {
            return Err(RemoteCallError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if candid::is_err_variant(&stdout) {
            return Err(RemoteCallError::Rejected { response: stdout });
        }
        Ok(stdout)
    }
}
