//! Command handlers for the `lessonpack` binary

pub mod call;
pub mod deploy;
pub mod generate;
pub mod run;
pub mod status;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use lessonpack::application::{DeployOptions, DeployUseCase, GenerateUseCase};
use lessonpack::config::{self, ConfigWarning};
use lessonpack::infrastructure::{DfxStore, FsArtifactRepository, FsDocumentRepository};
use lessonpack::Config;

use crate::cli::Cli;
use crate::ui::ci::{Annotation, AnnotationLevel};
use crate::ui::json::{self, Event};
use crate::ui::terminal::detect_capabilities;

/// Initialize tracing based on CLI flags
///
/// Logs go to stderr so that stdout stays clean for NDJSON events.
pub fn init_tracing(verbose: u8, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match verbose {
        0 => "lessonpack=warn",
        1 => "lessonpack=info",
        2 => "lessonpack=debug",
        _ => "lessonpack=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolved configuration plus output mode, shared by every command
pub struct Context {
    pub config: Config,
    pub json: bool,
    pub sources: Vec<PathBuf>,
}

impl Context {
    /// Load layered config and apply global CLI flags on top
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let loaded = config::load(cli.config.as_deref(), &cwd)?;

        let mut ctx = Self {
            config: loaded.config,
            json: cli.json,
            sources: loaded.sources,
        };
        for warning in &loaded.warnings {
            ctx.report_config_warning(warning)?;
        }

        if let Some(network) = cli.network {
            ctx.config.network = network;
        }
        tracing::debug!(sources = ?ctx.sources, network = %ctx.config.network, "configuration loaded");
        Ok(ctx)
    }

    pub fn generator(&self) -> GenerateUseCase<FsDocumentRepository, FsArtifactRepository> {
        GenerateUseCase::new(
            FsDocumentRepository::new(self.config.extension.as_str()),
            FsArtifactRepository::new(),
            self.config.front_matter.parser(),
        )
    }

    pub fn deployer(&self, options: DeployOptions) -> DeployUseCase<FsArtifactRepository, DfxStore> {
        let store = DfxStore::new(self.config.network)
            .with_program(&self.config.deploy.dfx)
            .with_canister(self.config.deploy.canister.as_str());
        DeployUseCase::new(FsArtifactRepository::new(), store, options)
    }

    /// Write an NDJSON event; a no-op outside `--json` mode
    pub fn emit(&self, event: &Event<'_>) -> Result<()> {
        if self.json {
            json::emit(event)?;
        }
        Ok(())
    }

    fn report_config_warning(&self, warning: &ConfigWarning) -> Result<()> {
        let mut message = format!("unknown configuration key '{}'", warning.key);
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!(" (did you mean '{suggestion}'?)"));
        }
        let file = warning.file.display().to_string();

        if self.json {
            return self.emit(&Event::Warning {
                message,
                file: Some(file),
                line: warning.line,
            });
        }

        if detect_capabilities().is_github_actions {
            let annotation = Annotation::new(AnnotationLevel::Warning, &message)
                .with_file(file)
                .with_line(warning.line)
                .with_title("lessonpack");
            println!("{annotation}");
        } else {
            tracing::warn!(file = %file, line = ?warning.line, "{message}");
        }
        Ok(())
    }
}
