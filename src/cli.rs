use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lessonpack::{DeployStrategy, Network};

/// lessonpack - fingerprint lesson content and deploy its metadata
#[derive(Parser, Debug)]
#[command(name = "lessonpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of ./lessonpack.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Network to deploy to (local, remote/ic)
    #[arg(long, global = true)]
    pub network: Option<Network>,

    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fingerprint every lesson and write the registry and metadata files
    Generate {
        /// Content directory (overrides config)
        #[arg(long)]
        content_dir: Option<PathBuf>,

        /// Keep createdAt/updatedAt of unchanged lessons from the previous metadata file
        #[arg(long)]
        carry_over_timestamps: bool,
    },

    /// Generate, then check every registry entry against the content tree
    Validate {
        /// Content directory (overrides config)
        #[arg(long)]
        content_dir: Option<PathBuf>,
    },

    /// Show which lessons changed since the last generate
    Status {
        /// Content directory (overrides config)
        #[arg(long)]
        content_dir: Option<PathBuf>,
    },

    /// Push the metadata file to the lesson canister
    Deploy {
        /// One bulk call, or one call per lesson
        #[arg(long)]
        strategy: Option<DeployStrategy>,

        /// Print the calls without making them
        #[arg(long)]
        dry_run: bool,

        /// Metadata file (overrides config)
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Invoke a canister method and print its raw response
    Call {
        /// Method name, e.g. getLessonMetadata
        method: String,

        /// Candid argument text
        #[arg(default_value = "()")]
        args: String,
    },

    /// Generate, validate, deploy and verify in one go
    Run {
        /// One bulk call, or one call per lesson
        #[arg(long)]
        strategy: Option<DeployStrategy>,

        /// Print the calls without making them
        #[arg(long)]
        dry_run: bool,

        /// Skip reading records back after the deploy
        #[arg(long)]
        no_verify: bool,
    },
}
