//! lessonpack CLI - content fingerprinting and metadata deployment
//!
//! Usage: lessonpack <COMMAND>
//!
//! Commands:
//!   generate  Fingerprint lessons, write registry and metadata
//!   validate  Generate, then check the registry against the content tree
//!   status    Show what changed since the last generate
//!   deploy    Push metadata to the lesson canister
//!   call      Invoke a canister method
//!   run       generate, validate, deploy and verify

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::{Cli, Commands};
use commands::Context;

fn main() {
    let cli = Cli::parse();
    commands::init_tracing(cli.verbose, cli.json);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::load(&cli)?;

    match cli.command {
        Commands::Generate {
            content_dir,
            carry_over_timestamps,
        } => commands::generate::cmd_generate(&ctx, content_dir, carry_over_timestamps),
        Commands::Validate { content_dir } => commands::validate::cmd_validate(&ctx, content_dir),
        Commands::Status { content_dir } => commands::status::cmd_status(&ctx, content_dir),
        Commands::Deploy {
            strategy,
            dry_run,
            metadata,
        } => commands::deploy::cmd_deploy(&ctx, strategy, dry_run, metadata),
        Commands::Call { method, args } => commands::call::cmd_call(&ctx, &method, &args),
        Commands::Run {
            strategy,
            dry_run,
            no_verify,
        } => commands::run::cmd_run(&ctx, strategy, dry_run, no_verify),
    }
}
