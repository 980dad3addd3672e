//! `lessonpack deploy`

use std::path::PathBuf;

use anyhow::Result;
use lessonpack::{DeployResult, DeployStrategy};

use super::Context;
use crate::ui::json::Event;

pub fn cmd_deploy(
    ctx: &Context,
    strategy: Option<DeployStrategy>,
    dry_run: bool,
    metadata: Option<PathBuf>,
) -> Result<()> {
    ctx.emit(&Event::start("deploy"))?;

    let mut options = ctx.config.deploy_options().with_dry_run(dry_run);
    if let Some(strategy) = strategy {
        options = options.with_strategy(strategy);
    }
    let metadata_path = metadata.unwrap_or_else(|| ctx.config.output_metadata_path.clone());

    let deployer = ctx.deployer(options);
    let result = deployer.deploy_file(&metadata_path)?;
    report_deployed(ctx, &result)?;

    ctx.emit(&Event::complete("deploy", Some(result.record_count())))
}

pub(crate) fn report_deployed(ctx: &Context, result: &DeployResult) -> Result<()> {
    if ctx.json {
        for call in &result.calls {
            ctx.emit(&Event::Call {
                method: &call.method,
                slug: call.slug.as_ref().map(|s| s.as_str()),
                records: call.records,
                attempts: call.attempts,
                dry_run: result.dry_run,
                args: result.dry_run.then_some(call.args.as_str()),
                response: call.response.as_deref(),
            })?;
        }
        return Ok(());
    }

    if result.dry_run {
        println!("Dry run against {}, no calls made:", result.store);
        for call in &result.calls {
            println!("  {} {}", call.method, call.args);
        }
        return Ok(());
    }

    println!(
        "Deployed {} record(s) to {} in {} call(s) ({} strategy)",
        result.record_count(),
        result.store,
        result.calls.len(),
        result.strategy
    );
    if result.retries() > 0 {
        println!("  {} retried attempt(s)", result.retries());
    }
    Ok(())
}
