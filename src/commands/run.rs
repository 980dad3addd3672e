//! `lessonpack run`

use anyhow::Result;
use lessonpack::{run_pipeline, DeployStrategy, PipelineOptions};

use super::deploy::report_deployed;
use super::generate::report_generated;
use super::Context;
use crate::ui::json::Event;

pub fn cmd_run(
    ctx: &Context,
    strategy: Option<DeployStrategy>,
    dry_run: bool,
    no_verify: bool,
) -> Result<()> {
    ctx.emit(&Event::start("run"))?;

    let mut deploy_options = ctx.config.deploy_options().with_dry_run(dry_run);
    if let Some(strategy) = strategy {
        deploy_options = deploy_options.with_strategy(strategy);
    }
    let options = PipelineOptions {
        generate: ctx.config.generate_options(),
        verify: ctx.config.deploy.verify && !no_verify,
    };

    let report = run_pipeline(&ctx.generator(), &ctx.deployer(deploy_options), &options)?;

    report_generated(ctx, &report.generated)?;
    report_deployed(ctx, &report.deployed)?;

    if let Some(verification) = &report.verification {
        if ctx.json {
            ctx.emit(&Event::Verified {
                verified: verification.verified.len(),
                mismatched: verification.mismatched.len(),
            })?;
        } else {
            println!("Verified {} lesson(s)", verification.verified.len());
        }
    }

    ctx.emit(&Event::complete("run", Some(report.generated.lesson_count())))
}
