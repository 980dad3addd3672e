//! `lessonpack call`

use anyhow::Result;

use super::Context;
use crate::ui::json::Event;

pub fn cmd_call(ctx: &Context, method: &str, args: &str) -> Result<()> {
    ctx.emit(&Event::start("call"))?;

    let deployer = ctx.deployer(ctx.config.deploy_options());
    tracing::debug!(command = %deployer.store().command_line(method, args), "invoking canister");
    let call = deployer.invoke_remote(method, args)?;
    let response = call.response.as_deref().unwrap_or_default();

    if ctx.json {
        ctx.emit(&Event::Call {
            method,
            slug: None,
            records: call.records,
            attempts: call.attempts,
            dry_run: false,
            args: Some(args),
            response: Some(response),
        })?;
        return ctx.emit(&Event::complete("call", None));
    }

    println!("{response}");
    Ok(())
}
