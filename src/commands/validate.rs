//! `lessonpack validate`

use std::path::PathBuf;

use anyhow::Result;

use super::generate::report_generated;
use super::Context;
use crate::ui::json::Event;

/// Regenerates first so the check runs against what is on disk now
pub fn cmd_validate(ctx: &Context, content_dir: Option<PathBuf>) -> Result<()> {
    ctx.emit(&Event::start("validate"))?;

    let mut options = ctx.config.generate_options();
    if let Some(dir) = content_dir {
        options.content_dir = dir;
    }

    let generator = ctx.generator();
    let result = generator.execute(&options)?;
    report_generated(ctx, &result)?;
    generator.validate(&result.registry, &options.content_dir)?;

    if !ctx.json {
        println!("All {} lesson(s) valid", result.lesson_count());
    }
    ctx.emit(&Event::complete("validate", Some(result.lesson_count())))
}
