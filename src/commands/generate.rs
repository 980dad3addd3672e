//! `lessonpack generate`

use std::path::PathBuf;

use anyhow::Result;
use lessonpack::GenerateResult;

use super::Context;
use crate::ui::json::Event;

pub fn cmd_generate(ctx: &Context, content_dir: Option<PathBuf>, carry_over: bool) -> Result<()> {
    ctx.emit(&Event::start("generate"))?;

    let mut options = ctx.config.generate_options();
    if let Some(dir) = content_dir {
        options.content_dir = dir;
    }
    if carry_over {
        options.carry_over_timestamps = true;
    }

    let result = ctx.generator().execute(&options)?;
    report_generated(ctx, &result)?;

    ctx.emit(&Event::complete("generate", Some(result.lesson_count())))
}

/// Per-lesson lines plus the two written paths
pub(crate) fn report_generated(ctx: &Context, result: &GenerateResult) -> Result<()> {
    if ctx.json {
        for (slug, entry) in result.registry.entries() {
            ctx.emit(&Event::Lesson {
                slug: slug.as_str(),
                hash: entry.hash.as_str(),
                path: &entry.path,
                premium: entry.premium,
            })?;
        }
        for path in [&result.registry_path, &result.metadata_path] {
            ctx.emit(&Event::Written {
                path: path.display().to_string(),
            })?;
        }
        return Ok(());
    }

    for (slug, entry) in result.registry.entries() {
        let premium = if entry.premium { " (premium)" } else { "" };
        println!("  {}  {}{}", entry.hash.short(12), slug, premium);
    }
    println!(
        "Generated {} lesson(s)\n  registry: {}\n  metadata: {}",
        result.lesson_count(),
        result.registry_path.display(),
        result.metadata_path.display()
    );
    if result.carried_over > 0 {
        println!("  kept timestamps for {} unchanged lesson(s)", result.carried_over);
    }
    Ok(())
}
