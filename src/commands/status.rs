//! `lessonpack status`

use std::path::PathBuf;

use anyhow::Result;
use lessonpack::domain::services::ChangeKind;

use super::Context;
use crate::ui::json::Event;

pub fn cmd_status(ctx: &Context, content_dir: Option<PathBuf>) -> Result<()> {
    ctx.emit(&Event::start("status"))?;

    let mut options = ctx.config.generate_options();
    if let Some(dir) = content_dir {
        options.content_dir = dir;
    }

    let report = ctx.generator().status(&options)?;

    if ctx.json {
        for change in &report.changes {
            ctx.emit(&Event::Change {
                slug: change.slug.as_str(),
                kind: change.kind.as_str(),
            })?;
        }
        return ctx.emit(&Event::complete("status", Some(report.changes.len())));
    }

    if !report.has_metadata {
        println!(
            "No metadata file at {}; run 'lessonpack generate'",
            options.metadata_path.display()
        );
    }
    for change in report.changes.iter().filter(|c| c.kind != ChangeKind::Unchanged) {
        println!("  {:<9} {}", change.kind.as_str(), change.slug);
    }
    if report.is_up_to_date() {
        println!("Up to date ({} lesson(s))", report.count(ChangeKind::Unchanged));
    } else {
        println!(
            "{} added, {} changed, {} removed, {} unchanged",
            report.count(ChangeKind::Added),
            report.count(ChangeKind::Changed),
            report.count(ChangeKind::Removed),
            report.count(ChangeKind::Unchanged)
        );
    }
    Ok(())
}
