use std::path::Path;

use lessonpack::LessonError;

use crate::ui::ci::{Annotation, AnnotationLevel};
use crate::ui::json::{self, Event};
use crate::ui::terminal::detect_capabilities;

pub fn format_lesson_error(err: &LessonError, supports_color: bool) -> String {
    let header = if supports_color {
        "\x1b[1;31merror\x1b[0m"
    } else {
        "[ERROR]"
    };

    let mut out = format!("{header} {err}\n");
    if let Some(fix) = fix_hint(err) {
        out.push_str(&format!("  fix: {fix}\n"));
    }
    out
}

fn fix_hint(err: &LessonError) -> Option<String> {
    match err {
        LessonError::MissingFrontMatter { .. } => Some(
            "start the document with a header:\n  ---\n  title: Your lesson\n  ---".to_string(),
        ),
        LessonError::InvalidFrontMatter { .. } => {
            Some("fix the YAML header, or set front_matter = \"lines\"".to_string())
        }
        LessonError::DuplicateSlug { .. } => {
            Some("lesson file names must be unique across all subdirectories".to_string())
        }
        LessonError::InvalidFileName { .. } => {
            Some("rename the file; lesson slugs come from UTF-8 file names".to_string())
        }
        LessonError::DirectoryNotFound { .. } => {
            Some("set content_dir in lessonpack.toml or LESSONPACK_CONTENT_DIR".to_string())
        }
        LessonError::MetadataFile { .. } => {
            Some("run 'lessonpack generate' to recreate the metadata file".to_string())
        }
        LessonError::RemoteCall { .. } => Some(
            "check that dfx is installed and the replica is running ('dfx start' for local)"
                .to_string(),
        ),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    match err.downcast_ref::<LessonError>() {
        Some(lesson) => format_lesson_error(lesson, caps.supports_color),
        None => format!("[ERROR] {err:#}\n"),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let file = error_file(err).map(|p| p.display().to_string());

    if json {
        let _ = json::emit(&Event::Error {
            message: format!("{err:#}"),
            file,
        });
        return;
    }

    let caps = detect_capabilities();
    if caps.is_ci && caps.is_github_actions {
        let message = format!("{err:#}");
        let mut annotation = Annotation::new(AnnotationLevel::Error, &message).with_title("lessonpack");
        if let Some(file) = file {
            annotation = annotation.with_file(file);
        }
        println!("{annotation}");
    }

    eprint!("{}", format_error(err));
}

fn error_file(err: &anyhow::Error) -> Option<&Path> {
    err.downcast_ref::<LessonError>().and_then(LessonError::file)
}
