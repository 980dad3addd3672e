//! NDJSON event types
//!
//! Every line written in `--json` mode is one of these, tagged by `event`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event<'a> {
    Start {
        command: &'a str,
        version: &'static str,
    },
    Lesson {
        slug: &'a str,
        hash: &'a str,
        path: &'a str,
        premium: bool,
    },
    Written {
        path: String,
    },
    Change {
        slug: &'a str,
        kind: &'static str,
    },
    Call {
        method: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        slug: Option<&'a str>,
        records: usize,
        attempts: u32,
        dry_run: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        args: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        response: Option<&'a str>,
    },
    Verified {
        verified: usize,
        mismatched: usize,
    },
    Warning {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        file: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<usize>,
    },
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        file: Option<String>,
    },
    Complete {
        command: &'a str,
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        lessons: Option<usize>,
    },
}

impl<'a> Event<'a> {
    pub fn start(command: &'a str) -> Self {
        Event::Start {
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn complete(command: &'a str, lessons: Option<usize>) -> Self {
        Event::Complete {
            command,
            success: true,
            lessons,
        }
    }
}
