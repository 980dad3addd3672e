//! Candid text rendering for `dfx canister call`
//!
//! Only the subset needed for lesson metadata: text, bool, records,
//! vectors and argument tuples.

use crate::domain::entities::{iso8601, LessonMetadataRecord};
use crate::domain::value_objects::Slug;

/// Quote and escape a Candid text literal
pub fn text(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:02x}", c as u32)),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn bool_literal(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `record { slug = "..."; ...; }` for one lesson
pub fn record(lesson: &LessonMetadataRecord) -> String {
    let fields = [
        ("slug", text(lesson.slug.as_str())),
        ("title", text(&lesson.title)),
        ("description", text(&lesson.description)),
        ("code", text(&lesson.code)),
        ("contentHash", text(lesson.content_hash.as_str())),
        ("version", text(&lesson.version)),
        ("is_premium", bool_literal(lesson.is_premium).to_string()),
        ("createdAt", text(&iso8601::format(&lesson.created_at))),
        ("updatedAt", text(&iso8601::format(&lesson.updated_at))),
    ];

    let body: String = fields
        .iter()
        .map(|(name, value)| format!("{} = {}; ", name, value))
        .collect();
    format!("record {{ {}}}", body)
}

/// `(vec { record {..}; record {..}; })`
pub fn bulk_args(lessons: &[LessonMetadataRecord]) -> String {
    if lessons.is_empty() {
        return "(vec {})".to_string();
    }
    let items: String = lessons.iter().map(|l| format!("{}; ", record(l))).collect();
    format!("(vec {{ {}}})", items)
}

/// `("slug", record {..})`
pub fn single_args(lesson: &LessonMetadataRecord) -> String {
    format!("({}, {})", text(lesson.slug.as_str()), record(lesson))
}

/// `("slug")`
pub fn slug_args(slug: &Slug) -> String {
    format!("({})", text(slug.as_str()))
}

/// Whether a response is an `err` variant, e.g. `(variant { err = "..." })`
///
/// Text literals are blanked first so payload strings are never matched.
pub fn is_err_variant(response: &str) -> bool {
    let outside = blank_text_literals(response);
    let tokens: Vec<&str> = outside
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|t| !t.is_empty())
        .collect();

    tokens.iter().enumerate().any(|(i, token)| {
        if *token != "variant" {
            return false;
        }
        match tokens.get(i + 1) {
            Some(&"{") => tokens.get(i + 2).map(|t| is_err_label(t)).unwrap_or(false),
            Some(open) => open.strip_prefix('{').map(is_err_label).unwrap_or(false),
            None => false,
        }
    })
}

/// Replace every `"..."` literal, escapes included, with a single space
fn blank_text_literals(response: &str) -> String {
    let mut out = String::with_capacity(response.len());
    let mut chars = response.chars();
    while let Some(c) = chars.next() {
        if c != '"' {
            out.push(c);
            continue;
        }
        while let Some(inner) = chars.next() {
            match inner {
                '\\' => {
                    chars.next();
                }
                '"' => break,
                _ => {}
            }
        }
        out.push(' ');
    }
    out
}

fn is_err_label(token: &str) -> bool {
    let label = token.trim_end_matches(&['=', ';', '}'][..]);
    label == "err" || label == "Err"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ContentHash;
    use chrono::{TimeZone, Utc};

    fn lesson(slug: &str, premium: bool) -> LessonMetadataRecord {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        LessonMetadataRecord {
            slug: Slug::new(slug),
            title: format!("Lesson {slug}"),
            description: String::new(),
            code: slug.to_string(),
            content_hash: ContentHash::from_bytes(slug.as_bytes()),
            version: "1".to_string(),
            is_premium: premium,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn text_escapes_quotes_backslashes_and_newlines() {
        assert_eq!(text("plain"), "\"plain\"");
        assert_eq!(text("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(text("a\\b"), "\"a\\\\b\"");
        assert_eq!(text("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(text("bell\u{7}"), "\"bell\\07\"");
    }

    #[test]
    fn text_escapes_c1_controls_as_unicode() {
        assert_eq!(text("nel\u{85}"), "\"nel\\u{85}\"");
        assert_eq!(text("caf\u{e9}"), "\"caf\u{e9}\"");
    }

    #[test]
    fn record_lists_fields_in_schema_order() {
        let rendered = record(&lesson("for_loops", false));

        assert!(rendered.starts_with("record { slug = \"for_loops\"; title = \"Lesson for_loops\";"));
        assert!(rendered.contains("is_premium = false;"));
        assert!(rendered.contains("createdAt = \"2024-05-01T08:00:00.000Z\";"));
        assert!(rendered.ends_with("; }"));
    }

    #[test]
    fn bulk_args_wraps_records_in_vec() {
        let args = bulk_args(&[lesson("a", false), lesson("b", true)]);

        assert!(args.starts_with("(vec { record { slug = \"a\";"));
        assert!(args.contains("record { slug = \"b\";"));
        assert!(args.contains("is_premium = true;"));
        assert!(args.ends_with("; })"));
        assert_eq!(bulk_args(&[]), "(vec {})");
    }

    #[test]
    fn single_args_keys_record_by_slug() {
        let args = single_args(&lesson("functions", true));
        assert!(args.starts_with("(\"functions\", record {"));
        assert!(args.ends_with("})"));
    }

    #[test]
    fn slug_args_is_a_one_tuple() {
        assert_eq!(slug_args(&Slug::new("intro")), "(\"intro\")");
    }

    #[test]
    fn detects_err_variants() {
        assert!(is_err_variant("(variant { err = \"not allowed\" })"));
        assert!(is_err_variant("(\n  variant {\n    err = \"boom\"\n  },\n)"));
        assert!(is_err_variant("(variant {err = \"tight\"})"));
        assert!(is_err_variant("(variant {err})"));
        assert!(!is_err_variant("(variant { ok })"));
        assert!(!is_err_variant("(variant { ok = \"err\" })"));
        assert!(!is_err_variant("()"));
    }

    #[test]
    fn err_inside_text_is_not_a_rejection() {
        let lookup = r#"(opt record { slug = "results"; description = "Matching variant { err = e } in Motoko"; })"#;
        assert!(!is_err_variant(lookup));

        let escaped = r#"(opt record { title = "say "variant { err }" twice" })"#;
        assert!(!is_err_variant(escaped));

        assert!(is_err_variant(r#"(variant { err = "quoted "ok" inside" })"#));
    }
}
