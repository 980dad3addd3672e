//! Property tests for front matter extraction and parsing.

use std::collections::BTreeMap;
use std::path::Path;

use proptest::prelude::*;

use lessonpack::parser::{extract_front_matter, FrontMatterParser, LineParser, YamlParser};

fn small_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _:#\\-]{0,40}")
        .unwrap()
        .prop_filter("not a delimiter", |s| s.trim() != "---")
}

fn plain_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9 .]{0,20}[A-Za-z0-9]").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// Well-formed documents split back into the header and body they were built from.
    #[test]
    fn extract_round_trips_header_and_body(
        header_lines in proptest::collection::vec(small_line(), 0..=8),
        body_lines in proptest::collection::vec(small_line(), 0..=12),
    ) {
        let header = header_lines.join("\n");
        // `str::lines()` drops one trailing empty line
        let mut body = body_lines.join("\n");
        if body.ends_with('\n') {
            body.pop();
        }

        let mut content_lines = vec!["---".to_string()];
        content_lines.extend(header_lines.clone());
        content_lines.push("---".to_string());
        content_lines.extend(body_lines.clone());
        let content = content_lines.join("\n");

        let extracted = extract_front_matter(&content, Path::new("lesson.md")).unwrap();

        prop_assert_eq!(extracted.header, header);
        prop_assert_eq!(extracted.body, body);
        prop_assert_eq!(extracted.end_line, 2 + header_lines.len());
    }

    /// Every plain `key: value` line is read back as the same text.
    #[test]
    fn line_parser_reads_back_plain_fields(
        fields in proptest::collection::btree_map("x_[a-z]{1,8}", plain_value(), 1..6),
    ) {
        let header: Vec<String> = fields.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        let content = format!("---\n{}\n---\nbody\n", header.join("\n"));

        let parsed = LineParser.parse(&content, Path::new("lesson.md")).unwrap();

        let read_back: BTreeMap<String, String> = fields
            .keys()
            .map(|k| (k.clone(), parsed.text(k).unwrap_or_default().to_string()))
            .collect();
        prop_assert_eq!(read_back, fields);
    }

    /// Documents not starting with a delimiter are always rejected.
    #[test]
    fn missing_opening_delimiter_is_rejected(body in "[A-Za-z0-9 ]{0,40}") {
        let content = format!("{body}\n---\ntitle: x\n---\n");
        prop_assert!(extract_front_matter(&content, Path::new("lesson.md")).is_err());
    }

    #[test]
    fn extract_never_panics(content in "(?s).{0,512}") {
        let _ = extract_front_matter(&content, Path::new("lesson.md"));
    }

    #[test]
    fn parsers_never_panic(header in "(?s).{0,256}") {
        let content = format!("---\n{header}\n---\n");
        let _ = LineParser.parse(&content, Path::new("lesson.md"));
        let _ = YamlParser.parse(&content, Path::new("lesson.md"));
    }
}
