//! `lessonpack generate`, `validate` and `status` against a real content tree

mod common;

use common::*;

#[test]
fn generate_writes_registry_and_metadata() {
    let env = TestEnv::with_lessons(&[("for_loops.md", FOR_LOOPS), ("python/functions.md", FUNCTIONS)]);

    let result = env.run(&["generate"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Generated 2 lesson(s)"), "{}", result.stdout);

    let registry = env.read_project_file(REGISTRY_PATH);
    assert!(registry.contains("export interface ContentRegistryEntry"));
    assert!(registry.contains("\"python/functions.md\""));
    assert!(registry.contains("export const CONTENT_HASHES"));

    let metadata: serde_json::Value =
        serde_json::from_str(&env.read_project_file(METADATA_PATH)).unwrap();
    assert_eq!(metadata["totalLessons"], 2);
    let lessons = metadata["lessons"].as_array().unwrap();
    assert_eq!(lessons[0]["slug"], "for_loops");
    assert_eq!(lessons[0]["version"], "1.2.0");
    assert_eq!(lessons[1]["slug"], "functions");
    assert_eq!(lessons[1]["is_premium"], true);
    assert_eq!(lessons[1]["contentHash"].as_str().unwrap().len(), 64);
}

#[test]
fn generate_is_deterministic_for_unchanged_content() {
    let env = TestEnv::with_lessons(&[("for_loops.md", FOR_LOOPS)]);

    assert!(env.run(&["generate"]).success);
    let first = env.read_project_file(REGISTRY_PATH);
    assert!(env.run(&["generate"]).success);

    assert_eq!(first, env.read_project_file(REGISTRY_PATH));
}

#[test]
fn missing_header_fails_and_writes_nothing() {
    let env = TestEnv::with_lessons(&[("for_loops.md", FOR_LOOPS), ("broken.md", NO_HEADER)]);

    let result = env.run(&["generate"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("missing front matter"), "{}", result.stderr);
    assert!(result.stderr.contains("broken.md"), "{}", result.stderr);
    assert!(!env.project_path(REGISTRY_PATH).exists());
    assert!(!env.project_path(METADATA_PATH).exists());
}

#[test]
fn duplicate_slugs_are_rejected() {
    let env = TestEnv::with_lessons(&[("a/loops.md", FOR_LOOPS), ("b/loops.md", FOR_LOOPS)]);

    let result = env.run(&["generate"]);

    assert!(!result.success);
    assert!(result.stderr.contains("duplicate lesson slug 'loops'"), "{}", result.stderr);
}

#[test]
fn lessonignore_excludes_drafts() {
    let env = TestEnv::with_lessons(&[("for_loops.md", FOR_LOOPS), ("drafts/wip.md", NO_HEADER)]);
    env.write_project_file(&format!("{CONTENT_DIR}/.lessonignore"), "drafts/\n");

    let result = env.run(&["generate"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Generated 1 lesson(s)"));
}

#[test]
fn generate_json_emits_ndjson() {
    let env = TestEnv::with_lessons(&[("for_loops.md", FOR_LOOPS), ("functions.md", FUNCTIONS)]);

    let result = env.run(&["generate", "--json"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.events();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.last().unwrap()["event"], "complete");
    assert_eq!(events.last().unwrap()["lessons"], 2);

    let slugs: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "lesson")
        .map(|e| e["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["for_loops", "functions"]);
}

#[test]
fn json_errors_are_events() {
    let env = TestEnv::with_lessons(&[("broken.md", NO_HEADER)]);

    let result = env.run(&["generate", "--json"]);

    assert!(!result.success);
    let events = result.events();
    let error = events.iter().find(|e| e["event"] == "error").expect("error event");
    assert!(error["file"].as_str().unwrap().ends_with("broken.md"));
}

#[test]
fn missing_content_dir_is_reported() {
    let env = TestEnv::new();

    let result = env.run(&["generate"]);

    assert!(!result.success);
    assert!(result.stderr.contains("content directory not found"), "{}", result.stderr);
}

#[test]
fn validate_passes_on_fresh_tree() {
    let env = TestEnv::with_lessons(&[("for_loops.md", FOR_LOOPS)]);

    let result = env.run(&["validate"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("All 1 lesson(s) valid"));
}

#[test]
fn status_reports_changes_since_generate() {
    let env = TestEnv::with_lessons(&[("for_loops.md", FOR_LOOPS), ("functions.md", FUNCTIONS)]);

    let before = env.run(&["status"]);
    assert!(before.success);
    assert!(before.stdout.contains("No metadata file"), "{}", before.stdout);

    assert!(env.run(&["generate"]).success);
    assert!(env.run(&["status"]).stdout.contains("Up to date (2 lesson(s))"));

    env.write_project_file(&format!("{CONTENT_DIR}/functions.md"), &format!("{FUNCTIONS}\nMore.\n"));
    let after = env.run(&["status", "--json"]);
    let changed: Vec<_> = after
        .events()
        .into_iter()
        .filter(|e| e["event"] == "change" && e["kind"] == "changed")
        .collect();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0]["slug"], "functions");
}
