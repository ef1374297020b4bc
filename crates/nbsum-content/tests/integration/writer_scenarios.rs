//! Writer scenarios: path layout, key presence, overwrite, timestamps.

use chrono::{DateTime, Local, SubsecRound};
use nbsum_content::{read_summary, Metric, Status, SummaryInput};
use serde_yaml::Value;

use crate::common::{checkout_cta_input, TestRepo};

#[test]
fn test_returns_expected_path() {
    let repo = TestRepo::new();
    let path = repo
        .writer
        .write("ab-simulator", "ab-test-analysis", checkout_cta_input())
        .unwrap();

    assert_eq!(path, repo.expected_path("ab-simulator", "ab-test-analysis"));
    assert!(path.is_absolute());
}

#[test]
fn test_creates_missing_project_directory() {
    let repo = TestRepo::new();
    let project_dir = repo.root().join("public/analysis/ab-simulator");
    assert!(!project_dir.exists());

    let path = repo
        .writer
        .write("ab-simulator", "ab-test-analysis", checkout_cta_input())
        .unwrap();

    assert!(project_dir.is_dir());
    assert!(path.is_file());
}

#[test]
fn test_existing_directory_is_fine() {
    let repo = TestRepo::new();
    std::fs::create_dir_all(repo.root().join("public/analysis/ab-simulator")).unwrap();

    repo.writer
        .write("ab-simulator", "ab-test-analysis", checkout_cta_input())
        .unwrap();
}

#[test]
fn test_checkout_cta_scenario() {
    let repo = TestRepo::new();
    let path = repo
        .writer
        .write("ab-simulator", "ab-test-analysis", checkout_cta_input())
        .unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert!(text.contains("status: significant"));
    assert!(text.contains("decision: Ship variant B"));
    assert!(text.contains("generated_at:"));
    for absent in ["power_analysis", "warnings", "methodology", "methods", "tags"] {
        assert!(!text.contains(absent), "unexpected key {absent}");
    }

    let mapping = repo.read_mapping(&path);
    let metrics = mapping["metrics"].as_sequence().unwrap();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0]["label"], Value::from("Conversion Rate"));
    assert_eq!(metrics[0]["value"], Value::from("12.4%"));
    assert_eq!(metrics[0]["delta"], Value::from("+2.1pp"));
    assert_eq!(metrics[0]["delta_direction"], Value::from("up"));
    assert!(metrics[0].get("context").is_none());
}

#[test]
fn test_required_fields_round_trip() {
    let repo = TestRepo::new();
    let input = checkout_cta_input().metric(Metric::new("Sample Size", "48,210"));
    let path = repo
        .writer
        .write("ab-simulator", "ab-test-analysis", input.clone())
        .unwrap();

    let summary = read_summary(&path).unwrap();
    assert_eq!(summary.title, input.title);
    assert_eq!(summary.project_id, "ab-simulator");
    assert_eq!(summary.status, input.status);
    assert_eq!(summary.decision, input.decision);
    assert_eq!(summary.metrics, input.metrics);
}

#[test]
fn test_key_order_is_fixed() {
    let repo = TestRepo::new();
    let input = checkout_cta_input()
        .tags(["ab-testing"])
        .methodology("Two-proportion z-test")
        .warning("Peeked at day 3")
        .power_analysis("80% power for a 2pp lift");
    let path = repo.writer.write("ab-simulator", "ordered", input).unwrap();

    let mapping = repo.read_mapping(&path);
    let keys: Vec<&str> = mapping.keys().filter_map(Value::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "title",
            "project_id",
            "status",
            "decision",
            "metrics",
            "generated_at",
            "power_analysis",
            "warnings",
            "methodology",
            "tags",
        ]
    );
}

#[test]
fn test_explicit_empty_lists_are_written() {
    let repo = TestRepo::new();
    let input = SummaryInput::new("Empty", Status::Inconclusive, "Collect more data")
        .warnings(Vec::<String>::new())
        .methods(Vec::<String>::new())
        .tags(Vec::<String>::new());
    let path = repo.writer.write("p", "empty-lists", input).unwrap();

    let mapping = repo.read_mapping(&path);
    for key in ["warnings", "methods", "tags"] {
        assert_eq!(mapping[key], Value::Sequence(vec![]), "key {key}");
    }
    assert!(mapping.get("power_analysis").is_none());
}

#[test]
fn test_empty_metrics_written_as_empty_list() {
    let repo = TestRepo::new();
    let input = SummaryInput::new("No metrics", Status::Error, "Fix the pipeline");
    let path = repo.writer.write("p", "no-metrics", input).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("metrics: []"));
}

#[test]
fn test_generated_at_is_current() {
    let repo = TestRepo::new();
    let before = Local::now().trunc_subsecs(6).fixed_offset();

    let path = repo
        .writer
        .write("ab-simulator", "ab-test-analysis", checkout_cta_input())
        .unwrap();

    let mapping = repo.read_mapping(&path);
    let stamp = mapping["generated_at"].as_str().unwrap();
    let generated_at = DateTime::parse_from_rfc3339(stamp).unwrap();
    assert!(generated_at >= before, "{generated_at} < {before}");
}

#[test]
fn test_second_write_replaces_first() {
    let repo = TestRepo::new();
    repo.writer
        .write(
            "ab-simulator",
            "ab-test-analysis",
            checkout_cta_input()
                .tags(["first-run"])
                .methodology("Sequential test"),
        )
        .unwrap();

    let replacement = SummaryInput::new("Checkout CTA Test (rerun)", Status::NotSignificant, "Hold");
    let path = repo
        .writer
        .write("ab-simulator", "ab-test-analysis", replacement)
        .unwrap();

    let summary = read_summary(&path).unwrap();
    assert_eq!(summary.title, "Checkout CTA Test (rerun)");
    assert_eq!(summary.status, Status::NotSignificant);
    assert!(summary.metrics.is_empty());
    assert!(summary.tags.is_none());
    assert!(summary.methodology.is_none());
}

#[test]
fn test_unrecognized_status_passes_through() {
    let repo = TestRepo::new();
    let input = SummaryInput::new("Draft", "needs_review", "Wait for sign-off");
    let path = repo.writer.write("p", "draft", input).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("status: needs_review"));
}

#[test]
fn test_non_ascii_written_unescaped() {
    let repo = TestRepo::new();
    let input = SummaryInput::new("Prüfung 転換率", Status::Significant, "Übernehmen")
        .metric(Metric::new("Δ Umsatz", "€1.200"));
    let path = repo.writer.write("p", "unicode", input).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Prüfung 転換率"));
    assert!(text.contains("Δ Umsatz"));
    assert!(!text.contains("\\u"));
}

#[test]
fn test_block_style_lists() {
    let repo = TestRepo::new();
    let input = checkout_cta_input().tags(["ab-testing", "conversion"]);
    let path = repo.writer.write("p", "block", input).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("tags:\n- ab-testing\n- conversion\n"));
    assert!(!text.contains('{'));
}
