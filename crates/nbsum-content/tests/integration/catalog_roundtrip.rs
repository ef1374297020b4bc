//! Writing summaries and indexing them back.

use std::thread::sleep;
use std::time::Duration;

use nbsum_content::{Status, SummaryCatalog, SummaryInput};

use crate::common::TestRepo;

#[test]
fn test_catalog_sees_written_summaries() {
    let repo = TestRepo::new();
    repo.writer
        .write(
            "ab-simulator",
            "ab-test-analysis",
            SummaryInput::new("CTA", Status::Significant, "Ship B").methods(["Frequentist"]),
        )
        .unwrap();
    // generated_at has microsecond resolution
    sleep(Duration::from_millis(5));
    repo.writer
        .write(
            "retention",
            "cohorts",
            SummaryInput::new("Cohorts", Status::Inconclusive, "Wait")
                .methods(["Bayesian", "Frequentist"])
                .tags(["retention"]),
        )
        .unwrap();

    let catalog = SummaryCatalog::discover(repo.writer.output_root()).unwrap();
    let order: Vec<&str> = catalog.iter().map(|e| e.notebook_id.as_str()).collect();
    assert_eq!(order, vec!["cohorts", "ab-test-analysis"]);
    assert_eq!(catalog.unique_methods(), vec!["Bayesian", "Frequentist"]);
    assert_eq!(catalog.unique_projects(), vec!["ab-simulator", "retention"]);
    assert_eq!(catalog.unique_tags(), vec!["retention"]);
    assert_eq!(
        catalog.entries()[1].link(),
        "/projects/ab-simulator/analysis/ab-test-analysis/"
    );
}

#[test]
fn test_catalog_reflects_overwrite() {
    let repo = TestRepo::new();
    for title in ["First", "Second"] {
        repo.writer
            .write("p", "nb", SummaryInput::new(title, Status::Error, "D"))
            .unwrap();
    }

    let catalog = SummaryCatalog::discover(repo.writer.output_root()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].summary.title, "Second");
}
