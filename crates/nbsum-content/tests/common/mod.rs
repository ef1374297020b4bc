//! Common test utilities for nbsum-content integration tests.

use std::path::{Path, PathBuf};

use nbsum_content::{DeltaDirection, Metric, Status, SummaryInput, SummaryWriter};
use tempfile::TempDir;

/// A temporary site repository with a writer rooted at it.
pub struct TestRepo {
    /// Keeps the directory alive for the test's duration
    pub dir: TempDir,
    /// Writer targeting `<dir>/public/analysis`
    pub writer: SummaryWriter,
}

impl TestRepo {
    /// Creates an empty repo root.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let writer = SummaryWriter::for_repo_root(dir.path());
        Self { dir, writer }
    }

    /// The repo root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Where a summary is expected to land.
    pub fn expected_path(&self, project_id: &str, notebook_id: &str) -> PathBuf {
        self.root()
            .join("public")
            .join("analysis")
            .join(project_id)
            .join(format!("{notebook_id}.yaml"))
    }

    /// Reads a written file back as a generic YAML mapping.
    pub fn read_mapping(&self, path: &Path) -> serde_yaml::Mapping {
        let text = std::fs::read_to_string(path).unwrap();
        serde_yaml::from_str(&text).unwrap()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// The checkout CTA experiment used across scenarios.
pub fn checkout_cta_input() -> SummaryInput {
    SummaryInput::new("Checkout CTA Test", Status::Significant, "Ship variant B").metric(
        Metric::new("Conversion Rate", "12.4%").with_delta("+2.1pp", DeltaDirection::Up),
    )
}
