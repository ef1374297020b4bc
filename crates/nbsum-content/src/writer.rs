//! YAML summary writer.
//!
//! Each call builds a fresh [`NotebookSummary`], stamps it with the current
//! local time, and overwrites `<output-root>/<project_id>/<notebook_id>.yaml`.
//! Identifiers are used verbatim as path segments. Filesystem errors are
//! returned as-is; there is no retry and no atomic replace, so concurrent
//! writers for the same pair are last-writer-wins.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use nbsum_core::config::{NbsumConfig, DEFAULT_OUTPUT_DIR};
use nbsum_core::util::paths::display_relative;
use nbsum_core::{Error, Result};

use crate::schema::{Metric, NotebookSummary, Status, SummaryInput};

/// Writes notebook summaries under an output root.
#[derive(Debug, Clone)]
pub struct SummaryWriter {
    output_root: PathBuf,
    /// Base for the path shown in the confirmation line.
    display_root: PathBuf,
}

impl SummaryWriter {
    /// Write directly under `output_root`.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        let output_root = output_root.into();
        Self {
            display_root: output_root.clone(),
            output_root,
        }
    }

    /// Write under `<repo_root>/public/analysis`.
    pub fn for_repo_root(repo_root: impl Into<PathBuf>) -> Self {
        let repo_root = repo_root.into();
        Self {
            output_root: repo_root.join(DEFAULT_OUTPUT_DIR),
            display_root: repo_root,
        }
    }

    /// Build a writer from configuration.
    ///
    /// `fallback_root` is the repo root to use when the config names none.
    pub fn from_config(config: &NbsumConfig, fallback_root: Option<&Path>) -> Result<Self> {
        let output_root = config.output_root(fallback_root).ok_or_else(|| {
            Error::config("No repo root configured or found; cannot place public/analysis")
        })?;
        let display_root = config
            .repo_root()
            .or_else(|| fallback_root.map(Path::to_path_buf))
            .unwrap_or_else(|| output_root.clone());

        Ok(Self {
            output_root,
            display_root,
        })
    }

    /// The directory holding `<project_id>/` folders.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// `<output-root>/<project_id>`.
    pub fn project_dir(&self, project_id: &str) -> PathBuf {
        self.output_root.join(project_id)
    }

    /// `<output-root>/<project_id>/<notebook_id>.yaml`.
    pub fn summary_path(&self, project_id: &str, notebook_id: &str) -> PathBuf {
        self.project_dir(project_id).join(format!("{notebook_id}.yaml"))
    }

    /// Write a summary stamped with the current local time.
    ///
    /// Returns the absolute path of the written file.
    pub fn write(
        &self,
        project_id: &str,
        notebook_id: &str,
        input: SummaryInput,
    ) -> Result<PathBuf> {
        self.write_at(project_id, notebook_id, input, Local::now())
    }

    /// Write a summary with an explicit `generated_at`.
    pub(crate) fn write_at<Tz>(
        &self,
        project_id: &str,
        notebook_id: &str,
        input: SummaryInput,
        generated_at: DateTime<Tz>,
    ) -> Result<PathBuf>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let dir = std::path::absolute(self.project_dir(project_id))?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{notebook_id}.yaml"));

        let summary = NotebookSummary::from_input(
            project_id,
            input,
            generated_at.to_rfc3339_opts(SecondsFormat::Micros, false),
        );
        let yaml = render_summary(&summary)?;
        std::fs::write(&path, yaml)?;

        log::info!("{}", self.confirmation(&path)?);
        Ok(path)
    }

    /// The line logged after a write, with `path` shown relative to the
    /// repo root.
    ///
    /// `path` is absolute, so a relative root is made absolute the same way
    /// before the prefix is stripped.
    pub fn confirmation(&self, path: &Path) -> Result<String> {
        let base = std::path::absolute(&self.display_root)?;
        Ok(format!("✓ Summary written: {}", display_relative(path, &base)))
    }
}

/// Render a summary as a block-style YAML document.
///
/// Keys keep declaration order and non-ASCII text is emitted unescaped.
pub fn render_summary(summary: &NotebookSummary) -> Result<String> {
    Ok(serde_yaml::to_string(summary)?)
}

/// One-shot form of [`SummaryWriter::write`] rooted at a repository.
///
/// Writes `<repo_root>/public/analysis/<project_id>/<notebook_id>.yaml`.
#[allow(clippy::too_many_arguments)]
pub fn write_notebook_summary(
    repo_root: &Path,
    project_id: &str,
    notebook_id: &str,
    title: &str,
    status: impl Into<Status>,
    decision: &str,
    metrics: Vec<Metric>,
    power_analysis: Option<&str>,
    warnings: Option<Vec<String>>,
    methodology: Option<&str>,
    methods: Option<Vec<String>>,
    tags: Option<Vec<String>>,
) -> Result<PathBuf> {
    let input = SummaryInput {
        title: title.to_string(),
        status: status.into(),
        decision: decision.to_string(),
        metrics,
        power_analysis: power_analysis.map(String::from),
        warnings,
        methodology: methodology.map(String::from),
        methods,
        tags,
    };
    SummaryWriter::for_repo_root(repo_root).write(project_id, notebook_id, input)
}
