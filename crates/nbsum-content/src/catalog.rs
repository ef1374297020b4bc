//! Reading summaries back from an output root.
//!
//! The site indexes every `<output-root>/<project_id>/<notebook_id>.yaml`
//! into one newest-first list with filter facets. [`SummaryCatalog`] builds
//! the same index so it can be checked or listed without the site build.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use nbsum_core::{Error, Result};

use crate::schema::NotebookSummary;

/// Read and parse one summary file.
pub fn read_summary(path: &Path) -> Result<NotebookSummary> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// A summary located in the output tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    /// Project folder name.
    pub project_id: String,
    /// File stem of the summary.
    pub notebook_id: String,
    /// Path of the YAML file.
    pub path: PathBuf,
    /// Parsed contents.
    pub summary: NotebookSummary,
}

impl SummaryEntry {
    /// Site link for the notebook's analysis page.
    pub fn link(&self) -> String {
        format!("/projects/{}/analysis/{}/", self.project_id, self.notebook_id)
    }

    /// Parsed `generated_at`, if valid.
    pub fn generated_at(&self) -> Option<DateTime<FixedOffset>> {
        self.summary.generated_at()
    }
}

/// All summaries under an output root, newest first.
#[derive(Debug, Clone, Default)]
pub struct SummaryCatalog {
    entries: Vec<SummaryEntry>,
}

impl SummaryCatalog {
    /// Load every `<output_root>/*/*.yaml`.
    ///
    /// Files that fail to parse are skipped with a warning. A missing output
    /// root yields an empty catalog.
    pub fn discover(output_root: &Path) -> Result<Self> {
        let root = glob::Pattern::escape(&output_root.to_string_lossy());
        let pattern = format!("{root}/*/*.yaml");
        let paths = glob::glob(&pattern)
            .map_err(|e| Error::config(format!("Invalid summary pattern {pattern}: {e}")))?;

        let mut entries = Vec::new();
        for path in paths {
            let path = match path {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("Skipping unreadable path: {e}");
                    continue;
                }
            };
            match load_entry(&path) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("Failed to parse summary {}: {e}", path.display()),
            }
        }

        log::debug!(
            "Discovered {} summaries under {}",
            entries.len(),
            output_root.display()
        );
        Ok(Self::from_entries(entries))
    }

    /// Build a catalog from entries, sorting newest first.
    ///
    /// Entries without a parsable timestamp go last; ties break on project
    /// then notebook ID.
    pub fn from_entries(mut entries: Vec<SummaryEntry>) -> Self {
        entries.sort_by(|a, b| {
            b.generated_at()
                .cmp(&a.generated_at())
                .then_with(|| a.project_id.cmp(&b.project_id))
                .then_with(|| a.notebook_id.cmp(&b.notebook_id))
        });
        Self { entries }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    /// Iterate entries, newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, SummaryEntry> {
        self.entries.iter()
    }

    /// Number of summaries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no summaries were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for one project, newest first.
    pub fn by_project<'a>(
        &'a self,
        project_id: &'a str,
    ) -> impl Iterator<Item = &'a SummaryEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.project_id == project_id)
    }

    /// Distinct methods across all summaries, sorted.
    pub fn unique_methods(&self) -> Vec<String> {
        self.collect_unique(|entry| entry.summary.methods().to_vec())
    }

    /// Distinct project IDs, sorted.
    pub fn unique_projects(&self) -> Vec<String> {
        self.collect_unique(|entry| vec![entry.project_id.clone()])
    }

    /// Distinct tags across all summaries, sorted.
    pub fn unique_tags(&self) -> Vec<String> {
        self.collect_unique(|entry| entry.summary.tags().to_vec())
    }

    fn collect_unique<F>(&self, values: F) -> Vec<String>
    where
        F: Fn(&SummaryEntry) -> Vec<String>,
    {
        self.entries
            .iter()
            .flat_map(values)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a SummaryCatalog {
    type Item = &'a SummaryEntry;
    type IntoIter = std::slice::Iter<'a, SummaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn load_entry(path: &Path) -> Result<SummaryEntry> {
    let notebook_id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(String::from)
        .ok_or_else(|| Error::config(format!("No notebook ID in {}", path.display())))?;
    let dir_name = path
        .parent()
        .and_then(Path::file_name)
        .and_then(|s| s.to_str())
        .map(String::from)
        .ok_or_else(|| Error::config(format!("No project folder for {}", path.display())))?;

    let mut summary = read_summary(path)?;
    if summary.project_id.is_empty() {
        summary.project_id = dir_name;
    }

    Ok(SummaryEntry {
        project_id: summary.project_id.clone(),
        notebook_id,
        path: path.to_path_buf(),
        summary,
    })
}
