//! Summary schema.
//!
//! Field declaration order is the on-disk key order: serde emits struct
//! fields in order and never re-sorts them.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Outcome of the analysis a summary reports on.
///
/// Unrecognized values are kept in [`Status::Other`] and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// The effect is statistically significant.
    Significant,
    /// No significant effect was found.
    NotSignificant,
    /// Not enough evidence either way.
    Inconclusive,
    /// The analysis itself failed.
    Error,
    /// Any other caller-supplied value.
    Other(String),
}

impl Status {
    /// The string written to the YAML file.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Significant => "significant",
            Status::NotSignificant => "not_significant",
            Status::Inconclusive => "inconclusive",
            Status::Error => "error",
            Status::Other(s) => s,
        }
    }

    /// Returns `true` for the four recognized statuses.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Status::Other(_))
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "significant" => Status::Significant,
            "not_significant" => Status::NotSignificant,
            "inconclusive" => Status::Inconclusive,
            "error" => Status::Error,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::from(s.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DeltaDirection
// ============================================================================

/// Which way a metric moved. Unrecognized values pass through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeltaDirection {
    /// Increase.
    Up,
    /// Decrease.
    Down,
    /// No meaningful change.
    Neutral,
    /// Any other caller-supplied value.
    Other(String),
}

impl DeltaDirection {
    /// The string written to the YAML file.
    pub fn as_str(&self) -> &str {
        match self {
            DeltaDirection::Up => "up",
            DeltaDirection::Down => "down",
            DeltaDirection::Neutral => "neutral",
            DeltaDirection::Other(s) => s,
        }
    }
}

impl From<&str> for DeltaDirection {
    fn from(s: &str) -> Self {
        match s {
            "up" => DeltaDirection::Up,
            "down" => DeltaDirection::Down,
            "neutral" => DeltaDirection::Neutral,
            other => DeltaDirection::Other(other.to_string()),
        }
    }
}

impl From<String> for DeltaDirection {
    fn from(s: String) -> Self {
        DeltaDirection::from(s.as_str())
    }
}

impl From<DeltaDirection> for String {
    fn from(direction: DeltaDirection) -> Self {
        match direction {
            DeltaDirection::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DeltaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Metric
// ============================================================================

/// A labeled value shown to a report reader.
///
/// `label` and `value` are written as given: the builder stores display
/// strings, while deserialized payloads may carry numbers or omit a key
/// (an absent key stays absent on write). Keys beyond the known ones are
/// carried in `extra` and written after them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Short label, e.g. "Conversion Rate".
    #[serde(default, skip_serializing_if = "serde_yaml::Value::is_null")]
    pub label: serde_yaml::Value,
    /// Pre-formatted value, e.g. "12.4%".
    #[serde(default, skip_serializing_if = "serde_yaml::Value::is_null")]
    pub value: serde_yaml::Value,
    /// Change against a baseline, e.g. "+2.1pp".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
    /// Direction of the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta_direction: Option<DeltaDirection>,
    /// Free-text context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Additional caller-supplied keys.
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

impl Metric {
    /// Create a metric with just a label and value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: serde_yaml::Value::String(label.into()),
            value: serde_yaml::Value::String(value.into()),
            delta: None,
            delta_direction: None,
            context: None,
            extra: serde_yaml::Mapping::new(),
        }
    }

    /// The label, when it is a string.
    pub fn label_str(&self) -> Option<&str> {
        self.label.as_str()
    }

    /// The value, when it is a string.
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Set the delta and its direction.
    pub fn with_delta(
        mut self,
        delta: impl Into<String>,
        direction: impl Into<DeltaDirection>,
    ) -> Self {
        self.delta = Some(delta.into());
        self.delta_direction = Some(direction.into());
        self
    }

    /// Set the delta without a direction.
    pub fn with_delta_only(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }

    /// Set the context note.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attach an extra key, written after the known ones.
    pub fn with_extra(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_yaml::Value>,
    ) -> Self {
        self.extra
            .insert(serde_yaml::Value::String(key.into()), value.into());
        self
    }
}

// ============================================================================
// SummaryInput
// ============================================================================

/// Caller-supplied part of a summary.
///
/// `project_id` and `generated_at` are added by the writer. List fields are
/// `Option` so that an explicitly passed empty list is written as `[]` while
/// an absent one is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryInput {
    /// Display title.
    pub title: String,
    /// Analysis outcome.
    pub status: Status,
    /// One-line actionable recommendation.
    pub decision: String,
    /// Metrics in display order.
    #[serde(default)]
    pub metrics: Vec<Metric>,
    /// Power analysis note.
    #[serde(default)]
    pub power_analysis: Option<String>,
    /// Warnings for the reader.
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
    /// Methodology note.
    #[serde(default)]
    pub methodology: Option<String>,
    /// Statistical methods used, e.g. "Bayesian".
    #[serde(default)]
    pub methods: Option<Vec<String>>,
    /// Topic tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl SummaryInput {
    /// Start a summary with the required fields and no metrics.
    pub fn new(
        title: impl Into<String>,
        status: impl Into<Status>,
        decision: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
            decision: decision.into(),
            metrics: Vec::new(),
            power_analysis: None,
            warnings: None,
            methodology: None,
            methods: None,
            tags: None,
        }
    }

    /// Append a metric.
    pub fn metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Append several metrics.
    pub fn metrics(mut self, metrics: impl IntoIterator<Item = Metric>) -> Self {
        self.metrics.extend(metrics);
        self
    }

    /// Set the power analysis note.
    pub fn power_analysis(mut self, note: impl Into<String>) -> Self {
        self.power_analysis = Some(note.into());
        self
    }

    /// Append one warning.
    pub fn warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings
            .get_or_insert_with(Vec::new)
            .push(warning.into());
        self
    }

    /// Set the warnings list (an empty list is kept).
    pub fn warnings<I, S>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings = Some(warnings.into_iter().map(Into::into).collect());
        self
    }

    /// Set the methodology note.
    pub fn methodology(mut self, note: impl Into<String>) -> Self {
        self.methodology = Some(note.into());
        self
    }

    /// Set the methods list (an empty list is kept).
    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    /// Set the tags list (an empty list is kept).
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

// ============================================================================
// NotebookSummary
// ============================================================================

/// The record written to `<project_id>/<notebook_id>.yaml`.
///
/// Required keys come first, then the optional ones, which are omitted when
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookSummary {
    /// Display title.
    pub title: String,
    /// Owning project. Empty when read from a file that lacks it.
    #[serde(default)]
    pub project_id: String,
    /// Analysis outcome.
    pub status: Status,
    /// One-line actionable recommendation.
    pub decision: String,
    /// Metrics in display order.
    #[serde(default)]
    pub metrics: Vec<Metric>,
    /// ISO-8601 timestamp assigned at write time.
    #[serde(default)]
    pub generated_at: String,
    /// Power analysis note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_analysis: Option<String>,
    /// Warnings for the reader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    /// Methodology note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    /// Statistical methods used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    /// Topic tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl NotebookSummary {
    /// Assemble the on-disk record from caller input.
    pub fn from_input(
        project_id: impl Into<String>,
        input: SummaryInput,
        generated_at: impl Into<String>,
    ) -> Self {
        Self {
            title: input.title,
            project_id: project_id.into(),
            status: input.status,
            decision: input.decision,
            metrics: input.metrics,
            generated_at: generated_at.into(),
            power_analysis: input.power_analysis,
            warnings: input.warnings,
            methodology: input.methodology,
            methods: input.methods,
            tags: input.tags,
        }
    }

    /// Parse `generated_at`.
    ///
    /// Accepts RFC 3339 with an offset, and also offset-less ISO-8601 local
    /// times (read as the local time zone).
    pub fn generated_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.generated_at)
    }

    /// Methods, or an empty slice.
    pub fn methods(&self) -> &[String] {
        self.methods.as_deref().unwrap_or_default()
    }

    /// Tags, or an empty slice.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
        .map(|ts| ts.fixed_offset())
}
