//! Notebook summary schema, writer, and catalog.
//!
//! Analysis notebooks finish by writing a standardized summary to
//! `public/analysis/<project_id>/<notebook_id>.yaml`, where the static site
//! picks it up.
//!
//! # Modules
//!
//! - [`schema`]: `NotebookSummary`, `Metric`, and the status enums
//! - [`writer`]: `SummaryWriter`, which serializes a summary to disk
//! - [`catalog`]: reading summaries back and indexing an output root
//!
//! # Example
//!
//! ```no_run
//! use nbsum_content::{DeltaDirection, Metric, Status, SummaryInput, SummaryWriter};
//!
//! let writer = SummaryWriter::for_repo_root("/srv/site");
//! let input = SummaryInput::new("Checkout CTA Test", Status::Significant, "Ship variant B")
//!     .metric(
//!         Metric::new("Conversion Rate", "12.4%").with_delta("+2.1pp", DeltaDirection::Up),
//!     )
//!     .tags(["ab-testing", "conversion"]);
//!
//! let path = writer.write("ab-simulator", "ab-test-analysis", input).unwrap();
//! assert!(path.ends_with("public/analysis/ab-simulator/ab-test-analysis.yaml"));
//! ```

pub mod catalog;
pub mod schema;
pub mod writer;


pub use catalog::{read_summary, SummaryCatalog, SummaryEntry};
pub use schema::{DeltaDirection, Metric, NotebookSummary, Status, SummaryInput};
pub use writer::{render_summary, write_notebook_summary, SummaryWriter};

pub use nbsum_core::{Error, Result};
