//! Command handlers.
//!
//! Handlers write their primary output to the supplied writer (stdout in
//! the binary) and leave diagnostics to the log.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use nbsum_content::{SummaryCatalog, SummaryInput, SummaryWriter};
use nbsum_core::config::CONFIG_FILE_NAME;
use nbsum_core::{NbsumConfig, RepoRootResolver, notebook_id_from_path};

use crate::cli::{Cli, Command, GlobalArgs};

/// Run a parsed command line.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let writer = resolve_writer(&cli.global)?;
    tracing::debug!(output_root = %writer.output_root().display(), "Resolved output root");

    match cli.command {
        Command::Write {
            project,
            notebook,
            notebook_file,
            input,
        } => {
            let notebook = notebook_id(notebook, notebook_file.as_deref())?;
            cmd_write(&writer, &project, &notebook, input.as_deref(), out)
        }
        Command::List { project, facets } => {
            cmd_list(writer.output_root(), project.as_deref(), facets, out)
        }
        Command::Path { project, notebook } => {
            writeln!(out, "{}", writer.summary_path(&project, &notebook).display())?;
            Ok(())
        }
    }
}

/// Build the writer from flags, config file, and repo root discovery.
///
/// Precedence: `--output-dir`, then `--root`, then the config file, then the
/// repo root found by walking up from the current directory.
pub fn resolve_writer(global: &GlobalArgs) -> Result<SummaryWriter> {
    let discovered = match &global.root {
        Some(root) => Some(root.clone()),
        None => RepoRootResolver::new().resolve(),
    };

    let mut config = load_config(global.config.as_deref(), discovered.as_deref())?;
    if let Some(root) = &global.root {
        config.repo_root = Some(root.clone());
    }
    if let Some(dir) = &global.output_dir {
        config.output_dir = Some(dir.clone());
    }

    Ok(SummaryWriter::from_config(&config, discovered.as_deref())?)
}

/// The notebook ID given directly, or the stem of the notebook file.
fn notebook_id(notebook: Option<String>, notebook_file: Option<&Path>) -> Result<String> {
    if let Some(id) = notebook {
        return Ok(id);
    }
    let path = notebook_file.context("Either --notebook or --notebook-file is required")?;
    notebook_id_from_path(path)
        .with_context(|| format!("Cannot derive a notebook ID from {}", path.display()))
}

fn load_config(explicit: Option<&Path>, root: Option<&Path>) -> Result<NbsumConfig> {
    if let Some(path) = explicit {
        return Ok(NbsumConfig::load(path)?);
    }
    if let Some(path) = root.map(|r| r.join(CONFIG_FILE_NAME)) {
        if path.is_file() {
            return Ok(NbsumConfig::load(&path)?);
        }
    }
    Ok(NbsumConfig::default())
}

/// Write one summary and print its absolute path.
pub fn cmd_write(
    writer: &SummaryWriter,
    project: &str,
    notebook: &str,
    input: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let payload = read_payload(input)?;
    let path = writer
        .write(project, notebook, payload)
        .with_context(|| format!("Failed to write summary for {project}/{notebook}"))?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// Parse a `SummaryInput` from a file or stdin.
///
/// `.json` files are read as JSON; anything else as YAML, which also
/// accepts JSON documents.
pub fn read_payload(input: Option<&Path>) -> Result<SummaryInput> {
    let (text, source) = match input {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (text, Some(path.to_path_buf()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read summary from stdin")?;
            (text, None)
        }
    };
    parse_payload(&text, source.as_deref())
}

fn parse_payload(text: &str, source: Option<&Path>) -> Result<SummaryInput> {
    let label = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());

    let is_json = source
        .and_then(Path::extension)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(text).with_context(|| format!("Invalid JSON summary in {label}"))
    } else {
        serde_yaml::from_str(text).with_context(|| format!("Invalid summary in {label}"))
    }
}

/// List summaries (or their facets) under the output root.
pub fn cmd_list(
    output_root: &Path,
    project: Option<&str>,
    facets: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let catalog = SummaryCatalog::discover(output_root)?;

    if facets {
        writeln!(out, "methods: {}", catalog.unique_methods().join(", "))?;
        writeln!(out, "projects: {}", catalog.unique_projects().join(", "))?;
        writeln!(out, "tags: {}", catalog.unique_tags().join(", "))?;
        return Ok(());
    }

    for entry in &catalog {
        if project.is_some_and(|p| p != entry.project_id) {
            continue;
        }
        let generated_at = entry
            .generated_at()
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{generated_at}\t{}/{}\t{}\t{}",
            entry.project_id, entry.notebook_id, entry.summary.status, entry.summary.title
        )?;
    }
    Ok(())
}
