//! Argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// nbsum - notebook summary writer
#[derive(Parser, Debug)]
#[command(name = "nbsum")]
#[command(author, version, about = "Write and list notebook summaries for the site", long_about = None)]
pub struct Cli {
    /// Options shared by all subcommands
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Repository root (defaults to the nearest ancestor with package.json or .git)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Output root, overriding <root>/public/analysis
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file path (defaults to <root>/nbsum.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a summary from a JSON or YAML payload
    Write {
        /// Project folder name, e.g. ab-simulator
        #[arg(long)]
        project: String,

        /// Notebook identifier, e.g. ab-test-analysis
        #[arg(long, required_unless_present = "notebook_file", conflicts_with = "notebook_file")]
        notebook: Option<String>,

        /// Notebook file whose name (without extension) is the identifier
        #[arg(long)]
        notebook_file: Option<PathBuf>,

        /// Payload file; `-` or omitted reads stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
    },

    /// List written summaries, newest first
    List {
        /// Only show one project
        #[arg(long)]
        project: Option<String>,

        /// Print the distinct methods, projects, and tags instead
        #[arg(long)]
        facets: bool,
    },

    /// Print where a summary would be written
    Path {
        /// Project folder name
        #[arg(long)]
        project: String,

        /// Notebook identifier
        #[arg(long)]
        notebook: String,
    },
}
