//! Clap derive structures for the `taxonav` CLI.
//!
//! Defines the command tree, global flags, and shared output types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// taxonav -- cascading category dropdowns from a taxonomy file
#[derive(Debug, Parser)]
#[command(
    name = "taxonav",
    version,
    about = "Render cascading category browser widgets from the command line",
    long_about = "Renders a hierarchical category browser: a top-level category\n\
        select box plus a dependent subcategory box, driven by a taxonomy\n\
        file and the category currently being browsed.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format (default: html for render, table for categories)
    #[arg(long, short = 'o', env = "TAXONAV_OUTPUT", default_value = "auto", global = true)]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Config file path (default: the platform config dir)
    #[arg(long, env = "TAXONAV_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-command default
    Auto,
    /// Rendered widget markup
    Html,
    /// Pretty table (interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the category browser widget
    #[command(alias = "r")]
    Render(RenderArgs),

    /// List the taxonomy
    #[command(alias = "cats")]
    Categories(CategoriesArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Taxonomy file (JSON or TOML)
    #[arg(long, short = 't', env = "TAXONAV_TAXONOMY")]
    pub taxonomy: PathBuf,

    /// Id of the category currently being browsed (omit when outside
    /// any category page)
    #[arg(long, short = 'a')]
    pub active: Option<u32>,

    /// Widget title (overrides config)
    #[arg(long)]
    pub title: Option<String>,

    /// Site base URL for navigation targets (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Widget instance number, namespacing element ids (overrides config)
    #[arg(long)]
    pub number: Option<u32>,
}

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    /// Taxonomy file (JSON or TOML)
    #[arg(long, short = 't', env = "TAXONAV_TAXONOMY")]
    pub taxonomy: PathBuf,
}
