//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::observability::logging::LogFormat;

/// Compiler for declarative documentation cheatsheets.
#[derive(Debug, Parser)]
#[command(name = "cheatkit", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub log_format: LogFormat,

    /// When to use ANSI colors in log output.
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List built-in cheatsheets.
    List(ListArgs),

    /// Show the structure of a built-in cheatsheet.
    Show(ShowArgs),

    /// Compile a built-in cheatsheet and emit the serialized document.
    Build(BuildArgs),
}

/// Arguments for `cheatkit list`.
#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `cheatkit show`.
#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// Name of the built-in sheet.
    pub name: String,
}

/// Arguments for `cheatkit build`.
#[derive(Debug, clap::Args)]
pub struct BuildArgs {
    /// Name of the built-in sheet.
    pub name: String,

    /// Serialization format for the compiled document.
    #[arg(long, value_enum, default_value = "json")]
    pub format: DocumentFormat,

    /// Write the document to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Listing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Human,
    /// JSON array.
    Json,
}

/// Compiled document serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentFormat {
    /// Pretty-printed JSON (primary format).
    Json,
    /// YAML.
    Yaml,
}

/// ANSI color behavior for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}
