// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::RequestFormat;
use crate::types::{DuplicatePolicy, UnresolvedPolicy};

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Compute a dependency-respecting execution order for a task list.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the request file (TOML or JSON).
    #[arg(long, value_name = "PATH", default_value = "tasks.toml")]
    pub request: String,

    /// Encoding of the request file. Detected from the extension if omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Policy for dependencies naming tasks absent from the request
    /// (`ignore` or `reject`).
    ///
    /// Overrides `[config].unresolved_dependencies` from the file.
    #[arg(long, value_name = "POLICY")]
    pub unresolved: Option<UnresolvedPolicy>,

    /// Policy for tasks sharing a title (`reject` or `merge`).
    ///
    /// Overrides `[config].duplicate_titles` from the file.
    #[arg(long, value_name = "POLICY")]
    pub duplicates: Option<DuplicatePolicy>,

    /// How to print the resulting order.
    #[arg(long, value_enum, value_name = "OUTPUT", default_value = "text")]
    pub output: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the dependency graph, but don't order it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Toml,
    Json,
}

impl From<InputFormat> for RequestFormat {
    fn from(f: InputFormat) -> Self {
        match f {
            InputFormat::Toml => RequestFormat::Toml,
            InputFormat::Json => RequestFormat::Json,
        }
    }
}

/// Output encoding for the computed order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One numbered title per line.
    Text,
    /// The `{"recommendedOrder": [...]}` response document.
    Json,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
