// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `schedviz`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "schedviz",
    version,
    about = "Visualize a precomputed operation schedule and its dependency graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Scheduled-operations report (`Node N (Operation Type: T) -> ...` lines).
    ///
    /// Overrides `[input].schedule` from the config file.
    #[arg(long, value_name = "PATH")]
    pub schedule: Option<PathBuf>,

    /// Dependency description: node/edge-count text file or a `.dot` graph.
    ///
    /// Overrides `[input].dependencies` from the config file.
    #[arg(long, value_name = "PATH")]
    pub dependencies: Option<PathBuf>,

    /// Path to the config file (TOML).
    ///
    /// A missing file is fine when this is left at its default.
    #[arg(long, value_name = "PATH", default_value = "Schedviz.toml")]
    pub config: PathBuf,

    /// Horizontal distance between nodes that share a level.
    #[arg(long, value_name = "N")]
    pub spacing: Option<u32>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SCHEDVIZ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print a text summary of nodes, levels and timings instead of drawing.
    #[arg(long)]
    pub summary: bool,

    /// Render the charts off-screen and write them to stdout as plain text.
    #[arg(long, conflicts_with = "summary")]
    pub print: bool,

    /// Width of the `--print` canvas, in terminal cells.
    #[arg(long, value_name = "COLS", default_value_t = 160)]
    pub width: u16,

    /// Height of the `--print` canvas, in terminal cells.
    #[arg(long, value_name = "ROWS", default_value_t = 48)]
    pub height: u16,
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

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
