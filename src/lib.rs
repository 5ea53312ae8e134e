// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod parse;
pub mod render;
pub mod summary;

use std::path::Path;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_or_default};
use crate::errors::Result;
use crate::graph::{Layering, ScheduleGraph, layer_graph};
use crate::render::{Figure, Palette};

/// Everything the renderers need, built from the two input files.
#[derive(Debug, Clone)]
pub struct Visualization {
    pub config: ConfigFile,
    pub graph: ScheduleGraph,
    pub layering: Layering,
    pub palette: Palette,
}

impl Visualization {
    /// Read both inputs named by `config` and layer the resulting graph.
    pub fn load(config: ConfigFile) -> Result<Self> {
        let inputs = config.input();
        let graph = parse::load_graph(&inputs.schedule, &inputs.dependencies)?;
        let layering = layer_graph(&graph, config.layout().spacing)?;
        let palette = Palette::from_config(&config);

        info!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            depth = layering.depth(),
            "loaded schedule and dependencies"
        );

        Ok(Self {
            config,
            graph,
            layering,
            palette,
        })
    }

    pub fn figure(&self) -> Figure<'_> {
        Figure::new(&self.graph, &self.layering, &self.palette)
    }

    pub fn summary(&self) -> String {
        summary::format_summary(self.config.input(), &self.graph, &self.layering, &self.palette)
    }
}

/// Resolve the effective configuration: config file, then CLI overrides.
///
/// Input paths written in a config file are relative to that file; paths
/// given on the command line are relative to the working directory.
pub fn resolve_config(args: &CliArgs) -> Result<ConfigFile> {
    let mut config = load_or_default(&args.config)?;
    if let Some(root) = config_root_dir(&args.config) {
        config.rebase_inputs(root);
    }
    config.override_inputs(args.schedule.clone(), args.dependencies.clone());
    if let Some(spacing) = args.spacing {
        config.override_spacing(spacing)?;
    }
    Ok(config)
}

/// Folder of a config file that exists, unless it is the working directory.
fn config_root_dir(config_path: &Path) -> Option<&Path> {
    if !config_path.is_file() {
        return None;
    }
    config_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - both input readers
/// - graph layering
/// - one of the three outputs (summary, printed figure, on-screen figure)
pub fn run(args: CliArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let viz = Visualization::load(config)?;

    if args.summary {
        print!("{}", viz.summary());
        return Ok(());
    }

    if args.print {
        println!("{}", render::render_to_text(&viz.figure(), args.width, args.height));
        return Ok(());
    }

    render::show(&viz.figure())
}
