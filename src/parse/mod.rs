// src/parse/mod.rs

//! Readers for the flat input files.
//!
//! - [`schedule`] reads the scheduled-operations report into a
//!   [`ScheduleGraph`](crate::graph::ScheduleGraph).
//! - [`dependencies`] reads the node/edge-count file and attaches edges.
//! - [`dot`] reads a Graphviz description of the same dependency graph.

pub mod dependencies;
pub mod dot;
pub mod schedule;

use std::path::Path;

use crate::errors::Result;
use crate::graph::ScheduleGraph;

pub use dependencies::{DependencySpec, attach_dependencies, parse_dependencies};
pub use dot::parse_dot;
pub use schedule::{ScheduleParser, read_schedule};

/// Read the dependency description at `path`, choosing the DOT reader for
/// `.dot`/`.gv` files and the count/edge reader for everything else.
pub fn read_dependency_spec(path: impl AsRef<Path>) -> Result<DependencySpec> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let is_dot = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dot") || ext.eq_ignore_ascii_case("gv"));

    if is_dot {
        parse_dot(&contents)
    } else {
        parse_dependencies(&contents)
    }
}

/// Read both inputs and return the fully populated node mapping.
pub fn load_graph(schedule: impl AsRef<Path>, dependencies: impl AsRef<Path>) -> Result<ScheduleGraph> {
    let mut graph = read_schedule(schedule)?;
    let spec = read_dependency_spec(dependencies)?;
    attach_dependencies(&mut graph, &spec);
    Ok(graph)
}
