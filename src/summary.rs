// src/summary.rs

//! Plain-text report used by `--summary`.

use std::fmt::Write;

use crate::config::model::InputSection;
use crate::graph::{Layering, ScheduleGraph};
use crate::render::Palette;

fn opt(value: Option<impl ToString>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Tabulate every node with its timing, level and successors.
pub fn format_summary(
    inputs: &InputSection,
    graph: &ScheduleGraph,
    layering: &Layering,
    palette: &Palette,
) -> String {
    let mut out = String::new();
    let levels = layering.levels();
    let depth = levels.values().max().map_or(0, |deepest| deepest + 1);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "schedviz summary");
    let _ = writeln!(out, "  schedule     = {}", inputs.schedule.display());
    let _ = writeln!(out, "  dependencies = {}", inputs.dependencies.display());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "nodes ({}), edges ({}), levels ({depth}):",
        graph.len(),
        graph.edge_count()
    );
    let _ = writeln!(
        out,
        "  {:<6} {:<16} {:>6} {:>6} {:>8} {:>6}  successors",
        "node", "operation", "start", "end", "duration", "level"
    );

    for (id, node) in graph.iter() {
        let successors = node
            .successors
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(
            out,
            "  {:<6} {:<16} {:>6} {:>6} {:>8} {:>6}  {}",
            id,
            palette.label_for(node.operation_type),
            opt(node.scheduled_time),
            opt(node.end_time),
            opt(node.duration()),
            opt(levels.get(&id)),
            if successors.is_empty() { "-" } else { successors.as_str() },
        );
    }

    match graph.time_span() {
        Some((start, end)) => {
            let _ = writeln!(out, "makespan: {} ({start}..{end})", end - start);
        }
        None => {
            let _ = writeln!(out, "makespan: - (nothing scheduled)");
        }
    }

    out
}
