// tests/render_figure.rs

mod common;

use ratatui::{Terminal, backend::TestBackend};
use schedviz::Visualization;
use schedviz::render::figure::{GANTT_TITLE, GRAPH_TITLE};
use schedviz::render::{buffer_to_text, render_to_text};
use schedviz_test_utils::builders::ConfigFileBuilder;
use schedviz_test_utils::init_tracing;

use common::{NODES, sample_inputs};

fn sample_visualization() -> (common::SampleInputs, Visualization) {
    init_tracing();
    let inputs = sample_inputs();
    let config = ConfigFileBuilder::new()
        .schedule(&inputs.schedule)
        .dependencies(&inputs.dependencies)
        .build();
    let viz = Visualization::load(config).unwrap();
    (inputs, viz)
}

#[test]
fn printed_figure_has_both_charts() {
    let (_inputs, viz) = sample_visualization();

    let text = render_to_text(&viz.figure(), 160, 40);

    assert!(text.contains(GRAPH_TITLE));
    assert!(text.contains(GANTT_TITLE));
    assert!(text.contains("Addition (Type 1)"));
    assert!(text.contains("Multiplication (Type 2)"));
    for (id, ..) in NODES {
        assert!(text.contains(&format!("Node {id}")), "Gantt row for node {id}");
        assert!(text.contains(&format!("({id})")), "graph label for node {id}");
    }
    // Placeholder appears in the graph but gets no Gantt row.
    assert!(text.contains("(5)"));
    assert!(!text.contains("Node 5"));
}

#[test]
fn figure_renders_through_a_terminal_backend() {
    let (_inputs, viz) = sample_visualization();
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

    terminal
        .draw(|frame| frame.render_widget(&viz.figure(), frame.area()))
        .unwrap();

    let text = buffer_to_text(terminal.backend().buffer());
    assert!(text.contains(GRAPH_TITLE));
    assert!(text.contains("(S1)"));
    assert!(text.contains("(S2)"));
}

#[test]
fn output_is_fully_determined_by_input() {
    let (_inputs, viz) = sample_visualization();
    let first = render_to_text(&viz.figure(), 140, 36);
    let second = render_to_text(&viz.figure(), 140, 36);
    assert_eq!(first, second);
}

#[test]
fn summary_reports_levels() {
    let (_inputs, viz) = sample_visualization();
    let summary = viz.summary();
    assert!(summary.contains("nodes (6), edges (5), levels (4):"));
    assert!(summary.contains("makespan: 6 (0..6)"));
}
