// src/render/figure.rs

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, Widget},
};

use crate::graph::{Layering, ScheduleGraph};
use crate::render::gantt::GanttWidget;
use crate::render::graph_view::DependencyGraphWidget;
use crate::render::palette::Palette;

pub const GRAPH_TITLE: &str = "Topological Dependency Graph";
pub const GANTT_TITLE: &str = "Gantt Chart for Scheduled Operations";

/// Both charts side by side: dependency graph left, Gantt chart right.
///
/// Everything drawn is derived from the node mapping and its layering.
#[derive(Debug, Clone, Copy)]
pub struct Figure<'a> {
    pub graph: &'a ScheduleGraph,
    pub layering: &'a Layering,
    pub palette: &'a Palette,
}

impl<'a> Figure<'a> {
    pub fn new(graph: &'a ScheduleGraph, layering: &'a Layering, palette: &'a Palette) -> Self {
        Self {
            graph,
            layering,
            palette,
        }
    }

    fn pane(&self, title: &'static str) -> Block<'a> {
        Block::bordered()
            .title(Line::from(format!(" {title} ")).bold())
            .title_bottom(self.palette.legend())
    }
}

impl Widget for &Figure<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        DependencyGraphWidget::new(self.graph, self.layering, self.palette)
            .block(self.pane(GRAPH_TITLE))
            .render(left, buf);

        GanttWidget::new(self.graph, self.palette)
            .block(self.pane(GANTT_TITLE))
            .render(right, buf);
    }
}
