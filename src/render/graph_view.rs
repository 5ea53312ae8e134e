// src/render/graph_view.rs

//! Top-down drawing of the layered dependency graph.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Widget,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::graph::{LayerNode, Layering, ScheduleGraph};
use crate::render::palette::{Palette, UNKNOWN_COLOR};

const EDGE_COLOR: Color = Color::DarkGray;
const ARROW_HEAD: &str = "▼";
/// Vertical offset of an arrow head above its target, in row units.
const ARROW_OFFSET: f64 = 0.4;

/// Canvas widget placing every vertex of a [`Layering`] at its position,
/// edges first and labels on top. Each vertex with an incoming edge gets an
/// arrow head just above its label.
pub struct DependencyGraphWidget<'a> {
    graph: &'a ScheduleGraph,
    layering: &'a Layering,
    palette: &'a Palette,
    block: Option<Block<'a>>,
}

impl<'a> DependencyGraphWidget<'a> {
    pub fn new(graph: &'a ScheduleGraph, layering: &'a Layering, palette: &'a Palette) -> Self {
        Self {
            graph,
            layering,
            palette,
            block: None,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn color_of(&self, vertex: LayerNode) -> Color {
        match vertex {
            LayerNode::Node(id) => self
                .palette
                .color_for(self.graph.get(id).and_then(|n| n.operation_type)),
            LayerNode::Source | LayerNode::Sink => UNKNOWN_COLOR,
        }
    }
}

impl Widget for DependencyGraphWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (min_x, max_x, min_y, max_y) = self.layering.bounds();

        Canvas::default()
            .block(self.block.clone().unwrap_or_default())
            .marker(Marker::Braille)
            .x_bounds([min_x as f64 - 2.0, max_x as f64 + 3.0])
            .y_bounds([min_y as f64 - 0.5, max_y as f64 + 0.5])
            .paint(|ctx| {
                for (from, to) in self.layering.edges() {
                    if let (Some((x1, y1)), Some((x2, y2))) = (
                        self.layering.position_of(*from),
                        self.layering.position_of(*to),
                    ) {
                        ctx.draw(&CanvasLine::new(
                            x1 as f64, y1 as f64, x2 as f64, y2 as f64, EDGE_COLOR,
                        ));
                    }
                }

                ctx.layer();

                let mut targets: Vec<LayerNode> =
                    self.layering.edges().iter().map(|(_, to)| *to).collect();
                targets.sort_unstable();
                targets.dedup();
                for (x, y) in targets
                    .into_iter()
                    .filter_map(|to| self.layering.position_of(to))
                {
                    ctx.print(
                        x as f64,
                        y as f64 + ARROW_OFFSET,
                        Span::styled(ARROW_HEAD, Style::default().fg(EDGE_COLOR)),
                    );
                }

                for vertex in self.layering.order() {
                    if let Some((x, y)) = self.layering.position_of(*vertex) {
                        let style = Style::default()
                            .fg(self.color_of(*vertex))
                            .add_modifier(Modifier::BOLD);
                        ctx.print(
                            x as f64,
                            y as f64,
                            Span::styled(format!("({})", vertex.label()), style),
                        );
                    }
                }
            })
            .render(area, buf);
    }
}
