// src/render/gantt.rs

//! Horizontal-bar schedule chart.
//!
//! One row per scheduled node, ordered by start time. Bars are scaled so the
//! whole schedule span fits the chart width; the two bottom rows hold the
//! time axis and its tick labels.

use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Widget},
};

use crate::graph::ScheduleGraph;
use crate::render::palette::Palette;

const BAR: &str = "█";
const GRID_COLOR: Color = Color::DarkGray;
const AXIS_ROWS: u16 = 2;

/// Gantt chart of every node with a known start time.
pub struct GanttWidget<'a> {
    graph: &'a ScheduleGraph,
    palette: &'a Palette,
    block: Option<Block<'a>>,
}

impl<'a> GanttWidget<'a> {
    pub fn new(graph: &'a ScheduleGraph, palette: &'a Palette) -> Self {
        Self {
            graph,
            palette,
            block: None,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

/// Maps schedule times onto chart columns.
#[derive(Debug, Clone, Copy)]
struct TimeScale {
    start: i64,
    end: i64,
    left: u16,
    width: u16,
}

impl TimeScale {
    fn new(start: i64, end: i64, left: u16, width: u16) -> Self {
        let end = if end > start { end } else { start.saturating_add(1) };
        Self {
            start,
            end,
            left,
            width,
        }
    }

    fn column(&self, t: i64) -> u16 {
        let span = self.end.saturating_sub(self.start) as f64;
        let frac = (t.saturating_sub(self.start) as f64 / span).clamp(0.0, 1.0);
        self.left + (frac * f64::from(self.width.saturating_sub(1))).round() as u16
    }
}

/// Smallest 1/2/5 x 10^k step giving at most `max_ticks` intervals over `span`.
fn tick_step(span: i64, max_ticks: i64) -> i64 {
    let max_ticks = max_ticks.max(1);
    let mut magnitude = 1i64;
    loop {
        for factor in [1, 2, 5] {
            let Some(step) = magnitude.checked_mul(factor) else {
                return i64::MAX;
            };
            // A reach past i64::MAX covers any span.
            if step.checked_mul(max_ticks).is_none_or(|reach| span <= reach) {
                return step;
            }
        }
        magnitude = magnitude.saturating_mul(10);
    }
}

impl Widget for GanttWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        let rows = self.graph.by_start_time();
        let Some((t0, t1)) = self.graph.time_span() else {
            buf.set_string(
                inner.left(),
                inner.top(),
                "no scheduled operations",
                Style::default().fg(GRID_COLOR),
            );
            return;
        };

        let label_width = rows
            .iter()
            .map(|(id, _)| format!("Node {id}").len() as u16)
            .max()
            .unwrap_or(0)
            .max(4)
            + 1;

        if inner.width <= label_width + 2 || inner.height <= AXIS_ROWS {
            return;
        }

        let chart_width = inner.width - label_width;
        let scale = TimeScale::new(t0, t1, inner.left() + label_width, chart_width);
        let axis_y = inner.bottom() - AXIS_ROWS;
        let bar_rows = axis_y - inner.top();

        let span = scale.end.saturating_sub(scale.start);
        let step = tick_step(span, i64::from(chart_width / 8));
        let first_tick = t0.div_euclid(step) * step;
        let ticks: Vec<i64> = iter::successors(Some(first_tick), |t| t.checked_add(step))
            .take_while(|t| *t <= scale.end)
            .filter(|t| *t >= t0)
            .collect();

        // Dashed grid behind the bars.
        for t in &ticks {
            let x = scale.column(*t);
            for y in inner.top()..axis_y {
                buf[(x, y)]
                    .set_symbol("┆")
                    .set_style(Style::default().fg(GRID_COLOR));
            }
        }

        for (row, (id, node)) in rows.iter().enumerate().take(usize::from(bar_rows)) {
            let y = inner.top() + row as u16;
            buf.set_string(
                inner.left(),
                y,
                format!("Node {id}"),
                Style::default().add_modifier(Modifier::BOLD),
            );

            let (Some(start), Some(end)) = (node.scheduled_time, node.end_time) else {
                continue;
            };
            let x0 = scale.column(start);
            let x1 = scale.column(end).max(x0 + 1);
            let style = Style::default().fg(self.palette.color_for(node.operation_type));
            for x in x0..x1.min(inner.right()) {
                buf[(x, y)].set_symbol(BAR).set_style(style);
            }
        }

        // Axis line and tick labels.
        for x in scale.left..inner.right() {
            buf[(x, axis_y)].set_symbol("─");
        }
        buf.set_string(
            inner.left(),
            axis_y + 1,
            "Time",
            Style::default().add_modifier(Modifier::BOLD),
        );
        let mut next_free = scale.left;
        for t in &ticks {
            let x = scale.column(*t);
            buf[(x, axis_y)].set_symbol("┴");
            let label = t.to_string();
            if x >= next_free && x + label.len() as u16 <= inner.right() {
                buf.set_string(x, axis_y + 1, &label, Style::default());
                next_free = x + label.len() as u16 + 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;
    use crate::render::terminal::buffer_to_text;

    #[test]
    fn tick_steps_are_round_numbers() {
        assert_eq!(tick_step(10, 10), 1);
        assert_eq!(tick_step(14, 5), 5);
        assert_eq!(tick_step(300, 4), 100);
        assert_eq!(tick_step(0, 0), 1);
        assert_eq!(tick_step(i64::MAX, 1), i64::MAX);
        assert_eq!(tick_step(i64::MAX, 20), 500_000_000_000_000_000);
    }

    #[test]
    fn times_near_the_integer_limit_still_render() {
        let mut graph = ScheduleGraph::new();
        graph.insert(1, Node::scheduled(1, i64::MAX - 1, i64::MAX));
        graph.insert(2, Node::scheduled(2, i64::MAX, i64::MAX));
        let palette = Palette::default();

        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        GanttWidget::new(&graph, &palette).render(area, &mut buf);

        assert!(buffer_to_text(&buf).contains("Node 1"));
    }

    #[test]
    fn time_scale_spans_chart_width() {
        let scale = TimeScale::new(10, 20, 5, 11);
        assert_eq!(scale.column(10), 5);
        assert_eq!(scale.column(15), 10);
        assert_eq!(scale.column(20), 15);
        assert_eq!(scale.column(99), 15);
    }

    fn bar_cell(buf: &Buffer, y: u16) -> &ratatui::buffer::Cell {
        (0..buf.area.width)
            .map(|x| &buf[(x, y)])
            .find(|cell| cell.symbol() == BAR)
            .unwrap()
    }

    #[test]
    fn rows_follow_start_time() {
        let mut graph = ScheduleGraph::new();
        graph.insert(7, Node::scheduled(1, 6, 9));
        graph.insert(3, Node::scheduled(2, 0, 6));
        graph.insert(5, Node::scheduled(9, 1, 4));
        graph.add_edge(3, 42);
        let palette = Palette::default();

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        GanttWidget::new(&graph, &palette).render(area, &mut buf);

        let lines: Vec<String> = buffer_to_text(&buf).lines().map(str::to_string).collect();
        assert!(lines[0].starts_with("Node 3"));
        assert!(lines[1].starts_with("Node 5"));
        assert!(lines[2].starts_with("Node 7"));
        assert!(lines[0].contains(BAR));
        assert!(!buffer_to_text(&buf).contains("Node 42"));
        assert!(lines[5].starts_with("Time"));
    }

    #[test]
    fn bars_take_the_operation_color() {
        let mut graph = ScheduleGraph::new();
        graph.insert(3, Node::scheduled(2, 0, 6));
        graph.insert(5, Node::scheduled(9, 1, 4));
        graph.insert(7, Node::scheduled(1, 6, 9));
        let palette = Palette::default();

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        GanttWidget::new(&graph, &palette).render(area, &mut buf);

        assert_eq!(bar_cell(&buf, 0).fg, Color::Rgb(255, 99, 71));
        assert_eq!(bar_cell(&buf, 1).fg, crate::render::palette::UNKNOWN_COLOR);
        assert_eq!(bar_cell(&buf, 2).fg, Color::Rgb(65, 105, 225));
    }

    #[test]
    fn empty_schedule_says_so() {
        let graph = ScheduleGraph::new();
        let palette = Palette::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        GanttWidget::new(&graph, &palette).render(area, &mut buf);

        assert!(buffer_to_text(&buf).contains("no scheduled operations"));
    }
}
