// src/render/palette.rs

use std::collections::BTreeMap;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::config::model::{ConfigFile, OperationStyle, default_operation_styles};

/// Color for anchors, placeholders and unrecognised operation types.
pub const UNKNOWN_COLOR: Color = Color::Rgb(128, 128, 128);

/// Operation-type colors shared by both charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: BTreeMap<u32, OperationStyle>,
}

impl Palette {
    pub fn new(styles: BTreeMap<u32, OperationStyle>) -> Self {
        Self { styles }
    }

    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self::new(cfg.operations().clone())
    }

    pub fn color_for(&self, operation_type: Option<u32>) -> Color {
        operation_type
            .and_then(|op| self.styles.get(&op))
            .map_or(UNKNOWN_COLOR, |style| style.color)
    }

    pub fn label_for(&self, operation_type: Option<u32>) -> String {
        match operation_type {
            Some(op) => self
                .styles
                .get(&op)
                .map_or_else(|| format!("Type {op}"), |style| style.label.clone()),
            None => "unknown".to_string(),
        }
    }

    /// One-line legend: `■ Addition (Type 1)  ■ Multiplication (Type 2)`.
    pub fn legend(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.styles.len() * 2);
        for (op, style) in &self.styles {
            spans.push(Span::styled(" ■ ", Style::default().fg(style.color)));
            spans.push(Span::raw(format!("{} (Type {op})", style.label)));
        }
        spans.push(Span::styled(" ■ ", Style::default().fg(UNKNOWN_COLOR)));
        spans.push(Span::raw("unknown "));
        Line::from(spans)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(default_operation_styles())
    }
}
