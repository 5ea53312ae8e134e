// src/render/mod.rs

//! Terminal rendering of the dependency graph and the Gantt chart.
//!
//! - [`palette`] maps operation types to colors and legend labels.
//! - [`graph_view`] draws the layered dependency graph on a canvas.
//! - [`gantt`] draws the time-ordered bar chart.
//! - [`figure`] puts both side by side.
//! - [`terminal`] shows the figure on screen or prints it as text.

pub mod figure;
pub mod gantt;
pub mod graph_view;
pub mod palette;
pub mod terminal;

pub use figure::Figure;
pub use gantt::GanttWidget;
pub use graph_view::DependencyGraphWidget;
pub use palette::Palette;
pub use terminal::{buffer_to_text, render_to_text, show};
