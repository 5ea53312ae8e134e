// src/graph/mod.rs

//! Node mapping and dependency-graph layering.
//!
//! - [`node`] holds the node mapping built by the readers.
//! - [`layering`] assigns levels and positions for the top-down layout.

pub mod layering;
pub mod node;

pub use layering::{LayerNode, Layering, layer_graph};
pub use node::{Node, NodeId, ScheduleGraph};
