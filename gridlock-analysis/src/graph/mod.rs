//! The resource-allocation graph for one analysis run.

pub mod resource_graph;
pub mod types;

pub use resource_graph::ResourceGraph;
pub use types::{EdgeRelation, GraphNode};
