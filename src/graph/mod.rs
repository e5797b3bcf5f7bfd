//! In-memory graph operations: the core data structure.

pub mod adjacency;
pub mod builder;
pub mod label_graph;
pub mod node;
pub mod traversal;

pub use adjacency::Adjacency;
pub use builder::GraphBuilder;
pub use label_graph::Graph;
pub use node::Node;
pub use traversal::{bfs_sweep, VertexState};
