//! social-graph: label-addressed directed graphs with friendship analytics.
//!
//! Users are vertices identified by label, friendships are pairs of directed
//! edges, and distances are breadth-first hop counts cached per source.

pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod network;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, IngestConfig, IngestMode};
pub use format::{
    ingest, ingest_file, read_labels, render_graph, render_graph_sorted, render_network,
    render_node, IngestReport,
};
pub use graph::{bfs_sweep, Adjacency, Graph, GraphBuilder, Node, VertexState};
pub use network::{DistanceMemo, SocialNetwork};
pub use types::{
    Distance, Edge, ErrorKind, GraphError, GraphResult, Label, DEFAULT_FRIENDSHIPS_PER_USER,
};
