//! Text formats: rendering graphs and ingesting line-oriented sources.

pub mod ingest;
pub mod render;

pub use ingest::{ingest, ingest_file, read_labels, IngestReport};
pub use render::{render_graph, render_graph_sorted, render_network, render_node};
