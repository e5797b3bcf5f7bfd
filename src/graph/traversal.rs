//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, VecDeque};

use crate::types::{GraphError, GraphResult, Label};

use super::{Adjacency, Graph};

/// Lifecycle of a vertex during one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexState {
    /// Not discovered yet.
    Unvisited,
    /// Discovered and queued, not yet expanded.
    Frontier,
    /// Dequeued and expanded.
    Visited,
}

/// One breadth-first sweep from a source over outgoing edges.
///
/// `state` doubles as the visited set: a label is present once it has been
/// discovered, and absence means [`VertexState::Unvisited`].
struct Sweep<L> {
    queue: VecDeque<L>,
    state: HashMap<L, VertexState>,
    distances: HashMap<L, usize>,
}

impl<L: Label> Sweep<L> {
    fn start(source: &L) -> Self {
        let mut sweep = Self {
            queue: VecDeque::new(),
            state: HashMap::new(),
            distances: HashMap::new(),
        };
        sweep.discover(source.clone(), 0);
        sweep
    }

    fn state_of(&self, label: &L) -> VertexState {
        self.state
            .get(label)
            .copied()
            .unwrap_or(VertexState::Unvisited)
    }

    fn discover(&mut self, label: L, distance: usize) {
        self.state.insert(label.clone(), VertexState::Frontier);
        self.distances.insert(label.clone(), distance);
        self.queue.push_back(label);
    }

    fn run<A: Adjacency<L>>(mut self, graph: &Graph<L, A>) -> GraphResult<HashMap<L, usize>> {
        while let Some(current) = self.queue.pop_front() {
            let depth = self.distances.get(&current).copied().unwrap_or_default();
            for neighbor in graph.neighbors(&current)? {
                if self.state_of(neighbor) == VertexState::Unvisited {
                    self.discover(neighbor.clone(), depth + 1);
                }
            }
            self.state.insert(current, VertexState::Visited);
        }
        debug_assert!(self.state.values().all(|s| *s == VertexState::Visited));
        Ok(self.distances)
    }
}

/// BFS from `source` to every vertex it can reach.
///
/// Returns the hop count to each reachable vertex, `source` itself at 0.
/// Vertices missing from the map are unreachable.
pub fn bfs_sweep<L: Label, A: Adjacency<L>>(
    graph: &Graph<L, A>,
    source: &L,
) -> GraphResult<HashMap<L, usize>> {
    if !graph.contains_node(source)? {
        return Err(GraphError::node_not_found(source));
    }

    let distances = Sweep::start(source).run(graph)?;
    log::trace!(
        "bfs from {source}: reached {} of {} vertices",
        distances.len(),
        graph.size()
    );
    Ok(distances)
}
