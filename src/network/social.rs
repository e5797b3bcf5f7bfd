//! Friendship network over a label graph.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{bfs_sweep, Graph};
use crate::types::label::validate;
use crate::types::{Distance, GraphError, GraphResult, Label};

use super::roster::Roster;
use super::DistanceMemo;

/// Users connected by symmetric friendships, with memoized BFS distances.
///
/// Every friendship is stored as two directed edges. Distance queries sweep the
/// graph breadth-first and cache the whole reachable set of the source, so a
/// full [`diameter`](Self::diameter) costs at most one sweep per user.
///
/// Cached distances are tied to the graph's version: any structural change
/// discards the whole table before the next query reads it.
#[derive(Debug, Clone)]
pub struct SocialNetwork<L = String> {
    graph: Graph<L>,
    memo: DistanceMemo<L>,
    roster: Roster<L>,
    rng: StdRng,
    sweeps: usize,
}

impl<L: Label> SocialNetwork<L> {
    /// Create an empty network with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::from_parts(Graph::new(), StdRng::from_entropy())
    }

    /// Create an empty network whose [`random_user`](Self::random_user) draws are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(Graph::new(), StdRng::seed_from_u64(seed))
    }

    /// Wrap an existing graph. Its edges are kept as they are, so one-way
    /// edges stay one-way for distance queries.
    pub fn from_graph(graph: Graph<L>) -> Self {
        Self::from_parts(graph, StdRng::from_entropy())
    }

    fn from_parts(graph: Graph<L>, rng: StdRng) -> Self {
        let mut memo = DistanceMemo::new();
        memo.sync(graph.version());
        let roster = Roster::from_labels(graph.labels());
        Self {
            graph,
            memo,
            roster,
            rng,
            sweeps: 0,
        }
    }

    /// Read-only access to the underlying graph.
    pub fn graph(&self) -> &Graph<L> {
        &self.graph
    }

    pub fn user_count(&self) -> usize {
        self.graph.size()
    }

    /// Number of friendships, each counted once.
    pub fn friendship_count(&self) -> usize {
        self.graph
            .edges()
            .filter(|edge| {
                self.graph
                    .contains_edge(&edge.to, &edge.from)
                    .unwrap_or(false)
            })
            .count()
            / 2
    }

    /// All users, in no particular order.
    pub fn users(&self) -> impl Iterator<Item = &L> + '_ {
        self.graph.labels()
    }

    pub fn contains_user(&self, user: &L) -> GraphResult<bool> {
        self.graph.contains_node(user)
    }

    /// Add a user with no friends. Returns `false` if the user already existed.
    pub fn add_user(&mut self, user: L) -> GraphResult<bool> {
        let created = self.graph.add_node(user.clone())?;
        if created {
            self.roster.insert(&user);
        }
        Ok(created)
    }

    /// Remove a user and every friendship involving them.
    pub fn remove_user(&mut self, user: &L) -> GraphResult<()> {
        self.graph.remove_node(user)?;
        self.roster.remove(user);
        Ok(())
    }

    /// Make `a` and `b` friends, adding either as a user if needed.
    ///
    /// Befriending oneself only registers the user. Returns whether either
    /// direction of the friendship is new.
    pub fn add_friendship(&mut self, a: L, b: L) -> GraphResult<bool> {
        validate(&a)?;
        validate(&b)?;
        let forward = self.graph.add_edge(a.clone(), b.clone())?;
        let backward = self.graph.add_edge(b.clone(), a.clone())?;
        self.roster.insert(&a);
        self.roster.insert(&b);
        Ok(forward || backward)
    }

    /// End the friendship between `a` and `b`. Both directions must exist;
    /// otherwise nothing is removed.
    pub fn remove_friendship(&mut self, a: &L, b: &L) -> GraphResult<()> {
        for (from, to) in [(a, b), (b, a)] {
            if !self.graph.contains_node(from)? {
                return Err(GraphError::node_not_found(from));
            }
            if !self.graph.contains_edge(from, to)? {
                return Err(GraphError::edge_not_found(from, to));
            }
        }
        self.graph.remove_edge(a, b)?;
        self.graph.remove_edge(b, a)
    }

    pub fn are_friends(&self, a: &L, b: &L) -> GraphResult<bool> {
        Ok(self.graph.contains_edge(a, b)? && self.graph.contains_edge(b, a)?)
    }

    /// Copy of `user`'s friends.
    pub fn get_friends(&self, user: &L) -> GraphResult<HashSet<L>> {
        self.graph.get_adjacency(user)
    }

    /// A user drawn uniformly at random.
    ///
    /// Draws a position in the roster rather than walking the graph's hash
    /// order, so a seeded network replays the same draws.
    pub fn random_user(&mut self) -> GraphResult<L> {
        let count = self.roster.len();
        if count == 0 {
            return Err(GraphError::EmptyCollection("no users to choose from"));
        }
        let index = self.rng.gen_range(0..count);
        self.roster
            .get(index)
            .cloned()
            .ok_or(GraphError::EmptyCollection("no users to choose from"))
    }

    /// Hop count of the shortest friendship chain from `source` to `destination`.
    ///
    /// Never returns [`Distance::Unknown`].
    pub fn shortest_path(&mut self, source: &L, destination: &L) -> GraphResult<Distance> {
        for label in [source, destination] {
            if !self.graph.contains_node(label)? {
                return Err(GraphError::node_not_found(label));
            }
        }
        self.memo.sync(self.graph.version());
        if sweep_if_unknown(&self.graph, &mut self.memo, source)? {
            self.sweeps += 1;
        }
        Ok(self.memo.lookup(source, destination))
    }

    /// Longest shortest path between two distinct users that can reach each other.
    ///
    /// Pairs with no path between them are ignored. Returns
    /// [`Distance::Unreachable`] if no two distinct users are connected at all.
    pub fn diameter(&mut self) -> GraphResult<Distance> {
        if self.graph.size() < 2 {
            return Err(GraphError::EmptyCollection(
                "diameter needs at least two users",
            ));
        }
        self.memo.sync(self.graph.version());

        let mut longest: Option<usize> = None;
        for source in self.graph.labels() {
            if sweep_if_unknown(&self.graph, &mut self.memo, source)? {
                self.sweeps += 1;
            }
            let farthest = self
                .memo
                .row(source)
                .into_iter()
                .flatten()
                .filter(|(destination, _)| *destination != source)
                .map(|(_, &hops)| hops)
                .max();
            longest = longest.max(farthest);
        }
        Ok(longest.map_or(Distance::Unreachable, Distance::Computed))
    }

    /// BFS sweeps performed over the lifetime of this network.
    pub fn sweep_count(&self) -> usize {
        self.sweeps
    }

    /// Sources whose distances are currently cached.
    pub fn cached_sources(&self) -> usize {
        if self.memo.version() == self.graph.version() {
            self.memo.sources()
        } else {
            0
        }
    }

    /// Drop every cached distance.
    pub fn clear_cache(&mut self) {
        self.memo.clear();
    }
}

/// Sweep from `source` unless the memo already has its row. Returns whether a
/// sweep ran.
fn sweep_if_unknown<L: Label>(
    graph: &Graph<L>,
    memo: &mut DistanceMemo<L>,
    source: &L,
) -> GraphResult<bool> {
    if memo.has_source(source) {
        return Ok(false);
    }
    let distances = bfs_sweep(graph, source)?;
    memo.record(source.clone(), distances);
    Ok(true)
}

impl<L: Label> Default for SocialNetwork<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> std::fmt::Display for SocialNetwork<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format::render_network(&self.graph))
    }
}
