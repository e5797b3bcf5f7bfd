//! Cached shortest-path distances.

use std::collections::HashMap;

use crate::types::{Distance, Label};

/// Distances memoized per source vertex.
///
/// Each BFS sweep stores one row: every vertex the source reached, with its
/// hop count. A missing row means nothing is known about that source yet
/// ([`Distance::Unknown`]); a missing destination inside a present row means
/// that destination was not reached ([`Distance::Unreachable`]).
///
/// Rows are tagged with the graph version they were computed against. Call
/// [`DistanceMemo::sync`] before reading so rows from an older graph are
/// dropped instead of served.
#[derive(Debug, Clone)]
pub struct DistanceMemo<L> {
    rows: HashMap<L, HashMap<L, usize>>,
    version: u64,
}

impl<L: Label> DistanceMemo<L> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            version: 0,
        }
    }

    /// Bring the table in line with `version`, clearing it if it was built
    /// against a different one. Returns whether anything was invalidated.
    pub fn sync(&mut self, version: u64) -> bool {
        if self.version == version {
            return false;
        }
        let stale = !self.rows.is_empty();
        if stale {
            log::debug!(
                "graph version {} -> {version}: dropping {} cached sources",
                self.version,
                self.rows.len()
            );
        }
        self.rows.clear();
        self.version = version;
        stale
    }

    /// Graph version the current rows belong to.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn lookup(&self, source: &L, destination: &L) -> Distance {
        match self.rows.get(source) {
            None => Distance::Unknown,
            Some(row) => match row.get(destination) {
                Some(&hops) => Distance::Computed(hops),
                None => Distance::Unreachable,
            },
        }
    }

    /// Whether a sweep from `source` has been recorded.
    pub fn has_source(&self, source: &L) -> bool {
        self.rows.contains_key(source)
    }

    /// Store the result of a full sweep from `source`.
    pub fn record(&mut self, source: L, distances: HashMap<L, usize>) {
        self.rows.insert(source, distances);
    }

    /// The reachable set of a recorded source.
    pub fn row(&self, source: &L) -> Option<&HashMap<L, usize>> {
        self.rows.get(source)
    }

    /// Number of swept sources.
    pub fn sources(&self) -> usize {
        self.rows.len()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl<L: Label> Default for DistanceMemo<L> {
    fn default() -> Self {
        Self::new()
    }
}
