//! Indexed user list for constant-time uniform sampling.

use std::collections::HashMap;

use crate::types::Label;

/// Every user exactly once, addressable by position.
///
/// Positions follow insertion order until a removal swaps the last user into
/// the vacated slot, so a seeded random source draws the same sequence for the
/// same sequence of mutations.
#[derive(Debug, Clone)]
pub(crate) struct Roster<L> {
    members: Vec<L>,
    positions: HashMap<L, usize>,
}

impl<L: Label> Roster<L> {
    pub(crate) fn new() -> Self {
        Self {
            members: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub(crate) fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a,
    {
        let mut roster = Self::new();
        for label in labels {
            roster.insert(label);
        }
        roster
    }

    pub(crate) fn insert(&mut self, label: &L) {
        if self.positions.contains_key(label) {
            return;
        }
        self.positions.insert(label.clone(), self.members.len());
        self.members.push(label.clone());
    }

    pub(crate) fn remove(&mut self, label: &L) {
        let Some(position) = self.positions.remove(label) else {
            return;
        };
        self.members.swap_remove(position);
        if let Some(moved) = self.members.get(position) {
            self.positions.insert(moved.clone(), position);
        }
    }

    pub(crate) fn get(&self, position: usize) -> Option<&L> {
        self.members.get(position)
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }
}
