//! Adjacency containers.

use std::collections::{btree_set, hash_set, BTreeSet, HashSet};
use std::hash::Hash;

/// A set of labels supporting insert, remove, membership and iteration.
///
/// `Graph` is generic over this so the storage can be swapped without a
/// second node type. `Clone` is how snapshots are taken.
pub trait Adjacency<L>: Default + Clone {
    type Iter<'a>: Iterator<Item = &'a L>
    where
        Self: 'a,
        L: 'a;

    /// Insert a label, returning `false` if it was already present.
    fn insert(&mut self, label: L) -> bool;

    /// Remove a label, returning `false` if it was absent.
    fn remove(&mut self, label: &L) -> bool;

    fn contains(&self, label: &L) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Self::Iter<'_>;
}

impl<L: Eq + Hash + Clone> Adjacency<L> for HashSet<L> {
    type Iter<'a>
        = hash_set::Iter<'a, L>
    where
        L: 'a;

    fn insert(&mut self, label: L) -> bool {
        HashSet::insert(self, label)
    }

    fn remove(&mut self, label: &L) -> bool {
        HashSet::remove(self, label)
    }

    fn contains(&self, label: &L) -> bool {
        HashSet::contains(self, label)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}

/// Ordered storage: iteration yields neighbors in ascending label order.
impl<L: Ord + Clone> Adjacency<L> for BTreeSet<L> {
    type Iter<'a>
        = btree_set::Iter<'a, L>
    where
        L: 'a;

    fn insert(&mut self, label: L) -> bool {
        BTreeSet::insert(self, label)
    }

    fn remove(&mut self, label: &L) -> bool {
        BTreeSet::remove(self, label)
    }

    fn contains(&self, label: &L) -> bool {
        BTreeSet::contains(self, label)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }
}
