//! Identity-keyed containers.
//!
//! Nodes and groups are addressed by their arena id, never by coordinate
//! value: two distinct nodes may share a position while a mesh is being
//! built, and must stay distinct.

use std::collections::{HashMap, HashSet};

use crate::types::ArenaId;

/// Insertion-ordered set of arena ids
#[derive(Debug, Clone)]
pub struct IdSet<I: ArenaId> {
    order: Vec<I>,
    members: HashSet<I>,
}

impl<I: ArenaId> Default for IdSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId> IdSet<I> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `false` if the id was already present
    pub fn insert(&mut self, id: I) -> bool {
        if self.members.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: I) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in insertion order
    pub fn as_slice(&self) -> &[I] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = I> + '_ {
        self.order.iter().copied()
    }

    /// Add every id of `other` that is not present yet
    pub fn union_with(&mut self, other: &Self) {
        for id in other.iter() {
            self.insert(id);
        }
    }
}

impl<I: ArenaId> FromIterator<I> for IdSet<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<I: ArenaId> PartialEq for IdSet<I> {
    /// Set equality, insertion order is ignored
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<I: ArenaId> Eq for IdSet<I> {}

/// Map keyed by arena id
#[derive(Debug, Clone)]
pub struct IdMap<I: ArenaId, V> {
    entries: HashMap<I, V>,
}

impl<I: ArenaId, V> Default for IdMap<I, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, V> IdMap<I, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, id: I, value: V) -> Option<V> {
        self.entries.insert(id, value)
    }

    pub fn get(&self, id: I) -> Option<&V> {
        self.entries.get(&id)
    }

    /// Entry for `id`, created with `V::default()` if missing
    pub fn entry_or_default(&mut self, id: I) -> &mut V
    where
        V: Default,
    {
        self.entries.entry(id).or_default()
    }
}
