use crate::graph::{GraphError, Result};
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// Dense ID for vertices, which is essentially a `usize` in `0..size`.
///
/// IDs are handed out in insertion order.
/// Removing a vertex shifts every greater ID down by one,
/// so the IDs of a graph always form a contiguous range.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The ID this one becomes after `removed` is taken out of the graph.
    pub fn shifted_past(self, removed: VertexId) -> Self {
        if self > removed {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

/// Translation between user-supplied vertex keys and dense [VertexId]'s,
/// together with per-vertex bookkeeping.
///
/// Every graph representation owns one of these and keeps its own storage
/// in step with it.
#[derive(Clone)]
pub struct VertexIndex<V>
where
    V: Hash + Eq + Clone,
{
    ids: BiHashMap<VertexId, V, RandomState, RandomState>,
    visited: Vec<bool>,
}

impl<V> Default for VertexIndex<V>
where
    V: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VertexIndex<V>
where
    V: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            ids: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            visited: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn contains(&self, key: &V) -> bool {
        self.ids.contains_right(key)
    }

    pub fn id(&self, key: &V) -> Result<VertexId> {
        self.ids
            .get_by_right(key)
            .copied()
            .ok_or(GraphError::VertexNotFound)
    }

    /// Resolves both endpoints of an edge.
    pub fn ids(&self, source: &V, sink: &V) -> Result<(VertexId, VertexId)> {
        Ok((self.id(source)?, self.id(sink)?))
    }

    /// # Panics
    ///
    /// If `vid` is out of `0..len`.
    pub fn key(&self, vid: VertexId) -> &V {
        self.ids
            .get_by_left(&vid)
            .unwrap_or_else(|| panic!("{:?} is out of 0..{}", vid, self.len()))
    }

    /// Iterates over keys in the order of their IDs.
    pub fn keys(&self) -> impl Iterator<Item = &V> + '_ {
        (0..self.len()).map(move |raw| self.key(VertexId::new(raw)))
    }

    /// Registers a new key with ID equal to the current length.
    pub fn insert(&mut self, key: V) -> Result<VertexId> {
        if self.contains(&key) {
            return Err(GraphError::VertexAlreadyExists);
        }
        let vid = VertexId::new(self.len());
        self.ids.insert(vid, key);
        self.visited.push(false);
        Ok(vid)
    }

    /// Forgets a key and returns the ID it used to have.
    /// IDs greater than the returned one are shifted down.
    pub fn remove(&mut self, key: &V) -> Result<VertexId> {
        let (removed, _) = self
            .ids
            .remove_by_right(key)
            .ok_or(GraphError::VertexNotFound)?;
        self.visited.remove(removed.to_raw());
        // ascending, so that the slot one below is always vacant
        for raw in removed.next().to_raw()..=self.visited.len() {
            if let Some((vid, key)) = self.ids.remove_by_left(&VertexId::new(raw)) {
                self.ids.insert(vid.shifted_past(removed), key);
            }
        }
        Ok(removed)
    }

    pub fn visited(&self, key: &V) -> Result<bool> {
        let vid = self.id(key)?;
        Ok(self.visited[vid.to_raw()])
    }

    pub fn set_visited(&mut self, key: &V, visited: bool) -> Result<()> {
        let vid = self.id(key)?;
        self.visited[vid.to_raw()] = visited;
        Ok(())
    }

    pub fn reset_visited(&mut self) {
        self.visited.iter_mut().for_each(|x| *x = false);
    }
}
