use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

/// A directed weighted graph where each vertex owns a map from its neighbors to edge weights.
///
/// Favors sparse graphs.
///
/// |                    | Complexity                      |
/// | ------------------ | ------------------------------- |
/// | `add_vertex`       | $O(1)$                          |
/// | `remove_vertex`    | $O(\|V\| + \|E\|)$              |
/// | `adjacent`         | $O(1)$                          |
/// | `neighbors`        | $O(1)$ and $O(1)$ on each `.next` |
/// | `edge_weight`      | $O(1)$                          |
/// | `set_edge_weight`  | $O(1)$                          |
/// | `edge_count`       | $O(\|V\|)$                      |
#[derive(Clone)]
pub struct AdjacencyListGraph<V>
where
    V: Hash + Eq + Clone,
{
    vertices: VertexIndex<V>,
    out_edges: Vec<HashMap<VertexId, Weight, RandomState>>,
}

impl<V> Default for AdjacencyListGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for AdjacencyListGraph<V>
where
    V: Hash + Eq + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyListGraph {{")?;
        for (raw, out_edges) in self.out_edges.iter().enumerate() {
            writeln!(f, "{:?}:", self.vertices.key(VertexId::new(raw)))?;
            for (sink, weight) in out_edges {
                writeln!(f, "  -> {:?} by {}", self.vertices.key(*sink), weight)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<V> Graph<V> for AdjacencyListGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn new() -> Self {
        Self {
            vertices: VertexIndex::new(),
            out_edges: Vec::new(),
        }
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn edge_count(&self) -> usize {
        self.out_edges.iter().map(|x| x.len()).sum()
    }

    fn adjacent(&self, source: &V, sink: &V) -> Result<bool> {
        let (src, snk) = self.vertices.ids(source, sink)?;
        Ok(self.out_edges[src.to_raw()].contains_key(&snk))
    }

    fn neighbors(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &V> + '_>> {
        let vid = self.vertices.id(vertex)?;
        let it = self.out_edges[vid.to_raw()]
            .keys()
            .map(move |snk| self.vertices.key(*snk));
        Ok(Box::new(it))
    }

    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        let vid = self.vertices.insert(vertex)?;
        self.out_edges.push(HashMap::with_hasher(RandomState::new()));
        trace!(vertex = vid.to_raw(), "added vertex");
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let removed = self.vertices.remove(vertex)?;
        self.out_edges.remove(removed.to_raw());
        for out_edges in self.out_edges.iter_mut() {
            out_edges.remove(&removed);
            if out_edges.keys().any(|snk| *snk > removed) {
                let renumbered: HashMap<_, _, RandomState> = out_edges
                    .drain()
                    .map(|(snk, weight)| (snk.shifted_past(removed), weight))
                    .collect();
                *out_edges = renumbered;
            }
        }
        trace!(vertex = removed.to_raw(), "removed vertex");
        Ok(())
    }

    fn edge_weight(&self, source: &V, sink: &V) -> Result<Weight> {
        let (src, snk) = self.vertices.ids(source, sink)?;
        Ok(self.out_edges[src.to_raw()]
            .get(&snk)
            .copied()
            .unwrap_or(0.0))
    }

    fn set_edge_weight(&mut self, source: &V, sink: &V, weight: Weight) -> Result<()> {
        let (src, snk) = self.vertices.ids(source, sink)?;
        let out_edges = &mut self.out_edges[src.to_raw()];
        if is_edge(weight) {
            out_edges.insert(snk, weight);
            trace!(source = src.to_raw(), sink = snk.to_raw(), weight, "set edge");
        } else if out_edges.remove(&snk).is_some() {
            trace!(source = src.to_raw(), sink = snk.to_raw(), "removed edge");
        }
        Ok(())
    }

    fn vertex_visited(&self, vertex: &V) -> Result<bool> {
        self.vertices.visited(vertex)
    }

    fn set_vertex_visited(&mut self, vertex: &V, visited: bool) -> Result<()> {
        self.vertices.set_visited(vertex, visited)
    }

    fn reset_vertices_visited(&mut self) {
        self.vertices.reset_visited();
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.keys())
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<'_, V>> + '_> {
        let it = self
            .out_edges
            .iter()
            .enumerate()
            .flat_map(move |(raw, out_edges)| {
                let source = self.vertices.key(VertexId::new(raw));
                out_edges.iter().map(move |(snk, weight)| Edge {
                    source,
                    sink: self.vertices.key(*snk),
                    weight: *weight,
                })
            });
        Box::new(it)
    }
}
