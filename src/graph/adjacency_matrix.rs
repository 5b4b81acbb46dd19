use crate::graph::*;
use std::hash::Hash;
use tracing::{debug, trace};

/// A directed weighted graph backed by a dense $\|V\| \times \|V\|$ row-major weight matrix.
///
/// Favors small and dense graphs with frequent lookups.
/// The matrix is reallocated to its exact size on every change of vertices.
///
/// |                    | Complexity         |
/// | ------------------ | ------------------ |
/// | `add_vertex`       | $O(\|V\|^2)$       |
/// | `remove_vertex`    | $O(\|V\|^2)$       |
/// | `adjacent`         | $O(1)$             |
/// | `neighbors`        | $O(\|V\|)$         |
/// | `edge_weight`      | $O(1)$             |
/// | `set_edge_weight`  | $O(1)$             |
/// | `edge_count`       | $O(\|V\|^2)$       |
#[derive(Clone)]
pub struct AdjacencyMatrixGraph<V>
where
    V: Hash + Eq + Clone,
{
    vertices: VertexIndex<V>,
    matrix: Vec<Weight>,
}

impl<V> Default for AdjacencyMatrixGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for AdjacencyMatrixGraph<V>
where
    V: Hash + Eq + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyMatrixGraph {{")?;
        for (v, row) in self.vertices.keys().zip(self.rows()) {
            writeln!(f, "{:?}: {:?}", v, row)?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<V> AdjacencyMatrixGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn cell(&self, source: VertexId, sink: VertexId) -> usize {
        source.to_raw() * self.size() + sink.to_raw()
    }

    fn row(&self, vid: VertexId) -> &[Weight] {
        let size = self.size();
        let start = vid.to_raw() * size;
        &self.matrix[start..start + size]
    }

    fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        (0..self.size()).map(move |raw| self.row(VertexId::new(raw)))
    }
}

impl<V> Graph<V> for AdjacencyMatrixGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn new() -> Self {
        Self {
            vertices: VertexIndex::new(),
            matrix: Vec::new(),
        }
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn edge_count(&self) -> usize {
        self.matrix.iter().filter(|w| is_edge(**w)).count()
    }

    fn neighbors(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &V> + '_>> {
        let vid = self.vertices.id(vertex)?;
        let it = self
            .row(vid)
            .iter()
            .enumerate()
            .filter(|(_, w)| is_edge(**w))
            .map(move |(raw, _)| self.vertices.key(VertexId::new(raw)));
        Ok(Box::new(it))
    }

    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        let old_size = self.size();
        let vid = self.vertices.insert(vertex)?;
        let size = old_size + 1;
        self.matrix.reserve_exact(size * size - self.matrix.len());
        self.matrix.resize(size * size, 0.0);
        // From the last row backwards, so that no row is overwritten before it moves.
        // The new row lies entirely in the zeroed tail.
        for row in (0..old_size).rev() {
            self.matrix
                .copy_within(row * old_size..(row + 1) * old_size, row * size);
            self.matrix[row * size + old_size] = 0.0;
        }
        debug!(size, capacity = self.matrix.capacity(), "grew adjacency matrix");
        trace!(vertex = vid.to_raw(), "added vertex");
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let old_size = self.size();
        let removed = self.vertices.remove(vertex)?.to_raw();
        let size = old_size - 1;
        let mut matrix = Vec::with_capacity(size * size);
        for (row, weights) in self.matrix.chunks_exact(old_size).enumerate() {
            if row == removed {
                continue;
            }
            let kept = weights
                .iter()
                .enumerate()
                .filter(|(col, _)| *col != removed)
                .map(|(_, w)| *w);
            matrix.extend(kept);
        }
        self.matrix = matrix;
        debug!(size, capacity = self.matrix.capacity(), "shrank adjacency matrix");
        trace!(vertex = removed, "removed vertex");
        Ok(())
    }

    fn edge_weight(&self, source: &V, sink: &V) -> Result<Weight> {
        let (src, snk) = self.vertices.ids(source, sink)?;
        Ok(self.matrix[self.cell(src, snk)])
    }

    fn set_edge_weight(&mut self, source: &V, sink: &V, weight: Weight) -> Result<()> {
        let (src, snk) = self.vertices.ids(source, sink)?;
        let cell = self.cell(src, snk);
        self.matrix[cell] = if is_edge(weight) { weight } else { 0.0 };
        trace!(source = src.to_raw(), sink = snk.to_raw(), weight, "set edge");
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
            .vertices
            .keys()
            .zip(self.rows())
            .flat_map(move |(source, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, w)| is_edge(**w))
                    .map(move |(raw, w)| Edge {
                        source,
                        sink: self.vertices.key(VertexId::new(raw)),
                        weight: *w,
                    })
            });
        Box::new(it)
    }
}
