use crate::graph::*;
use std::hash::Hash;
use tracing::{debug, trace};

/// A directed weighted graph backed by a $\|V\| \times \|E\|$ row-major incidence matrix.
///
/// Column $j$ stands for the $j$-th edge.
/// The row of its source holds the weight and the row of its sink holds the negated weight.
/// All other rows of that column are zero.
/// A self-loop only has the weight in the row of its vertex.
///
/// Endpoints of every column are also recorded,
/// so directions survive negative weights and self-loops.
///
/// Favors edge-centric use at the cost of $O(\|E\|)$ adjacency checks.
///
/// |                    | Complexity                |
/// | ------------------ | ------------------------- |
/// | `add_vertex`       | $O(\|V\| \|E\|)$          |
/// | `remove_vertex`    | $O(\|V\| \|E\|)$          |
/// | `adjacent`         | $O(\|E\|)$                |
/// | `neighbors`        | $O(\|E\|)$                |
/// | `edge_weight`      | $O(\|E\|)$                |
/// | `set_edge_weight`  | $O(\|V\| \|E\|)$ when an edge comes or goes, otherwise $O(\|E\|)$ |
/// | `edge_count`       | $O(1)$                    |
#[derive(Clone)]
pub struct IncidenceMatrixGraph<V>
where
    V: Hash + Eq + Clone,
{
    vertices: VertexIndex<V>,
    matrix: Vec<Weight>,
    /// `(source, sink)` of each column
    columns: Vec<(VertexId, VertexId)>,
}

impl<V> Default for IncidenceMatrixGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for IncidenceMatrixGraph<V>
where
    V: Hash + Eq + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "IncidenceMatrixGraph {{")?;
        let edges = self.edge_count();
        for (raw, v) in self.vertices.keys().enumerate() {
            writeln!(f, "{:?}: {:?}", v, &self.matrix[raw * edges..(raw + 1) * edges])?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<V> IncidenceMatrixGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn cell(&self, vid: VertexId, column: usize) -> usize {
        vid.to_raw() * self.edge_count() + column
    }

    fn find_column(&self, source: VertexId, sink: VertexId) -> Option<usize> {
        self.columns
            .iter()
            .position(|(src, snk)| *src == source && *snk == sink)
    }

    fn write_column(&mut self, column: usize, weight: Weight) {
        let (src, snk) = self.columns[column];
        let cell = self.cell(src, column);
        self.matrix[cell] = weight;
        if src != snk {
            let cell = self.cell(snk, column);
            self.matrix[cell] = -weight;
        }
    }

    fn push_column(&mut self, source: VertexId, sink: VertexId, weight: Weight) {
        let rows = self.size();
        let old_edges = self.edge_count();
        let edges = old_edges + 1;
        self.matrix.reserve_exact(rows * edges - self.matrix.len());
        self.matrix.resize(rows * edges, 0.0);
        // From the last row backwards, so that no row is overwritten before it moves.
        for row in (0..rows).rev() {
            self.matrix
                .copy_within(row * old_edges..(row + 1) * old_edges, row * edges);
            self.matrix[row * edges + old_edges] = 0.0;
        }
        self.columns.push((source, sink));
        self.write_column(old_edges, weight);
        debug!(rows, edges, "appended a column to incidence matrix");
    }

    /// Rebuilds the matrix out of the kept columns, leaving out `dropped_row` if any.
    fn compact(&mut self, rows: usize, dropped_row: Option<VertexId>, kept_columns: &[usize]) {
        let old_edges = self.edge_count();
        let kept_rows = rows - usize::from(dropped_row.is_some());
        let mut matrix = Vec::with_capacity(kept_rows * kept_columns.len());
        for row in 0..rows {
            if Some(VertexId::new(row)) == dropped_row {
                continue;
            }
            let cells = &self.matrix[row * old_edges..(row + 1) * old_edges];
            matrix.extend(kept_columns.iter().map(|col| cells[*col]));
        }
        self.matrix = matrix;
        self.columns = kept_columns.iter().map(|col| self.columns[*col]).collect();
        debug!(
            rows = kept_rows,
            edges = kept_columns.len(),
            "compacted incidence matrix"
        );
    }
}

impl<V> Graph<V> for IncidenceMatrixGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn new() -> Self {
        Self {
            vertices: VertexIndex::new(),
            matrix: Vec::new(),
            columns: Vec::new(),
        }
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn edge_count(&self) -> usize {
        self.columns.len()
    }

    fn adjacent(&self, source: &V, sink: &V) -> Result<bool> {
        let (src, snk) = self.vertices.ids(source, sink)?;
        Ok(self.find_column(src, snk).is_some())
    }

    fn neighbors(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &V> + '_>> {
        let vid = self.vertices.id(vertex)?;
        let it = self
            .columns
            .iter()
            .filter(move |(src, _)| *src == vid)
            .map(move |(_, snk)| self.vertices.key(*snk));
        Ok(Box::new(it))
    }

    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        let vid = self.vertices.insert(vertex)?;
        let edges = self.edge_count();
        self.matrix.reserve_exact(edges);
        self.matrix.resize(self.matrix.len() + edges, 0.0);
        trace!(vertex = vid.to_raw(), "added vertex");
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let rows = self.size();
        let removed = self.vertices.remove(vertex)?;
        let kept_columns: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, (src, snk))| *src != removed && *snk != removed)
            .map(|(col, _)| col)
            .collect();
        let dropped_edges = self.edge_count() - kept_columns.len();
        self.compact(rows, Some(removed), &kept_columns);
        for (src, snk) in self.columns.iter_mut() {
            *src = src.shifted_past(removed);
            *snk = snk.shifted_past(removed);
        }
        trace!(vertex = removed.to_raw(), dropped_edges, "removed vertex");
        Ok(())
    }

    fn edge_weight(&self, source: &V, sink: &V) -> Result<Weight> {
        let (src, snk) = self.vertices.ids(source, sink)?;
        Ok(self
            .find_column(src, snk)
            .map_or(0.0, |col| self.matrix[self.cell(src, col)]))
    }

    fn set_edge_weight(&mut self, source: &V, sink: &V, weight: Weight) -> Result<()> {
        let (src, snk) = self.vertices.ids(source, sink)?;
        match (self.find_column(src, snk), is_edge(weight)) {
            (Some(col), true) => self.write_column(col, weight),
            (Some(col), false) => {
                let kept_columns: Vec<usize> =
                    (0..self.edge_count()).filter(|x| *x != col).collect();
                self.compact(self.size(), None, &kept_columns);
            }
            (None, true) => self.push_column(src, snk, weight),
            (None, false) => return Ok(()),
        }
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
            .columns
            .iter()
            .enumerate()
            .map(move |(col, (src, snk))| Edge {
                source: self.vertices.key(*src),
                sink: self.vertices.key(*snk),
                weight: self.matrix[self.cell(*src, col)],
            });
        Box::new(it)
    }
}
