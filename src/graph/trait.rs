use crate::graph::*;
use std::hash::Hash;

/// Interfaces shared by every representation of directed weighted graphs.
///
/// Vertices are addressed by user-supplied keys.
/// An edge exists from `source` to `sink` iff its weight is nonzero.
///
/// Operations naming a vertex fail with [GraphError::VertexNotFound]
/// if the vertex is absent. Failures never modify the graph.
pub trait Graph<V>
where
    V: Hash + Eq + Clone,
{
    /// Creates an empty graph.
    fn new() -> Self
    where
        Self: Sized;

    /// Number of vertices.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Whether there is an edge from `source` to `sink`.
    fn adjacent(&self, source: &V, sink: &V) -> Result<bool> {
        self.edge_weight(source, sink).map(is_edge)
    }

    /// Vertices reached by out-edges of `vertex`, without any specific order.
    fn neighbors(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &V> + '_>>;

    /// Adds an isolated vertex.
    ///
    /// Fails with [GraphError::VertexAlreadyExists] if `vertex` is present.
    fn add_vertex(&mut self, vertex: V) -> Result<()>;

    /// Removes a vertex together with all edges from and to it.
    fn remove_vertex(&mut self, vertex: &V) -> Result<()>;

    /// Weight of the edge from `source` to `sink`, or zero if there is none.
    fn edge_weight(&self, source: &V, sink: &V) -> Result<Weight>;

    /// Creates, updates or, when `weight` is zero, removes an edge.
    fn set_edge_weight(&mut self, source: &V, sink: &V, weight: Weight) -> Result<()>;

    /// Adds an edge of weight 1.
    ///
    /// Fails with [GraphError::EdgeAlreadyExists] if the edge is present.
    fn add_edge(&mut self, source: &V, sink: &V) -> Result<()> {
        self.add_weighted_edge(source, sink, 1.0)
    }

    /// Fails with [GraphError::EdgeAlreadyExists] if the edge is present.
    fn add_weighted_edge(&mut self, source: &V, sink: &V, weight: Weight) -> Result<()> {
        if self.adjacent(source, sink)? {
            return Err(GraphError::EdgeAlreadyExists);
        }
        self.set_edge_weight(source, sink, weight)
    }

    /// Fails with [GraphError::EdgeNotFound] if the edge is absent.
    fn remove_edge(&mut self, source: &V, sink: &V) -> Result<()> {
        if !self.adjacent(source, sink)? {
            return Err(GraphError::EdgeNotFound);
        }
        self.set_edge_weight(source, sink, 0.0)
    }

    fn vertex_visited(&self, vertex: &V) -> Result<bool>;
    fn set_vertex_visited(&mut self, vertex: &V, visited: bool) -> Result<()>;
    /// Marks all vertices unvisited.
    fn reset_vertices_visited(&mut self);

    /// Iterates over vertices in the order of their dense IDs.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;
    /// Iterates over edges without any specific order.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<'_, V>> + '_>;

    fn debug(&self) -> GraphDebug<'_, V>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
