/// Weight of an edge. Zero means there is no edge.
pub type Weight = f64;

/// Tells whether a weight materializes an edge.
pub fn is_edge(weight: Weight) -> bool {
    weight != 0.0
}

/// A directed edge, borrowed from the graph holding it.
#[derive(Debug, PartialEq)]
pub struct Edge<'a, V> {
    pub source: &'a V,
    pub sink: &'a V,
    pub weight: Weight,
}

impl<'a, V> Clone for Edge<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for Edge<'a, V> {}
